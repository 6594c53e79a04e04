use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: String,
}
