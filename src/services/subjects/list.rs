use super::SubjectService;
use crate::errors::Result;
use crate::models::subjects::{entities::Subject, requests::SubjectFilter};

pub async fn list_subjects(service: &SubjectService, filter: SubjectFilter) -> Result<Vec<Subject>> {
    service.storage.list_subjects(filter).await
}
