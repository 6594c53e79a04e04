pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod search;
pub mod validate;

pub use extractor::{SafeGradeId, SafeIDI64};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
