pub mod documents;
pub mod health;

pub use documents::{fetch_document, list_documents, upload_document};
pub use health::health_check;
