#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("inconsistent sent state")]
    InconsistentSentState,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
