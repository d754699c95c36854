use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("malformed service account key: {0}")]
    MalformedKey(#[from] jsonwebtoken::errors::Error),

    #[error("token exchange rejected: status = {status}, body = {body}")]
    ExchangeRejected { status: StatusCode, body: String },

    #[error("token exchange transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum PushError {
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("push endpoint rejected message: status = {status}, body = {body}")]
    SendRejected { status: StatusCode, body: String },

    #[error("push provider error: {0}")]
    Provider(String),

    #[error("timestamp format error: {0}")]
    TimestampFormat(#[from] time::error::Format),

    #[error("push transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
