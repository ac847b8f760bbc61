use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("malformed request: {0}")]
    MalformedRequest(#[source] serde_json::Error),
    #[error("request must be a JSON object")]
    RequestNotAnObject,
    #[error("failed to encode reply: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}
