use thiserror::Error;

/// Errors produced while decoding a JSON weather document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to parse JSON document")]
    Syntax(#[from] serde_json::Error),

    #[error("a weather record must be a JSON object")]
    NotAnObject,

    #[error("expected a weather record object or an array of record objects")]
    UnsupportedDocument,
}
