use fieldmap::MarshalError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Marshal(#[from] MarshalError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
