use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("fetch failed")]
    Fetch(#[from] reqwest::Error),

    #[error("{0} fetch returned status {1}")]
    FetchStatus(&'static str, reqwest::StatusCode),

    #[error("{0}")]
    Validation(String),

    #[error("cart storage error")]
    Storage(#[from] std::io::Error),

    #[error("malformed data")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid handoff url")]
    Url(#[from] url::ParseError),
}

pub type AppResult<T> = Result<T, AppError>;
