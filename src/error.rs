use thiserror::Error;

#[derive(Error, Debug)]
pub enum DonorscoreError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("no assessment results found; complete the assessment first")]
    MissingResults,

    #[error("admin session required: {0}")]
    AdminRequired(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid share url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DonorscoreError>;
