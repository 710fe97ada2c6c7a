use thiserror::Error;

/// SGAL統一エラー型
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Portal API error: {message} (status: {status})")]
    PortalApi { status: u16, message: String },

    #[error("Sample not found: {0}")]
    SampleNotFound(String),

    #[error("Ambiguous sample name '{name}'. Candidates: {}", candidates.join(", "))]
    AmbiguousSample {
        name: String,
        candidates: Vec<String>,
    },

    #[error("Invalid sample metadata: {0}")]
    InvalidMetadata(String),

    #[error("Failed to create sample '{sample}': {message}")]
    Activation { sample: String, message: String },

    #[error("Invalid data item: {0}")]
    InvalidItem(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Zip extraction error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

impl GalleryError {
    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            GalleryError::Network(_) => true,
            GalleryError::PortalApi { status, .. } => {
                // 5xx エラーはリトライ可能
                *status >= 500 && *status < 600
            }
            _ => false,
        }
    }
}
