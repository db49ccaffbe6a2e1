#[derive(Debug, thiserror::Error)]
pub enum ArtbotError {
    #[error("Unable to reach the bulk data index: {0}")]
    Discovery(String),

    #[error("No download link found for bulk data type '{0}'")]
    NoDownloadLink(String),

    #[error("Unable to download bulk data: {0}")]
    Download(String),

    #[error("Unable to read card cache: {0}")]
    CacheRead(String),

    #[error("No artwork for {0}")]
    NoArtwork(String),

    #[error("API credentials are not set: {0} is missing")]
    CredentialsMissing(String),

    #[error("No card produced a caption within {max_len} characters ({candidates} candidates tried)")]
    NoFittingCaption { max_len: usize, candidates: usize },

    #[error("Publishing failed: {0}")]
    Publish(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArtbotError>;
