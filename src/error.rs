use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoMpgError {
    #[error("cannot coerce {field} from {value:?}")]
    Construction { field: &'static str, value: String },

    #[error("fetching {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed row at line {line}: expected at least 9 fields, found {found}: {content:?}")]
    MalformedRow {
        line: usize,
        found: usize,
        content: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AutoMpgError>;
