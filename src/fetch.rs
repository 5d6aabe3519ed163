use crate::config::Config;
use crate::error::{AutoMpgError, Result};
use std::time::Duration;
use tracing::{debug, error, info};

/// Somewhere the raw data set can be retrieved from.
pub trait DatasetSource {
    /// Returns the raw body bytes, or an error if the retrieval did not succeed.
    fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable name for log lines.
    fn describe(&self) -> String;
}

/// Fetches the data set with a single blocking GET.
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.data_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }
}

impl DatasetSource for HttpSource {
    fn fetch(&self) -> Result<Vec<u8>> {
        debug!("GET {}", self.url);
        let resp = self.client.get(&self.url).send().map_err(|e| {
            error!("Data not received from {}: {}", self.url, e);
            AutoMpgError::Fetch {
                url: self.url.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            error!("Data not received from {}: HTTP {}", self.url, status);
            return Err(AutoMpgError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().map_err(|e| AutoMpgError::Fetch {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;
        info!("Data received from {} ({} bytes)", self.url, bytes.len());
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
