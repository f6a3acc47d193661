use std::{fmt, path::PathBuf};

use log::debug;
use reqwest::Client;

use calta_schedule::{parse_csv, ScheduleTable};

use crate::error::FetchError;

/// Where the schedule export is read from on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value)
        } else {
            Self::File(value.into())
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    pub async fn fetch(&self, client: &Client) -> Result<String, FetchError> {
        match self {
            Self::Url(url) => {
                debug!("Sending HTTP request to {url}");
                let response = client.get(url).send().await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.clone(),
                        status,
                    });
                }

                Ok(response.text().await?)
            }
            Self::File(path) => {
                debug!("Reading {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FetchError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }

    /// Fetches and parses the schedule, dropping the header line.
    pub async fn load(&self, client: &Client) -> Result<ScheduleTable, FetchError> {
        let text = self.fetch(client).await?;
        Ok(parse_csv(text, true))
    }
}
