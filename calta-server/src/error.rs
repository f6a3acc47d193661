use std::{io, net::AddrParseError, num::ParseIntError, path::PathBuf};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use thiserror::Error;

use calta_schedule::ScheduleError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Options(#[from] getopts::Fail),

    #[error("Provided value for option 'address' is invalid: {0}")]
    InvalidAddress(#[source] AddrParseError),

    #[error("`PORT` environment variable is invalid: {0}")]
    InvalidPort(#[source] ParseIntError),

    #[error("Missing schedule source, pass --source or set `CSV_URL`")]
    MissingSource,

    #[error("TLS needs both --cert and --key")]
    IncompleteTls,
}

/// The schedule source could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to schedule source failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Schedule source {url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read schedule file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{self}");

        let status = match &self {
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::Schedule(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, format!("{self}\n")).into_response()
    }
}
