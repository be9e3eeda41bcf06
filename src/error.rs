use crate::fetch::FetchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Fetch(FetchError),
    Config(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Config(_) => None,
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// details stay in the log, clients only learn that it failed
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        log::error!("request failed: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "failed to load the menu" })),
        )
            .into_response()
    }
}
