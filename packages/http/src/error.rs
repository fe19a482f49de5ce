use std::io;
use std::path::PathBuf;

use avusync_catalog::CatalogError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },

    #[error("Authentication as {user} failed with HTTP status {status}")]
    Authentication { user: String, status: u16 },

    #[error("Could not read iRODS environment file ({}): {error}", path.display())]
    EnvironmentRead { path: PathBuf, error: io::Error },

    #[error("Could not parse iRODS environment file ({}): {error}", path.display())]
    EnvironmentParse {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Error> for CatalogError {
    fn from(error: Error) -> Self {
        match error {
            Error::Http(e) => CatalogError::transport(e.to_string()),
            Error::Json(e) => CatalogError::protocol(e.to_string()),
            other => CatalogError::protocol(other.to_string()),
        }
    }
}
