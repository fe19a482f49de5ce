//! Loading `irods_environment.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Port the iRODS HTTP API listens on out of the box.
pub const DEFAULT_HTTP_API_PORT: u16 = 9000;
/// API version prefix used when the environment does not name a URL.
pub const DEFAULT_HTTP_API_VERSION: &str = "0.3.0";

/// The subset of an iRODS client environment file this crate needs.
///
/// Unknown keys are ignored, so a regular iCommands environment file loads
/// as is. `irods_http_api_url` is the one key iCommands do not use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub irods_host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irods_port: Option<u16>,
    pub irods_zone_name: String,
    pub irods_user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irods_http_api_url: Option<String>,
}

impl Environment {
    /// `~/.irods/irods_environment.json`, or `None` when there is no home
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".irods").join("irods_environment.json"))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Environment, Error> {
        let path = path.as_ref();
        log::debug!("Loading iRODS environment from {}...", path.display());

        let contents = fs::read_to_string(path).map_err(|error| Error::EnvironmentRead {
            path: path.to_path_buf(),
            error,
        })?;

        serde_json::from_str(&contents).map_err(|error| Error::EnvironmentParse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Base URL of the HTTP API for this environment.
    pub fn api_url(&self) -> String {
        match &self.irods_http_api_url {
            Some(url) => url.clone(),
            None => format!(
                "http://{}:{}/irods-http-api/{}",
                self.irods_host, DEFAULT_HTTP_API_PORT, DEFAULT_HTTP_API_VERSION
            ),
        }
    }
}
