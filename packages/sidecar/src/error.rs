use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("Error reading JSON file ({}): {error}", path.display())]
    Io { path: PathBuf, error: io::Error },

    #[error("Error parsing JSON file ({}): {error}", path.display())]
    Parse {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error("JSON file ({}) does not contain an object at the top level (found {found})", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl ExtractError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ExtractError::Io { path, .. }
            | ExtractError::Parse { path, .. }
            | ExtractError::NotAnObject { path, .. } => path,
        }
    }
}
