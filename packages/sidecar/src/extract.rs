use std::{fs, io, path};

use serde_json::value::Value as JsonValue;
use serde_json::Map;

use crate::error::ExtractError;

/// A decoded sidecar file. Keys keep the order they have in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataFile {
    pub path: path::PathBuf,
    pub data: Map<String, JsonValue>,
}

impl MetadataFile {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.data.iter()
    }
}

/// Reads `path` and decodes it as a JSON object.
///
/// Missing files, other I/O failures, malformed JSON and non-object top
/// levels all come back as an [`ExtractError`]; nothing here panics.
pub fn read_metadata(path: impl AsRef<path::Path>) -> Result<MetadataFile, ExtractError> {
    let path = path.as_ref();
    log::debug!("Reading {}...", path.display());

    let file = fs::File::open(path).map_err(|error| ExtractError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    let reader = io::BufReader::new(file);

    let value: JsonValue = serde_json::from_reader(reader).map_err(|error| {
        if error.is_io() {
            ExtractError::Io {
                path: path.to_path_buf(),
                error: io::Error::from(error),
            }
        } else {
            ExtractError::Parse {
                path: path.to_path_buf(),
                error,
            }
        }
    })?;

    match value {
        JsonValue::Object(data) => Ok(MetadataFile {
            path: path.to_path_buf(),
            data,
        }),
        other => Err(ExtractError::NotAnObject {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
