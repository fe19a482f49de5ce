//! Wire types of the iRODS HTTP API and how their statuses map onto
//! catalog results.

use serde::{Deserialize, Serialize};

use avusync_catalog::{Avu, CatalogError, ObjectKind};

pub const OBJ_PATH_DOES_NOT_EXIST: i64 = -358000;
pub const USER_FILE_DOES_NOT_EXIST: i64 = -310000;
pub const CAT_NO_ROWS_FOUND: i64 = -808000;

/// Statuses that mean "nothing at this path" rather than a failure.
const NOT_FOUND_CODES: [i64; 3] = [
    OBJ_PATH_DOES_NOT_EXIST,
    USER_FILE_DOES_NOT_EXIST,
    CAT_NO_ROWS_FOUND,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrodsStatus {
    pub status_code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

/// Envelope shared by every endpoint's JSON answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrodsResponse {
    pub irods_response: IrodsStatus,
    /// Only present on `stat`: `"data_object"` or `"collection"`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
}

impl IrodsResponse {
    pub fn parse(body: &str) -> Result<IrodsResponse, CatalogError> {
        serde_json::from_str(body).map_err(|e| {
            CatalogError::protocol(format!("Failed to parse iRODS response ({}): {}", e, body))
        })
    }

    fn remote_error(&self) -> CatalogError {
        CatalogError::Remote {
            code: self.irods_response.status_code,
            message: self
                .irods_response
                .status_message
                .clone()
                .unwrap_or_default(),
        }
    }
}

/// One entry of a `modify_metadata` operations list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataOperation {
    pub operation: String,
    pub attribute: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl MetadataOperation {
    pub fn add(avu: &Avu) -> Self {
        MetadataOperation {
            operation: "add".to_string(),
            attribute: avu.attribute.clone(),
            value: avu.value.clone(),
            units: avu.unit.clone(),
        }
    }
}

/// Endpoint name for objects of `kind`.
pub fn endpoint(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::DataObject => "data-objects",
        ObjectKind::Collection => "collections",
    }
}

fn type_name(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::DataObject => "data_object",
        ObjectKind::Collection => "collection",
    }
}

/// Interprets the answer to a `stat` of an object of `kind`.
///
/// `Ok(true)` when the object exists, `Ok(false)` when it definitively
/// does not, `Err` otherwise.
pub fn interpret_stat(kind: ObjectKind, status: u16, body: &str) -> Result<bool, CatalogError> {
    if status == 404 {
        return Ok(false);
    }
    if !(200..300).contains(&status) {
        return Err(CatalogError::transport(format!("HTTP error: {}", status)));
    }

    let response = IrodsResponse::parse(body)?;
    match response.irods_response.status_code {
        0 => Ok(response
            .object_type
            .as_deref()
            .map_or(true, |t| t == type_name(kind))),
        code if NOT_FOUND_CODES.contains(&code) => Ok(false),
        _ => Err(response.remote_error()),
    }
}

/// Interprets the answer to a `modify_metadata` request.
pub fn interpret_modify(status: u16, body: &str) -> Result<(), CatalogError> {
    if !(200..300).contains(&status) {
        return Err(CatalogError::transport(format!("HTTP error: {}", status)));
    }

    let response = IrodsResponse::parse(body)?;
    if response.irods_response.status_code == 0 {
        Ok(())
    } else {
        Err(response.remote_error())
    }
}
