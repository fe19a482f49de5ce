use serde_json::value::Value as JsonValue;
use serde_json::Map;

use crate::catalog::Catalog;
use crate::error::AssignError;
use crate::object::{Avu, ObjectRef};

/// Text stored as an attribute value for a JSON value.
///
/// Strings are stored without quotes; everything else as compact JSON
/// (`true`, `null`, `[1,"a"]`). Attributes written by older Python tooling
/// hold `str(value)` instead (`True`, `None`, `[1, 'a']`), so queries over
/// mixed-origin AVUs need to match both spellings.
pub fn stringify_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Adds one attribute per entry of `metadata` to `object`, in map order.
///
/// Stops at the first failing add. Attributes added before the failure stay
/// on the object; the returned [`AssignError`] says how many there were.
pub fn assign<C: Catalog + ?Sized>(
    catalog: &mut C,
    object: &ObjectRef,
    metadata: &Map<String, JsonValue>,
) -> Result<usize, AssignError> {
    let mut applied = 0;
    for (key, value) in metadata {
        let avu = Avu::new(key.clone(), stringify_value(value));
        log::trace!("Adding {} to {}", avu, object);

        catalog
            .add_attribute(object, &avu)
            .map_err(|source| AssignError {
                object: object.clone(),
                applied,
                attribute: key.clone(),
                source,
            })?;
        applied += 1;
    }

    log::debug!("Added {} attribute(s) to {}", applied, object);
    Ok(applied)
}
