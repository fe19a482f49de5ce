//! Discovering what kind of object lives at a remote path.
//!
//! The kind of a remote path is not known up front, so it is found by
//! trial: data object first, then collection.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::object::ObjectRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    DataObject(ObjectRef),
    Collection(ObjectRef),
    /// Both probes answered definitively that nothing exists at the path.
    NotFound,
    /// Neither probe found an object and at least one of them failed, so
    /// absence is not certain. Holds the probe errors in probe order.
    Unreachable(Vec<CatalogError>),
}

impl Resolution {
    pub fn object(&self) -> Option<&ObjectRef> {
        match self {
            Resolution::DataObject(object) | Resolution::Collection(object) => Some(object),
            Resolution::NotFound | Resolution::Unreachable(_) => None,
        }
    }

    pub fn into_object(self) -> Option<ObjectRef> {
        match self {
            Resolution::DataObject(object) | Resolution::Collection(object) => Some(object),
            Resolution::NotFound | Resolution::Unreachable(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.object().is_some()
    }
}

/// Resolves `path` against `catalog`.
///
/// The collection probe runs whenever the data-object probe does not
/// produce an object, whether it reported absence or failed.
pub fn resolve<C: Catalog + ?Sized>(catalog: &mut C, path: &str) -> Resolution {
    let mut errors = Vec::new();

    match catalog.lookup_data_object(path) {
        Ok(Some(object)) => {
            log::debug!("Resolved {} as a data object", path);
            return Resolution::DataObject(object);
        }
        Ok(None) => log::trace!("No data object at {}", path),
        Err(error) => {
            log::debug!("Data object lookup for {} failed: {}", path, error);
            errors.push(error);
        }
    }

    match catalog.lookup_collection(path) {
        Ok(Some(object)) => {
            log::debug!("Resolved {} as a collection", path);
            return Resolution::Collection(object);
        }
        Ok(None) => log::trace!("No collection at {}", path),
        Err(error) => {
            log::debug!("Collection lookup for {} failed: {}", path, error);
            errors.push(error);
        }
    }

    if errors.is_empty() {
        Resolution::NotFound
    } else {
        Resolution::Unreachable(errors)
    }
}
