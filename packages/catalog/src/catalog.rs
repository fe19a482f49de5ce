//! The capability set a remote store exposes to a sync.

use crate::error::CatalogError;
use crate::object::{Avu, ObjectRef};

/// Lookup and attribute operations against a remote data-management system.
///
/// Calls are blocking. Implementations own whatever session or connection
/// state they need; releasing it is their `Drop`'s job.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Catalog>`.
pub trait Catalog {
    /// Look `path` up as a data object.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No data object exists at `path` (not an error condition).
    /// * `Ok(Some(object))` - A reference to the data object.
    /// * `Err(CatalogError)` - A transport or remote error occurred.
    fn lookup_data_object(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError>;

    /// Look `path` up as a collection. Same contract as
    /// [`lookup_data_object`](Catalog::lookup_data_object).
    fn lookup_collection(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError>;

    /// Add `avu` to `object`. Existing attributes are left alone, so adding
    /// the same triple twice may store it twice.
    fn add_attribute(&mut self, object: &ObjectRef, avu: &Avu) -> Result<(), CatalogError>;
}

impl<T: Catalog + ?Sized> Catalog for &mut T {
    fn lookup_data_object(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        (**self).lookup_data_object(path)
    }

    fn lookup_collection(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        (**self).lookup_collection(path)
    }

    fn add_attribute(&mut self, object: &ObjectRef, avu: &Avu) -> Result<(), CatalogError> {
        (**self).add_attribute(object, avu)
    }
}

impl<T: Catalog + ?Sized> Catalog for Box<T> {
    fn lookup_data_object(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        (**self).lookup_data_object(path)
    }

    fn lookup_collection(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        (**self).lookup_collection(path)
    }

    fn add_attribute(&mut self, object: &ObjectRef, avu: &Avu) -> Result<(), CatalogError> {
        (**self).add_attribute(object, avu)
    }
}
