use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::object::{Avu, ObjectRef};

/// Forwards lookups to the wrapped catalog and discards attribute writes.
///
/// Discarded writes are logged at `info` and reported as successful, so a
/// sync run over a `ReadOnly` catalog shows what it would have written.
pub struct ReadOnly<C: Catalog> {
    readable: C,
    discarded: usize,
}

impl<C: Catalog> ReadOnly<C> {
    pub fn wrap(readable: C) -> Self {
        ReadOnly {
            readable,
            discarded: 0,
        }
    }

    /// Number of attribute writes dropped so far.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn into_inner(self) -> C {
        self.readable
    }
}

impl<C: Catalog> Catalog for ReadOnly<C> {
    fn lookup_data_object(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        self.readable.lookup_data_object(path)
    }

    fn lookup_collection(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        self.readable.lookup_collection(path)
    }

    fn add_attribute(&mut self, object: &ObjectRef, avu: &Avu) -> Result<(), CatalogError> {
        log::info!("[dry run] would add {} to {}", avu, object);
        self.discarded += 1;
        Ok(())
    }
}
