//! In-memory catalog.
//!
//! Holds data objects and collections with their attributes, and records
//! every call made against it so tests can assert on exact call sequences.

use std::collections::{BTreeMap, HashMap};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::object::{Avu, ObjectKind, ObjectRef};

const OBJ_PATH_DOES_NOT_EXIST: i64 = -358000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LookupDataObject(String),
    LookupCollection(String),
    AddAttribute(ObjectRef, Avu),
}

/// A [`Catalog`] that keeps everything in memory.
///
/// # Example
///
/// ```rust
/// use avusync_catalog::{Avu, Catalog, InMemoryCatalog};
///
/// let mut catalog = InMemoryCatalog::new();
/// let object = catalog.insert_data_object("/zone/home/alice/run.json");
///
/// catalog.add_attribute(&object, &Avu::new("seed", "42")).unwrap();
/// assert_eq!(catalog.attributes(&object), vec![Avu::new("seed", "42")]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    objects: HashMap<ObjectKind, BTreeMap<String, Vec<Avu>>>,
    calls: Vec<Call>,
    lookup_failures: HashMap<ObjectKind, CatalogError>,
    add_failure: Option<(usize, CatalogError)>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_data_object(&mut self, path: impl Into<String>) -> ObjectRef {
        self.insert(ObjectRef::data_object(path))
    }

    pub fn insert_collection(&mut self, path: impl Into<String>) -> ObjectRef {
        self.insert(ObjectRef::collection(path))
    }

    fn insert(&mut self, object: ObjectRef) -> ObjectRef {
        self.objects
            .entry(object.kind)
            .or_default()
            .entry(object.path.clone())
            .or_default();
        object
    }

    /// Attributes currently attached to `object`, in the order they were added.
    pub fn attributes(&self, object: &ObjectRef) -> Vec<Avu> {
        self.objects
            .get(&object.kind)
            .and_then(|objects| objects.get(&object.path))
            .cloned()
            .unwrap_or_default()
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Make every lookup of `kind` fail with `error`.
    pub fn fail_lookups(&mut self, kind: ObjectKind, error: CatalogError) {
        self.lookup_failures.insert(kind, error);
    }

    /// Let the next `successes` attribute adds succeed, then fail every
    /// later one with `error`.
    pub fn fail_add_attribute_after(&mut self, successes: usize, error: CatalogError) {
        self.add_failure = Some((successes, error));
    }

    fn lookup(&mut self, kind: ObjectKind, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        if let Some(error) = self.lookup_failures.get(&kind) {
            return Err(error.clone());
        }

        let exists = self
            .objects
            .get(&kind)
            .is_some_and(|objects| objects.contains_key(path));
        Ok(exists.then(|| ObjectRef {
            kind,
            path: path.to_string(),
        }))
    }
}

impl Catalog for InMemoryCatalog {
    fn lookup_data_object(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        self.calls.push(Call::LookupDataObject(path.to_string()));
        self.lookup(ObjectKind::DataObject, path)
    }

    fn lookup_collection(&mut self, path: &str) -> Result<Option<ObjectRef>, CatalogError> {
        self.calls.push(Call::LookupCollection(path.to_string()));
        self.lookup(ObjectKind::Collection, path)
    }

    fn add_attribute(&mut self, object: &ObjectRef, avu: &Avu) -> Result<(), CatalogError> {
        self.calls
            .push(Call::AddAttribute(object.clone(), avu.clone()));

        if let Some((remaining, error)) = &mut self.add_failure {
            if *remaining == 0 {
                return Err(error.clone());
            }
            *remaining -= 1;
        }

        match self
            .objects
            .get_mut(&object.kind)
            .and_then(|objects| objects.get_mut(&object.path))
        {
            Some(avus) => {
                avus.push(avu.clone());
                Ok(())
            }
            None => Err(CatalogError::Remote {
                code: OBJ_PATH_DOES_NOT_EXIST,
                message: format!("{} does not exist", object),
            }),
        }
    }
}
