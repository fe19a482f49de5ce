//! # avusync-catalog
//!
//! The remote half of a metadata sync, expressed independently of any
//! transport.
//!
//! A [`Catalog`] is the capability set a remote data-management system
//! offers this crate: look up a path as a data object, look it up as a
//! collection, and add an attribute to an object. On top of that sit
//! [`resolve`], which discovers an object's kind by trial, and [`assign`],
//! which writes a JSON object's entries as attributes.
//!
//! ## Implementations
//!
//! - [`InMemoryCatalog`] keeps objects and attributes in memory and records
//!   every add call.
//! - [`ReadOnly`] wraps another catalog and discards writes.
//! - `avusync-http` talks to an iRODS HTTP API server.
//!
//! ```rust
//! use avusync_catalog::{assign, resolve, InMemoryCatalog, Resolution};
//! use serde_json::json;
//!
//! let mut catalog = InMemoryCatalog::new();
//! catalog.insert_collection("/zone/data/exp1");
//!
//! let object = match resolve(&mut catalog, "/zone/data/exp1") {
//!     Resolution::Collection(object) => object,
//!     other => panic!("unexpected {:?}", other),
//! };
//!
//! let metadata = json!({"a": 1, "b": "x"});
//! let applied = assign(&mut catalog, &object, metadata.as_object().unwrap()).unwrap();
//! assert_eq!(applied, 2);
//! ```

pub mod assign;
pub mod catalog;
pub mod error;
pub mod in_memory;
pub mod object;
pub mod read_only;
pub mod resolve;

pub use assign::{assign, stringify_value};
pub use catalog::Catalog;
pub use error::{AssignError, CatalogError};
pub use in_memory::{Call, InMemoryCatalog};
pub use object::{Avu, ObjectKind, ObjectRef};
pub use read_only::ReadOnly;
pub use resolve::{resolve, Resolution};
