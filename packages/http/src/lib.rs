//! # avusync-http
//!
//! An iRODS session spoken over the iRODS HTTP API, exposed as an
//! [`avusync_catalog::Catalog`].
//!
//! ## Protocol
//!
//! - open → `POST {api}/authenticate` with basic auth → bearer token
//! - `lookup_data_object(p)` → `GET {api}/data-objects?op=stat&lpath=p`
//! - `lookup_collection(p)` → `GET {api}/collections?op=stat&lpath=p`
//! - `add_attribute(o, avu)` → `POST {api}/data-objects` (or `collections`)
//!   with `op=modify_metadata`
//!
//! ## Example
//!
//! ```ignore
//! use avusync_http::{Environment, IrodsHttpSession};
//!
//! let env = Environment::load(Environment::default_path().unwrap())?;
//! let session = IrodsHttpSession::open(&env.api_url(), &env.irods_user_name, "secret")?;
//!
//! // ... use the session as a Catalog ...
//!
//! session.close();
//! ```

pub mod environment;
pub mod error;
pub mod session;
pub mod types;

pub use environment::Environment;
pub use error::Error;
pub use session::IrodsHttpSession;
