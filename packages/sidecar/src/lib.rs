//! # avusync-sidecar
//!
//! Local side of a metadata sync: finding JSON sidecar files below a root
//! directory and decoding them into key/value maps.
//!
//! ```ignore
//! use avusync_sidecar::{discover, read_metadata};
//!
//! for path in discover("/data", "signac_statepoint.json") {
//!     match read_metadata(&path) {
//!         Ok(file) => println!("{} keys in {}", file.len(), file.path.display()),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

pub mod discover;
pub mod error;
pub mod extract;

pub use discover::discover;
pub use error::ExtractError;
pub use extract::{read_metadata, MetadataFile};
