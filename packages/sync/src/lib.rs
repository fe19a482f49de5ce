//! # avusync-sync
//!
//! Ties the local sidecar files to the remote catalog:
//!
//! 1. discover every metadata file below the local root,
//! 2. decode it,
//! 3. project its local path onto the remote root, resolve the remote
//!    object there and add each key/value pair as an attribute.
//!
//! Files are processed one at a time. Every failure is confined to the file
//! that caused it and ends up in the [`SyncReport`].
//!
//! ```rust
//! use avusync_catalog::InMemoryCatalog;
//! use avusync_sync::{SyncConfig, Syncer};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let local_root = dir.path().to_str().unwrap().to_string();
//! std::fs::create_dir(dir.path().join("exp1")).unwrap();
//! std::fs::write(dir.path().join("exp1/signac_statepoint.json"), r#"{"a": 1}"#).unwrap();
//!
//! let mut catalog = InMemoryCatalog::new();
//! catalog.insert_collection("/zone/data/exp1");
//!
//! let mut syncer = Syncer::new(SyncConfig::new(local_root, "/zone/data"), catalog);
//! let report = syncer.run();
//! assert_eq!(report.attributes_added(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod projection;
pub mod report;

pub use config::{ParseTargetError, ProjectionTarget, SyncConfig, DEFAULT_METADATA_FILE_NAME};
pub use engine::{sync_file, Syncer};
pub use projection::{contains_root, project};
pub use report::{FileOutcome, SkipReason, SyncReport};
