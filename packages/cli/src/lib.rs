//! # avusync-cli
//!
//! The `avusync` command: find JSON sidecar files below a local directory
//! and add their contents as AVUs to the matching iRODS objects.
//!
//! ## Usage
//!
//! ```bash
//! export IRODS_PASSWORD=...
//! avusync --local-root /data --remote-root /tempZone/home/alice/data
//!
//! # Only show what would be written
//! avusync --local-root /data --remote-root /tempZone/home/alice/data --dry-run -v
//! ```

pub mod args;
pub mod error;
pub mod logging;

use avusync_http::{Environment, IrodsHttpSession};
use avusync_sync::{SyncReport, Syncer};

pub use args::Args;
pub use error::Error;

/// Environment variable holding the iRODS password.
pub const PASSWORD_VAR: &str = "IRODS_PASSWORD";

/// Run a sync with the password taken from [`PASSWORD_VAR`].
pub fn run(args: &Args) -> Result<SyncReport, Error> {
    let password = std::env::var(PASSWORD_VAR).map_err(|_| Error::MissingPassword {
        variable: PASSWORD_VAR,
    })?;
    run_with_password(args, &password)
}

/// Run a sync: load the environment, open a session, sync, close.
///
/// Only setup failures are errors. Per-file problems are in the report.
pub fn run_with_password(args: &Args, password: &str) -> Result<SyncReport, Error> {
    let env_path = match &args.irods_env {
        Some(path) => path.clone(),
        None => Environment::default_path().ok_or(Error::NoHomeDirectory)?,
    };
    let environment = Environment::load(&env_path)?;
    let api_url = args
        .api_url
        .clone()
        .unwrap_or_else(|| environment.api_url());

    let session = IrodsHttpSession::open(&api_url, &environment.irods_user_name, password)?;

    let mut syncer = Syncer::new(args.sync_config(), session);
    let report = syncer.run();
    syncer.into_catalog().close();

    Ok(report)
}
