use std::path::PathBuf;

use clap::{ArgAction, Parser};

use avusync_sync::{ProjectionTarget, SyncConfig, DEFAULT_METADATA_FILE_NAME};

/// avusync - add JSON sidecar metadata to iRODS objects as AVUs
#[derive(Parser, Debug, Clone)]
#[command(name = "avusync")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Local directory to search for metadata files
    #[arg(long)]
    pub local_root: String,

    /// iRODS path corresponding to the local root
    #[arg(long)]
    pub remote_root: String,

    /// Name of the metadata files to look for
    #[arg(long, default_value = DEFAULT_METADATA_FILE_NAME)]
    pub metadata_file: String,

    /// Project the directory holding each metadata file, or the file itself
    #[arg(long, default_value_t = ProjectionTarget::Directory)]
    pub target: ProjectionTarget,

    /// iRODS environment file [default: ~/.irods/irods_environment.json]
    #[arg(long)]
    pub irods_env: Option<PathBuf>,

    /// iRODS HTTP API base URL, overriding the environment file
    #[arg(long)]
    pub api_url: Option<String>,

    /// Resolve objects but do not add any attributes
    #[arg(long)]
    pub dry_run: bool,

    /// More output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig::new(self.local_root.clone(), self.remote_root.clone())
            .with_metadata_file_name(self.metadata_file.clone())
            .with_target(self.target)
            .with_dry_run(self.dry_run)
    }
}
