use std::fmt;
use std::str::FromStr;

pub const DEFAULT_METADATA_FILE_NAME: &str = "signac_statepoint.json";

/// Which local path gets projected onto the remote root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionTarget {
    /// The directory holding the metadata file.
    #[default]
    Directory,
    /// The metadata file itself.
    File,
}

impl fmt::Display for ProjectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionTarget::Directory => write!(f, "directory"),
            ProjectionTarget::File => write!(f, "file"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown projection target {0:?} (expected \"directory\" or \"file\")")]
pub struct ParseTargetError(pub String);

impl FromStr for ProjectionTarget {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "directory" | "dir" => Ok(ProjectionTarget::Directory),
            "file" => Ok(ProjectionTarget::File),
            _ => Err(ParseTargetError(s.to_string())),
        }
    }
}

/// Everything a sync run needs to know besides the catalog it writes to.
///
/// Roots are plain strings substituted literally. The only normalization is
/// that [`SyncConfig::new`] drops one trailing `/` from each root, so `/data/`
/// and `/data` behave the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub local_root: String,
    pub remote_root: String,
    pub metadata_file_name: String,
    pub target: ProjectionTarget,
    /// Resolve objects but discard attribute writes.
    pub dry_run: bool,
}

impl SyncConfig {
    pub fn new(local_root: impl Into<String>, remote_root: impl Into<String>) -> Self {
        SyncConfig {
            local_root: trim_root(local_root.into()),
            remote_root: trim_root(remote_root.into()),
            metadata_file_name: DEFAULT_METADATA_FILE_NAME.to_string(),
            target: ProjectionTarget::default(),
            dry_run: false,
        }
    }

    pub fn with_metadata_file_name(mut self, name: impl Into<String>) -> Self {
        self.metadata_file_name = name.into();
        self
    }

    pub fn with_target(mut self, target: ProjectionTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

fn trim_root(mut root: String) -> String {
    if root.len() > 1 && root.ends_with('/') {
        root.pop();
    }
    root
}
