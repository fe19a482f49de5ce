use std::fmt;
use std::path::PathBuf;

use avusync_catalog::{AssignError, CatalogError, ObjectRef};
use avusync_sidecar::ExtractError;

#[derive(Debug)]
pub enum SkipReason {
    /// The file could not be read or decoded.
    Extract(ExtractError),
    /// The file decoded to `{}`; there is nothing to write.
    Empty,
    /// The path is not valid UTF-8 and cannot be projected.
    NonUtf8Path,
    /// The local root does not occur in the path, so projection would not
    /// produce a remote path.
    OutsideLocalRoot { local_path: String },
    NotFound { remote_path: String },
    /// No object was found and at least one lookup failed outright.
    Unreachable {
        remote_path: String,
        errors: Vec<CatalogError>,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Extract(error) => write!(f, "{}", error),
            SkipReason::Empty => write!(f, "metadata file is empty"),
            SkipReason::NonUtf8Path => write!(f, "path is not valid UTF-8"),
            SkipReason::OutsideLocalRoot { local_path } => {
                write!(f, "{} is not below the local root", local_path)
            }
            SkipReason::NotFound { remote_path } => {
                write!(f, "remote object not found at {}", remote_path)
            }
            SkipReason::Unreachable {
                remote_path,
                errors,
            } => {
                write!(f, "could not resolve {}", remote_path)?;
                for error in errors {
                    write!(f, "; {}", error)?;
                }
                Ok(())
            }
        }
    }
}

/// What happened to one discovered metadata file.
#[derive(Debug)]
pub enum FileOutcome {
    Applied {
        path: PathBuf,
        object: ObjectRef,
        attributes: usize,
    },
    /// Assignment stopped partway; `error.applied` attributes were written.
    Partial { path: PathBuf, error: AssignError },
    Skipped { path: PathBuf, reason: SkipReason },
}

impl FileOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Applied { path, .. }
            | FileOutcome::Partial { path, .. }
            | FileOutcome::Skipped { path, .. } => path,
        }
    }

    /// Attributes this file actually added, including those of a partial
    /// batch.
    pub fn attributes_added(&self) -> usize {
        match self {
            FileOutcome::Applied { attributes, .. } => *attributes,
            FileOutcome::Partial { error, .. } => error.applied,
            FileOutcome::Skipped { .. } => 0,
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Applied {
                path,
                object,
                attributes,
            } => write!(
                f,
                "{}: added {} attribute(s) to {}",
                path.display(),
                attributes,
                object
            ),
            FileOutcome::Partial { path, error } => write!(f, "{}: {}", path.display(), error),
            FileOutcome::Skipped { path, reason } => {
                write!(f, "{}: skipped, {}", path.display(), reason)
            }
        }
    }
}

/// Outcomes of a run, one per discovered file in discovery order.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<FileOutcome>,
}

impl SyncReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn files_seen(&self) -> usize {
        self.outcomes.len()
    }

    pub fn objects_updated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Applied { .. }))
            .count()
    }

    pub fn attributes_added(&self) -> usize {
        self.outcomes.iter().map(FileOutcome::attributes_added).sum()
    }

    pub fn partial(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Partial { .. }))
            .count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&PathBuf, &SkipReason)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Skipped { path, reason } => Some((path, reason)),
            _ => None,
        })
    }

    /// True when every discovered file was fully applied.
    pub fn is_clean(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o, FileOutcome::Applied { .. }))
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) found, {} object(s) updated, {} attribute(s) added, {} partial, {} skipped",
            self.files_seen(),
            self.objects_updated(),
            self.attributes_added(),
            self.partial(),
            self.skipped().count()
        )
    }
}
