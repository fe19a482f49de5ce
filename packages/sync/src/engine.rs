use std::path::{Path, PathBuf};

use avusync_catalog::{assign, resolve, Catalog, ReadOnly, Resolution};
use avusync_sidecar::{discover, read_metadata};

use crate::config::{ProjectionTarget, SyncConfig};
use crate::projection::{contains_root, project};
use crate::report::{FileOutcome, SkipReason, SyncReport};

/// Runs syncs of one configuration against one catalog.
///
/// The catalog is owned for the lifetime of the `Syncer`; take it back with
/// [`into_catalog`](Syncer::into_catalog) to close a session explicitly.
pub struct Syncer<C: Catalog> {
    config: SyncConfig,
    catalog: C,
}

impl<C: Catalog> Syncer<C> {
    pub fn new(config: SyncConfig, catalog: C) -> Self {
        Syncer { config, catalog }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn into_catalog(self) -> C {
        self.catalog
    }

    /// Discovers every metadata file and syncs them one after another.
    pub fn run(&mut self) -> SyncReport {
        let files = discover(&self.config.local_root, &self.config.metadata_file_name);
        log::info!(
            "Found {} {} file(s) below {}",
            files.len(),
            self.config.metadata_file_name,
            self.config.local_root
        );

        if self.config.dry_run {
            let mut catalog = ReadOnly::wrap(&mut self.catalog);
            Self::sync_all(&self.config, &mut catalog, files)
        } else {
            Self::sync_all(&self.config, &mut self.catalog, files)
        }
    }

    fn sync_all<K: Catalog>(config: &SyncConfig, catalog: &mut K, files: Vec<PathBuf>) -> SyncReport {
        let mut report = SyncReport::default();
        for path in files {
            report.push(sync_file(config, catalog, path));
        }
        log::info!("{}", report);
        report
    }
}

/// Syncs a single metadata file and logs what happened to it.
pub fn sync_file<C: Catalog + ?Sized>(
    config: &SyncConfig,
    catalog: &mut C,
    path: PathBuf,
) -> FileOutcome {
    let outcome = process_file(config, catalog, path);
    match &outcome {
        FileOutcome::Applied { .. } => log::info!("{}", outcome),
        FileOutcome::Partial { .. } => log::error!("{}", outcome),
        FileOutcome::Skipped { .. } => log::warn!("{}", outcome),
    }
    outcome
}

fn process_file<C: Catalog + ?Sized>(
    config: &SyncConfig,
    catalog: &mut C,
    path: PathBuf,
) -> FileOutcome {
    let metadata = match read_metadata(&path) {
        Ok(metadata) => metadata,
        Err(error) => {
            return FileOutcome::Skipped {
                path,
                reason: SkipReason::Extract(error),
            }
        }
    };

    if metadata.is_empty() {
        return FileOutcome::Skipped {
            path,
            reason: SkipReason::Empty,
        };
    }

    let local_path = match local_path_for(&path, config.target) {
        Some(local_path) => local_path,
        None => {
            return FileOutcome::Skipped {
                path,
                reason: SkipReason::NonUtf8Path,
            }
        }
    };

    if !contains_root(&local_path, &config.local_root) {
        return FileOutcome::Skipped {
            path,
            reason: SkipReason::OutsideLocalRoot { local_path },
        };
    }

    let remote_path = project(&local_path, &config.local_root, &config.remote_root);
    log::debug!("{} -> {}", local_path, remote_path);

    let object = match resolve(catalog, &remote_path) {
        Resolution::DataObject(object) | Resolution::Collection(object) => object,
        Resolution::NotFound => {
            return FileOutcome::Skipped {
                path,
                reason: SkipReason::NotFound { remote_path },
            }
        }
        Resolution::Unreachable(errors) => {
            return FileOutcome::Skipped {
                path,
                reason: SkipReason::Unreachable {
                    remote_path,
                    errors,
                },
            }
        }
    };

    match assign(catalog, &object, &metadata.data) {
        Ok(attributes) => FileOutcome::Applied {
            path,
            object,
            attributes,
        },
        Err(error) => FileOutcome::Partial { path, error },
    }
}

/// The local path string that gets projected for the metadata file at `path`.
fn local_path_for(path: &Path, target: ProjectionTarget) -> Option<String> {
    let chosen = match target {
        ProjectionTarget::File => path,
        ProjectionTarget::Directory => path.parent().unwrap_or(path),
    };
    chosen.to_str().map(str::to_string)
}
