use std::path::{Path, PathBuf};

const UPDATE_MARKER_FILE: &str = ".update-pending";

/// Source of the launcher self-update state.
pub(crate) trait UpdateSource: Send + Sync {
    /// Whether a launcher update is waiting to be applied.
    fn pending_update(&self) -> bool;
    /// Apply the pending update.
    fn perform_update(&self);
}

/// Update source driven by a marker file in the base directory.
///
/// The updater drops the marker when a new launcher build is downloaded.
#[derive(Debug, Clone)]
pub(crate) struct MarkerUpdateSource {
    marker: PathBuf,
}

impl MarkerUpdateSource {
    pub(crate) fn new(base_dir: &Path) -> Self {
        Self {
            marker: base_dir.join(UPDATE_MARKER_FILE),
        }
    }
}

impl UpdateSource for MarkerUpdateSource {
    fn pending_update(&self) -> bool {
        self.marker.is_file()
    }

    fn perform_update(&self) {
        log::info!(
            "self-update requested, marker at {}",
            self.marker.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{MarkerUpdateSource, UpdateSource};

    #[test]
    fn given_marker_file_when_checking_then_update_is_pending() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let root =
            std::env::temp_dir().join(format!("lantern-updates-{nanos}"));
        fs::create_dir_all(&root).expect("temporary directory should exist");
        let source = MarkerUpdateSource::new(&root);

        assert!(!source.pending_update());
        fs::write(root.join(".update-pending"), "").expect("marker written");
        assert!(source.pending_update());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }
}
