use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while listing instances.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("Instance list I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One launchable instance as reported by the instance-management layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InstanceEntry {
    /// Stable identifier, also the icon cache key.
    pub(crate) name: String,
    pub(crate) title: String,
    pub(crate) is_local: bool,
    pub(crate) update_pending: bool,
    /// Private instance directory holding `icon.png`.
    pub(crate) dir: PathBuf,
    /// Game content directory holding saves, resource packs and screenshots.
    pub(crate) content_dir: PathBuf,
}

/// Source of the instance list.
pub(crate) trait InstanceCatalog: Send + Sync {
    fn load(&self) -> Result<Vec<InstanceEntry>, CatalogError>;
}

/// Catalog listing every directory under `<base>/instances` as a local
/// instance.
#[derive(Debug, Clone)]
pub(crate) struct DirectoryCatalog {
    instances_dir: PathBuf,
}

impl DirectoryCatalog {
    pub(crate) fn new(instances_dir: PathBuf) -> Self {
        Self { instances_dir }
    }
}

impl InstanceCatalog for DirectoryCatalog {
    fn load(&self) -> Result<Vec<InstanceEntry>, CatalogError> {
        let entries = match fs::read_dir(&self.instances_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            },
            Err(err) => return Err(err.into()),
        };

        let mut instances = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable instance entry: {err}");
                    continue;
                },
            };
            let dir = entry.path();
            if !dir.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            instances.push(InstanceEntry {
                title: name.clone(),
                name,
                is_local: true,
                update_pending: false,
                content_dir: dir.join("minecraft"),
                dir,
            });
        }

        instances.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(instances)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{DirectoryCatalog, InstanceCatalog};

    #[test]
    fn given_missing_instances_dir_when_loading_then_list_is_empty() {
        let catalog = DirectoryCatalog::new(PathBuf::from(
            "/definitely/not/a/lantern/instances",
        ));

        let instances = catalog.load().expect("missing dir should not fail");

        assert!(instances.is_empty());
    }

    #[test]
    fn given_instance_directories_when_loading_then_sorted_entries_are_returned()
     {
        let root = test_temp_dir("catalog");
        fs::create_dir_all(root.join("skyblock")).expect("dir should exist");
        fs::create_dir_all(root.join("atm9")).expect("dir should exist");
        fs::write(root.join("notes.txt"), "ignored").expect("file written");

        let instances = DirectoryCatalog::new(root.clone())
            .load()
            .expect("catalog should load");

        let names: Vec<&str> =
            instances.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["atm9", "skyblock"]);
        assert_eq!(instances[0].content_dir, root.join("atm9/minecraft"));
        assert!(instances.iter().all(|entry| entry.is_local));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let root = std::env::temp_dir()
            .join(format!("lantern-services-{label}-{nanos}"));
        fs::create_dir_all(&root).expect("temporary directory should exist");
        root
    }
}
