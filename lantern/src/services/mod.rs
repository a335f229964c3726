//! Narrow interfaces to the collaborators the shell calls into.

mod catalog;
mod locale;
mod manager;
mod updates;

use std::sync::Arc;

use crate::config::LauncherConfig;

pub(crate) use self::catalog::{
    CatalogError, DirectoryCatalog, InstanceCatalog, InstanceEntry,
};
pub(crate) use self::locale::{EnglishLocalizer, Localizer};
pub(crate) use self::manager::{
    InstanceManager, InstanceRequest, LoggingInstanceManager,
};
pub(crate) use self::updates::{MarkerUpdateSource, UpdateSource};

/// Shared handles to every external collaborator.
#[derive(Clone)]
pub(crate) struct Services {
    pub(crate) catalog: Arc<dyn InstanceCatalog>,
    pub(crate) updates: Arc<dyn UpdateSource>,
    pub(crate) manager: Arc<dyn InstanceManager>,
    pub(crate) localizer: Arc<dyn Localizer>,
}

impl Services {
    /// Default collaborators rooted at the launcher base directory.
    pub(crate) fn local(config: &LauncherConfig) -> Self {
        Self {
            catalog: Arc::new(DirectoryCatalog::new(config.instances_dir())),
            updates: Arc::new(MarkerUpdateSource::new(&config.base_dir)),
            manager: Arc::new(LoggingInstanceManager),
            localizer: Arc::new(EnglishLocalizer),
        }
    }
}
