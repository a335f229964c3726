//! Instance icon cache keyed by instance name.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use iced::widget::image::Handle;
use image::RgbaImage;
use lantern_ui_paint::bitmap;

use super::errors::IconError;
use super::model::ICON_SIZE;
use crate::shared::ui::icons::handle_from_rgba;

/// A decoded icon pre-scaled to the row icon size.
#[derive(Debug)]
pub(crate) struct IconBitmap {
    pub(crate) handle: Handle,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl IconBitmap {
    /// Scale `image` to the row icon size and wrap it for painting.
    pub(crate) fn from_image(image: &RgbaImage) -> Self {
        let scaled = bitmap::scale_bilinear(image, ICON_SIZE, ICON_SIZE);
        Self {
            handle: handle_from_rgba(scaled),
            width: ICON_SIZE,
            height: ICON_SIZE,
        }
    }
}

/// Where icons come from.
///
/// `Ok(None)` means the asset does not exist; `Err` means it exists but
/// could not be decoded.
pub(crate) trait IconSource {
    /// Icon shipped with the launcher for `key`.
    fn bundled(&self, key: &str) -> Result<Option<RgbaImage>, IconError>;
    /// User icon stored in the instance directory.
    fn user(&self, instance_dir: &Path) -> Result<Option<RgbaImage>, IconError>;
    /// Shared fallback icon asset.
    fn default_icon(&self) -> Result<Option<RgbaImage>, IconError>;
}

/// Memoized icon lookup with a single shared default.
#[derive(Debug)]
pub(crate) struct IconCache {
    entries: HashMap<String, Arc<IconBitmap>>,
    /// Keys already known to have no usable icon of their own.
    fallbacks: HashSet<String>,
    default: Arc<IconBitmap>,
}

impl IconCache {
    /// Build an empty cache whose default icon comes from `source`, or a
    /// procedural placeholder when the asset is missing.
    pub(crate) fn new(source: &dyn IconSource) -> Self {
        let default = match source.default_icon() {
            Ok(Some(image)) => IconBitmap::from_image(&image),
            Ok(None) => {
                log::warn!("default instance icon missing, using placeholder");
                placeholder()
            },
            Err(err) => {
                log::warn!("default instance icon unusable: {err}");
                placeholder()
            },
        };

        Self {
            entries: HashMap::new(),
            fallbacks: HashSet::new(),
            default: Arc::new(default),
        }
    }

    /// Resolve the icon for `key`, loading and memoizing it on first use.
    ///
    /// Falls back to the shared default, which is never stored per key.
    /// A key that fell back is not looked up again until it is invalidated.
    pub(crate) fn resolve(
        &mut self,
        key: &str,
        instance_dir: &Path,
        source: &dyn IconSource,
    ) -> Arc<IconBitmap> {
        if let Some(icon) = self.entries.get(key) {
            return Arc::clone(icon);
        }
        if self.fallbacks.contains(key) {
            return Arc::clone(&self.default);
        }

        let loaded = take_icon(key, source.bundled(key))
            .or_else(|| take_icon(key, source.user(instance_dir)));

        match loaded {
            Some(image) => {
                log::debug!("loaded icon for {key}");
                let icon = Arc::new(IconBitmap::from_image(&image));
                self.entries.insert(key.to_string(), Arc::clone(&icon));
                icon
            },
            None => {
                self.fallbacks.insert(key.to_string());
                Arc::clone(&self.default)
            },
        }
    }

    /// Cached icon for `key`, or the shared default.
    pub(crate) fn get(&self, key: &str) -> Arc<IconBitmap> {
        self.entries
            .get(key)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(&self.default))
    }

    /// Whether `key` resolved to its own icon.
    #[cfg(test)]
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn default_icon(&self) -> Arc<IconBitmap> {
        Arc::clone(&self.default)
    }

    /// Forget the cached icon for `key` so the next resolution reloads it.
    pub(crate) fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
        self.fallbacks.remove(key);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.fallbacks.clear();
    }
}

fn take_icon(
    key: &str,
    result: Result<Option<RgbaImage>, IconError>,
) -> Option<RgbaImage> {
    match result {
        Ok(image) => image,
        Err(err) => {
            log::warn!("icon for {key} skipped: {err}");
            None
        },
    }
}

fn placeholder() -> IconBitmap {
    IconBitmap::from_image(&bitmap::placeholder_icon(ICON_SIZE))
}
