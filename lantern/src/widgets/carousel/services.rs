use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lantern_ui_paint::bitmap;
use rand::seq::SliceRandom;

use super::errors::CarouselError;
use super::model::Screenshot;
use crate::shared::ui::icons::handle_from_rgba;

const SCREENSHOT_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Collect every screenshot under `<base>/instances/*/minecraft/screenshots`
/// in shuffled order.
///
/// A missing `instances` directory yields an empty list; unreadable
/// instance folders are skipped.
pub(crate) fn scan_screenshots(
    base_dir: &Path,
) -> Result<Vec<PathBuf>, CarouselError> {
    let instances_dir = base_dir.join("instances");
    let entries = match fs::read_dir(&instances_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(Vec::new());
        },
        Err(source) => {
            return Err(CarouselError::Io {
                path: instances_dir,
                source,
            });
        },
    };

    let mut paths = Vec::new();
    for entry in readable_entries(entries, &instances_dir) {
        let screenshots = entry.path().join("minecraft").join("screenshots");
        if !screenshots.is_dir() {
            continue;
        }
        match collect_images(&screenshots) {
            Ok(found) => paths.extend(found),
            Err(err) => log::warn!("skipping screenshots folder: {err}"),
        }
    }

    paths.shuffle(&mut rand::rng());
    Ok(paths)
}

/// Decode a screenshot file into a paintable image.
pub(crate) fn decode_screenshot(
    path: &Path,
) -> Result<Screenshot, CarouselError> {
    let image =
        bitmap::load(path).map_err(|source| CarouselError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    let (width, height) = image.dimensions();

    Ok(Screenshot {
        path: path.to_path_buf(),
        handle: handle_from_rgba(image),
        width,
        height,
    })
}

fn collect_images(dir: &Path) -> Result<Vec<PathBuf>, CarouselError> {
    let entries = fs::read_dir(dir).map_err(|source| CarouselError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images = Vec::new();
    for entry in readable_entries(entries, dir) {
        let path = entry.path();
        if path.is_file() && is_screenshot(&path) {
            let path = path.canonicalize().unwrap_or(path);
            images.push(path);
        }
    }
    Ok(images)
}

/// Keep the directory entries that could be read, warning about the rest.
fn readable_entries<T>(
    entries: impl IntoIterator<Item = io::Result<T>>,
    dir: &Path,
) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("skipping entry in {}: {err}", dir.display());
                None
            },
        })
        .collect()
}

fn is_screenshot(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            SCREENSHOT_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
