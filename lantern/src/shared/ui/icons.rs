use std::path::Path;

use iced::widget::image::Handle;
use image::RgbaImage;
use lantern_ui_paint::bitmap;

pub(crate) const OPTIONS_ICON_SIZE: u32 = 52;
pub(crate) const UPDATE_ICON_SIZE: u32 = 24;

const OPTIONS_ICON_FILE: &str = "options.png";
const UPDATE_ICON_FILE: &str = "update.png";

/// Shell icons resolved once at startup.
#[derive(Debug, Clone)]
pub(crate) struct UiIcons {
    /// Settings button icon, the placeholder when the asset is missing.
    pub(crate) options: Handle,
    /// Self-update button icon; painted as a plain square when absent.
    pub(crate) update: Option<Handle>,
}

/// Load shell icons from `icons_dir`, logging every missing asset.
pub(crate) fn load_ui_icons(icons_dir: &Path) -> UiIcons {
    let options = load_scaled(icons_dir, OPTIONS_ICON_FILE, OPTIONS_ICON_SIZE)
        .unwrap_or_else(|| bitmap::placeholder_icon(OPTIONS_ICON_SIZE));
    let update = load_scaled(icons_dir, UPDATE_ICON_FILE, UPDATE_ICON_SIZE);

    UiIcons {
        options: handle_from_rgba(options),
        update: update.map(handle_from_rgba),
    }
}

/// Wrap decoded pixels in an image handle the renderer can cache.
pub(crate) fn handle_from_rgba(image: RgbaImage) -> Handle {
    let (width, height) = image.dimensions();
    Handle::from_rgba(width, height, image.into_raw())
}

fn load_scaled(dir: &Path, file_name: &str, size: u32) -> Option<RgbaImage> {
    let path = dir.join(file_name);
    match bitmap::load(&path) {
        Ok(image) => Some(bitmap::scale_bilinear(&image, size, size)),
        Err(err) => {
            log::warn!("icon {} unavailable: {err}", path.display());
            None
        },
    }
}
