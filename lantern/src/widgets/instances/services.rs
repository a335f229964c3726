use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::RgbaImage;
use lantern_ui_paint::{PaintError, bitmap};

use super::errors::IconError;
use super::icon_cache::IconSource;
use super::model::{USER_ICON_FILE, USER_ICON_SIZE};
use crate::shared::ui::icons::handle_from_rgba;

const BUNDLED_ICONS_DIR: &str = "instances";
const DEFAULT_ICON_FILES: [&str; 2] =
    ["default_modpack_icon.png", "instance_icon.png"];

/// Icon source reading bundled assets from `icons_dir` and user icons from
/// instance directories.
#[derive(Debug, Clone)]
pub(crate) struct FsIconSource {
    icons_dir: PathBuf,
}

impl FsIconSource {
    pub(crate) fn new(icons_dir: PathBuf) -> Self {
        Self { icons_dir }
    }
}

impl IconSource for FsIconSource {
    fn bundled(&self, key: &str) -> Result<Option<RgbaImage>, IconError> {
        let path = self
            .icons_dir
            .join(BUNDLED_ICONS_DIR)
            .join(format!("{key}.png"));
        read_optional(&path)
    }

    fn user(
        &self,
        instance_dir: &Path,
    ) -> Result<Option<RgbaImage>, IconError> {
        read_optional(&instance_dir.join(USER_ICON_FILE))
    }

    fn default_icon(&self) -> Result<Option<RgbaImage>, IconError> {
        for file_name in DEFAULT_ICON_FILES {
            if let Some(image) = read_optional(&self.icons_dir.join(file_name))? {
                return Ok(Some(image));
            }
        }
        Ok(None)
    }
}

/// Decode `path`, treating a missing file as absent.
fn read_optional(path: &Path) -> Result<Option<RgbaImage>, IconError> {
    match bitmap::load(path) {
        Ok(image) => Ok(Some(image)),
        Err(PaintError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            Ok(None)
        },
        Err(source) => Err(IconError::Decode {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Replace the user icon of the instance in `instance_dir` with `source`,
/// scaled to the stored icon size.
pub(crate) fn save_user_icon(
    source: &Path,
    instance_dir: &Path,
) -> Result<PathBuf, IconError> {
    let image = bitmap::load(source).map_err(|err| IconError::Read {
        path: source.to_path_buf(),
        source: err,
    })?;
    let scaled = bitmap::scale_bilinear(&image, USER_ICON_SIZE, USER_ICON_SIZE);
    let bytes = bitmap::encode_png(&scaled)
        .map_err(|err| IconError::Save(err.to_string()))?;

    fs::create_dir_all(instance_dir)
        .map_err(|err| IconError::Save(err.to_string()))?;
    let target = instance_dir.join(USER_ICON_FILE);
    let tmp = target.with_extension("png.tmp");
    fs::write(&tmp, bytes).map_err(|err| IconError::Save(err.to_string()))?;
    fs::rename(&tmp, &target).map_err(|err| IconError::Save(err.to_string()))?;

    Ok(target)
}

/// Delete the user icon of the instance in `instance_dir`.
pub(crate) fn remove_user_icon(instance_dir: &Path) -> Result<(), IconError> {
    fs::remove_file(instance_dir.join(USER_ICON_FILE))
        .map_err(IconError::Delete)
}

/// Load the current user icon for the settings preview.
pub(crate) fn load_icon_preview(instance_dir: &Path) -> Option<Handle> {
    match read_optional(&instance_dir.join(USER_ICON_FILE)) {
        Ok(image) => image.map(|image| {
            handle_from_rgba(bitmap::scale_bilinear(
                &image,
                USER_ICON_SIZE,
                USER_ICON_SIZE,
            ))
        }),
        Err(err) => {
            log::warn!("icon preview unavailable: {err}");
            None
        },
    }
}

/// Open `dir` with the platform file manager, creating it first.
pub(crate) fn open_directory(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    open::that_detached(dir)
}
