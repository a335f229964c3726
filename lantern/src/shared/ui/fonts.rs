use std::path::Path;

use iced::Font;
use iced::font::Weight;

const TITLE_FONT_FILE: &str = "Minecraftia.ttf";
const UI_FONT_FILE: &str = "NotoSans-Regular.ttf";
const TITLE_FONT_FAMILY: &str = "Minecraftia";
const UI_FONT_FAMILY: &str = "Noto Sans";

const TITLE_FONT_SIZE: f32 = 14.0;
const STATUS_FONT_SIZE: f32 = 11.0;
const UI_FONT_SIZE: f32 = 13.0;
const LAUNCH_FONT_SIZE: f32 = 26.0;

/// A font together with the pixel size it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FontFace {
    pub(crate) font: Font,
    pub(crate) size: f32,
}

/// Fonts used across the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FontsConfig {
    /// Instance titles and the settings button label.
    pub(crate) title: FontFace,
    /// Instance status lines.
    pub(crate) status: FontFace,
    /// Menus, dialogs and panels.
    pub(crate) ui: FontFace,
    /// Play button label.
    pub(crate) launch: FontFace,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            title: FontFace {
                font: Font::DEFAULT,
                size: TITLE_FONT_SIZE,
            },
            status: FontFace {
                font: Font::DEFAULT,
                size: STATUS_FONT_SIZE,
            },
            ui: FontFace {
                font: Font::DEFAULT,
                size: UI_FONT_SIZE,
            },
            launch: FontFace {
                font: Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                },
                size: LAUNCH_FONT_SIZE,
            },
        }
    }
}

/// Fonts resolved at startup plus the raw bytes that still have to be
/// registered with the renderer.
#[derive(Debug, Clone, Default)]
pub(crate) struct FontAssets {
    pub(crate) config: FontsConfig,
    pub(crate) payloads: Vec<Vec<u8>>,
}

/// Read bundled fonts from `fonts_dir`, keeping the default font for every
/// file that is missing or unreadable.
pub(crate) fn load_font_assets(fonts_dir: &Path) -> FontAssets {
    let mut assets = FontAssets::default();

    if let Some(bytes) = read_font(fonts_dir, TITLE_FONT_FILE) {
        let font = Font::with_name(TITLE_FONT_FAMILY);
        assets.config.title.font = font;
        assets.config.launch.font = Font {
            weight: Weight::Bold,
            ..font
        };
        assets.payloads.push(bytes);
    }

    if let Some(bytes) = read_font(fonts_dir, UI_FONT_FILE) {
        let font = Font::with_name(UI_FONT_FAMILY);
        assets.config.status.font = font;
        assets.config.ui.font = font;
        assets.payloads.push(bytes);
    }

    assets
}

fn read_font(fonts_dir: &Path, file_name: &str) -> Option<Vec<u8>> {
    let path = fonts_dir.join(file_name);
    match std::fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            log::warn!(
                "font {} unavailable, using default font: {err}",
                path.display()
            );
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use iced::Font;

    use super::{FontsConfig, load_font_assets};

    #[test]
    fn given_missing_fonts_dir_when_loading_then_defaults_are_kept() {
        let assets = load_font_assets(Path::new("/definitely/not/fonts"));

        assert!(assets.payloads.is_empty());
        assert_eq!(assets.config, FontsConfig::default());
        assert_eq!(assets.config.title.font, Font::DEFAULT);
        assert_eq!(assets.config.title.size, 14.0);
        assert_eq!(assets.config.status.size, 11.0);
    }
}
