use crate::config::{ConfigLoadStatus, LauncherConfig};
use crate::services::Localizer;

/// Read-only settings panel snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SettingsViewModel {
    pub(crate) is_open: bool,
}

/// A labelled line of the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SettingsRow {
    pub(crate) label: String,
    pub(crate) value: String,
}

/// Lines describing the effective configuration and how it was loaded.
pub(crate) fn settings_rows(
    config: &LauncherConfig,
    status: &ConfigLoadStatus,
    screenshot_count: usize,
    tr: &dyn Localizer,
) -> Vec<SettingsRow> {
    let timings = &config.carousel;
    let display = timings.display_ms.to_string();
    let transition = timings.transition_ms.to_string();
    let refresh = config.auto_refresh_secs.to_string();
    let count = screenshot_count.to_string();

    let status = match status {
        ConfigLoadStatus::Loaded => tr.tr("settings.status.loaded", &[]),
        ConfigLoadStatus::Missing => tr.tr("settings.status.missing", &[]),
        ConfigLoadStatus::Invalid(message) => {
            tr.tr("settings.status.invalid", &[message])
        },
    };

    vec![
        row(tr, "settings.baseDir", config.base_dir.display().to_string()),
        row(
            tr,
            "settings.assetsDir",
            config.assets_dir.display().to_string(),
        ),
        row(
            tr,
            "settings.carousel",
            tr.tr("settings.carouselTimings", &[&display, &transition]),
        ),
        row(
            tr,
            "settings.screenshots",
            tr.tr("settings.screenshotCount", &[&count]),
        ),
        row(
            tr,
            "settings.autoRefresh",
            tr.tr("settings.autoRefreshEvery", &[&refresh]),
        ),
        row(tr, "settings.status", status),
    ]
}

fn row(tr: &dyn Localizer, key: &str, value: String) -> SettingsRow {
    SettingsRow {
        label: tr.tr(key, &[]),
        value,
    }
}
