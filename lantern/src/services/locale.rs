/// Localized string lookup.
pub(crate) trait Localizer: Send + Sync {
    /// Resolve `key` and substitute `{0}`, `{1}`, ... with `args`.
    fn tr(&self, key: &str, args: &[&str]) -> String;
}

/// Built-in English strings; unknown keys render as the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn tr(&self, key: &str, args: &[&str]) -> String {
        let template = english(key).unwrap_or(key);
        substitute(template, args)
    }
}

fn english(key: &str) -> Option<&'static str> {
    let value = match key {
        "launcher.title" => "Lantern",
        "launcher.launch" => "Launch",
        "launcher.install" => "Install",
        "launcher.updateLauncher" => "Update launcher",
        "launcher.refreshList" => "Refresh list",
        "launcher.settings" => "Settings",
        "instance.unknown" => "Unknown",
        "instance.status.install" => "Click to install",
        "instance.status.update" => "Update available",
        "instance.status.ready" => "Ready to play",
        "instance.install" => "Install",
        "instance.launch" => "Launch",
        "instance.openFolder" => "Open folder",
        "instance.openSaves" => "Open saves",
        "instance.openResourcePacks" => "Open resource packs",
        "instance.openScreenshots" => "Open screenshots",
        "instance.copyAsPath" => "Copy path",
        "instance.openSettings" => "Instance settings",
        "instance.forceUpdate" => "Force update",
        "instance.hardForceUpdate" => "Hard force update",
        "instance.deleteFiles" => "Delete files",
        "instance.confirmDelete" => {
            "Are you sure you want to delete the files of {0}?"
        },
        "instance.confirmHardUpdate" => {
            "A hard update removes all instance files before reinstalling. \
             Continue?"
        },
        "instance.options.title" => "Settings for {0}",
        "instance.options.icon" => "Modpack icon",
        "instance.options.noIcon" => "No icon",
        "instance.options.iconPath" => "Path to a PNG or JPG image",
        "instance.options.changeIcon" => "Change icon",
        "instance.options.removeIcon" => "Remove icon",
        "settings.title" => "Launcher settings",
        "settings.baseDir" => "Launcher directory",
        "settings.assetsDir" => "Assets directory",
        "settings.carousel" => "Screenshot carousel",
        "settings.carouselTimings" => "{0} ms display, {1} ms fade",
        "settings.screenshots" => "Screenshots",
        "settings.screenshotCount" => "{0} found",
        "settings.autoRefresh" => "Instance refresh",
        "settings.autoRefreshEvery" => "every {0} s",
        "settings.status" => "Settings file",
        "settings.status.loaded" => "loaded",
        "settings.status.missing" => "not found, using defaults",
        "settings.status.invalid" => "invalid, using defaults ({0})",
        "settings.rescan" => "Rescan screenshots",
        "confirmTitle" => "Are you sure?",
        "errorTitle" => "Error",
        "button.ok" => "OK",
        "button.cancel" => "Cancel",
        "button.close" => "Close",
        _ => return None,
    };
    Some(value)
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut output = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        output = output.replace(&format!("{{{index}}}"), arg);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{EnglishLocalizer, Localizer};

    #[test]
    fn given_known_key_when_translating_then_english_text_is_returned() {
        assert_eq!(
            EnglishLocalizer.tr("instance.status.ready", &[]),
            "Ready to play"
        );
    }

    #[test]
    fn given_placeholders_when_translating_then_args_are_substituted() {
        assert_eq!(
            EnglishLocalizer.tr("settings.carouselTimings", &["7000", "1000"]),
            "7000 ms display, 1000 ms fade"
        );
    }

    #[test]
    fn given_unknown_key_when_translating_then_key_is_returned() {
        assert_eq!(EnglishLocalizer.tr("missing.key", &[]), "missing.key");
    }
}
