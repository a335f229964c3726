/// Read-only bottom bar snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChromeViewModel {
    pub(crate) launch_label_key: &'static str,
    /// Whether the self-update button is shown.
    pub(crate) show_update: bool,
}

/// Play button label for the selected instance.
pub(crate) fn launch_label_key(
    selected_is_local: Option<bool>,
) -> &'static str {
    match selected_is_local {
        Some(false) => "launcher.install",
        _ => "launcher.launch",
    }
}
