/// Intent events handled by the settings panel reducer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsIntent {
    Open,
    Close,
    RescanPressed,
}

/// Effect events produced by the settings panel reducer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEffect {
    RescanScreenshots,
}

/// Settings panel event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEvent {
    /// Intent event reduced by the settings panel widget.
    Intent(SettingsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SettingsEffect),
}
