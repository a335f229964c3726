/// Intent events handled by the bottom bar reducer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeIntent {
    PlayPressed,
    UpdatePressed,
    UpdateStatusChanged(bool),
    /// Selected instance locality; `None` when nothing is selected.
    SelectionChanged(Option<bool>),
    UpdateFinished,
}

/// Effect events produced by the bottom bar reducer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEffect {
    LaunchSelected,
    PerformSelfUpdate,
}

/// Bottom bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Intent event reduced by the bottom bar widget.
    Intent(ChromeIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ChromeEffect),
}
