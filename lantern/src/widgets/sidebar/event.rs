use iced::Point;

/// Intent events handled by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    PointerEntered,
    PointerExited,
    /// Pointer moved somewhere in the window.
    PointerMoved { position: Point },
    PointerLeftWindow,
    Tick,
    SettingsPressed,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    /// Sidebar width changed; window surfaces need new bounds.
    Relayout,
    OpenSettings,
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
