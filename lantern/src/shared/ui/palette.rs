use iced::Color;

// Window
pub(crate) const CAROUSEL_FALLBACK: Color = Color::from_rgb8(30, 30, 30);
pub(crate) const CAROUSEL_OVERLAY: Color = Color::from_rgba8(0, 0, 0, 0.3);
pub(crate) const MODAL_BACKDROP: Color = Color::from_rgba8(0, 0, 0, 0.5);
pub(crate) const PANEL_BACKGROUND: Color = Color::from_rgba8(45, 45, 45, 0.95);
pub(crate) const PANEL_BORDER: Color = Color::from_rgba8(100, 100, 100, 0.6);
pub(crate) const TEXT_PRIMARY: Color = Color::WHITE;
pub(crate) const TEXT_SECONDARY: Color = Color::from_rgb8(180, 180, 180);
pub(crate) const TEXT_ERROR: Color = Color::from_rgb8(230, 110, 100);

// Sidebar
pub(crate) const SIDEBAR_BACKGROUND: Color =
    Color::from_rgba8(60, 60, 60, 0.784);
pub(crate) const SETTINGS_HOVER: Color = Color::from_rgba8(50, 50, 50, 0.863);
pub(crate) const SETTINGS_PRESSED: Color = Color::from_rgba8(60, 60, 60, 0.863);

// Instance rows
pub(crate) const ROW_SELECTED_FILL: Color =
    Color::from_rgba8(60, 60, 60, 0.863);
pub(crate) const ROW_PRESSED_FILL: Color = Color::from_rgba8(40, 40, 40, 0.863);
pub(crate) const ROW_HIGHLIGHT: Color = Color::from_rgba8(120, 120, 120, 0.706);
pub(crate) const ROW_SHADOW: Color = Color::from_rgba8(20, 20, 20, 0.706);
pub(crate) const ROW_OUTER_EDGE: Color = Color::from_rgb8(30, 30, 30);

// Play button
pub(crate) const PLAY_OUTER_EDGE: Color = Color::from_rgb8(20, 40, 20);
pub(crate) const PLAY_HIGHLIGHT: Color =
    Color::from_rgba8(100, 200, 100, 0.706);
pub(crate) const PLAY_SHADOW: Color = Color::from_rgba8(20, 80, 20, 0.706);
pub(crate) const PLAY_TEXT_SHADOW: Color = Color::from_rgb8(30, 80, 30);
pub(crate) const PLAY_GRADIENT: (Color, Color) =
    (Color::from_rgb8(67, 160, 71), Color::from_rgb8(46, 125, 50));
pub(crate) const PLAY_GRADIENT_HOVER: (Color, Color) =
    (Color::from_rgb8(85, 180, 89), Color::from_rgb8(56, 142, 60));
pub(crate) const PLAY_GRADIENT_PRESSED: (Color, Color) =
    (Color::from_rgb8(40, 120, 44), Color::from_rgb8(30, 100, 34));

// Icon button
pub(crate) const ICON_BUTTON_FILL: Color = Color::from_rgba8(60, 60, 60, 0.784);
pub(crate) const ICON_BUTTON_HOVER: Color =
    Color::from_rgba8(80, 80, 80, 0.863);
pub(crate) const ICON_BUTTON_PRESSED: Color =
    Color::from_rgba8(40, 40, 40, 0.863);
pub(crate) const ICON_BUTTON_BORDER: Color =
    Color::from_rgba8(100, 100, 100, 0.588);

// Menus
pub(crate) const MENU_BACKGROUND: Color = Color::from_rgba8(40, 40, 40, 0.96);
pub(crate) const MENU_HOVER: Color = Color::from_rgb8(70, 110, 70);
pub(crate) const MENU_SEPARATOR: Color = Color::from_rgba8(120, 120, 120, 0.4);
