#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Point, Size, Subscription, Task, Theme, window};

use crate::config::{self, ConfigLoadStatus, LauncherConfig};
use crate::layout::LayeredCompositor;
use crate::services::Services;
use crate::shared::ui::fonts::{FontAssets, FontsConfig, load_font_assets};
use crate::shared::ui::icons::{UiIcons, load_ui_icons};
use crate::widgets::carousel::{CarouselEvent, CarouselIntent, CarouselWidget};
use crate::widgets::chrome::{ChromeEvent, ChromeWidget};
use crate::widgets::instances::services::FsIconSource;
use crate::widgets::instances::{
    InstancesEvent, InstancesIntent, InstancesWidget,
};
use crate::widgets::settings::{SettingsEvent, SettingsWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const WINDOW_WIDTH: f32 = 900.0;
pub(crate) const WINDOW_HEIGHT: f32 = 560.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 700.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 460.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Carousel widget
    Carousel(CarouselEvent),
    // Instance list widget
    Instances(InstancesEvent),
    // Bottom bar widget
    Chrome(ChromeEvent),
    // Settings panel widget
    Settings(SettingsEvent),
    // Background work
    FontLoaded(Result<(), iced::font::Error>),
    AutoRefresh,
    UpdateStatusPolled(bool),
    UpdateApplied { pending: bool },
    // Direct operations
    CursorMoved(Point),
    CursorLeft,
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) carousel: CarouselWidget,
    pub(crate) instances: InstancesWidget,
    pub(crate) chrome: ChromeWidget,
    pub(crate) settings: SettingsWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: LauncherConfig,
    pub(crate) config_status: ConfigLoadStatus,
    pub(crate) services: Services,
    pub(crate) fonts: FontsConfig,
    pub(crate) ui_icons: UiIcons,
    pub(crate) icon_source: FsIconSource,
    pub(crate) compositor: LayeredCompositor,
    /// Last pointer position in window coordinates.
    pub(crate) cursor: Option<Point>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let (config, config_status) = load_settings();
        let services = Services::local(&config);
        let FontAssets {
            config: fonts,
            payloads,
        } = load_font_assets(&config.fonts_dir());
        let ui_icons = load_ui_icons(&config.icons_dir());
        let icon_source = FsIconSource::new(config.icons_dir());

        let widgets = Widgets {
            sidebar: SidebarWidget::new(),
            carousel: CarouselWidget::new(config.carousel.alpha_step()),
            instances: InstancesWidget::new(&icon_source),
            chrome: ChromeWidget::new(),
            settings: SettingsWidget::new(),
        };

        let compositor = LayeredCompositor::with_window_size(
            Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            widgets.sidebar.width(),
        );

        let font_tasks = payloads
            .into_iter()
            .map(|bytes| iced::font::load(bytes).map(AppEvent::FontLoaded));
        let startup = [
            Task::done(AppEvent::Instances(InstancesEvent::Intent(
                InstancesIntent::LoadRequested,
            ))),
            Task::done(AppEvent::Carousel(CarouselEvent::Intent(
                CarouselIntent::Start,
            ))),
            crate::routers::chrome::poll_update_status(&services),
        ];

        let app = App {
            config,
            config_status,
            services,
            fonts,
            ui_icons,
            icon_source,
            compositor,
            cursor: None,
            widgets,
        };

        (app, Task::batch(font_tasks.chain(startup)))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.services.localizer.tr("launcher.title", &[])
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        view::view(self)
    }

    /// Return whether a blocking dialog covers the window.
    pub(crate) fn has_modal(&self) -> bool {
        self.widgets.instances.has_modal() || self.widgets.settings.is_open()
    }
}

/// Load the settings file, writing defaults on first start.
fn load_settings() -> (LauncherConfig, ConfigLoadStatus) {
    let (config, status) = match config::load_config() {
        Ok(load) => load.into_parts(),
        Err(err) => {
            log::warn!("settings file unreadable: {err}");
            (
                LauncherConfig::default(),
                ConfigLoadStatus::Invalid(err.to_string()),
            )
        },
    };

    match &status {
        ConfigLoadStatus::Loaded => log::info!("settings loaded"),
        ConfigLoadStatus::Missing => match config::save_config(&config) {
            Ok(()) => log::info!("default settings written"),
            Err(err) => log::warn!("default settings not written: {err}"),
        },
        ConfigLoadStatus::Invalid(message) => {
            log::warn!("settings file invalid, using defaults: {message}");
        },
    }

    (config, status)
}
