use iced::widget::{Space, Stack, container};
use iced::{Element, Length, Padding, Size};

use super::{App, AppEvent};
use crate::layout::{CompositorLayout, LAYER_ORDER, Layer};
use crate::widgets::carousel;
use crate::widgets::chrome::ChromeEvent;
use crate::widgets::chrome::view::{self as chrome_view, ChromeProps};
use crate::widgets::instances::view::{
    self as instances_view, ContextMenuProps, DialogsProps, ListProps,
};
use crate::widgets::instances::{InstancesEvent, InstancesIntent};
use crate::widgets::settings::SettingsEvent;
use crate::widgets::settings::model::settings_rows;
use crate::widgets::settings::view::{self as settings_view, SettingsProps};
use crate::widgets::sidebar::SidebarEvent;
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarProps};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    let Some(layout) = app.compositor.layout().copied() else {
        return background_layer(app);
    };

    let mut layers: Vec<Element<'_, AppEvent>> = LAYER_ORDER
        .into_iter()
        .map(|layer| {
            let element = match layer {
                Layer::Background => background_layer(app),
                Layer::Content => content_layer(app, &layout),
                Layer::Controls => controls_layer(app, &layout),
            };
            let bounds = layout.layer_bounds(layer);
            container(element)
                .width(Length::Fixed(bounds.width))
                .height(Length::Fixed(bounds.height))
                .into()
        })
        .collect();

    let area_size = Size::new(layout.viewport.width, layout.viewport.height);
    layers.extend(overlays(app, area_size));

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn background_layer(app: &App) -> Element<'_, AppEvent> {
    carousel::view::view(app.widgets.carousel.vm())
}

fn content_layer<'a>(
    app: &'a App,
    layout: &CompositorLayout,
) -> Element<'a, AppEvent> {
    let Some(bounds) = layout.sidebar else {
        return Space::new().into();
    };

    let list = instances_view::list(ListProps {
        vm: app.widgets.instances.vm(),
        localizer: app.services.localizer.as_ref(),
        title_font: app.fonts.title,
        status_font: app.fonts.status,
    })
    .map(instances_intent);

    let sidebar = sidebar_view::view(SidebarProps {
        vm: app.widgets.sidebar.vm(),
        height: bounds.height,
        list,
        options_icon: &app.ui_icons.options,
        settings_label: app.services.localizer.tr("launcher.settings", &[]),
        label_font: app.fonts.title,
        on_event: |event| AppEvent::Sidebar(SidebarEvent::Intent(event)),
    });

    container(sidebar)
        .padding(Padding {
            top: bounds.y,
            left: bounds.x,
            ..Padding::ZERO
        })
        .into()
}

fn controls_layer<'a>(
    app: &'a App,
    layout: &CompositorLayout,
) -> Element<'a, AppEvent> {
    let vm = app.widgets.chrome.vm();
    chrome_view::view(ChromeProps {
        vm,
        launch_label: app.services.localizer.tr(vm.launch_label_key, &[]),
        launch_font: app.fonts.launch,
        update_icon: app.ui_icons.update.as_ref(),
        bar: layout.bottom_bar,
        play: layout.play_button_in_bar(),
        update: layout.update_button_in_bar(),
    })
    .map(|event| AppEvent::Chrome(ChromeEvent::Intent(event)))
}

/// Context menu and dialogs, bottom to top.
fn overlays(app: &App, area_size: Size) -> Vec<Element<'_, AppEvent>> {
    let localizer = app.services.localizer.as_ref();
    let vm = app.widgets.instances.vm();
    let dialogs = DialogsProps {
        localizer,
        font: app.fonts.ui,
    };
    let mut overlays = Vec::new();

    if let Some(menu) = vm.context_menu {
        overlays.push(
            instances_view::context_menu(ContextMenuProps {
                menu,
                localizer,
                font: app.fonts.ui,
                area_size,
            })
            .map(instances_intent),
        );
    }
    if let Some(settings) = vm.icon_settings {
        overlays.push(
            instances_view::icon_settings_view(settings, dialogs)
                .map(instances_intent),
        );
    }
    if let Some(confirm) = vm.confirm {
        overlays.push(
            instances_view::confirm_view(confirm, dialogs)
                .map(instances_intent),
        );
    }
    if app.widgets.settings.vm().is_open {
        let rows = settings_rows(
            &app.config,
            &app.config_status,
            app.widgets.carousel.len(),
            localizer,
        );
        overlays.push(
            settings_view::view(SettingsProps {
                rows,
                localizer,
                font: app.fonts.ui,
            })
            .map(|event| AppEvent::Settings(SettingsEvent::Intent(event))),
        );
    }
    if let Some(message) = vm.error {
        overlays.push(
            instances_view::error_view(message, dialogs).map(instances_intent),
        );
    }

    overlays
}

fn instances_intent(intent: InstancesIntent) -> AppEvent {
    AppEvent::Instances(InstancesEvent::Intent(intent))
}
