use iced::Task;

use crate::app::{App, AppEvent};
use crate::services::InstanceRequest;
use crate::widgets::chrome::{ChromeEvent, ChromeIntent};
use crate::widgets::instances::services::{
    load_icon_preview, open_directory, remove_user_icon, save_user_icon,
};
use crate::widgets::instances::{
    InstancesCtx, InstancesEffect, InstancesEvent, InstancesIntent,
};

/// Route an instance list event through widget reduction or app
/// orchestration.
pub(crate) fn route(app: &mut App, event: InstancesEvent) -> Task<AppEvent> {
    match event {
        InstancesEvent::Intent(event) => route_intent(app, event),
        InstancesEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Load the instance list from the catalog in the background.
pub(crate) fn load_instances(app: &App) -> Task<AppEvent> {
    let catalog = app.services.catalog.clone();
    Task::perform(async move { catalog.load() }, |result| {
        let intent = match result {
            Ok(rows) => InstancesIntent::Loaded(rows),
            Err(err) => InstancesIntent::LoadFailed(err.to_string()),
        };
        intent_event(intent)
    })
}

fn route_intent(app: &mut App, event: InstancesIntent) -> Task<AppEvent> {
    let ctx = InstancesCtx { cursor: app.cursor };
    app.widgets
        .instances
        .reduce(event, &ctx)
        .map(AppEvent::Instances)
}

fn route_effect(app: &mut App, effect: InstancesEffect) -> Task<AppEvent> {
    match effect {
        InstancesEffect::LoadRequested => load_instances(app),
        InstancesEffect::ResolveIcons => {
            app.widgets.instances.resolve_icons(&app.icon_source);
            Task::none()
        },
        InstancesEffect::Forward(request) => forward(app, request),
        InstancesEffect::OpenDirectory(dir) => {
            if let Err(err) = open_directory(&dir) {
                log::warn!("failed to open {}: {err}", dir.display());
            }
            Task::none()
        },
        InstancesEffect::CopyToClipboard(contents) => {
            iced::clipboard::write(contents)
        },
        InstancesEffect::LoadIconPreview { name, dir } => Task::perform(
            async move { load_icon_preview(&dir) },
            move |preview| {
                intent_event(InstancesIntent::IconPreviewLoaded {
                    name,
                    preview,
                })
            },
        ),
        InstancesEffect::SaveIcon { name, dir, source } => Task::perform(
            async move { save_user_icon(&source, &dir) },
            move |result| match result {
                Ok(path) => {
                    log::info!("saved icon for {name} to {}", path.display());
                    intent_event(InstancesIntent::IconSaved { name })
                },
                Err(err) => intent_event(InstancesIntent::IconFailed {
                    name,
                    message: err.to_string(),
                }),
            },
        ),
        InstancesEffect::RemoveIcon { name, dir } => Task::perform(
            async move { remove_user_icon(&dir) },
            move |result| match result {
                Ok(()) => {
                    log::info!("removed icon for {name}");
                    intent_event(InstancesIntent::IconRemoved { name })
                },
                Err(err) => intent_event(InstancesIntent::IconFailed {
                    name,
                    message: err.to_string(),
                }),
            },
        ),
        InstancesEffect::SelectionChanged { is_local } => Task::done(
            AppEvent::Chrome(ChromeEvent::Intent(
                ChromeIntent::SelectionChanged(is_local),
            )),
        ),
    }
}

fn forward(app: &App, request: InstanceRequest) -> Task<AppEvent> {
    app.services.manager.dispatch(&request);
    if request.reloads_list() {
        load_instances(app)
    } else {
        Task::none()
    }
}

fn intent_event(intent: InstancesIntent) -> AppEvent {
    AppEvent::Instances(InstancesEvent::Intent(intent))
}
