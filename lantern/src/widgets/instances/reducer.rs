use std::path::PathBuf;

use iced::{Point, Task};

use super::event::{InstancesEffect, InstancesEvent, InstancesIntent};
use super::model::{MenuAction, PendingConfirm};
use super::state::InstancesState;
use crate::services::{InstanceEntry, InstanceRequest};

/// Read-only context for instance list reduction.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct InstancesCtx {
    /// Last known pointer position in window coordinates.
    pub(crate) cursor: Option<Point>,
}

/// Reduce an instance list intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut InstancesState,
    event: InstancesIntent,
    ctx: &InstancesCtx,
) -> Task<InstancesEvent> {
    use InstancesIntent as I;

    match event {
        I::LoadRequested => effect(InstancesEffect::LoadRequested),
        I::Loaded(rows) => {
            log::debug!("instance list loaded with {} entries", rows.len());
            state.replace_rows(rows);
            Task::batch([
                effect(InstancesEffect::ResolveIcons),
                selection_changed(state),
            ])
        },
        I::LoadFailed(message) => {
            log::warn!("instance list load failed: {message}");
            Task::none()
        },
        I::RowPressed(index) => {
            if state.press(index) {
                selection_changed(state)
            } else {
                Task::none()
            }
        },
        I::RowReleased | I::PointerLeftList => {
            state.release();
            Task::none()
        },
        I::RowDoubleClicked(index) => {
            let changed = state.select(index);
            let Some(entry) = state.row(index) else {
                return Task::none();
            };
            let launch = forward(InstanceRequest::Launch {
                name: entry.name.clone(),
            });
            if changed {
                Task::batch([selection_changed(state), launch])
            } else {
                launch
            }
        },
        I::ContextMenuRequested(index) => {
            state.release();
            let changed = index.is_some_and(|index| state.select(index));
            state.open_context_menu(ctx.cursor.unwrap_or(Point::ORIGIN), index);
            if changed {
                selection_changed(state)
            } else {
                Task::none()
            }
        },
        I::ContextMenuDismiss => {
            state.take_context_menu();
            Task::none()
        },
        I::MenuActionSelected(action) => {
            let entry = state
                .take_context_menu()
                .and_then(|menu| menu.index)
                .and_then(|index| state.row(index))
                .cloned();
            apply_menu_action(state, action, entry)
        },
        I::ConfirmAccepted => match state.take_confirm() {
            Some(confirm) => forward(confirm.request),
            None => Task::none(),
        },
        I::ConfirmCancelled => {
            state.take_confirm();
            Task::none()
        },
        I::LaunchSelected => match state.selected_entry() {
            Some(entry) => forward(InstanceRequest::Launch {
                name: entry.name.clone(),
            }),
            None => Task::none(),
        },
        I::IconPathChanged(value) => {
            if let Some(settings) = state.icon_settings_mut() {
                settings.path_input = value;
            }
            Task::none()
        },
        I::ChangeIconPressed => {
            let Some(settings) = state.icon_settings_mut() else {
                return Task::none();
            };
            let source = settings.path_input.trim().to_string();
            if source.is_empty() || settings.busy {
                return Task::none();
            }
            settings.busy = true;
            effect(InstancesEffect::SaveIcon {
                name: settings.name.clone(),
                dir: settings.dir.clone(),
                source: PathBuf::from(source),
            })
        },
        I::RemoveIconPressed => {
            let Some(settings) = state.icon_settings_mut() else {
                return Task::none();
            };
            if settings.preview.is_none() || settings.busy {
                return Task::none();
            }
            settings.busy = true;
            effect(InstancesEffect::RemoveIcon {
                name: settings.name.clone(),
                dir: settings.dir.clone(),
            })
        },
        I::IconSettingsClosed => {
            state.close_icon_settings();
            Task::none()
        },
        I::IconPreviewLoaded { name, preview } => {
            if let Some(settings) = state.icon_settings_mut() {
                if settings.name == name {
                    settings.preview = preview;
                }
            }
            Task::none()
        },
        I::IconSaved { name } => {
            log::info!("custom icon saved for {name}");
            icon_changed(state, name)
        },
        I::IconRemoved { name } => {
            log::info!("custom icon removed for {name}");
            icon_changed(state, name)
        },
        I::IconFailed { name, message } => {
            log::warn!("icon update for {name} failed: {message}");
            if let Some(settings) = state.icon_settings_mut() {
                settings.busy = false;
            }
            state.show_error(message);
            Task::none()
        },
        I::ErrorDismissed => {
            state.dismiss_error();
            Task::none()
        },
    }
}

fn apply_menu_action(
    state: &mut InstancesState,
    action: MenuAction,
    entry: Option<InstanceEntry>,
) -> Task<InstancesEvent> {
    if action == MenuAction::RefreshList {
        // A manual refresh also picks up icons changed outside the shell.
        state.clear_icons();
        return effect(InstancesEffect::LoadRequested);
    }
    let Some(entry) = entry else {
        return Task::none();
    };

    match action {
        MenuAction::Launch | MenuAction::Install => {
            forward(InstanceRequest::Launch { name: entry.name })
        },
        MenuAction::Open(folder) => effect(InstancesEffect::OpenDirectory(
            folder.resolve(&entry.content_dir),
        )),
        MenuAction::CopyPath => effect(InstancesEffect::CopyToClipboard(
            entry.content_dir.display().to_string(),
        )),
        MenuAction::OpenSettings => {
            state.open_icon_settings(&entry);
            effect(InstancesEffect::LoadIconPreview {
                name: entry.name,
                dir: entry.dir,
            })
        },
        MenuAction::ForceUpdate => {
            forward(InstanceRequest::ForceUpdate { name: entry.name })
        },
        MenuAction::HardForceUpdate => {
            state.set_confirm(PendingConfirm {
                request: InstanceRequest::HardUpdate { name: entry.name },
                title: entry.title,
            });
            Task::none()
        },
        MenuAction::DeleteFiles => {
            state.set_confirm(PendingConfirm {
                request: InstanceRequest::Delete { name: entry.name },
                title: entry.title,
            });
            Task::none()
        },
        MenuAction::RefreshList => Task::none(),
    }
}

fn icon_changed(
    state: &mut InstancesState,
    name: String,
) -> Task<InstancesEvent> {
    state.invalidate_icon(&name);

    let mut tasks = vec![effect(InstancesEffect::ResolveIcons)];
    if let Some(settings) = state.icon_settings_mut() {
        settings.busy = false;
        settings.path_input.clear();
        if settings.name == name {
            tasks.push(effect(InstancesEffect::LoadIconPreview {
                name,
                dir: settings.dir.clone(),
            }));
        }
    }
    Task::batch(tasks)
}

fn selection_changed(state: &InstancesState) -> Task<InstancesEvent> {
    effect(InstancesEffect::SelectionChanged {
        is_local: state.selected_entry().map(|entry| entry.is_local),
    })
}

fn forward(request: InstanceRequest) -> Task<InstancesEvent> {
    effect(InstancesEffect::Forward(request))
}

fn effect(effect: InstancesEffect) -> Task<InstancesEvent> {
    Task::done(InstancesEvent::Effect(effect))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use iced::Point;
    use iced::widget::image::Handle;
    use image::RgbaImage;

    use super::InstancesCtx;
    use crate::services::{InstanceEntry, InstanceRequest};
    use crate::widgets::instances::errors::IconError;
    use crate::widgets::instances::icon_cache::IconSource;
    use crate::widgets::instances::model::{MenuAction, Subfolder};
    use crate::widgets::instances::{InstancesIntent, InstancesWidget};

    struct NoIcons;

    impl IconSource for NoIcons {
        fn bundled(&self, _key: &str) -> Result<Option<RgbaImage>, IconError> {
            Ok(None)
        }

        fn user(&self, _dir: &Path) -> Result<Option<RgbaImage>, IconError> {
            Ok(None)
        }

        fn default_icon(&self) -> Result<Option<RgbaImage>, IconError> {
            Ok(None)
        }
    }

    fn entry(name: &str, is_local: bool) -> InstanceEntry {
        let dir = PathBuf::from("/base/instances").join(name);
        InstanceEntry {
            name: name.to_string(),
            title: name.to_uppercase(),
            is_local,
            update_pending: false,
            content_dir: dir.join("minecraft"),
            dir,
        }
    }

    fn loaded(rows: Vec<InstanceEntry>) -> InstancesWidget {
        let mut widget = InstancesWidget::new(&NoIcons);
        let _task = widget.reduce(InstancesIntent::Loaded(rows), &ctx());
        widget
    }

    fn ctx() -> InstancesCtx {
        InstancesCtx {
            cursor: Some(Point::new(40.0, 60.0)),
        }
    }

    fn open_menu_on(widget: &mut InstancesWidget, index: usize) {
        let _task = widget
            .reduce(InstancesIntent::ContextMenuRequested(Some(index)), &ctx());
    }

    #[test]
    fn given_first_load_when_rows_arrive_then_first_row_is_selected() {
        let widget = loaded(vec![entry("alpha", true), entry("beta", true)]);

        assert_eq!(widget.vm().selected, Some(0));
    }

    #[test]
    fn given_selection_when_reloaded_with_fewer_rows_then_selection_resets() {
        let mut widget = loaded(vec![
            entry("alpha", true),
            entry("beta", true),
            entry("gamma", true),
        ]);
        let _task = widget.reduce(InstancesIntent::RowPressed(2), &ctx());
        assert_eq!(widget.vm().selected, Some(2));

        let _task = widget.reduce(
            InstancesIntent::Loaded(vec![entry("alpha", true)]),
            &ctx(),
        );

        assert_eq!(widget.vm().selected, Some(0));
    }

    #[test]
    fn given_selection_when_reloaded_with_same_rows_then_index_is_kept() {
        let rows = vec![entry("alpha", true), entry("beta", true)];
        let mut widget = loaded(rows.clone());
        let _task = widget.reduce(InstancesIntent::RowPressed(1), &ctx());

        let _task = widget.reduce(InstancesIntent::Loaded(rows), &ctx());

        assert_eq!(widget.vm().selected, Some(1));
    }

    #[test]
    fn given_empty_load_when_rows_arrive_then_nothing_is_selected() {
        let widget = loaded(Vec::new());

        assert_eq!(widget.vm().selected, None);
    }

    #[test]
    fn given_pressed_row_when_released_then_pressed_state_clears() {
        let mut widget = loaded(vec![entry("alpha", true), entry("beta", true)]);

        let _task = widget.reduce(InstancesIntent::RowPressed(1), &ctx());
        assert_eq!(widget.vm().pressed, Some(1));
        assert_eq!(widget.vm().selected, Some(1));

        let _task = widget.reduce(InstancesIntent::RowReleased, &ctx());
        assert_eq!(widget.vm().pressed, None);
        assert_eq!(widget.vm().selected, Some(1));
    }

    #[test]
    fn given_pressed_row_when_pointer_leaves_list_then_pressed_state_clears() {
        let mut widget = loaded(vec![entry("alpha", true)]);
        let _task = widget.reduce(InstancesIntent::RowPressed(0), &ctx());

        let _task = widget.reduce(InstancesIntent::PointerLeftList, &ctx());

        assert_eq!(widget.vm().pressed, None);
    }

    #[test]
    fn given_right_click_on_row_when_reduced_then_menu_opens_at_cursor_and_selects_row()
     {
        let mut widget = loaded(vec![entry("alpha", true), entry("beta", false)]);

        open_menu_on(&mut widget, 1);

        let menu = widget.context_menu().expect("menu should be open");
        assert_eq!(menu.cursor, Point::new(40.0, 60.0));
        assert_eq!(
            menu.actions,
            vec![MenuAction::Install, MenuAction::RefreshList]
        );
        assert_eq!(widget.vm().selected, Some(1));
    }

    #[test]
    fn given_delete_action_when_selected_then_confirmation_is_required() {
        let mut widget = loaded(vec![entry("alpha", true)]);
        open_menu_on(&mut widget, 0);

        let _task = widget.reduce(
            InstancesIntent::MenuActionSelected(MenuAction::DeleteFiles),
            &ctx(),
        );

        assert!(widget.context_menu().is_none());
        let confirm = widget.vm().confirm.expect("confirmation should open");
        assert_eq!(
            confirm.request,
            InstanceRequest::Delete {
                name: String::from("alpha"),
            }
        );
        assert!(widget.has_modal());

        let _task = widget.reduce(InstancesIntent::ConfirmCancelled, &ctx());
        assert!(!widget.has_modal());
    }

    #[test]
    fn given_instance_settings_action_when_selected_then_icon_dialog_opens() {
        let mut widget = loaded(vec![entry("alpha", true)]);
        open_menu_on(&mut widget, 0);

        let _task = widget.reduce(
            InstancesIntent::MenuActionSelected(MenuAction::OpenSettings),
            &ctx(),
        );

        let settings = widget.vm().icon_settings.expect("dialog should open");
        assert_eq!(settings.name, "alpha");
        assert_eq!(settings.dir, PathBuf::from("/base/instances/alpha"));
    }

    #[test]
    fn given_icon_dialog_without_icon_when_remove_pressed_then_nothing_happens()
     {
        let mut widget = loaded(vec![entry("alpha", true)]);
        open_menu_on(&mut widget, 0);
        let _task = widget.reduce(
            InstancesIntent::MenuActionSelected(MenuAction::OpenSettings),
            &ctx(),
        );

        let _task = widget.reduce(InstancesIntent::RemoveIconPressed, &ctx());

        let settings = widget.vm().icon_settings.expect("dialog should stay");
        assert!(!settings.busy);
    }

    #[test]
    fn given_icon_dialog_when_path_submitted_then_dialog_is_busy_until_saved() {
        let mut widget = loaded(vec![entry("alpha", true)]);
        open_menu_on(&mut widget, 0);
        let _task = widget.reduce(
            InstancesIntent::MenuActionSelected(MenuAction::OpenSettings),
            &ctx(),
        );
        let _task = widget.reduce(
            InstancesIntent::IconPathChanged(String::from(" /tmp/icon.png ")),
            &ctx(),
        );

        let _task = widget.reduce(InstancesIntent::ChangeIconPressed, &ctx());
        assert!(widget.vm().icon_settings.is_some_and(|s| s.busy));

        let _task = widget.reduce(
            InstancesIntent::IconSaved {
                name: String::from("alpha"),
            },
            &ctx(),
        );
        let settings = widget.vm().icon_settings.expect("dialog should stay");
        assert!(!settings.busy);
        assert!(settings.path_input.is_empty());
    }

    #[test]
    fn given_icon_failure_when_reduced_then_blocking_error_is_shown() {
        let mut widget = loaded(vec![entry("alpha", true)]);

        let _task = widget.reduce(
            InstancesIntent::IconFailed {
                name: String::from("alpha"),
                message: String::from("Failed to delete icon file."),
            },
            &ctx(),
        );

        assert_eq!(widget.vm().error, Some("Failed to delete icon file."));
        assert!(widget.has_modal());

        let _task = widget.reduce(InstancesIntent::ErrorDismissed, &ctx());
        assert!(!widget.has_modal());
    }

    #[test]
    fn given_preview_for_other_instance_when_loaded_then_it_is_ignored() {
        let mut widget = loaded(vec![entry("alpha", true), entry("beta", true)]);
        open_menu_on(&mut widget, 0);
        let _task = widget.reduce(
            InstancesIntent::MenuActionSelected(MenuAction::OpenSettings),
            &ctx(),
        );

        let _task = widget.reduce(
            InstancesIntent::IconPreviewLoaded {
                name: String::from("beta"),
                preview: Some(Handle::from_rgba(1, 1, vec![0, 0, 0, 255])),
            },
            &ctx(),
        );

        let settings = widget.vm().icon_settings.expect("dialog should stay");
        assert!(settings.preview.is_none());
    }

    #[test]
    fn given_background_right_click_when_reduced_then_only_refresh_is_offered() {
        let mut widget = loaded(vec![entry("alpha", true)]);

        let _task = widget
            .reduce(InstancesIntent::ContextMenuRequested(None), &ctx());

        let menu = widget.context_menu().expect("menu should be open");
        assert_eq!(menu.actions, vec![MenuAction::RefreshList]);
        assert!(
            !menu
                .actions
                .contains(&MenuAction::Open(Subfolder::Screenshots))
        );
    }
}
