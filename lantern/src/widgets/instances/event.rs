use std::path::PathBuf;

use iced::widget::image::Handle;

use super::model::MenuAction;
use crate::services::{InstanceEntry, InstanceRequest};

/// Intent events handled by the instance list reducer.
#[derive(Debug, Clone)]
pub(crate) enum InstancesIntent {
    LoadRequested,
    Loaded(Vec<InstanceEntry>),
    LoadFailed(String),
    RowPressed(usize),
    RowReleased,
    RowDoubleClicked(usize),
    PointerLeftList,
    /// Right click on a row, or on the list background when `None`.
    ContextMenuRequested(Option<usize>),
    ContextMenuDismiss,
    MenuActionSelected(MenuAction),
    ConfirmAccepted,
    ConfirmCancelled,
    LaunchSelected,
    IconPathChanged(String),
    ChangeIconPressed,
    RemoveIconPressed,
    IconSettingsClosed,
    IconPreviewLoaded {
        name: String,
        preview: Option<Handle>,
    },
    IconSaved {
        name: String,
    },
    IconRemoved {
        name: String,
    },
    IconFailed {
        name: String,
        message: String,
    },
    ErrorDismissed,
}

/// Effect events produced by the instance list reducer.
#[derive(Debug, Clone)]
pub(crate) enum InstancesEffect {
    LoadRequested,
    /// Rows changed; icons for new keys must be resolved.
    ResolveIcons,
    Forward(InstanceRequest),
    OpenDirectory(PathBuf),
    CopyToClipboard(String),
    LoadIconPreview {
        name: String,
        dir: PathBuf,
    },
    SaveIcon {
        name: String,
        dir: PathBuf,
        source: PathBuf,
    },
    RemoveIcon {
        name: String,
        dir: PathBuf,
    },
    /// The selected instance changed; `None` when nothing is selected.
    SelectionChanged {
        is_local: Option<bool>,
    },
}

/// Instance list event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum InstancesEvent {
    /// Intent event reduced by the instance list widget.
    Intent(InstancesIntent),
    /// External effect orchestrated by app-level routing.
    Effect(InstancesEffect),
}
