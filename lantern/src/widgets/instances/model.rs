use std::path::{Path, PathBuf};

use iced::Point;
use iced::widget::image::Handle;

use super::icon_cache::IconCache;
use crate::services::{InstanceEntry, InstanceRequest};

pub(crate) const ROW_HEIGHT: f32 = 72.0;
pub(crate) const ROW_SPACING: f32 = 4.0;
pub(crate) const ICON_SIZE: u32 = 52;
pub(crate) const USER_ICON_SIZE: u32 = 64;
pub(crate) const USER_ICON_FILE: &str = "icon.png";

/// Status line shown under an instance title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowStatus {
    Install,
    Update,
    Ready,
}

impl RowStatus {
    pub(crate) fn of(entry: &InstanceEntry) -> Self {
        if !entry.is_local {
            Self::Install
        } else if entry.update_pending {
            Self::Update
        } else {
            Self::Ready
        }
    }

    pub(crate) fn label_key(self) -> &'static str {
        match self {
            Self::Install => "instance.status.install",
            Self::Update => "instance.status.update",
            Self::Ready => "instance.status.ready",
        }
    }
}

/// Folder inside an instance's content directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Subfolder {
    Root,
    Saves,
    ResourcePacks,
    Screenshots,
}

impl Subfolder {
    pub(crate) fn resolve(self, content_dir: &Path) -> PathBuf {
        match self {
            Self::Root => content_dir.to_path_buf(),
            Self::Saves => content_dir.join("saves"),
            Self::ResourcePacks => content_dir.join("resourcepacks"),
            Self::Screenshots => content_dir.join("screenshots"),
        }
    }
}

/// Context menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Launch,
    Install,
    Open(Subfolder),
    CopyPath,
    OpenSettings,
    ForceUpdate,
    HardForceUpdate,
    DeleteFiles,
    RefreshList,
}

impl MenuAction {
    pub(crate) fn label_key(self) -> &'static str {
        match self {
            Self::Launch => "instance.launch",
            Self::Install => "instance.install",
            Self::Open(Subfolder::Root) => "instance.openFolder",
            Self::Open(Subfolder::Saves) => "instance.openSaves",
            Self::Open(Subfolder::ResourcePacks) => {
                "instance.openResourcePacks"
            },
            Self::Open(Subfolder::Screenshots) => "instance.openScreenshots",
            Self::CopyPath => "instance.copyAsPath",
            Self::OpenSettings => "instance.openSettings",
            Self::ForceUpdate => "instance.forceUpdate",
            Self::HardForceUpdate => "instance.hardForceUpdate",
            Self::DeleteFiles => "instance.deleteFiles",
            Self::RefreshList => "launcher.refreshList",
        }
    }

    /// Whether a separator is drawn above this entry.
    pub(crate) fn starts_group(self) -> bool {
        matches!(
            self,
            Self::Open(Subfolder::Root)
                | Self::ForceUpdate
                | Self::RefreshList
        )
    }
}

/// Context menu entries available for `entry`, or for the list background
/// when `None`.
pub(crate) fn menu_actions(entry: Option<&InstanceEntry>) -> Vec<MenuAction> {
    let mut actions = Vec::new();

    if let Some(entry) = entry {
        actions.push(if entry.is_local {
            MenuAction::Launch
        } else {
            MenuAction::Install
        });

        if entry.is_local {
            actions.extend([
                MenuAction::Open(Subfolder::Root),
                MenuAction::Open(Subfolder::Saves),
                MenuAction::Open(Subfolder::ResourcePacks),
                MenuAction::Open(Subfolder::Screenshots),
                MenuAction::CopyPath,
                MenuAction::OpenSettings,
            ]);
            if !entry.update_pending {
                actions.push(MenuAction::ForceUpdate);
            }
            actions.extend([
                MenuAction::HardForceUpdate,
                MenuAction::DeleteFiles,
            ]);
        }
    }

    actions.push(MenuAction::RefreshList);
    actions
}

/// Destructive request waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingConfirm {
    pub(crate) request: InstanceRequest,
    pub(crate) title: String,
}

impl PendingConfirm {
    pub(crate) fn message_key(&self) -> &'static str {
        match self.request {
            InstanceRequest::Delete { .. } => "instance.confirmDelete",
            _ => "instance.confirmHardUpdate",
        }
    }
}

/// Open context menu.
#[derive(Debug, Clone)]
pub(crate) struct ContextMenuState {
    pub(crate) cursor: Point,
    pub(crate) index: Option<usize>,
    pub(crate) actions: Vec<MenuAction>,
}

/// Open per-instance settings dialog.
#[derive(Debug, Clone)]
pub(crate) struct IconSettingsState {
    pub(crate) name: String,
    pub(crate) title: String,
    pub(crate) dir: PathBuf,
    pub(crate) path_input: String,
    /// Current `icon.png` scaled for the preview, if one exists.
    pub(crate) preview: Option<Handle>,
    pub(crate) busy: bool,
}

/// Read-only instance list snapshot for the presentation layer.
#[derive(Clone, Copy)]
pub(crate) struct InstancesViewModel<'a> {
    pub(crate) rows: &'a [InstanceEntry],
    pub(crate) selected: Option<usize>,
    pub(crate) pressed: Option<usize>,
    pub(crate) context_menu: Option<&'a ContextMenuState>,
    pub(crate) confirm: Option<&'a PendingConfirm>,
    pub(crate) icon_settings: Option<&'a IconSettingsState>,
    pub(crate) error: Option<&'a str>,
    pub(crate) icons: &'a IconCache,
}
