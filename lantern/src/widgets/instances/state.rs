use iced::Point;

use super::icon_cache::{IconCache, IconSource};
use super::model::{
    ContextMenuState, IconSettingsState, PendingConfirm, menu_actions,
};
use crate::services::InstanceEntry;

/// Internal instance list state.
pub(super) struct InstancesState {
    rows: Vec<InstanceEntry>,
    selected: Option<usize>,
    pressed: Option<usize>,
    context_menu: Option<ContextMenuState>,
    confirm: Option<PendingConfirm>,
    icon_settings: Option<IconSettingsState>,
    error: Option<String>,
    icons: IconCache,
}

impl InstancesState {
    pub(super) fn new(icons: IconCache) -> Self {
        Self {
            rows: Vec::new(),
            selected: None,
            pressed: None,
            context_menu: None,
            confirm: None,
            icon_settings: None,
            error: None,
            icons,
        }
    }

    pub(super) fn rows(&self) -> &[InstanceEntry] {
        &self.rows
    }

    pub(super) fn row(&self, index: usize) -> Option<&InstanceEntry> {
        self.rows.get(index)
    }

    pub(super) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(super) fn selected_entry(&self) -> Option<&InstanceEntry> {
        self.selected.and_then(|index| self.rows.get(index))
    }

    pub(super) fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    pub(super) fn context_menu(&self) -> Option<&ContextMenuState> {
        self.context_menu.as_ref()
    }

    pub(super) fn confirm(&self) -> Option<&PendingConfirm> {
        self.confirm.as_ref()
    }

    pub(super) fn icon_settings(&self) -> Option<&IconSettingsState> {
        self.icon_settings.as_ref()
    }

    pub(super) fn icon_settings_mut(
        &mut self,
    ) -> Option<&mut IconSettingsState> {
        self.icon_settings.as_mut()
    }

    pub(super) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(super) fn icons(&self) -> &IconCache {
        &self.icons
    }

    pub(super) fn has_modal(&self) -> bool {
        self.confirm.is_some()
            || self.icon_settings.is_some()
            || self.error.is_some()
    }

    /// Replace the rows, keeping the selection index when still valid.
    ///
    /// Returns `true` when the selected entry changed.
    pub(super) fn replace_rows(&mut self, rows: Vec<InstanceEntry>) -> bool {
        let before = self.selected_entry().cloned();
        self.rows = rows;
        self.pressed = None;
        self.selected = match self.selected {
            Some(index) if index < self.rows.len() => Some(index),
            _ if self.rows.is_empty() => None,
            _ => Some(0),
        };
        if let Some(menu) = &self.context_menu {
            if menu.index.is_some_and(|index| index >= self.rows.len()) {
                self.context_menu = None;
            }
        }
        before.as_ref() != self.selected_entry()
    }

    /// Select `index` and mark it pressed. Returns `true` when the selection
    /// changed.
    pub(super) fn press(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.pressed = Some(index);
        self.select(index)
    }

    pub(super) fn select(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        changed
    }

    pub(super) fn release(&mut self) {
        self.pressed = None;
    }

    pub(super) fn open_context_menu(
        &mut self,
        cursor: Point,
        index: Option<usize>,
    ) {
        let index = index.filter(|index| *index < self.rows.len());
        let actions =
            menu_actions(index.and_then(|index| self.rows.get(index)));
        self.context_menu = Some(ContextMenuState {
            cursor,
            index,
            actions,
        });
    }

    pub(super) fn take_context_menu(&mut self) -> Option<ContextMenuState> {
        self.context_menu.take()
    }

    pub(super) fn set_confirm(&mut self, confirm: PendingConfirm) {
        self.confirm = Some(confirm);
    }

    pub(super) fn take_confirm(&mut self) -> Option<PendingConfirm> {
        self.confirm.take()
    }

    pub(super) fn open_icon_settings(&mut self, entry: &InstanceEntry) {
        self.icon_settings = Some(IconSettingsState {
            name: entry.name.clone(),
            title: entry.title.clone(),
            dir: entry.dir.clone(),
            path_input: String::new(),
            preview: None,
            busy: false,
        });
    }

    pub(super) fn close_icon_settings(&mut self) {
        self.icon_settings = None;
    }

    pub(super) fn show_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(super) fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Resolve icons for every row that has no cached icon yet.
    pub(super) fn resolve_icons(&mut self, source: &dyn IconSource) {
        for entry in &self.rows {
            self.icons.resolve(&entry.name, &entry.dir, source);
        }
    }

    pub(super) fn invalidate_icon(&mut self, name: &str) {
        self.icons.invalidate(name);
    }

    pub(super) fn clear_icons(&mut self) {
        self.icons.clear();
    }
}
