mod context_menu;
mod dialogs;
mod list;

pub(crate) use context_menu::{ContextMenuProps, view as context_menu};
pub(crate) use dialogs::{
    DialogsProps, confirm_view, error_view, icon_settings_view,
};
pub(crate) use list::{ListProps, view as list};
