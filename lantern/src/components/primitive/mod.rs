pub(crate) mod dialog;
pub(crate) mod icon_button;
pub(crate) mod menu_item;
pub(crate) mod play_button;
mod pointer;
