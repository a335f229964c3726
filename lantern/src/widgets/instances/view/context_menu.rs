use iced::widget::{Column, Space, Stack, container, mouse_area};
use iced::{Border, Element, Length, Size};

use crate::components::primitive::menu_item::{
    self, MENU_ITEM_HEIGHT, MENU_SEPARATOR_HEIGHT,
};
use crate::geometry::{anchor_position, menu_height};
use crate::services::Localizer;
use crate::shared::ui::fonts::FontFace;
use crate::shared::ui::palette;
use crate::widgets::instances::InstancesIntent;
use crate::widgets::instances::model::{ContextMenuState, MenuAction};

const MENU_WIDTH: f32 = 200.0;
const MENU_MARGIN: f32 = 4.0;
const MENU_CONTAINER_PADDING: f32 = 4.0;

/// Props for the instance context menu.
pub(crate) struct ContextMenuProps<'a> {
    pub(crate) menu: &'a ContextMenuState,
    pub(crate) localizer: &'a dyn Localizer,
    pub(crate) font: FontFace,
    pub(crate) area_size: Size,
}

/// Render the context menu overlay anchored at the right-click position.
pub(crate) fn view(
    props: ContextMenuProps<'_>,
) -> Element<'_, InstancesIntent> {
    let mut items: Vec<Element<'_, InstancesIntent>> = Vec::new();
    let mut separators = 0;

    for (position, action) in props.menu.actions.iter().copied().enumerate() {
        if position > 0 && action.starts_group() {
            items.push(menu_item::separator());
            separators += 1;
        }
        items.push(menu_item_element(
            props.localizer.tr(action.label_key(), &[]),
            action,
            props.font,
        ));
    }

    let height = menu_height(
        props.menu.actions.len(),
        MENU_ITEM_HEIGHT,
        separators,
        MENU_SEPARATOR_HEIGHT,
        MENU_CONTAINER_PADDING * 2.0,
    );
    let anchor = anchor_position(
        props.menu.cursor,
        props.area_size,
        MENU_WIDTH,
        height,
        MENU_MARGIN,
    );

    let menu_panel = container(Column::with_children(items).spacing(0))
        .width(Length::Fixed(MENU_WIDTH))
        .padding(MENU_CONTAINER_PADDING)
        .style(|_| container::Style {
            background: Some(palette::MENU_BACKGROUND.into()),
            text_color: Some(palette::TEXT_PRIMARY),
            border: Border {
                width: 1.0,
                color: palette::PANEL_BORDER,
                radius: 2.0.into(),
            },
            ..Default::default()
        });

    let positioned_menu = container(menu_panel).padding(iced::Padding {
        top: anchor.y,
        right: 0.0,
        bottom: 0.0,
        left: anchor.x,
    });

    let dismiss_layer = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(InstancesIntent::ContextMenuDismiss)
    .on_right_press(InstancesIntent::ContextMenuDismiss);

    Stack::with_children(vec![dismiss_layer.into(), positioned_menu.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn menu_item_element<'a>(
    label: String,
    action: MenuAction,
    font: FontFace,
) -> Element<'a, InstancesIntent> {
    menu_item::view(menu_item::MenuItemProps { label, font })
        .map(move |_| InstancesIntent::MenuActionSelected(action))
}
