use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, container, text};
use iced::{Element, Length, alignment};

use crate::shared::ui::fonts::FontFace;
use crate::shared::ui::palette;

pub(crate) const MENU_ITEM_HEIGHT: f32 = 24.0;
pub(crate) const MENU_SEPARATOR_HEIGHT: f32 = 9.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 10.0;
const MENU_ITEM_VERTICAL_PADDING: f32 = 1.0;

/// UI events emitted by a menu item.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

/// Props for rendering a menu item.
#[derive(Debug, Clone)]
pub(crate) struct MenuItemProps {
    pub(crate) label: String,
    pub(crate) font: FontFace,
}

/// Render a single menu row used in context menus.
pub(crate) fn view<'a>(props: MenuItemProps) -> Element<'a, MenuItemEvent> {
    let label = text(props.label)
        .font(props.font.font)
        .size(props.font.size)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    button(label)
        .padding([MENU_ITEM_VERTICAL_PADDING, MENU_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(|_, status| menu_button_style(status))
        .on_press(MenuItemEvent::Pressed)
        .into()
}

/// Thin horizontal rule between menu groups.
pub(crate) fn separator<'a, Message: 'a>() -> Element<'a, Message> {
    let line = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(|_| container::Style {
            background: Some(palette::MENU_SEPARATOR.into()),
            ..Default::default()
        });

    container(line)
        .width(Length::Fill)
        .height(Length::Fixed(MENU_SEPARATOR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn menu_button_style(status: ButtonStatus) -> button::Style {
    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            Some(palette::MENU_HOVER.into())
        },
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::TEXT_PRIMARY,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button::Status as ButtonStatus;

    use super::menu_button_style;
    use crate::shared::ui::palette;

    #[test]
    fn given_hovered_status_when_building_style_then_uses_hover_colors() {
        let style = menu_button_style(ButtonStatus::Hovered);

        assert_eq!(style.background, Some(Background::Color(palette::MENU_HOVER)));
        assert_eq!(style.text_color, palette::TEXT_PRIMARY);
    }

    #[test]
    fn given_active_status_when_building_style_then_background_is_clear() {
        let style = menu_button_style(ButtonStatus::Active);

        assert_eq!(style.background, None);
    }
}
