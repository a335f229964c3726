use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, column, container, opaque, row, text};
use iced::{Background, Border, Element, Length, alignment};

use crate::shared::ui::fonts::FontFace;
use crate::shared::ui::palette;

const DIALOG_WIDTH: f32 = 380.0;
const DIALOG_PADDING: f32 = 16.0;
const DIALOG_SPACING: f32 = 12.0;
const DIALOG_TITLE_SIZE_DELTA: f32 = 3.0;
const BUTTON_HEIGHT: f32 = 30.0;
const BUTTON_WIDTH: f32 = 110.0;

/// Props for a blocking dialog.
pub(crate) struct DialogProps<'a, Message> {
    pub(crate) title: String,
    pub(crate) body: Element<'a, Message>,
    pub(crate) buttons: Vec<Element<'a, Message>>,
    pub(crate) font: FontFace,
}

/// Render a centered dialog above a backdrop that swallows pointer input.
pub(crate) fn view<'a, Message>(
    props: DialogProps<'a, Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let title = text(props.title)
        .font(props.font.font)
        .size(props.font.size + DIALOG_TITLE_SIZE_DELTA)
        .color(palette::TEXT_PRIMARY);

    let buttons = row(props.buttons).spacing(8);
    let footer = row![Space::new().width(Length::Fill), buttons]
        .align_y(alignment::Vertical::Center);

    let panel = container(
        column![title, props.body, footer]
            .spacing(DIALOG_SPACING)
            .width(Length::Fill),
    )
    .padding(DIALOG_PADDING)
    .width(Length::Fixed(DIALOG_WIDTH))
    .style(|_| container::Style {
        background: Some(palette::PANEL_BACKGROUND.into()),
        text_color: Some(palette::TEXT_PRIMARY),
        border: Border {
            width: 1.0,
            color: palette::PANEL_BORDER,
            radius: 4.0.into(),
        },
        ..Default::default()
    });

    let centered = container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_| container::Style {
            background: Some(palette::MODAL_BACKDROP.into()),
            ..Default::default()
        });

    opaque(centered)
}

/// Dialog footer button; disabled when `on_press` is `None`.
pub(crate) fn button_view<'a, Message>(
    label: String,
    font: FontFace,
    on_press: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let label = text(label)
        .font(font.font)
        .size(font.size)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(
        container(label)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .padding([0.0, 12.0])
    .width(Length::Fixed(BUTTON_WIDTH))
    .height(Length::Fixed(BUTTON_HEIGHT))
    .style(|_, status| dialog_button_style(status))
    .on_press_maybe(on_press)
    .into()
}

fn dialog_button_style(status: ButtonStatus) -> button::Style {
    let (background, text_color) = match status {
        ButtonStatus::Hovered => (palette::MENU_HOVER, palette::TEXT_PRIMARY),
        ButtonStatus::Pressed => {
            (palette::ICON_BUTTON_PRESSED, palette::TEXT_PRIMARY)
        },
        ButtonStatus::Disabled => {
            (palette::ICON_BUTTON_FILL, palette::TEXT_SECONDARY)
        },
        ButtonStatus::Active => {
            (palette::ICON_BUTTON_FILL, palette::TEXT_PRIMARY)
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            width: 1.0,
            color: palette::ICON_BUTTON_BORDER,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}
