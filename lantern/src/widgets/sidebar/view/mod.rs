use iced::widget::button::Status as ButtonStatus;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, mouse_area, row, text};
use iced::{Background, Element, Length, alignment};

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::shared::ui::fonts::FontFace;
use crate::shared::ui::icons::OPTIONS_ICON_SIZE;
use crate::shared::ui::palette;

pub(crate) const SIDEBAR_PADDING: f32 = 6.0;
const SETTINGS_BUTTON_HEIGHT: f32 = 72.0;
const SETTINGS_ICON_LEFT: f32 = 10.0;
const SETTINGS_LABEL_GAP: f32 = 8.0;
const LIST_SPACING: f32 = 4.0;

/// Props for the sidebar panel.
pub(crate) struct SidebarProps<'a, Message> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) height: f32,
    /// Instance list hosted inside the panel.
    pub(crate) list: Element<'a, Message>,
    pub(crate) options_icon: &'a Handle,
    pub(crate) settings_label: String,
    pub(crate) label_font: FontFace,
    pub(crate) on_event: fn(SidebarIntent) -> Message,
}

/// Render the sidebar panel with the hosted list and the settings button.
pub(crate) fn view<'a, Message>(
    props: SidebarProps<'a, Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let on_event = props.on_event;
    let settings = settings_button(
        props.vm,
        props.options_icon,
        props.settings_label,
        props.label_font,
    )
    .map(move |event| on_event(event));

    let content = column![
        container(props.list).width(Length::Fill).height(Length::Fill),
        settings,
    ]
    .spacing(LIST_SPACING)
    .width(Length::Fill)
    .height(Length::Fill);

    let panel = container(content)
        .padding(SIDEBAR_PADDING)
        .width(Length::Fixed(props.vm.width))
        .height(Length::Fixed(props.height))
        .style(|_| container::Style {
            background: Some(palette::SIDEBAR_BACKGROUND.into()),
            ..Default::default()
        });

    mouse_area(panel)
        .on_enter(on_event(SidebarIntent::PointerEntered))
        .on_exit(on_event(SidebarIntent::PointerExited))
        .into()
}

fn settings_button<'a>(
    vm: SidebarViewModel,
    icon: &'a Handle,
    label: String,
    font: FontFace,
) -> Element<'a, SidebarIntent> {
    let icon_size = OPTIONS_ICON_SIZE as f32;
    let icon = image(icon.clone())
        .width(Length::Fixed(icon_size))
        .height(Length::Fixed(icon_size));

    let content: Element<'a, SidebarIntent> = if vm.show_labels {
        let label = text(label)
            .font(font.font)
            .size(font.size)
            .wrapping(text::Wrapping::None)
            .align_y(alignment::Vertical::Center);
        container(
            row![icon, label]
                .spacing(SETTINGS_LABEL_GAP)
                .align_y(alignment::Vertical::Center),
        )
        .padding(iced::Padding {
            left: SETTINGS_ICON_LEFT,
            ..iced::Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
    } else {
        container(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    };

    button(content)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(SETTINGS_BUTTON_HEIGHT))
        .style(|_, status| settings_button_style(status))
        .on_press(SidebarIntent::SettingsPressed)
        .into()
}

fn settings_button_style(status: ButtonStatus) -> button::Style {
    let background = match status {
        ButtonStatus::Hovered => {
            Some(Background::Color(palette::SETTINGS_HOVER))
        },
        ButtonStatus::Pressed => {
            Some(Background::Color(palette::SETTINGS_PRESSED))
        },
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::TEXT_PRIMARY,
        ..Default::default()
    }
}
