use iced::widget::image::Handle;
use iced::widget::{Stack, container};
use iced::{Element, Length, Padding, Rectangle, Size};

use super::event::ChromeIntent;
use super::model::ChromeViewModel;
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::components::primitive::play_button::{self, PlayButtonProps};
use crate::shared::ui::fonts::FontFace;

/// Props for the bottom bar.
pub(crate) struct ChromeProps<'a> {
    pub(crate) vm: ChromeViewModel,
    /// Localized play button label.
    pub(crate) launch_label: String,
    pub(crate) launch_font: FontFace,
    pub(crate) update_icon: Option<&'a Handle>,
    /// Bottom bar bounds in window coordinates.
    pub(crate) bar: Rectangle,
    /// Play button bounds relative to the bar.
    pub(crate) play: Rectangle,
    /// Update button bounds relative to the bar.
    pub(crate) update: Rectangle,
}

/// Render the bottom bar with its buttons at fixed positions.
pub(crate) fn view<'a>(props: ChromeProps<'a>) -> Element<'a, ChromeIntent> {
    let play = play_button::view(PlayButtonProps {
        label: props.launch_label,
        font: props.launch_font,
        size: props.play.size(),
        on_press: ChromeIntent::PlayPressed,
    });

    let mut layers: Vec<Element<'a, ChromeIntent>> =
        vec![placed(play, props.play)];

    if props.vm.show_update {
        let update = icon_button::view(IconButtonProps {
            icon: props.update_icon.cloned(),
            size: props.update.width,
            on_press: ChromeIntent::UpdatePressed,
        });
        layers.push(placed(update, props.update));
    }

    let bar = Stack::with_children(layers)
        .width(Length::Fixed(props.bar.width))
        .height(Length::Fixed(props.bar.height));

    container(bar)
        .padding(Padding {
            top: props.bar.y,
            left: props.bar.x,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn placed<'a>(
    content: Element<'a, ChromeIntent>,
    bounds: Rectangle,
) -> Element<'a, ChromeIntent> {
    let Size { width, height } = bounds.size();
    container(content)
        .padding(Padding {
            top: bounds.y,
            left: bounds.x,
            ..Padding::ZERO
        })
        .width(Length::Fixed(bounds.x + width))
        .height(Length::Fixed(bounds.y + height))
        .into()
}
