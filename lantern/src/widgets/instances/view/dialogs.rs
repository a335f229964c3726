use iced::widget::{column, container, image, text, text_input};
use iced::{Element, Length, alignment};

use crate::components::primitive::dialog::{self, DialogProps, button_view};
use crate::services::Localizer;
use crate::shared::ui::fonts::FontFace;
use crate::shared::ui::palette;
use crate::widgets::instances::InstancesIntent;
use crate::widgets::instances::model::{
    IconSettingsState, PendingConfirm, USER_ICON_SIZE,
};

/// Shared props for the instance dialogs.
#[derive(Clone, Copy)]
pub(crate) struct DialogsProps<'a> {
    pub(crate) localizer: &'a dyn Localizer,
    pub(crate) font: FontFace,
}

/// Confirmation for a destructive instance request.
pub(crate) fn confirm_view<'a>(
    confirm: &'a PendingConfirm,
    props: DialogsProps<'a>,
) -> Element<'a, InstancesIntent> {
    let tr = props.localizer;
    let message = tr.tr(confirm.message_key(), &[&confirm.title]);

    dialog::view(DialogProps {
        title: tr.tr("confirmTitle", &[]),
        body: body_text(message, props.font, palette::TEXT_PRIMARY),
        buttons: vec![
            button_view(
                tr.tr("button.cancel", &[]),
                props.font,
                Some(InstancesIntent::ConfirmCancelled),
            ),
            button_view(
                tr.tr("button.ok", &[]),
                props.font,
                Some(InstancesIntent::ConfirmAccepted),
            ),
        ],
        font: props.font,
    })
}

/// Blocking error that must be acknowledged.
pub(crate) fn error_view<'a>(
    message: &'a str,
    props: DialogsProps<'a>,
) -> Element<'a, InstancesIntent> {
    let tr = props.localizer;

    dialog::view(DialogProps {
        title: tr.tr("errorTitle", &[]),
        body: body_text(message.to_string(), props.font, palette::TEXT_ERROR),
        buttons: vec![button_view(
            tr.tr("button.ok", &[]),
            props.font,
            Some(InstancesIntent::ErrorDismissed),
        )],
        font: props.font,
    })
}

/// Per-instance icon settings.
pub(crate) fn icon_settings_view<'a>(
    settings: &'a IconSettingsState,
    props: DialogsProps<'a>,
) -> Element<'a, InstancesIntent> {
    let tr = props.localizer;
    let font = props.font;
    let preview_side = USER_ICON_SIZE as f32;

    let preview: Element<'a, InstancesIntent> = match &settings.preview {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(preview_side))
            .height(Length::Fixed(preview_side))
            .into(),
        None => text(tr.tr("instance.options.noIcon", &[]))
            .font(font.font)
            .size(font.size)
            .color(palette::TEXT_SECONDARY)
            .into(),
    };
    let preview = container(preview)
        .width(Length::Fixed(preview_side))
        .height(Length::Fixed(preview_side))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut input = text_input(
        &tr.tr("instance.options.iconPath", &[]),
        &settings.path_input,
    )
    .font(font.font)
    .size(font.size)
    .padding(6)
    .width(Length::Fill);
    if !settings.busy {
        input = input
            .on_input(InstancesIntent::IconPathChanged)
            .on_submit(InstancesIntent::ChangeIconPressed);
    }

    let can_change = !settings.busy && !settings.path_input.trim().is_empty();
    let can_remove = !settings.busy && settings.preview.is_some();

    let body = column![
        body_text(
            tr.tr("instance.options.icon", &[]),
            font,
            palette::TEXT_SECONDARY,
        ),
        preview,
        input,
    ]
    .spacing(8)
    .width(Length::Fill);

    dialog::view(DialogProps {
        title: tr.tr("instance.options.title", &[&settings.title]),
        body: body.into(),
        buttons: vec![
            button_view(
                tr.tr("instance.options.changeIcon", &[]),
                font,
                can_change.then_some(InstancesIntent::ChangeIconPressed),
            ),
            button_view(
                tr.tr("instance.options.removeIcon", &[]),
                font,
                can_remove.then_some(InstancesIntent::RemoveIconPressed),
            ),
            button_view(
                tr.tr("button.close", &[]),
                font,
                Some(InstancesIntent::IconSettingsClosed),
            ),
        ],
        font,
    })
}

fn body_text<'a>(
    content: String,
    font: FontFace,
    color: iced::Color,
) -> Element<'a, InstancesIntent> {
    text(content)
        .font(font.font)
        .size(font.size)
        .color(color)
        .width(Length::Fill)
        .into()
}
