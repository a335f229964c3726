use iced::widget::{Column, column, text};
use iced::{Element, Length};

use super::event::SettingsIntent;
use super::model::SettingsRow;
use crate::components::primitive::dialog::{self, DialogProps, button_view};
use crate::services::Localizer;
use crate::shared::ui::fonts::FontFace;
use crate::shared::ui::palette;

const ROW_SPACING: f32 = 8.0;

/// Props for the launcher settings panel.
pub(crate) struct SettingsProps<'a> {
    pub(crate) rows: Vec<SettingsRow>,
    pub(crate) localizer: &'a dyn Localizer,
    pub(crate) font: FontFace,
}

/// Render the read-only settings panel.
pub(crate) fn view(props: SettingsProps<'_>) -> Element<'_, SettingsIntent> {
    let font = props.font;
    let tr = props.localizer;

    let rows = props.rows.into_iter().map(|row| {
        column![
            text(row.label)
                .font(font.font)
                .size(font.size - 1.0)
                .color(palette::TEXT_SECONDARY),
            text(row.value)
                .font(font.font)
                .size(font.size)
                .color(palette::TEXT_PRIMARY)
                .width(Length::Fill),
        ]
        .spacing(2)
        .into()
    });

    dialog::view(DialogProps {
        title: tr.tr("settings.title", &[]),
        body: Column::with_children(rows)
            .spacing(ROW_SPACING)
            .width(Length::Fill)
            .into(),
        buttons: vec![
            button_view(
                tr.tr("settings.rescan", &[]),
                font,
                Some(SettingsIntent::RescanPressed),
            ),
            button_view(
                tr.tr("button.close", &[]),
                font,
                Some(SettingsIntent::Close),
            ),
        ],
        font,
    })
}
