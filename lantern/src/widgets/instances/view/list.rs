use std::sync::Arc;

use iced::alignment::Vertical;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text as CanvasText};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::text::LineHeight;
use iced::widget::{Column, container, mouse_area, scrollable};
use iced::{
    Alignment, Element, Length, Pixels, Rectangle, Renderer, Theme, mouse,
};
use lantern_ui_paint::ParagraphMeasure;

use crate::services::Localizer;
use crate::shared::ui::fonts::FontFace;
use crate::widgets::instances::InstancesIntent;
use crate::widgets::instances::cell::{
    RowFonts, RowLayoutCache, RowPrimitive, RowRenderState, TextRole,
    is_collapsed,
};
use crate::widgets::instances::icon_cache::IconBitmap;
use crate::widgets::instances::model::{
    InstancesViewModel, ROW_HEIGHT, ROW_SPACING, RowStatus,
};

const TEXT_LINE_HEIGHT: f32 = 1.3;

/// Props for the instance list.
pub(crate) struct ListProps<'a> {
    pub(crate) vm: InstancesViewModel<'a>,
    pub(crate) localizer: &'a dyn Localizer,
    pub(crate) title_font: FontFace,
    pub(crate) status_font: FontFace,
}

/// Render the scrollable instance list.
pub(crate) fn view(props: ListProps<'_>) -> Element<'_, InstancesIntent> {
    let rows = (0..props.vm.rows.len()).map(|index| {
        row_view(index, row_canvas(&props, index))
    });

    let column = Column::with_children(rows)
        .spacing(ROW_SPACING)
        .width(Length::Fill);

    let scroll = scrollable::Scrollable::with_direction(
        column,
        Direction::Vertical(
            Scrollbar::new().width(0).scroller_width(0).margin(0),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    mouse_area(container(scroll).width(Length::Fill).height(Length::Fill))
        .on_exit(InstancesIntent::PointerLeftList)
        .on_release(InstancesIntent::RowReleased)
        .on_right_press(InstancesIntent::ContextMenuRequested(None))
        .into()
}

fn row_view<'a>(index: usize, row: RowCanvas) -> Element<'a, InstancesIntent> {
    let canvas = Canvas::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT));

    mouse_area(canvas)
        .on_press(InstancesIntent::RowPressed(index))
        .on_release(InstancesIntent::RowReleased)
        .on_double_click(InstancesIntent::RowDoubleClicked(index))
        .on_right_press(InstancesIntent::ContextMenuRequested(Some(index)))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Text and icon shown for row `index`.
struct RowContent {
    title: String,
    status: String,
    icon: Arc<IconBitmap>,
}

fn row_content(
    vm: &InstancesViewModel<'_>,
    localizer: &dyn Localizer,
    index: usize,
) -> RowContent {
    match vm.rows.get(index) {
        Some(entry) => RowContent {
            title: entry.title.clone(),
            status: localizer.tr(RowStatus::of(entry).label_key(), &[]),
            icon: vm.icons.get(&entry.name),
        },
        None => RowContent {
            title: localizer.tr("instance.unknown", &[]),
            status: String::new(),
            icon: vm.icons.default_icon(),
        },
    }
}

fn row_canvas(props: &ListProps<'_>, index: usize) -> RowCanvas {
    let content = row_content(&props.vm, props.localizer, index);
    RowCanvas {
        content,
        selected: props.vm.selected == Some(index),
        pressed: props.vm.pressed == Some(index),
        title_font: props.title_font,
        status_font: props.status_font,
    }
}

struct RowCanvas {
    content: RowContent,
    selected: bool,
    pressed: bool,
    title_font: FontFace,
    status_font: FontFace,
}

/// Layout and geometry of a row canvas, kept across paints.
#[derive(Default)]
struct RowCanvasState {
    layout: RowLayoutCache,
    geometry: canvas::Cache,
}

impl<Message> canvas::Program<Message> for RowCanvas {
    type State = RowCanvasState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let title = ParagraphMeasure::new(
            self.title_font.font,
            self.title_font.size,
        );
        let status = ParagraphMeasure::new(
            self.status_font.font,
            self.status_font.size,
        );
        let fonts = RowFonts {
            title: &title,
            title_metrics: title.metrics(),
            status: &status,
            status_metrics: status.metrics(),
        };
        let row = RowRenderState {
            title: &self.content.title,
            status: &self.content.status,
            icon: Arc::clone(&self.content.icon),
            selected: self.selected,
            pressed: self.pressed,
            collapsed: is_collapsed(bounds.width),
        };

        if state.layout.refresh(&row, bounds.size(), &fonts) {
            state.geometry.clear();
        }

        let geometry = state.geometry.draw(renderer, bounds.size(), |frame| {
            for primitive in state.layout.primitives().iter() {
                self.paint(frame, primitive);
            }
        });

        vec![geometry]
    }
}

impl RowCanvas {
    fn paint(&self, frame: &mut Frame, primitive: &RowPrimitive) {
        match primitive {
            RowPrimitive::Fill { rect, color } => {
                frame.fill_rectangle(rect.position(), rect.size(), *color);
            },
            RowPrimitive::Icon { rect } => {
                frame.draw_image(
                    *rect,
                    canvas::Image::new(self.content.icon.handle.clone()),
                );
            },
            RowPrimitive::Text {
                content,
                position,
                role,
                color,
            } => {
                let face = match role {
                    TextRole::Title => self.title_font,
                    TextRole::Status => self.status_font,
                };
                frame.fill_text(CanvasText {
                    content: content.clone(),
                    position: *position,
                    color: *color,
                    size: Pixels(face.size),
                    line_height: LineHeight::Relative(TEXT_LINE_HEIGHT),
                    font: face.font,
                    align_x: Alignment::Start.into(),
                    align_y: Vertical::Top,
                    ..Default::default()
                });
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use image::RgbaImage;

    use super::row_content;
    use crate::services::{EnglishLocalizer, InstanceEntry};
    use crate::widgets::instances::errors::IconError;
    use crate::widgets::instances::icon_cache::{IconCache, IconSource};
    use crate::widgets::instances::model::InstancesViewModel;

    struct NoIcons;

    impl IconSource for NoIcons {
        fn bundled(&self, _key: &str) -> Result<Option<RgbaImage>, IconError> {
            Ok(None)
        }

        fn user(&self, _dir: &Path) -> Result<Option<RgbaImage>, IconError> {
            Ok(None)
        }

        fn default_icon(&self) -> Result<Option<RgbaImage>, IconError> {
            Ok(None)
        }
    }

    fn entry(is_local: bool) -> InstanceEntry {
        InstanceEntry {
            name: String::from("skyblock"),
            title: String::from("Skyblock"),
            is_local,
            update_pending: false,
            dir: PathBuf::from("/base/instances/skyblock"),
            content_dir: PathBuf::from("/base/instances/skyblock/minecraft"),
        }
    }

    fn vm<'a>(
        rows: &'a [InstanceEntry],
        icons: &'a IconCache,
    ) -> InstancesViewModel<'a> {
        InstancesViewModel {
            rows,
            selected: None,
            pressed: None,
            context_menu: None,
            confirm: None,
            icon_settings: None,
            error: None,
            icons,
        }
    }

    #[test]
    fn given_remote_instance_when_building_row_then_install_status_is_shown() {
        let icons = IconCache::new(&NoIcons);
        let rows = vec![entry(false)];

        let content = row_content(&vm(&rows, &icons), &EnglishLocalizer, 0);

        assert_eq!(content.title, "Skyblock");
        assert_eq!(content.status, "Click to install");
    }

    #[test]
    fn given_index_past_rows_when_building_row_then_unknown_placeholder_is_used()
     {
        let icons = IconCache::new(&NoIcons);
        let rows = vec![entry(true)];

        let content = row_content(&vm(&rows, &icons), &EnglishLocalizer, 3);

        assert_eq!(content.title, "Unknown");
        assert!(content.status.is_empty());
        assert!(std::sync::Arc::ptr_eq(&content.icon, &icons.default_icon()));
    }
}
