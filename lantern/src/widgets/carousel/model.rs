use std::path::PathBuf;

use iced::widget::image::Handle;

/// A decoded screenshot ready to paint.
#[derive(Debug, Clone)]
pub(crate) struct Screenshot {
    pub(crate) path: PathBuf,
    pub(crate) handle: Handle,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Slot a decoded screenshot is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeTarget {
    /// First image shown after a scan.
    Initial,
    /// Incoming image of a crossfade.
    Next,
}

/// Read-only carousel snapshot for painting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CarouselViewModel<'a> {
    pub(crate) current: Option<&'a Screenshot>,
    pub(crate) next: Option<&'a Screenshot>,
    pub(crate) alpha: f32,
}

impl CarouselViewModel<'_> {
    /// Opacity of the outgoing image.
    pub(crate) fn current_opacity(&self) -> f32 {
        if self.next.is_some() {
            1.0 - self.alpha
        } else {
            1.0
        }
    }
}
