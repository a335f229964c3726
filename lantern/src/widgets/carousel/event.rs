use std::path::PathBuf;

use super::model::{DecodeTarget, Screenshot};

/// Intent events handled by the carousel reducer.
#[derive(Debug, Clone)]
pub(crate) enum CarouselIntent {
    Start,
    Refresh,
    Stop,
    ScanCompleted {
        generation: u64,
        paths: Vec<PathBuf>,
    },
    ScanFailed {
        generation: u64,
        message: String,
    },
    /// Display interval elapsed; time to show the next screenshot.
    DisplayTick,
    /// Crossfade frame.
    FrameTick,
    Decoded {
        generation: u64,
        index: usize,
        target: DecodeTarget,
        screenshot: Box<Screenshot>,
    },
    DecodeFailed {
        generation: u64,
        index: usize,
        target: DecodeTarget,
        message: String,
    },
}

/// Effect events produced by the carousel reducer.
#[derive(Debug, Clone)]
pub(crate) enum CarouselEffect {
    ScanRequested {
        generation: u64,
    },
    DecodeRequested {
        generation: u64,
        index: usize,
        path: PathBuf,
        target: DecodeTarget,
    },
}

/// Carousel event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum CarouselEvent {
    /// Intent event reduced by the carousel widget.
    Intent(CarouselIntent),
    /// External effect orchestrated by app-level routing.
    Effect(CarouselEffect),
}
