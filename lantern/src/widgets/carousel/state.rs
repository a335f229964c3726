use std::path::PathBuf;

use super::model::{DecodeTarget, Screenshot};

/// A decode the reducer wants performed.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DecodeRequest {
    pub(super) index: usize,
    pub(super) path: PathBuf,
    pub(super) target: DecodeTarget,
}

/// Internal carousel playback state.
#[derive(Debug)]
pub(super) struct CarouselState {
    /// Bumped on every scan; results from older scans are dropped.
    generation: u64,
    stopped: bool,
    scanning: bool,
    sequence: Vec<PathBuf>,
    current_index: usize,
    current: Option<Screenshot>,
    next: Option<Screenshot>,
    next_index: usize,
    alpha: f32,
    alpha_step: f32,
    decode_pending: bool,
}

impl CarouselState {
    pub(super) fn new(alpha_step: f32) -> Self {
        Self {
            generation: 0,
            stopped: false,
            scanning: false,
            sequence: Vec::new(),
            current_index: 0,
            current: None,
            next: None,
            next_index: 0,
            alpha: 0.0,
            alpha_step,
            decode_pending: false,
        }
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn current(&self) -> Option<&Screenshot> {
        self.current.as_ref()
    }

    pub(super) fn next(&self) -> Option<&Screenshot> {
        self.next.as_ref()
    }

    pub(super) fn alpha(&self) -> f32 {
        self.alpha
    }

    pub(super) fn current_index(&self) -> usize {
        self.current_index
    }

    pub(super) fn len(&self) -> usize {
        self.sequence.len()
    }

    pub(super) fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[cfg(test)]
    pub(super) fn is_scanning(&self) -> bool {
        self.scanning
    }

    #[cfg(test)]
    pub(super) fn is_decode_pending(&self) -> bool {
        self.decode_pending
    }

    pub(super) fn is_transitioning(&self) -> bool {
        self.next.is_some()
    }

    /// Whether display ticks should run.
    pub(super) fn is_playing(&self) -> bool {
        !self.stopped && self.current.is_some() && self.sequence.len() > 1
    }

    /// Start a new scan generation, resuming a stopped carousel.
    pub(super) fn begin_scan(&mut self) -> u64 {
        self.stopped = false;
        self.scanning = true;
        self.generation += 1;
        self.generation
    }

    /// Take over the result of a scan.
    ///
    /// Returns the initial decode when nothing is shown yet.
    pub(super) fn accept_scan(
        &mut self,
        generation: u64,
        paths: Vec<PathBuf>,
    ) -> Option<DecodeRequest> {
        if self.stopped || generation != self.generation {
            return None;
        }

        self.scanning = false;
        self.sequence = paths;
        // Indices of the previous sequence mean nothing in the new one; a
        // running crossfade lands on the first entry.
        self.current_index = 0;
        self.next_index = 0;
        self.decode_pending = false;

        if self.current.is_some() {
            return None;
        }
        self.initial_request(0)
    }

    /// Pick the screenshot after the current one.
    ///
    /// Transition requests while a crossfade or decode is in flight are
    /// ignored.
    pub(super) fn request_next(&mut self) -> Option<DecodeRequest> {
        if !self.is_playing() || self.is_transitioning() || self.decode_pending
        {
            return None;
        }

        let index = (self.current_index + 1) % self.sequence.len();
        let path = self.sequence.get(index)?.clone();
        self.decode_pending = true;
        Some(DecodeRequest {
            index,
            path,
            target: DecodeTarget::Next,
        })
    }

    /// Store a decoded screenshot. Returns `false` for stale results.
    pub(super) fn accept_decoded(
        &mut self,
        generation: u64,
        index: usize,
        target: DecodeTarget,
        screenshot: Screenshot,
    ) -> bool {
        if self.stopped || generation != self.generation {
            return false;
        }

        self.decode_pending = false;
        match target {
            DecodeTarget::Initial => {
                self.current = Some(screenshot);
                self.current_index = index;
            },
            DecodeTarget::Next => {
                self.next = Some(screenshot);
                self.next_index = index;
                self.alpha = 0.0;
            },
        }
        true
    }

    /// Skip a screenshot that failed to decode.
    ///
    /// A failed initial decode moves on to the following entry; a failed
    /// transition decode advances the index without a crossfade.
    pub(super) fn skip_failed(
        &mut self,
        generation: u64,
        index: usize,
        target: DecodeTarget,
    ) -> Option<DecodeRequest> {
        if self.stopped || generation != self.generation {
            return None;
        }

        self.decode_pending = false;
        match target {
            DecodeTarget::Initial => self.initial_request(index + 1),
            DecodeTarget::Next => {
                self.current_index = index;
                None
            },
        }
    }

    /// Advance the crossfade by one frame.
    ///
    /// Returns `true` when the transition completed on this frame.
    pub(super) fn advance_frame(&mut self) -> bool {
        if self.stopped || self.next.is_none() {
            return false;
        }

        self.alpha = (self.alpha + self.alpha_step).min(1.0);
        if self.alpha < 1.0 {
            return false;
        }

        self.current = self.next.take();
        self.current_index = self.next_index;
        true
    }

    /// Stop all timers, keeping the shown images and alpha as they are.
    ///
    /// Returns `false` when already stopped.
    pub(super) fn stop(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.stopped = true;
        self.scanning = false;
        self.decode_pending = false;
        true
    }

    fn initial_request(&mut self, index: usize) -> Option<DecodeRequest> {
        let path = self.sequence.get(index)?.clone();
        self.decode_pending = true;
        Some(DecodeRequest {
            index,
            path,
            target: DecodeTarget::Initial,
        })
    }
}
