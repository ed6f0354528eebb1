/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use crate::frame::BannerFrame;

/// Playback state over a loaded frame set.
///
/// Time is a caller-supplied millisecond counter that may wrap; elapsed
/// time is computed with wrapping arithmetic so a wrap mid-frame does not
/// stall playback.
#[derive(Debug, Clone)]
pub struct Banner {
    frames: Vec<BannerFrame>,
    current: usize,
    last_advance_ms: u32,
    active: bool,
}

impl Banner {
    pub fn new(frames: Vec<BannerFrame>) -> Self {
        Self {
            frames,
            current: 0,
            last_advance_ms: 0,
            active: false,
        }
    }

    pub fn frames(&self) -> &[BannerFrame] {
        &self.frames
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts or stops playback. Activating resets the frame clock so the
    /// current frame gets its full delay from `now_ms`.
    pub fn set_active(&mut self, active: bool, now_ms: u32) {
        self.active = active;
        if active {
            self.last_advance_ms = now_ms;
        }
    }

    pub fn current_frame(&self) -> Option<&BannerFrame> {
        self.frames.get(self.current)
    }

    /// Steps to the next frame once the current frame's delay has elapsed,
    /// wrapping from the last frame back to the first. Returns `true` when
    /// the frame index was stepped.
    pub fn advance(&mut self, now_ms: u32) -> bool {
        if !self.active || self.frames.is_empty() {
            return false;
        }
        let delay = self.frames[self.current].delay_ms;
        if now_ms.wrapping_sub(self.last_advance_ms) >= delay {
            self.current = (self.current + 1) % self.frames.len();
            self.last_advance_ms = now_ms;
            return true;
        }
        false
    }
}
