//! Celebratory animation shown after a task is completed.
//!
//! The fanfare is a single deadline: [`Fanfare::trigger`] (re)starts it,
//! [`Fanfare::tick`] clears it once the configured duration has elapsed,
//! and [`Fanfare::cancel`] drops it early. A trigger during a running
//! fanfare restarts the sequence instead of stacking a second timer.
//!
//! While visible, [`Fanfare::frame`] samples a keyframe sequence: drop in
//! and grow, wiggle right, wiggle left, settle, then fall away and shrink.

use std::time::{Duration, Instant};

/// Default visible time after a completion.
pub const DEFAULT_FANFARE_DURATION: Duration = Duration::from_millis(1000);

/// One sampled animation state.
///
/// `y` is a vertical offset in abstract units (negative is up), `rotate`
/// is in degrees, `scale` runs from 0 (invisible) to 1 (full size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanfareFrame {
    /// Vertical offset from the resting position.
    pub y: f32,
    /// Tilt in degrees, positive is clockwise.
    pub rotate: f32,
    /// Relative size.
    pub scale: f32,
}

impl FanfareFrame {
    const fn new(y: f32, rotate: f32, scale: f32) -> Self {
        Self { y, rotate, scale }
    }

    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            y: (to.y - self.y).mul_add(t, self.y),
            rotate: (to.rotate - self.rotate).mul_add(t, self.rotate),
            scale: (to.scale - self.scale).mul_add(t, self.scale),
        }
    }
}

/// Keyframes, evenly spaced over the visible duration.
const KEYFRAMES: [FanfareFrame; 6] = [
    FanfareFrame::new(-50.0, 0.0, 0.0),
    FanfareFrame::new(0.0, 0.0, 1.0),
    FanfareFrame::new(0.0, 15.0, 1.0),
    FanfareFrame::new(0.0, -15.0, 1.0),
    FanfareFrame::new(0.0, 0.0, 1.0),
    FanfareFrame::new(100.0, 0.0, 0.0),
];

/// Time-boxed fanfare state.
#[derive(Debug, Clone)]
pub struct Fanfare {
    duration: Duration,
    started_at: Option<Instant>,
}

impl Fanfare {
    /// Creates a hidden fanfare that stays visible for `duration` once
    /// triggered.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    /// Configured visible time.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Shows the fanfare from `now`, restarting it if already visible.
    pub fn trigger(&mut self, now: Instant) {
        if self.started_at.replace(now).is_some() {
            tracing::debug!("fanfare restarted");
        } else {
            tracing::debug!("fanfare started");
        }
    }

    /// Hides the fanfare immediately.
    pub const fn cancel(&mut self) {
        self.started_at = None;
    }

    /// Hides the fanfare if its deadline has passed.
    ///
    /// Returns `true` only on the tick that hides it.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.started_at {
            Some(started) if now.saturating_duration_since(started) >= self.duration => {
                self.started_at = None;
                tracing::debug!("fanfare finished");
                true
            }
            _ => false,
        }
    }

    /// Whether the fanfare is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.started_at.is_some()
    }

    /// Time left before the fanfare hides, or `None` when hidden.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let started = self.started_at?;
        Some(
            self.duration
                .saturating_sub(now.saturating_duration_since(started)),
        )
    }

    /// Samples the animation at `now`, or `None` when hidden.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn frame(&self, now: Instant) -> Option<FanfareFrame> {
        let started = self.started_at?;
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(started).as_secs_f32() / self.duration.as_secs_f32())
                .clamp(0.0, 1.0)
        };

        let segments = (KEYFRAMES.len() - 1) as f32;
        let position = progress * segments;
        let index = (position.floor() as usize).min(KEYFRAMES.len() - 2);
        let t = position - index as f32;
        Some(KEYFRAMES[index].lerp(KEYFRAMES[index + 1], t))
    }
}

impl Default for Fanfare {
    fn default() -> Self {
        Self::new(DEFAULT_FANFARE_DURATION)
    }
}
