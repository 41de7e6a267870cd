//! Easing math and the fallback scroll animation.
//!
//! Hosts with native smooth scrolling get the target offset applied
//! directly; everyone else gets a fixed-duration eased animation stepped by
//! the engine clock. The stepper is a pure function of elapsed time so tests
//! can drive it without any real scheduler.

use crate::page::Page;

/// Duration of the fallback scroll animation.
pub const SCROLL_DURATION_MS: u64 = 800;

/// Ease-in-out quadratic: accelerate through the first half of `duration`,
/// decelerate through the second.
pub fn ease_in_out_quad(elapsed: f64, start: f64, distance: f64, duration: f64) -> f64 {
    let mut t = elapsed / (duration / 2.0);
    if t < 1.0 {
        return distance / 2.0 * t * t + start;
    }
    t -= 1.0;
    -distance / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// One in-flight fallback animation toward a fixed target offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start_y: f64,
    distance: f64,
    started_at: u64,
}

impl ScrollAnimation {
    pub fn new(start_y: f64, target_y: f64, started_at: u64) -> Self {
        Self {
            start_y,
            distance: target_y - start_y,
            started_at,
        }
    }

    /// Position at `now_ms` and whether the animation has run its course.
    /// Elapsed time is capped at the duration so the final sample lands
    /// exactly on the target no matter how coarsely the host ticks.
    pub fn step(&self, now_ms: u64) -> (f64, bool) {
        let elapsed = now_ms.saturating_sub(self.started_at) as f64;
        let duration = SCROLL_DURATION_MS as f64;
        let position =
            ease_in_out_quad(elapsed.min(duration), self.start_y, self.distance, duration);
        (position, elapsed >= duration)
    }
}

/// Clock and animation state shared by the scrolling controllers.
#[derive(Debug, Default)]
pub struct Motion {
    /// Last clock value seen by the engine, in ms.
    pub now_ms: u64,
    animations: Vec<ScrollAnimation>,
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll the page to `target_y`, natively when the host supports it,
    /// otherwise via a fallback animation started at the current clock.
    /// Targets above the document top clamp to 0, as a viewport would.
    ///
    /// Overlapping animations are not cancelled: each keeps stepping and the
    /// most recently started one writes last on every tick, matching the
    /// original page's behavior.
    pub fn scroll_to(&mut self, page: &mut Page, target_y: f64) {
        let target_y = target_y.max(0.0);
        if page.supports_smooth_scroll {
            page.scroll_y = target_y;
        } else {
            self.animations
                .push(ScrollAnimation::new(page.scroll_y, target_y, self.now_ms));
        }
    }

    /// Advance the clock and step every live animation. Returns `true` when
    /// the page's scroll offset changed.
    pub fn advance(&mut self, page: &mut Page, now_ms: u64) -> bool {
        self.now_ms = now_ms;
        if self.animations.is_empty() {
            return false;
        }
        let before = page.scroll_y;
        let mut remaining = Vec::with_capacity(self.animations.len());
        for animation in self.animations.drain(..) {
            let (position, done) = animation.step(now_ms);
            page.scroll_y = position;
            if !done {
                remaining.push(animation);
            }
        }
        self.animations = remaining;
        (page.scroll_y - before).abs() > f64::EPSILON
    }

    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }
}
