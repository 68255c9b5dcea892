use crate::data_types::{FlingConfig, TouchAction, TouchEvent};
use glam::Vec2;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Fast start, slowing to rest: `1 - (1 - t)^2` over the clamped fraction `t`.
pub fn decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Estimates the primary pointer's velocity from its most recent samples.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    window_ms: u64,
    samples: VecDeque<(u64, Vec2)>,
}

impl VelocityTracker {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            samples: VecDeque::new(),
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn add(&mut self, timestamp_ms: u64, position: Vec2) {
        if let Some(&(last, _)) = self.samples.back() {
            if timestamp_ms < last {
                // Out-of-order sample: restart from here.
                self.samples.clear();
            }
        }
        self.samples.push_back((timestamp_ms, position));
        while let Some(&(oldest, _)) = self.samples.front() {
            if timestamp_ms - oldest > self.window_ms && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity in screen units per second; zero without enough history.
    pub fn velocity(&self) -> Vec2 {
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back())
        else {
            return Vec2::ZERO;
        };
        if t1 <= t0 {
            return Vec2::ZERO;
        }
        (p1 - p0) * (1000.0 / (t1 - t0) as f32)
    }
}

/// A release that qualified as a fling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingStart {
    /// Where the gesture went down; the animation starts from here.
    pub origin: Vec2,
    pub velocity: Vec2,
}

/// Watches the raw event stream and reports qualifying flings on release.
#[derive(Clone, Debug)]
pub struct FlingDetector {
    config: FlingConfig,
    origin: Option<Vec2>,
    multi_touch: bool,
    tracker: VelocityTracker,
}

impl FlingDetector {
    pub fn new(config: FlingConfig) -> Self {
        Self {
            tracker: VelocityTracker::new(config.velocity_window_ms),
            config,
            origin: None,
            multi_touch: false,
        }
    }

    pub fn observe(&mut self, event: &TouchEvent) -> Option<FlingStart> {
        let primary = event.primary();
        match event.action {
            TouchAction::Down => {
                self.tracker.clear();
                self.origin = primary;
                self.multi_touch = false;
                if let Some(p) = primary {
                    self.tracker.add(event.timestamp_ms, p);
                }
                None
            }
            TouchAction::Move => {
                if event.pointer_count() > 1 {
                    self.multi_touch = true;
                }
                if let Some(p) = primary {
                    self.tracker.add(event.timestamp_ms, p);
                }
                None
            }
            TouchAction::PointerDown | TouchAction::PointerUp => {
                self.multi_touch = true;
                None
            }
            TouchAction::Cancel => {
                self.origin = None;
                None
            }
            TouchAction::Up => {
                let origin = self.origin.take()?;
                let release = primary?;
                self.tracker.add(event.timestamp_ms, release);
                if self.multi_touch || !self.config.enabled {
                    return None;
                }
                let velocity = self.tracker.velocity();
                let distance = (release.x - origin.x).abs();
                let qualifies = velocity.x.abs() > self.config.min_velocity
                    && distance > self.config.min_distance;
                trace!(vx = velocity.x, distance, qualifies, "release evaluated for fling");
                qualifies.then_some(FlingStart { origin, velocity })
            }
        }
    }
}

/// An in-flight horizontal fling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingState {
    pub start: Vec2,
    pub target_x: f32,
    pub started_ms: u64,
    pub duration_ms: u64,
    last_x: f32,
}

impl FlingState {
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms)
    }

    fn position_at(&self, now_ms: u64) -> (f32, bool) {
        let t = self.elapsed_ms(now_ms) as f32 / self.duration_ms.max(1) as f32;
        let eased = decelerate(t);
        (self.start.x + (self.target_x - self.start.x) * eased, t >= 1.0)
    }
}

/// One animation tick: pan from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingStep {
    pub from: Vec2,
    pub to: Vec2,
    pub finished: bool,
}

/// Drives the decaying auto-pan that follows a fling.
///
/// Only the X axis moves; Y stays at the gesture's starting height.
#[derive(Clone, Debug, Default)]
pub struct FlingAnimator {
    state: Option<FlingState>,
}

impl FlingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, fling: &FlingStart, config: &FlingConfig, now_ms: u64) {
        let target_x = fling.origin.x + fling.velocity.x * config.horizon_ms as f32 / 1000.0;
        debug!(from = fling.origin.x, target_x, vx = fling.velocity.x, "fling started");
        self.state = Some(FlingState {
            start: fling.origin,
            target_x,
            started_ms: now_ms,
            duration_ms: config.duration_ms,
            last_x: fling.origin.x,
        });
    }

    /// Drops the running animation. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.state.take().is_some();
        if was_running {
            debug!("fling cancelled");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&FlingState> {
        self.state.as_ref()
    }

    /// Advances to `now_ms`. Returns `None` when no animation is running.
    pub fn advance(&mut self, now_ms: u64) -> Option<FlingStep> {
        let state = self.state.as_mut()?;
        let (x, finished) = state.position_at(now_ms);
        let step = FlingStep {
            from: Vec2::new(state.last_x, state.start.y),
            to: Vec2::new(x, state.start.y),
            finished,
        };
        state.last_x = x;
        if finished {
            debug!("fling finished");
            self.state = None;
        }
        Some(step)
    }
}
