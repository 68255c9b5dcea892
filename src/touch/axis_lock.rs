use crate::data_types::{Axis, AxisLock};
use crate::tools::ZoomAxes;
use glam::Vec2;
use tracing::debug;

/// Per-axis change of the distance between two pointers.
///
/// A ratio is absent when the previous distance on that axis was zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisRatios {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl AxisRatios {
    pub fn between(old_distance: Vec2, new_distance: Vec2) -> Self {
        let ratio = |old: f32, new: f32| {
            if old > 0.0 {
                Some(new as f64 / old as f64)
            } else {
                None
            }
        };
        Self {
            x: ratio(old_distance.x, new_distance.x),
            y: ratio(old_distance.y, new_distance.y),
        }
    }

    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// The axis whose ratio departs further from 1.0; X wins ties.
    pub fn dominant(&self) -> Option<Axis> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => {
                if (1.0 - x).abs() >= (1.0 - y).abs() {
                    Some(Axis::X)
                } else {
                    Some(Axis::Y)
                }
            }
            (Some(_), None) => Some(Axis::X),
            (None, Some(_)) => Some(Axis::Y),
            (None, None) => None,
        }
    }
}

/// Decides whether a gesture stays on one axis.
///
/// Locks are only taken in strict mode, only from an observed motion sample,
/// and hold until the classifier clears them on pointer-up.
pub struct AxisLockArbiter;

impl AxisLockArbiter {
    /// Returns the pan delta after applying (and possibly taking) the lock.
    pub fn resolve_pan(lock: &mut AxisLock, strict: bool, delta: Vec2) -> Vec2 {
        if !strict {
            return delta;
        }
        if *lock == AxisLock::None {
            *lock = if delta.x.abs() >= delta.y.abs() {
                AxisLock::X
            } else {
                AxisLock::Y
            };
            debug!(lock = ?*lock, "pan axis locked");
        }
        match lock {
            AxisLock::X => Vec2::new(delta.x, 0.0),
            AxisLock::Y => Vec2::new(0.0, delta.y),
            AxisLock::None => delta,
        }
    }

    /// Picks the zoom rate and the affected axes for one pinch step.
    ///
    /// Non-strict pinches zoom both axes with the dominant ratio. Strict pinches
    /// lock onto the first dominant axis and keep reading that axis' ratio.
    pub fn resolve_zoom(
        lock: &mut AxisLock,
        strict: bool,
        ratios: AxisRatios,
    ) -> Option<(f64, ZoomAxes)> {
        if !strict {
            let axis = ratios.dominant()?;
            return ratios.get(axis).map(|rate| (rate, ZoomAxes::BOTH));
        }

        let axis = match lock.axis() {
            Some(axis) => axis,
            None => {
                let axis = ratios.dominant()?;
                *lock = AxisLock::from(axis);
                debug!(lock = ?*lock, "zoom axis locked");
                axis
            }
        };
        let rate = ratios.get(axis)?;
        let axes = match axis {
            Axis::X => ZoomAxes::new(true, false),
            Axis::Y => ZoomAxes::new(false, true),
        };
        Some((rate, axes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_pan_locks_on_first_delta() {
        let mut lock = AxisLock::None;
        let d = AxisLockArbiter::resolve_pan(&mut lock, true, Vec2::new(5.0, 3.0));
        assert_eq!(lock, AxisLock::X);
        assert_eq!(d, Vec2::new(5.0, 0.0));

        let d = AxisLockArbiter::resolve_pan(&mut lock, true, Vec2::new(1.0, 40.0));
        assert_eq!(d, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn equal_components_lock_x() {
        let mut lock = AxisLock::None;
        AxisLockArbiter::resolve_pan(&mut lock, true, Vec2::new(-4.0, 4.0));
        assert_eq!(lock, AxisLock::X);
    }

    #[test]
    fn free_pan_never_locks() {
        let mut lock = AxisLock::None;
        let d = AxisLockArbiter::resolve_pan(&mut lock, false, Vec2::new(3.0, 7.0));
        assert_eq!(lock, AxisLock::None);
        assert_eq!(d, Vec2::new(3.0, 7.0));
    }

    #[test]
    fn dominant_axis_deviates_most() {
        let r = AxisRatios {
            x: Some(1.02),
            y: Some(0.95),
        };
        assert_eq!(r.dominant(), Some(Axis::Y));
        let r = AxisRatios {
            x: None,
            y: Some(1.01),
        };
        assert_eq!(r.dominant(), Some(Axis::Y));
        assert_eq!(AxisRatios::default().dominant(), None);
    }

    #[test]
    fn zero_previous_distance_gives_no_ratio() {
        let r = AxisRatios::between(Vec2::new(0.0, 10.0), Vec2::new(5.0, 11.0));
        assert_eq!(r.x, None);
        assert!((r.y.unwrap() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn strict_zoom_keeps_locked_axis() {
        let mut lock = AxisLock::None;
        let first = AxisRatios {
            x: Some(1.05),
            y: Some(1.01),
        };
        let (rate, axes) = AxisLockArbiter::resolve_zoom(&mut lock, true, first).unwrap();
        assert_eq!(lock, AxisLock::X);
        assert_eq!(rate, 1.05);
        assert_eq!(axes, ZoomAxes::new(true, false));

        let second = AxisRatios {
            x: Some(1.01),
            y: Some(0.92),
        };
        let (rate, axes) = AxisLockArbiter::resolve_zoom(&mut lock, true, second).unwrap();
        assert_eq!(rate, 1.01);
        assert_eq!(axes, ZoomAxes::new(true, false));

        let locked_axis_missing = AxisRatios {
            x: None,
            y: Some(0.95),
        };
        assert!(AxisLockArbiter::resolve_zoom(&mut lock, true, locked_axis_missing).is_none());
    }

    #[test]
    fn free_zoom_uses_both_axes() {
        let mut lock = AxisLock::None;
        let r = AxisRatios {
            x: Some(1.01),
            y: Some(1.06),
        };
        let (rate, axes) = AxisLockArbiter::resolve_zoom(&mut lock, false, r).unwrap();
        assert_eq!(rate, 1.06);
        assert_eq!(axes, ZoomAxes::BOTH);
        assert_eq!(lock, AxisLock::None);
    }
}
