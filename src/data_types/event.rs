use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchAction {
    /// First pointer touched the surface.
    Down,
    Move,
    /// Last pointer left the surface.
    Up,
    /// An additional pointer touched the surface.
    PointerDown,
    /// One of several pointers left the surface.
    PointerUp,
    /// The host aborted the gesture.
    Cancel,
}

/// Position of one pointer at the time of an event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub position: Vec2,
    pub pointer_index: usize,
    pub timestamp_ms: u64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, pointer_index: usize, timestamp_ms: u64) -> Self {
        Self {
            position: Vec2::new(x, y),
            pointer_index,
            timestamp_ms,
        }
    }
}

/// A discrete touch event as delivered by the host, pointers in index order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub timestamp_ms: u64,
    pub pointers: Vec<PointerSample>,
}

impl TouchEvent {
    pub fn new(action: TouchAction, timestamp_ms: u64, positions: &[Vec2]) -> Self {
        Self {
            action,
            timestamp_ms,
            pointers: positions
                .iter()
                .enumerate()
                .map(|(i, p)| PointerSample {
                    position: *p,
                    pointer_index: i,
                    timestamp_ms,
                })
                .collect(),
        }
    }

    pub fn down(timestamp_ms: u64, x: f32, y: f32) -> Self {
        Self::new(TouchAction::Down, timestamp_ms, &[Vec2::new(x, y)])
    }

    pub fn moved(timestamp_ms: u64, x: f32, y: f32) -> Self {
        Self::new(TouchAction::Move, timestamp_ms, &[Vec2::new(x, y)])
    }

    pub fn pinch(timestamp_ms: u64, first: Vec2, second: Vec2) -> Self {
        Self::new(TouchAction::Move, timestamp_ms, &[first, second])
    }

    pub fn up(timestamp_ms: u64, x: f32, y: f32) -> Self {
        Self::new(TouchAction::Up, timestamp_ms, &[Vec2::new(x, y)])
    }

    pub fn pointer_up(timestamp_ms: u64, first: Vec2, second: Vec2) -> Self {
        Self::new(TouchAction::PointerUp, timestamp_ms, &[first, second])
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn primary(&self) -> Option<Vec2> {
        self.pointers.first().map(|p| p.position)
    }

    pub fn secondary(&self) -> Option<Vec2> {
        self.pointers.get(1).map(|p| p.position)
    }
}
