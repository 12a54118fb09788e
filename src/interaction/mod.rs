use serde::{Deserialize, Serialize};
use tracing::trace;

/// Hover state of one sparkline instance.
///
/// `Idle` means no pointer is over the surface; consumers treat the last
/// point as the implicit active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering { index: usize },
}

impl HoverState {
    #[must_use]
    pub fn is_hovering(self) -> bool {
        matches!(self, Self::Hovering { .. })
    }

    /// Resolves the highlighted index for a series of `point_count` points.
    ///
    /// Idle falls back to the last index; a stale hover index is clamped.
    #[must_use]
    pub fn effective_index(self, point_count: usize) -> Option<usize> {
        let last = point_count.checked_sub(1)?;
        Some(match self {
            Self::Idle => last,
            Self::Hovering { index } => index.min(last),
        })
    }
}

/// Horizontal extent of the interactive surface in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub left: f64,
    pub width: f64,
}

impl SurfaceBounds {
    #[must_use]
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Maps a client x position to the nearest series index.
///
/// The ratio along the surface is clamped to `[0, 1]`; a degenerate surface
/// or non-finite input resolves to index 0.
#[must_use]
pub fn index_for_client_x(client_x: f64, surface: SurfaceBounds, point_count: usize) -> usize {
    let Some(last) = point_count.checked_sub(1) else {
        return 0;
    };
    let ratio = if surface.width > 0.0 {
        (client_x - surface.left) / surface.width
    } else {
        0.0
    };
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((ratio * last as f64).round() as usize).min(last)
}

/// Pointer/touch driven hover state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionController {
    point_count: usize,
    state: HoverState,
}

impl InteractionController {
    #[must_use]
    pub fn new(point_count: usize) -> Self {
        Self {
            point_count,
            state: HoverState::Idle,
        }
    }

    #[must_use]
    pub fn state(self) -> HoverState {
        self.state
    }

    #[must_use]
    pub fn point_count(self) -> usize {
        self.point_count
    }

    #[must_use]
    pub fn active_index(self) -> Option<usize> {
        self.state.effective_index(self.point_count)
    }

    /// Starts over for a new series; hover never carries across data sets.
    pub fn reset(&mut self, point_count: usize) {
        self.point_count = point_count;
        self.state = HoverState::Idle;
    }

    pub fn handle_pointer_move(&mut self, client_x: f64, surface: SurfaceBounds) -> HoverState {
        if self.point_count == 0 {
            self.state = HoverState::Idle;
            return self.state;
        }
        let index = index_for_client_x(client_x, surface, self.point_count);
        trace!(client_x, index, "pointer move");
        self.state = HoverState::Hovering { index };
        self.state
    }

    /// Follows the first active touch; an empty touch list changes nothing.
    pub fn handle_touch_move(&mut self, touches_x: &[f64], surface: SurfaceBounds) -> HoverState {
        match touches_x.first() {
            Some(client_x) => self.handle_pointer_move(*client_x, surface),
            None => self.state,
        }
    }

    pub fn handle_pointer_leave(&mut self) -> HoverState {
        trace!("pointer leave");
        self.state = HoverState::Idle;
        self.state
    }
}
