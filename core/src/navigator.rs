use crate::geometry::WidgetGeometry;

pub const DEFAULT_CARET_HEIGHT: f64 = 40.0;
pub const TRACK_HEIGHT_RATIO: f64 = 0.5;
pub const RIGHT_INSET_DIVISOR: f64 = 20.0;

/// Vertical track with a fixed-height caret, positioned against the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigatorLayout {
    pub track_height: f64,
    pub track_top: f64,
    pub right: f64,
    pub caret_height: f64,
}

impl NavigatorLayout {
    pub fn for_geometry(geometry: &WidgetGeometry, caret_height: f64) -> Self {
        let track_height = geometry.height * TRACK_HEIGHT_RATIO;
        Self {
            track_height,
            track_top: track_height / 2.0,
            right: geometry.width / RIGHT_INSET_DIVISOR,
            caret_height,
        }
    }

    pub fn max_top(&self) -> f64 {
        self.track_height - self.caret_height
    }

    pub fn initial_top(&self) -> f64 {
        self.max_top() / 2.0
    }

    /// Lower bound is applied first, so a caret taller than the track pins to
    /// `max_top` even when that is negative.
    pub fn clamp_top(&self, raw: f64) -> f64 {
        let top = if raw.is_finite() { raw.max(0.0) } else { 0.0 };
        let max_top = self.max_top();
        if top > max_top {
            max_top
        } else {
            top
        }
    }

    pub fn offset_for_top(&self, top: f64) -> f64 {
        (top - self.track_height / 2.0) / self.track_height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    start: Option<f64>,
}

impl DragState {
    pub fn begin(&mut self, pointer_y: f64, caret_offset_top: f64) {
        self.start = Some(pointer_y - caret_offset_top);
    }

    pub fn is_held(&self) -> bool {
        self.start.is_some()
    }

    /// Raw (unclamped) caret top for the pointer, or `None` when not held.
    pub fn raw_top(&self, pointer_y: f64) -> Option<f64> {
        self.start.map(|start| pointer_y - start)
    }

    pub fn end(&mut self) -> bool {
        self.start.take().is_some()
    }
}
