use thiserror::Error;

use crate::animation::{AnimationFrame, AnimationLock, AnimationSchedule, FrameScheduler};
use crate::curve::{curve_points, format_points, CurveShape};
use crate::geometry::{GeometryError, WidgetGeometry};
use crate::navigator::{DragState, NavigatorLayout};
use crate::options::{OptionsError, WidgetOptions};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Options(#[from] OptionsError),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    pub top: f64,
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutcome {
    pub points: String,
    pub lock_changed: bool,
    pub locked: bool,
}

/// State behind one widget: the offset parameter `ratio_y`, the animation
/// lock and the navigator drag. Everything else is fixed at construction.
#[derive(Clone, Debug)]
pub struct GraphModel {
    geometry: WidgetGeometry,
    shape: CurveShape,
    navigator: NavigatorLayout,
    frame_count: u32,
    frame_delay_ms: u32,
    step: f64,
    ratio_y: f64,
    lock: AnimationLock,
    drag: DragState,
}

impl GraphModel {
    pub fn new(width: i64, options: &WidgetOptions) -> Result<Self, ModelError> {
        options.validate()?;
        let geometry = WidgetGeometry::from_width(width)?;
        Ok(Self {
            geometry,
            shape: options.shape(),
            navigator: NavigatorLayout::for_geometry(&geometry, options.caret_height),
            frame_count: options.frame_count,
            frame_delay_ms: options.frame_delay_ms,
            step: options.step,
            ratio_y: options.ratio_y,
            lock: AnimationLock::default(),
            drag: DragState::default(),
        })
    }

    pub fn geometry(&self) -> &WidgetGeometry {
        &self.geometry
    }

    pub fn navigator(&self) -> &NavigatorLayout {
        &self.navigator
    }

    /// Built on demand; nothing is materialised until a run starts.
    pub fn schedule(&self) -> AnimationSchedule {
        AnimationSchedule::new(self.frame_count, self.frame_delay_ms, self.step)
    }

    pub fn ratio_y(&self) -> f64 {
        self.ratio_y
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_engaged()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_held()
    }

    /// Points for `ratio_y + delta`. A non-zero delta is persisted afterwards,
    /// so consecutive calls accumulate. Non-finite deltas count as zero.
    pub fn render(&mut self, delta: f64) -> String {
        let delta = if delta.is_finite() { delta } else { 0.0 };
        let points = format_points(&curve_points(
            &self.geometry,
            &self.shape,
            self.ratio_y + delta,
        ));
        if delta != 0.0 {
            self.ratio_y += delta;
        }
        points
    }

    pub fn drag_begin(&mut self, pointer_y: f64, caret_offset_top: f64) {
        self.drag.begin(pointer_y, caret_offset_top);
    }

    pub fn drag_move(&mut self, pointer_y: f64) -> Option<DragUpdate> {
        let raw = self.drag.raw_top(pointer_y)?;
        let top = self.navigator.clamp_top(raw);
        let offset = self.navigator.offset_for_top(top);
        if offset.is_finite() {
            self.ratio_y = offset;
        }
        Some(DragUpdate {
            top,
            offset: self.ratio_y,
        })
    }

    pub fn drag_end(&mut self) -> bool {
        self.drag.end()
    }

    /// Engages the lock and submits every frame. Returns false, scheduling
    /// nothing, while a previous run is still in flight.
    pub fn start_animation(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        if !self.lock.try_engage() {
            return false;
        }
        for frame in self.schedule().frames() {
            scheduler.schedule(*frame);
        }
        true
    }

    pub fn apply_frame(&mut self, frame: &AnimationFrame) -> FrameOutcome {
        let points = self.render(frame.delta);
        let lock_changed = self.lock.set(!frame.releases_lock);
        FrameOutcome {
            points,
            lock_changed,
            locked: self.lock.is_engaged(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<AnimationFrame>);

    impl FrameScheduler for Recorder {
        fn schedule(&mut self, frame: AnimationFrame) {
            self.0.push(frame);
        }
    }

    fn model_400() -> GraphModel {
        GraphModel::new(400, &WidgetOptions::default()).expect("valid model")
    }

    #[test]
    fn zero_delta_render_keeps_offset() {
        let mut model = model_400();
        let first = model.render(0.0);
        let second = model.render(0.0);
        assert_eq!(first, second);
        assert_eq!(model.ratio_y(), 0.2);
    }

    #[test]
    fn delta_is_used_for_the_call_that_applies_it() {
        let mut model = model_400();
        let moved = model.render(0.1);
        let mut reference = model_400();
        reference.ratio_y = 0.2 + 0.1;
        assert_eq!(moved, reference.render(0.0));
        assert_eq!(model.ratio_y(), 0.2 + 0.1);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut model = model_400();
        model.render(f64::NAN);
        model.render(f64::INFINITY);
        assert_eq!(model.ratio_y(), 0.2);
    }

    #[test]
    fn drag_move_needs_a_held_caret() {
        let mut model = model_400();
        assert_eq!(model.drag_move(10.0), None);
        model.drag_begin(100.0, 55.0);
        let update = model.drag_move(100.0).expect("held");
        assert_eq!(update.top, 55.0);
        assert_eq!(update.offset, (55.0 - 75.0) / 150.0);
        assert_eq!(model.ratio_y(), update.offset);
        assert!(model.drag_end());
        assert_eq!(model.drag_move(500.0), None);
    }

    #[test]
    fn frame_releases_lock_only_on_last() {
        let mut model = model_400();
        let mut recorder = Recorder::default();
        assert!(model.start_animation(&mut recorder));
        let frames = recorder.0;
        let first = model.apply_frame(&frames[0]);
        assert!(first.locked);
        assert!(!first.lock_changed);
        let last = model.apply_frame(&frames[frames.len() - 1]);
        assert!(last.lock_changed);
        assert!(!last.locked);
    }

    #[test]
    fn oversized_frame_count_fails_construction() {
        let options = WidgetOptions {
            frame_count: u32::MAX,
            ..WidgetOptions::default()
        };
        assert!(matches!(
            GraphModel::new(400, &options),
            Err(ModelError::Options(OptionsError::TooLarge { .. }))
        ));
    }

    #[test]
    fn schedule_follows_options() {
        let options = WidgetOptions {
            frame_count: 3,
            frame_delay_ms: 10,
            ..WidgetOptions::default()
        };
        let model = GraphModel::new(400, &options).expect("valid model");
        let schedule = model.schedule();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.duration_ms(), 110);
    }

    #[test]
    fn rejects_invalid_construction() {
        assert!(matches!(
            GraphModel::new(0, &WidgetOptions::default()),
            Err(ModelError::Geometry(_))
        ));
        let options = WidgetOptions {
            frame_count: 0,
            ..WidgetOptions::default()
        };
        assert!(matches!(
            GraphModel::new(400, &options),
            Err(ModelError::Options(_))
        ));
    }
}
