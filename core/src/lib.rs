pub mod animation;
pub mod curve;
pub mod geometry;
pub mod model;
pub mod navigator;
pub mod options;

pub use animation::{AnimationFrame, AnimationLock, AnimationSchedule, FrameScheduler};
pub use curve::{curve_point, curve_points, format_points, CurvePoint, CurveShape};
pub use geometry::{GeometryError, WidgetGeometry};
pub use model::{DragUpdate, FrameOutcome, GraphModel, ModelError};
pub use navigator::{DragState, NavigatorLayout};
pub use options::{OptionsError, WidgetOptions};
