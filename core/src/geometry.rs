use thiserror::Error;

pub const HEIGHT_RATIO: f64 = 0.75;
pub const SCALE_DIVISOR: f64 = 5.0;
pub const POINT_SPACING_PX: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("widget width must be positive, got {0}px")]
    InvalidWidth(i64),
}

/// Pixel geometry derived once from the measured host width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetGeometry {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub max_points: usize,
}

impl WidgetGeometry {
    pub fn from_width(width: i64) -> Result<Self, GeometryError> {
        if width <= 0 {
            return Err(GeometryError::InvalidWidth(width));
        }
        let width_px = width as f64;
        let height = width_px * HEIGHT_RATIO;
        let max_points = (width as u64).div_ceil(POINT_SPACING_PX as u64) as usize * 2;
        Ok(Self {
            width: width_px,
            height,
            scale: width_px / SCALE_DIVISOR,
            origin_x: width_px / 2.0,
            origin_y: height / 2.0,
            max_points,
        })
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}
