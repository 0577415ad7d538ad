use std::fmt::Write;

use crate::geometry::WidgetGeometry;

pub const DEFAULT_ANGULAR_FREQUENCY: u32 = 2;
pub const DEFAULT_COS_FREQUENCY: f64 = 3.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveShape {
    pub angular_frequency: f64,
    pub cos_frequency: f64,
}

impl Default for CurveShape {
    fn default() -> Self {
        Self {
            angular_frequency: DEFAULT_ANGULAR_FREQUENCY as f64,
            cos_frequency: DEFAULT_COS_FREQUENCY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

pub fn curve_point(
    geometry: &WidgetGeometry,
    shape: &CurveShape,
    index: usize,
    offset: f64,
) -> CurvePoint {
    let i = index as f64;
    let x = (i * shape.angular_frequency).cos() * geometry.scale + geometry.origin_x;
    let y = (i.sin() + offset * (shape.cos_frequency * i).cos()) * geometry.scale
        + geometry.origin_y;
    CurvePoint { x, y }
}

/// Index 0 never contributes a point; output runs over `1..=max_points`.
pub fn curve_points(geometry: &WidgetGeometry, shape: &CurveShape, offset: f64) -> Vec<CurvePoint> {
    (1..=geometry.max_points)
        .map(|index| curve_point(geometry, shape, index, offset))
        .collect()
}

/// Polyline `points` text: every pair is `x,y` followed by a single space.
pub fn format_points(points: &[CurvePoint]) -> String {
    let mut out = String::with_capacity(points.len() * 24);
    for point in points {
        let _ = write!(out, "{},{} ", point.x, point.y);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry_400() -> WidgetGeometry {
        WidgetGeometry::from_width(400).expect("valid width")
    }

    #[test]
    fn first_point_matches_golden_values() {
        let points = curve_points(&geometry_400(), &CurveShape::default(), 0.2);
        assert_eq!(points.len(), 200);
        let first = points[0];
        assert!((first.x - 166.7082530762286).abs() < 1e-9);
        assert!((first.y - 202.33437178797897).abs() < 1e-9);
        let last = points[199];
        assert!((last.x - 157.97629290859712).abs() < 1e-9);
        assert!((last.y - 66.71054700878855).abs() < 1e-9);
    }

    #[test]
    fn zero_offset_drops_the_cosine_term() {
        let geometry = geometry_400();
        let point = curve_point(&geometry, &CurveShape::default(), 3, 0.0);
        assert_eq!(point.y, 3f64.sin() * 80.0 + 150.0);
    }

    #[test]
    fn angular_frequency_only_moves_x() {
        let geometry = geometry_400();
        let base = curve_point(&geometry, &CurveShape::default(), 5, 0.2);
        let shape = CurveShape {
            angular_frequency: 3.0,
            ..CurveShape::default()
        };
        let other = curve_point(&geometry, &shape, 5, 0.2);
        assert_eq!(base.y, other.y);
        assert_eq!(other.x, 15f64.cos() * 80.0 + 200.0);
    }

    #[test]
    fn formats_pairs_with_trailing_space() {
        let text = format_points(&[
            CurvePoint { x: 1.5, y: 2.0 },
            CurvePoint { x: -3.25, y: 4.0 },
        ]);
        assert_eq!(text, "1.5,2 -3.25,4 ");
        assert_eq!(format_points(&[]), "");
    }
}
