use serde::Deserialize;
use thiserror::Error;

use crate::animation::{DEFAULT_FRAME_COUNT, DEFAULT_FRAME_DELAY_MS, DEFAULT_STEP};
use crate::curve::{CurveShape, DEFAULT_ANGULAR_FREQUENCY, DEFAULT_COS_FREQUENCY};
use crate::navigator::DEFAULT_CARET_HEIGHT;

pub const DEFAULT_RATIO_Y: f64 = 0.2;
pub const DEFAULT_STROKE: &str = "tomato";
pub const DEFAULT_BACKGROUND: &str = "white";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const MAX_FRAME_COUNT: u32 = 10_000;
pub const MAX_FRAME_DELAY_MS: u32 = 60_000;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid options json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: u32 },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetOptions {
    pub angular_frequency: u32,
    pub cos_frequency: f64,
    pub ratio_y: f64,
    pub frame_delay_ms: u32,
    pub frame_count: u32,
    pub step: f64,
    pub stroke: String,
    pub background: String,
    pub stroke_width: f64,
    pub caret_height: f64,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            angular_frequency: DEFAULT_ANGULAR_FREQUENCY,
            cos_frequency: DEFAULT_COS_FREQUENCY,
            ratio_y: DEFAULT_RATIO_Y,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            frame_count: DEFAULT_FRAME_COUNT,
            step: DEFAULT_STEP,
            stroke: DEFAULT_STROKE.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            caret_height: DEFAULT_CARET_HEIGHT,
        }
    }
}

impl WidgetOptions {
    /// A missing or zero frequency falls back to the default.
    pub fn with_angular_frequency(angular_frequency: Option<u32>) -> Self {
        Self {
            angular_frequency: angular_frequency
                .filter(|value| *value != 0)
                .unwrap_or(DEFAULT_ANGULAR_FREQUENCY),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        for (field, value) in [
            ("cosFrequency", self.cos_frequency),
            ("ratioY", self.ratio_y),
            ("step", self.step),
            ("strokeWidth", self.stroke_width),
            ("caretHeight", self.caret_height),
        ] {
            if !value.is_finite() {
                return Err(OptionsError::NotFinite { field });
            }
        }
        if self.angular_frequency == 0 {
            return Err(OptionsError::NotPositive {
                field: "angularFrequency",
            });
        }
        if self.frame_count == 0 {
            return Err(OptionsError::NotPositive { field: "frameCount" });
        }
        if self.frame_count > MAX_FRAME_COUNT {
            return Err(OptionsError::TooLarge {
                field: "frameCount",
                max: MAX_FRAME_COUNT,
            });
        }
        if self.frame_delay_ms > MAX_FRAME_DELAY_MS {
            return Err(OptionsError::TooLarge {
                field: "frameDelayMs",
                max: MAX_FRAME_DELAY_MS,
            });
        }
        if self.caret_height <= 0.0 {
            return Err(OptionsError::NotPositive { field: "caretHeight" });
        }
        Ok(())
    }

    pub fn shape(&self) -> CurveShape {
        CurveShape {
            angular_frequency: self.angular_frequency as f64,
            cos_frequency: self.cos_frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let options = WidgetOptions::from_json("{}").expect("defaults parse");
        assert_eq!(options, WidgetOptions::default());
        assert_eq!(options.angular_frequency, 2);
        assert_eq!(options.frame_count, 40);
        assert_eq!(options.frame_delay_ms, 25);
        assert_eq!(options.ratio_y, 0.2);
        assert_eq!(options.stroke, "tomato");
    }

    #[test]
    fn camel_case_fields_override() {
        let options =
            WidgetOptions::from_json(r#"{"angularFrequency": 5, "frameDelayMs": 10, "stroke": "teal"}"#)
                .expect("valid json");
        assert_eq!(options.angular_frequency, 5);
        assert_eq!(options.frame_delay_ms, 10);
        assert_eq!(options.stroke, "teal");
        assert_eq!(options.shape().angular_frequency, 5.0);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            WidgetOptions::from_json(r#"{"frameCount": 0}"#),
            Err(OptionsError::NotPositive { field: "frameCount" })
        ));
        assert!(matches!(
            WidgetOptions::from_json(r#"{"angularFrequency": 0}"#),
            Err(OptionsError::NotPositive { .. })
        ));
        assert!(matches!(
            WidgetOptions::from_json(r#"{"caretHeight": -1}"#),
            Err(OptionsError::NotPositive { field: "caretHeight" })
        ));
        assert!(matches!(
            WidgetOptions::from_json("not json"),
            Err(OptionsError::Json(_))
        ));
        let options = WidgetOptions {
            ratio_y: f64::NAN,
            ..WidgetOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OptionsError::NotFinite { field: "ratioY" })
        ));
    }

    #[test]
    fn rejects_oversized_animation() {
        assert!(matches!(
            WidgetOptions::from_json(r#"{"frameCount": 4294967295}"#),
            Err(OptionsError::TooLarge { field: "frameCount", max: MAX_FRAME_COUNT })
        ));
        assert!(matches!(
            WidgetOptions::from_json(r#"{"frameCount": 5000000}"#),
            Err(OptionsError::TooLarge { .. })
        ));
        assert!(WidgetOptions::from_json(r#"{"frameCount": 10000}"#).is_ok());
        assert!(matches!(
            WidgetOptions::from_json(r#"{"frameDelayMs": 60001}"#),
            Err(OptionsError::TooLarge { field: "frameDelayMs", .. })
        ));
    }

    #[test]
    fn angular_frequency_defaults_when_missing_or_zero() {
        assert_eq!(WidgetOptions::with_angular_frequency(None).angular_frequency, 2);
        assert_eq!(WidgetOptions::with_angular_frequency(Some(0)).angular_frequency, 2);
        assert_eq!(WidgetOptions::with_angular_frequency(Some(7)).angular_frequency, 7);
    }
}
