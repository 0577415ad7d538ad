pub const DEFAULT_FRAME_COUNT: u32 = 40;
pub const DEFAULT_FRAME_DELAY_MS: u32 = 25;
pub const DEFAULT_STEP: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub index: u32,
    pub delay_ms: u32,
    pub delta: f64,
    pub releases_lock: bool,
}

/// Fixed ramp of `4 * frame_count` frames: down for the first quarter (plus
/// the boundary frame), up through the middle half, down for the last quarter.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSchedule {
    frames: Vec<AnimationFrame>,
}

impl AnimationSchedule {
    pub fn new(frame_count: u32, frame_delay_ms: u32, step: f64) -> Self {
        let total = frame_count.saturating_mul(4);
        let frames = (0..total)
            .map(|index| {
                let falling = index <= frame_count || index >= frame_count.saturating_mul(3);
                AnimationFrame {
                    index,
                    delay_ms: index.saturating_mul(frame_delay_ms),
                    delta: if falling { -step } else { step },
                    releases_lock: index + 1 == total,
                }
            })
            .collect();
        Self { frames }
    }

    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn duration_ms(&self) -> u32 {
        self.frames.last().map(|frame| frame.delay_ms).unwrap_or(0)
    }
}

impl Default for AnimationSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_COUNT, DEFAULT_FRAME_DELAY_MS, DEFAULT_STEP)
    }
}

/// Timer facility frames are submitted to. Submitted frames are never
/// cancelled.
pub trait FrameScheduler {
    fn schedule(&mut self, frame: AnimationFrame);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationLock {
    engaged: bool,
}

impl AnimationLock {
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn try_engage(&mut self) -> bool {
        if self.engaged {
            return false;
        }
        self.engaged = true;
        true
    }

    /// Returns whether the state actually changed.
    pub fn set(&mut self, engaged: bool) -> bool {
        if self.engaged == engaged {
            return false;
        }
        self.engaged = engaged;
        true
    }
}
