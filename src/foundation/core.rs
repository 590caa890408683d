use crate::foundation::error::{LifereelError, LifereelResult};

/// One discrete unit of video time at the composition's frame rate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(
    /// Zero-based frame number.
    pub u64,
);

/// A half-open span of frames on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame (exclusive).
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> LifereelResult<Self> {
        if start.0 > end.0 {
            return Err(LifereelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Whether the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Whether `f` falls inside the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Whether the two ranges share at least one frame.
    pub fn overlaps(self, other: Self) -> bool {
        self.start.0 < other.end.0 && other.start.0 < self.end.0
    }
}

/// Rational frames-per-second value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator; must be > 0.
    pub num: u32,
    /// Denominator; must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> LifereelResult<Self> {
        if den == 0 {
            return Err(LifereelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(LifereelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// The fixed design frame rate: 30 frames per second.
    pub const STANDARD: Self = Self { num: 30, den: 1 };

    /// The frame rate as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds covered by a single frame.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Seconds covered by `frames` frames.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Frame count nearest to `secs` seconds; negative inputs map to 0.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }

    /// Whole elapsed seconds for a frame count (floored, integer math).
    pub fn whole_secs(self, frames: u64) -> u64 {
        frames.saturating_mul(u64::from(self.den)) / u64::from(self.num)
    }
}

/// Output dimensions handed to the external player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_range_contains_boundaries() {
        let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
        assert!(!r.contains(FrameIndex(1)));
        assert!(r.contains(FrameIndex(2)));
        assert!(r.contains(FrameIndex(4)));
        assert!(!r.contains(FrameIndex(5)));
    }

    #[test]
    fn frame_range_overlap() {
        let a = FrameRange::new(FrameIndex(0), FrameIndex(10)).unwrap();
        let b = FrameRange::new(FrameIndex(9), FrameIndex(12)).unwrap();
        let c = FrameRange::new(FrameIndex(10), FrameIndex(12)).unwrap();
        assert!(a.overlaps(b));
        assert!(!a.overlaps(c));
    }

    #[test]
    fn fps_round_conversion() {
        let fps = Fps::STANDARD;
        assert_eq!(fps.secs_to_frames_round(42.3), 1269);
        assert_eq!(fps.secs_to_frames_round(-1.0), 0);
    }

    #[test]
    fn whole_secs_floors() {
        let fps = Fps::STANDARD;
        assert_eq!(fps.whole_secs(1800), 60);
        assert_eq!(fps.whole_secs(905), 30);
        assert_eq!(fps.whole_secs(29), 0);
    }

    #[test]
    fn fps_rejects_zero() {
        assert!(Fps::new(0, 1).is_err());
        assert!(Fps::new(30, 0).is_err());
    }
}
