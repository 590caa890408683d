use crate::{
    composition::duration::compute_duration,
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{LifereelError, LifereelResult},
    story::model::{SavedStory, StoryContent, StorySettings, StoryVariant},
};

/// The fully-parameterized video program handed to the external player:
/// events + settings + computed duration. The player owns decode and
/// drawing; this crate only guarantees how many frames the story occupies.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CompositionSpec {
    /// Frame rate the player runs at.
    pub fps: Fps,
    /// Output dimensions.
    pub canvas: Canvas,
    /// Total frames.
    pub duration: FrameIndex,
    /// Selected rendering strategy.
    pub variant: StoryVariant,
    /// The timeline rendered within the duration window.
    pub content: StoryContent,
    /// The settings the duration was computed from.
    pub settings: StorySettings,
}

impl CompositionSpec {
    /// Reject specs the external player cannot run.
    pub fn validate(&self) -> LifereelResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(LifereelError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(LifereelError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(LifereelError::validation("duration must be > 0 frames"));
        }
        self.content.validate()?;
        Ok(())
    }
}

/// Assemble the composition for a persisted story: the duration is computed
/// from the story's events and settings, never trusted from storage.
pub fn build_composition(story: &SavedStory, canvas: Canvas, fps: Fps) -> CompositionSpec {
    let duration = compute_duration(&story.content.events, &story.settings, fps);
    CompositionSpec {
        fps,
        canvas,
        duration: FrameIndex(duration),
        variant: story.settings.variant,
        content: story.content.clone(),
        settings: story.settings.clone(),
    }
}
