use crate::foundation::error::{LifereelError, LifereelResult};

/// Default number of frames reserved for the title/intro card.
pub const DEFAULT_INTRO_FRAMES: u64 = 150;

/// Closed category tag for a timeline event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)] // self-describing variants
pub enum EventCategory {
    Politics,
    Sports,
    Music,
    Technology,
    Science,
    Culture,
    Personal,
    World,
}

/// Importance tier, consumed by the slideshow duration rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)] // self-describing variants
pub enum Importance {
    High,
    Medium,
    Low,
}

/// Scope tag distinguishing how precisely an event is dated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventScope {
    /// Exact birthdate: year, month and day are all meaningful.
    BirthDate,
    /// Birth month: year and month, no day.
    BirthMonth,
    /// Birth year only.
    BirthYear,
    /// Generic period event, dated to a year.
    Period,
}

impl EventScope {
    fn allows_month(self) -> bool {
        matches!(self, Self::BirthDate | Self::BirthMonth)
    }

    fn allows_day(self) -> bool {
        matches!(self, Self::BirthDate)
    }
}

/// Image-resolution status, used only to avoid indefinite "loading" UI
/// states. Not consumed by the timing core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)] // self-describing variants
pub enum ImageStatus {
    #[default]
    Idle,
    Loading,
    Found,
    None,
    Error,
}

/// One life-event on the timeline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimelineEvent {
    /// Unique identifier within the story.
    pub id: String,
    /// Calendar year; always present.
    pub year: i32,
    /// Calendar month, only for month-or-finer scopes.
    #[serde(default)]
    pub month: Option<u8>,
    /// Calendar day, only for date-level scope.
    #[serde(default)]
    pub day: Option<u8>,
    /// Free-text title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Closed category tag.
    pub category: EventCategory,
    /// Importance tier.
    pub importance: Importance,
    /// How precisely the event is dated.
    pub scope: EventScope,
    /// Opaque reference resolved by the external image search.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Resolution status of `image_url`.
    #[serde(default)]
    pub image_status: ImageStatus,
}

impl TimelineEvent {
    /// Check the dating invariant: month/day may only be present when the
    /// event's scope claims that level of precision.
    pub fn validate(&self) -> LifereelResult<()> {
        if self.id.trim().is_empty() {
            return Err(LifereelError::validation("event id must be non-empty"));
        }
        if let Some(month) = self.month {
            if !self.scope.allows_month() {
                return Err(LifereelError::validation(format!(
                    "event '{}' carries a month but its scope is not month-precise",
                    self.id
                )));
            }
            if !(1..=12).contains(&month) {
                return Err(LifereelError::validation(format!(
                    "event '{}' month {} out of range 1..=12",
                    self.id, month
                )));
            }
        }
        if let Some(day) = self.day {
            if self.month.is_none() || !self.scope.allows_day() {
                return Err(LifereelError::validation(format!(
                    "event '{}' carries a day without date-level scope",
                    self.id
                )));
            }
            if !(1..=31).contains(&day) {
                return Err(LifereelError::validation(format!(
                    "event '{}' day {} out of range 1..=31",
                    self.id, day
                )));
            }
        }
        Ok(())
    }
}

/// An ordered sequence of timeline events plus optional title/introduction.
/// Order is chronological presentation order and must be preserved.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct StoryContent {
    /// Story title shown on the intro card.
    #[serde(default)]
    pub title: Option<String>,
    /// Introduction text shown on the intro card.
    #[serde(default)]
    pub introduction: Option<String>,
    /// The events, in chronological presentation order.
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl StoryContent {
    /// Validate every event's dating invariant.
    pub fn validate(&self) -> LifereelResult<()> {
        for event in &self.events {
            event.validate()?;
        }
        Ok(())
    }
}

/// Rendering strategy selected for a story.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryVariant {
    /// Sequential full-frame slides (default).
    #[default]
    Slideshow,
    /// Collage-style layout where events share overlapping on-screen time.
    Scrapbook,
}

// Lenient by contract: an unknown or absent variant tag selects the
// slideshow default rather than failing deserialization.
impl<'de> serde::Deserialize<'de> for StoryVariant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "scrapbook" => Self::Scrapbook,
            _ => Self::Slideshow,
        })
    }
}

/// Per-story configuration. Absent options take the documented defaults.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StorySettings {
    /// Rendering strategy; defaults to slideshow.
    pub variant: StoryVariant,
    /// When set, total duration is driven by the audio length.
    pub is_music_video: bool,
    /// Background audio length in seconds; drives total duration when
    /// `is_music_video` is set.
    pub background_music_duration: Option<f64>,
    /// Frames reserved for the title/intro card; defaults to 150.
    pub intro_duration_frames: u64,
    /// Cosmetic VHS overlay; not part of timing.
    pub enable_vhs_effect: bool,
    /// Cosmetic retro grading intensity; not part of timing.
    pub retro_intensity: f64,
    /// Opaque reference to the intro audio collaborator.
    pub intro_audio_url: Option<String>,
    /// Opaque reference to the background music collaborator.
    pub background_music_url: Option<String>,
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            variant: StoryVariant::Slideshow,
            is_music_video: false,
            background_music_duration: None,
            intro_duration_frames: DEFAULT_INTRO_FRAMES,
            enable_vhs_effect: false,
            retro_intensity: 0.0,
            intro_audio_url: None,
            background_music_url: None,
        }
    }
}

impl StorySettings {
    /// Intro allocation with the defensive floor applied: a stored record
    /// with `intro_duration_frames: 0` still reserves one frame.
    pub fn intro_frames(&self) -> u64 {
        self.intro_duration_frames.max(1)
    }
}

/// A persisted story record. Owned by the persistence collaborator; the
/// timing core treats it as read-only input.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SavedStory {
    /// Storage key.
    pub id: String,
    /// The timeline itself.
    pub content: StoryContent,
    /// Per-story configuration.
    pub settings: StorySettings,
    /// Unix timestamp (seconds).
    pub created_at: i64,
    /// Monotonically-incrementing view counter.
    pub view_count: u64,
}
