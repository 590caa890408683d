//! Lifereel turns a life-event timeline into a frame-accurate video
//! composition and keeps playback transport in sync with an external player.
//!
//! # Pipeline overview
//!
//! 1. **Fetch**: a persisted story (`SavedStory`) arrives from the
//!    persistence collaborator (`StoryStore`)
//! 2. **Select**: `select_renderer` maps the story's settings to a rendering
//!    strategy (slideshow or scrapbook)
//! 3. **Time**: `compute_duration` produces the total frame count;
//!    `build_composition` packages it as a `CompositionSpec` for the
//!    external player
//! 4. **Transport**: `TransportController` relays play/pause/mute intents to
//!    the player handle and renders elapsed-time labels
//!
//! The decorative time-travel counter lives in [`CountdownAnimator`]: a
//! self-contained state machine scheduled through explicit cancellable
//! deferrals.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: duration computation and countdown
//!   scheduling are pure and stable for a given input.
//! - **Total over well-formed input**: I/O-adjacent failures are absorbed at
//!   the collaborator boundary; the timing core never throws.
//! - **No timing in the core**: the countdown owns scheduling decisions but
//!   the embedder's [`DeferralHost`] runs the clock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod foundation;
mod story;
mod transport;

pub use animation::countdown::{
    CountdownAnimator, CountdownPhase, CountdownState, CountdownUpdate, DeferralHost,
    DeferralToken,
};
pub use animation::schedule::{
    BASELINE_YEAR, BRAKE_EXPONENT, COMPLETION_DELAY, MAX_STEP_DELAY, MIN_STEP_DELAY, START_DELAY,
    delay_after, step_count, value_at,
};
pub use composition::duration::{
    DurationStrategy, ScrapbookStrategy, SlideshowStrategy, compute_duration,
};
pub use composition::model::{CompositionSpec, build_composition};
pub use composition::selector::{RendererChoice, select_renderer};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use foundation::error::{LifereelError, LifereelResult};
pub use story::model::{
    DEFAULT_INTRO_FRAMES, EventCategory, EventScope, ImageStatus, Importance, SavedStory,
    StoryContent, StorySettings, StoryVariant, TimelineEvent,
};
pub use story::store::{MemoryStoryStore, StoryStore, fetch_story_or_neutral, neutral_story};
pub use transport::controller::{
    PlaybackState, PlayerHandle, TransportController, format_elapsed,
};
