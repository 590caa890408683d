use tracing::debug;

use crate::{
    composition::selector::select_renderer,
    foundation::core::{Fps, FrameIndex, FrameRange},
    story::model::{Importance, StorySettings, TimelineEvent},
};

/// On-screen seconds for one slideshow slide, by importance tier.
const SLIDE_SECS_HIGH: f64 = 5.0;
const SLIDE_SECS_MEDIUM: f64 = 4.0;
const SLIDE_SECS_LOW: f64 = 3.0;

/// Scrapbook pages hold up to this many events sharing on-screen time.
const SCRAPBOOK_PAGE_EVENTS: usize = 4;
/// On-screen seconds for one scrapbook page.
const SCRAPBOOK_PAGE_SECS: f64 = 6.0;

/// A renderer strategy's duration contract: how many frames the event
/// sequence occupies beyond the intro allocation, and where each event is
/// placed. Implementations must satisfy the minimum-frames contract:
/// total frames >= intro allocation + one frame per event.
pub trait DurationStrategy {
    /// Strategy name as the external renderer knows it.
    fn name(&self) -> &'static str;

    /// Frames contributed by the event sequence (excluding the intro).
    fn contribution(&self, events: &[TimelineEvent], fps: Fps) -> u64;

    /// Per-event frame placement, one range per event in presentation
    /// order, starting after the intro allocation.
    fn allocate(&self, events: &[TimelineEvent], fps: Fps, intro_frames: u64) -> Vec<FrameRange>;
}

/// Sequential full-frame slides; per-event time varies by importance tier.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlideshowStrategy;

impl SlideshowStrategy {
    fn slide_frames(event: &TimelineEvent, fps: Fps) -> u64 {
        let secs = match event.importance {
            Importance::High => SLIDE_SECS_HIGH,
            Importance::Medium => SLIDE_SECS_MEDIUM,
            Importance::Low => SLIDE_SECS_LOW,
        };
        fps.secs_to_frames_round(secs).max(1)
    }
}

impl DurationStrategy for SlideshowStrategy {
    fn name(&self) -> &'static str {
        "slideshow"
    }

    fn contribution(&self, events: &[TimelineEvent], fps: Fps) -> u64 {
        events.iter().map(|e| Self::slide_frames(e, fps)).sum()
    }

    fn allocate(&self, events: &[TimelineEvent], fps: Fps, intro_frames: u64) -> Vec<FrameRange> {
        let mut cursor = intro_frames;
        events
            .iter()
            .map(|event| {
                let start = cursor;
                cursor += Self::slide_frames(event, fps);
                FrameRange {
                    start: FrameIndex(start),
                    end: FrameIndex(cursor),
                }
            })
            .collect()
    }
}

/// Collage-style pages; events on the same page share overlapping
/// on-screen time.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrapbookStrategy;

impl ScrapbookStrategy {
    fn page_frames(fps: Fps) -> u64 {
        fps.secs_to_frames_round(SCRAPBOOK_PAGE_SECS).max(1)
    }

    fn page_count(event_count: usize) -> u64 {
        event_count.div_ceil(SCRAPBOOK_PAGE_EVENTS) as u64
    }
}

impl DurationStrategy for ScrapbookStrategy {
    fn name(&self) -> &'static str {
        "scrapbook"
    }

    fn contribution(&self, events: &[TimelineEvent], fps: Fps) -> u64 {
        let paged = Self::page_count(events.len()) * Self::page_frames(fps);
        // Minimum-frames contract: never less than one frame per event.
        paged.max(events.len() as u64)
    }

    fn allocate(&self, events: &[TimelineEvent], fps: Fps, intro_frames: u64) -> Vec<FrameRange> {
        let page_frames = Self::page_frames(fps);
        events
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let page = (i / SCRAPBOOK_PAGE_EVENTS) as u64;
                let start = intro_frames + page * page_frames;
                FrameRange {
                    start: FrameIndex(start),
                    end: FrameIndex(start + page_frames),
                }
            })
            .collect()
    }
}

fn clamp_min_frames(frames: u64) -> u64 {
    frames.max(1)
}

/// Map a story's events and settings to its total frame count.
///
/// Branch precedence:
/// 1. music-video mode with a finite positive audio length: the audio
///    drives the duration and the event list is ignored for timing;
/// 2. otherwise the selected renderer strategy's contribution is added to
///    the intro allocation.
///
/// Pure and idempotent; the result is always >= 1 frame. A negative or
/// non-finite music duration falls through to the non-music branch.
pub fn compute_duration(events: &[TimelineEvent], settings: &StorySettings, fps: Fps) -> u64 {
    if settings.is_music_video {
        match settings.background_music_duration {
            Some(secs) if secs.is_finite() && secs > 0.0 => {
                return clamp_min_frames(fps.secs_to_frames_round(secs));
            }
            Some(secs) => {
                debug!(secs, "unusable music duration; using event timing");
            }
            None => {}
        }
    }

    let choice = select_renderer(settings);
    clamp_min_frames(settings.intro_frames() + choice.strategy.contribution(events, fps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::model::{
        DEFAULT_INTRO_FRAMES, EventCategory, EventScope, ImageStatus, StoryVariant,
    };

    fn event(i: usize, importance: Importance) -> TimelineEvent {
        TimelineEvent {
            id: format!("e{i}"),
            year: 1990 + i as i32,
            month: None,
            day: None,
            title: format!("event {i}"),
            description: String::new(),
            category: EventCategory::World,
            importance,
            scope: EventScope::Period,
            image_url: None,
            image_status: ImageStatus::Idle,
        }
    }

    fn events(n: usize) -> Vec<TimelineEvent> {
        (0..n).map(|i| event(i, Importance::Medium)).collect()
    }

    #[test]
    fn music_video_duration_ignores_events() {
        let mut settings = StorySettings::default();
        settings.is_music_video = true;
        settings.background_music_duration = Some(42.3);
        let fps = Fps::STANDARD;

        for n in [0, 1, 50] {
            assert_eq!(compute_duration(&events(n), &settings, fps), 1269);
        }
    }

    #[test]
    fn bad_music_duration_falls_through() {
        let fps = Fps::STANDARD;
        let baseline = compute_duration(&events(3), &StorySettings::default(), fps);

        for bad in [-10.0, 0.0, f64::NAN, f64::INFINITY] {
            let mut settings = StorySettings::default();
            settings.is_music_video = true;
            settings.background_music_duration = Some(bad);
            assert_eq!(compute_duration(&events(3), &settings, fps), baseline);
        }
    }

    #[test]
    fn music_flag_without_duration_uses_event_timing() {
        let mut settings = StorySettings::default();
        settings.is_music_video = true;
        let fps = Fps::STANDARD;
        assert_eq!(
            compute_duration(&events(2), &settings, fps),
            compute_duration(&events(2), &StorySettings::default(), fps)
        );
    }

    #[test]
    fn zero_events_still_covers_intro() {
        let settings = StorySettings::default();
        let total = compute_duration(&[], &settings, Fps::STANDARD);
        assert_eq!(total, DEFAULT_INTRO_FRAMES);
    }

    #[test]
    fn non_music_total_is_at_least_intro() {
        for variant in [StoryVariant::Slideshow, StoryVariant::Scrapbook] {
            for n in [0, 1, 7] {
                let mut settings = StorySettings::default();
                settings.variant = variant;
                let total = compute_duration(&events(n), &settings, Fps::STANDARD);
                assert!(total >= settings.intro_duration_frames);
                assert!(total >= settings.intro_duration_frames + n as u64);
            }
        }
    }

    #[test]
    fn slideshow_sums_importance_tiers() {
        let evs = vec![
            event(0, Importance::High),
            event(1, Importance::Medium),
            event(2, Importance::Low),
        ];
        let settings = StorySettings::default();
        // 5s + 4s + 3s at 30 fps, plus the 150-frame intro.
        assert_eq!(
            compute_duration(&evs, &settings, Fps::STANDARD),
            150 + 150 + 120 + 90
        );
    }

    #[test]
    fn scrapbook_pages_share_time() {
        let mut settings = StorySettings::default();
        settings.variant = StoryVariant::Scrapbook;
        let fps = Fps::STANDARD;

        // 5 events -> 2 pages of 6s each.
        assert_eq!(compute_duration(&events(5), &settings, fps), 150 + 2 * 180);

        let ranges = ScrapbookStrategy.allocate(&events(5), fps, 150);
        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges[0], ranges[3]); // same page, fully overlapping
        assert!(ranges[0].overlaps(ranges[1]));
        assert!(!ranges[0].overlaps(ranges[4])); // next page
    }

    #[test]
    fn slideshow_allocation_is_sequential() {
        let fps = Fps::STANDARD;
        let ranges = SlideshowStrategy.allocate(&events(3), fps, 150);
        assert_eq!(ranges[0].start, FrameIndex(150));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(!pair[0].overlaps(pair[1]));
        }
    }

    #[test]
    fn compute_duration_is_idempotent() {
        let evs = events(9);
        let mut settings = StorySettings::default();
        settings.variant = StoryVariant::Scrapbook;
        let fps = Fps::STANDARD;
        assert_eq!(
            compute_duration(&evs, &settings, fps),
            compute_duration(&evs, &settings, fps)
        );
    }
}
