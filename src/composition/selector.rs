use crate::{
    composition::duration::{DurationStrategy, ScrapbookStrategy, SlideshowStrategy},
    story::model::{StorySettings, StoryVariant},
};

static SLIDESHOW: SlideshowStrategy = SlideshowStrategy;
static SCRAPBOOK: ScrapbookStrategy = ScrapbookStrategy;

/// The rendering strategy chosen for a story.
pub struct RendererChoice {
    /// Which variant was selected.
    pub variant: StoryVariant,
    /// The variant's duration-contribution rule.
    pub strategy: &'static dyn DurationStrategy,
}

/// Pure mapping from settings to a renderer strategy. Never fails; an
/// unknown or absent variant has already defaulted to slideshow when the
/// settings were deserialized.
pub fn select_renderer(settings: &StorySettings) -> RendererChoice {
    match settings.variant {
        StoryVariant::Slideshow => RendererChoice {
            variant: StoryVariant::Slideshow,
            strategy: &SLIDESHOW,
        },
        StoryVariant::Scrapbook => RendererChoice {
            variant: StoryVariant::Scrapbook,
            strategy: &SCRAPBOOK,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_select_slideshow() {
        let choice = select_renderer(&StorySettings::default());
        assert_eq!(choice.variant, StoryVariant::Slideshow);
        assert_eq!(choice.strategy.name(), "slideshow");
    }

    #[test]
    fn scrapbook_settings_select_scrapbook() {
        let mut settings = StorySettings::default();
        settings.variant = StoryVariant::Scrapbook;
        let choice = select_renderer(&settings);
        assert_eq!(choice.variant, StoryVariant::Scrapbook);
        assert_eq!(choice.strategy.name(), "scrapbook");
    }

    #[test]
    fn music_video_mode_is_orthogonal_to_variant() {
        let mut settings = StorySettings::default();
        settings.is_music_video = true;
        assert_eq!(select_renderer(&settings).variant, StoryVariant::Slideshow);
    }
}
