use std::collections::BTreeMap;

use tracing::warn;

use crate::{
    foundation::error::{LifereelError, LifereelResult},
    story::model::{SavedStory, StoryContent, StorySettings},
};

/// Key-value access to persisted stories. Implemented by the persistence
/// collaborator; [`MemoryStoryStore`] is the in-process implementation and
/// the test double.
pub trait StoryStore {
    /// Fetch a story by id. An empty id is [`LifereelError::InputMissing`];
    /// a well-formed id with no record is [`LifereelError::NotFound`].
    fn fetch_story(&self, id: &str) -> LifereelResult<SavedStory>;

    /// Bump the story's view counter. Fire-and-forget: failures are logged
    /// by the implementation and never surfaced to the caller.
    fn increment_view_count(&mut self, id: &str);
}

/// In-memory story store backed by a `BTreeMap` (stable iteration order).
#[derive(Clone, Debug, Default)]
pub struct MemoryStoryStore {
    stories: BTreeMap<String, SavedStory>,
}

impl MemoryStoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record, keyed by `story.id`.
    pub fn put(&mut self, story: SavedStory) {
        self.stories.insert(story.id.clone(), story);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl StoryStore for MemoryStoryStore {
    fn fetch_story(&self, id: &str) -> LifereelResult<SavedStory> {
        if id.trim().is_empty() {
            return Err(LifereelError::input_missing("story id"));
        }
        self.stories
            .get(id)
            .cloned()
            .ok_or_else(|| LifereelError::not_found(format!("story '{id}'")))
    }

    fn increment_view_count(&mut self, id: &str) {
        match self.stories.get_mut(id) {
            Some(story) => story.view_count = story.view_count.saturating_add(1),
            None => warn!(id, "view count increment dropped: story not found"),
        }
    }
}

/// A well-formed empty story handed to the timing core when upstream data is
/// unavailable. Duration computation over it yields the intro-only minimum.
pub fn neutral_story(id: &str) -> SavedStory {
    SavedStory {
        id: id.to_string(),
        content: StoryContent::default(),
        settings: StorySettings::default(),
        created_at: 0,
        view_count: 0,
    }
}

/// Fetch a story, absorbing transient upstream failures at the boundary.
///
/// `InputMissing` and `NotFound` are surfaced to the caller (distinct
/// user-visible states); `Upstream` and wrapped errors are logged and
/// converted to a neutral empty story so the timing core always receives
/// well-formed input. No retries.
pub fn fetch_story_or_neutral<S: StoryStore>(store: &S, id: &str) -> LifereelResult<SavedStory> {
    match store.fetch_story(id) {
        Ok(story) => Ok(story),
        Err(err @ (LifereelError::InputMissing(_) | LifereelError::NotFound(_))) => Err(err),
        Err(err) => {
            warn!(id, error = %err, "story fetch failed upstream; using neutral story");
            Ok(neutral_story(id))
        }
    }
}
