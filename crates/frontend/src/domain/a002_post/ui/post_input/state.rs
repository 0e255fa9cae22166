//! Draft composer state machine
//!
//! One record owns everything the post composer shows. The Leptos view model
//! keeps it in a single signal and routes every DOM event through the
//! transitions below; nothing here touches the DOM.
//!
//! ```text
//! Idle(empty title) --type--> Idle(composing) --submit--> Submitting
//! Submitting --ok--> Submitted (cache cleared, page navigates away)
//! Submitting --err--> Idle(composing, error shown)
//! ```

use contracts::domain::a001_tag::{Tag, TagId};
use contracts::domain::a002_post::{CreatePostRequest, CreatePostResponse, ImageUpload};
use contracts::shared::{ActionResult, Failure};

use crate::shared::cache::SessionCache;
use crate::shared::navigation::Navigator;
use crate::system::auth::SessionContext;

pub const CACHE_TITLE_KEY: &str = "PostInput-Title";
pub const CACHE_DESCRIPTION_KEY: &str = "PostInput-Description";

/// Shown when a submission fails without a structured payload
pub const FALLBACK_FAILURE_MESSAGE: &str =
    "Something went wrong while submitting your suggestion. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// create-post call in flight
    Submitting,
    /// Post created; the page is navigating away
    Submitted,
}

/// Not-yet-submitted post content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub attachments: Vec<ImageUpload>,
    /// Selection order is kept so the slug list is stable
    pub chosen_tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftComposer {
    session: SessionContext,
    available_tags: Vec<Tag>,
    draft: Draft,
    error: Option<Failure>,
    sign_in_open: bool,
    phase: SubmitPhase,
}

impl DraftComposer {
    /// Initial state on mount: signed-in viewers get their cached draft back.
    pub fn restore(session: SessionContext, tags: Vec<Tag>, cache: &dyn SessionCache) -> Self {
        let cached = |key: &str| {
            if session.is_authenticated {
                cache.get(key).unwrap_or_default()
            } else {
                String::new()
            }
        };

        Self {
            session,
            available_tags: tags,
            draft: Draft {
                title: cached(CACHE_TITLE_KEY),
                description: cached(CACHE_DESCRIPTION_KEY),
                ..Draft::default()
            },
            error: None,
            sign_in_open: false,
            phase: SubmitPhase::Idle,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn session(&self) -> SessionContext {
        self.session
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn description(&self) -> &str {
        &self.draft.description
    }

    pub fn available_tags(&self) -> &[Tag] {
        &self.available_tags
    }

    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    pub fn is_sign_in_open(&self) -> bool {
        self.sign_in_open
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Description, uploader and tag list are only shown once a title exists
    pub fn shows_details(&self) -> bool {
        !self.draft.title.is_empty()
    }

    pub fn is_tag_chosen(&self, id: TagId) -> bool {
        self.draft.chosen_tags.iter().any(|t| t.id == id)
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Title got focus. Returns `true` when the input must be blurred because
    /// the viewer has to sign in first.
    pub fn title_focused(&mut self) -> bool {
        if self.session.is_authenticated {
            return false;
        }
        self.sign_in_open = true;
        true
    }

    pub fn hide_sign_in(&mut self) {
        self.sign_in_open = false;
    }

    pub fn change_title(&mut self, value: String, cache: &dyn SessionCache) {
        cache.set(CACHE_TITLE_KEY, &value);
        self.draft.title = value;
    }

    pub fn change_description(&mut self, value: String, cache: &dyn SessionCache) {
        cache.set(CACHE_DESCRIPTION_KEY, &value);
        self.draft.description = value;
    }

    /// Select or deselect a tag. Tags the page does not offer are ignored.
    pub fn toggle_tag(&mut self, tag: &Tag) {
        if let Some(idx) = self.draft.chosen_tags.iter().position(|t| t.id == tag.id) {
            self.draft.chosen_tags.remove(idx);
            return;
        }
        if let Some(offered) = self.available_tags.iter().find(|t| t.id == tag.id) {
            self.draft.chosen_tags.push(offered.clone());
        }
    }

    /// New tag list from the page; selections no longer offered are dropped.
    pub fn set_available_tags(&mut self, tags: Vec<Tag>) {
        self.draft
            .chosen_tags
            .retain(|chosen| tags.iter().any(|t| t.id == chosen.id));
        // Keep chosen entries in sync with refreshed display data.
        for chosen in self.draft.chosen_tags.iter_mut() {
            if let Some(fresh) = tags.iter().find(|t| t.id == chosen.id) {
                *chosen = fresh.clone();
            }
        }
        self.available_tags = tags;
    }

    pub fn attachments_changed(&mut self, attachments: Vec<ImageUpload>) {
        self.draft.attachments = attachments;
    }

    /// Start a submission. `None` means nothing to do: empty title, or a
    /// previous submission has not resolved yet.
    pub fn begin_submit(&mut self) -> Option<CreatePostRequest> {
        if self.draft.title.is_empty() || self.phase != SubmitPhase::Idle {
            return None;
        }

        self.error = None;
        self.phase = SubmitPhase::Submitting;

        Some(CreatePostRequest {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            attachments: self.draft.attachments.clone(),
            tags: self
                .draft
                .chosen_tags
                .iter()
                .map(|t| t.slug.clone())
                .collect(),
        })
    }

    /// Reconcile the create-post result with the composer.
    pub fn finish_submit(
        &mut self,
        result: ActionResult<CreatePostResponse>,
        cache: &dyn SessionCache,
        navigator: &dyn Navigator,
    ) {
        match result {
            Ok(post) => {
                self.error = None;
                self.phase = SubmitPhase::Submitted;
                cache.remove(&[CACHE_TITLE_KEY, CACHE_DESCRIPTION_KEY]);
                navigator.navigate(&post.location());
            }
            Err(err) => {
                self.phase = SubmitPhase::Idle;
                self.error = Some(match err.failure() {
                    Some(failure) => failure.clone(),
                    None => {
                        log::error!("create post failed: {}", err);
                        Failure::general(FALLBACK_FAILURE_MESSAGE)
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cache::MemorySessionCache;
    use contracts::shared::ActionError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    fn signed_in() -> SessionContext {
        SessionContext {
            is_authenticated: true,
            is_read_only: false,
        }
    }

    fn anonymous() -> SessionContext {
        SessionContext::default()
    }

    fn board_tags() -> Vec<Tag> {
        vec![
            Tag::new(1, "Bug", "bug", "E74C3C"),
            Tag::new(2, "UI", "ui", "1ABC9C"),
            Tag::new(3, "API", "api", "3498DB"),
        ]
    }

    fn created(number: i32, slug: &str) -> ActionResult<CreatePostResponse> {
        Ok(CreatePostResponse {
            id: 100,
            number,
            title: String::new(),
            slug: slug.to_string(),
        })
    }

    #[test]
    fn test_restore_reads_cached_draft_for_signed_in_viewer() {
        let cache = MemorySessionCache::new();
        cache.set(CACHE_TITLE_KEY, "Dark mode");
        cache.set(CACHE_DESCRIPTION_KEY, "Please");

        let composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        assert_eq!(composer.title(), "Dark mode");
        assert_eq!(composer.description(), "Please");
        assert!(composer.draft().chosen_tags.is_empty());
        assert!(composer.shows_details());
    }

    #[test]
    fn test_restore_ignores_cache_for_anonymous_viewer() {
        let cache = MemorySessionCache::new();
        cache.set(CACHE_TITLE_KEY, "Dark mode");

        let composer = DraftComposer::restore(anonymous(), board_tags(), &cache);
        assert_eq!(composer.title(), "");
        assert!(!composer.shows_details());
    }

    #[test]
    fn test_title_change_is_mirrored_into_cache() {
        let cache = MemorySessionCache::new();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);

        for value in ["A", "Ad", "Add dark mode"] {
            composer.change_title(value.to_string(), &cache);
            assert_eq!(cache.get(CACHE_TITLE_KEY).as_deref(), Some(value));
            assert_eq!(composer.title(), value);
        }

        composer.change_description("details".to_string(), &cache);
        assert_eq!(cache.get(CACHE_DESCRIPTION_KEY).as_deref(), Some("details"));
    }

    #[test]
    fn test_focus_gate_opens_sign_in_for_each_focus() {
        let cache = MemorySessionCache::new();
        let mut composer = DraftComposer::restore(anonymous(), board_tags(), &cache);

        assert!(composer.title_focused());
        assert!(composer.is_sign_in_open());

        composer.hide_sign_in();
        assert!(!composer.is_sign_in_open());

        assert!(composer.title_focused());
        assert!(composer.is_sign_in_open());
        assert_eq!(composer.title(), "");
    }

    #[test]
    fn test_focus_allowed_when_signed_in() {
        let cache = MemorySessionCache::new();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        assert!(!composer.title_focused());
        assert!(!composer.is_sign_in_open());
    }

    #[test]
    fn test_toggle_tag_twice_restores_selection() {
        let cache = MemorySessionCache::new();
        let tags = board_tags();
        let mut composer = DraftComposer::restore(signed_in(), tags.clone(), &cache);
        composer.toggle_tag(&tags[0]);
        let before = composer.draft().chosen_tags.clone();

        composer.toggle_tag(&tags[1]);
        assert!(composer.is_tag_chosen(tags[1].id));
        composer.toggle_tag(&tags[1]);

        assert_eq!(composer.draft().chosen_tags, before);
    }

    #[test]
    fn test_toggle_tag_matches_by_id_not_instance() {
        let cache = MemorySessionCache::new();
        let tags = board_tags();
        let mut composer = DraftComposer::restore(signed_in(), tags.clone(), &cache);

        composer.toggle_tag(&tags[1]);
        // same tag, recreated with different display data
        let recreated = Tag::new(2, "User interface", "ui", "000000");
        composer.toggle_tag(&recreated);

        assert!(composer.draft().chosen_tags.is_empty());
    }

    #[test]
    fn test_toggle_ignores_tags_not_offered() {
        let cache = MemorySessionCache::new();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        composer.toggle_tag(&Tag::new(99, "Ghost", "ghost", "000000"));
        assert!(composer.draft().chosen_tags.is_empty());
    }

    #[test]
    fn test_new_tag_list_prunes_selection() {
        let cache = MemorySessionCache::new();
        let tags = board_tags();
        let mut composer = DraftComposer::restore(signed_in(), tags.clone(), &cache);
        composer.toggle_tag(&tags[0]);
        composer.toggle_tag(&tags[2]);

        composer.set_available_tags(vec![tags[2].clone()]);

        assert!(!composer.is_tag_chosen(tags[0].id));
        assert!(composer.is_tag_chosen(tags[2].id));
        assert_eq!(composer.available_tags().len(), 1);
    }

    #[test]
    fn test_assigned_indicator_follows_selection() {
        let cache = MemorySessionCache::new();
        let tags = board_tags();
        let mut composer = DraftComposer::restore(signed_in(), tags.clone(), &cache);
        composer.toggle_tag(&tags[1]);

        let assigned: Vec<bool> = tags.iter().map(|t| composer.is_tag_chosen(t.id)).collect();
        assert_eq!(assigned, vec![false, true, false]);
    }

    #[test]
    fn test_submit_with_empty_title_is_inert() {
        let cache = MemorySessionCache::new();
        cache.set(CACHE_DESCRIPTION_KEY, "kept");
        let navigator = RecordingNavigator::default();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);

        assert_eq!(composer.begin_submit(), None);
        assert_eq!(composer.phase(), SubmitPhase::Idle);
        assert_eq!(cache.get(CACHE_DESCRIPTION_KEY).as_deref(), Some("kept"));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_successful_submission_consumes_draft_and_navigates() {
        let cache = MemorySessionCache::new();
        let navigator = RecordingNavigator::default();
        let tags = board_tags();
        let mut composer = DraftComposer::restore(signed_in(), tags.clone(), &cache);
        composer.change_title("Add dark mode".to_string(), &cache);
        composer.change_description(String::new(), &cache);
        composer.toggle_tag(&tags[1]);

        let request = composer.begin_submit().expect("submission should start");
        assert_eq!(
            request,
            CreatePostRequest {
                title: "Add dark mode".to_string(),
                description: String::new(),
                attachments: vec![],
                tags: vec!["ui".to_string()],
            }
        );
        assert!(composer.is_submit_disabled());

        composer.finish_submit(created(42, "add-dark-mode"), &cache, &navigator);

        assert_eq!(*navigator.visited.borrow(), vec!["/posts/42/add-dark-mode".to_string()]);
        assert_eq!(cache.get(CACHE_TITLE_KEY), None);
        assert_eq!(cache.get(CACHE_DESCRIPTION_KEY), None);
        assert_eq!(composer.error(), None);
        assert_eq!(composer.phase(), SubmitPhase::Submitted);
        // stays disabled until the page unloads
        assert!(composer.is_submit_disabled());
        assert_eq!(composer.begin_submit(), None);
    }

    #[test]
    fn test_structured_failure_is_kept_for_display() {
        let cache = MemorySessionCache::new();
        let navigator = RecordingNavigator::default();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        composer.change_title("Add dark mode".to_string(), &cache);

        composer.begin_submit();
        let failure = Failure::for_field("title", "too_long");
        composer.finish_submit(
            Err(ActionError::Failure(failure.clone())),
            &cache,
            &navigator,
        );

        assert_eq!(composer.error(), Some(&failure));
        assert_eq!(cache.get(CACHE_TITLE_KEY).as_deref(), Some("Add dark mode"));
        assert!(navigator.visited.borrow().is_empty());
        assert!(!composer.is_submit_disabled());
    }

    #[test]
    fn test_unstructured_failure_shows_fallback() {
        let cache = MemorySessionCache::new();
        let navigator = RecordingNavigator::default();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        composer.change_title("Add dark mode".to_string(), &cache);

        composer.begin_submit();
        composer.finish_submit(
            Err(ActionError::Transport("HTTP 502".to_string())),
            &cache,
            &navigator,
        );

        let error = composer.error().expect("fallback failure");
        assert_eq!(
            error.general_messages().collect::<Vec<_>>(),
            vec![FALLBACK_FAILURE_MESSAGE]
        );
        assert_eq!(composer.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_empty_failure_body_shows_fallback() {
        let cache = MemorySessionCache::new();
        let navigator = RecordingNavigator::default();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        composer.change_title("Add dark mode".to_string(), &cache);

        composer.begin_submit();
        composer.finish_submit(
            Err(ActionError::Failure(Failure::default())),
            &cache,
            &navigator,
        );

        assert_eq!(composer.error(), Some(&Failure::general(FALLBACK_FAILURE_MESSAGE)));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_in_flight_submission_blocks_resubmit() {
        let cache = MemorySessionCache::new();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        composer.change_title("Add dark mode".to_string(), &cache);

        assert!(composer.begin_submit().is_some());
        assert_eq!(composer.begin_submit(), None);
    }

    #[test]
    fn test_new_submission_clears_previous_error() {
        let cache = MemorySessionCache::new();
        let navigator = RecordingNavigator::default();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        composer.change_title("x".to_string(), &cache);

        composer.begin_submit();
        composer.finish_submit(
            Err(ActionError::Failure(Failure::for_field("title", "too_short"))),
            &cache,
            &navigator,
        );
        assert!(composer.error().is_some());

        composer.begin_submit();
        assert_eq!(composer.error(), None);
    }

    #[test]
    fn test_attachments_are_replaced_wholesale() {
        let cache = MemorySessionCache::new();
        let mut composer = DraftComposer::restore(signed_in(), board_tags(), &cache);
        composer.change_title("t".to_string(), &cache);
        composer.attachments_changed(vec![ImageUpload::new_upload("a.png", "image/png", "AA")]);
        composer.attachments_changed(vec![ImageUpload::new_upload("b.png", "image/png", "BB")]);

        let request = composer.begin_submit().unwrap();
        assert_eq!(request.attachments.len(), 1);
        assert_eq!(request.attachments[0].file_name(), Some("b.png"));
    }
}
