use super::model;
use super::state::DraftComposer;
use contracts::domain::a001_tag::Tag;
use contracts::domain::a002_post::ImageUpload;
use contracts::shared::Failure;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::shared::cache::{session_cache, SessionCache};
use crate::shared::navigation::{BrowserNavigator, Navigator};
use crate::system::auth::SessionContext;

/// ViewModel for the post composer
#[derive(Clone, Copy)]
pub struct PostInputViewModel {
    pub state: RwSignal<DraftComposer>,
    cache: StoredValue<Rc<dyn SessionCache>, LocalStorage>,
    navigator: StoredValue<Rc<dyn Navigator>, LocalStorage>,
    on_title_changed: Callback<String>,
}

impl PostInputViewModel {
    pub fn new(session: SessionContext, tags: Vec<Tag>, on_title_changed: Callback<String>) -> Self {
        Self::with_services(
            session,
            tags,
            on_title_changed,
            session_cache(),
            Rc::new(BrowserNavigator),
        )
    }

    pub fn with_services(
        session: SessionContext,
        tags: Vec<Tag>,
        on_title_changed: Callback<String>,
        cache: Rc<dyn SessionCache>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let composer = DraftComposer::restore(session, tags, cache.as_ref());
        let restored_title = composer.title().to_string();

        let vm = Self {
            state: RwSignal::new(composer),
            cache: StoredValue::new_local(cache),
            navigator: StoredValue::new_local(navigator),
            on_title_changed,
        };

        // Parent reacts to a restored draft the same way as to typing
        on_title_changed.run(restored_title);
        vm
    }

    pub fn error(&self) -> Signal<Option<Failure>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().cloned()))
    }

    pub fn is_sign_in_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_sign_in_open()))
    }

    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_submit_disabled()))
    }

    pub fn is_tag_chosen(&self, tag: &Tag) -> Signal<bool> {
        let state = self.state;
        let id = tag.id;
        Signal::derive(move || state.with(|s| s.is_tag_chosen(id)))
    }

    /// Returns `true` when the title input has to give up focus
    pub fn title_focus_command(&self) -> bool {
        self.state
            .try_update(|s| s.title_focused())
            .unwrap_or(false)
    }

    pub fn title_change_command(&self, value: String) {
        let cache = self.cache.get_value();
        self.state
            .update(|s| s.change_title(value.clone(), cache.as_ref()));
        self.on_title_changed.run(value);
    }

    pub fn description_change_command(&self, value: String) {
        let cache = self.cache.get_value();
        self.state
            .update(|s| s.change_description(value, cache.as_ref()));
    }

    pub fn toggle_tag_command(&self, tag: Tag) {
        self.state.update(|s| s.toggle_tag(&tag));
    }

    pub fn attachments_changed_command(&self, attachments: Vec<ImageUpload>) {
        self.state.update(|s| s.attachments_changed(attachments));
    }

    pub fn sync_tags(&self, tags: Vec<Tag>) {
        self.state.update(|s| s.set_available_tags(tags));
    }

    pub fn hide_sign_in_command(&self) {
        self.state.update(|s| s.hide_sign_in());
    }

    /// Submit the draft; ignored while the title is empty or a submission is pending
    pub fn submit_command(&self) {
        let Some(request) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let state = self.state;
        let cache = self.cache.get_value();
        let navigator = self.navigator.get_value();

        leptos::logging::log!(
            "submitting post: {} tag(s), {} attachment(s)",
            request.tags.len(),
            request.attachments.len()
        );

        spawn_local(async move {
            let result = model::create_post(&request).await;
            state.update(|s| s.finish_submit(result, cache.as_ref(), navigator.as_ref()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_post::ui::post_input::state::{CACHE_DESCRIPTION_KEY, CACHE_TITLE_KEY};
    use crate::shared::cache::MemorySessionCache;
    use std::cell::RefCell;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    struct Fixture {
        vm: PostInputViewModel,
        cache: Rc<MemorySessionCache>,
        navigator: Rc<RecordingNavigator>,
        titles: Arc<Mutex<Vec<String>>>,
    }

    fn fixture(cache: MemorySessionCache, tags: Vec<Tag>) -> Fixture {
        let cache = Rc::new(cache);
        let navigator = Rc::new(RecordingNavigator::default());
        let titles = Arc::new(Mutex::new(Vec::new()));
        let recorded = titles.clone();
        let on_title_changed = Callback::new(move |title: String| {
            recorded.lock().unwrap().push(title);
        });

        let vm = PostInputViewModel::with_services(
            SessionContext {
                is_authenticated: true,
                is_read_only: false,
            },
            tags,
            on_title_changed,
            cache.clone(),
            navigator.clone(),
        );

        Fixture {
            vm,
            cache,
            navigator,
            titles,
        }
    }

    fn board_tags() -> Vec<Tag> {
        vec![
            Tag::new(1, "Bug", "bug", "E74C3C"),
            Tag::new(2, "UI", "ui", "1ABC9C"),
        ]
    }

    #[test]
    fn test_restored_title_is_reported_once_on_construction() {
        let owner = Owner::new();
        owner.set();

        let cache = MemorySessionCache::new();
        cache.set(CACHE_TITLE_KEY, "Dark mode");
        let f = fixture(cache, board_tags());

        assert_eq!(*f.titles.lock().unwrap(), vec!["Dark mode".to_string()]);
        assert_eq!(f.vm.state.with_untracked(|s| s.title().to_string()), "Dark mode");
    }

    #[test]
    fn test_typed_titles_reach_parent_and_cache() {
        let owner = Owner::new();
        owner.set();

        let f = fixture(MemorySessionCache::new(), board_tags());
        for value in ["A", "Ad", "Add dark mode"] {
            f.vm.title_change_command(value.to_string());
            assert_eq!(f.cache.get(CACHE_TITLE_KEY).as_deref(), Some(value));
        }
        f.vm.description_change_command("details".to_string());

        assert_eq!(
            *f.titles.lock().unwrap(),
            vec![
                String::new(),
                "A".to_string(),
                "Ad".to_string(),
                "Add dark mode".to_string()
            ]
        );
        assert_eq!(f.cache.get(CACHE_DESCRIPTION_KEY).as_deref(), Some("details"));
        assert!(f.navigator.visited.borrow().is_empty());
    }

    #[test]
    fn test_sync_tags_prunes_selection() {
        let owner = Owner::new();
        owner.set();

        let tags = board_tags();
        let f = fixture(MemorySessionCache::new(), tags.clone());
        f.vm.toggle_tag_command(tags[0].clone());
        f.vm.toggle_tag_command(tags[1].clone());

        f.vm.sync_tags(vec![tags[1].clone()]);

        assert!(!f.vm.state.with_untracked(|s| s.is_tag_chosen(tags[0].id)));
        assert!(f.vm.state.with_untracked(|s| s.is_tag_chosen(tags[1].id)));
        assert!(f.vm.is_tag_chosen(&tags[1]).get_untracked());
    }

    #[test]
    fn test_focus_gate_and_sign_in_close() {
        let owner = Owner::new();
        owner.set();

        let vm = PostInputViewModel::with_services(
            SessionContext::default(),
            board_tags(),
            Callback::new(|_: String| {}),
            Rc::new(MemorySessionCache::new()),
            Rc::new(RecordingNavigator::default()),
        );

        assert!(vm.title_focus_command());
        assert!(vm.is_sign_in_open().get_untracked());
        vm.hide_sign_in_command();
        assert!(!vm.is_sign_in_open().get_untracked());
    }
}
