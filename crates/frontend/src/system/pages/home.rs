use contracts::domain::a001_tag::Tag;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_tag::api::fetch_tags;
use crate::domain::a002_post::ui::post_input::PostInput;
use crate::system::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth_state = use_auth();
    let tags = RwSignal::new(Vec::<Tag>::new());
    let (is_composing, set_is_composing) = signal(false);

    spawn_local(async move {
        match fetch_tags().await {
            Ok(loaded) => tags.set(loaded),
            Err(e) => log::error!("Failed to load tags: {}", e),
        }
    });

    let on_title_changed = Callback::new(move |title: String| set_is_composing.set(!title.is_empty()));

    view! {
        <div class="home-page">
            <div class="home-page__intro">
                <h1>"Share your ideas"</h1>
                <Show when=move || !is_composing.get()>
                    <p class="home-page__cta">
                        "We'd love to hear what you're thinking about. "
                        "What can we do better? This is the place for you to vote, discuss and share ideas."
                    </p>
                </Show>
            </div>
            // Composer is (re)mounted once the session is known so the
            // draft is restored with the right gate.
            {move || {
                let state = auth_state.get();
                state.loaded.then(|| view! {
                    <PostInput
                        placeholder="Enter your suggestion here..."
                        tags=tags
                        session=state.session_context()
                        on_title_changed=on_title_changed
                    />
                })
            }}
        </div>
    }
}
