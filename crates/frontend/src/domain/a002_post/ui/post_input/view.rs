use super::view_model::PostInputViewModel;
use super::{DESCRIPTION_ROWS, MAX_UPLOADS, TITLE_MAX_LENGTH};
use contracts::domain::a001_tag::Tag;
use contracts::domain::a002_post::ImageUpload;
use leptos::prelude::*;

use crate::domain::a001_tag::ui::TagListItem;
use crate::shared::components::image_uploader::ImageUploader;
use crate::shared::components::ui::{Button, FieldErrors, FormErrorSummary};
use crate::system::auth::{SessionContext, SignInModal};

/// Composer for new suggestions on the home page
#[component]
pub fn PostInput(
    /// Title placeholder
    #[prop(into)]
    placeholder: String,
    /// Tags the board offers
    #[prop(into)]
    tags: Signal<Vec<Tag>>,
    /// Visitor session, fixed for the lifetime of the widget
    session: SessionContext,
    /// Called with the current title on mount and after every keystroke
    on_title_changed: Callback<String>,
) -> impl IntoView {
    let vm = PostInputViewModel::new(session, tags.get_untracked(), on_title_changed);
    let title_ref = NodeRef::<leptos::html::Input>::new();
    let error = vm.error();
    let submit_disabled = vm.is_submit_disabled();

    // Tags may arrive after the composer is mounted
    Effect::new(move |_| {
        let tags = tags.get();
        vm.sync_tags(tags);
    });

    let on_toggle = Callback::new(move |tag: Tag| vm.toggle_tag_command(tag));
    let on_attachments = Callback::new(move |list: Vec<ImageUpload>| vm.attachments_changed_command(list));

    let details = move || {
        view! {
            <div class="form__group">
                <textarea
                    id="input-description"
                    class="form__textarea"
                    rows=DESCRIPTION_ROWS
                    placeholder="Describe your suggestion (optional)"
                    prop:value=move || vm.state.with(|s| s.description().to_string())
                    on:input=move |ev| vm.description_change_command(event_target_value(&ev))
                />
                <FieldErrors field="description" failure=error />
            </div>

            <div class="form__group">
                <ImageUploader
                    max_uploads=MAX_UPLOADS
                    initial={vm.state.with_untracked(|s| s.draft().attachments.clone())}
                    on_change=on_attachments
                />
                <FieldErrors field="attachments" failure=error />
            </div>

            <div class="post-input__tags">
                <span class="text-category">"Select all that apply"</span>
                <div class="hstack flex-wrap">
                    <For
                        each=move || vm.state.with(|s| s.available_tags().to_vec())
                        key=|tag| tag.id
                        children=move |tag: Tag| {
                            let assigned = vm.is_tag_chosen(&tag);
                            view! { <TagListItem tag=tag assigned=assigned on_click=on_toggle /> }
                        }
                    />
                </div>
            </div>

            <Button
                button_type="submit"
                variant="primary"
                class="post-input__submit"
                disabled=submit_disabled
                on_click=Callback::new(move |_| vm.submit_command())
            >
                {move || if submit_disabled.get() { "Submitting..." } else { "Submit" }}
            </Button>
        }
    };

    view! {
        <SignInModal
            is_open=vm.is_sign_in_open()
            on_close=Callback::new(move |_| vm.hide_sign_in_command())
        />
        <form class="post-input" on:submit=|ev| ev.prevent_default()>
            <FormErrorSummary failure=error />
            <div class="form__group">
                <input
                    node_ref=title_ref
                    type="text"
                    id="input-title"
                    class="form__input post-input__title"
                    maxlength={TITLE_MAX_LENGTH.to_string()}
                    placeholder=placeholder
                    disabled={session.is_read_only}
                    tabindex={if session.is_authenticated { "0" } else { "-1" }}
                    prop:value=move || vm.state.with(|s| s.title().to_string())
                    on:focus=move |_| {
                        if vm.title_focus_command() {
                            if let Some(input) = title_ref.get_untracked() {
                                let _ = input.blur();
                            }
                        }
                    }
                    on:input=move |ev| vm.title_change_command(event_target_value(&ev))
                />
                <FieldErrors field="title" failure=error />
            </div>
            <Show when=move || vm.state.with(|s| s.shows_details())>
                {details()}
            </Show>
        </form>
    }
}
