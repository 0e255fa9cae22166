use contracts::domain::a001_tag::Tag;
use leptos::prelude::*;

use super::show_tag::ShowTag;
use crate::shared::icons::icon;

/// Check mark classes; an unassigned tag keeps the (invisible) mark so the
/// row does not shift when toggled.
pub fn indicator_class(assigned: bool) -> &'static str {
    if assigned {
        "tag-list-item__check"
    } else {
        "tag-list-item__check invisible"
    }
}

/// One selectable tag row
#[component]
pub fn TagListItem(
    tag: Tag,
    #[prop(into)] assigned: Signal<bool>,
    on_click: Callback<Tag>,
) -> impl IntoView {
    let clicked = tag.clone();

    view! {
        <div
            class="tag-list-item clickable"
            role="checkbox"
            aria-checked=move || assigned.get().to_string()
            on:click=move |_| on_click.run(clicked.clone())
        >
            <span class=move || indicator_class(assigned.get())>{icon("check")}</span>
            <ShowTag tag=tag />
        </div>
    }
}
