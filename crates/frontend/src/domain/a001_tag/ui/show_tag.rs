use contracts::domain::a001_tag::Tag;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Colored tag label
#[component]
pub fn ShowTag(tag: Tag) -> impl IntoView {
    let dot_style = format!("background-color: {}", tag.css_color());
    let is_private = !tag.is_public;
    let title = if is_private {
        format!("{} (private)", tag.name)
    } else {
        tag.name.clone()
    };
    let name = tag.name;

    view! {
        <span class="tag" title=title>
            <span class="tag__dot" style=dot_style></span>
            {is_private.then(|| view! { <span class="tag__private">{icon("lock")}</span> })}
            <span class="tag__name">{name}</span>
        </span>
    }
}
