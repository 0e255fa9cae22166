use contracts::shared::Failure;
use leptos::prelude::*;

/// Messages of the last failure bound to one form field
#[component]
pub fn FieldErrors(
    field: &'static str,
    #[prop(into)] failure: Signal<Option<Failure>>,
) -> impl IntoView {
    let messages = move || {
        failure.with(|f| {
            f.as_ref()
                .map(|f| f.field_messages(field).map(str::to_string).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        {move || {
            let messages = messages();
            (!messages.is_empty()).then(|| view! {
                <ul class="form__field-errors">
                    {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                </ul>
            })
        }}
    }
}

/// Form-level messages of the last failure
#[component]
pub fn FormErrorSummary(#[prop(into)] failure: Signal<Option<Failure>>) -> impl IntoView {
    let messages = move || {
        failure.with(|f| {
            f.as_ref()
                .map(|f| f.general_messages().map(str::to_string).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        {move || {
            let messages = messages();
            (!messages.is_empty()).then(|| view! {
                <div class="form__error-summary" role="alert">
                    {messages.into_iter().map(|m| view! { <p>{m}</p> }).collect_view()}
                </div>
            })
        }}
    }
}
