use leptos::prelude::*;

use crate::shared::modal::Modal;

pub const SIGN_IN_PATH: &str = "/signin";

/// Prompt shown instead of letting anonymous visitors type
#[component]
pub fn SignInModal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <Modal title="Sign in to post" on_close=on_close>
                <p class="sign-in__text">
                    "You need to sign in before you can share your suggestion."
                </p>
                <a class="button button--primary sign-in__link" href=SIGN_IN_PATH>
                    "Sign in"
                </a>
            </Modal>
        </Show>
    }
}
