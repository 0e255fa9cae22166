use crate::system::auth::AuthProvider;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <HomePage />
        </AuthProvider>
    }
}
