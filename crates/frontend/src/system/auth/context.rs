use contracts::system::auth::SessionInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Read-only view of the visitor session handed to widgets at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionContext {
    pub is_authenticated: bool,
    pub is_read_only: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Session request has resolved (successfully or not)
    pub loaded: bool,
    pub access_token: Option<String>,
    pub session: SessionInfo,
}

impl AuthState {
    /// Combine the stored token with the server's answer
    fn settle(access_token: Option<String>, result: Result<SessionInfo, String>) -> Self {
        match result {
            Ok(session) => Self {
                loaded: true,
                access_token: access_token.filter(|_| session.user.is_some()),
                session,
            },
            Err(e) => {
                log::error!("Failed to load session: {}", e);
                Self {
                    loaded: true,
                    ..Self::default()
                }
            }
        }
    }

    pub fn session_context(&self) -> SessionContext {
        SessionContext {
            is_authenticated: self.access_token.is_some() && self.session.user.is_some(),
            is_read_only: self.session.is_read_only,
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::default());

    spawn_local(async move {
        let token = storage::get_access_token();
        let result = api::fetch_session(token.as_deref()).await;

        // Token was rejected
        if token.is_some() && matches!(&result, Ok(session) if session.user.is_none()) {
            storage::clear_access_token();
        }

        let state = AuthState::settle(token, result);

        leptos::logging::log!(
            "session loaded: authenticated={}",
            state.session_context().is_authenticated
        );
        auth_state.set(state);
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}
