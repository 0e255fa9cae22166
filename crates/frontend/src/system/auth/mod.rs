pub mod api;
pub mod context;
pub mod sign_in_modal;
pub mod storage;

pub use context::{use_auth, AuthProvider, AuthState, SessionContext};
pub use sign_in_modal::SignInModal;
