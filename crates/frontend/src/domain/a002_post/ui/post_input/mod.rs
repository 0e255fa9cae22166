//! Post composer
//!
//! MVVM split as in the other details forms:
//! - state.rs: draft state machine (pure, unit tested)
//! - model.rs: create-post API call
//! - view_model.rs: signals + commands wiring the state machine to the DOM
//! - view.rs: Leptos component

mod model;
pub mod state;
mod view;
mod view_model;

pub use state::{DraftComposer, SubmitPhase};
pub use view::PostInput;
pub use view_model::PostInputViewModel;

pub const TITLE_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_ROWS: u32 = 5;
pub const MAX_UPLOADS: usize = 3;
