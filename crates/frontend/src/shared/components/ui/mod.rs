pub mod button;
pub mod form_errors;

pub use button::Button;
pub use form_errors::{FieldErrors, FormErrorSummary};
