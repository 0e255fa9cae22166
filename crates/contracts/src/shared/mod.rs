pub mod failure;

pub use failure::{ActionError, ActionResult, Failure, FailureError};
