pub mod aggregate;

pub use aggregate::{Tag, TagId};
