//! Entity modules wrapping domain operations.

mod item;

pub use item::{ItemError, Items};
