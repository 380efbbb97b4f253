extern crate self as taskwire_domain;

pub mod entities;
pub mod error;
pub mod events;
pub mod ids;

pub use entities::Item;
pub use error::DomainError;
pub use events::ItemEvent;
pub use ids::{ConnectionId, ItemId};
