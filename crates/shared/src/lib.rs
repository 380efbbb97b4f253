//! Taskwire Shared - Wire types for Engine and client communication
//!
//! This crate contains all types that cross the process boundary:
//! - Wire-format DTOs (REST + WebSocket)
//! - WebSocket event envelope (`ServerMessage`)
//! - REST request bodies
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, uuid, and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` in DTOs; domain-to-wire
//!    conversions are handled engine-side

pub mod dto;
pub mod messages;
pub mod requests;

pub use dto::ItemDto;
pub use messages::ServerMessage;
pub use requests::CreateItem;
