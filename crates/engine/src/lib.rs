//! Taskwire Engine library.
//!
//! This crate contains all server-side code for the Taskwire item
//! service.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping domain operations
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP and WebSocket entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;

pub use app::App;
