//! Telepath Pack - Adapter registry and recursive packing
//!
//! Packing turns a tree of [`Value`]s into a JSON-representable structure
//! the client runtime can rebuild into live objects:
//! 1. Primitives pass through
//! 2. Lists are packed element by element
//! 3. Mappings are packed value by value, escaped as `_dict` on marker collision
//! 4. Objects are dispatched by exact type to an [`Adapter`] and emitted as
//!    `{"_type": constructor, "_args": [...]}`, merging the adapter's media
//!    into the context
//!
//! [`Value`]: telepath_core::Value

pub mod adapter;
pub mod config;
pub mod context;
pub mod packer;
pub mod references;
pub mod registry;

pub use adapter::*;
pub use config::*;
pub use context::*;
pub use registry::*;

pub use telepath_core::{markers, Media, ObjectRef, Packed, TelepathError, TelepathResult, Value};
