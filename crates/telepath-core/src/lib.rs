//! Telepath Core - Fundamental types for the client/server object bridge
//!
//! This crate defines the types shared by every packing component:
//! - Input values (primitives, lists, mappings, adapter-managed objects)
//! - Reserved wire marker keys
//! - Media (client-side resource dependencies)
//! - Error taxonomy

pub mod error;
pub mod markers;
pub mod media;
pub mod value;

pub use error::*;
pub use media::*;
pub use value::*;

/// Packed wire value, ready to be handed to a JSON encoder
pub type Packed = serde_json::Value;
