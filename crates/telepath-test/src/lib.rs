//! Telepath Test Harness - Fixtures and packing validation
//!
//! This crate provides:
//! - Music domain fixtures (artists, albums, playlists) with adapters
//! - Tree nodes with mutable children for shared and cyclic graphs
//! - End-to-end packing scenarios
//! - Property tests over generated value trees

pub mod music;
pub mod tree;

#[cfg(test)]
mod properties;

pub use music::*;
pub use tree::*;
