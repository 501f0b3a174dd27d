//! Packing configuration

use telepath_core::{TelepathError, TelepathResult};

/// Default limit on nesting depth
///
/// Chosen so a full-depth pack fits in a 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Packing configuration
#[derive(Clone, Debug)]
pub struct PackConfig {
    /// Maximum nesting depth of lists, mappings and object arguments.
    /// `None` disables the guard.
    pub max_depth: Option<usize>,
    /// Emit `_id`/`_ref` markers for objects and shared values seen more than once
    pub track_references: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        PackConfig {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            track_references: false,
        }
    }
}

impl PackConfig {
    pub fn new() -> Self {
        PackConfig::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn with_reference_tracking(mut self, enabled: bool) -> Self {
        self.track_references = enabled;
        self
    }

    /// Check a nesting depth against the configured limit
    pub(crate) fn check_depth(&self, depth: usize) -> TelepathResult<()> {
        match self.max_depth {
            Some(limit) if depth > limit => Err(TelepathError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}
