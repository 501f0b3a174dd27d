//! Packing context
//!
//! A context packs values against one registry and accumulates the media of
//! every adapter it applies. Reuse a context across several `pack` calls to
//! collect the media of a whole response.

use std::sync::Arc;

use telepath_core::{Media, Packed, TelepathResult, Value};

use crate::packer::Packer;
use crate::{AdapterRegistry, PackConfig};

/// Packing context
pub struct JsContext {
    registry: Arc<AdapterRegistry>,
    config: PackConfig,
    media: Media,
}

impl JsContext {
    /// Context over the global registry with default configuration
    pub fn new() -> Self {
        JsContext::with_registry(AdapterRegistry::global())
    }

    pub fn with_registry(registry: Arc<AdapterRegistry>) -> Self {
        JsContext::with_config(registry, PackConfig::default())
    }

    pub fn with_config(registry: Arc<AdapterRegistry>, config: PackConfig) -> Self {
        JsContext {
            registry,
            config,
            media: Media::new(),
        }
    }

    /// Pack a value into its wire form
    ///
    /// Media is merged into the context only when the whole call succeeds.
    pub fn pack(&mut self, value: &Value) -> TelepathResult<Packed> {
        let output = match Packer::new(&self.registry, &self.config).pack(value) {
            Ok(output) => output,
            Err(err) => {
                if err.is_programming_error() {
                    tracing::warn!(error = %err, kind = value.kind(), "adapter registry misconfigured");
                }
                return Err(err);
            }
        };
        self.media.merge(&output.media);

        tracing::debug!(
            kind = value.kind(),
            media = output.media.len(),
            ids = output.ids_assigned,
            "value packed"
        );

        Ok(output.packed)
    }

    /// Pack a value and encode it as a JSON string
    pub fn pack_json(&mut self, value: &Value) -> TelepathResult<String> {
        let packed = self.pack(value)?;
        Ok(serde_json::to_string(&packed)?)
    }

    /// Media accumulated over every successful `pack` call
    pub fn media(&self) -> &Media {
        &self.media
    }

    /// Merge additional media, e.g. for client code that is not adapter-driven
    pub fn add_media(&mut self, media: &Media) {
        self.media.merge(media);
    }

    pub fn registry(&self) -> &Arc<AdapterRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }
}

impl Default for JsContext {
    fn default() -> Self {
        JsContext::new()
    }
}
