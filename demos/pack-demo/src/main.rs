//! Telepath Pack Demo
//!
//! Registers the music adapters in the global registry, packs a small
//! discography and prints the wire form and the collected media.
//!
//! Usage: `pack-demo [--track-references]`, log level via `RUST_LOG`.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use telepath_core::{ObjectRef, Value};
use telepath_pack::{AdapterRegistry, JsContext, PackConfig};
use telepath_test::{register_music, Album, Artist, Playlist};

fn discography() -> Value {
    let beyonce = ObjectRef::new(Artist::new("Beyoncé"));
    let jay_z = ObjectRef::new(Artist::new("Jay-Z"));
    let destinys_child = Arc::new(Value::list([
        Value::Object(beyonce.clone()),
        Value::object(Artist::new("Kelly Rowland")),
        Value::object(Artist::new("Michelle Williams")),
    ]));

    Value::dict([
        (
            "albums",
            Value::list([
                Value::object(Album::new("Dangerously in Love", vec![beyonce.clone()])),
                Value::object(Album::new("Everything Is Love", vec![beyonce, jay_z])),
                Value::object(Album::new("Survivor", destinys_child)),
            ]),
        ),
        (
            "playlist",
            Value::object(
                Playlist::new("Road trip")
                    .with_metadata("_type", "mixtape")
                    .with_metadata("mood", "upbeat"),
            ),
        ),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let track_references = std::env::args().any(|arg| arg == "--track-references");

    let registry = AdapterRegistry::global();
    register_music(&registry);
    tracing::info!(adapters = registry.len(), track_references, "registry ready");

    let config = PackConfig::default().with_reference_tracking(track_references);
    let mut ctx = JsContext::with_config(registry, config);

    let packed = ctx.pack(&discography())?;
    println!("{}", serde_json::to_string_pretty(&packed)?);
    println!();
    println!("{}", ctx.media());

    Ok(())
}
