//! Recursive value packer
//!
//! Wire shapes produced:
//! - primitive: unchanged
//! - list: array, element order kept
//! - mapping: object with the original keys, or `{"_dict": {...}}` when any
//!   key is a reserved marker
//! - adapter object: `{"_type": constructor, "_args": [...]}`
//!
//! With reference tracking, values reached more than once additionally use
//! the `_id`/`_ref`/`_list`/`_val` markers (see [`crate::references`]).

use std::sync::Arc;

use serde_json::{Map, Number};

use telepath_core::markers::{self, ARGS, DICT, ID, LIST, REF, TYPE, VAL};
use telepath_core::{dict_entries, Media, ObjectRef, Packed, TelepathError, TelepathResult, Value};

use crate::references::ReferenceTable;
use crate::{AdapterRegistry, PackConfig};

/// Result of a single pack call
#[derive(Debug)]
pub struct PackOutput {
    /// Packed wire value
    pub packed: Packed,
    /// Media of every adapter applied
    pub media: Media,
    /// Number of `_id` markers emitted
    pub ids_assigned: u64,
}

/// One-shot packer over a registry
pub struct Packer<'a> {
    registry: &'a AdapterRegistry,
    config: &'a PackConfig,
    media: Media,
    references: Option<ReferenceTable>,
}

impl<'a> Packer<'a> {
    pub fn new(registry: &'a AdapterRegistry, config: &'a PackConfig) -> Self {
        Packer {
            registry,
            config,
            media: Media::new(),
            references: None,
        }
    }

    /// Pack a root value
    pub fn pack(mut self, value: &Value) -> TelepathResult<PackOutput> {
        if self.config.track_references {
            let references = ReferenceTable::scan(value, self.registry, self.config)?;
            tracing::trace!(repeated = references.repeated(), "references scanned");
            self.references = Some(references);
        }

        let packed = self.pack_value(value, 0)?;

        Ok(PackOutput {
            packed,
            media: self.media,
            ids_assigned: self.references.map_or(0, |r| r.ids_assigned()),
        })
    }

    fn pack_value(&mut self, value: &Value, depth: usize) -> TelepathResult<Packed> {
        self.config.check_depth(depth)?;

        let repeated = match (value.identity(), self.references.as_mut()) {
            (Some(key), Some(references)) if references.is_repeated(key) => {
                match references.assigned(key) {
                    Some(id) => return Ok(wrap(REF, id.into())),
                    None => Some(references.assign(key)),
                }
            }
            _ => None,
        };

        match repeated {
            Some(id) => self.pack_with_id(value, id, depth),
            None => self.pack_plain(value, depth),
        }
    }

    fn pack_plain(&mut self, value: &Value, depth: usize) -> TelepathResult<Packed> {
        match value {
            Value::Null => Ok(Packed::Null),
            Value::Bool(b) => Ok(Packed::Bool(*b)),
            Value::Int(i) => Ok(Packed::Number((*i).into())),
            Value::UInt(u) => Ok(Packed::Number((*u).into())),
            Value::Float(f) => Number::from_f64(*f)
                .map(Packed::Number)
                .ok_or(TelepathError::NonFiniteNumber(*f)),
            Value::String(s) => Ok(Packed::String(s.clone())),
            Value::List(items) => Ok(Packed::Array(self.pack_list(items, depth)?)),
            Value::Dict(entries) => {
                let (packed, escape) = self.pack_entries(entries, depth)?;
                if escape {
                    Ok(wrap(DICT, Packed::Object(packed)))
                } else {
                    Ok(Packed::Object(packed))
                }
            }
            Value::Object(obj) => Ok(Packed::Object(self.pack_object(obj, depth)?)),
            // Transparent unless tracked as repeated
            Value::Shared(inner) => self.pack_value(inner, depth),
        }
    }

    /// First occurrence of a repeated value
    fn pack_with_id(&mut self, value: &Value, id: u64, depth: usize) -> TelepathResult<Packed> {
        let mut packed = match value {
            Value::Object(obj) => self.pack_object(obj, depth)?,
            Value::Shared(inner) => match &**inner {
                Value::List(items) => {
                    let items = self.pack_list(items, depth)?;
                    single(LIST, Packed::Array(items))
                }
                Value::Dict(entries) => {
                    let (entries, _) = self.pack_entries(entries, depth)?;
                    single(DICT, Packed::Object(entries))
                }
                other => {
                    let val = self.pack_value(other, depth)?;
                    single(VAL, val)
                }
            },
            other => {
                let val = self.pack_plain(other, depth)?;
                single(VAL, val)
            }
        };

        packed.insert(ID.to_string(), id.into());
        Ok(Packed::Object(packed))
    }

    fn pack_list(&mut self, items: &[Value], depth: usize) -> TelepathResult<Vec<Packed>> {
        items
            .iter()
            .map(|item| self.pack_value(item, depth + 1))
            .collect()
    }

    /// Pack mapping values, reporting whether any key needs escaping
    ///
    /// Values overwritten by a repeated key are never packed, so they cannot
    /// claim an id that later references would point at.
    fn pack_entries(
        &mut self,
        entries: &[(String, Value)],
        depth: usize,
    ) -> TelepathResult<(Map<String, Packed>, bool)> {
        let mut packed = Map::new();
        let mut escape = false;

        for (key, value) in dict_entries(entries) {
            escape |= markers::is_reserved(key);
            let value = self.pack_value(value, depth + 1)?;
            packed.insert(key.to_string(), value);
        }

        Ok((packed, escape))
    }

    fn pack_object(&mut self, obj: &ObjectRef, depth: usize) -> TelepathResult<Map<String, Packed>> {
        let adapter = self.registry.lookup(obj)?;
        self.media.merge(&adapter.media());

        let cached = self
            .references
            .as_ref()
            .and_then(|r| r.cached_args(obj.identity()));
        let args: Arc<[Value]> = match cached {
            Some(args) => args,
            None => adapter.js_args(obj)?.into(),
        };

        tracing::trace!(
            constructor = adapter.js_constructor(),
            type_name = obj.type_name(),
            args = args.len(),
            "packing object"
        );

        let args = self.pack_list(&args, depth)?;

        let mut packed = Map::new();
        packed.insert(TYPE.to_string(), Packed::String(adapter.js_constructor().to_string()));
        packed.insert(ARGS.to_string(), Packed::Array(args));
        Ok(packed)
    }
}

fn single(key: &str, value: Packed) -> Map<String, Packed> {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    map
}

fn wrap(key: &str, value: Packed) -> Packed {
    Packed::Object(single(key, value))
}
