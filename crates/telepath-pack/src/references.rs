//! Shared reference tracking
//!
//! Optional extension enabled by `PackConfig::track_references`. A scan pass
//! counts how often each object or shared value is reached; the emit pass
//! then gives ids only to values reached more than once:
//! - first occurrence carries `"_id": n`
//! - later occurrences become `{"_ref": n}`
//!
//! Ids count up from 0 in the order first occurrences are emitted. A value
//! reached a second time is not entered again, so cyclic object graphs
//! terminate.

use std::collections::HashMap;
use std::sync::Arc;

use telepath_core::{dict_entries, TelepathResult, Value};

use crate::{AdapterRegistry, PackConfig};

/// Occurrence counts, cached adapter arguments and assigned ids for one pack call
#[derive(Debug, Default)]
pub struct ReferenceTable {
    counts: HashMap<usize, usize>,
    args: HashMap<usize, Arc<[Value]>>,
    ids: HashMap<usize, u64>,
    next_id: u64,
}

impl ReferenceTable {
    /// Scan a value tree, counting identities
    ///
    /// Adapter arguments are computed here once and reused when emitting, so
    /// values created by an adapter keep their identity across both passes.
    pub fn scan(value: &Value, registry: &AdapterRegistry, config: &PackConfig) -> TelepathResult<Self> {
        let mut table = ReferenceTable::default();
        table.visit(value, registry, config, 0)?;
        Ok(table)
    }

    fn visit(
        &mut self,
        value: &Value,
        registry: &AdapterRegistry,
        config: &PackConfig,
        depth: usize,
    ) -> TelepathResult<()> {
        config.check_depth(depth)?;

        match value {
            Value::Object(obj) => {
                let key = obj.identity();
                if self.count(key) > 1 {
                    return Ok(());
                }
                let adapter = registry.lookup(obj)?;
                let args: Arc<[Value]> = adapter.js_args(obj)?.into();
                self.args.insert(key, args.clone());
                for arg in args.iter() {
                    self.visit(arg, registry, config, depth + 1)?;
                }
            }
            Value::Shared(inner) => {
                if self.count(Arc::as_ptr(inner) as usize) > 1 {
                    return Ok(());
                }
                self.visit(inner, registry, config, depth)?;
            }
            Value::List(items) => {
                for item in items {
                    self.visit(item, registry, config, depth + 1)?;
                }
            }
            Value::Dict(entries) => {
                // Overwritten values never reach the wire
                for (_, item) in dict_entries(entries) {
                    self.visit(item, registry, config, depth + 1)?;
                }
            }
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::UInt(_)
            | Value::Float(_)
            | Value::String(_) => {}
        }

        Ok(())
    }

    fn count(&mut self, key: usize) -> usize {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    /// Whether the identity was reached more than once
    pub fn is_repeated(&self, key: usize) -> bool {
        self.counts.get(&key).is_some_and(|&c| c > 1)
    }

    /// Adapter arguments computed during the scan
    pub fn cached_args(&self, key: usize) -> Option<Arc<[Value]>> {
        self.args.get(&key).cloned()
    }

    /// Id already given to an identity
    pub fn assigned(&self, key: usize) -> Option<u64> {
        self.ids.get(&key).copied()
    }

    /// Give the next id to an identity
    pub fn assign(&mut self, key: usize) -> u64 {
        let id = self.next_id;
        self.ids.insert(key, id);
        self.next_id += 1;
        id
    }

    /// Number of identities reached more than once
    pub fn repeated(&self) -> usize {
        self.counts.values().filter(|&&c| c > 1).count()
    }

    /// Number of ids handed out so far
    pub fn ids_assigned(&self) -> u64 {
        self.next_id
    }
}
