//! Fuzzing inputs for Telepath packing
//!
//! `FuzzValue` is an `arbitrary`-derived mirror of `Value` whose objects are
//! either registered gadgets, unregistered strangers, or back-references to
//! earlier gadgets, so generated trees exercise dispatch errors and shared
//! identities.

use std::sync::Arc;

use arbitrary::Arbitrary;

use telepath_core::{ObjectRef, TelepathResult, Value};
use telepath_pack::{AdapterRegistry, JsContext, ObjectAdapter, PackConfig};

/// Object with a registered adapter
#[derive(Debug)]
pub struct Gadget {
    pub args: Vec<Value>,
}

/// Object without an adapter
#[derive(Debug)]
pub struct Stranger;

pub struct GadgetAdapter;

impl ObjectAdapter<Gadget> for GadgetAdapter {
    fn js_constructor(&self) -> &str {
        "fuzz.Gadget"
    }

    fn js_args(&self, obj: &Gadget) -> TelepathResult<Vec<Value>> {
        Ok(obj.args.clone())
    }
}

#[derive(Arbitrary, Debug)]
pub enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<FuzzValue>),
    Dict(Vec<(String, FuzzValue)>),
    Gadget(Vec<FuzzValue>),
    Stranger,
    /// Reuse an earlier gadget, by index modulo the gadgets built so far
    Reuse(u8),
    Shared(Box<FuzzValue>),
}

/// Fuzz case: a value tree and the packing options to use
#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    pub value: FuzzValue,
    pub track_references: bool,
    pub max_depth: u8,
}

impl FuzzCase {
    /// Pack the case; errors are expected, panics are not
    pub fn run(&self) -> TelepathResult<String> {
        let registry = AdapterRegistry::new();
        registry.register::<Gadget, _>(GadgetAdapter);

        let config = PackConfig::default()
            .with_max_depth(usize::from(self.max_depth))
            .with_reference_tracking(self.track_references);

        let mut gadgets = Vec::new();
        let value = self.value.build(&mut gadgets);
        JsContext::with_config(Arc::new(registry), config).pack_json(&value)
    }
}

impl FuzzValue {
    /// Convert to a `Value`, collecting built gadgets for later reuse
    pub fn build(&self, gadgets: &mut Vec<ObjectRef>) -> Value {
        match self {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Bool(*b),
            FuzzValue::Int(i) => Value::Int(*i),
            FuzzValue::UInt(u) => Value::from(*u),
            FuzzValue::Float(f) => Value::Float(*f),
            FuzzValue::String(s) => Value::String(s.clone()),
            FuzzValue::List(items) => Value::List(items.iter().map(|i| i.build(gadgets)).collect()),
            FuzzValue::Dict(entries) => Value::Dict(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.build(gadgets)))
                    .collect(),
            ),
            FuzzValue::Gadget(args) => {
                let args = args.iter().map(|a| a.build(gadgets)).collect();
                let gadget = ObjectRef::new(Gadget { args });
                gadgets.push(gadget.clone());
                Value::Object(gadget)
            }
            FuzzValue::Stranger => Value::object(Stranger),
            FuzzValue::Reuse(index) => match gadgets.len() {
                0 => Value::Null,
                len => Value::Object(gadgets[usize::from(*index) % len].clone()),
            },
            FuzzValue::Shared(inner) => Value::shared(inner.build(gadgets)),
        }
    }
}
