//! Input values accepted by the packer
//!
//! A `Value` is either a JSON-like primitive, an ordered list, an ordered
//! mapping, an application object dispatched to an adapter by its concrete
//! type, or a shared value whose identity matters to reference tracking.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Handle to an application object
///
/// Clones share the same instance; identity is the address of the shared
/// allocation.
#[derive(Clone)]
pub struct ObjectRef {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ObjectRef {
    /// Wrap an owned object in a new shared instance
    pub fn new<T: Any + Send + Sync>(obj: T) -> Self {
        ObjectRef::from_arc(Arc::new(obj))
    }

    /// Wrap an already shared object
    pub fn from_arc<T: Any + Send + Sync>(obj: Arc<T>) -> Self {
        ObjectRef {
            inner: obj,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Dispatch key of the concrete type
    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Name of the concrete type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Address identifying this instance
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        self.identity() == other.identity()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({}@{:x})", self.type_name, self.identity())
    }
}

/// Packable input value
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integer beyond the signed range
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    /// Ordered mapping; insertion order is kept on the wire
    Dict(Vec<(String, Value)>),
    Object(ObjectRef),
    /// Value whose identity is tracked when reference tracking is enabled
    Shared(Arc<Value>),
}

impl Value {
    /// Wrap an application object as a new instance
    pub fn object<T: Any + Send + Sync>(obj: T) -> Self {
        Value::Object(ObjectRef::new(obj))
    }

    /// Build an ordered mapping
    pub fn dict<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a list
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Wrap a value so that repeated occurrences can be recognized
    pub fn shared(value: impl Into<Value>) -> Self {
        Value::Shared(Arc::new(value.into()))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::UInt(_)
                | Value::Float(_)
                | Value::String(_)
        )
    }

    /// Identity of objects and shared values; plain values have none
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Object(obj) => Some(obj.identity()),
            Value::Shared(shared) => Some(Arc::as_ptr(shared) as usize),
            _ => None,
        }
    }

    /// Short kind name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Object(_) => "object",
            Value::Shared(_) => "shared",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::UInt(v),
        }
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::from(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::list(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Value::Object(v)
    }
}

impl From<Arc<Value>> for Value {
    fn from(v: Arc<Value>) -> Self {
        Value::Shared(v)
    }
}

/// Entries of an ordered mapping as they go on the wire
///
/// Each key appears once, at its first position, holding its last value.
pub fn dict_entries(entries: &[(String, Value)]) -> Vec<(&str, &Value)> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
    let mut unique: Vec<(&str, &Value)> = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        match positions.get(key.as_str()) {
            Some(&pos) => unique[pos].1 = value,
            None => {
                positions.insert(key.as_str(), unique.len());
                unique.push((key.as_str(), value));
            }
        }
    }

    unique
}
