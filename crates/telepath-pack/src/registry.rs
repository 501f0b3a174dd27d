//! Adapter registry
//!
//! Maps the exact runtime type of an object to the adapter that packs it.
//! Lookup never walks a type hierarchy. Registering a type again replaces
//! the earlier adapter.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use telepath_core::{ObjectRef, TelepathError, TelepathResult};

use crate::{Adapter, ObjectAdapter, TypedAdapter};

static GLOBAL_REGISTRY: Lazy<Arc<AdapterRegistry>> = Lazy::new(|| Arc::new(AdapterRegistry::new()));

/// A registered adapter and the type it is bound to
#[derive(Clone)]
pub struct Registration {
    pub type_name: &'static str,
    pub adapter: Arc<dyn Adapter>,
}

/// Type to adapter bindings
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: RwLock<HashMap<TypeId, Registration>>,
}

impl AdapterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        AdapterRegistry::default()
    }

    /// Process-wide default registry
    pub fn global() -> Arc<AdapterRegistry> {
        GLOBAL_REGISTRY.clone()
    }

    /// Bind a typed adapter to `T`
    pub fn register<T, A>(&self, adapter: A)
    where
        T: Any + Send + Sync,
        A: ObjectAdapter<T> + 'static,
    {
        self.register_adapter(
            TypeId::of::<T>(),
            std::any::type_name::<T>(),
            Arc::new(TypedAdapter::<T, A>::new(adapter)),
        );
    }

    /// Bind a type-erased adapter to a type id
    pub fn register_adapter(&self, type_id: TypeId, type_name: &'static str, adapter: Arc<dyn Adapter>) {
        let constructor = adapter.js_constructor().to_string();
        let previous = self
            .adapters
            .write()
            .insert(type_id, Registration { type_name, adapter });

        match previous {
            Some(old) => tracing::debug!(
                type_name,
                constructor = %constructor,
                replaced = old.adapter.js_constructor(),
                "adapter replaced"
            ),
            None => tracing::debug!(type_name, constructor = %constructor, "adapter registered"),
        }
    }

    /// Adapter for the exact type of `obj`
    pub fn lookup(&self, obj: &ObjectRef) -> TelepathResult<Arc<dyn Adapter>> {
        self.adapters
            .read()
            .get(&obj.type_id())
            .map(|r| r.adapter.clone())
            .ok_or(TelepathError::UnregisteredType {
                type_name: obj.type_name(),
            })
    }

    /// Adapter bound to `T`, if any
    pub fn lookup_type<T: Any>(&self) -> Option<Arc<dyn Adapter>> {
        self.adapters
            .read()
            .get(&TypeId::of::<T>())
            .map(|r| r.adapter.clone())
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.adapters.read().contains_key(&TypeId::of::<T>())
    }

    /// Names of all bound types, sorted
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.adapters.read().values().map(|r| r.type_name).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.adapters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.read().is_empty()
    }
}

/// Bind a typed adapter to `T` in the global registry
pub fn register<T, A>(adapter: A)
where
    T: Any + Send + Sync,
    A: ObjectAdapter<T> + 'static,
{
    GLOBAL_REGISTRY.register::<T, A>(adapter);
}
