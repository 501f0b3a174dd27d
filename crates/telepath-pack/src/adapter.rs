//! Adapter contract
//!
//! An adapter decomposes one application type into a symbolic constructor
//! name and an ordered argument list. Arguments are returned unpacked; the
//! packer recurses into each of them.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use telepath_core::{Media, ObjectRef, TelepathError, TelepathResult, Value};

/// Type-erased adapter as stored in the registry
pub trait Adapter: Send + Sync {
    /// Client-side constructor name, emitted verbatim as `_type`
    fn js_constructor(&self) -> &str;

    /// Constructor arguments for `obj`
    fn js_args(&self, obj: &ObjectRef) -> TelepathResult<Vec<Value>>;

    /// Client resources needed to rebuild objects packed by this adapter
    fn media(&self) -> Media {
        Media::new()
    }
}

/// Adapter for a concrete type `T`
///
/// Register with [`AdapterRegistry::register`](crate::AdapterRegistry::register),
/// which wraps it in a [`TypedAdapter`].
pub trait ObjectAdapter<T>: Send + Sync {
    fn js_constructor(&self) -> &str;

    fn js_args(&self, obj: &T) -> TelepathResult<Vec<Value>>;

    fn media(&self) -> Media {
        Media::new()
    }
}

/// Bridges an [`ObjectAdapter<T>`] to the type-erased [`Adapter`]
pub struct TypedAdapter<T, A> {
    inner: A,
    _type: PhantomData<fn(&T)>,
}

impl<T, A> TypedAdapter<T, A> {
    pub fn new(inner: A) -> Self {
        TypedAdapter {
            inner,
            _type: PhantomData,
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<T, A> Adapter for TypedAdapter<T, A>
where
    T: Any + Send + Sync,
    A: ObjectAdapter<T>,
{
    fn js_constructor(&self) -> &str {
        self.inner.js_constructor()
    }

    fn js_args(&self, obj: &ObjectRef) -> TelepathResult<Vec<Value>> {
        let typed = obj
            .downcast_ref::<T>()
            .ok_or_else(|| TelepathError::AdapterContract {
                constructor: self.inner.js_constructor().to_string(),
                type_name: obj.type_name(),
                reason: format!("adapter expects {}", std::any::type_name::<T>()),
            })?;
        self.inner.js_args(typed)
    }

    fn media(&self) -> Media {
        self.inner.media()
    }
}

impl<T, A> fmt::Debug for TypedAdapter<T, A>
where
    T: Any + Send + Sync,
    A: ObjectAdapter<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedAdapter")
            .field("type", &std::any::type_name::<T>())
            .field("constructor", &self.inner.js_constructor())
            .finish()
    }
}
