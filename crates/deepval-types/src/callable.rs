use std::fmt;
use std::sync::Arc;

use crate::value::Value;

type Function = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared, invokable function value.
///
/// Cloning a `Callable` never copies the function: every clone refers to the
/// same underlying closure, and [`ptr_eq`](Callable::ptr_eq) observes that.
#[derive(Clone)]
pub struct Callable(Arc<Function>);

impl Callable {
    /// Wrap a closure as a function value.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the function with the given arguments.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Returns `true` if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// Function values compare by identity.
impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}
