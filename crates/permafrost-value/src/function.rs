use crate::value::Value;
use std::fmt;
use std::rc::Rc;

/// A callable host value.
///
/// Functions are never frozen and never traversed; the handle exists so
/// graphs can carry callables (continuation registration, callbacks)
/// through a freeze untouched. Compares by identity.
#[derive(Clone)]
pub struct FunctionRef(Rc<FunctionCell>);

struct FunctionCell {
    name: String,
    body: Box<dyn Fn(&[Value]) -> Value>,
}

impl FunctionRef {
    pub fn new(name: impl Into<String>, body: impl Fn(&[Value]) -> Value + 'static) -> FunctionRef {
        FunctionRef(Rc::new(FunctionCell {
            name: name.into(),
            body: Box::new(body),
        }))
    }

    /// A callable that ignores its arguments and returns `Undefined`.
    pub fn noop(name: impl Into<String>) -> FunctionRef {
        FunctionRef::new(name, |_| Value::Undefined)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0.body)(args)
    }
}

impl PartialEq for FunctionRef {
    fn eq(&self, other: &FunctionRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FunctionRef {}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[function {}]", self.name())
    }
}
