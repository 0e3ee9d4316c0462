use crate::error::MutationError;
use crate::value::{PropertyKey, Value};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Attributes attached to a single own property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyAttrs {
    pub enumerable: bool,
    pub writable: bool,
    pub configurable: bool,
}

impl PropertyAttrs {
    /// Fully open: enumerable, writable, configurable.
    pub fn open() -> PropertyAttrs {
        PropertyAttrs {
            enumerable: true,
            writable: true,
            configurable: true,
        }
    }

    /// Writable and configurable, but invisible to enumeration.
    pub fn hidden() -> PropertyAttrs {
        PropertyAttrs {
            enumerable: false,
            writable: true,
            configurable: true,
        }
    }
}

impl Default for PropertyAttrs {
    fn default() -> PropertyAttrs {
        PropertyAttrs::open()
    }
}

/// One own property: key, current value, and attributes.
#[derive(Clone, Debug)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Value,
    pub attrs: PropertyAttrs,
}

/// Shared handle to a composite object.
///
/// Cloning the handle aliases the same object. Properties keep insertion
/// order; that order is the enumeration order seen by traversals. Lock state
/// lives in interior-mutability cells and is re-checked on every write.
#[derive(Clone)]
pub struct ObjectRef(Rc<ObjectCell>);

struct ObjectCell {
    props: RefCell<Vec<Property>>,
    extensible: Cell<bool>,
}

impl ObjectRef {
    pub fn new() -> ObjectRef {
        ObjectRef(Rc::new(ObjectCell {
            props: RefCell::new(Vec::new()),
            extensible: Cell::new(true),
        }))
    }

    /// A plain composite from key/value entries, all attributes open.
    /// Entries are expected to carry distinct keys.
    pub fn with_entries<K, I>(entries: I) -> ObjectRef
    where
        K: Into<PropertyKey>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let obj = ObjectRef::new();
        {
            let mut props = obj.0.props.borrow_mut();
            for (key, value) in entries {
                props.push(Property {
                    key: key.into(),
                    value,
                    attrs: PropertyAttrs::open(),
                });
            }
        }
        obj
    }

    /// An ordered-sequence composite: numeric index keys plus a `length`
    /// bookkeeping property, all ordinary enumerable own properties.
    pub fn array<I>(items: I) -> ObjectRef
    where
        I: IntoIterator<Item = Value>,
    {
        let obj = ObjectRef::new();
        let mut len: i64 = 0;
        {
            let mut props = obj.0.props.borrow_mut();
            for (index, value) in items.into_iter().enumerate() {
                props.push(Property {
                    key: PropertyKey::from(index.to_string()),
                    value,
                    attrs: PropertyAttrs::open(),
                });
                len = index as i64 + 1;
            }
            props.push(Property {
                key: PropertyKey::from("length"),
                value: Value::Int(len),
                attrs: PropertyAttrs::open(),
            });
        }
        obj
    }

    pub fn get(&self, key: &PropertyKey) -> Option<Value> {
        self.0
            .props
            .borrow()
            .iter()
            .find(|p| p.key == *key)
            .map(|p| p.value.clone())
    }

    pub fn get_str(&self, name: &str) -> Option<Value> {
        self.0
            .props
            .borrow()
            .iter()
            .find(|p| p.key.as_str() == Some(name))
            .map(|p| p.value.clone())
    }

    pub fn has(&self, key: &PropertyKey) -> bool {
        self.0.props.borrow().iter().any(|p| p.key == *key)
    }

    /// Reassign an existing property, or add a new one with open attributes.
    pub fn set(&self, key: PropertyKey, value: Value) -> Result<(), MutationError> {
        let mut props = self.0.props.borrow_mut();
        if let Some(prop) = props.iter_mut().find(|p| p.key == key) {
            if !prop.attrs.writable {
                return Err(MutationError::NotWritable {
                    key: key.to_string(),
                });
            }
            prop.value = value;
            return Ok(());
        }
        if !self.0.extensible.get() {
            return Err(MutationError::NotExtensible {
                key: key.to_string(),
            });
        }
        props.push(Property {
            key,
            value,
            attrs: PropertyAttrs::open(),
        });
        Ok(())
    }

    pub fn set_str(&self, name: &str, value: Value) -> Result<(), MutationError> {
        self.set(PropertyKey::from(name), value)
    }

    /// Add or replace a property with explicit attributes. Replacing an
    /// existing property requires it to be configurable.
    pub fn define(
        &self,
        key: PropertyKey,
        value: Value,
        attrs: PropertyAttrs,
    ) -> Result<(), MutationError> {
        let mut props = self.0.props.borrow_mut();
        if let Some(prop) = props.iter_mut().find(|p| p.key == key) {
            if !prop.attrs.configurable {
                return Err(MutationError::NotConfigurable {
                    key: key.to_string(),
                });
            }
            prop.value = value;
            prop.attrs = attrs;
            return Ok(());
        }
        if !self.0.extensible.get() {
            return Err(MutationError::NotExtensible {
                key: key.to_string(),
            });
        }
        props.push(Property { key, value, attrs });
        Ok(())
    }

    /// Remove a property. `Ok(false)` when the key was absent.
    pub fn delete(&self, key: &PropertyKey) -> Result<bool, MutationError> {
        let mut props = self.0.props.borrow_mut();
        let Some(index) = props.iter().position(|p| p.key == *key) else {
            return Ok(false);
        };
        if !props[index].attrs.configurable {
            return Err(MutationError::NotConfigurable {
                key: key.to_string(),
            });
        }
        props.remove(index);
        Ok(true)
    }

    pub fn delete_str(&self, name: &str) -> Result<bool, MutationError> {
        self.delete(&PropertyKey::from(name))
    }

    /// Lock the property set and mark every property read-only. Idempotent.
    pub fn freeze(&self) {
        self.0.extensible.set(false);
        for prop in self.0.props.borrow_mut().iter_mut() {
            prop.attrs.writable = false;
            prop.attrs.configurable = false;
        }
    }

    /// Lock the property set and forbid reconfiguration of existing
    /// properties, leaving writability as it is. Idempotent.
    pub fn seal(&self) {
        self.0.extensible.set(false);
        for prop in self.0.props.borrow_mut().iter_mut() {
            prop.attrs.configurable = false;
        }
    }

    pub fn is_extensible(&self) -> bool {
        self.0.extensible.get()
    }

    pub fn is_sealed(&self) -> bool {
        !self.0.extensible.get()
            && self
                .0
                .props
                .borrow()
                .iter()
                .all(|p| !p.attrs.configurable)
    }

    pub fn is_frozen(&self) -> bool {
        !self.0.extensible.get()
            && self
                .0
                .props
                .borrow()
                .iter()
                .all(|p| !p.attrs.writable && !p.attrs.configurable)
    }

    /// Snapshot of own enumerable properties in insertion order. A snapshot,
    /// not a live view: callers may mutate the object while iterating it.
    pub fn own_enumerable(&self) -> Vec<(PropertyKey, Value)> {
        self.0
            .props
            .borrow()
            .iter()
            .filter(|p| p.attrs.enumerable)
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect()
    }

    pub fn prop_count(&self) -> usize {
        self.0.props.borrow().len()
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Stable identity of the underlying allocation, for visited-set keying.
    pub fn ptr_id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl Default for ObjectRef {
    fn default() -> ObjectRef {
        ObjectRef::new()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shallow on purpose: graphs may be cyclic.
        write!(f, "[object; {} properties]", self.prop_count())
    }
}
