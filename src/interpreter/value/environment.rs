use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared handle to an environment.
///
/// Function values and the frames of their calls all hold one of these, so a
/// scope lives as long as anything that can still see it.
pub type Env = Rc<RefCell<Environment>>;

/// A frame of variable bindings with an optional enclosing frame.
///
/// Lookups walk outward through the parents; writes only ever touch the
/// frame they are made on.
#[derive(Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    parent:   Option<Env>,
}

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn global() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment nested in `parent`.
    ///
    /// ## Example
    /// ```
    /// use mandrill::interpreter::value::{Environment, Value};
    ///
    /// let outer = Environment::global();
    /// outer.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let inner = Environment::enclosed(&outer);
    /// inner.borrow_mut().set("x", Value::Integer(2));
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
    /// assert_eq!(outer.borrow().get("x"), Some(Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn enclosed(parent: &Env) -> Env {
        Rc::new(RefCell::new(Self { bindings: HashMap::new(),
                                    parent:   Some(Rc::clone(parent)), }))
    }

    /// Looks `name` up in this frame, then in each enclosing frame.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.borrow().get(name))
    }

    /// Binds `name` in this frame, replacing any binding it already has here.
    ///
    /// Bindings of the same name in enclosing frames are shadowed, not
    /// modified.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }
}

impl fmt::Debug for Environment {
    // Only names: values may hold closures that capture this frame.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.bindings.keys().collect();
        names.sort();

        f.debug_struct("Environment")
         .field("bindings", &names)
         .field("has_parent", &self.parent.is_some())
         .finish()
    }
}
