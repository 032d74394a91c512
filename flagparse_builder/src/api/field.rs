use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::model::{Kind, Value};

// The registry entry and the caller's handle share the same cell.
// Parsing writes through the registry, and the caller observes it through the handle.
pub(crate) type ValueCell = Rc<RefCell<Value>>;

/// Behaviour to move an explicit type T in and out of the anonymous [`Value`] variant.
///
/// We use this at the edge of the api so the caller keeps a typed handle, while the registry works across all kinds.
#[doc(hidden)]
pub trait FlagValue: Sized {
    /// The kind of option this type declares.
    const KIND: Kind;

    /// Wrap the typed value.
    fn into_value(self) -> Value;

    /// Read the typed value back out.
    fn from_value(value: &Value) -> Self;
}

impl FlagValue for bool {
    const KIND: Kind = Kind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(b) => *b,
            _ => unreachable!("internal error - bool handle over a {} cell", value.kind()),
        }
    }
}

impl FlagValue for i64 {
    const KIND: Kind = Kind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Int(i) => *i,
            _ => unreachable!("internal error - int handle over a {} cell", value.kind()),
        }
    }
}

impl FlagValue for String {
    const KIND: Kind = Kind::String;

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Str(s) => s.clone(),
            _ => unreachable!("internal error - string handle over a {} cell", value.kind()),
        }
    }
}

/// A live view onto the value of a declared option.
///
/// Returned by the `FlagSet::declare_*` methods.
/// It starts out holding the declared default, and reflects whatever the parser writes afterwards.
///
/// ### Example
/// ```
/// # use flagparse_builder as flagparse;
/// use flagparse::FlagSet;
///
/// let mut flag_set = FlagSet::new("program");
/// let limit = flag_set.declare_int("p", -1, "Print at most this many lines.");
/// let mut parser = flag_set.build();
///
/// assert_eq!(limit.get(), -1);
/// parser.parse_tokens(vec!["-p", "10"].as_slice()).unwrap();
/// assert_eq!(limit.get(), 10);
/// ```
pub struct Handle<T> {
    cell: ValueCell,
    _phantom: PhantomData<T>,
}

impl<T: FlagValue> Handle<T> {
    pub(crate) fn bind(default: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(default.into_value())),
            _phantom: PhantomData,
        }
    }

    pub(crate) fn cell(&self) -> ValueCell {
        Rc::clone(&self.cell)
    }

    /// Get the current value of the option.
    pub fn get(&self) -> T {
        T::from_value(&self.cell.borrow())
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            _phantom: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Handle").field(&*self.cell.borrow()).finish()
    }
}
