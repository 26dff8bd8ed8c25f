//! `AnyValue`, a holder that accepts a value of any type and only gives it
//! back through a checked narrowing.

use std::any::Any;
use std::fmt::{Debug, Formatter};

use crate::provider::AsAny;

/// Types that can live inside an [`AnyValue`].
pub trait AnyValuable: Any + Debug + Clone + PartialEq {}
impl<T: Any + Debug + Clone + PartialEq> AnyValuable for T {}

/// Object-safe view of an `AnyValuable`, so the holder stays cloneable and
/// comparable without knowing what it holds.
trait Held: AsAny + Debug {
    fn clone_held(&self) -> Box<dyn Held>;
    fn eq_held(&self, other: &dyn Held) -> bool;
}

impl<T: AnyValuable> Held for T {
    fn clone_held(&self) -> Box<dyn Held> {
        Box::new(self.clone())
    }

    fn eq_held(&self, other: &dyn Held) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Accept-anything value.
///
/// Prefer a capability trait such as [`NameProvider`](crate::NameProvider)
/// when the set of useful operations is known; `AnyValue` is for the cases
/// where the caller really has to inspect the concrete type.
pub struct AnyValue {
    inner: Box<dyn Held>,
}

impl AnyValue {
    pub fn new<T: AnyValuable>(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    fn held(&self) -> &dyn Held {
        &*self.inner
    }

    /// Name of the concrete type currently held.
    pub fn type_name(&self) -> &'static str {
        self.held().type_name()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.held().as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.held().as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        let held: &mut dyn Held = &mut *self.inner;
        held.as_any_mut().downcast_mut()
    }

    pub fn downcast<T: Any>(self) -> Result<Box<T>, Self> {
        if self.is::<T>() {
            Ok(self
                .inner
                .into_any()
                .downcast::<T>()
                .expect("concrete type was checked before downcasting"))
        } else {
            Err(self)
        }
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.held().clone_held(),
        }
    }
}

impl Debug for AnyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.held(), f)
    }
}

impl PartialEq for AnyValue {
    fn eq(&self, other: &Self) -> bool {
        // Different concrete types compare unequal.
        self.held().eq_held(other.held())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::NamedEntity;
    use crate::provider::NameProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn narrows_back_to_the_stored_entity() {
        let value = AnyValue::new(NamedEntity::new("chinese"));
        assert!(value.is::<NamedEntity>());
        assert_eq!(value.type_name(), std::any::type_name::<NamedEntity>());
        let entity = value.downcast_ref::<NamedEntity>().expect("holds NamedEntity");
        assert_eq!(entity.get_name(), "chinese");
    }

    #[test]
    fn wrong_type_is_a_plain_miss() {
        let value = AnyValue::new(42_i64);
        assert!(!value.is::<NamedEntity>());
        assert!(value.downcast_ref::<NamedEntity>().is_none());

        let value = value.downcast::<NamedEntity>().expect_err("holds an i64");
        assert_eq!(value.downcast::<i64>().map(|v| *v).ok(), Some(42));
    }

    #[test]
    fn clone_and_eq_follow_the_held_value() {
        let value = AnyValue::new(NamedEntity::new("chinese"));
        let copy = value.clone();
        assert_eq!(value, copy);
        assert_ne!(value, AnyValue::new(NamedEntity::new("english")));
        assert_ne!(value, AnyValue::new(String::from("chinese")));
        assert_eq!(format!("{copy:?}"), r#"NamedEntity { name: "chinese" }"#);
    }

    #[test]
    fn downcast_mut_edits_in_place() {
        let mut value = AnyValue::new(vec![1_u8, 2]);
        value.downcast_mut::<Vec<u8>>().expect("holds a Vec").push(3);
        assert_eq!(value.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
    }
}
