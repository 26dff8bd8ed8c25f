//! Checked narrowing from an abstract holder back to a concrete type.
//!
//! Both holders in this crate narrow the same way: `dyn NameProvider` (the
//! non-empty interface) and [`AnyValue`] (the empty one). A miss is always
//! an ordinary value, `None` or [`Error::NarrowMismatch`], never a panic.

use std::any::{type_name, Any};

use tracing::trace;

use crate::any::AnyValue;
use crate::error::{Error, Result};
use crate::provider::NameProvider;

pub trait Narrow {
    /// Borrow the held value as `T`, or `None` if it holds something else.
    fn narrow_ref<T: Any>(&self) -> Option<&T>;

    /// Name of the concrete type actually held.
    fn held_type_name(&self) -> &'static str;

    fn narrow<T: Any>(&self) -> Result<&T> {
        self.narrow_ref::<T>().ok_or_else(|| Error::NarrowMismatch {
            expected: type_name::<T>(),
            found: self.held_type_name(),
        })
    }

    /// Start a type switch over the held value.
    fn type_switch<R>(&self) -> TypeSwitch<'_, Self, R> {
        TypeSwitch::new(self)
    }
}

impl Narrow for dyn NameProvider {
    fn narrow_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    fn held_type_name(&self) -> &'static str {
        self.type_name()
    }
}

impl Narrow for AnyValue {
    fn narrow_ref<T: Any>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    fn held_type_name(&self) -> &'static str {
        self.type_name()
    }
}

/// A `switch v.(type)` over a [`Narrow`] subject.
///
/// Cases are tried in order and the first one whose type matches runs; later
/// cases are skipped even if they would also match.
#[must_use = "a type switch does nothing until it is finished"]
pub struct TypeSwitch<'a, S: ?Sized, R> {
    subject: &'a S,
    result: Option<R>,
}

impl<'a, S: Narrow + ?Sized, R> TypeSwitch<'a, S, R> {
    pub fn new(subject: &'a S) -> Self {
        Self {
            subject,
            result: None,
        }
    }

    pub fn case<T: Any>(mut self, arm: impl FnOnce(&'a T) -> R) -> Self {
        if self.result.is_none() {
            if let Some(value) = self.subject.narrow_ref::<T>() {
                trace!(case = type_name::<T>(), "type switch matched");
                self.result = Some(arm(value));
            }
        }
        self
    }

    /// Whether a case has matched so far.
    pub fn matched(&self) -> bool {
        self.result.is_some()
    }

    /// Result of the matching case, if any.
    pub fn finish(self) -> Option<R> {
        if self.result.is_none() {
            trace!(held = self.subject.held_type_name(), "type switch fell through");
        }
        self.result
    }

    /// Result of the matching case, or of `arm` when none matched.
    pub fn default(self, arm: impl FnOnce() -> R) -> R {
        self.finish().unwrap_or_else(arm)
    }
}
