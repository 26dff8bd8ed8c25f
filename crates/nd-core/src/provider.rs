//! The `NameProvider` capability and the `Any` plumbing that lets its trait
//! objects be narrowed back to a concrete type.

use std::any::Any;
use std::fmt::Debug;

/// Exposes any `'static` value as `dyn Any`.
///
/// Blanket-implemented, so a trait that lists `AsAny` as a supertrait gets
/// runtime type recovery for free. Call these through a `&dyn Trait`, not a
/// `Box<dyn Trait>`: on the box itself they would describe the box.
pub trait AsAny: Any + 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    /// Name of the concrete type behind the reference.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Anything with a display name.
pub trait NameProvider: AsAny + Debug + 'static {
    fn get_name(&self) -> &str;
}

impl dyn NameProvider {
    pub fn is<T: NameProvider>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: NameProvider>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: NameProvider>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Takes ownership of the concrete value, or hands the box back untouched.
    pub fn downcast<T: NameProvider>(self: Box<Self>) -> Result<Box<T>, Box<dyn NameProvider>> {
        if self.is::<T>() {
            Ok(self
                .into_any()
                .downcast::<T>()
                .expect("concrete type was checked before downcasting"))
        } else {
            Err(self)
        }
    }
}
