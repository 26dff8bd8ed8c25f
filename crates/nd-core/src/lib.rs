//! Named entities behind a capability trait, with checked narrowing and dynamic dispatch.

#[macro_use]
pub mod macros;

pub mod any;
pub mod dispatch;
pub mod entity;
pub mod error;
pub mod narrow;
pub mod provider;
pub mod scenario;

// Re-export commonly used items for convenience
pub use eyre;
pub use tracing;

pub use any::AnyValue;
pub use dispatch::{print_name, write_name};
pub use entity::NamedEntity;
pub use narrow::{Narrow, TypeSwitch};
pub use provider::{AsAny, NameProvider};
pub use scenario::Scenario;

pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
