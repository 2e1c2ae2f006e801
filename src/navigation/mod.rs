//! Coordinator-driven navigation.
//!
//! The [`NavigationCoordinator`] owns a [`NavigationPath`] of
//! [`ScreenDescriptor`]s, builds state for each entry through a
//! [`ScreenFactory`], and routes results back through [`ResultHandle`]s.

pub mod coordinator;
pub mod descriptor;
pub mod factory;
pub mod path;
pub mod result;

pub use coordinator::NavigationCoordinator;
pub use descriptor::ScreenDescriptor;
pub use factory::ScreenFactory;
pub use path::{EntryId, NavigationPath, PathEntry};
pub use result::{ConfirmCallback, ResultHandle, Resolution};
