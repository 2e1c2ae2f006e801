//! Screen descriptors: what can be pushed onto the navigation path.

use super::result::ResultHandle;
use std::hash::{Hash, Hasher};

/// A navigable destination plus the data needed to build it.
#[derive(Debug, Clone, Copy)]
pub enum ScreenDescriptor {
    /// The value picker. Takes no payload; its starting value comes from the
    /// factory.
    First,
    /// The value editor. Starts at `initial_value` and reports the confirmed
    /// value through `reply`.
    Second {
        initial_value: i32,
        reply: ResultHandle,
    },
}

impl ScreenDescriptor {
    /// Route identity between two descriptors.
    ///
    /// Two descriptors name the same route when they are the same variant
    /// and, for `Second`, have the same `initial_value`. The reply handle is
    /// not part of the route: it identifies who is waiting for the result,
    /// not where the user is. `PartialEq` and `Hash` both follow this
    /// relation, so never use descriptor equality to tell two `Second`
    /// entries apart. The coordinator uses [`EntryId`](super::EntryId) for
    /// that.
    pub fn same_route(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::First, Self::First) => true,
            (
                Self::Second {
                    initial_value: a, ..
                },
                Self::Second {
                    initial_value: b, ..
                },
            ) => a == b,
            _ => false,
        }
    }

    /// Handle of the pending result this screen reports to.
    pub fn reply_handle(&self) -> Option<ResultHandle> {
        match self {
            Self::First => None,
            Self::Second { reply, .. } => Some(*reply),
        }
    }

    /// Short label used in the breadcrumb and in logs.
    pub fn label(&self) -> String {
        match self {
            Self::First => "First".to_string(),
            Self::Second { initial_value, .. } => format!("Second({})", initial_value),
        }
    }
}

impl PartialEq for ScreenDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.same_route(other)
    }
}

impl Eq for ScreenDescriptor {}

impl Hash for ScreenDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let Self::Second { initial_value, .. } = self {
            initial_value.hash(state);
        }
    }
}
