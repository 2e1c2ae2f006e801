//! Result handles for screens that report a value back to whoever opened them.
//!
//! A screen that produces a result never holds a callback into the screen
//! that opened it. Instead the coordinator keeps a [`PendingResult`] keyed by a
//! [`ResultHandle`], and the pushed descriptor only carries the handle. When
//! the handle is resolved the coordinator looks the pending entry up, delivers
//! the value, and forgets it.

use super::path::{EntryId, NavigationPath};

/// Callback invoked with a confirmed value.
///
/// It receives the path as it is at delivery time, which still contains the
/// screen that produced the value.
pub type ConfirmCallback = Box<dyn FnOnce(i32, &NavigationPath)>;

/// Opaque token identifying one pending result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultHandle(u64);

impl ResultHandle {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric id, used for logging.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Outcome of resolving a [`ResultHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The value was delivered and the producing screen was dismissed.
    Delivered,
    /// The handle was already resolved earlier; nothing happened.
    AlreadyResolved,
    /// The handle was cancelled (its screen was popped) or never existed.
    Stale,
}

impl Resolution {
    pub fn is_delivered(self) -> bool {
        self == Resolution::Delivered
    }
}

/// Consumers waiting on a handle.
pub(crate) struct PendingResult {
    /// Path entry whose state receives the value, if any.
    pub origin: Option<EntryId>,
    /// Caller-supplied callback, if any.
    pub on_confirm: Option<ConfirmCallback>,
}

impl std::fmt::Debug for PendingResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingResult")
            .field("origin", &self.origin)
            .field("has_callback", &self.on_confirm.is_some())
            .finish()
    }
}
