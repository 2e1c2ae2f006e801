//! The navigation coordinator.
//!
//! The coordinator is the only thing that mutates the navigation path. Screens
//! report user intent as a [`ScreenAction`]; the coordinator turns that into
//! pushes, pops and result deliveries.
//!
//! ```text
//! [First] --Continue{5}--> [First, Second(5)] --Confirm{42}--> [First]
//!                                                  |
//!                                      First.selected_value = 42
//! ```

use super::descriptor::ScreenDescriptor;
use super::factory::ScreenFactory;
use super::path::{EntryId, NavigationPath, PathEntry};
use super::result::{ConfirmCallback, PendingResult, ResultHandle, Resolution};
use crate::screens::ScreenAction;
use crate::state::{clamp_value, ScreenState};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, info, warn};

/// Delivered handles remembered for `Resolution::AlreadyResolved`. Older
/// handles report `Resolution::Stale`.
const RECENT_DELIVERIES: usize = 32;

/// Owns the navigation path and the results pending on it.
#[derive(Debug)]
pub struct NavigationCoordinator {
    path: NavigationPath,
    factory: ScreenFactory,
    pending: HashMap<ResultHandle, PendingResult>,
    /// Most recent deliveries, oldest first, capped at `RECENT_DELIVERIES`
    delivered: VecDeque<ResultHandle>,
    next_handle: u64,
    /// Bumped on every path change; the app redraws when it moves.
    revision: u64,
}

impl NavigationCoordinator {
    /// Create a coordinator with an empty path.
    pub fn new(factory: ScreenFactory) -> Self {
        Self {
            path: NavigationPath::new(),
            factory,
            pending: HashMap::new(),
            delivered: VecDeque::with_capacity(RECENT_DELIVERIES),
            next_handle: 0,
            revision: 0,
        }
    }

    /// Create a coordinator whose path starts as `[First]`.
    pub fn with_root(factory: ScreenFactory) -> Self {
        let mut coordinator = Self::new(factory);
        coordinator.push(ScreenDescriptor::First);
        coordinator
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    pub fn factory(&self) -> &ScreenFactory {
        &self.factory
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of results still waiting for a value.
    pub fn pending_results(&self) -> usize {
        self.pending.len()
    }

    /// Append `descriptor` to the path.
    pub fn push(&mut self, descriptor: ScreenDescriptor) -> EntryId {
        let id = self.path.push(descriptor);
        self.revision += 1;
        info!(
            "Pushed {} (entry {}, depth {})",
            descriptor.label(),
            id.id(),
            self.path.len()
        );
        id
    }

    /// Remove the visible screen. Does nothing on an empty path.
    ///
    /// Popping a screen that still owes a result cancels that result.
    pub fn pop(&mut self) -> Option<ScreenDescriptor> {
        let entry = self.path.pop()?;
        Some(self.discard(&entry))
    }

    /// Bookkeeping for an entry that left the path.
    fn discard(&mut self, entry: &PathEntry) -> ScreenDescriptor {
        self.revision += 1;

        let descriptor = *entry.descriptor();
        if let Some(handle) = descriptor.reply_handle() {
            if self.pending.remove(&handle).is_some() {
                debug!("Cancelled pending result {}", handle.id());
            }
        }
        info!(
            "Removed {} (entry {}, depth {})",
            descriptor.label(),
            entry.id().id(),
            self.path.len()
        );
        descriptor
    }

    /// Build fresh state for `descriptor`. Never touches the path.
    pub fn build(&self, descriptor: &ScreenDescriptor) -> ScreenState {
        self.factory.build(descriptor)
    }

    /// Push the second screen and return the handle it will report to.
    ///
    /// `on_confirm` runs at most once, with the confirmed value, before the
    /// second screen is removed from the path.
    pub fn push_second<F>(&mut self, initial_value: i32, on_confirm: F) -> ResultHandle
    where
        F: FnOnce(i32, &NavigationPath) + 'static,
    {
        self.open_second(initial_value, None, Some(Box::new(on_confirm)))
    }

    /// Push the second screen on behalf of path entry `origin`.
    ///
    /// The confirmed value is written into `origin`'s state.
    pub fn push_second_for(&mut self, origin: EntryId, initial_value: i32) -> ResultHandle {
        self.open_second(initial_value, Some(origin), None)
    }

    fn open_second(
        &mut self,
        initial_value: i32,
        origin: Option<EntryId>,
        on_confirm: Option<ConfirmCallback>,
    ) -> ResultHandle {
        let handle = ResultHandle::new(self.next_handle);
        self.next_handle += 1;
        self.pending
            .insert(handle, PendingResult { origin, on_confirm });

        self.push(ScreenDescriptor::Second {
            initial_value: clamp_value(initial_value),
            reply: handle,
        });
        handle
    }

    /// Deliver `value` to whoever waits on `handle`, then remove the screen
    /// that carried it.
    ///
    /// Delivery happens first, so consumers still see the producing screen on
    /// the path. Only that one screen is removed; screens above it keep their
    /// place and their own pending results. A handle delivers at most once.
    pub fn resolve(&mut self, handle: ResultHandle, value: i32) -> Resolution {
        let Some(pending) = self.pending.remove(&handle) else {
            if self.delivered.contains(&handle) {
                warn!("Result {} already delivered, ignoring {}", handle.id(), value);
                return Resolution::AlreadyResolved;
            }
            warn!("Result {} is no longer pending, ignoring {}", handle.id(), value);
            return Resolution::Stale;
        };
        if self.delivered.len() == RECENT_DELIVERIES {
            self.delivered.pop_front();
        }
        self.delivered.push_back(handle);

        let value = clamp_value(value);
        info!("Delivering {} to result {}", value, handle.id());

        if let Some(origin) = pending.origin {
            let factory = &self.factory;
            match self.path.get_mut(origin) {
                Some(entry) => entry.state_or_build(factory).apply_result(value),
                None => warn!("Origin entry {} is gone, dropping write-back", origin.id()),
            }
        }
        if let Some(on_confirm) = pending.on_confirm {
            on_confirm(value, &self.path);
        }

        if let Some(entry) = self
            .path
            .position_of_reply(handle)
            .and_then(|position| self.path.remove_at(position))
        {
            self.discard(&entry);
        }
        Resolution::Delivered
    }

    /// State of the visible screen, built on first access.
    pub fn visible_mut(&mut self) -> Option<&mut ScreenState> {
        let factory = &self.factory;
        self.path.top_mut().map(|entry| entry.state_or_build(factory))
    }

    /// State of the visible screen if it has been built.
    pub fn visible(&self) -> Option<&ScreenState> {
        self.path.top().and_then(|entry| entry.state())
    }

    /// State of entry `id`, built on first access.
    pub fn state_mut(&mut self, id: EntryId) -> Option<&mut ScreenState> {
        let factory = &self.factory;
        self.path.get_mut(id).map(|entry| entry.state_or_build(factory))
    }

    /// Apply a navigation action coming from the visible screen.
    ///
    /// Returns `true` if the path changed. Actions that are not about
    /// navigation are ignored here.
    pub fn handle_action(&mut self, action: ScreenAction) -> bool {
        let before = self.revision;
        match action {
            ScreenAction::Continue { value } => {
                if let Some(origin) = self.path.top().map(|entry| entry.id()) {
                    self.push_second_for(origin, value);
                }
            }
            ScreenAction::Confirm { value } => {
                let reply = self
                    .path
                    .top()
                    .and_then(|entry| entry.descriptor().reply_handle());
                match reply {
                    Some(handle) => {
                        self.resolve(handle, value);
                    }
                    None => debug!("Confirm on a screen without a reply handle"),
                }
            }
            ScreenAction::Back => {
                if self.path.len() > 1 {
                    self.pop();
                }
            }
            ScreenAction::None | ScreenAction::ShowHelp | ScreenAction::Quit => {}
        }
        self.revision != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn coordinator() -> NavigationCoordinator {
        NavigationCoordinator::with_root(ScreenFactory::new(0))
    }

    #[test]
    fn test_push_pop_never_negative() {
        let mut nav = NavigationCoordinator::new(ScreenFactory::default());
        assert!(nav.pop().is_none());
        nav.push(ScreenDescriptor::First);
        nav.push(ScreenDescriptor::First);
        assert_eq!(nav.path().len(), 2);
        for _ in 0..5 {
            nav.pop();
        }
        assert!(nav.path().is_empty());
    }

    #[test]
    fn test_pop_empty_does_not_bump_revision() {
        let mut nav = NavigationCoordinator::new(ScreenFactory::default());
        let before = nav.revision();
        nav.pop();
        assert_eq!(nav.revision(), before);
    }

    #[test]
    fn test_build_second_uses_initial_value() {
        let mut nav = coordinator();
        nav.push_second(17, |_, _| {});
        let descriptor = *nav.path().top().unwrap().descriptor();
        let state = nav.build(&descriptor);
        assert_eq!(state.as_second().map(|s| s.selected_value), Some(17));
    }

    #[test]
    fn test_resolve_calls_back_once_and_pops_one() {
        let mut nav = coordinator();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handle = nav.push_second(5, move |value, _| sink.borrow_mut().push(value));
        assert_eq!(nav.path().len(), 2);

        assert_eq!(nav.resolve(handle, 42), Resolution::Delivered);
        assert_eq!(nav.path().len(), 1);
        assert_eq!(*seen.borrow(), vec![42]);

        assert_eq!(nav.resolve(handle, 43), Resolution::AlreadyResolved);
        assert_eq!(nav.path().len(), 1);
        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn test_resolve_below_top_removes_only_that_screen() {
        let mut nav = coordinator();
        let inner_called = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&inner_called);
        let outer = nav.push_second(5, |_, _| {});
        let inner = nav.push_second(7, move |value, _| *sink.borrow_mut() = Some(value));
        assert_eq!(nav.path().labels(), vec!["First", "Second(5)", "Second(7)"]);

        assert_eq!(nav.resolve(outer, 9), Resolution::Delivered);
        assert_eq!(nav.path().labels(), vec!["First", "Second(7)"]);
        assert_eq!(nav.pending_results(), 1);
        assert!(inner_called.borrow().is_none());

        // The screen that stayed can still report its result
        assert_eq!(nav.resolve(inner, 3), Resolution::Delivered);
        assert_eq!(*inner_called.borrow(), Some(3));
        assert_eq!(nav.path().labels(), vec!["First"]);
    }

    #[test]
    fn test_delivery_history_is_bounded() {
        let mut nav = coordinator();
        let first = nav.push_second(1, |_, _| {});
        nav.resolve(first, 1);
        for value in 0..1000 {
            nav.handle_action(ScreenAction::Continue { value: value % 100 });
            nav.handle_action(ScreenAction::Confirm { value: value % 100 });
        }
        assert_eq!(nav.path().len(), 1);
        assert_eq!(nav.pending_results(), 0);
        assert_eq!(nav.delivered.len(), RECENT_DELIVERIES);

        // Handles that fell out of the history read as stale, never deliver again
        assert_eq!(nav.resolve(first, 2), Resolution::Stale);
        assert_eq!(nav.path().len(), 1);
    }

    #[test]
    fn test_callback_sees_second_screen_on_path() {
        let mut nav = coordinator();
        let observed = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&observed);
        let handle = nav.push_second(5, move |_, path| {
            *sink.borrow_mut() = Some((path.len(), path.top().map(|e| e.descriptor().label())));
        });

        nav.resolve(handle, 9);
        assert_eq!(
            *observed.borrow(),
            Some((2, Some("Second(5)".to_string())))
        );
    }

    #[test]
    fn test_popped_result_is_stale() {
        let mut nav = coordinator();
        let called = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&called);
        let handle = nav.push_second(5, move |_, _| *sink.borrow_mut() = true);

        nav.pop();
        assert_eq!(nav.pending_results(), 0);
        assert_eq!(nav.resolve(handle, 1), Resolution::Stale);
        assert!(!*called.borrow());
        assert_eq!(nav.path().len(), 1);
    }

    #[test]
    fn test_continue_then_confirm_writes_back() {
        let mut nav = coordinator();
        assert!(nav.handle_action(ScreenAction::Continue { value: 5 }));
        assert_eq!(nav.path().labels(), vec!["First", "Second(5)"]);

        nav.visible_mut().unwrap().set_selected_value(42);
        assert!(nav.handle_action(ScreenAction::Confirm { value: 42 }));

        assert_eq!(nav.path().len(), 1);
        assert_eq!(nav.visible_mut().unwrap().selected_value(), 42);
    }

    #[test]
    fn test_write_back_skipped_when_origin_gone() {
        let mut nav = coordinator();
        let origin = nav.path().top().unwrap().id();
        let handle = nav.push_second_for(origin, 5);

        // Drop the origin from under the second screen by rebuilding the path.
        let mut other = NavigationCoordinator::new(ScreenFactory::default());
        std::mem::swap(&mut nav.path, &mut other.path);
        nav.path.push(ScreenDescriptor::Second {
            initial_value: 5,
            reply: handle,
        });

        assert_eq!(nav.resolve(handle, 8), Resolution::Delivered);
        assert!(nav.path().is_empty());
    }

    #[test]
    fn test_back_keeps_root() {
        let mut nav = coordinator();
        assert!(!nav.handle_action(ScreenAction::Back));
        assert_eq!(nav.path().len(), 1);

        nav.handle_action(ScreenAction::Continue { value: 1 });
        assert!(nav.handle_action(ScreenAction::Back));
        assert_eq!(nav.path().len(), 1);
        assert_eq!(nav.pending_results(), 0);
    }

    #[test]
    fn test_edits_survive_repeated_access() {
        let mut nav = coordinator();
        nav.visible_mut().unwrap().set_selected_value(11);
        assert_eq!(nav.visible().map(ScreenState::selected_value), Some(11));
        assert_eq!(nav.visible_mut().unwrap().selected_value(), 11);
    }

    #[test]
    fn test_second_initial_value_is_clamped() {
        let mut nav = coordinator();
        nav.push_second(250, |_, _| {});
        assert_eq!(nav.path().labels(), vec!["First", "Second(100)"]);
    }

    #[test]
    fn test_equal_descriptors_with_different_callbacks() {
        let mut nav = coordinator();
        nav.push_second(5, |_, _| {});
        nav.push_second(5, |_, _| {});
        let descriptors: Vec<_> = nav.path().descriptors().copied().collect();
        assert_eq!(descriptors[1], descriptors[2]);
        assert_ne!(
            descriptors[1].reply_handle(),
            descriptors[2].reply_handle()
        );
    }
}
