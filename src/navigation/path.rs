//! The navigation path: an ordered stack of screens, last one visible.

use super::descriptor::ScreenDescriptor;
use super::factory::ScreenFactory;
use super::result::ResultHandle;
use crate::state::ScreenState;

/// Identity of one path entry.
///
/// Ids are never reused within a path, so two entries with equal descriptors
/// still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One screen on the path.
///
/// `state` is filled in the first time the entry is shown and kept until the
/// entry is popped.
#[derive(Debug)]
pub struct PathEntry {
    id: EntryId,
    descriptor: ScreenDescriptor,
    state: Option<ScreenState>,
}

impl PathEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn descriptor(&self) -> &ScreenDescriptor {
        &self.descriptor
    }

    /// State of this entry if it has been materialized.
    pub fn state(&self) -> Option<&ScreenState> {
        self.state.as_ref()
    }

    /// State of this entry, building it with `factory` on first access.
    pub fn state_or_build(&mut self, factory: &ScreenFactory) -> &mut ScreenState {
        let descriptor = &self.descriptor;
        self.state.get_or_insert_with(|| factory.build(descriptor))
    }
}

/// Ordered stack of [`PathEntry`].
#[derive(Debug, Default)]
pub struct NavigationPath {
    entries: Vec<PathEntry>,
    next_id: u64,
}

impl NavigationPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor and return the id of the new entry.
    pub fn push(&mut self, descriptor: ScreenDescriptor) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(PathEntry {
            id,
            descriptor,
            state: None,
        });
        id
    }

    /// Remove the last entry. Returns `None` on an empty path.
    pub fn pop(&mut self) -> Option<PathEntry> {
        self.entries.pop()
    }

    /// Remove the entry at `index`, keeping the entries above it in order.
    pub fn remove_at(&mut self, index: usize) -> Option<PathEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&PathEntry> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut PathEntry> {
        self.entries.last_mut()
    }

    pub fn get(&self, id: EntryId) -> Option<&PathEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut PathEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Index of the entry whose descriptor replies to `handle`.
    pub fn position_of_reply(&self, handle: ResultHandle) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.descriptor.reply_handle() == Some(handle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathEntry> {
        self.entries.iter()
    }

    /// Descriptors bottom to top.
    pub fn descriptors(&self) -> impl Iterator<Item = &ScreenDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    /// Labels bottom to top, for the breadcrumb.
    pub fn labels(&self) -> Vec<String> {
        self.descriptors().map(ScreenDescriptor::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_at_keeps_order_of_the_rest() {
        let mut path = NavigationPath::new();
        let root = path.push(ScreenDescriptor::First);
        path.push(ScreenDescriptor::First);
        let top = path.push(ScreenDescriptor::First);

        assert!(path.remove_at(1).is_some());
        let ids: Vec<_> = path.iter().map(PathEntry::id).collect();
        assert_eq!(ids, vec![root, top]);
        assert!(path.remove_at(2).is_none());
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut path = NavigationPath::new();
        assert!(path.pop().is_none());
        assert!(path.pop().is_none());
        assert!(path.is_empty());
    }

    #[test]
    fn test_ids_are_unique_after_pop() {
        let mut path = NavigationPath::new();
        let a = path.push(ScreenDescriptor::First);
        path.pop();
        let b = path.push(ScreenDescriptor::First);
        assert_ne!(a, b);
        assert!(!path.contains(a));
        assert!(path.contains(b));
    }

    #[test]
    fn test_state_built_once() {
        let factory = ScreenFactory::new(3);
        let mut path = NavigationPath::new();
        path.push(ScreenDescriptor::First);

        let entry = path.top_mut().unwrap();
        assert!(entry.state().is_none());
        entry.state_or_build(&factory).set_selected_value(9);
        assert_eq!(entry.state_or_build(&factory).selected_value(), 9);
    }

    #[test]
    fn test_position_of_reply() {
        let mut path = NavigationPath::new();
        path.push(ScreenDescriptor::First);
        path.push(ScreenDescriptor::Second {
            initial_value: 1,
            reply: ResultHandle::new(7),
        });
        assert_eq!(path.position_of_reply(ResultHandle::new(7)), Some(1));
        assert_eq!(path.position_of_reply(ResultHandle::new(8)), None);
        assert_eq!(path.labels(), vec!["First", "Second(1)"]);
    }
}
