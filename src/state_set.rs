use bit_set::BitSet;
use itertools::Itertools;

use crate::automaton::StateId;

/// A set of states of an automaton, as it is manipulated by the closure computation, the
/// simulation and the subset construction. Membership is all that matters for equality and
/// hashing; iteration happens in ascending order of the handles.
///
/// To render a set in a canonical way that is independent of handles, use
/// [`crate::Automaton::label`].
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet(BitSet);

impl StateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the set that contains exactly `state`.
    pub fn singleton(state: StateId) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Adds `state`, returns true if it was not present before.
    pub fn insert(&mut self, state: StateId) -> bool {
        self.0.insert(state.index())
    }

    /// Removes `state`, returns true if it was present.
    pub fn remove(&mut self, state: StateId) -> bool {
        self.0.remove(state.index())
    }

    /// Checks whether `state` is a member.
    pub fn contains(&self, state: StateId) -> bool {
        self.0.contains(state.index())
    }

    /// Number of states in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no states in the set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Adds all states of `other` to `self`.
    pub fn union_with(&mut self, other: &StateSet) {
        self.0.union_with(&other.0)
    }

    /// Iterates over the members in ascending order of their handles.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.0.iter().map(StateId::from_index)
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<T: IntoIterator<Item = StateId>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<StateId> for StateSet {
    fn extend<T: IntoIterator<Item = StateId>>(&mut self, iter: T) {
        for state in iter {
            self.insert(state);
        }
    }
}

impl std::fmt::Debug for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "∅")
        } else {
            write!(f, "{{{}}}", self.iter().map(|q| format!("{q:?}")).join(", "))
        }
    }
}
