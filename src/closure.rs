use tracing::trace;

use crate::{Automaton, StateSet};

impl Automaton {
    /// Computes the epsilon closure of `set`, the smallest superset of `set` that contains every
    /// state reachable through transitions on [`crate::Symbol::Empty`]. The given set is left
    /// untouched, a new set is returned.
    ///
    /// Every state is expanded at most once, so this terminates after visiting each epsilon
    /// transition at most once.
    pub fn closure(&self, set: &StateSet) -> StateSet {
        let mut closure = set.clone();
        let mut queue: Vec<_> = set.iter().collect();
        while let Some(state) = queue.pop() {
            for transition in self.transitions_from(state).filter(|t| t.is_epsilon()) {
                if closure.insert(transition.target()) {
                    trace!(
                        "adding {:?} to closure through epsilon transition from {:?}",
                        transition.target(),
                        state
                    );
                    queue.push(transition.target());
                }
            }
        }
        closure
    }

    /// Returns the set of states that can be reached from a member of `set` by a single
    /// transition on `symbol`. Epsilon transitions are not taken.
    pub fn step(&self, set: &StateSet, symbol: char) -> StateSet {
        set.iter()
            .flat_map(|state| self.transitions_from(state))
            .filter(|t| t.reads(symbol))
            .map(|t| t.target())
            .collect()
    }

    /// Reads `symbol` from `set`, taking epsilon transitions afterwards. This is the successor
    /// of `set` in the subset construction and the next configuration in a simulation.
    pub fn successors(&self, set: &StateSet, symbol: char) -> StateSet {
        self.closure(&self.step(set, symbol))
    }
}
