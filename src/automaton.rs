use crate::{alphabet::Alphabet, math::Map, AutomatonError, Symbol};

mod state;
pub use state::State;

mod transition;
pub use transition::{Direction, Payload, Transition};

mod builder;
pub use builder::AutomatonBuilder;

mod records;
pub use records::{Snapshot, StateRecord, TransitionRecord};

mod queries;
mod validate;
use validate::is_valid_name;

/// Handle of a state in an [`Automaton`]. Handles are stable: removing a state never changes the
/// handle of any other state, and the handle of a removed state is never reused.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the state in the arena of its automaton.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Debug for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of machine that an automaton models. It determines which [`Payload`] its transitions
/// carry. Closure, simulation and determinization only look at the symbols of transitions, so
/// for them every kind behaves like a finite automaton.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, Default)]
pub enum MachineKind {
    /// Finite automata, deterministic or not.
    #[default]
    Finite,
    /// Pushdown automata, transitions pop and push stack symbols.
    Pushdown,
    /// Turing machines, transitions write to the tape and move the head.
    Turing,
}

impl std::fmt::Display for MachineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineKind::Finite => write!(f, "finite"),
            MachineKind::Pushdown => write!(f, "pushdown"),
            MachineKind::Turing => write!(f, "Turing"),
        }
    }
}

/// An automaton is an arena of [`State`]s, each of which stores its outgoing [`Transition`]s.
/// States are addressed through [`StateId`]s, or by name through the [`Indexes`] trait.
///
/// All editing operations maintain the following invariants:
/// - state names are unique and non-empty,
/// - at most one state is the start state,
/// - every transition leads to a state that exists.
///
/// # Example
/// ```
/// use automata_editor::prelude::*;
///
/// let mut automaton = Automaton::new(MachineKind::Finite);
/// let q0 = automaton.add_state("q0").unwrap();
/// let q1 = automaton.add_state("q1").unwrap();
/// automaton.set_start(q0).unwrap();
/// automaton.set_final(q1, true).unwrap();
/// automaton.add_transition(q0, 'a', "q1", Payload::Finite).unwrap();
///
/// assert!(automaton.accepts("a"));
/// assert!(!automaton.accepts("aa"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Automaton {
    kind: MachineKind,
    states: Vec<Option<State>>,
    names: Map<String, StateId>,
    declared: Alphabet,
}

/// Implementors can be used to refer to a state of an [`Automaton`], either directly through
/// its [`StateId`] or through its name.
pub trait Indexes: std::fmt::Debug {
    /// Returns the handle of the referenced state if it exists in `automaton`.
    fn to_index(&self, automaton: &Automaton) -> Option<StateId>;

    /// Human readable description of the reference, used in error messages.
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl Indexes for StateId {
    fn to_index(&self, automaton: &Automaton) -> Option<StateId> {
        automaton.state(*self).map(|_| *self)
    }
}

impl Indexes for &str {
    fn to_index(&self, automaton: &Automaton) -> Option<StateId> {
        automaton.find(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Indexes for String {
    fn to_index(&self, automaton: &Automaton) -> Option<StateId> {
        automaton.find(self)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl Indexes for &String {
    fn to_index(&self, automaton: &Automaton) -> Option<StateId> {
        automaton.find(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Automaton {
    /// Creates an automaton of the given kind without any states.
    pub fn new(kind: MachineKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Returns a builder for an automaton. This should be the main method for constructing an
    /// automaton in one go, see [`AutomatonBuilder`].
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::default()
    }

    /// The kind of machine this automaton models.
    pub fn kind(&self) -> MachineKind {
        self.kind
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no states.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the state with the given handle, if it exists.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index()).and_then(Option::as_ref)
    }

    fn state_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Looks up a state by name.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.names.get(name).copied()
    }

    /// Returns the name of the state with the given handle.
    pub fn name(&self, id: StateId) -> Option<&str> {
        self.state(id).map(State::name)
    }

    /// Iterates over the handles of all states in ascending order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states().map(|(id, _)| id)
    }

    /// Iterates over all states together with their handles, in ascending order of the handles.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter_map(|(i, q)| q.as_ref().map(|q| (StateId::from_index(i), q)))
    }

    /// Iterates over the outgoing transitions of `id` in insertion order. The iterator is empty
    /// if the state does not exist.
    pub fn transitions_from(&self, id: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.state(id)
            .into_iter()
            .flat_map(|q| q.transitions().iter())
    }

    /// Iterates over all transitions of the automaton.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.states().flat_map(|(_, q)| q.transitions().iter())
    }

    /// Resolves a reference to a state or fails with [`AutomatonError::UnknownState`].
    pub fn resolve<X: Indexes>(&self, state: X) -> Result<StateId, AutomatonError> {
        state
            .to_index(self)
            .ok_or_else(|| AutomatonError::UnknownState(state.describe()))
    }

    /// Adds a new state that is neither start nor final and returns its handle.
    pub fn add_state<N: Into<String>>(&mut self, name: N) -> Result<StateId, AutomatonError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(AutomatonError::InvalidName(name));
        }
        if self.names.contains_key(&name) {
            return Err(AutomatonError::DuplicateState(name));
        }
        let id = StateId::from_index(self.states.len());
        self.names.insert(name.clone(), id);
        self.states.push(Some(State::new(name)));
        Ok(id)
    }

    /// Removes a state together with all transitions leading into it. Returns the removed
    /// state, which still holds its outgoing transitions.
    pub fn remove_state<X: Indexes>(&mut self, state: X) -> Result<State, AutomatonError> {
        let id = self.resolve(state)?;
        let removed = self.states[id.index()]
            .take()
            .ok_or_else(|| AutomatonError::UnknownState(format!("{id:?}")))?;
        self.names.remove(removed.name());
        for q in self.states.iter_mut().flatten() {
            q.out.retain(|t| t.target() != id);
        }
        Ok(removed)
    }

    /// Gives the state a new name. Renaming a state to its current name is a no-op.
    pub fn rename_state<X: Indexes, N: Into<String>>(
        &mut self,
        state: X,
        name: N,
    ) -> Result<(), AutomatonError> {
        let id = self.resolve(state)?;
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(AutomatonError::InvalidName(name));
        }
        match self.names.get(&name) {
            Some(other) if *other == id => return Ok(()),
            Some(_) => return Err(AutomatonError::DuplicateState(name)),
            None => {}
        }
        let q = self
            .state_mut(id)
            .ok_or_else(|| AutomatonError::UnknownState(format!("{id:?}")))?;
        let old = std::mem::replace(&mut q.name, name.clone());
        self.names.remove(&old);
        self.names.insert(name, id);
        Ok(())
    }

    /// Makes `state` the start state. A previous start state loses its flag.
    pub fn set_start<X: Indexes>(&mut self, state: X) -> Result<(), AutomatonError> {
        let id = self.resolve(state)?;
        for (i, q) in self.states.iter_mut().enumerate() {
            if let Some(q) = q {
                q.is_start = i == id.index();
            }
        }
        Ok(())
    }

    /// Removes the start flag from every state.
    pub fn clear_start(&mut self) {
        for q in self.states.iter_mut().flatten() {
            q.is_start = false;
        }
    }

    /// Marks `state` as final or non-final.
    pub fn set_final<X: Indexes>(&mut self, state: X, is_final: bool) -> Result<(), AutomatonError> {
        let id = self.resolve(state)?;
        if let Some(q) = self.state_mut(id) {
            q.is_final = is_final;
        }
        Ok(())
    }

    /// Adds a transition from `from` to `to` on `symbol`. The payload has to fit the kind of
    /// the automaton. Parallel transitions are allowed, that is how nondeterminism arises.
    pub fn add_transition<X, Y, S>(
        &mut self,
        from: X,
        symbol: S,
        to: Y,
        payload: Payload,
    ) -> Result<(), AutomatonError>
    where
        X: Indexes,
        Y: Indexes,
        S: Into<Symbol>,
    {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        if payload.kind() != self.kind {
            return Err(AutomatonError::PayloadMismatch {
                kind: self.kind,
                payload,
            });
        }
        let transition = Transition::new(source, symbol.into(), target, payload);
        if let Some(q) = self.state_mut(source) {
            q.out.push(transition);
        }
        Ok(())
    }

    /// Removes every transition from `from` to `to` on `symbol` and returns how many were removed.
    pub fn remove_transitions<X, Y, S>(
        &mut self,
        from: X,
        symbol: S,
        to: Y,
    ) -> Result<usize, AutomatonError>
    where
        X: Indexes,
        Y: Indexes,
        S: Into<Symbol>,
    {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        let symbol = symbol.into();
        let Some(q) = self.state_mut(source) else {
            return Ok(0);
        };
        let before = q.out.len();
        q.out
            .retain(|t| !(t.symbol() == symbol && t.target() == target));
        Ok(before - q.out.len())
    }

    /// Adds `symbol` to the alphabet even if no transition uses it. Returns true if the symbol
    /// was not declared before.
    pub fn declare_symbol(&mut self, symbol: char) -> bool {
        self.declared.insert(symbol)
    }

    /// The symbols that were declared through [`Automaton::declare_symbol`].
    pub fn declared_symbols(&self) -> &Alphabet {
        &self.declared
    }
}
