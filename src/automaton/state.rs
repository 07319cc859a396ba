use super::Transition;

/// A state of an [`super::Automaton`]. It stores the unique name of the state, whether the state
/// is the start state and whether it is final, as well as the list of transitions leaving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub(super) name: String,
    pub(super) is_start: bool,
    pub(super) is_final: bool,
    pub(super) out: Vec<Transition>,
}

impl State {
    /// Creates a state that is neither start nor final and has no outgoing transitions.
    pub(super) fn new(name: String) -> Self {
        Self {
            name,
            is_start: false,
            is_final: false,
            out: vec![],
        }
    }

    /// The name of the state, unique within its automaton.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the start state.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Whether this state is final (accepting).
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// The outgoing transitions in the order in which they were added.
    pub fn transitions(&self) -> &[Transition] {
        &self.out
    }
}
