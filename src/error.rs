use thiserror::Error;

use crate::automaton::{MachineKind, Payload};

/// Describes which structural invariant of an automaton is violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    /// A transition points to (or originates from) a state that does not exist.
    DanglingTransition {
        /// Name of the state that stores the transition.
        source: String,
        /// Name (or handle) of the missing state.
        target: String,
    },
    /// More than one state carries the start flag.
    MultipleStartStates(Vec<String>),
    /// Two states share a name.
    DuplicateName(String),
    /// A state name is empty.
    InvalidName(String),
    /// A transition is stored in the list of a state that is not its source.
    MisplacedTransition {
        /// Name of the state whose list contains the transition.
        owner: String,
        /// Name of the source recorded in the transition.
        source: String,
    },
}

impl std::fmt::Display for Malformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Malformation::DanglingTransition { source, target } => {
                write!(f, "transition from `{source}` leads to missing state `{target}`")
            }
            Malformation::MultipleStartStates(names) => {
                write!(f, "multiple start states: {}", names.join(", "))
            }
            Malformation::DuplicateName(name) => write!(f, "state name `{name}` is not unique"),
            Malformation::InvalidName(name) => write!(f, "state name {name:?} is not allowed"),
            Malformation::MisplacedTransition { owner, source } => write!(
                f,
                "state `{owner}` stores a transition originating in `{source}`"
            ),
        }
    }
}

/// The errors that can occur when editing an automaton, or when running one of the algorithms
/// on it. None of the operations leave partial results behind when they fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A structural invariant of the automaton is violated.
    #[error("malformed automaton: {0}")]
    MalformedAutomaton(Malformation),
    /// The automaton has no designated start state.
    #[error("automaton has no start state")]
    NoStartState,
    /// The subset construction would create more composite states than allowed.
    #[error("subset construction exceeds the limit of {limit} states")]
    ConversionTooLarge {
        /// The configured limit on the number of composite states.
        limit: usize,
    },
    /// A state that was referenced by name or handle does not exist.
    #[error("state `{0}` does not exist")]
    UnknownState(String),
    /// A state with the given name exists already.
    #[error("state `{0}` exists already")]
    DuplicateState(String),
    /// The given name cannot be used for a state.
    #[error("{0:?} is not a valid state name, names must be non-empty")]
    InvalidName(String),
    /// The payload of a transition does not fit the kind of machine.
    #[error("payload {payload:?} cannot be used in a {kind} machine")]
    PayloadMismatch {
        /// Kind of the automaton.
        kind: MachineKind,
        /// The offending payload.
        payload: Payload,
    },
}

impl From<Malformation> for AutomatonError {
    fn from(value: Malformation) -> Self {
        AutomatonError::MalformedAutomaton(value)
    }
}
