//! Core of a visual editor for finite automata.
//!
//! The central type is [`Automaton`], an arena of states that are addressed through stable
//! [`StateId`] handles. Each state has a unique name, may be flagged as the (unique) start state
//! and as final, and owns the list of its outgoing transitions. A transition consumes a [`Symbol`],
//! which is either a concrete character or the reserved [`Symbol::Empty`] denoting an epsilon
//! transition. Pushdown and Turing machines are supported in the sense that their transitions can
//! carry an additional [`Payload`] (stack operations or tape operations), which the algorithms in
//! this crate deliberately ignore.
//!
//! On top of the graph, the crate provides
//! - the epsilon closure of sets of states, see [`Automaton::closure`],
//! - simulation of an input word on the (possibly nondeterministic) automaton, see
//!   [`Automaton::accepts`] and [`Automaton::simulate`],
//! - the subset construction, which turns a nondeterministic automaton into an equivalent
//!   total deterministic one, see [`Automaton::to_deterministic`] and [`SubsetConstruction`].
//!
//! All algorithms are pure functions of a borrowed automaton. The editing layer owns the
//! automaton and mutates it through methods like [`Automaton::add_state`] or
//! [`Automaton::add_transition`], which maintain the structural invariants.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use automata_editor::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Symbol},
        automaton::{
            Automaton, AutomatonBuilder, Direction, Indexes, MachineKind, Payload, Snapshot,
            State, StateId, StateRecord, Transition, TransitionRecord,
        },
        determinization::{SubsetConstruction, DEFAULT_STATE_LIMIT},
        error::{AutomatonError, Malformation},
        label::{label, natural_cmp, TRAP_LABEL},
        simulation::Run,
        state_set::StateSet,
    };
}

/// Type aliases for the hash based collections used throughout the crate.
pub mod math;

/// Errors that can be produced when editing or analysing an automaton.
pub mod error;
pub use error::{AutomatonError, Malformation};

/// Symbols and alphabets.
pub mod alphabet;
pub use alphabet::{Alphabet, Symbol};

/// The automaton graph together with its editing operations.
pub mod automaton;
pub use automaton::{Automaton, MachineKind, Payload, StateId};

/// Sets of states as they occur during closure computation, simulation and determinization.
pub mod state_set;
pub use state_set::StateSet;

/// Canonical naming of sets of states.
pub mod label;

/// Computation of epsilon closures.
pub mod closure;

/// Simulation of input words.
pub mod simulation;

/// Conversion of nondeterministic automata into deterministic ones.
pub mod determinization;
pub use determinization::SubsetConstruction;

/// Rendering of transition tables.
pub mod table;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;
