use crate::Symbol;

use super::{MachineKind, StateId};

/// Direction in which the head of a Turing machine moves after a transition.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Move one cell to the left.
    Left,
    /// Move one cell to the right.
    Right,
    /// Keep the head in place.
    Stay,
}

/// Additional data attached to a transition that only matters for some kinds of machines.
/// The algorithms of this crate never look at it.
#[derive(Clone, Hash, PartialEq, Eq, Debug, Default)]
pub enum Payload {
    /// Transitions of finite automata carry nothing beyond their symbol.
    #[default]
    Finite,
    /// Stack operation of a pushdown automaton: pop `pop` (or nothing if it is
    /// [`Symbol::Empty`]) and push the symbols in `push`, the first of which ends up on top.
    Pushdown {
        /// The symbol that has to be on top of the stack.
        pop: Symbol,
        /// The symbols that are pushed.
        push: Vec<char>,
    },
    /// Tape operation of a Turing machine.
    Turing {
        /// The symbol that is written to the current cell.
        write: char,
        /// Where the head moves afterwards.
        direction: Direction,
    },
}

impl Payload {
    /// The kind of machine this payload belongs to.
    pub fn kind(&self) -> MachineKind {
        match self {
            Payload::Finite => MachineKind::Finite,
            Payload::Pushdown { .. } => MachineKind::Pushdown,
            Payload::Turing { .. } => MachineKind::Turing,
        }
    }
}

/// A transition from `source` to `target` that consumes `symbol`.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Transition {
    source: StateId,
    symbol: Symbol,
    target: StateId,
    payload: Payload,
}

impl Transition {
    pub(super) fn new(source: StateId, symbol: Symbol, target: StateId, payload: Payload) -> Self {
        Self {
            source,
            symbol,
            target,
            payload,
        }
    }

    /// The state in which the transition originates.
    pub fn source(&self) -> StateId {
        self.source
    }

    /// The symbol that is consumed, [`Symbol::Empty`] for epsilon transitions.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The state that is reached.
    pub fn target(&self) -> StateId {
        self.target
    }

    /// The machine specific payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns true if the transition is taken without reading input.
    pub fn is_epsilon(&self) -> bool {
        self.symbol.is_empty()
    }

    /// Returns true if the transition is taken when reading `c`.
    pub fn reads(&self, c: char) -> bool {
        self.symbol.matches(c)
    }
}
