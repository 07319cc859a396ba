use tracing::{trace, warn};

use crate::{Automaton, StateSet};

/// The outcome of simulating an input word. It records the configuration, i.e. the set of
/// current states, before the first symbol and after every symbol that was read. A run stops
/// early as soon as the configuration becomes empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    configurations: Vec<StateSet>,
    length: usize,
    accepted: bool,
}

impl Run {
    fn rejected(length: usize) -> Self {
        Self {
            configurations: vec![],
            length,
            accepted: false,
        }
    }

    /// Returns true if the word was accepted.
    pub fn is_accepting(&self) -> bool {
        self.accepted
    }

    /// The configurations that were visited. The first entry is the closure of the start
    /// state, each following entry corresponds to one consumed symbol. The list is empty if
    /// there is no start state.
    pub fn configurations(&self) -> &[StateSet] {
        &self.configurations
    }

    /// The configuration after the last consumed symbol.
    pub fn reached(&self) -> Option<&StateSet> {
        self.configurations.last()
    }

    /// Number of symbols that were consumed before the run ended.
    pub fn consumed(&self) -> usize {
        self.configurations.len().saturating_sub(1)
    }

    /// Returns true if the whole word could be read, i.e. the run did not die early.
    pub fn is_complete(&self) -> bool {
        !self.configurations.is_empty()
            && self.consumed() == self.length
            && self.reached().is_some_and(|c| !c.is_empty() || self.length == 0)
    }
}

impl Automaton {
    /// Simulates `input` on `self`, keeping track of all states the automaton can be in. This
    /// works for deterministic and nondeterministic automata alike. An automaton without states
    /// accepts nothing. The same holds for an automaton without start state.
    pub fn simulate(&self, input: &str) -> Run {
        let length = input.chars().count();
        let start = match self.find_start() {
            Ok(start) => start,
            Err(_) => {
                if !self.is_empty() {
                    warn!("simulating automaton without start state, rejecting input");
                }
                return Run::rejected(length);
            }
        };

        let mut current = self.closure(&StateSet::singleton(start));
        let mut configurations = vec![current.clone()];
        for symbol in input.chars() {
            current = self.successors(&current, symbol);
            trace!("read {symbol}, now in {}", self.label(&current));
            configurations.push(current.clone());
            if current.is_empty() {
                return Run {
                    configurations,
                    length,
                    accepted: false,
                };
            }
        }

        Run {
            accepted: self.contains_final(&current),
            configurations,
            length,
        }
    }

    /// Decides whether `input` is accepted, see [`Automaton::simulate`].
    pub fn accepts(&self, input: &str) -> bool {
        self.simulate(input).is_accepting()
    }
}
