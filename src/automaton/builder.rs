use crate::{math::Set, prelude::*};

/// Helper struct for the construction of automata. It collects state names, final states and
/// transitions, and creates the states in the order in which they are first mentioned.
///
/// # Example
///
/// We want to create an automaton with two states `q0` and `q1` over the alphabet `['a', 'b']`
/// with the following transitions:
/// - From state `q0` to state `q0` on symbol 'a'
/// - From state `q0` to state `q1` on symbol 'b'
/// - From state `q1` to state `q0` on the empty symbol
///
/// Further, `q0` should be the start state and `q1` should be final.
/// ```
/// use automata_editor::prelude::*;
///
/// let automaton = Automaton::builder()
///     .with_final_states(["q1"])
///     .with_transitions([("q0", 'a', "q0"), ("q0", 'b', "q1")])
///     .with_transitions([("q1", Symbol::Empty, "q0")])
///     .into_automaton("q0")
///     .unwrap();
/// assert!(automaton.accepts("aab"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    kind: MachineKind,
    symbols: Vec<char>,
    mentioned: Vec<String>,
    finals: Vec<String>,
    edges: Vec<(String, Symbol, Payload, String)>,
}

impl AutomatonBuilder {
    /// Sets the kind of machine that is built. Defaults to [`MachineKind::Finite`].
    pub fn with_kind(mut self, kind: MachineKind) -> Self {
        self.kind = kind;
        self
    }

    /// By default, the alphabet of the built automaton consists of the symbols that appear on
    /// at least one transition. This method can be used to force additional alphabet symbols
    /// to appear.
    pub fn with_alphabet_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.symbols.extend(symbols);
        self
    }

    /// Adds states that are neither start nor final.
    pub fn with_states<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.mentioned.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds states and marks them as final.
    pub fn with_final_states<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        for name in names {
            let name = name.into();
            self.mentioned.push(name.clone());
            self.finals.push(name);
        }
        self
    }

    /// Adds transitions of the form `(from, symbol, to)` without payload. This only makes sense
    /// for finite automata, use [`AutomatonBuilder::with_edges`] for the other kinds.
    pub fn with_transitions<I, F, S, T>(self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (F, S, T)>,
        F: Into<String>,
        S: Into<Symbol>,
        T: Into<String>,
    {
        self.with_edges(
            transitions
                .into_iter()
                .map(|(from, symbol, to)| (from, symbol, Payload::Finite, to)),
        )
    }

    /// Adds transitions of the form `(from, symbol, payload, to)`.
    pub fn with_edges<I, F, S, T>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (F, S, Payload, T)>,
        F: Into<String>,
        S: Into<Symbol>,
        T: Into<String>,
    {
        for (from, symbol, payload, to) in edges {
            let (from, to) = (from.into(), to.into());
            self.mentioned.push(from.clone());
            self.mentioned.push(to.clone());
            self.edges.push((from, symbol.into(), payload, to));
        }
        self
    }

    /// Builds the automaton and makes `start` its start state. If `start` was not mentioned
    /// before, it is created as the last state.
    pub fn into_automaton<N: Into<String>>(self, start: N) -> Result<Automaton, AutomatonError> {
        let start = start.into();
        let mut automaton = self.with_states([start.clone()]).into_automaton_without_start()?;
        automaton.set_start(&start)?;
        Ok(automaton)
    }

    /// Builds the automaton without designating a start state.
    pub fn into_automaton_without_start(self) -> Result<Automaton, AutomatonError> {
        let mut automaton = Automaton::new(self.kind);
        let mut created = Set::default();
        for name in self.mentioned {
            if created.insert(name.clone()) {
                automaton.add_state(name)?;
            }
        }
        for name in &self.finals {
            automaton.set_final(name, true)?;
        }
        for (from, symbol, payload, to) in self.edges {
            automaton.add_transition(&from, symbol, &to, payload)?;
        }
        for symbol in self.symbols {
            automaton.declare_symbol(symbol);
        }
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn states_in_order_of_first_mention() {
        let automaton = Automaton::builder()
            .with_states(["z"])
            .with_final_states(["q2"])
            .with_transitions([("q1", 'a', "q2"), ("q2", 'b', "z")])
            .into_automaton("start")
            .unwrap();
        let names: Vec<_> = automaton.states().map(|(_, q)| q.name()).collect();
        assert_eq!(names, vec!["z", "q2", "q1", "start"]);
        assert_eq!(automaton.find_start(), Ok(automaton.find("start").unwrap()));
        assert!(automaton.state(automaton.find("q2").unwrap()).unwrap().is_final());
    }

    #[test]
    fn pushdown_edges() {
        let automaton = Automaton::builder()
            .with_kind(MachineKind::Pushdown)
            .with_edges([(
                "q0",
                'a',
                Payload::Pushdown {
                    pop: Symbol::Empty,
                    push: vec!['A'],
                },
                "q0",
            )])
            .into_automaton("q0")
            .unwrap();
        assert_eq!(automaton.kind(), MachineKind::Pushdown);
        assert!(automaton
            .transitions()
            .all(|t| t.payload().kind() == MachineKind::Pushdown));

        let mismatch = Automaton::builder()
            .with_kind(MachineKind::Turing)
            .with_transitions([("q0", 'a', "q0")])
            .into_automaton("q0");
        assert!(matches!(
            mismatch,
            Err(AutomatonError::PayloadMismatch { .. })
        ));
    }

    #[test]
    fn invalid_names_are_reported() {
        let result = Automaton::builder()
            .with_transitions([("q0", 'a', "")])
            .into_automaton("q0");
        assert_eq!(result, Err(AutomatonError::InvalidName(String::new())));
    }
}
