use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{math::Map, prelude::*};

/// The number of composite states after which [`SubsetConstruction::run`] gives up by default.
pub const DEFAULT_STATE_LIMIT: usize = 1 << 16;

/// Represents the subset construction applied to an automaton, which resolves nondeterminism by
/// operating on sets of states. The resulting automaton is deterministic and total: every state
/// has exactly one transition on each symbol of the alphabet.
///
/// Each state of the result stands for the set of states that the original automaton can be in
/// after reading some word, and it is named by the canonical label of that set (see
/// [`crate::label::label`]). Transitions that lead to the empty set are redirected into a single
/// non-final trap state named [`TRAP_LABEL`], which loops on every symbol. The trap state is only
/// created if it is needed.
///
/// # Example
/// ```
/// use automata_editor::prelude::*;
///
/// let nfa = Automaton::builder()
///     .with_final_states(["q1"])
///     .with_transitions([("q0", 'a', "q1"), ("q0", 'a', "q2")])
///     .into_automaton("q0")
///     .unwrap();
/// let dfa = SubsetConstruction::new(&nfa)
///     .with_state_limit(Some(16))
///     .run()
///     .unwrap();
/// assert!(dfa.is_total());
/// assert!(dfa.find("{q1,q2}").is_some());
/// assert!(dfa.find(TRAP_LABEL).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SubsetConstruction<'a> {
    automaton: &'a Automaton,
    limit: Option<usize>,
}

impl<'a> SubsetConstruction<'a> {
    /// Prepares the subset construction of `automaton` with a limit of [`DEFAULT_STATE_LIMIT`]
    /// composite states.
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            limit: Some(DEFAULT_STATE_LIMIT),
        }
    }

    /// Sets the maximal number of composite states, not counting the trap state. `None` removes
    /// the limit.
    pub fn with_state_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Explores the composite states reachable from the epsilon closure of the start state in
    /// breadth-first order and collects them into a new finite automaton. Fails if the input is
    /// malformed, has no start state or if the limit on the number of states is exceeded. In
    /// none of these cases a partial result is returned.
    pub fn run(&self) -> Result<Automaton, AutomatonError> {
        let nfa = self.automaton;
        nfa.validate()?;
        let alphabet = nfa.alphabet();
        let start = nfa.find_start()?;

        let mut dfa = Automaton::new(MachineKind::Finite);
        let mut seen: Map<StateSet, StateId> = Map::default();
        let mut queue = VecDeque::new();
        let mut missing = vec![];

        let initial = nfa.closure(&StateSet::singleton(start));
        let initial_id = self.discover(&mut dfa, &mut seen, &initial)?;
        dfa.set_start(initial_id)?;
        queue.push_back((initial, initial_id));

        while let Some((set, source)) = queue.pop_front() {
            for symbol in alphabet.universe() {
                let successor = nfa.successors(&set, symbol);
                if successor.is_empty() {
                    trace!("{} has no successor on {symbol}", nfa.label(&set));
                    missing.push((source, symbol));
                    continue;
                }
                let target = match seen.get(&successor) {
                    Some(&target) => target,
                    None => {
                        let target = self.discover(&mut dfa, &mut seen, &successor)?;
                        queue.push_back((successor, target));
                        target
                    }
                };
                dfa.add_transition(source, symbol, target, Payload::Finite)?;
            }
        }

        if !missing.is_empty() {
            debug!(
                "adding trap state for {} missing transitions",
                missing.len()
            );
            let trap = dfa.add_state(TRAP_LABEL)?;
            for symbol in alphabet.universe() {
                dfa.add_transition(trap, symbol, trap, Payload::Finite)?;
            }
            for (source, symbol) in missing {
                dfa.add_transition(source, symbol, trap, Payload::Finite)?;
            }
        }

        debug!(
            "subset construction turned {} states into {} states",
            nfa.size(),
            dfa.size()
        );
        Ok(dfa)
    }

    /// Creates the composite state for `set` in `dfa` and remembers it in `seen`.
    fn discover(
        &self,
        dfa: &mut Automaton,
        seen: &mut Map<StateSet, StateId>,
        set: &StateSet,
    ) -> Result<StateId, AutomatonError> {
        if let Some(limit) = self.limit {
            if seen.len() >= limit {
                return Err(AutomatonError::ConversionTooLarge { limit });
            }
        }
        let label = self.automaton.label(set);
        trace!("discovered composite state {label}");
        let id = dfa.add_state(label)?;
        dfa.set_final(id, self.automaton.contains_final(set))?;
        seen.insert(set.clone(), id);
        Ok(id)
    }
}

impl Automaton {
    /// Converts `self` into an equivalent deterministic and total automaton through the subset
    /// construction, see [`SubsetConstruction`] for details and for configuring the limit on the
    /// number of states.
    pub fn to_deterministic(&self) -> Result<Automaton, AutomatonError> {
        SubsetConstruction::new(self).run()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn target(dfa: &Automaton, from: &str, symbol: char) -> String {
        let from = dfa.find(from).unwrap();
        let targets: Vec<_> = dfa
            .transitions_from(from)
            .filter(|t| t.reads(symbol))
            .map(|t| dfa.name(t.target()).unwrap().to_string())
            .collect();
        assert_eq!(targets.len(), 1);
        targets[0].clone()
    }

    fn is_final(dfa: &Automaton, name: &str) -> bool {
        dfa.state(dfa.find(name).unwrap()).unwrap().is_final()
    }

    #[test_log::test]
    fn lonely_state_gets_trap() {
        let dfa = crate::tests::lonely_state().to_deterministic().unwrap();
        assert_eq!(dfa.size(), 2);
        assert_eq!(dfa.find_start(), Ok(dfa.find("{q0}").unwrap()));
        assert!(is_final(&dfa, "{q0}"));
        assert!(!is_final(&dfa, TRAP_LABEL));
        assert_eq!(target(&dfa, "{q0}", 'a'), TRAP_LABEL);
        assert_eq!(target(&dfa, TRAP_LABEL, 'a'), TRAP_LABEL);
        assert!(dfa.accepts(""));
        assert!(!dfa.accepts("a"));
    }

    #[test]
    fn composite_state_is_labelled_canonically() {
        let dfa = crate::tests::forked().to_deterministic().unwrap();
        assert_eq!(target(&dfa, "{q0}", 'a'), "{q1,q2}");
        assert!(is_final(&dfa, "{q1,q2}"));
        assert!(!is_final(&dfa, "{q0}"));
        assert_eq!(target(&dfa, "{q1,q2}", 'a'), TRAP_LABEL);
        assert_eq!(dfa.size(), 3);
    }

    #[test]
    fn missing_symbol_leads_to_trap() {
        let dfa = crate::tests::a_loop_with_b().to_deterministic().unwrap();
        assert_eq!(target(&dfa, "{q0}", 'a'), "{q0}");
        assert_eq!(target(&dfa, "{q0}", 'b'), TRAP_LABEL);
        assert_eq!(target(&dfa, TRAP_LABEL, 'b'), TRAP_LABEL);
        assert!(dfa.is_total());
    }

    #[test]
    fn total_automaton_needs_no_trap() {
        let nfa = Automaton::builder()
            .with_final_states(["q1"])
            .with_transitions([("q0", 'a', "q1"), ("q0", 'b', "q0"), ("q0", 'a', "q0")])
            .with_transitions([("q1", 'a', "q1"), ("q1", 'b', "q0")])
            .into_automaton("q0")
            .unwrap();
        let dfa = nfa.to_deterministic().unwrap();
        assert!(dfa.find(TRAP_LABEL).is_none());
        assert!(dfa.is_total());
        assert_eq!(target(&dfa, "{q0}", 'a'), "{q0,q1}");
    }

    #[test]
    fn epsilon_closure_of_start() {
        let dfa = crate::tests::a_star_b_star().to_deterministic().unwrap();
        assert!(is_final(&dfa, "{q0,q1}"));
        assert_eq!(target(&dfa, "{q0,q1}", 'a'), "{q0,q1}");
        assert_eq!(target(&dfa, "{q0,q1}", 'b'), "{q1}");
        assert_eq!(target(&dfa, "{q1}", 'a'), TRAP_LABEL);
        for (word, expected) in [("", true), ("aabb", true), ("ba", false)] {
            assert_eq!(dfa.accepts(word), expected);
        }
    }

    #[test]
    fn exponential_blowup() {
        let dfa = crate::tests::second_to_last_a().to_deterministic().unwrap();
        assert_eq!(dfa.size(), 4);
        assert!(dfa.find(TRAP_LABEL).is_none());
        assert!(is_final(&dfa, "{q0,q1,q2}"));
        assert!(is_final(&dfa, "{q0,q2}"));
    }

    #[test]
    fn no_start_state() {
        let mut nfa = crate::tests::forked();
        nfa.clear_start();
        assert_eq!(nfa.to_deterministic(), Err(AutomatonError::NoStartState));
        assert_eq!(
            Automaton::new(MachineKind::Finite).to_deterministic(),
            Err(AutomatonError::NoStartState)
        );
    }

    #[test]
    fn state_limit() {
        let nfa = crate::tests::second_to_last_a();
        assert_eq!(
            SubsetConstruction::new(&nfa)
                .with_state_limit(Some(3))
                .run(),
            Err(AutomatonError::ConversionTooLarge { limit: 3 })
        );
        assert!(SubsetConstruction::new(&nfa)
            .with_state_limit(Some(4))
            .run()
            .is_ok());
        assert!(SubsetConstruction::new(&nfa)
            .with_state_limit(None)
            .run()
            .is_ok());
    }

    #[test]
    fn conversion_is_reproducible() {
        let nfa = crate::tests::second_to_last_a();
        let first = nfa.to_deterministic().unwrap();
        let second = nfa.to_deterministic().unwrap();
        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn payload_is_ignored() {
        let pda = Automaton::builder()
            .with_kind(MachineKind::Pushdown)
            .with_final_states(["q1"])
            .with_edges([
                (
                    "q0",
                    Symbol::Char('a'),
                    Payload::Pushdown {
                        pop: Symbol::Empty,
                        push: vec!['A'],
                    },
                    "q1",
                ),
                (
                    "q0",
                    Symbol::Empty,
                    Payload::Pushdown {
                        pop: Symbol::Char('Z'),
                        push: vec![],
                    },
                    "q1",
                ),
            ])
            .into_automaton("q0")
            .unwrap();
        let dfa = pda.to_deterministic().unwrap();
        assert_eq!(dfa.kind(), MachineKind::Finite);
        assert!(is_final(&dfa, "{q0,q1}"));
        assert_eq!(target(&dfa, "{q0,q1}", 'a'), "{q1}");
    }

    #[test]
    fn names_with_separators_get_distinct_labels() {
        let nfa = Automaton::builder()
            .with_final_states(["a,b"])
            .with_transitions([("s", 'x', "a"), ("s", 'x', "b"), ("s", 'y', "a,b")])
            .into_automaton("s")
            .unwrap();
        assert!(nfa.validate().is_ok());
        let dfa = nfa.to_deterministic().unwrap();
        assert_eq!(dfa.size(), 4);
        assert_eq!(target(&dfa, "{s}", 'x'), "{a,b}");
        assert_eq!(target(&dfa, "{s}", 'y'), r"{a\,b}");
        assert!(is_final(&dfa, r"{a\,b}"));
        assert!(!is_final(&dfa, "{a,b}"));
    }

    #[test]
    fn converted_automaton_converts_again() {
        let dfa = crate::tests::forked().to_deterministic().unwrap();
        let again = dfa.to_deterministic().unwrap();
        assert_eq!(again.size(), dfa.size());
        assert_eq!(target(&again, r"{\{q0\}}", 'a'), r"{\{q1\,q2\}}");
        assert!(again.accepts("a"));
        assert!(!again.accepts("aa"));
    }

    #[test]
    fn converted_automaton_is_independent() {
        let mut nfa = crate::tests::forked();
        let dfa = nfa.to_deterministic().unwrap();
        nfa.remove_state("q1").unwrap();
        assert!(dfa.accepts("a"));
        assert!(dfa.validate().is_ok());
    }

    #[test_log::test]
    #[cfg(feature = "random")]
    fn random_conversions_preserve_language() {
        use crate::random::{generate_random_nfa, generate_random_word};

        fastrand::seed(4711);
        for _ in 0..40 {
            let nfa = generate_random_nfa(6, 2, 0.25, 0.15).unwrap();
            let dfa = nfa.to_deterministic().unwrap();
            assert!(dfa.is_total());
            assert!(dfa.is_deterministic());
            assert_eq!(dfa.alphabet(), nfa.alphabet());
            assert_eq!(nfa.to_deterministic().unwrap().records(), dfa.records());

            let alphabet = nfa.alphabet();
            for _ in 0..30 {
                let word = generate_random_word(&alphabet, 0, 8);
                assert_eq!(nfa.accepts(&word), dfa.accepts(&word), "on {word:?}");
            }
        }
    }
}
