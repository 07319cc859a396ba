use itertools::Itertools;

use crate::{math::Set, prelude::*};

impl Automaton {
    /// Returns the input alphabet, i.e. all distinct non-empty symbols that occur on some
    /// transition, together with the symbols declared through [`Automaton::declare_symbol`].
    pub fn alphabet(&self) -> Alphabet {
        let mut alphabet = self.declared_symbols().clone();
        alphabet.extend(self.transitions().filter_map(|t| t.symbol().as_char()));
        alphabet
    }

    /// Returns the handle of the start state, or [`AutomatonError::NoStartState`] if no state
    /// carries the start flag. This is in particular the case for an automaton without states.
    pub fn find_start(&self) -> Result<StateId, AutomatonError> {
        self.states()
            .find(|(_, q)| q.is_start())
            .map(|(id, _)| id)
            .ok_or(AutomatonError::NoStartState)
    }

    /// Returns true if at least one member of `set` is a final state.
    pub fn contains_final(&self, set: &StateSet) -> bool {
        set.iter()
            .any(|id| self.state(id).is_some_and(State::is_final))
    }

    /// Returns the set of all final states.
    pub fn final_states(&self) -> StateSet {
        self.states()
            .filter(|(_, q)| q.is_final())
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns true if there are no epsilon transitions and no state has two outgoing
    /// transitions on the same symbol.
    pub fn is_deterministic(&self) -> bool {
        self.states().all(|(_, q)| {
            let mut symbols = Set::default();
            q.transitions()
                .iter()
                .all(|t| !t.is_epsilon() && symbols.insert(t.symbol()))
        })
    }

    /// Returns true if the automaton is deterministic and every state has a transition on
    /// every symbol of the alphabet.
    pub fn is_total(&self) -> bool {
        let alphabet = self.alphabet();
        self.is_deterministic()
            && self.states().all(|(_, q)| {
                q.transitions()
                    .iter()
                    .filter_map(|t| t.symbol().as_char())
                    .sorted()
                    .eq(alphabet.universe())
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn alphabet_skips_empty_symbol() {
        let automaton = crate::tests::a_star_b_star();
        assert_eq!(automaton.alphabet().universe().collect::<String>(), "ab");

        let lonely = crate::tests::lonely_state();
        assert_eq!(lonely.alphabet().universe().collect::<String>(), "a");
        assert_eq!(lonely.transitions().count(), 0);
    }

    #[test]
    fn start_and_finals() {
        let automaton = crate::tests::forked();
        let q0 = automaton.find("q0").unwrap();
        let q1 = automaton.find("q1").unwrap();
        let q2 = automaton.find("q2").unwrap();
        assert_eq!(automaton.find_start(), Ok(q0));
        assert_eq!(automaton.final_states(), StateSet::singleton(q1));
        assert!(automaton.contains_final(&[q1, q2].into_iter().collect()));
        assert!(!automaton.contains_final(&[q0, q2].into_iter().collect()));
        assert!(!automaton.contains_final(&StateSet::new()));

        assert_eq!(
            Automaton::new(MachineKind::Finite).find_start(),
            Err(AutomatonError::NoStartState)
        );
    }

    #[test]
    fn determinism_and_totality() {
        assert!(!crate::tests::forked().is_deterministic());
        assert!(!crate::tests::a_star_b_star().is_deterministic());
        assert!(crate::tests::a_loop_with_b().is_deterministic());
        assert!(!crate::tests::a_loop_with_b().is_total());

        let total = Automaton::builder()
            .with_transitions([("q0", 'a', "q1"), ("q0", 'b', "q0")])
            .with_transitions([("q1", 'b', "q1"), ("q1", 'a', "q0")])
            .into_automaton("q0")
            .unwrap();
        assert!(total.is_total());
    }
}
