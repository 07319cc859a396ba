use tracing::trace;

use crate::prelude::*;

/// Generates a random nondeterministic automaton with `size` states named `q0`, `q1`, ... over
/// the first `symbols` letters, where at most 26 letters are used (see [`Alphabet::of_size`]).
/// State `q0` is the start state. For every pair of states and every letter, a transition is
/// inserted with probability `density`, and an epsilon transition between distinct states is
/// inserted with probability `epsilon`. Every state is final with probability one half.
///
/// The randomness comes from `fastrand`, so seeding it with [`fastrand::seed`] makes the result
/// reproducible.
pub fn generate_random_nfa(
    size: usize,
    symbols: usize,
    density: f64,
    epsilon: f64,
) -> Result<Automaton, AutomatonError> {
    let alphabet = Alphabet::of_size(symbols);
    let mut automaton = Automaton::new(MachineKind::Finite);
    let states = (0..size)
        .map(|i| automaton.add_state(format!("q{i}")))
        .collect::<Result<Vec<_>, _>>()?;

    for &source in &states {
        automaton.set_final(source, fastrand::bool())?;
        for &target in &states {
            for symbol in alphabet.universe() {
                if fastrand::f64() < density {
                    automaton.add_transition(source, symbol, target, Payload::Finite)?;
                }
            }
            if source != target && fastrand::f64() < epsilon {
                automaton.add_transition(source, Symbol::Empty, target, Payload::Finite)?;
            }
        }
    }
    if let Some(&start) = states.first() {
        automaton.set_start(start)?;
    }

    trace!(
        "generated random automaton with {} states and {} transitions",
        automaton.size(),
        automaton.transitions().count()
    );
    Ok(automaton)
}

/// Generate a random `String` over the universe of the `alphabet`.
/// The length of the `String` is drawn uniformly from the range `min_len..=max_len`. For an
/// empty alphabet, the empty word is returned.
pub fn generate_random_word(alphabet: &Alphabet, min_len: usize, max_len: usize) -> String {
    let charset: Vec<char> = alphabet.universe().collect();
    if charset.is_empty() {
        return String::new();
    }

    let length = fastrand::usize(min_len..=max_len);
    (0..length)
        .map(|_| charset[fastrand::usize(..charset.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_nfa_is_well_formed() {
        fastrand::seed(1);
        let automaton = generate_random_nfa(5, 3, 0.3, 0.1).unwrap();
        assert_eq!(automaton.size(), 5);
        assert!(automaton.validate().is_ok());
        assert_eq!(automaton.find_start(), Ok(automaton.find("q0").unwrap()));
        assert!(automaton
            .alphabet()
            .universe()
            .all(|c| ['a', 'b', 'c'].contains(&c)));
    }

    #[test]
    fn large_alphabets_are_clamped() {
        fastrand::seed(2);
        let automaton = generate_random_nfa(1, 30, 1.0, 0.0).unwrap();
        assert_eq!(automaton.alphabet().size(), 26);
        assert!(automaton.is_total());
        assert!(generate_random_nfa(0, 2, 0.5, 0.5).unwrap().is_empty());
    }

    #[test]
    fn random_words_respect_bounds() {
        let alphabet = Alphabet::of_size(2);
        for _ in 0..20 {
            let word = generate_random_word(&alphabet, 2, 5);
            assert!((2..=5).contains(&word.chars().count()));
            assert!(alphabet.spells(&word));
        }
        assert_eq!(generate_random_word(&Alphabet::default(), 1, 3), "");
    }
}
