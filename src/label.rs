use std::cmp::Ordering;

use itertools::Itertools;

use crate::{Automaton, StateSet};

/// Label of the empty set of states, which is the name of the trap state created by the subset
/// construction. Since state names cannot be empty, no other set receives this label.
pub const TRAP_LABEL: &str = "{}";

/// Splits `name` into an alphabetic prefix and a decimal suffix if it has the form of `q0`,
/// `state12` and the like.
fn numbered(name: &str) -> Option<(&str, &str)> {
    let split = name.find(|c: char| c.is_ascii_digit())?;
    let (prefix, digits) = name.split_at(split);
    if prefix.is_empty()
        || !prefix.chars().all(char::is_alphabetic)
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    Some((prefix, digits))
}

/// Prefixes the characters that structure a label with a backslash, so that every name can be
/// recovered from the label.
fn escaped(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '\\' | '{' | '}' | ',') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Compares two decimal numbers given as digit strings of arbitrary length.
fn cmp_digits(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// The order in which names appear in labels. Names of the form letters followed by digits
/// (e.g. `q2`, `q10`) are ordered by their number, so `q2` comes before `q10`, and ties are
/// broken by comparing the full names. All other names come afterwards in lexicographic order.
///
/// ```
/// use automata_editor::prelude::*;
///
/// let mut names = vec!["start", "q10", "p2", "q2"];
/// names.sort_by(|a, b| natural_cmp(a, b));
/// assert_eq!(names, vec!["p2", "q2", "q10", "start"]);
/// ```
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    match (numbered(left), numbered(right)) {
        (Some((_, l)), Some((_, r))) => cmp_digits(l, r).then_with(|| left.cmp(right)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => left.cmp(right),
    }
}

/// Computes the canonical label of a set of state names: the names are sorted by
/// [`natural_cmp`], separated by commas and enclosed in braces. Two collections with the same
/// members therefore always receive the same label, regardless of the order in which they are
/// given. The empty collection is labelled [`TRAP_LABEL`].
///
/// Backslashes, braces and commas inside a name are escaped with a backslash, so collections
/// with different members never share a label.
///
/// ```
/// use automata_editor::prelude::*;
///
/// assert_eq!(label(["q2", "q1", "q2"]), "{q1,q2}");
/// assert_eq!(label(["a,b"]), r"{a\,b}");
/// assert_eq!(label(Vec::<String>::new()), TRAP_LABEL);
/// ```
pub fn label<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names
        .into_iter()
        .sorted_by(|l, r| natural_cmp(l.as_ref(), r.as_ref()))
        .collect();
    format!("{{{}}}", names.iter().map(|n| n.as_ref()).dedup().map(escaped).join(","))
}

impl Automaton {
    /// Computes the canonical label of a set of states of `self`, see [`label`]. Handles in
    /// `set` that do not belong to a state are skipped.
    pub fn label(&self, set: &StateSet) -> String {
        label(set.iter().filter_map(|id| self.name(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_names_compare_by_number() {
        assert_eq!(natural_cmp("q2", "q10"), Ordering::Less);
        assert_eq!(natural_cmp("q10", "q2"), Ordering::Greater);
        assert_eq!(natural_cmp("q007", "q7"), Ordering::Less);
        assert_eq!(natural_cmp("p3", "q3"), Ordering::Less);
        assert_eq!(natural_cmp("q3", "q3"), Ordering::Equal);
        assert_eq!(
            natural_cmp("q123456789012345678901234567890", "q99"),
            Ordering::Greater
        );
    }

    #[test]
    fn other_names_are_lexicographic() {
        assert_eq!(natural_cmp("accept", "reject"), Ordering::Less);
        assert_eq!(natural_cmp("q1x", "q1"), Ordering::Greater);
        assert_eq!(natural_cmp("10", "q0"), Ordering::Greater);
        assert_eq!(natural_cmp("q_1", "q_0"), Ordering::Greater);
    }

    #[test]
    fn order_is_total_on_mixed_names() {
        let mut names = vec!["q10a", "q10", "q2", "b", "a7", "q02", "x"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["q02", "q2", "a7", "q10", "b", "q10a", "x"]);
    }

    #[test]
    fn labels_are_canonical() {
        assert_eq!(label(["q10", "q2", "q1"]), "{q1,q2,q10}");
        assert_eq!(label(["q1", "q10", "q2"]), label(["q2", "q1", "q10"]));
        assert_eq!(label(["q0"]), "{q0}");
        assert_eq!(label::<_, &str>([]), TRAP_LABEL);
    }

    #[test]
    fn separators_in_names_are_escaped() {
        assert_eq!(label(["a,b"]), r"{a\,b}");
        assert_ne!(label(["a,b"]), label(["a", "b"]));
        assert_eq!(label(["{q0}", "q1"]), r"{q1,\{q0\}}");
        assert_eq!(label([r"a\"]), r"{a\\}");
        assert_ne!(label([r"a\", "b"]), label([r"a\,b"]));
        assert_ne!(label(["}"]), TRAP_LABEL);
    }

    #[test]
    fn labels_of_state_sets() {
        let automaton = crate::tests::forked();
        let set = ["q2", "q1"]
            .into_iter()
            .filter_map(|n| automaton.find(n))
            .collect();
        assert_eq!(automaton.label(&set), "{q1,q2}");
        assert_eq!(automaton.label(&StateSet::new()), TRAP_LABEL);
    }
}
