use itertools::Itertools;

use crate::prelude::*;

impl Automaton {
    /// Returns a string representation of the transition table. There is one row per state,
    /// where the start state is marked with `→` and final states are marked with `*`, and one
    /// column per alphabet symbol, preceded by a column for epsilon transitions if there are
    /// any. A cell lists the targets of all matching transitions, `-` stands for none.
    pub fn transition_table(&self) -> String {
        let mut columns = vec![];
        if self.transitions().any(Transition::is_epsilon) {
            columns.push(Symbol::Empty);
        }
        columns.extend(self.alphabet().universe().map(Symbol::Char));

        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(columns.iter().map(|s| s.to_string())),
        );
        for (id, state) in self.states() {
            let marker = match (state.is_start(), state.is_final()) {
                (true, true) => "→*",
                (true, false) => "→ ",
                (false, true) => " *",
                (false, false) => "  ",
            };
            let mut row = vec![format!("{marker} {}", state.name())];
            for symbol in &columns {
                let targets = self
                    .transitions_from(id)
                    .filter(|t| t.symbol() == *symbol)
                    .filter_map(|t| self.name(t.target()))
                    .join(", ");
                row.push(if targets.is_empty() {
                    "-".to_string()
                } else {
                    targets
                });
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl std::fmt::Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.transition_table())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn table_lists_targets() {
        let automaton = crate::tests::a_star_b_star();
        let table = automaton.transition_table();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("State"));
        assert!(lines[1].contains('ε'));
        assert!(lines[3].contains("→  q0"));
        assert!(lines[3].contains("q1"));
        assert!(lines[4].contains(" * q1"));
        assert!(lines[4].contains('-'));
        println!("{automaton}");
    }

    #[test]
    fn nondeterministic_cells() {
        let table = crate::tests::forked().to_string();
        assert!(table.contains("q1, q2"));
    }
}
