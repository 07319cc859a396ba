use crate::prelude::*;

/// State names must be non-empty, so that no set of states other than the empty one is labelled
/// like the trap state.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}

impl Automaton {
    /// Checks the structural invariants of the automaton and reports the first violation as
    /// [`AutomatonError::MalformedAutomaton`]. Transitions with a payload that does not fit the
    /// kind of the automaton are reported as [`AutomatonError::PayloadMismatch`].
    ///
    /// The editing operations maintain all invariants, so this only fails if an automaton was
    /// put together in some other way.
    pub fn validate(&self) -> Result<(), AutomatonError> {
        let mut starts = vec![];
        for (id, q) in self.states() {
            if !is_valid_name(q.name()) {
                return Err(Malformation::InvalidName(q.name().to_string()).into());
            }
            if self.find(q.name()) != Some(id) {
                return Err(Malformation::DuplicateName(q.name().to_string()).into());
            }
            if q.is_start() {
                starts.push(q.name().to_string());
            }
            for t in q.transitions() {
                if t.source() != id {
                    return Err(Malformation::MisplacedTransition {
                        owner: q.name().to_string(),
                        source: self
                            .name(t.source())
                            .map_or_else(|| format!("{:?}", t.source()), str::to_string),
                    }
                    .into());
                }
                if self.state(t.target()).is_none() {
                    return Err(Malformation::DanglingTransition {
                        source: q.name().to_string(),
                        target: format!("{:?}", t.target()),
                    }
                    .into());
                }
                if t.payload().kind() != self.kind() {
                    return Err(AutomatonError::PayloadMismatch {
                        kind: self.kind(),
                        payload: t.payload().clone(),
                    });
                }
            }
        }
        if self.names.len() != self.states().count() {
            let name = self
                .names
                .iter()
                .find(|(name, id)| self.name(**id) != Some(name.as_str()))
                .map(|(name, _)| name.clone())
                .unwrap_or_default();
            return Err(Malformation::DuplicateName(name).into());
        }
        if starts.len() > 1 {
            return Err(Malformation::MultipleStartStates(starts).into());
        }
        Ok(())
    }
}
