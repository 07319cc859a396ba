use tracing::trace;

use crate::{math::Set, prelude::*};

/// A transition in a [`StateRecord`]. The target is referred to by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionRecord {
    /// The consumed symbol.
    pub symbol: Symbol,
    /// Name of the target state.
    pub target: String,
    /// Machine specific payload.
    pub payload: Payload,
}

/// Plain description of a state and its outgoing transitions, referring to other states only by
/// name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateRecord {
    /// Unique name of the state.
    pub name: String,
    /// Whether the state is the start state.
    pub is_start: bool,
    /// Whether the state is final.
    pub is_final: bool,
    /// Outgoing transitions in insertion order.
    pub transitions: Vec<TransitionRecord>,
}

/// A faithful snapshot of an [`Automaton`], which is what persistence and undo/redo layers
/// store. Restoring it with [`Automaton::from_records`] yields an automaton with the same states,
/// transitions and alphabet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    /// Symbols declared through [`Automaton::declare_symbol`].
    pub alphabet: Alphabet,
    /// The states in ascending order of their handles.
    pub states: Vec<StateRecord>,
}

impl Automaton {
    /// Produces a snapshot of the declared symbols and of all states in ascending order of their
    /// handles.
    pub fn records(&self) -> Snapshot {
        let states = self
            .states()
            .map(|(_, q)| StateRecord {
                name: q.name().to_string(),
                is_start: q.is_start(),
                is_final: q.is_final(),
                transitions: q
                    .transitions()
                    .iter()
                    .map(|t| TransitionRecord {
                        symbol: t.symbol(),
                        target: self.name(t.target()).unwrap_or_default().to_string(),
                        payload: t.payload().clone(),
                    })
                    .collect(),
            })
            .collect();
        Snapshot {
            alphabet: self.declared_symbols().clone(),
            states,
        }
    }

    /// Rebuilds an automaton from a snapshot. Records that do not describe a well-formed
    /// automaton are rejected with [`AutomatonError::MalformedAutomaton`], payloads that do not
    /// fit `kind` with [`AutomatonError::PayloadMismatch`].
    pub fn from_records(
        kind: MachineKind,
        snapshot: Snapshot,
    ) -> Result<Automaton, AutomatonError> {
        let Snapshot {
            alphabet,
            states: records,
        } = snapshot;
        let mut automaton = Automaton::new(kind);
        for symbol in alphabet.universe() {
            automaton.declare_symbol(symbol);
        }

        let mut seen = Set::default();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(Malformation::DuplicateName(record.name.clone()).into());
            }
            let id = automaton
                .add_state(record.name.clone())
                .map_err(|_| Malformation::InvalidName(record.name.clone()))?;
            automaton.set_final(id, record.is_final)?;
        }

        let starts: Vec<_> = records
            .iter()
            .filter(|r| r.is_start)
            .map(|r| r.name.clone())
            .collect();
        match starts.as_slice() {
            [] => {}
            [start] => automaton.set_start(start)?,
            _ => return Err(Malformation::MultipleStartStates(starts).into()),
        }

        for record in records {
            for transition in record.transitions {
                if automaton.find(&transition.target).is_none() {
                    return Err(Malformation::DanglingTransition {
                        source: record.name,
                        target: transition.target,
                    }
                    .into());
                }
                automaton.add_transition(
                    &record.name,
                    transition.symbol,
                    &transition.target,
                    transition.payload,
                )?;
            }
        }

        trace!(
            "restored automaton with {} states and {} transitions",
            automaton.size(),
            automaton.transitions().count()
        );
        Ok(automaton)
    }
}
