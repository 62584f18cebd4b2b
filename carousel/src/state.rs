use crate::{Boundary, IndexTranslator};

/// Transition phase of a [`PositionState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    /// A transition is in flight. `acknowledged` flips once the surface reports
    /// "transition-started".
    Transitioning { acknowledged: bool },
}

/// Current item/dot plus the single-flight lock.
///
/// Only the engine mutates it; while `Transitioning`, `begin` refuses every new transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionState {
    current_index: usize,
    current_dot: usize,
    phase: Phase,
}

impl PositionState {
    pub(crate) fn new(current_index: usize, current_dot: usize) -> Self {
        Self {
            current_index,
            current_dot,
            phase: Phase::Idle,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_dot(&self) -> usize {
        self.current_dot
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Enters `Transitioning` towards `index`/`dot`. Returns `false` (and changes nothing) when
    /// a transition is already in flight.
    pub(crate) fn begin(&mut self, index: usize, dot: usize) -> bool {
        if self.animating() {
            return false;
        }
        self.current_index = index;
        self.current_dot = dot;
        self.phase = Phase::Transitioning {
            acknowledged: false,
        };
        true
    }

    pub(crate) fn acknowledge(&mut self) -> bool {
        match self.phase {
            Phase::Transitioning { acknowledged } => {
                self.phase = Phase::Transitioning { acknowledged: true };
                !acknowledged
            }
            Phase::Idle => false,
        }
    }

    pub(crate) fn finish(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Wraps a dot that stepped onto a sentinel back into `dot_start..=dot_end`.
    ///
    /// Returns the new index when the position moved.
    pub(crate) fn reset_dot(&mut self, translator: &IndexTranslator) -> Option<usize> {
        let table = translator.table();
        let dot = if self.current_dot > table.dot_end() {
            table.dot_start()
        } else if self.current_dot < table.dot_start() {
            table.dot_end()
        } else {
            return None;
        };
        let index = translator.item_of(dot).ok()?;
        self.current_dot = dot;
        if index == self.current_index {
            return None;
        }
        self.current_index = index;
        Some(index)
    }

    /// Relocates a clone index onto its real equivalent (infinite tables only).
    ///
    /// Returns the new index when the position moved.
    pub(crate) fn reset_index(&mut self, translator: &IndexTranslator) -> Option<usize> {
        if !translator.table().infinite() || translator.is_real(self.current_index) {
            return None;
        }
        let index = translator.clone_equivalent(self.current_index);
        self.current_index = index;
        Some(index)
    }

    /// Neutral state: item 0, dot 0, idle.
    pub(crate) fn clear(&mut self) {
        *self = Self::new(0, 0);
    }
}

/// A lightweight snapshot of the engine position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSnapshot {
    pub current_index: usize,
    pub current_dot: usize,
    pub animating: bool,
    pub boundary: Boundary,
    /// 1-based number of the real item at `current_index`.
    pub item_number: usize,
}
