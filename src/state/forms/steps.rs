//! Wizard step layout and navigation

use super::field::FieldId;
use std::collections::BTreeSet;
use thiserror::Error;

/// Problems with a custom step grouping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("a form needs at least one step")]
    NoSteps,
    #[error("step {0} has no fields")]
    EmptyStep(usize),
    #[error("field `{0}` appears more than once")]
    DuplicateField(FieldId),
    #[error("field `{0}` is not placed on any step")]
    MissingField(FieldId),
}

/// Which fields are shown on which step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLayout {
    steps: Vec<Vec<FieldId>>,
}

impl StepLayout {
    /// Build a layout that places every field exactly once
    pub fn new(steps: Vec<Vec<FieldId>>) -> Result<Self, LayoutError> {
        if steps.is_empty() {
            return Err(LayoutError::NoSteps);
        }
        let mut seen = BTreeSet::new();
        for (index, step) in steps.iter().enumerate() {
            if step.is_empty() {
                return Err(LayoutError::EmptyStep(index + 1));
            }
            for id in step {
                if !seen.insert(*id) {
                    return Err(LayoutError::DuplicateField(*id));
                }
            }
        }
        if let Some(missing) = FieldId::ALL.iter().find(|id| !seen.contains(id)) {
            return Err(LayoutError::MissingField(*missing));
        }
        Ok(Self { steps })
    }

    /// Whole form on one screen
    pub fn single_step() -> Self {
        Self {
            steps: vec![FieldId::ALL.to_vec()],
        }
    }

    /// Contact details first, company and consent second
    pub fn multi_step() -> Self {
        Self {
            steps: vec![
                vec![FieldId::FullName, FieldId::Email, FieldId::Phone],
                vec![FieldId::CompanyName, FieldId::Consent],
            ],
        }
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Fields of a 1-based step (empty when out of range)
    pub fn fields(&self, step: usize) -> &[FieldId] {
        step.checked_sub(1)
            .and_then(|i| self.steps.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 1-based step that shows `field`
    pub fn step_of(&self, field: FieldId) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.contains(&field))
            .map(|i| i + 1)
    }
}

impl Default for StepLayout {
    fn default() -> Self {
        Self::multi_step()
    }
}

/// Current position in the wizard: `1 <= current <= total` always
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    current: usize,
    total: usize,
}

impl StepState {
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Fraction of the wizard behind the user, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.total == 1 {
            return 1.0;
        }
        (self.current - 1) as f64 / (self.total - 1) as f64
    }
}

/// Owns the step position and the "completed" markers of the progress bar
#[derive(Debug, Clone)]
pub struct StepController {
    state: StepState,
    completed: BTreeSet<usize>,
}

impl StepController {
    pub fn new(total_steps: usize) -> Self {
        Self {
            state: StepState::new(total_steps),
            completed: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> StepState {
        self.state
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn is_completed(&self, step: usize) -> bool {
        self.completed.contains(&step)
    }

    /// Mark the current step done and move forward if possible.
    ///
    /// Callers validate first. Returns the new step when it changed.
    pub fn advance(&mut self) -> Option<usize> {
        self.completed.insert(self.state.current);
        if self.state.current < self.state.total {
            self.state.current += 1;
            tracing::debug!(step = self.state.current, "advanced to step");
            Some(self.state.current)
        } else {
            None
        }
    }

    /// Move back one step. Completed markers are kept.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.state.current > 1 {
            self.state.current -= 1;
            tracing::debug!(step = self.state.current, "returned to step");
            Some(self.state.current)
        } else {
            None
        }
    }

    /// Back to step 1 with no markers
    pub fn reset(&mut self) {
        self.state.current = 1;
        self.completed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod layout {
        use super::*;

        #[test]
        fn test_builtin_layouts_cover_every_field() {
            for layout in [StepLayout::single_step(), StepLayout::multi_step()] {
                let steps = layout.steps.clone();
                assert_eq!(StepLayout::new(steps), Ok(layout));
            }
        }

        #[test]
        fn test_rejects_empty_layout() {
            assert_eq!(StepLayout::new(vec![]), Err(LayoutError::NoSteps));
        }

        #[test]
        fn test_rejects_empty_step() {
            let steps = vec![FieldId::ALL.to_vec(), vec![]];
            assert_eq!(StepLayout::new(steps), Err(LayoutError::EmptyStep(2)));
        }

        #[test]
        fn test_rejects_duplicate() {
            let steps = vec![FieldId::ALL.to_vec(), vec![FieldId::Email]];
            assert_eq!(
                StepLayout::new(steps),
                Err(LayoutError::DuplicateField(FieldId::Email))
            );
        }

        #[test]
        fn test_rejects_missing() {
            let steps = vec![vec![FieldId::FullName, FieldId::Email]];
            assert_eq!(
                StepLayout::new(steps),
                Err(LayoutError::MissingField(FieldId::Phone))
            );
        }

        #[test]
        fn test_fields_and_step_of() {
            let layout = StepLayout::multi_step();
            assert_eq!(layout.total_steps(), 2);
            assert_eq!(layout.fields(2), &[FieldId::CompanyName, FieldId::Consent]);
            assert!(layout.fields(0).is_empty());
            assert!(layout.fields(3).is_empty());
            assert_eq!(layout.step_of(FieldId::Phone), Some(1));
            assert_eq!(layout.step_of(FieldId::Consent), Some(2));
        }
    }

    mod progress {
        use super::*;

        #[test]
        fn test_fraction() {
            let mut steps = StepController::new(3);
            assert_eq!(steps.progress(), 0.0);
            steps.advance();
            assert_eq!(steps.progress(), 0.5);
            steps.advance();
            assert_eq!(steps.progress(), 1.0);
        }

        #[test]
        fn test_single_step_is_complete() {
            assert_eq!(StepState::new(1).progress(), 1.0);
        }

        #[test]
        fn test_zero_total_clamps_to_one() {
            let state = StepState::new(0);
            assert_eq!(state.total(), 1);
            assert_eq!(state.current(), 1);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_advance_stops_at_last_step() {
            let mut steps = StepController::new(2);
            assert_eq!(steps.advance(), Some(2));
            assert_eq!(steps.advance(), None);
            assert_eq!(steps.current(), 2);
            assert!(steps.is_completed(2));
        }

        #[test]
        fn test_retreat_stops_at_first_step() {
            let mut steps = StepController::new(2);
            assert_eq!(steps.retreat(), None);
            assert_eq!(steps.current(), 1);
        }

        #[test]
        fn test_advance_then_retreat_keeps_marker() {
            let mut steps = StepController::new(3);
            steps.advance();
            assert_eq!(steps.retreat(), Some(1));
            assert_eq!(steps.current(), 1);
            assert!(steps.is_completed(1));
        }

        #[test]
        fn test_reset_clears_markers() {
            let mut steps = StepController::new(3);
            steps.advance();
            steps.advance();
            steps.reset();
            assert_eq!(steps.current(), 1);
            assert!(!steps.is_completed(1));
            assert!(!steps.is_completed(2));
        }
    }
}
