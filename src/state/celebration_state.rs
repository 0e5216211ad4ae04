//! Success banner animation state

use std::time::{Duration, Instant};

/// Animation phase of the success banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationPhase {
    /// Banner sliding in from the top
    DropIn,
    /// Banner resting in place
    Hold,
    /// Animation finished
    Complete,
}

/// Success banner animation state
#[derive(Debug)]
pub struct CelebrationState {
    /// When the celebration started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: CelebrationPhase,
    /// Rows the banner is still above its resting place
    pub drop_offset: f32,
}

impl CelebrationState {
    /// Duration of the drop-in (cubic ease-out)
    const DROP_DURATION: Duration = Duration::from_millis(700);
    /// How long the banner stays after landing
    const HOLD_DURATION: Duration = Duration::from_millis(2500);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: CelebrationPhase::DropIn,
            drop_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        self.update_at(self.start_time.elapsed(), terminal_height);
    }

    fn update_at(&mut self, elapsed: Duration, terminal_height: u16) {
        let drop_height = f32::from(terminal_height) / 2.0;

        if elapsed < Self::DROP_DURATION {
            self.phase = CelebrationPhase::DropIn;
            let progress = elapsed.as_secs_f32() / Self::DROP_DURATION.as_secs_f32();
            let eased = simple_easing::cubic_out(progress);
            self.drop_offset = (1.0 - eased) * drop_height;
        } else if elapsed < Self::DROP_DURATION + Self::HOLD_DURATION {
            self.phase = CelebrationPhase::Hold;
            self.drop_offset = 0.0;
        } else {
            self.phase = CelebrationPhase::Complete;
            self.drop_offset = 0.0;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = CelebrationPhase::Complete;
        self.drop_offset = 0.0;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == CelebrationPhase::Complete
    }
}

impl Default for CelebrationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_dropping() {
        let state = CelebrationState::new();
        assert_eq!(state.phase, CelebrationPhase::DropIn);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_offset_starts_high_and_lands() {
        let mut state = CelebrationState::new();
        state.update_at(Duration::ZERO, 40);
        assert_eq!(state.drop_offset, 20.0);

        state.update_at(CelebrationState::DROP_DURATION, 40);
        assert_eq!(state.phase, CelebrationPhase::Hold);
        assert_eq!(state.drop_offset, 0.0);
    }

    #[test]
    fn test_completes_after_hold() {
        let mut state = CelebrationState::new();
        state.update_at(
            CelebrationState::DROP_DURATION + CelebrationState::HOLD_DURATION,
            24,
        );
        assert!(state.is_complete());
    }

    #[test]
    fn test_skip_completes() {
        let mut state = CelebrationState::new();
        state.skip();
        state.skip();
        assert!(state.is_complete());
        assert_eq!(state.drop_offset, 0.0);
    }
}
