// Waving animatronic at the entrance

/// Direction the greeter's arm is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WavePhase {
    Raise,
    Lower,
}

/// Degrees the arm rotates per tick
const ARM_STEP: f32 = 1.0;
/// Arm rotation where the wave reverses downward
const ARM_TOP: f32 = 45.0;
/// Arm rotation where the wave reverses upward
const ARM_BOTTOM: f32 = -45.0;

/// Waves one arm between two fixed extremes. Toggleable from the input
/// layer: disabling freezes the arm exactly where it is, re-enabling
/// resumes from the frozen pose.
#[derive(Debug)]
pub struct Greeter {
    phase: WavePhase,
    arm: f32,
    enabled: bool,
}

impl Greeter {
    pub fn new() -> Self {
        Self {
            phase: WavePhase::Raise,
            arm: 0.0,
            enabled: true,
        }
    }

    pub fn advance(&mut self) {
        if !self.enabled {
            return;
        }
        match self.phase {
            WavePhase::Raise => {
                self.arm += ARM_STEP;
                if self.arm >= ARM_TOP {
                    self.phase = WavePhase::Lower;
                }
            }
            WavePhase::Lower => {
                self.arm -= ARM_STEP;
                if self.arm <= ARM_BOTTOM {
                    self.phase = WavePhase::Raise;
                }
            }
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Arm rotation in degrees, always within [-45, 45]
    pub fn arm(&self) -> f32 {
        self.arm
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_enabled_and_raising() {
        let mut greeter = Greeter::new();
        assert!(greeter.is_enabled());
        greeter.advance();
        assert_eq!(greeter.arm(), 1.0);
    }

    #[test]
    fn test_arm_stays_in_bounds() {
        let mut greeter = Greeter::new();
        for _ in 0..1000 {
            greeter.advance();
            assert!(greeter.arm() >= ARM_BOTTOM && greeter.arm() <= ARM_TOP);
        }
    }

    #[test]
    fn test_flip_happens_exactly_at_boundary() {
        let mut greeter = Greeter::new();
        // 45 ticks raise the arm from 0 to exactly the top
        for _ in 0..45 {
            greeter.advance();
        }
        assert_eq!(greeter.arm(), ARM_TOP);
        // the next tick moves down from the boundary, never beyond it
        greeter.advance();
        assert_eq!(greeter.arm(), ARM_TOP - ARM_STEP);

        // 90 more ticks reach exactly the bottom
        for _ in 0..89 {
            greeter.advance();
        }
        assert_eq!(greeter.arm(), ARM_BOTTOM);
        greeter.advance();
        assert_eq!(greeter.arm(), ARM_BOTTOM + ARM_STEP);
    }

    #[test]
    fn test_disable_freezes_state() {
        let mut greeter = Greeter::new();
        for _ in 0..30 {
            greeter.advance();
        }
        let frozen_arm = greeter.arm();

        greeter.set_enabled(false);
        for _ in 0..100 {
            greeter.advance();
        }
        assert_eq!(greeter.arm(), frozen_arm);

        // Re-enabling resumes from the frozen pose
        greeter.set_enabled(true);
        greeter.advance();
        assert_eq!(greeter.arm(), frozen_arm + ARM_STEP);
    }

    #[test]
    fn test_toggle() {
        let mut greeter = Greeter::new();
        greeter.toggle();
        assert!(!greeter.is_enabled());
        greeter.toggle();
        assert!(greeter.is_enabled());
    }
}
