// Baker animatronic tossing a cupcake

/// Stage of the cupcake toss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TossPhase {
    /// Arm swings back while the cupcake starts to lift and spin
    WindUp,
    /// Cupcake keeps rising on its own
    Rise,
    /// Arm and cupcake come back down together
    Return,
}

/// Arm rotation per tick during wind-up and return
const ARM_STEP: f32 = 0.3;
/// Arm rotation at which the wind-up releases the cupcake
const RELEASE_ANGLE: f32 = -20.0;
/// Cupcake lift per tick during wind-up
const WINDUP_LIFT_STEP: f32 = 0.1;
/// Cupcake lift per tick while rising free
const RISE_STEP: f32 = 0.3;
/// Height at which the cupcake stops rising
const RISE_TOP: f32 = 25.0;
/// Cupcake descent per tick during the return
const RETURN_DROP_STEP: f32 = 0.105;
/// Cupcake tumble per tick, wraps at a full turn
const SPIN_STEP: f32 = 2.7;
const SPIN_WRAP: f32 = 360.0;
/// Cupcake resting height on the tray
const REST_HEIGHT: f32 = 18.5;

/// Pose channels the renderer reads for the baker and her cupcake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BakerPose {
    /// Arm rotation in degrees (negative = swung back)
    pub arm: f32,
    /// Cupcake height above the floor
    pub cupcake_height: f32,
    /// Cupcake tumble in degrees
    pub cupcake_spin: f32,
}

/// Tosses a cupcake in an endless wind-up / rise / catch loop. Toggleable
/// from the input layer and disabled by default; toggling off freezes the
/// toss mid-air and toggling on resumes it exactly where it stopped.
#[derive(Debug)]
pub struct Baker {
    phase: TossPhase,
    pose: BakerPose,
    enabled: bool,
}

impl Baker {
    pub fn new() -> Self {
        Self {
            phase: TossPhase::WindUp,
            pose: BakerPose {
                arm: 0.0,
                cupcake_height: REST_HEIGHT,
                cupcake_spin: 0.0,
            },
            enabled: false,
        }
    }

    pub fn advance(&mut self) {
        if !self.enabled {
            return;
        }
        match self.phase {
            TossPhase::WindUp => {
                self.pose.arm -= ARM_STEP;
                self.pose.cupcake_height += WINDUP_LIFT_STEP;
                self.pose.cupcake_spin += SPIN_STEP;
                if self.pose.arm <= RELEASE_ANGLE {
                    self.phase = TossPhase::Rise;
                }
            }
            TossPhase::Rise => {
                self.pose.cupcake_height += RISE_STEP;
                if self.pose.cupcake_height >= RISE_TOP {
                    self.phase = TossPhase::Return;
                }
            }
            TossPhase::Return => {
                self.pose.arm += ARM_STEP;
                self.pose.cupcake_spin += SPIN_STEP;
                self.pose.cupcake_height -= RETURN_DROP_STEP;
                if self.pose.cupcake_spin >= SPIN_WRAP {
                    self.pose.cupcake_spin = 0.0;
                }
                if self.pose.arm >= 0.0 {
                    self.phase = TossPhase::WindUp;
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

    pub fn pose(&self) -> BakerPose {
        self.pose
    }
}

impl Default for Baker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_disabled_by_default() {
        let mut baker = Baker::new();
        assert!(!baker.is_enabled());
        let rest = baker.pose();
        baker.advance();
        assert_eq!(baker.pose(), rest);
    }

    #[test]
    fn test_windup_moves_arm_and_cupcake_together() {
        let mut baker = Baker::new();
        baker.set_enabled(true);
        baker.advance();
        assert_relative_eq!(baker.pose().arm, -ARM_STEP);
        assert_relative_eq!(baker.pose().cupcake_height, REST_HEIGHT + WINDUP_LIFT_STEP);
        assert_relative_eq!(baker.pose().cupcake_spin, SPIN_STEP);
    }

    #[test]
    fn test_release_then_rise_alone() {
        let mut baker = Baker::new();
        baker.set_enabled(true);
        while baker.phase == TossPhase::WindUp {
            baker.advance();
        }
        assert!(baker.pose().arm <= RELEASE_ANGLE);

        // During the rise only the cupcake height moves
        let arm = baker.pose().arm;
        let spin = baker.pose().cupcake_spin;
        baker.advance();
        assert_eq!(baker.pose().arm, arm);
        assert_eq!(baker.pose().cupcake_spin, spin);

        while baker.phase == TossPhase::Rise {
            baker.advance();
        }
        assert!(baker.pose().cupcake_height >= RISE_TOP);
    }

    #[test]
    fn test_spin_wraps_during_return() {
        let mut baker = Baker::new();
        baker.set_enabled(true);
        for _ in 0..5000 {
            baker.advance();
            assert!(baker.pose().cupcake_spin < SPIN_WRAP + SPIN_STEP);
        }
    }

    #[test]
    fn test_toss_cycle_repeats() {
        let mut baker = Baker::new();
        baker.set_enabled(true);
        // Run through return and confirm the machine winds up again
        let mut saw_windup_again = false;
        let mut left_windup = false;
        for _ in 0..2000 {
            baker.advance();
            match baker.phase {
                TossPhase::WindUp if left_windup => {
                    saw_windup_again = true;
                    break;
                }
                TossPhase::Rise | TossPhase::Return => left_windup = true,
                _ => {}
            }
        }
        assert!(saw_windup_again);
    }

    #[test]
    fn test_toggle_freeze_resumes_identically() {
        let mut baker = Baker::new();
        baker.set_enabled(true);
        for _ in 0..150 {
            baker.advance();
        }
        let frozen = baker.pose();
        let frozen_phase = baker.phase;

        baker.toggle();
        for _ in 0..400 {
            baker.advance();
        }
        assert_eq!(baker.pose(), frozen);
        assert_eq!(baker.phase, frozen_phase);

        baker.toggle();
        baker.advance();
        assert_ne!(baker.pose(), frozen);
    }
}
