// Balloon vendor walk cycle

/// Which way the right leg is swinging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StridePhase {
    RaiseRight,
    LowerRight,
}

/// Leg swing per tick, applied oppositely to each leg
const LEG_STEP: f32 = 3.0;
/// Knee bend per tick, applied oppositely to each knee
const KNEE_STEP: f32 = 1.0;
/// Right arm swing per tick
const RIGHT_ARM_STEP: f32 = 0.12;
/// Left arm swing per tick, counter to the right
const LEFT_ARM_STEP: f32 = 0.1;
/// Right-leg angle where the stride reverses downward
const STRIDE_TOP: f32 = 40.0;
/// Right-leg angle where the stride reverses upward
const STRIDE_BOTTOM: f32 = -50.0;

/// Limb channels the renderer reads for the vendor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WalkPose {
    pub right_leg: f32,
    pub left_leg: f32,
    pub right_knee: f32,
    pub left_knee: f32,
    pub right_arm: f32,
    pub left_arm: f32,
}

/// Bistable limb cycle for the balloon vendor. The cycle only advances
/// while the vendor is being driven; standing still freezes every limb
/// mid-stride.
#[derive(Debug)]
pub struct WalkCycle {
    phase: StridePhase,
    pose: WalkPose,
    walking: bool,
}

impl WalkCycle {
    pub fn new() -> Self {
        Self {
            phase: StridePhase::RaiseRight,
            pose: WalkPose::default(),
            walking: false,
        }
    }

    pub fn advance(&mut self) {
        if !self.walking {
            return;
        }
        match self.phase {
            StridePhase::RaiseRight => {
                self.stride(1.0);
                if self.pose.right_leg >= STRIDE_TOP {
                    self.phase = StridePhase::LowerRight;
                }
            }
            StridePhase::LowerRight => {
                self.stride(-1.0);
                if self.pose.right_leg <= STRIDE_BOTTOM {
                    self.phase = StridePhase::RaiseRight;
                }
            }
        }
    }

    /// Apply one tick of symmetric limb deltas in the given direction
    fn stride(&mut self, dir: f32) {
        self.pose.right_leg += dir * LEG_STEP;
        self.pose.left_leg -= dir * LEG_STEP;
        self.pose.right_knee += dir * KNEE_STEP;
        self.pose.left_knee -= dir * KNEE_STEP;
        self.pose.right_arm += dir * RIGHT_ARM_STEP;
        self.pose.left_arm -= dir * LEFT_ARM_STEP;
    }

    /// Drive or stop the cycle; takes effect on the next tick
    pub fn set_walking(&mut self, walking: bool) {
        self.walking = walking;
    }

    pub fn is_walking(&self) -> bool {
        self.walking
    }

    pub fn pose(&self) -> WalkPose {
        self.pose
    }
}

impl Default for WalkCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frozen_until_driven() {
        let mut cycle = WalkCycle::new();
        cycle.advance();
        assert_eq!(cycle.pose(), WalkPose::default());
    }

    #[test]
    fn test_limbs_move_oppositely() {
        let mut cycle = WalkCycle::new();
        cycle.set_walking(true);
        cycle.advance();
        let pose = cycle.pose();
        assert_relative_eq!(pose.right_leg, LEG_STEP);
        assert_relative_eq!(pose.left_leg, -LEG_STEP);
        assert_relative_eq!(pose.right_knee, KNEE_STEP);
        assert_relative_eq!(pose.left_knee, -KNEE_STEP);
        assert_relative_eq!(pose.right_arm, RIGHT_ARM_STEP);
        assert_relative_eq!(pose.left_arm, -LEFT_ARM_STEP);
    }

    #[test]
    fn test_stride_reverses_at_extremes() {
        let mut cycle = WalkCycle::new();
        cycle.set_walking(true);

        let mut min_leg = f32::MAX;
        let mut max_leg = f32::MIN;
        for _ in 0..500 {
            cycle.advance();
            min_leg = min_leg.min(cycle.pose().right_leg);
            max_leg = max_leg.max(cycle.pose().right_leg);
        }
        // The swing covers both extremes without running away
        assert!(max_leg >= STRIDE_TOP && max_leg < STRIDE_TOP + LEG_STEP + 1e-3);
        assert!(min_leg <= STRIDE_BOTTOM && min_leg > STRIDE_BOTTOM - LEG_STEP - 1e-3);
    }

    #[test]
    fn test_stop_freezes_mid_stride() {
        let mut cycle = WalkCycle::new();
        cycle.set_walking(true);
        for _ in 0..10 {
            cycle.advance();
        }
        let frozen = cycle.pose();

        cycle.set_walking(false);
        for _ in 0..50 {
            cycle.advance();
        }
        assert_eq!(cycle.pose(), frozen);

        cycle.set_walking(true);
        cycle.advance();
        assert_relative_eq!(cycle.pose().right_leg, frozen.right_leg + LEG_STEP);
    }

    #[test]
    fn test_legs_stay_symmetric() {
        let mut cycle = WalkCycle::new();
        cycle.set_walking(true);
        for _ in 0..1000 {
            cycle.advance();
            let pose = cycle.pose();
            assert_relative_eq!(pose.right_leg, -pose.left_leg, epsilon = 1e-3);
            assert_relative_eq!(pose.right_knee, -pose.left_knee, epsilon = 1e-3);
        }
    }
}
