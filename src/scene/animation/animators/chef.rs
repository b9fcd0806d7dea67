// Chef flipping a patty from the pan to the plate

/// Stage of the pan flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlipPhase {
    /// Arms and pan throw the patty up
    Toss,
    /// Beat of hang time at the top of the arc
    Hang,
    /// Patty sails toward the plate while the arms come back
    Carry,
    /// Patty drops the last stretch onto the plate
    Land,
    /// Patty sits on the plate before the next flip
    Rest,
}

/// Arm rotation per tick
const ARM_STEP: f32 = 0.3;
/// Arm rotation at which the toss ends
const TOSS_ANGLE: f32 = 30.0;
/// Pan lift per tick
const PAN_LIFT_STEP: f32 = 0.1;
/// Pan tilt per tick
const PAN_TILT_STEP: f32 = 0.25;
/// Patty arc: vertical bob amplitude
const LIFT_AMPLITUDE: f32 = -15.0;
/// Patty arc: travel amplitude during the toss
const TOSS_TRAVEL: f32 = 12.0;
/// Patty arc: travel amplitude on the long carry toward the plate
const CARRY_TRAVEL: f32 = 70.0;
/// Arc angle per tick during the toss, clamped at the hang point
const TOSS_ARC_STEP: f32 = 0.015;
const HANG_CLAMP: f32 = 3.0;
/// Arc angle per tick through the hang beat
const HANG_STEP: f32 = 0.04;
/// Arc angle ending the hang beat
const HANG_END: f32 = 3.1;
/// Arc angle per tick on the carry
const CARRY_STEP: f32 = 0.005;
/// Arc angle per tick on the landing
const LAND_STEP: f32 = 0.008;
/// Arc angle at which the patty has landed
const LAND_END: f32 = 4.85;
/// Arc angle per tick while resting on the plate
const REST_STEP: f32 = 0.01;
/// Arc angle at which the rest ends and the cycle restarts
const REST_END: f32 = 7.0;
/// Arc angle the cycle restarts from
const ARC_START: f32 = 1.5;
/// Pan resting height
const PAN_REST_HEIGHT: f32 = 13.5;

/// Pose channels the renderer reads for the chef, his pan and the patty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChefPose {
    /// Arm rotation in degrees, mirrored onto both arms by the renderer
    pub arms: f32,
    /// Pan height above the floor
    pub pan_height: f32,
    /// Pan tilt in degrees
    pub pan_tilt: f32,
    /// Patty bob above its rest height
    pub patty_lift: f32,
    /// Patty travel toward the plate
    pub patty_travel: f32,
}

/// Runs the chef's pan-flip loop: toss, a beat of hang time, the long carry
/// over to the plate, the landing, and a pause before flipping again.
#[derive(Debug)]
pub struct Chef {
    phase: FlipPhase,
    pose: ChefPose,
    /// Parametric angle of the patty's arc
    theta: f32,
}

impl Chef {
    pub fn new() -> Self {
        Self {
            phase: FlipPhase::Toss,
            pose: ChefPose {
                arms: 0.0,
                pan_height: PAN_REST_HEIGHT,
                pan_tilt: 0.0,
                patty_lift: 0.0,
                patty_travel: 0.0,
            },
            theta: ARC_START,
        }
    }

    pub fn advance(&mut self) {
        match self.phase {
            FlipPhase::Toss => {
                self.pose.arms += ARM_STEP;
                self.pose.pan_height += PAN_LIFT_STEP;
                self.pose.pan_tilt += PAN_TILT_STEP;
                self.trace_arc(TOSS_TRAVEL);
                self.theta += TOSS_ARC_STEP;
                if self.theta >= HANG_CLAMP {
                    self.theta = HANG_CLAMP;
                }
                if self.pose.arms >= TOSS_ANGLE {
                    self.phase = FlipPhase::Hang;
                }
            }
            FlipPhase::Hang => {
                self.theta += HANG_STEP;
                if self.theta >= HANG_END {
                    self.phase = FlipPhase::Carry;
                }
            }
            FlipPhase::Carry => {
                self.trace_arc(CARRY_TRAVEL);
                self.theta += CARRY_STEP;
                self.pose.arms -= ARM_STEP;
                self.pose.pan_tilt -= PAN_TILT_STEP;
                self.pose.pan_height -= PAN_LIFT_STEP;
                if self.pose.arms <= 0.0 {
                    self.phase = FlipPhase::Land;
                }
            }
            FlipPhase::Land => {
                self.trace_arc(CARRY_TRAVEL);
                self.theta += LAND_STEP;
                if self.theta >= LAND_END {
                    self.phase = FlipPhase::Rest;
                }
            }
            FlipPhase::Rest => {
                self.theta += REST_STEP;
                if self.theta >= REST_END {
                    self.theta = ARC_START;
                    self.phase = FlipPhase::Toss;
                }
            }
        }
    }

    /// Place the patty on its arc for the current angle
    fn trace_arc(&mut self, travel_amplitude: f32) {
        self.pose.patty_lift = LIFT_AMPLITUDE * self.theta.cos();
        self.pose.patty_travel = travel_amplitude * self.theta.sin();
    }

    pub fn pose(&self) -> ChefPose {
        self.pose
    }
}

impl Default for Chef {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_toss_raises_everything() {
        let mut chef = Chef::new();
        chef.advance();
        assert_relative_eq!(chef.pose().arms, ARM_STEP);
        assert_relative_eq!(chef.pose().pan_height, PAN_REST_HEIGHT + PAN_LIFT_STEP);
        assert_relative_eq!(chef.pose().pan_tilt, PAN_TILT_STEP);
    }

    #[test]
    fn test_toss_ends_at_angle() {
        let mut chef = Chef::new();
        while chef.phase == FlipPhase::Toss {
            chef.advance();
        }
        assert!(chef.pose().arms >= TOSS_ANGLE);
        assert_eq!(chef.phase, FlipPhase::Hang);
    }

    #[test]
    fn test_hang_is_a_pause() {
        let mut chef = Chef::new();
        while chef.phase != FlipPhase::Hang {
            chef.advance();
        }
        // During the hang only the arc angle moves; the pose holds still
        let held = chef.pose();
        while chef.phase == FlipPhase::Hang {
            chef.advance();
            assert_eq!(chef.pose(), held);
        }
        assert_eq!(chef.phase, FlipPhase::Carry);
    }

    #[test]
    fn test_carry_returns_arms() {
        let mut chef = Chef::new();
        while chef.phase != FlipPhase::Carry {
            chef.advance();
        }
        while chef.phase == FlipPhase::Carry {
            chef.advance();
        }
        assert!(chef.pose().arms <= 0.0);
        // Pan came back down to its rest height
        assert_relative_eq!(chef.pose().pan_height, PAN_REST_HEIGHT, epsilon = 1e-2);
    }

    #[test]
    fn test_cycle_restarts_from_toss() {
        let mut chef = Chef::new();
        let mut reached_rest = false;
        for _ in 0..3000 {
            chef.advance();
            if chef.phase == FlipPhase::Rest {
                reached_rest = true;
            }
            if reached_rest && chef.phase == FlipPhase::Toss {
                // Arc angle reset for the next flip
                assert_relative_eq!(chef.theta, ARC_START, epsilon = TOSS_ARC_STEP * 2.0);
                return;
            }
        }
        panic!("chef never completed a full flip cycle");
    }
}
