// Coaster car circuit on the loop-the-loop track out back

/// Leg of the coaster circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CircuitPhase {
    /// Straight run from the start toward the loop entry
    Approach,
    /// Rising half of the loop, traced on a circle
    LoopRise,
    /// Straight run past the loop exit
    ContinueUp,
    /// Same straight, coming back
    ContinueDown,
    /// Falling half of the loop, circle traced in reverse
    LoopFall,
    /// Straight run back to the start
    Return,
}

/// Distance covered along the track per tick on the straights
const RUN_STEP: f32 = 0.6;
/// Loop angle advanced per tick
const LOOP_STEP: f32 = 0.01;
/// Loop radius; the circle is centered one radius above the track
const LOOP_RADIUS: f32 = 95.0;
/// Track position of the loop entry
const LOOP_ENTRY: f32 = 150.0;
/// Track position where the straight past the loop turns around
const RUN_END: f32 = 350.0;
/// Loop angle at which the rising half hands over to the straight
const LOOP_EXIT_ANGLE: f32 = 6.5;
/// Sideways drift applied while looping, per tick
const DRIFT_STEP: f32 = 0.1;
/// The drift never carries the car past this bound
const DRIFT_LIMIT: f32 = -66.0;
/// Rolling rotation per tick, applied in every phase
const ROLL_STEP: f32 = 1.5;

/// Pose channels the renderer reads for the coaster car
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoasterPose {
    /// Position along the track axis
    pub along: f32,
    /// Height above the track
    pub height: f32,
    /// Sideways displacement accumulated in the loop
    pub drift: f32,
    /// Rolling rotation in degrees
    pub roll: f32,
}

/// Drives the coaster car around its circuit forever: straight in, around
/// the loop, out to the end of the track and all the way back.
#[derive(Debug)]
pub struct Coaster {
    phase: CircuitPhase,
    pose: CoasterPose,
    /// Parametric angle inside the loop phases
    theta: f32,
}

impl Coaster {
    pub fn new() -> Self {
        Self {
            phase: CircuitPhase::Approach,
            pose: CoasterPose::default(),
            theta: 0.0,
        }
    }

    pub fn advance(&mut self) {
        // The car rolls continuously no matter which leg it is on
        self.pose.roll += ROLL_STEP;

        match self.phase {
            CircuitPhase::Approach => {
                self.pose.along += RUN_STEP;
                if self.pose.along >= LOOP_ENTRY {
                    self.phase = CircuitPhase::LoopRise;
                }
            }
            CircuitPhase::LoopRise => {
                self.trace_loop();
                self.theta += LOOP_STEP;
                self.pose.drift -= DRIFT_STEP;
                if self.pose.drift <= DRIFT_LIMIT {
                    self.pose.drift = DRIFT_LIMIT;
                }
                if self.theta >= LOOP_EXIT_ANGLE {
                    self.phase = CircuitPhase::ContinueUp;
                }
            }
            CircuitPhase::ContinueUp => {
                self.pose.along += RUN_STEP;
                if self.pose.along >= RUN_END {
                    self.phase = CircuitPhase::ContinueDown;
                }
            }
            CircuitPhase::ContinueDown => {
                self.pose.along -= RUN_STEP;
                if self.pose.along <= LOOP_ENTRY {
                    self.phase = CircuitPhase::LoopFall;
                }
            }
            CircuitPhase::LoopFall => {
                self.trace_loop();
                self.theta -= LOOP_STEP;
                self.pose.drift += DRIFT_STEP;
                if self.theta <= 0.0 {
                    self.theta = 0.0;
                    self.phase = CircuitPhase::Return;
                }
            }
            CircuitPhase::Return => {
                self.pose.along -= RUN_STEP;
                if self.pose.along <= 0.0 {
                    self.pose.along = 0.0;
                    self.phase = CircuitPhase::Approach;
                }
            }
        }
    }

    /// Place the car on the loop circle for the current angle
    fn trace_loop(&mut self) {
        self.pose.height = LOOP_RADIUS - LOOP_RADIUS * self.theta.cos();
        self.pose.along = LOOP_ENTRY + LOOP_RADIUS * self.theta.sin();
    }

    pub fn pose(&self) -> CoasterPose {
        self.pose
    }
}

impl Default for Coaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_approach_ramp() {
        let mut coaster = Coaster::new();
        coaster.advance();
        assert_relative_eq!(coaster.pose().along, RUN_STEP);
        assert_relative_eq!(coaster.pose().roll, ROLL_STEP);
    }

    #[test]
    fn test_roll_never_stops() {
        let mut coaster = Coaster::new();
        for k in 1..=2000u32 {
            coaster.advance();
            assert_relative_eq!(coaster.pose().roll, ROLL_STEP * k as f32, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_enters_loop_at_entry() {
        let mut coaster = Coaster::new();
        // ~250 ticks at 0.6 reach the loop entry
        let mut ticks = 0;
        while coaster.phase == CircuitPhase::Approach {
            coaster.advance();
            ticks += 1;
            assert!(ticks <= 251, "approach leg never ended");
        }
        assert_relative_eq!(coaster.pose().along, LOOP_ENTRY, epsilon = 1e-2);

        // Loop entry keeps the car on the ground at theta = 0
        coaster.advance();
        assert!(coaster.pose().height < 1e-3);
    }

    #[test]
    fn test_loop_top_reaches_double_radius() {
        let mut coaster = Coaster::new();
        let mut peak: f32 = 0.0;
        for _ in 0..4000 {
            coaster.advance();
            peak = peak.max(coaster.pose().height);
        }
        // cos hits -1 at the top of the loop
        assert!(peak > 2.0 * LOOP_RADIUS - 1.0);
    }

    #[test]
    fn test_drift_clamped() {
        let mut coaster = Coaster::new();
        for _ in 0..5000 {
            coaster.advance();
            assert!(coaster.pose().drift >= DRIFT_LIMIT);
        }
    }

    #[test]
    fn test_circuit_is_cyclic() {
        let mut coaster = Coaster::new();
        // Run long enough to get back to the approach leg at the origin
        let mut completed = false;
        for _ in 0..20_000 {
            coaster.advance();
            if coaster.phase == CircuitPhase::Approach && coaster.pose().along == 0.0 {
                completed = true;
                break;
            }
        }
        assert!(completed, "coaster never completed a full circuit");
    }
}
