// Advertising blimp circling the restaurant

/// Leg of the blimp's flight plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlightPhase {
    /// Straight climb off the pad
    Ascend,
    /// Turn to face the traverse heading
    PitchOut,
    /// Straight run out to the orbit entry point
    Traverse,
    /// Turn back before dropping
    PitchBack,
    /// Drop to cruising height
    Descend,
    /// Climb while winding onto the orbit circle
    SpiralIn,
    /// Endless circle around the building
    Orbit,
}

/// Lift gained or lost per tick on the straight legs
const LIFT_STEP: f32 = 0.7;
/// Lift at which the initial climb ends
const ASCEND_TOP: f32 = 70.0;
/// Lift the descent settles at before the spiral
const CRUISE_LIFT: f32 = 40.0;
/// Yaw change per tick during the pitch legs
const PITCH_STEP: f32 = 0.7;
/// Yaw the blimp pitches out to
const PITCH_OUT: f32 = 90.0;
/// Forward distance per tick on the traverse
const RUN_STEP: f32 = 0.7;
/// Traverse run length, also the orbit radius
const ORBIT_RADIUS: f32 = 200.0;
/// Climb per tick while spiraling onto the orbit
const SPIRAL_CLIMB_STEP: f32 = 0.9;
/// Altitude at which the spiral hands over to the steady orbit
const ORBIT_ALTITUDE: f32 = 100.0;
/// Orbit angle advanced per tick while spiraling in
const SPIRAL_STEP: f32 = 0.01;
/// Orbit angle advanced per tick once established
const ORBIT_STEP: f32 = 0.008;
/// Yaw drift per tick while spiraling in
const SPIRAL_YAW_STEP: f32 = 0.4;
/// Yaw drift per tick on the steady orbit
const ORBIT_YAW_STEP: f32 = 0.46;

/// Pose channels the renderer reads for the blimp
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlimpPose {
    /// Distance along the traverse axis
    pub run: f32,
    /// Lift along the orbit's second axis
    pub lift: f32,
    /// Altitude gained in the spiral
    pub climb: f32,
    /// Heading in degrees
    pub yaw: f32,
}

/// Flies the blimp through a scripted takeoff and onto a circular orbit
/// around the building. The orbit is the terminal phase on purpose: once
/// established the blimp circles for the rest of the session.
#[derive(Debug)]
pub struct Blimp {
    phase: FlightPhase,
    pose: BlimpPose,
    /// Parametric orbit angle
    theta: f32,
}

impl Blimp {
    pub fn new() -> Self {
        Self {
            phase: FlightPhase::Ascend,
            pose: BlimpPose::default(),
            theta: 0.0,
        }
    }

    pub fn advance(&mut self) {
        match self.phase {
            FlightPhase::Ascend => {
                self.pose.lift += LIFT_STEP;
                if self.pose.lift >= ASCEND_TOP {
                    self.phase = FlightPhase::PitchOut;
                }
            }
            FlightPhase::PitchOut => {
                self.pose.yaw += PITCH_STEP;
                if self.pose.yaw >= PITCH_OUT {
                    self.phase = FlightPhase::Traverse;
                }
            }
            FlightPhase::Traverse => {
                self.pose.run += RUN_STEP;
                if self.pose.run >= ORBIT_RADIUS {
                    self.phase = FlightPhase::PitchBack;
                }
            }
            FlightPhase::PitchBack => {
                self.pose.yaw -= PITCH_STEP;
                if self.pose.yaw <= 0.0 {
                    self.phase = FlightPhase::Descend;
                }
            }
            FlightPhase::Descend => {
                self.pose.lift -= LIFT_STEP;
                if self.pose.lift <= CRUISE_LIFT {
                    self.phase = FlightPhase::SpiralIn;
                }
            }
            FlightPhase::SpiralIn => {
                self.pose.climb += SPIRAL_CLIMB_STEP;
                self.trace_orbit();
                self.theta += SPIRAL_STEP;
                self.pose.yaw -= SPIRAL_YAW_STEP;
                if self.pose.climb >= ORBIT_ALTITUDE {
                    self.phase = FlightPhase::Orbit;
                }
            }
            FlightPhase::Orbit => {
                self.pose.yaw -= ORBIT_YAW_STEP;
                self.trace_orbit();
                self.theta += ORBIT_STEP;
            }
        }
    }

    /// Place the blimp on the orbit circle for the current angle
    fn trace_orbit(&mut self) {
        self.pose.run = ORBIT_RADIUS * self.theta.cos();
        self.pose.lift = ORBIT_RADIUS * self.theta.sin();
    }

    pub fn pose(&self) -> BlimpPose {
        self.pose
    }

    /// True once the blimp has settled on its endless orbit
    pub fn is_orbiting(&self) -> bool {
        self.phase == FlightPhase::Orbit
    }
}

impl Default for Blimp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ascend_ramp() {
        let mut blimp = Blimp::new();
        blimp.advance();
        assert_relative_eq!(blimp.pose().lift, LIFT_STEP);
        assert_relative_eq!(blimp.pose().yaw, 0.0);
    }

    #[test]
    fn test_takeoff_sequence_order() {
        let mut blimp = Blimp::new();

        // Climb first
        while blimp.phase == FlightPhase::Ascend {
            blimp.advance();
        }
        assert!(blimp.pose().lift >= ASCEND_TOP);
        assert_eq!(blimp.phase, FlightPhase::PitchOut);

        // Then pitch out to 90 degrees
        while blimp.phase == FlightPhase::PitchOut {
            blimp.advance();
        }
        assert!(blimp.pose().yaw >= PITCH_OUT);

        // Then run out to the orbit entry
        while blimp.phase == FlightPhase::Traverse {
            blimp.advance();
        }
        assert!(blimp.pose().run >= ORBIT_RADIUS);

        // Pitch back to zero, then drop to cruise height
        while blimp.phase == FlightPhase::PitchBack {
            blimp.advance();
        }
        assert!(blimp.pose().yaw <= 0.0);
        while blimp.phase == FlightPhase::Descend {
            blimp.advance();
        }
        assert!(blimp.pose().lift <= CRUISE_LIFT);
        assert_eq!(blimp.phase, FlightPhase::SpiralIn);
    }

    #[test]
    fn test_orbit_is_terminal() {
        let mut blimp = Blimp::new();
        for _ in 0..10_000 {
            blimp.advance();
        }
        assert!(blimp.is_orbiting());

        // Once orbiting, the blimp never leaves the circle
        for _ in 0..10_000 {
            blimp.advance();
            assert!(blimp.is_orbiting());
            let r = (blimp.pose().run.powi(2) + blimp.pose().lift.powi(2)).sqrt();
            assert_relative_eq!(r, ORBIT_RADIUS, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_spiral_gains_altitude() {
        let mut blimp = Blimp::new();
        while blimp.phase != FlightPhase::SpiralIn {
            blimp.advance();
        }
        let start_climb = blimp.pose().climb;
        blimp.advance();
        assert_relative_eq!(blimp.pose().climb, start_climb + SPIRAL_CLIMB_STEP);

        // The spiral ends only once orbit altitude is reached
        while blimp.phase == FlightPhase::SpiralIn {
            blimp.advance();
        }
        assert!(blimp.pose().climb >= ORBIT_ALTITUDE);
    }
}
