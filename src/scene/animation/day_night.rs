// Day/night ambient light cycle

/// Phase of the ambient light cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    /// Ambient light rising toward full daylight
    Brightening,
    /// Ambient light falling toward night
    Dimming,
    /// Holding darkness while the night timer runs out
    HoldNight,
}

/// Per-tick change in ambient brightness
const AMBIENT_STEP: f32 = 0.0005;
/// Brightness at which the day peaks and starts to dim
const DAY_PEAK: f32 = 0.8;
/// Brightness at which dimming stops and night begins
const NIGHT_FLOOR: f32 = 0.1;
/// Per-tick advance of the night timer
const NIGHT_STEP: f32 = 0.001;
/// Night timer value that ends the night
const NIGHT_SPAN: f32 = 1.0;
/// Ambient brightness at program start
const AMBIENT_START: f32 = 0.5;

/// Drives the scene's shared ambient brightness through an endless
/// day → night → day loop. No external input ever affects it.
#[derive(Debug)]
pub struct DayNightCycle {
    phase: DayPhase,
    ambient: f32,
    night: f32,
}

impl DayNightCycle {
    pub fn new() -> Self {
        Self {
            phase: DayPhase::Brightening,
            ambient: AMBIENT_START,
            night: 0.0,
        }
    }

    /// Advance the cycle by one simulated frame
    pub fn advance(&mut self) {
        match self.phase {
            DayPhase::Brightening => {
                self.ambient += AMBIENT_STEP;
                if self.ambient >= DAY_PEAK {
                    self.phase = DayPhase::Dimming;
                }
            }
            DayPhase::Dimming => {
                self.ambient -= AMBIENT_STEP;
                if self.ambient <= NIGHT_FLOOR {
                    self.phase = DayPhase::HoldNight;
                }
            }
            DayPhase::HoldNight => {
                self.night += NIGHT_STEP;
                if self.night >= NIGHT_SPAN {
                    self.night = 0.0;
                    self.phase = DayPhase::Brightening;
                }
            }
        }
    }

    /// Current ambient brightness, shared by all three color channels
    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    pub fn phase(&self) -> DayPhase {
        self.phase
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new()
    }
}
