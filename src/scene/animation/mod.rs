// Procedural animation core
//
// Everything that moves in the diorama is driven from here:
// - `day_night`: the ambient light cycle
// - `keyframe`: the balloon's record/playback system
// - `animators`: one hand-scripted state machine per character
// - `driver`: the once-per-frame sweep over all of the above
//
// The core is arithmetic-only. It never touches graphics state; the
// renderer reads a [`ScenePoses`] snapshot each frame and builds model
// transforms from it.

pub mod animators;
pub mod day_night;
pub mod driver;
pub mod keyframe;

pub use day_night::{DayNightCycle, DayPhase};
pub use driver::{AnimationDriver, ScenePoses};
pub use keyframe::{Keyframe, KeyframePlayer, KeyframeTrack, MAX_KEYFRAMES, STEPS_PER_SEGMENT};
