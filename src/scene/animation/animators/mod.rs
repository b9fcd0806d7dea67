// Per-entity procedural animators
//
// Each animator is an independent finite-state machine over a private phase
// enum and a handful of continuous pose channels. Every one advances by
// exactly one step per call to `advance()`; none of them can fail at
// runtime — all thresholds are compile-time constants and every phase has a
// defined successor.

pub mod baker;
pub mod blimp;
pub mod chef;
pub mod coaster;
pub mod gait;
pub mod greeter;
pub mod token;

pub use baker::{Baker, BakerPose};
pub use blimp::{Blimp, BlimpPose};
pub use chef::{Chef, ChefPose};
pub use coaster::{Coaster, CoasterPose};
pub use gait::{WalkCycle, WalkPose};
pub use greeter::Greeter;
pub use token::TokenSpinner;
