// Scene: the animation core plus diorama assembly
//
// `animation` computes pose parameters; `diorama` turns them into named
// mesh placements the renderer can draw.

pub mod animation;
pub mod diorama;

pub use animation::{AnimationDriver, ScenePoses};
pub use diorama::{Diorama, Placement, VendorState};
