// Per-frame animation sweep

use glam::Vec3;

use super::animators::{
    Baker, BakerPose, Blimp, BlimpPose, Chef, ChefPose, Coaster, CoasterPose, Greeter, TokenSpinner,
    WalkCycle, WalkPose,
};
use super::day_night::DayNightCycle;
use super::keyframe::{Keyframe, KeyframePlayer};

/// Snapshot of every continuous pose parameter for one frame. This is the
/// whole boundary between the animation core and the renderer — nothing
/// else crosses it.
#[derive(Debug, Clone, Copy)]
pub struct ScenePoses {
    /// Shared ambient brightness from the day/night cycle
    pub ambient: f32,
    pub balloon: Keyframe,
    pub token_spin: f32,
    pub greeter_arm: f32,
    pub coaster: CoasterPose,
    pub blimp: BlimpPose,
    pub baker: BakerPose,
    pub chef: ChefPose,
    pub vendor: WalkPose,
}

impl ScenePoses {
    /// Flatten the snapshot into named channels, for the debug log and for
    /// asserting on the boundary in tests.
    pub fn channels(&self) -> Vec<(&'static str, f32)> {
        vec![
            ("ambient", self.ambient),
            ("balloon.x", self.balloon.offset.x),
            ("balloon.y", self.balloon.offset.y),
            ("balloon.z", self.balloon.offset.z),
            ("balloon.spin", self.balloon.spin),
            ("token.spin", self.token_spin),
            ("greeter.arm", self.greeter_arm),
            ("coaster.along", self.coaster.along),
            ("coaster.height", self.coaster.height),
            ("coaster.drift", self.coaster.drift),
            ("coaster.roll", self.coaster.roll),
            ("blimp.run", self.blimp.run),
            ("blimp.lift", self.blimp.lift),
            ("blimp.climb", self.blimp.climb),
            ("blimp.yaw", self.blimp.yaw),
            ("baker.arm", self.baker.arm),
            ("baker.cupcake_height", self.baker.cupcake_height),
            ("baker.cupcake_spin", self.baker.cupcake_spin),
            ("chef.arms", self.chef.arms),
            ("chef.pan_height", self.chef.pan_height),
            ("chef.pan_tilt", self.chef.pan_tilt),
            ("chef.patty_lift", self.chef.patty_lift),
            ("chef.patty_travel", self.chef.patty_travel),
            ("vendor.right_leg", self.vendor.right_leg),
            ("vendor.left_leg", self.vendor.left_leg),
            ("vendor.right_knee", self.vendor.right_knee),
            ("vendor.left_knee", self.vendor.left_knee),
            ("vendor.right_arm", self.vendor.right_arm),
            ("vendor.left_arm", self.vendor.left_arm),
        ]
    }
}

/// Owns every animated entity's state and advances all of it exactly once
/// per simulated frame: day/night cycle first, then balloon playback, then
/// each character animator. The animators share no state, so their order
/// relative to each other does not matter.
pub struct AnimationDriver {
    day_night: DayNightCycle,
    balloon: KeyframePlayer,
    token: TokenSpinner,
    greeter: Greeter,
    coaster: Coaster,
    blimp: Blimp,
    baker: Baker,
    chef: Chef,
    vendor: WalkCycle,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            day_night: DayNightCycle::new(),
            balloon: KeyframePlayer::with_authored_track(),
            token: TokenSpinner::new(),
            greeter: Greeter::new(),
            coaster: Coaster::new(),
            blimp: Blimp::new(),
            baker: Baker::new(),
            chef: Chef::new(),
            vendor: WalkCycle::new(),
        }
    }

    /// Advance every animated entity by one simulated frame
    pub fn tick(&mut self) {
        self.day_night.advance();
        self.balloon.tick();
        self.token.advance();
        self.greeter.advance();
        self.coaster.advance();
        self.blimp.advance();
        self.baker.advance();
        self.chef.advance();
        self.vendor.advance();
    }

    /// Pose snapshot for the frame that was just ticked
    pub fn poses(&self) -> ScenePoses {
        ScenePoses {
            ambient: self.day_night.ambient(),
            balloon: self.balloon.pose(),
            token_spin: self.token.spin(),
            greeter_arm: self.greeter.arm(),
            coaster: self.coaster.pose(),
            blimp: self.blimp.pose(),
            baker: self.baker.pose(),
            chef: self.chef.pose(),
            vendor: self.vendor.pose(),
        }
    }

    // Discrete commands, issued by the input layer on edge-triggered
    // key events (one physical press, one call).

    pub fn toggle_greeter(&mut self) {
        self.greeter.toggle();
        log::info!("Greeter wave {}", on_off(self.greeter.is_enabled()));
    }

    pub fn toggle_baker(&mut self) {
        self.baker.toggle();
        log::info!("Baker toss {}", on_off(self.baker.is_enabled()));
    }

    pub fn record_keyframe(&mut self) {
        self.balloon.record();
    }

    pub fn start_balloon_playback(&mut self) {
        if !self.balloon.start_playback() {
            log::debug!("Balloon playback request ignored");
        }
    }

    pub fn nudge_balloon(&mut self, delta: Vec3) {
        self.balloon.nudge(delta);
    }

    pub fn set_vendor_walking(&mut self, walking: bool) {
        self.vendor.set_walking(walking);
    }

    pub fn balloon(&self) -> &KeyframePlayer {
        &self.balloon
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}
