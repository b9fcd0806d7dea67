// Diorama assembly: static prop layout and per-frame animated placements
//
// Everything here is plain math over the pose snapshot; the renderer maps
// the resulting mesh names to uploaded GPU meshes and draws.

use crate::core::math::clamp;
use glam::{Mat4, Vec3};

use super::animation::{AnimationDriver, ScenePoses};

/// Every model file the diorama needs, relative to `assets/models/`
pub const MODEL_MANIFEST: &[&str] = &[
    // Static dressing
    "floor.obj",
    "restaurant.obj",
    "table.obj",
    "cake.obj",
    "microphone.obj",
    "kitchen.obj",
    "bar.obj",
    "curtain.obj",
    "arcade_upright.obj",
    "arcade_cab.obj",
    "arcade_drive.obj",
    "track.obj",
    "plate.obj",
    // Animated characters and props
    "greeter.obj",
    "greeter_arm.obj",
    "baker.obj",
    "baker_arm.obj",
    "cupcake.obj",
    "chef.obj",
    "chef_arm.obj",
    "pan.obj",
    "patty.obj",
    "coaster.obj",
    "token.obj",
    "blimp.obj",
    "balloon.obj",
    // Balloon vendor rig
    "vendor_torso.obj",
    "vendor_head.obj",
    "vendor_shoulder_r.obj",
    "vendor_shoulder_l.obj",
    "vendor_arm_r.obj",
    "vendor_arm_l.obj",
    "vendor_thigh_r.obj",
    "vendor_thigh_l.obj",
    "vendor_shin.obj",
    "vendor_balloons.obj",
    "vendor_sign.obj",
];

/// Where the parade balloon hangs when its path offset is zero
const BALLOON_ANCHOR: Vec3 = Vec3::new(0.0, 20.0, -100.0);
/// Where the vendor stands before being driven anywhere
const VENDOR_HOME: Vec3 = Vec3::new(100.0, 15.0, 100.0);
/// Fixed token positions along the coaster track
const TOKEN_SPOTS: [Vec3; 6] = [
    Vec3::new(340.0, 10.0, 150.0),
    Vec3::new(340.0, 10.0, 100.0),
    Vec3::new(340.0, 10.0, 50.0),
    Vec3::new(250.0, 10.0, 150.0),
    Vec3::new(250.0, 10.0, 200.0),
    Vec3::new(250.0, 10.0, 250.0),
];

/// Vendor drive step per tick, world units
const VENDOR_STEP: f32 = 1.0;
/// Vendor body turn per tick, degrees
const VENDOR_TURN_STEP: f32 = 1.0;
/// Vendor head turn per key press and its limit, degrees
const HEAD_TURN_STEP: f32 = 3.5;
const HEAD_LIMIT: f32 = 75.0;

/// One mesh placement for the frame
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub mesh: &'static str,
    pub model: Mat4,
}

/// User-driven vendor state: where the vendor stands, which way the body
/// faces and which way the head is turned. The limb cycle itself lives in
/// the animation core.
#[derive(Debug, Clone, Copy)]
pub struct VendorState {
    position: Vec3,
    heading: f32,
    head_yaw: f32,
}

impl VendorState {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: 0.0,
            head_yaw: 0.0,
        }
    }

    /// Step the vendor across the floor, axes aligned with the diorama
    pub fn step(&mut self, dx: f32, dz: f32) {
        self.position.x += dx * VENDOR_STEP;
        self.position.z += dz * VENDOR_STEP;
    }

    /// Turn the whole body
    pub fn turn(&mut self, direction: f32) {
        self.heading += direction * VENDOR_TURN_STEP;
    }

    /// Turn the head, clamped so it stays on the shoulders
    pub fn turn_head(&mut self, direction: f32) {
        self.head_yaw = clamp(
            self.head_yaw + direction * HEAD_TURN_STEP,
            -HEAD_LIMIT,
            HEAD_LIMIT,
        );
    }

    pub fn head_yaw(&self) -> f32 {
        self.head_yaw
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Default for VendorState {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole interactive scene: animation state plus the vendor avatar
pub struct Diorama {
    driver: AnimationDriver,
    vendor: VendorState,
}

impl Diorama {
    pub fn new() -> Self {
        Self {
            driver: AnimationDriver::new(),
            vendor: VendorState::new(),
        }
    }

    /// Advance all animation by one simulated frame
    pub fn tick(&mut self) {
        self.driver.tick();
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver {
        &mut self.driver
    }

    pub fn vendor_mut(&mut self) -> &mut VendorState {
        &mut self.vendor
    }

    /// Ambient brightness for the frame's lighting
    pub fn ambient(&self) -> f32 {
        self.driver.poses().ambient
    }

    /// Every placement for the frame: the static dressing plus all
    /// animated characters posed from the current snapshot
    pub fn frame_instances(&self) -> Vec<Placement> {
        let poses = self.driver.poses();
        let mut instances = static_props();
        animated_props(&poses, &self.vendor, &mut instances);
        instances
    }
}

impl Default for Diorama {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate, uniform-scale, then yaw; the order every static prop uses
fn prop(mesh: &'static str, translation: Vec3, scale: f32, yaw_deg: f32) -> Placement {
    Placement {
        mesh,
        model: Mat4::from_translation(translation)
            * Mat4::from_scale(Vec3::splat(scale))
            * Mat4::from_rotation_y(yaw_deg.to_radians()),
    }
}

/// The fixed dressing of the diorama
fn static_props() -> Vec<Placement> {
    vec![
        prop("floor.obj", Vec3::new(0.0, -13.25, 0.0), 50.0, 0.0),
        prop("restaurant.obj", Vec3::new(0.0, -0.7, -100.0), 4.0, -90.0),
        // Dining tables
        prop("table.obj", Vec3::new(-30.0, 0.0, -170.0), 6.0, -90.0),
        prop("table.obj", Vec3::new(30.0, 0.0, -170.0), 6.0, -90.0),
        prop("table.obj", Vec3::new(30.0, 0.0, -100.0), 6.0, -90.0),
        prop("table.obj", Vec3::new(-30.0, 0.0, -100.0), 6.0, -90.0),
        prop("cake.obj", Vec3::new(-30.0, 11.0, -170.0), 2.0, -90.0),
        // Stage
        prop("microphone.obj", Vec3::new(100.0, 7.5, -110.0), 150.0, -90.0),
        prop("curtain.obj", Vec3::new(123.0, 7.0, -115.0), 11.0, -90.0),
        // Kitchen and bar
        prop("kitchen.obj", Vec3::new(-165.0, 0.0, 10.0), 13.0, 180.0),
        prop("kitchen.obj", Vec3::new(-220.0, 0.0, 10.0), 13.0, 180.0),
        prop("table.obj", Vec3::new(-180.0, 0.0, -70.0), 6.0, -90.0),
        prop("plate.obj", Vec3::new(-180.0, 11.2, -70.0), 2.0, -90.0),
        prop("bar.obj", Vec3::new(-55.0, 0.0, -10.0), 2.0, -90.0),
        // Arcade corner
        prop("arcade_upright.obj", Vec3::new(180.0, 0.0, -10.0), 10.0, -90.0),
        prop("arcade_upright.obj", Vec3::new(180.0, 0.0, 10.0), 10.0, -90.0),
        prop("arcade_cab.obj", Vec3::new(140.0, 0.0, -35.0), 0.4, 0.0),
        prop("arcade_cab.obj", Vec3::new(160.0, 0.0, -35.0), 0.4, 0.0),
        prop("arcade_drive.obj", Vec3::new(140.0, 0.0, 33.0), 1.15, 90.0),
        prop("arcade_drive.obj", Vec3::new(160.0, 0.0, 33.0), 1.15, 90.0),
        // Coaster track diorama out back
        prop("track.obj", Vec3::new(300.0, 5.0, 150.0), 8.0, 90.0),
        // Character bodies (their moving parts are placed per frame)
        prop("greeter.obj", Vec3::new(40.0, 0.0, 50.0), 10.0, 0.0),
        prop("baker.obj", Vec3::new(0.0, 0.0, -220.0), 0.3, 0.0),
        prop("chef.obj", Vec3::new(-180.0, 0.0, 0.0), 14.0, 0.0),
    ]
}

/// Placements driven by the frame's pose snapshot
fn animated_props(poses: &ScenePoses, vendor: &VendorState, out: &mut Vec<Placement>) {
    // Spinning tokens share one pose across all spots
    for spot in TOKEN_SPOTS {
        out.push(Placement {
            mesh: "token.obj",
            model: Mat4::from_translation(spot)
                * Mat4::from_scale(Vec3::splat(4.0))
                * Mat4::from_rotation_y(poses.token_spin.to_radians()),
        });
    }

    // Coaster car: track offsets plus its rolling rotation
    out.push(Placement {
        mesh: "coaster.obj",
        model: Mat4::from_translation(Vec3::new(
            poses.coaster.drift + 340.0,
            poses.coaster.height + 11.0,
            poses.coaster.along,
        )) * Mat4::from_scale(Vec3::splat(3.0))
            * Mat4::from_rotation_x(poses.coaster.roll.to_radians()),
    });

    // Greeter's waving arm pivots at the shoulder
    out.push(Placement {
        mesh: "greeter_arm.obj",
        model: Mat4::from_translation(Vec3::new(47.0, 34.5, 48.0))
            * Mat4::from_scale(Vec3::splat(10.0))
            * Mat4::from_rotation_z(poses.greeter_arm.to_radians()),
    });

    // Blimp: run/climb/lift channels map to world x/y/z
    out.push(Placement {
        mesh: "blimp.obj",
        model: Mat4::from_translation(Vec3::new(
            poses.blimp.run,
            poses.blimp.climb,
            poses.blimp.lift,
        )) * Mat4::from_scale(Vec3::splat(3.0))
            * Mat4::from_rotation_y(poses.blimp.yaw.to_radians()),
    });

    // Baker's throwing arm and the cupcake it launches
    out.push(Placement {
        mesh: "baker_arm.obj",
        model: Mat4::from_translation(Vec3::new(-4.5, 17.0, -218.5))
            * Mat4::from_scale(Vec3::splat(0.3))
            * Mat4::from_rotation_x(poses.baker.arm.to_radians()),
    });
    out.push(Placement {
        mesh: "cupcake.obj",
        model: Mat4::from_translation(Vec3::new(-4.5, poses.baker.cupcake_height, -212.0))
            * Mat4::from_scale(Vec3::splat(0.025))
            * Mat4::from_rotation_x(poses.baker.cupcake_spin.to_radians()),
    });

    // Chef's arms mirror each other around the body
    out.push(Placement {
        mesh: "chef_arm.obj",
        model: Mat4::from_translation(Vec3::new(-182.0, 13.5, 0.0))
            * Mat4::from_scale(Vec3::splat(14.0))
            * Mat4::from_rotation_z(poses.chef.arms.to_radians())
            * Mat4::from_rotation_y(105.0_f32.to_radians())
            * Mat4::from_rotation_x(-90.0_f32.to_radians()),
    });
    out.push(Placement {
        mesh: "chef_arm.obj",
        model: Mat4::from_translation(Vec3::new(-178.0, 13.5, 0.0))
            * Mat4::from_scale(Vec3::splat(14.0))
            * Mat4::from_rotation_z(-poses.chef.arms.to_radians())
            * Mat4::from_rotation_y(75.0_f32.to_radians())
            * Mat4::from_rotation_x(-90.0_f32.to_radians()),
    });
    out.push(Placement {
        mesh: "pan.obj",
        model: Mat4::from_translation(Vec3::new(-180.0, poses.chef.pan_height, 7.0))
            * Mat4::from_rotation_y(-90.0_f32.to_radians())
            * Mat4::from_rotation_z(poses.chef.pan_tilt.to_radians()),
    });
    out.push(Placement {
        mesh: "patty.obj",
        model: Mat4::from_translation(Vec3::new(
            -180.0,
            poses.chef.patty_lift + 13.5,
            poses.chef.patty_travel,
        )) * Mat4::from_rotation_y(-90.0_f32.to_radians()),
    });

    // Parade balloon on its keyframed path
    out.push(Placement {
        mesh: "balloon.obj",
        model: Mat4::from_translation(BALLOON_ANCHOR + poses.balloon.offset)
            * Mat4::from_rotation_y(-90.0_f32.to_radians())
            * Mat4::from_scale(Vec3::splat(0.3))
            * Mat4::from_rotation_y(poses.balloon.spin.to_radians()),
    });

    vendor_rig(poses, vendor, out);
}

/// The vendor's articulated limb hierarchy, rooted at the driven body
fn vendor_rig(poses: &ScenePoses, vendor: &VendorState, out: &mut Vec<Placement>) {
    let walk = poses.vendor;

    let torso = Mat4::from_translation(VENDOR_HOME + vendor.position())
        * Mat4::from_rotation_y(vendor.heading.to_radians())
        * Mat4::from_scale(Vec3::splat(0.65));
    out.push(Placement {
        mesh: "vendor_torso.obj",
        model: torso,
    });

    out.push(Placement {
        mesh: "vendor_head.obj",
        model: torso
            * Mat4::from_translation(Vec3::new(0.0, 10.5, 1.5))
            * Mat4::from_rotation_y(vendor.head_yaw().to_radians())
            * Mat4::from_translation(Vec3::new(0.0, 10.5, 1.5)),
    });

    // Right arm chain; the sign placard hangs off the forearm
    let right_shoulder = torso
        * Mat4::from_translation(Vec3::new(3.0, 4.0, 0.0))
        * Mat4::from_rotation_z(walk.right_arm.to_radians())
        * Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0));
    out.push(Placement {
        mesh: "vendor_shoulder_r.obj",
        model: right_shoulder,
    });
    let right_arm = right_shoulder
        * Mat4::from_translation(Vec3::new(6.0, 0.0, 0.0))
        * Mat4::from_rotation_z(walk.right_arm.to_radians());
    out.push(Placement {
        mesh: "vendor_arm_r.obj",
        model: right_arm * Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)),
    });
    out.push(Placement {
        mesh: "vendor_sign.obj",
        model: right_arm
            * Mat4::from_translation(Vec3::new(9.55, 0.0, -0.5))
            * Mat4::from_rotation_z(walk.right_arm.to_radians()),
    });

    // Left arm chain; the balloon bundle hangs off the forearm
    let left_shoulder = torso
        * Mat4::from_translation(Vec3::new(-3.0, 4.0, 0.0))
        * Mat4::from_rotation_z(-walk.left_arm.to_radians())
        * Mat4::from_translation(Vec3::new(-3.0, 0.0, 0.0));
    out.push(Placement {
        mesh: "vendor_shoulder_l.obj",
        model: left_shoulder,
    });
    let left_arm = left_shoulder
        * Mat4::from_translation(Vec3::new(-5.0, 0.0, 0.0))
        * Mat4::from_rotation_z(-walk.left_arm.to_radians());
    out.push(Placement {
        mesh: "vendor_arm_l.obj",
        model: left_arm * Mat4::from_translation(Vec3::new(-1.0, 0.0, 0.0)),
    });
    out.push(Placement {
        mesh: "vendor_balloons.obj",
        model: left_arm
            * Mat4::from_translation(Vec3::new(-9.55, 0.0, -0.5))
            * Mat4::from_rotation_z(-walk.left_arm.to_radians()),
    });

    // Legs: thigh pivots at the hip, shin at the knee
    let right_thigh = torso
        * Mat4::from_translation(Vec3::new(5.0, -7.0, 0.0))
        * Mat4::from_rotation_x(walk.right_leg.to_radians())
        * Mat4::from_translation(Vec3::new(1.0, 1.0, 0.0));
    out.push(Placement {
        mesh: "vendor_thigh_r.obj",
        model: right_thigh,
    });
    out.push(Placement {
        mesh: "vendor_shin.obj",
        model: right_thigh
            * Mat4::from_translation(Vec3::new(0.0, -10.0, -0.5))
            * Mat4::from_rotation_x(walk.right_knee.to_radians())
            * Mat4::from_translation(Vec3::new(0.0, 2.0, -0.5)),
    });

    let left_thigh = torso
        * Mat4::from_translation(Vec3::new(-5.0, -7.0, 0.0))
        * Mat4::from_rotation_x(walk.left_leg.to_radians())
        * Mat4::from_translation(Vec3::new(-1.0, 1.0, 0.0));
    out.push(Placement {
        mesh: "vendor_thigh_l.obj",
        model: left_thigh,
    });
    out.push(Placement {
        mesh: "vendor_shin.obj",
        model: left_thigh
            * Mat4::from_translation(Vec3::new(0.0, -10.0, -0.5))
            * Mat4::from_rotation_x(walk.left_knee.to_radians())
            * Mat4::from_translation(Vec3::new(0.0, 2.0, -0.5)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_placement_is_in_the_manifest() {
        let diorama = Diorama::new();
        for placement in diorama.frame_instances() {
            assert!(
                MODEL_MANIFEST.contains(&placement.mesh),
                "{} placed but not in the manifest",
                placement.mesh
            );
        }
    }

    #[test]
    fn test_every_manifest_entry_is_placed() {
        let diorama = Diorama::new();
        let placed: Vec<&str> = diorama
            .frame_instances()
            .iter()
            .map(|placement| placement.mesh)
            .collect();
        for mesh in MODEL_MANIFEST {
            assert!(placed.contains(mesh), "{} never placed", mesh);
        }
    }

    #[test]
    fn test_tokens_all_spin_together() {
        let mut diorama = Diorama::new();
        diorama.tick();
        let instances = diorama.frame_instances();
        let tokens: Vec<_> = instances
            .iter()
            .filter(|placement| placement.mesh == "token.obj")
            .collect();
        assert_eq!(tokens.len(), TOKEN_SPOTS.len());
    }

    #[test]
    fn test_balloon_follows_playback() {
        let mut diorama = Diorama::new();
        diorama.driver_mut().start_balloon_playback();
        let before = balloon_translation(&diorama);
        for _ in 0..100 {
            diorama.tick();
        }
        let after = balloon_translation(&diorama);
        assert_ne!(before, after);
    }

    #[test]
    fn test_vendor_head_clamped() {
        let mut vendor = VendorState::new();
        for _ in 0..100 {
            vendor.turn_head(1.0);
        }
        assert_eq!(vendor.head_yaw(), HEAD_LIMIT);
        for _ in 0..100 {
            vendor.turn_head(-1.0);
        }
        assert_eq!(vendor.head_yaw(), -HEAD_LIMIT);
    }

    #[test]
    fn test_vendor_steps_are_axis_aligned() {
        let mut vendor = VendorState::new();
        vendor.step(1.0, 0.0);
        vendor.step(0.0, -1.0);
        assert_eq!(vendor.position(), Vec3::new(VENDOR_STEP, 0.0, -VENDOR_STEP));
    }

    fn balloon_translation(diorama: &Diorama) -> Vec3 {
        let instances = diorama.frame_instances();
        let balloon = instances
            .iter()
            .find(|placement| placement.mesh == "balloon.obj")
            .expect("balloon placed every frame");
        balloon.model.w_axis.truncate()
    }
}
