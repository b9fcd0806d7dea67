use anyhow::Result;
use glam::Vec3;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod scene;

use engine::assets::AssetManager;
use engine::audio::AudioPlayer;
use engine::frame_loop::{FrameLoop, TICK_RATE};
use engine::input::{Action, InputManager};
use engine::renderer::{CameraMove, MeshHandle, MeshInstance, Renderer};
use scene::diorama::{Diorama, MODEL_MANIFEST};

/// Where the diorama's assets live, relative to the working directory
const ASSET_ROOT: &str = "assets";
/// Background track, under `assets/audio/`
const BACKGROUND_TRACK: &str = "theme.ogg";
/// Isometric zoom change per tick while a zoom key is held
const ISO_ZOOM_STEP: f32 = 0.5;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Diner...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Rusted Diner")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

    // Load every model the diorama asks for; a missing file costs that
    // prop, not the whole viewer
    let mut assets = AssetManager::new(ASSET_ROOT);
    let mut mesh_handles: HashMap<&'static str, MeshHandle> = HashMap::new();
    for &name in MODEL_MANIFEST {
        match assets
            .load_model(name)
            .and_then(|cpu| renderer.upload_mesh(name, &cpu))
        {
            Ok(handle) => {
                mesh_handles.insert(name, handle);
            }
            Err(e) => warn!("Skipping {}: {}", name, e),
        }
    }
    info!(
        "Loaded {}/{} models",
        mesh_handles.len(),
        MODEL_MANIFEST.len()
    );

    // Background track; a machine without audio just runs silent
    let _audio = match assets.audio_path(BACKGROUND_TRACK) {
        Ok(path) => AudioPlayer::try_play_looping(path),
        Err(e) => {
            warn!("Audio disabled: {}", e);
            None
        }
    };

    let mut diorama = Diorama::new();
    let mut input = InputManager::new();
    let mut frame_loop = FrameLoop::new();

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                input.process_cursor_moved(position.x as f32, position.y as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                input.process_scroll(&delta);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.just_pressed(Action::Quit) {
                    elwt.exit();
                    return;
                }

                apply_commands(&input, &mut diorama, &mut renderer);

                // Fixed-rate simulation: held keys and animators advance
                // once per tick, however long the frame took
                let ticks = frame_loop.begin_frame();
                for _ in 0..ticks {
                    apply_held(&input, &mut diorama, &mut renderer);
                    diorama
                        .driver_mut()
                        .set_vendor_walking(input.vendor_driving());
                    diorama.tick();
                }

                // Mouse look and scroll zoom use the per-frame deltas
                let (dx, dy) = input.mouse_delta();
                renderer.camera_mut().process_mouse(dx, dy);
                renderer.camera_mut().process_scroll(input.scroll_delta());

                if frame_loop.frame_count() % 600 == 0 {
                    debug!("poses: {:?}", diorama.driver().poses().channels());
                }

                let instances = collect_instances(&diorama, &renderer, &mesh_handles);
                if let Err(e) = renderer.render(&instances, diorama.ambient()) {
                    warn!("Render error: {}", e);
                }

                input.update();
                frame_loop.throttle();
                window.request_redraw();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        }
    })
    .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Discrete commands: exactly one per physical key press
fn apply_commands(input: &InputManager, diorama: &mut Diorama, renderer: &mut Renderer) {
    if input.just_pressed(Action::ToggleGreeter) {
        diorama.driver_mut().toggle_greeter();
    }
    if input.just_pressed(Action::ToggleBaker) {
        diorama.driver_mut().toggle_baker();
    }
    if input.just_pressed(Action::RecordKeyframe) {
        diorama.driver_mut().record_keyframe();
    }
    if input.just_pressed(Action::PlayBalloonPath) {
        diorama.driver_mut().start_balloon_playback();
    }
    if input.just_pressed(Action::NudgeBalloon) {
        diorama.driver_mut().nudge_balloon(Vec3::X);
    }
    if input.just_pressed(Action::IsometricView) {
        renderer.camera_mut().set_isometric(true);
    }
    if input.just_pressed(Action::PerspectiveView) {
        renderer.camera_mut().set_isometric(false);
    }
    if input.just_pressed(Action::VendorHeadLeft) {
        diorama.vendor_mut().turn_head(-1.0);
    }
    if input.just_pressed(Action::VendorHeadRight) {
        diorama.vendor_mut().turn_head(1.0);
    }
}

/// Held keys, applied once per simulation tick
fn apply_held(input: &InputManager, diorama: &mut Diorama, renderer: &mut Renderer) {
    let camera = renderer.camera_mut();
    if input.is_pressed(Action::CameraForward) {
        camera.process_movement(CameraMove::Forward, TICK_RATE);
    }
    if input.is_pressed(Action::CameraBackward) {
        camera.process_movement(CameraMove::Backward, TICK_RATE);
    }
    if input.is_pressed(Action::CameraLeft) {
        camera.process_movement(CameraMove::Left, TICK_RATE);
    }
    if input.is_pressed(Action::CameraRight) {
        camera.process_movement(CameraMove::Right, TICK_RATE);
    }
    if input.is_pressed(Action::ZoomIn) {
        camera.adjust_iso_zoom(ISO_ZOOM_STEP);
    }
    if input.is_pressed(Action::ZoomOut) {
        camera.adjust_iso_zoom(-ISO_ZOOM_STEP);
    }

    let vendor = diorama.vendor_mut();
    if input.is_pressed(Action::VendorForward) {
        vendor.step(0.0, -1.0);
    }
    if input.is_pressed(Action::VendorBackward) {
        vendor.step(0.0, 1.0);
    }
    if input.is_pressed(Action::VendorLeft) {
        vendor.step(-1.0, 0.0);
    }
    if input.is_pressed(Action::VendorRight) {
        vendor.step(1.0, 0.0);
    }
    if input.is_pressed(Action::VendorTurnLeft) {
        vendor.turn(-1.0);
    }
    if input.is_pressed(Action::VendorTurnRight) {
        vendor.turn(1.0);
    }
}

/// Resolve the frame's placements against the uploaded meshes. Isometric
/// mode pre-tilts every model the way the reference viewer framed it.
fn collect_instances(
    diorama: &Diorama,
    renderer: &Renderer,
    mesh_handles: &HashMap<&'static str, MeshHandle>,
) -> Vec<MeshInstance> {
    let tilt = renderer.camera().iso_model_tilt();
    diorama
        .frame_instances()
        .iter()
        .filter_map(|placement| {
            let handle = mesh_handles.get(placement.mesh)?;
            let model = match tilt {
                Some(tilt) => tilt * placement.model,
                None => placement.model,
            };
            Some(MeshInstance {
                mesh: *handle,
                model,
            })
        })
        .collect()
}
