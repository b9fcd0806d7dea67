/// Frame timing and throttling
///
/// The diorama simulates at a fixed rate: every animator advances by whole
/// ticks, never by wall-clock deltas. An accumulator converts real elapsed
/// time into a tick count each frame, and `throttle()` sleeps out whatever
/// is left of the frame budget so the scene runs at the same speed on any
/// machine.
use std::time::{Duration, Instant};

/// Target simulation rate (60 ticks per second)
pub const TICK_RATE: f32 = 1.0 / 60.0;
const TICK_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum ticks to run in a single frame so a long stall cannot
/// snowball into a burst of catch-up work
const MAX_TICKS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame timing state
pub struct FrameLoop {
    /// Accumulated time not yet converted into ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when the viewer started
    start_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total simulation ticks executed
    tick_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameLoop {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of simulation ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // Accumulate frame time and convert whole ticks out of it
        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Anything past the catch-up cap is dropped, not owed
        if self.accumulator >= TICK_DURATION {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Sleep out the remainder of the frame budget. Call after rendering;
    /// the throttle is a presentation concern and does not change how many
    /// ticks the next frame runs.
    pub fn throttle(&self) {
        let spent = Instant::now().duration_since(self.last_frame_time);
        if spent < TICK_DURATION {
            std::thread::sleep(TICK_DURATION - spent);
        }
    }

    /// Get the fixed tick length in seconds
    pub fn tick_rate(&self) -> f32 {
        TICK_RATE
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of simulation ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
