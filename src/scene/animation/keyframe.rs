// Keyframe recording and fixed-step playback for the parade balloon

use glam::Vec3;
use log::{info, warn};

/// Interpolation steps between two consecutive keyframes
pub const STEPS_PER_SEGMENT: u32 = 270;

/// Maximum number of keyframes a track can hold
pub const MAX_KEYFRAMES: usize = 50;

/// A recorded balloon pose: offset from the balloon's anchor plus a yaw spin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keyframe {
    pub offset: Vec3,
    /// Yaw in degrees
    pub spin: f32,
}

impl Keyframe {
    pub fn new(offset: Vec3, spin: f32) -> Self {
        Self { offset, spin }
    }
}

/// Capacity-bounded, append-only list of keyframes
#[derive(Debug, Clone)]
pub struct KeyframeTrack {
    frames: Vec<Keyframe>,
    capacity: usize,
}

impl KeyframeTrack {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a keyframe. Returns false (and leaves the track untouched)
    /// once the capacity is reached.
    pub fn append(&mut self, frame: Keyframe) -> bool {
        if self.frames.len() >= self.capacity {
            warn!(
                "Keyframe track full ({} frames), dropping recorded pose",
                self.capacity
            );
            return false;
        }
        self.frames.push(frame);
        true
    }

    pub fn get(&self, index: usize) -> Option<&Keyframe> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// The balloon path that ships with the scene: a loop around the dining room
/// recorded by hand. Entries are (x, y, z, spin).
const AUTHORED_PATH: [(f32, f32, f32, f32); 46] = [
    (0.0, 0.0, 0.0, 0.0),
    (0.0, 10.0, 0.0, 0.0),
    (5.0, 6.0, 0.0, 0.0),
    (7.0, 10.0, 0.0, 0.0),
    (9.0, 6.0, 0.0, 0.0),
    (11.0, 10.0, 0.0, 0.0),
    (13.0, 6.0, 0.0, 0.0),
    (15.0, 10.0, 0.0, 0.0),
    (17.0, 6.0, 0.0, 90.0),
    (19.0, 10.0, -4.0, 90.0),
    (19.0, 6.0, -8.0, 90.0),
    (19.0, 10.0, -12.0, 90.0),
    (19.0, 6.0, -16.0, 90.0),
    (19.0, 10.0, -20.0, 90.0),
    (19.0, 6.0, -24.0, 90.0),
    (19.0, 10.0, -28.0, 90.0),
    (19.0, 6.0, -32.0, 90.0),
    (19.0, 10.0, -36.0, 90.0),
    (19.0, 6.0, -40.0, 90.0),
    (19.0, 5.0, -44.0, 90.0),
    (19.0, 4.0, -48.0, 90.0),
    (19.0, 3.0, -52.0, 90.0),
    (19.0, 2.0, -56.0, 90.0),
    (19.0, 1.0, -60.0, 90.0),
    (19.0, 0.0, -64.0, 90.0),
    (19.0, 0.0, -68.0, 90.0),
    (19.0, 0.0, -68.0, 180.0),
    (15.0, 1.0, -68.0, 180.0),
    (11.0, 2.0, -68.0, 180.0),
    (7.0, 3.0, -68.0, 180.0),
    (3.0, 4.0, -68.0, 180.0),
    (-1.0, 5.0, -68.0, 180.0),
    (-5.0, 6.0, -68.0, 180.0),
    (-5.0, 6.0, -68.0, 270.0),
    (-5.0, 10.0, -60.0, 270.0),
    (-5.0, 6.0, -52.0, 270.0),
    (-5.0, 10.0, -44.0, 270.0),
    (-5.0, 6.0, -36.0, 270.0),
    (-5.0, 10.0, -28.0, 270.0),
    (-5.0, 6.0, -20.0, 270.0),
    (-5.0, 10.0, -12.0, 270.0),
    (-5.0, 6.0, -4.0, 270.0),
    (-5.0, 5.0, 0.0, 270.0),
    (-5.0, 5.0, 0.0, 360.0),
    (-5.0, 0.0, 0.0, 360.0),
    (0.0, 0.0, 0.0, 360.0),
];

/// Build the default track, pre-populated with the authored balloon path
pub fn authored_track() -> KeyframeTrack {
    let mut track = KeyframeTrack::new(MAX_KEYFRAMES);
    for &(x, y, z, spin) in AUTHORED_PATH.iter() {
        track.append(Keyframe::new(Vec3::new(x, y, z), spin));
    }
    track
}

/// Records poses into a [`KeyframeTrack`] and plays them back by stepping
/// the live pose along each segment in fixed linear increments.
#[derive(Debug)]
pub struct KeyframePlayer {
    track: KeyframeTrack,
    steps_per_segment: u32,
    /// Index of the segment currently interpolating (segment i spans
    /// frames i and i + 1)
    segment: usize,
    /// Steps already applied inside the current segment
    step: u32,
    /// Per-step delta for the current segment
    increment: Keyframe,
    playing: bool,
    finished: bool,
    /// Live balloon pose, also mutated by manual authoring nudges
    pose: Keyframe,
}

impl KeyframePlayer {
    pub fn new(track: KeyframeTrack, steps_per_segment: u32) -> Self {
        Self {
            track,
            steps_per_segment,
            segment: 0,
            step: 0,
            increment: Keyframe::default(),
            playing: false,
            finished: false,
            pose: Keyframe::default(),
        }
    }

    /// Player loaded with the authored balloon path at production step count
    pub fn with_authored_track() -> Self {
        Self::new(authored_track(), STEPS_PER_SEGMENT)
    }

    /// Snapshot the live pose as a new keyframe. A no-op once the track
    /// is full.
    pub fn record(&mut self) {
        if self.track.append(self.pose) {
            info!("Recorded keyframe {} at {:?}", self.track.len() - 1, self.pose);
        }
    }

    /// Begin playback from the first recorded frame. Does nothing unless at
    /// least two frames exist and no playback is in progress; the guard is
    /// load-bearing, not cosmetic.
    pub fn start_playback(&mut self) -> bool {
        if self.playing || self.track.len() < 2 {
            return false;
        }
        self.pose = self.track.frames[0];
        self.segment = 0;
        self.step = 0;
        self.increment = self.segment_increment(0);
        self.playing = true;
        self.finished = false;
        info!("Balloon playback started ({} frames)", self.track.len());
        true
    }

    /// Advance playback by one simulated frame. Segment boundaries roll into
    /// the same tick, so a track of N frames lands exactly on the last frame
    /// after (N - 1) * steps_per_segment ticks and finishes on the tick after.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }

        if self.step >= self.steps_per_segment {
            self.segment += 1;
            if self.segment + 1 >= self.track.len() {
                self.playing = false;
                self.finished = true;
                info!("Balloon playback finished");
                return;
            }
            self.increment = self.segment_increment(self.segment);
            self.step = 0;
        }

        self.pose.offset += self.increment.offset;
        self.pose.spin += self.increment.spin;
        self.step += 1;
    }

    /// Translate the live pose, for composing new paths by hand
    pub fn nudge(&mut self, delta: Vec3) {
        self.pose.offset += delta;
    }

    pub fn pose(&self) -> Keyframe {
        self.pose
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn track(&self) -> &KeyframeTrack {
        &self.track
    }

    fn segment_increment(&self, segment: usize) -> Keyframe {
        let from = self.track.frames[segment];
        let to = self.track.frames[segment + 1];
        let steps = self.steps_per_segment as f32;
        Keyframe {
            offset: (to.offset - from.offset) / steps,
            spin: (to.spin - from.spin) / steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn three_frame_player(steps: u32) -> KeyframePlayer {
        let mut track = KeyframeTrack::new(MAX_KEYFRAMES);
        track.append(Keyframe::new(Vec3::new(0.0, 0.0, 0.0), 0.0));
        track.append(Keyframe::new(Vec3::new(10.0, 0.0, 0.0), 90.0));
        track.append(Keyframe::new(Vec3::new(10.0, 0.0, -10.0), 180.0));
        KeyframePlayer::new(track, steps)
    }

    #[test]
    fn test_track_capacity() {
        let mut track = KeyframeTrack::new(2);
        assert!(track.append(Keyframe::default()));
        assert!(track.append(Keyframe::default()));
        assert!(track.is_full());

        // Appending past capacity leaves the track unchanged
        assert!(!track.append(Keyframe::new(Vec3::ONE, 45.0)));
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn test_playback_needs_two_frames() {
        let mut track = KeyframeTrack::new(MAX_KEYFRAMES);
        track.append(Keyframe::default());
        let mut player = KeyframePlayer::new(track, 100);

        assert!(!player.start_playback());
        assert!(!player.is_playing());

        // tick() must be a no-op while inactive
        let before = player.pose();
        player.tick();
        assert_eq!(player.pose(), before);
    }

    #[test]
    fn test_start_is_idempotent_while_playing() {
        let mut player = three_frame_player(100);
        assert!(player.start_playback());
        for _ in 0..50 {
            player.tick();
        }
        let mid = player.pose();
        assert!(!player.start_playback());
        assert_eq!(player.pose(), mid);
    }

    #[test]
    fn test_end_to_end_playback() {
        let mut player = three_frame_player(100);
        assert!(player.start_playback());
        assert_eq!(player.pose(), Keyframe::new(Vec3::ZERO, 0.0));

        for _ in 0..100 {
            player.tick();
        }
        assert_relative_eq!(player.pose().offset.x, 10.0, epsilon = 1e-3);
        assert_relative_eq!(player.pose().offset.z, 0.0, epsilon = 1e-3);
        assert_relative_eq!(player.pose().spin, 90.0, epsilon = 1e-3);

        for _ in 0..100 {
            player.tick();
        }
        assert_relative_eq!(player.pose().offset.x, 10.0, epsilon = 1e-3);
        assert_relative_eq!(player.pose().offset.z, -10.0, epsilon = 1e-3);
        assert_relative_eq!(player.pose().spin, 180.0, epsilon = 1e-3);
        assert!(player.is_playing());

        // One more tick ends playback without moving the pose
        let last = player.pose();
        player.tick();
        assert!(!player.is_playing());
        assert!(player.is_finished());
        assert_eq!(player.pose(), last);

        // And any further tick is a no-op
        player.tick();
        assert_eq!(player.pose(), last);
    }

    #[test]
    fn test_replay_after_finish() {
        let mut player = three_frame_player(10);
        assert!(player.start_playback());
        for _ in 0..25 {
            player.tick();
        }
        assert!(player.is_finished());

        // A fresh start resets to frame zero and plays again
        assert!(player.start_playback());
        assert_eq!(player.pose(), Keyframe::new(Vec3::ZERO, 0.0));
        assert!(player.is_playing());
        assert!(!player.is_finished());
    }

    #[test]
    fn test_record_snapshots_live_pose() {
        let mut track = KeyframeTrack::new(4);
        track.append(Keyframe::default());
        let mut player = KeyframePlayer::new(track, 100);

        player.nudge(Vec3::new(3.0, 0.0, -1.0));
        player.record();

        assert_eq!(player.track().len(), 2);
        let recorded = *player.track().get(1).unwrap();
        assert_eq!(recorded.offset, Vec3::new(3.0, 0.0, -1.0));
    }

    #[test]
    fn test_record_at_capacity_is_noop() {
        let mut track = KeyframeTrack::new(1);
        track.append(Keyframe::default());
        let mut player = KeyframePlayer::new(track, 100);

        player.record();
        assert_eq!(player.track().len(), 1);
    }

    #[test]
    fn test_authored_track_shape() {
        let track = authored_track();
        assert_eq!(track.len(), 46);
        assert_eq!(track.capacity(), MAX_KEYFRAMES);
        // The authored path always starts un-rotated at the anchor
        let first = track.get(0).unwrap();
        assert_eq!(first.offset, Vec3::ZERO);
        assert_eq!(first.spin, 0.0);
        // and closes back at the anchor after a full turn
        let last = track.get(45).unwrap();
        assert_eq!(last.offset, Vec3::ZERO);
        assert_eq!(last.spin, 360.0);
    }

    #[test]
    fn test_authored_playback_reaches_final_frame() {
        let mut player = KeyframePlayer::new(authored_track(), 3);
        assert!(player.start_playback());
        for _ in 0..(45 * 3) {
            player.tick();
        }
        assert!(player.is_playing());
        assert_relative_eq!(player.pose().offset.x, 0.0, epsilon = 1e-2);
        assert_relative_eq!(player.pose().spin, 360.0, epsilon = 1e-2);
        player.tick();
        assert!(player.is_finished());
    }
}
