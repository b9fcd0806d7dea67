// Background audio playback

use anyhow::Result;
use log::{info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default volume for the background track
const BACKGROUND_VOLUME: f32 = 0.4;

/// Plays the looping background track. The output stream must outlive the
/// sink, so both are held for the life of the viewer.
pub struct AudioPlayer {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
}

impl AudioPlayer {
    /// Open the default output device and start the given track on loop
    pub fn play_looping<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;

        let file = BufReader::new(File::open(path.as_ref())?);
        let source = Decoder::new(file)?.repeat_infinite();
        sink.append(source);
        sink.set_volume(BACKGROUND_VOLUME);

        info!("Background track playing: {}", path.as_ref().display());

        Ok(Self {
            _stream: stream,
            _handle: handle,
            sink,
        })
    }

    /// Start the background track if possible; a machine without an audio
    /// device gets a silent viewer, not a crash.
    pub fn try_play_looping<P: AsRef<Path>>(path: P) -> Option<Self> {
        match Self::play_looping(path) {
            Ok(player) => Some(player),
            Err(e) => {
                warn!("Audio disabled: {}", e);
                None
            }
        }
    }

    pub fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    pub fn volume(&self) -> f32 {
        self.sink.volume()
    }
}
