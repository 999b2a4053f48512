//! Audio cue sink
//!
//! The simulation never blocks on sound: cue delivery is fire-and-forget and
//! a sink that cannot play simply logs and moves on.

/// Named sound cues the session emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Player jumped
    Jump,
    /// Player hit a barrier
    Hit,
    /// Death sting, right before the summary
    Die,
    /// Obstacle crossed, point scored
    Point,
    /// Menu music loop
    MenuMusic,
    /// In-game music loop
    GameMusic,
    /// Game-over music loop
    GameOverMusic,
}

impl AudioCue {
    /// Stable clip identifier for sinks backed by named media
    pub fn clip_id(&self) -> &'static str {
        match self {
            AudioCue::Jump => "jump",
            AudioCue::Hit => "hit",
            AudioCue::Die => "die",
            AudioCue::Point => "point",
            AudioCue::MenuMusic => "main-menu-music",
            AudioCue::GameMusic => "game-music",
            AudioCue::GameOverMusic => "gameover-music",
        }
    }

    /// Music cues loop until stopped; effects play once.
    pub fn looped(&self) -> bool {
        matches!(
            self,
            AudioCue::MenuMusic | AudioCue::GameMusic | AudioCue::GameOverMusic
        )
    }

    /// Default clip volume (0.0 - 1.0)
    pub fn volume(&self) -> f32 {
        match self {
            AudioCue::Jump => 0.6,
            AudioCue::Hit => 0.5,
            AudioCue::Die => 0.5,
            AudioCue::Point => 0.3,
            AudioCue::MenuMusic => 0.6,
            AudioCue::GameMusic => 0.9,
            AudioCue::GameOverMusic => 0.6,
        }
    }
}

/// A destination for audio cues. Implementations must not fail the caller.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);

    /// Stop a looping cue. Stopping a cue that is not playing is a no-op.
    fn stop(&mut self, cue: AudioCue);
}

/// Silent sink
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
    fn stop(&mut self, _cue: AudioCue) {}
}

/// Logs cues instead of playing them; used by headless runs.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("audio: play {} (vol {})", cue.clip_id(), cue.volume());
    }

    fn stop(&mut self, cue: AudioCue) {
        log::debug!("audio: stop {}", cue.clip_id());
    }
}
