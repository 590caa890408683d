use crate::foundation::core::Fps;

/// Imperative capability over the externally-owned player. The player is
/// the only component that actually decodes and draws frames; commands are
/// fire-and-forget and the core does not await their completion.
pub trait PlayerHandle {
    /// Start or resume playback.
    fn play(&mut self);
    /// Pause playback.
    fn pause(&mut self);
    /// Volume in `[0.0, 1.0]`; callers clamp before issuing.
    fn set_volume(&mut self, volume: f64);
}

/// Ephemeral, core-owned playback state. Created when a composition is
/// loaded, discarded when it unmounts; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    /// Optimistic play flag; the player is the actual source of truth.
    pub is_playing: bool,
    /// Optimistic mute flag.
    pub is_muted: bool,
    /// Total frames of the loaded composition.
    pub total_duration_frames: u64,
}

/// Render a frame count as a human-readable `"M:SS"` elapsed-time string.
///
/// Holds for all non-negative frame counts and positive frame rates:
/// minutes are floored, seconds are floored and zero-padded to two digits.
pub fn format_elapsed(frame_count: u64, fps: Fps) -> String {
    let total_secs = fps.whole_secs(frame_count);
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Thin adapter between local transport intent and the external player.
///
/// The local `is_playing`/`is_muted` flags are optimistic: the external
/// player is the source of truth for actual playback and the controller
/// does not resynchronize from player-reported state changes. While no
/// player is attached, transport operations are dropped silently and local
/// state is left untouched; the next operation after attach rebases from
/// current state.
#[derive(Debug)]
pub struct TransportController<P> {
    player: Option<P>,
    state: PlaybackState,
    fps: Fps,
}

impl<P: PlayerHandle> TransportController<P> {
    /// A controller for a composition of the given length, with no player
    /// attached yet.
    pub fn new(total_duration_frames: u64, fps: Fps) -> Self {
        Self {
            player: None,
            state: PlaybackState {
                is_playing: false,
                is_muted: false,
                total_duration_frames,
            },
            fps,
        }
    }

    /// Hand the controller the mounted player.
    pub fn attach(&mut self, player: P) {
        self.player = Some(player);
    }

    /// Take the player back (composition unmount). Local flags survive so a
    /// re-attach rebases from where the user left off.
    pub fn detach(&mut self) -> Option<P> {
        self.player.take()
    }

    /// Snapshot of the local playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Local (optimistic) play flag, for rendering the play/pause icon.
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Local (optimistic) mute flag, for rendering the mute icon.
    pub fn is_muted(&self) -> bool {
        self.state.is_muted
    }

    /// Pause when playing, play when paused, then flip the local flag.
    /// Dropped silently when no player is attached.
    pub fn toggle_play(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        if self.state.is_playing {
            player.pause();
        } else {
            player.play();
        }
        self.state.is_playing = !self.state.is_playing;
    }

    /// Volume 0.0 when muting, 1.0 when unmuting, then flip the local flag.
    /// Dropped silently when no player is attached.
    pub fn toggle_mute(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        if self.state.is_muted {
            player.set_volume(1.0);
        } else {
            player.set_volume(0.0);
        }
        self.state.is_muted = !self.state.is_muted;
    }

    /// Elapsed-time label for the given playhead frame.
    pub fn elapsed_label(&self, frame: u64) -> String {
        format_elapsed(frame, self.fps)
    }

    /// Total-duration label for the loaded composition.
    pub fn total_label(&self) -> String {
        format_elapsed(self.state.total_duration_frames, self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingPlayer {
        commands: Vec<String>,
        volumes: Vec<f64>,
    }

    impl PlayerHandle for RecordingPlayer {
        fn play(&mut self) {
            self.commands.push("play".to_string());
        }
        fn pause(&mut self) {
            self.commands.push("pause".to_string());
        }
        fn set_volume(&mut self, volume: f64) {
            self.volumes.push(volume);
        }
    }

    #[test]
    fn format_elapsed_examples() {
        let fps = Fps::STANDARD;
        assert_eq!(format_elapsed(1800, fps), "1:00");
        assert_eq!(format_elapsed(905, fps), "0:30");
        assert_eq!(format_elapsed(0, fps), "0:00");
        assert_eq!(format_elapsed(29, fps), "0:00");
        assert_eq!(format_elapsed(3 * 60 * 30 + 7 * 30, fps), "3:07");
    }

    #[test]
    fn format_elapsed_seconds_stay_in_range() {
        let fps = Fps::STANDARD;
        for frames in 0..=4000 {
            let label = format_elapsed(frames, fps);
            let (m, ss) = label.split_once(':').unwrap();
            assert_eq!(ss.len(), 2);
            let secs: u64 = ss.parse().unwrap();
            assert!(secs <= 59);
            assert_eq!(m.parse::<u64>().unwrap(), frames / 30 / 60);
        }
    }

    #[test]
    fn toggle_play_flips_and_issues_commands() {
        let mut transport = TransportController::new(300, Fps::STANDARD);
        transport.attach(RecordingPlayer::default());

        transport.toggle_play();
        assert!(transport.is_playing());
        transport.toggle_play();
        assert!(!transport.is_playing());

        let player = transport.detach().unwrap();
        assert_eq!(player.commands, ["play", "pause"]);
    }

    #[test]
    fn toggle_mute_twice_returns_to_original() {
        let mut transport = TransportController::new(300, Fps::STANDARD);
        transport.attach(RecordingPlayer::default());

        transport.toggle_mute();
        assert!(transport.is_muted());
        transport.toggle_mute();
        assert!(!transport.is_muted());

        let player = transport.detach().unwrap();
        assert_eq!(player.volumes, [0.0, 1.0]);
    }

    #[test]
    fn commands_without_player_are_dropped() {
        let mut transport: TransportController<RecordingPlayer> =
            TransportController::new(300, Fps::STANDARD);

        transport.toggle_play();
        transport.toggle_mute();
        assert!(!transport.is_playing());
        assert!(!transport.is_muted());

        // The next successful operation rebases from current local state.
        transport.attach(RecordingPlayer::default());
        transport.toggle_play();
        assert!(transport.is_playing());
        assert_eq!(transport.detach().unwrap().commands, ["play"]);
    }

    #[test]
    fn labels_use_composition_duration() {
        let transport: TransportController<RecordingPlayer> =
            TransportController::new(1269, Fps::STANDARD);
        assert_eq!(transport.total_label(), "0:42");
        assert_eq!(transport.elapsed_label(1800), "1:00");
    }
}
