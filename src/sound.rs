//! Sound effect identifiers and the audio playback seam.
//!
//! Sound clips live on a read-only asset store as `sounds/<name>.wav`.
//! Playback is fire-and-forget: a new request preempts whatever is playing
//! at the driver level, and the controller polls `is_playing` instead of
//! blocking.

use heapless::String;

const SOUND_NAME_ON: &str = "on";
const SOUND_NAME_OFF: &str = "off";
const SOUND_NAME_IDLE: &str = "idle";
const SOUND_NAME_SWING: &str = "swing";
const SOUND_NAME_HIT: &str = "hit";

const ASSET_DIR: &str = "sounds/";
const ASSET_EXT: &str = ".wav";

/// Maximum length of a built asset path.
pub const ASSET_PATH_CAPACITY: usize = 24;

/// The named sound clips the prop uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    /// Power-on sweep accompaniment.
    PowerOn,
    /// Power-off sweep accompaniment.
    PowerOff,
    /// Background hum, played looped while idle.
    Idle,
    /// Swing whoosh.
    Swing,
    /// Clash.
    Hit,
}

impl SoundId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PowerOn => SOUND_NAME_ON,
            Self::PowerOff => SOUND_NAME_OFF,
            Self::Idle => SOUND_NAME_IDLE,
            Self::Swing => SOUND_NAME_SWING,
            Self::Hit => SOUND_NAME_HIT,
        }
    }

    /// Build the asset-store path for this clip, e.g. `sounds/swing.wav`.
    pub fn asset_path(self) -> String<ASSET_PATH_CAPACITY> {
        let mut path = String::new();
        // All five names fit the capacity.
        let _ = path.push_str(ASSET_DIR);
        let _ = path.push_str(self.as_str());
        let _ = path.push_str(ASSET_EXT);
        path
    }
}

/// Error returned when a requested clip is absent or unreadable.
///
/// The controller treats this as a documented no-op: the animation that the
/// sound would have accompanied still runs on its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMissing;

/// Abstract digital audio playback device.
pub trait AudioPlayer {
    /// Start playing a clip, preempting any current playback.
    ///
    /// With `looped` set the clip repeats until preempted.
    fn play(&mut self, sound: SoundId, looped: bool) -> Result<(), AssetMissing>;

    /// Whether a clip is currently playing.
    fn is_playing(&self) -> bool;
}
