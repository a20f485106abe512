//! Playback controller - single owner of player state
//!
//! Drives one `AudioOutput` and one `FavoritesStore`. Views read state through
//! the getters or `snapshot()` and change it only through the commands below.

use crate::{
    error::{PlaybackError, Result},
    events::{AudioEvent, PlayerEvent},
    shuffle::{pick_shuffled_next, RandomSource, ThreadRandom},
    types::{PlaybackConfig, PlayerSnapshot},
    volume::Volume,
};
use melody_core::{AudioOutput, Catalog, FavoriteSet, FavoritesStore, Track, TrackId};
use tracing::{debug, error, info, warn};

/// Playback-state controller
///
/// `is_playing` is play *intent*: device failures are reported as
/// `PlayerEvent::DeviceError` and never flip it back.
pub struct PlaybackController {
    catalog: Catalog,
    output: Box<dyn AudioOutput>,
    favorites_store: Box<dyn FavoritesStore>,
    random: Box<dyn RandomSource>,

    // Player state
    current_track_id: TrackId,
    is_playing: bool,
    /// Last reported device position, clamped on read
    current_time: f64,
    volume: Volume,
    shuffle: bool,
    repeat: bool,
    favorites: FavoriteSet,

    pending_events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create a controller and load the initial track into the output
    ///
    /// Favorites are read from `favorites_store`; unreadable data starts an
    /// empty set. An unknown `default_track_id` falls back to the first
    /// catalog entry.
    pub fn new(
        catalog: Catalog,
        config: PlaybackConfig,
        output: Box<dyn AudioOutput>,
        favorites_store: Box<dyn FavoritesStore>,
    ) -> Self {
        let current_track_id = match config.default_track_id {
            Some(id) if catalog.contains(id) => id,
            Some(id) => {
                warn!(
                    "Default track {} not in catalog, starting at {}",
                    id,
                    catalog.first().id
                );
                catalog.first().id
            }
            None => catalog.first().id,
        };

        let favorites = match favorites_store.try_load() {
            Ok(favorites) => {
                debug!("Starting with {} favorites", favorites.len());
                favorites
            }
            Err(e) => {
                let err = PlaybackError::PersistenceRead(e.to_string());
                warn!("{}, starting with no favorites", err);
                FavoriteSet::new()
            }
        };

        let mut controller = Self {
            catalog,
            output,
            favorites_store,
            random: Box::new(ThreadRandom),
            current_track_id,
            is_playing: false,
            current_time: 0.0,
            volume: Volume::new(config.volume, config.unmute_volume),
            shuffle: config.shuffle,
            repeat: config.repeat,
            favorites,
            pending_events: Vec::new(),
        };

        controller.load_current_source();
        controller.forward_volume();
        controller
    }

    /// Validate `config`, load its catalog and build a controller
    ///
    /// Reads `config.catalog_path` when set, otherwise the bundled catalog.
    pub fn from_config(
        config: PlaybackConfig,
        output: Box<dyn AudioOutput>,
        favorites_store: Box<dyn FavoritesStore>,
    ) -> Result<Self> {
        config.validate()?;
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::bundled()?,
        };
        info!("Loaded catalog with {} tracks", catalog.len());
        Ok(Self::new(catalog, config, output, favorites_store))
    }

    /// Replace the random source used by shuffle
    #[must_use]
    pub fn with_random_source(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    // ===== Transport =====

    /// Flip play intent
    ///
    /// Emits `NowPlaying` on the transition to playing.
    pub fn play_pause(&mut self) {
        self.is_playing = !self.is_playing;
        debug!("Play intent: {}", self.is_playing);
        self.emit_playing_changed();

        if self.is_playing {
            self.emit_now_playing();
            self.output_play();
        } else if let Err(e) = self.output.pause() {
            self.report_device_error("pause", &e);
        }
    }

    /// Skip forward
    ///
    /// Shuffle picks uniformly among the other tracks; otherwise catalog
    /// order, wrapping to the first track. Starts playback if paused.
    pub fn next(&mut self) {
        let target = if self.shuffle {
            pick_shuffled_next(&self.catalog, self.current_track_id, self.random.as_mut())
        } else {
            self.catalog.next_after(self.current_track_id)
        };
        self.skip_to(target);
    }

    /// Skip backward in catalog order, wrapping to the last track
    ///
    /// Always catalog order, even with shuffle on. Starts playback if paused.
    pub fn previous(&mut self) {
        let target = self.catalog.previous_before(self.current_track_id);
        self.skip_to(target);
    }

    /// Select a track and start playing it
    ///
    /// Selecting the current track keeps its position.
    pub fn select_track(&mut self, id: TrackId) -> Result<()> {
        if !self.catalog.contains(id) {
            return Err(PlaybackError::InvalidTrackId(id));
        }

        let was_playing = self.is_playing;
        self.is_playing = true;
        if !was_playing {
            self.emit_playing_changed();
        }

        if id == self.current_track_id {
            if !was_playing {
                self.output_play();
            }
        } else {
            self.change_track(id);
        }
        Ok(())
    }

    /// Seek to a position in seconds, clamped to `[0, duration]`
    pub fn seek(&mut self, seconds: f64) {
        let position = self.current_track().clamp_position(seconds);
        self.current_time = position;
        debug!("Seek to {:.2}s", position);

        if let Err(e) = self.output.seek(position) {
            self.report_device_error("seek", &e);
        }
    }

    /// Seek to a fraction of the track (progress-bar click)
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let duration = self.current_track().duration;
        self.seek(fraction * duration);
    }

    // ===== Volume =====

    /// Set volume, clamped to `[0, 1]`; NaN is ignored
    pub fn set_volume(&mut self, volume: f32) {
        if !self.volume.set_level(volume) {
            debug!("Ignoring non-numeric volume");
            return;
        }
        self.forward_volume();
        self.emit_volume_changed();
    }

    /// Mute, or restore the volume from before muting
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        debug!(
            "Mute toggled: muted={} level={}",
            self.volume.is_muted(),
            self.volume.level()
        );
        self.forward_volume();
        self.emit_volume_changed();
    }

    // ===== Modes =====

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        info!("Shuffle {}", if self.shuffle { "enabled" } else { "disabled" });
        self.pending_events.push(PlayerEvent::ShuffleToggled {
            enabled: self.shuffle,
        });
    }

    /// Repeat is consulted only on natural end of track, never on skips
    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
        info!("Repeat {}", if self.repeat { "enabled" } else { "disabled" });
        self.pending_events.push(PlayerEvent::RepeatToggled {
            enabled: self.repeat,
        });
    }

    // ===== Favorites =====

    /// Add or remove a favorite and write the set through to storage
    ///
    /// Ids outside the catalog are toggled too; only the "added"
    /// notification needs a catalog track to name.
    pub fn toggle_favorite(&mut self, id: TrackId) {
        if self.favorites.remove(&id) {
            debug!("Removed favorite {}", id);
            self.pending_events
                .push(PlayerEvent::FavoriteRemoved { track_id: id });
        } else {
            self.favorites.insert(id);
            debug!("Added favorite {}", id);
            if let Some(track) = self.catalog.get(id) {
                let event = PlayerEvent::FavoriteAdded {
                    track_id: id,
                    title: track.title.clone(),
                    artist: track.artist.clone(),
                };
                self.pending_events.push(event);
            }
        }

        self.persist_favorites();
    }

    pub fn is_favorite(&self, id: TrackId) -> bool {
        self.favorites.contains(&id)
    }

    // ===== Audio output notifications =====

    /// Apply a notification from the audio output
    pub fn handle_audio_event(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::PositionChanged { position } => {
                if position.is_nan() {
                    return;
                }
                self.current_time = position;
            }
            AudioEvent::Ended => self.handle_track_ended(),
            AudioEvent::PlaybackFailed { message } => {
                self.report_device_error("play", &message);
            }
        }
    }

    fn handle_track_ended(&mut self) {
        if !self.repeat {
            debug!("Track {} ended, advancing", self.current_track_id);
            self.next();
            return;
        }

        debug!("Track {} ended, repeating", self.current_track_id);
        self.restart_current();
    }

    // ===== State Queries =====

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current track record
    pub fn current_track(&self) -> &Track {
        self.catalog
            .get(self.current_track_id)
            .unwrap_or_else(|| self.catalog.first())
    }

    pub fn current_track_id(&self) -> TrackId {
        self.current_track_id
    }

    /// Play intent (not hardware state)
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Position in seconds, clamped to `[0, duration]`
    pub fn current_time(&self) -> f64 {
        self.current_track().clamp_position(self.current_time)
    }

    /// Position as a fraction of the duration; 0 for zero-length tracks
    pub fn progress(&self) -> f64 {
        let duration = self.current_track().duration;
        if duration > 0.0 {
            self.current_time() / duration
        } else {
            0.0
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn shuffle_active(&self) -> bool {
        self.shuffle
    }

    pub fn repeat_active(&self) -> bool {
        self.repeat
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Copy of the readable state surface
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            current_track: self.current_track().clone(),
            is_playing: self.is_playing,
            current_time: self.current_time(),
            progress: self.progress(),
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            shuffle_active: self.shuffle,
            repeat_active: self.repeat,
            favorites: self.favorites.clone(),
        }
    }

    // ===== Events =====

    /// Take all pending notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending notifications
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Move to `target` with play intent forced on
    fn skip_to(&mut self, target: TrackId) {
        if !self.is_playing {
            self.is_playing = true;
            self.emit_playing_changed();
        }

        if target == self.current_track_id {
            // Single-track catalog: nothing to switch to
            self.restart_current();
        } else {
            self.change_track(target);
        }
    }

    /// Switch tracks; intent must already be set
    fn change_track(&mut self, target: TrackId) {
        let previous = self.current_track_id;
        self.current_track_id = target;
        self.current_time = 0.0;

        info!(
            "Track changed: {} -> {} ({})",
            previous,
            target,
            self.current_track().title
        );
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id: target,
            previous_track_id: previous,
        });

        self.load_current_source();
        if self.is_playing {
            self.output_play();
        }
    }

    /// Rewind the current track and play it
    fn restart_current(&mut self) {
        self.current_time = 0.0;
        if let Err(e) = self.output.seek(0.0) {
            self.report_device_error("seek", &e);
        }

        if !self.is_playing {
            self.is_playing = true;
            self.emit_playing_changed();
        }
        self.output_play();
    }

    fn load_current_source(&mut self) {
        let url = self.current_track().audio_url.clone();
        if let Err(e) = self.output.set_source(&url) {
            self.report_device_error("load source", &e);
        }
    }

    fn output_play(&mut self) {
        if let Err(e) = self.output.play() {
            self.report_device_error("play", &e);
        }
    }

    fn forward_volume(&mut self) {
        let level = self.volume.level();
        if let Err(e) = self.output.set_volume(level) {
            self.report_device_error("set volume", &e);
        }
    }

    fn persist_favorites(&mut self) {
        if let Err(e) = self.favorites_store.save(&self.favorites) {
            let err = PlaybackError::PersistenceWrite(e.to_string());
            error!("{}", err);
            self.pending_events.push(PlayerEvent::PersistenceError {
                message: e.to_string(),
            });
        }
    }

    fn report_device_error(&mut self, action: &str, cause: &dyn std::fmt::Display) {
        let err = PlaybackError::PlaybackDevice(format!("{action} failed: {cause}"));
        error!("{}", err);
        self.pending_events.push(PlayerEvent::DeviceError {
            message: format!("{action} failed: {cause}"),
        });
    }

    /// Emit a now-playing notification for the current track
    fn emit_now_playing(&mut self) {
        let track = self.current_track();
        let event = PlayerEvent::NowPlaying {
            track_id: track.id,
            title: track.title.clone(),
            artist: track.artist.clone(),
        };
        self.pending_events.push(event);
    }

    fn emit_playing_changed(&mut self) {
        self.pending_events.push(PlayerEvent::PlayingChanged {
            playing: self.is_playing,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlayerEvent::VolumeChanged {
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
        });
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("current_track_id", &self.current_track_id)
            .field("is_playing", &self.is_playing)
            .field("current_time", &self.current_time)
            .field("volume", &self.volume)
            .field("shuffle", &self.shuffle)
            .field("repeat", &self.repeat)
            .field("favorites", &self.favorites)
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}
