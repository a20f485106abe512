//! Shared helpers for controller integration tests

#![allow(dead_code)]

use melody_core::{AudioOutput, Catalog, CoreError, Track, TrackId};
use std::sync::{Arc, Mutex};

/// Install a test-friendly subscriber once per test binary
///
/// Respects `RUST_LOG`; output is captured per test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Command received by the mock output
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetSource(String),
    Play,
    Pause,
    Seek(f64),
    SetVolume(f32),
}

/// Mock audio output that records every command
///
/// Clones share the same log, so a test can keep one handle while the
/// controller owns the other.
#[derive(Clone, Default)]
pub struct RecordingOutput {
    calls: Arc<Mutex<Vec<Call>>>,
    reject_play: Arc<Mutex<bool>>,
    reject_seek: Arc<Mutex<bool>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take and clear the recorded calls
    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    /// Make subsequent `play` calls fail
    pub fn reject_play(&self, reject: bool) {
        *self.reject_play.lock().unwrap() = reject;
    }

    /// Make subsequent `seek` calls fail
    pub fn reject_seek(&self, reject: bool) {
        *self.reject_seek.lock().unwrap() = reject;
    }

    /// Source most recently loaded, if any
    pub fn last_source(&self) -> Option<String> {
        self.calls.lock().unwrap().iter().rev().find_map(|call| match call {
            Call::SetSource(url) => Some(url.clone()),
            _ => None,
        })
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl AudioOutput for RecordingOutput {
    fn set_source(&mut self, url: &str) -> melody_core::Result<()> {
        self.record(Call::SetSource(url.to_string()));
        Ok(())
    }

    fn play(&mut self) -> melody_core::Result<()> {
        self.record(Call::Play);
        if *self.reject_play.lock().unwrap() {
            return Err(CoreError::device("output device busy"));
        }
        Ok(())
    }

    fn pause(&mut self) -> melody_core::Result<()> {
        self.record(Call::Pause);
        Ok(())
    }

    fn seek(&mut self, position: f64) -> melody_core::Result<()> {
        self.record(Call::Seek(position));
        if *self.reject_seek.lock().unwrap() {
            return Err(CoreError::device("source is not seekable"));
        }
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> melody_core::Result<()> {
        self.record(Call::SetVolume(volume));
        Ok(())
    }
}

/// Catalog of `n` tracks with ids `1..=n`
pub fn catalog_of(n: u32, duration: f64) -> Catalog {
    Catalog::new(
        (1..=n)
            .map(|i| {
                Track::new(TrackId::new(i), format!("Track {i}"), format!("Artist {i}"), duration)
                    .with_album(format!("Album {}", (i + 1) / 2))
                    .with_audio_url(format!("/audio/{i}.mp3"))
            })
            .collect(),
    )
    .unwrap()
}
