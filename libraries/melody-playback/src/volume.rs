//! Volume control with mute memory
//!
//! Volume is a linear level in `[0, 1]`, forwarded to the audio output as is.
//! Muting drops the level to zero and remembers the previous level so a
//! second toggle restores it.

/// Level restored when unmuting with nothing remembered
pub const DEFAULT_UNMUTE_LEVEL: f32 = 0.5;

/// Volume controller
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// Current level (0.0-1.0)
    level: f32,

    /// Level restored by the next unmute
    restore_level: f32,
}

impl Volume {
    /// Create a volume controller
    ///
    /// # Arguments
    /// * `level` - Initial level, clamped to `[0, 1]`
    /// * `unmute_level` - Level restored when unmuting from an initial zero;
    ///   a level that clamps to zero (or NaN) uses `DEFAULT_UNMUTE_LEVEL`
    pub fn new(level: f32, unmute_level: f32) -> Self {
        let restore_level = match clamp_level(unmute_level) {
            Some(l) if l > 0.0 => l,
            _ => DEFAULT_UNMUTE_LEVEL,
        };

        Self {
            level: clamp_level(level).unwrap_or(0.0),
            restore_level,
        }
    }

    /// Set the level, clamped to `[0, 1]`
    ///
    /// Returns `false` and leaves the level untouched for NaN input.
    pub fn set_level(&mut self, level: f32) -> bool {
        match clamp_level(level) {
            Some(level) => {
                self.level = level;
                true
            }
            None => false,
        }
    }

    /// Current level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Toggle mute
    ///
    /// A non-zero level is remembered and replaced by zero; a zero level is
    /// replaced by the remembered one.
    pub fn toggle_mute(&mut self) {
        if self.level > 0.0 {
            self.restore_level = self.level;
            self.level = 0.0;
        } else {
            self.level = self.restore_level;
        }
    }

    /// Muted means silent output
    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.7, DEFAULT_UNMUTE_LEVEL)
    }
}

fn clamp_level(level: f32) -> Option<f32> {
    if level.is_nan() {
        None
    } else {
        Some(level.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level() {
        let volume = Volume::default();
        assert_eq!(volume.level(), 0.7);
        assert!(!volume.is_muted());
    }

    #[test]
    fn level_clamping() {
        let mut volume = Volume::default();

        volume.set_level(1.5);
        assert_eq!(volume.level(), 1.0);

        volume.set_level(-0.2);
        assert_eq!(volume.level(), 0.0);

        volume.set_level(f32::INFINITY);
        assert_eq!(volume.level(), 1.0);

        volume.set_level(f32::NEG_INFINITY);
        assert_eq!(volume.level(), 0.0);
    }

    #[test]
    fn nan_is_ignored() {
        let mut volume = Volume::new(0.4, 0.5);
        assert!(!volume.set_level(f32::NAN));
        assert_eq!(volume.level(), 0.4);
    }

    #[test]
    fn mute_restores_previous_level() {
        let mut volume = Volume::new(0.8, 0.5);

        volume.toggle_mute();
        assert!(volume.is_muted());
        assert_eq!(volume.level(), 0.0);

        volume.toggle_mute();
        assert!(!volume.is_muted());
        assert_eq!(volume.level(), 0.8);
    }

    #[test]
    fn unmute_from_zero_uses_default_restore_level() {
        let mut volume = Volume::new(0.0, 0.5);
        assert!(volume.is_muted());

        volume.toggle_mute();
        assert_eq!(volume.level(), 0.5);
    }

    #[test]
    fn silent_unmute_level_falls_back_to_default() {
        for unmute_level in [0.0, -1.0, f32::NAN] {
            let mut volume = Volume::new(0.0, unmute_level);
            volume.toggle_mute();
            assert!(!volume.is_muted(), "stuck muted for {unmute_level}");
            assert_eq!(volume.level(), DEFAULT_UNMUTE_LEVEL);
        }
    }

    #[test]
    fn dragging_to_zero_then_unmuting_uses_last_muted_level() {
        let mut volume = Volume::new(0.9, 0.5);
        volume.toggle_mute();
        volume.toggle_mute();
        assert_eq!(volume.level(), 0.9);

        volume.set_level(0.0);
        volume.toggle_mute();
        assert_eq!(volume.level(), 0.9);
    }
}
