//! Volume and mute state
//!
//! Levels are 0-100. The external player renders the audio, so there is no
//! gain math here - only the level/mute bookkeeping the controller forwards
//! to the adapter.

/// Level used when muting at zero volume, so a later unmute is audible
const DEFAULT_UNMUTE_LEVEL: u8 = 50;

/// Volume controller
#[derive(Debug, Clone)]
pub struct VolumeControl {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl VolumeControl {
    /// Create a new volume controller
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (clamped to 0-100)
    ///
    /// Setting any nonzero level clears mute.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        if self.level > 0 {
            self.muted = false;
        }
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Toggle mute state
    ///
    /// Muting at volume 0 first raises the level to a nonzero default, so
    /// the eventual unmute never resumes at silence.
    pub fn toggle_mute(&mut self) {
        if !self.muted && self.level == 0 {
            self.level = DEFAULT_UNMUTE_LEVEL;
        }
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self::new(80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_level_clamps() {
        let mut vol = VolumeControl::new(50);
        vol.set_level(150);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn nonzero_level_clears_mute() {
        let mut vol = VolumeControl::new(80);
        vol.toggle_mute();
        assert!(vol.is_muted());

        vol.set_level(30);
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 30);
    }

    #[test]
    fn setting_zero_keeps_mute_state() {
        let mut vol = VolumeControl::new(80);
        vol.toggle_mute();
        vol.set_level(0);
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0);
    }

    #[test]
    fn mute_at_zero_raises_level_first() {
        let mut vol = VolumeControl::new(80);
        vol.set_level(0);
        assert!(!vol.is_muted());

        vol.toggle_mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), DEFAULT_UNMUTE_LEVEL);

        // Unmute lands on an audible level, never silence
        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert!(vol.level() > 0);
    }

    #[test]
    fn toggle_preserves_nonzero_level() {
        let mut vol = VolumeControl::new(73);
        vol.toggle_mute();
        assert_eq!(vol.level(), 73);
        vol.toggle_mute();
        assert_eq!(vol.level(), 73);
    }
}
