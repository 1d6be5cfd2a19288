//! Gameplay tuning for the player state object.
//!
//! Keep this separate from host/server configuration (tick rates, transport
//! settings, etc.); only values that shape a single player's state belong
//! here.

/// Ceiling for the speed-up level. A fixed game rule, not tuning.
pub const MAX_SPEED_UP_LEVEL: u8 = 4;

/// Ceiling for the laser power. A fixed game rule, not tuning.
pub const MAX_LASER_POWER: u8 = 4;

/// Tuning for a freshly constructed player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Lives a player starts the match with, restored by
    /// [`PlayerState::reset_lives`](crate::PlayerState::reset_lives).
    pub initial_lives: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { initial_lives: 3 }
    }
}
