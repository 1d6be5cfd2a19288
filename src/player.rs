//! The authoritative per-player state object.

use crate::config::{PlayerConfig, MAX_LASER_POWER, MAX_SPEED_UP_LEVEL};
use crate::entities::{PlayerStatus, PowerUp};

/// Score, lives, power-up slots, and the Playing/Destroyed machine for one
/// player.
///
/// Fields are private so every mutation goes through a method and the two
/// invariants hold: the level counters never exceed their ceilings, and the
/// Destroyed transition always pairs the life loss with the full power-up
/// reset. All methods are synchronous field mutation; a single call is atomic
/// with respect to itself and nothing more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    status: PlayerStatus,
    game_score: i32,
    lives: i32,
    speed_up_level: u8,
    laser_power: u8,
    plasma_bombs: bool,
    homing_missiles: bool,
    seeker_missiles: bool,
    selected_power_up: PowerUp,
    power_up_activation_mode: bool,
    config: PlayerConfig,
}

impl PlayerState {
    // ── Construction ──────────────────────────────────────────────────────────

    /// A fresh player with the default tuning: Playing, zero score, three
    /// lives, no power-ups.
    pub fn new() -> Self {
        Self::with_config(PlayerConfig::default())
    }

    /// A fresh player with custom tuning.
    pub fn with_config(config: PlayerConfig) -> Self {
        Self {
            status: PlayerStatus::Playing,
            game_score: 0,
            lives: config.initial_lives,
            speed_up_level: 0,
            laser_power: 0,
            plasma_bombs: false,
            homing_missiles: false,
            seeker_missiles: false,
            selected_power_up: PowerUp::SpeedUp,
            power_up_activation_mode: false,
            config,
        }
    }

    // ── State machine ─────────────────────────────────────────────────────────

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Requests a lifecycle transition.
    ///
    /// Requesting the state the player is already in is a no-op. Entering
    /// `Destroyed` takes one life and strips every power-up (see
    /// [`reduce_lives`](Self::reduce_lives)). The setter accepts `Playing`
    /// as well, though gameplay only reaches it through initialization.
    pub fn set_status(&mut self, new_status: PlayerStatus) {
        if self.status == new_status {
            tracing::debug!("Player already in state {:?}, ignoring", new_status);
            return;
        }
        match new_status {
            PlayerStatus::Playing => {
                tracing::info!("Setting new player state: Playing");
                self.status = new_status;
            }
            PlayerStatus::Destroyed => {
                tracing::info!("Setting new player state: Destroyed");
                self.status = new_status;
                self.reduce_lives();
            }
        }
    }

    // ── Score ─────────────────────────────────────────────────────────────────

    pub fn game_score(&self) -> i32 {
        self.game_score
    }

    /// Adds `points` to the score. Negative deltas are accepted (penalties),
    /// and the score may go negative with them.
    pub fn increase_game_score(&mut self, points: i32) {
        self.game_score = self.game_score.saturating_add(points);
    }

    pub fn reset_game_score(&mut self) {
        self.game_score = 0;
    }

    // ── Lives ─────────────────────────────────────────────────────────────────

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn increase_lives(&mut self) {
        self.lives = self.lives.saturating_add(1);
    }

    /// Takes one life and strips every power-up: the level counters zero, the
    /// upgrade flags clear, and the selection and activation mode return to
    /// their defaults. The score is untouched.
    ///
    /// There is no floor at zero: lives keep going negative, and game-over
    /// detection belongs to the caller.
    pub fn reduce_lives(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.reset_speed_up_level();
        self.laser_power = 0;
        self.plasma_bombs = false;
        self.homing_missiles = false;
        self.seeker_missiles = false;
        self.selected_power_up = PowerUp::SpeedUp;
        self.power_up_activation_mode = false;
    }

    /// Restores lives to the configured initial value.
    pub fn reset_lives(&mut self) {
        self.lives = self.config.initial_lives;
    }

    // ── Speed-up level ────────────────────────────────────────────────────────

    pub fn speed_up_level(&self) -> u8 {
        self.speed_up_level
    }

    /// Raises the speed-up level by one, clamped at [`MAX_SPEED_UP_LEVEL`].
    pub fn increase_speed_up_level(&mut self) {
        self.speed_up_level = (self.speed_up_level + 1).min(MAX_SPEED_UP_LEVEL);
    }

    pub fn reset_speed_up_level(&mut self) {
        self.speed_up_level = 0;
    }

    // ── Laser power ───────────────────────────────────────────────────────────

    pub fn laser_power(&self) -> u8 {
        self.laser_power
    }

    /// Raises the laser power by one, clamped at [`MAX_LASER_POWER`]. Laser
    /// power has no standalone reset; it only drops back to zero when the
    /// ship is destroyed.
    pub fn increase_laser_power(&mut self) {
        self.laser_power = (self.laser_power + 1).min(MAX_LASER_POWER);
    }

    // ── Power-ups ─────────────────────────────────────────────────────────────

    pub fn selected_power_up(&self) -> PowerUp {
        self.selected_power_up
    }

    pub fn power_up_activation_mode(&self) -> bool {
        self.power_up_activation_mode
    }

    pub fn set_power_up_activation_mode(&mut self, activation_mode: bool) {
        self.power_up_activation_mode = activation_mode;
    }

    /// A fuel capsule was picked up. In activation mode the capsule triggers
    /// the selected power-up; otherwise it advances the selection by one.
    pub fn fuel_capsule_collected(&mut self) {
        if self.power_up_activation_mode {
            self.activate_selected_power_up();
        } else {
            self.shift_selected_power_up();
        }
    }

    /// Advances the selection to the next power-up, wrapping back to
    /// `SpeedUp` after `SeekerMissiles`.
    pub fn shift_selected_power_up(&mut self) {
        self.selected_power_up = match self.selected_power_up {
            PowerUp::SpeedUp => PowerUp::LaserPower,
            PowerUp::LaserPower => PowerUp::PlasmaBombs,
            PowerUp::PlasmaBombs => PowerUp::HomingMissiles,
            PowerUp::HomingMissiles => PowerUp::SeekerMissiles,
            PowerUp::SeekerMissiles => PowerUp::SpeedUp,
        };
        tracing::debug!("Power-up selection shifted to {:?}", self.selected_power_up);
    }

    /// Applies the effect of the selected power-up, then resets the selection
    /// to `SpeedUp` unconditionally.
    pub fn activate_selected_power_up(&mut self) {
        tracing::debug!("Activating power-up {:?}", self.selected_power_up);
        match self.selected_power_up {
            PowerUp::SpeedUp => self.increase_speed_up_level(),
            PowerUp::LaserPower => self.increase_laser_power(),
            PowerUp::PlasmaBombs => self.plasma_bombs = true,
            PowerUp::HomingMissiles => self.homing_missiles = true,
            PowerUp::SeekerMissiles => self.seeker_missiles = true,
        }
        self.selected_power_up = PowerUp::SpeedUp;
    }

    // ── Weapon upgrades ───────────────────────────────────────────────────────

    pub fn plasma_bombs(&self) -> bool {
        self.plasma_bombs
    }

    pub fn homing_missiles(&self) -> bool {
        self.homing_missiles
    }

    pub fn seeker_missiles(&self) -> bool {
        self.seeker_missiles
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
