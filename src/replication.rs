//! The externally observable slice of the player state.
//!
//! The host networking layer never reads [`PlayerState`] fields directly.
//! It polls a [`ReplicationTracker`], which hands out a [`ReplicatedState`]
//! snapshot whenever one of the observable fields changed. Transport,
//! ordering, and delivery to remote observers are entirely the host's job.

use serde::{Deserialize, Serialize};

use crate::entities::PlayerStatus;
use crate::player::PlayerState;

/// Snapshot of the fields remote observers may see: the lifecycle status,
/// the laser power, and the three weapon-upgrade flags.
///
/// Score, lives, speed-up level, the power-up selection, and the activation
/// mode are local-only and have no representation here. The serde derives
/// are the hand-off format for whatever transport the host uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicatedState {
    pub status: PlayerStatus,
    pub laser_power: u8,
    pub plasma_bombs: bool,
    pub homing_missiles: bool,
    pub seeker_missiles: bool,
}

impl From<&PlayerState> for ReplicatedState {
    fn from(state: &PlayerState) -> Self {
        Self {
            status: state.status(),
            laser_power: state.laser_power(),
            plasma_bombs: state.plasma_bombs(),
            homing_missiles: state.homing_missiles(),
            seeker_missiles: state.seeker_missiles(),
        }
    }
}

impl PlayerState {
    /// Current snapshot of the replicated subset.
    pub fn replicated(&self) -> ReplicatedState {
        ReplicatedState::from(self)
    }
}

/// Change detector the host polls once per network tick.
#[derive(Debug, Default)]
pub struct ReplicationTracker {
    last_sent: Option<ReplicatedState>,
}

impl ReplicationTracker {
    pub fn new() -> Self {
        Self { last_sent: None }
    }

    /// Returns the current snapshot when it differs from the last one handed
    /// out, recording it as sent. The first poll always yields a snapshot so
    /// late joiners get the full picture. Mutations that touch only
    /// local-only fields never produce one.
    pub fn poll(&mut self, state: &PlayerState) -> Option<ReplicatedState> {
        let current = state.replicated();
        if self.last_sent == Some(current) {
            return None;
        }
        self.last_sent = Some(current);
        Some(current)
    }
}

// ── Wire codec for the status enum ────────────────────────────────────────────

impl PlayerStatus {
    /// Raw wire value of this status.
    pub fn as_raw(self) -> u8 {
        match self {
            PlayerStatus::Playing => 0,
            PlayerStatus::Destroyed => 1,
        }
    }

    /// Decodes a raw wire value. Unknown values are rejected with a warning
    /// so a corrupt or newer-version byte never becomes a bogus transition;
    /// the caller keeps its current state.
    pub fn from_raw(raw: u8) -> Option<PlayerStatus> {
        match raw {
            0 => Some(PlayerStatus::Playing),
            1 => Some(PlayerStatus::Destroyed),
            _ => {
                tracing::warn!("Invalid player status value {}, state unchanged", raw);
                None
            }
        }
    }
}
