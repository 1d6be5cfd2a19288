//! Player state data types. Pure data, no logic.

use serde::{Deserialize, Serialize};

/// Lifecycle of a player ship.
///
/// `Playing` is the initial value; `Destroyed` is entered when the ship is
/// shot down and triggers the lives/power-up reset in
/// [`PlayerState`](crate::PlayerState). Replicated to remote observers, so
/// it carries the serde derives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    Playing,
    Destroyed,
}

/// The five collectible power-ups, in capsule cycling order.
///
/// Collecting fuel capsules walks the selection through these in order,
/// wrapping from `SeekerMissiles` back to `SpeedUp`. The selection is
/// local-only state, so unlike [`PlayerStatus`] it never crosses the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUp {
    SpeedUp,
    LaserPower,
    PlasmaBombs,
    HomingMissiles,
    SeekerMissiles,
}
