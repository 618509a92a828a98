//! Physics module
//!
//! Ground sensing + kinematic velocity integration.
//! Архитектура:
//! - Rapier (bevy_rapier2d) для rigid bodies, коллайдеров и collision events
//! - Custom velocity integration (не используем Rapier forces) — headless
//!   режим интегрирует velocity напрямую, хост с полным Rapier plugin
//!   получает коллизии поверх KinematicPositionBased тела
//! - GroundSensor — инжектируемый ground-overlap запрос (host decides)

pub mod movement;
pub mod sensor;

// Re-export основных типов
pub use movement::{
    apply_gravity, integrate_velocity, spawn_player, sync_velocity_to_rapier, Gravity,
    PhysicsBody, RespawnPoint,
};
pub use sensor::{sense_ground, FlatFloor, GroundQuery, GroundSensor};
