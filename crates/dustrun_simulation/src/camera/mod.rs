//! Camera collaborator surface
//!
//! Камера целиком на стороне хоста (virtual camera + noise/perlin);
//! ядро только пушит изменения амплитуды shake'а.

use bevy::prelude::*;

/// Event: setAmplitude для camera-shake target хоста
///
/// Пушится при старте/рестарте shake (значение intensity) и при
/// истечении (0.0). Fire-and-forget.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ShakeAmplitude(pub f32);
