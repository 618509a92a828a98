//! ECS Components игрового ядра
//!
//! Организация по доменам:
//! - player: персонаж и его per-tick состояние (Player, Facing, AnimationState, ControlInput, Grounded)
//! - health: здоровье и жизни (Health, Lives, LifeState)
//! - shake: screen shake state machine (ScreenShake)
//! - tuning: движковые тюнинг-параметры (MovementTuning)

pub mod health;
pub mod player;
pub mod shake;
pub mod tuning;

// Re-exports для удобного импорта
pub use health::*;
pub use player::*;
pub use shake::*;
pub use tuning::*;
