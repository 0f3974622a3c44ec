//! Game Module
//!
//! Match rules built on top of the engine: bunnies, power-ups, the ranged
//! attack, the countdown and the session that ties them together.

pub mod bunnies;
pub mod clock;
pub mod config;
pub mod events;
pub mod hud;
pub mod power_ups;
pub mod projectiles;
pub mod session;

pub use bunnies::{Bunny, BunnySwarm, WanderConfig};
pub use clock::{FrameClock, MatchTimer};
pub use config::{ConfigError, FeatureFlags, GameConfig, InputConfig};
pub use events::{CaptureCause, GameEvent, Outcome};
pub use hud::HudSnapshot;
pub use power_ups::{PowerUp, PowerUpConfig, PowerUpKind, PowerUpSpawn};
pub use projectiles::{Projectile, RangedAttackConfig};
pub use session::GameSession;
