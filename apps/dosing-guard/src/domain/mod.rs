//! Domain layer - risk bands, limit tables, and the enforcement envelope.

pub mod enforcer;
pub mod events;
pub mod limits;
pub mod profile;

pub use enforcer::LimitEnforcer;
pub use events::ClampEvent;
pub use limits::{BandedLimit, VeryHardLimit};
pub use profile::{ProfileResolver, RiskBand};
