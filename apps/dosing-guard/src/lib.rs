// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! Dosing Guard - Safety Envelope Core
//!
//! Safety-envelope enforcement layer for a closed-loop insulin dosing
//! controller. The dosing algorithm proposes values (bolus sizes, basal
//! rates, IOB ceilings, glucose targets); this crate owns the fixed,
//! physiologically derived limits those values must respect, clamps any
//! value that violates them, and records an auditable event whenever a
//! clamp changes a value.
//!
//! This crate never computes doses. It only bounds and audits values
//! computed elsewhere.
//!
//! # Architecture
//!
//! ```text
//! dosing algorithm / settings editors
//!         │
//!         ▼
//! LimitEnforcer ──► ProfileResolver ──► SettingsStore (risk band setting)
//!     │   │
//!     │   └── accessors ──► fixed BandedLimit tables
//!     │
//!     └── clamp_and_audit
//!             ├── tracing::error!          (synchronous, primary record)
//!             ├── AuditStore               (fire-and-forget, best effort)
//!             └── AlertSink                (user-visible)
//! ```
//!
//! ## Layers
//!
//! - **Domain**: risk bands, limit tables, the clamp-and-audit envelope
//! - **Application**: ports (traits) for the external collaborators
//! - **Infrastructure**: adapters (turso audit store, in-memory stores,
//!   built-in labels, tracing alert sink)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - risk bands, limit tables, and the enforcement envelope.
pub mod domain;

/// Application layer - ports for external collaborators.
pub mod application;

/// Infrastructure layer - adapters for the application ports.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging initialization.
pub mod observability;

pub use application::ports::{
    AlertSeverity, AlertSink, AuditError, AuditStore, LabelKey, LabelResolver, SettingsStore,
};
pub use config::{Config, ConfigError, load_config, load_config_from_string};
pub use domain::enforcer::LimitEnforcer;
pub use domain::events::ClampEvent;
pub use domain::limits::{BandedLimit, VeryHardLimit};
pub use domain::profile::{ProfileResolver, RiskBand};
