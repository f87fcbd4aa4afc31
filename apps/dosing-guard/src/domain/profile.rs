//! Patient risk bands and resolution from the stored profile setting.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::{LabelKey, LabelResolver, SettingsStore};

/// Default preference key under which the risk-band setting is stored.
pub const SETTING_PATIENT_PROFILE: &str = "patient_profile";

/// Patient risk-profile classification driving which safety bounds apply.
///
/// Closed set; every limit table carries exactly one bound per band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    /// Child: tightest bounds.
    Child,
    /// Teenager.
    Teenager,
    /// Adult: mid-range bounds, also the fail-safe default.
    Adult,
    /// Insulin-resistant adult: widest non-special bounds.
    ResistantAdult,
    /// Pregnant: evaluated independently of the risk-tolerance ordering.
    Pregnant,
}

impl RiskBand {
    /// All bands, in increasing risk-tolerance order with `Pregnant` last.
    pub const ALL: [Self; 5] = [
        Self::Child,
        Self::Teenager,
        Self::Adult,
        Self::ResistantAdult,
        Self::Pregnant,
    ];
}

/// Resolves the stored profile setting to a [`RiskBand`].
///
/// The stored value is compared against the localized band labels in a
/// fixed priority order; anything unrecognized (including an empty or
/// missing setting) resolves to [`RiskBand::Adult`], a deliberate
/// fail-safe, not an error condition.
///
/// Resolution is performed fresh on every call. Nothing is cached: the
/// underlying setting may change between calls and a cached band would
/// keep serving stale safety bounds.
pub struct ProfileResolver {
    settings: Arc<dyn SettingsStore>,
    labels: Arc<dyn LabelResolver>,
    setting_key: String,
}

impl ProfileResolver {
    /// Create a resolver reading `setting_key` from `settings`.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        labels: Arc<dyn LabelResolver>,
        setting_key: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            labels,
            setting_key: setting_key.into(),
        }
    }

    /// Resolve the currently stored setting to a risk band.
    ///
    /// Total and infallible; no side effects.
    pub fn resolve(&self) -> RiskBand {
        let raw = self.settings.get_string(&self.setting_key, "");

        // Priority order is fixed; first label match wins.
        let candidates = [
            (LabelKey::BandChild, RiskBand::Child),
            (LabelKey::BandTeenager, RiskBand::Teenager),
            (LabelKey::BandAdult, RiskBand::Adult),
            (LabelKey::BandResistantAdult, RiskBand::ResistantAdult),
            (LabelKey::BandPregnant, RiskBand::Pregnant),
        ];
        for (key, band) in candidates {
            if raw == self.labels.localize(key) {
                return band;
            }
        }

        RiskBand::Adult
    }
}
