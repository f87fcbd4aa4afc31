//! Fixed, physiologically derived limit tables.
//!
//! These tables are the safety contract of the whole controller. They are
//! process-wide constants, never mutated at runtime, and every code path
//! that exposes a bound must read it from here.

use super::profile::RiskBand;

/// One numeric bound per risk band.
///
/// Indexing by the closed [`RiskBand`] enum replaces parallel fixed-size
/// arrays indexed by integer constants, so a table/band mismatch cannot
/// exist.
#[derive(Debug, Clone, Copy)]
pub struct BandedLimit {
    child: f64,
    teenager: f64,
    adult: f64,
    resistant_adult: f64,
    pregnant: f64,
}

impl BandedLimit {
    /// Build a table from one bound per band.
    pub const fn new(
        child: f64,
        teenager: f64,
        adult: f64,
        resistant_adult: f64,
        pregnant: f64,
    ) -> Self {
        Self {
            child,
            teenager,
            adult,
            resistant_adult,
            pregnant,
        }
    }

    /// Return the bound for `band`.
    pub const fn get(&self, band: RiskBand) -> f64 {
        match band {
            RiskBand::Child => self.child,
            RiskBand::Teenager => self.teenager,
            RiskBand::Adult => self.adult,
            RiskBand::ResistantAdult => self.resistant_adult,
            RiskBand::Pregnant => self.pregnant,
        }
    }
}

/// Maximum single bolus, in insulin units.
pub const MAX_BOLUS: BandedLimit = BandedLimit::new(5.0, 10.0, 17.0, 25.0, 60.0);

/// Maximum IOB under the legacy dosing algorithm, in insulin units.
pub const MAX_IOB_LEGACY: BandedLimit = BandedLimit::new(3.0, 5.0, 7.0, 12.0, 25.0);

/// Maximum IOB under the supermicrobolus dosing algorithm, in insulin units.
pub const MAX_IOB_SMB: BandedLimit = BandedLimit::new(7.0, 13.0, 22.0, 30.0, 70.0);

/// Maximum basal rate, in insulin units per hour.
pub const MAX_BASAL: BandedLimit = BandedLimit::new(2.0, 5.0, 10.0, 12.0, 25.0);

/// Minimum insulin action duration (DIA), in hours.
pub const MIN_DIA: BandedLimit = BandedLimit::new(5.0, 5.0, 5.0, 5.0, 5.0);

/// Maximum insulin action duration (DIA), in hours.
pub const MAX_DIA: BandedLimit = BandedLimit::new(9.0, 9.0, 9.0, 9.0, 10.0);

/// Minimum insulin-to-carb ratio, in grams per unit.
pub const MIN_IC: BandedLimit = BandedLimit::new(2.0, 2.0, 2.0, 2.0, 0.3);

/// Maximum insulin-to-carb ratio, in grams per unit.
pub const MAX_IC: BandedLimit = BandedLimit::new(100.0, 100.0, 100.0, 100.0, 100.0);

/// Minimum insulin sensitivity factor, band-independent, in mg/dL per unit.
pub const MIN_ISF: f64 = 2.0;

/// Maximum insulin sensitivity factor, band-independent, in mg/dL per unit.
pub const MAX_ISF: f64 = 1000.0;

/// IOB ceiling for the zero-IOB policy: no insulin on board at all.
pub const MAX_IOB_ZERO_POLICY: f64 = 0.0;

/// Absolute outer boundary for one semantic quantity, band-independent.
///
/// No profile-specific logic may widen these; they are the floor/ceiling
/// any configured limit value must itself stay within.
#[derive(Debug, Clone, Copy)]
pub struct VeryHardLimit {
    /// Global floor.
    pub floor: f64,
    /// Global ceiling.
    pub ceiling: f64,
}

impl VeryHardLimit {
    const fn new(floor: f64, ceiling: f64) -> Self {
        Self { floor, ceiling }
    }

    /// True iff `value` lies within the boundary, inclusive both ends.
    pub const fn contains(&self, value: f64) -> bool {
        self.floor <= value && value <= self.ceiling
    }

    /// Clamp `value` into the boundary.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.floor).min(self.ceiling)
    }
}

/// Outer bounds for blood-glucose limit settings, in mg/dL.
pub mod bg {
    use super::VeryHardLimit;

    /// Allowed range for a configured minimum BG.
    pub const MIN_BG: VeryHardLimit = VeryHardLimit::new(70.0, 250.0);
    /// Allowed range for a configured maximum BG.
    pub const MAX_BG: VeryHardLimit = VeryHardLimit::new(70.0, 250.0);
    /// Allowed range for a configured BG target.
    pub const TARGET_BG: VeryHardLimit = VeryHardLimit::new(70.0, 250.0);

    /// Allowed range for a temporary-target minimum BG.
    pub const TEMP_MIN_BG: VeryHardLimit = VeryHardLimit::new(70.0, 180.0);
    /// Allowed range for a temporary-target maximum BG.
    pub const TEMP_MAX_BG: VeryHardLimit = VeryHardLimit::new(70.0, 270.0);
    /// Allowed range for a temporary-target BG.
    pub const TEMP_TARGET_BG: VeryHardLimit = VeryHardLimit::new(70.0, 200.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Child < Teenager < Adult < ResistantAdult must yield non-decreasing
    /// bounds for every table; Pregnant sits outside that ordering.
    fn assert_monotone(table: &BandedLimit, name: &str) {
        let ordered = [
            RiskBand::Child,
            RiskBand::Teenager,
            RiskBand::Adult,
            RiskBand::ResistantAdult,
        ];
        for pair in ordered.windows(2) {
            assert!(
                table.get(pair[0]) <= table.get(pair[1]),
                "{name}: bound for {:?} exceeds bound for {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_tables_monotone_in_risk_tolerance() {
        assert_monotone(&MAX_BOLUS, "MAX_BOLUS");
        assert_monotone(&MAX_IOB_LEGACY, "MAX_IOB_LEGACY");
        assert_monotone(&MAX_IOB_SMB, "MAX_IOB_SMB");
        assert_monotone(&MAX_BASAL, "MAX_BASAL");
        assert_monotone(&MIN_DIA, "MIN_DIA");
        assert_monotone(&MAX_DIA, "MAX_DIA");
        assert_monotone(&MAX_IC, "MAX_IC");
    }

    #[test]
    fn test_pregnant_ic_minimum_below_adult() {
        // Pregnancy needs far smaller IC ratios than any other band.
        assert!(MIN_IC.get(RiskBand::Pregnant) < MIN_IC.get(RiskBand::Adult));
        assert_eq!(MIN_IC.get(RiskBand::Pregnant), 0.3);
    }

    #[test]
    fn test_known_table_values() {
        assert_eq!(MAX_BOLUS.get(RiskBand::Adult), 17.0);
        assert_eq!(MAX_BASAL.get(RiskBand::Adult), 10.0);
        assert_eq!(MAX_IOB_SMB.get(RiskBand::Pregnant), 70.0);
        assert_eq!(MAX_IOB_LEGACY.get(RiskBand::Child), 3.0);
        assert_eq!(MAX_DIA.get(RiskBand::Pregnant), 10.0);
    }

    #[test]
    fn test_dia_window_well_formed_per_band() {
        for band in RiskBand::ALL {
            assert!(MIN_DIA.get(band) <= MAX_DIA.get(band));
            assert!(MIN_IC.get(band) <= MAX_IC.get(band));
        }
    }

    #[test]
    fn test_very_hard_limit_contains_and_clamp() {
        assert!(bg::TARGET_BG.contains(70.0));
        assert!(bg::TARGET_BG.contains(250.0));
        assert!(!bg::TARGET_BG.contains(69.9));
        assert!(!bg::TARGET_BG.contains(250.1));

        assert_eq!(bg::TEMP_TARGET_BG.clamp(300.0), 200.0);
        assert_eq!(bg::TEMP_TARGET_BG.clamp(40.0), 70.0);
        assert_eq!(bg::TEMP_TARGET_BG.clamp(120.0), 120.0);
    }

    #[test]
    fn test_very_hard_limits_well_formed() {
        for limit in [
            bg::MIN_BG,
            bg::MAX_BG,
            bg::TARGET_BG,
            bg::TEMP_MIN_BG,
            bg::TEMP_MAX_BG,
            bg::TEMP_TARGET_BG,
        ] {
            assert!(limit.floor <= limit.ceiling);
        }
    }
}
