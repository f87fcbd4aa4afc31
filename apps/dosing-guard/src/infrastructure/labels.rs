//! Built-in English labels.
//!
//! Real deployments localize through the UI resource layer; this adapter
//! carries the English defaults so the core is usable without one.
//! Templates use `{}` placeholders substituted in order.

use crate::application::ports::{LabelKey, LabelResolver};

/// Label resolver with built-in English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl EnglishLabels {
    const fn template(key: LabelKey) -> &'static str {
        match key {
            LabelKey::BandChild => "Child",
            LabelKey::BandTeenager => "Teenager",
            LabelKey::BandAdult => "Adult",
            LabelKey::BandResistantAdult => "Resistant adult",
            LabelKey::BandPregnant => "Pregnant",
            LabelKey::ValueOutOfRange => "Value {} is out of hard limits",
            LabelKey::ValueLimitedTo => "Value {} limited to {}",
        }
    }
}

impl LabelResolver for EnglishLabels {
    fn localize(&self, key: LabelKey) -> String {
        Self::template(key).to_string()
    }

    fn format(&self, key: LabelKey, args: &[&str]) -> String {
        let mut out = self.localize(key);
        for arg in args {
            match out.find("{}") {
                Some(pos) => out.replace_range(pos..pos + 2, arg),
                None => break,
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_labels() {
        let labels = EnglishLabels;
        assert_eq!(labels.localize(LabelKey::BandChild), "Child");
        assert_eq!(labels.localize(LabelKey::BandResistantAdult), "Resistant adult");
    }

    #[test]
    fn test_format_substitutes_in_order() {
        let labels = EnglishLabels;
        assert_eq!(
            labels.format(LabelKey::ValueOutOfRange, &["Max bolus"]),
            "Value Max bolus is out of hard limits"
        );
        assert_eq!(
            labels.format(LabelKey::ValueLimitedTo, &["300", "250"]),
            "Value 300 limited to 250"
        );
    }

    #[test]
    fn test_format_with_surplus_args_stops_at_last_placeholder() {
        let labels = EnglishLabels;
        assert_eq!(
            labels.format(LabelKey::ValueOutOfRange, &["IOB", "extra"]),
            "Value IOB is out of hard limits"
        );
    }
}
