//! Weight tables over shot-type labels.

use std::collections::BTreeMap;

use storyviz_models::ShotType;

/// Narrative weights at or above this value favor tight framing.
pub const TIGHT_FRAMING_THRESHOLD: f64 = 0.66;

/// Narrative weights at or below this value favor establishing shots.
pub const ESTABLISHING_THRESHOLD: f64 = 0.33;

/// Boost added to `close_up` in the tight-framing band (pre-normalization).
pub const CLOSE_UP_BOOST: f64 = 0.25;

/// Boost added to `detail` in the tight-framing band (pre-normalization).
pub const DETAIL_BOOST: f64 = 0.15;

/// Boost added to `wide` in the establishing band (pre-normalization).
pub const WIDE_BOOST: f64 = 0.20;

/// Mapping from shot-type label to a non-negative weight.
///
/// Keys are ordered (BTreeMap) so every iteration order downstream is
/// deterministic and ties can be broken lexicographically.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl Default for WeightTable {
    /// The stock distribution used when a caller has no opinion: medium-heavy
    /// with establishing and tight framings roughly balanced.
    fn default() -> Self {
        let mut table = Self::new();
        table.set(ShotType::Wide.as_str(), 0.25);
        table.set(ShotType::Medium.as_str(), 0.35);
        table.set(ShotType::CloseUp.as_str(), 0.25);
        table.set(ShotType::Detail.as_str(), 0.15);
        table
    }
}

impl WeightTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Set the weight for a label, replacing any previous value.
    pub fn set(&mut self, label: impl Into<String>, weight: f64) {
        self.weights.insert(label.into(), weight);
    }

    /// Borrow the underlying label -> weight map.
    pub fn weights(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    /// Number of entries, including non-positive ones.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Drop non-positive and non-finite entries and rescale the rest to sum
    /// to 1.0. If nothing survives, collapse to `{ "medium": 1.0 }` so the
    /// allocator always has at least one type to emit.
    pub fn normalized(&self) -> WeightTable {
        let mut kept: BTreeMap<String, f64> = self
            .weights
            .iter()
            .filter(|(_, w)| w.is_finite() && **w > 0.0)
            .map(|(label, w)| (label.clone(), *w))
            .collect();

        let sum: f64 = kept.values().sum();
        if kept.is_empty() || sum <= 0.0 {
            kept = BTreeMap::from([(ShotType::Medium.as_str().to_string(), 1.0)]);
        } else {
            for weight in kept.values_mut() {
                *weight /= sum;
            }
        }

        WeightTable { weights: kept }
    }

    /// Bias the table by a scene's narrative weight and re-normalize.
    ///
    /// Emotionally pivotal scenes (>= [`TIGHT_FRAMING_THRESHOLD`]) boost
    /// `close_up` and `detail`; low-stakes scenes (<= [`ESTABLISHING_THRESHOLD`])
    /// boost `wide`. Mid-band scenes keep the table as normalized. Boosted
    /// labels are inserted when absent, so a pivotal scene gets tight
    /// framings even if the caller's table never mentioned them.
    pub fn biased(&self, narrative_weight: f64) -> WeightTable {
        let nw = if narrative_weight.is_finite() {
            narrative_weight.clamp(0.0, 1.0)
        } else {
            0.5
        };

        let mut table = self.normalized();
        if nw >= TIGHT_FRAMING_THRESHOLD {
            *table
                .weights
                .entry(ShotType::CloseUp.as_str().to_string())
                .or_insert(0.0) += CLOSE_UP_BOOST;
            *table
                .weights
                .entry(ShotType::Detail.as_str().to_string())
                .or_insert(0.0) += DETAIL_BOOST;
        } else if nw <= ESTABLISHING_THRESHOLD {
            *table
                .weights
                .entry(ShotType::Wide.as_str().to_string())
                .or_insert(0.0) += WIDE_BOOST;
        } else {
            // Mid-band scenes take the table as-is.
            return table;
        }

        table.normalized()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter
                .into_iter()
                .map(|(label, w)| (label.into(), w))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sums_to_one(table: &WeightTable) {
        let sum: f64 = table.weights().values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {}", sum);
    }

    #[test]
    fn test_normalized_rescales_to_one() {
        let table = WeightTable::from_iter([("wide", 2.0), ("medium", 6.0)]);
        let normalized = table.normalized();
        assert_sums_to_one(&normalized);
        assert_eq!(normalized.weights()["wide"], 0.25);
        assert_eq!(normalized.weights()["medium"], 0.75);
    }

    #[test]
    fn test_normalized_drops_non_positive_entries() {
        let table = WeightTable::from_iter([
            ("wide", 0.5),
            ("medium", 0.0),
            ("close_up", -1.0),
            ("detail", f64::NAN),
        ]);
        let normalized = table.normalized();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized.weights()["wide"], 1.0);
    }

    #[test]
    fn test_normalized_empty_falls_back_to_medium() {
        let normalized = WeightTable::new().normalized();
        assert_eq!(normalized.weights()["medium"], 1.0);
        assert_eq!(normalized.len(), 1);

        let all_zero = WeightTable::from_iter([("wide", 0.0), ("detail", -0.5)]).normalized();
        assert_eq!(all_zero.weights()["medium"], 1.0);
    }

    #[test]
    fn test_bias_high_band_favors_tight_framing() {
        let table = WeightTable::default();
        let neutral = table.biased(0.5);
        let pivotal = table.biased(0.9);
        assert_sums_to_one(&pivotal);
        assert!(pivotal.weights()["close_up"] > neutral.weights()["close_up"]);
        assert!(pivotal.weights()["detail"] > neutral.weights()["detail"]);
    }

    #[test]
    fn test_bias_low_band_favors_wide() {
        let table = WeightTable::default();
        let neutral = table.biased(0.5);
        let minor = table.biased(0.1);
        assert_sums_to_one(&minor);
        assert!(minor.weights()["wide"] > neutral.weights()["wide"]);
    }

    #[test]
    fn test_bias_mid_band_is_identity() {
        let table = WeightTable::default();
        assert_eq!(table.biased(0.5), table.normalized());
        assert_eq!(table.biased(0.34), table.normalized());
        assert_eq!(table.biased(0.65), table.normalized());
    }

    #[test]
    fn test_bias_inserts_missing_labels() {
        let table = WeightTable::from_iter([("medium", 1.0)]);
        let pivotal = table.biased(1.0);
        assert!(pivotal.weights().contains_key("close_up"));
        assert!(pivotal.weights().contains_key("detail"));
        assert_sums_to_one(&pivotal);
    }

    #[test]
    fn test_bias_clamps_out_of_range_weight() {
        let table = WeightTable::default();
        assert_eq!(table.biased(7.0), table.biased(1.0));
        assert_eq!(table.biased(-3.0), table.biased(0.0));
    }
}
