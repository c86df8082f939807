//! Regression fair value for composite instruments.
//!
//! fair_value = Σ weight(u) × mid(u) over every underlying in the
//! composite's weight table. Weights and mids are exact decimals, so the
//! estimate is bit-for-bit reproducible.

use std::collections::{BTreeMap, HashMap};

use arbmm_core::InstrumentId;
use rust_decimal::Decimal;
use tracing::debug;

/// Fixed regression coefficients for one composite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegressionWeights {
    weights: BTreeMap<InstrumentId, Decimal>,
}

impl RegressionWeights {
    pub fn new(weights: BTreeMap<InstrumentId, Decimal>) -> Self {
        Self { weights }
    }

    /// Weighted sum of mids, or the first underlying with no mid.
    pub fn evaluate(
        &self,
        mids: &HashMap<InstrumentId, Decimal>,
    ) -> Result<Decimal, &InstrumentId> {
        self.weights
            .iter()
            .try_fold(Decimal::ZERO, |acc, (underlying, weight)| {
                mids.get(underlying)
                    .map(|mid| acc + *weight * *mid)
                    .ok_or(underlying)
            })
    }
}

impl FromIterator<(InstrumentId, Decimal)> for RegressionWeights {
    fn from_iter<I: IntoIterator<Item = (InstrumentId, Decimal)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Fair value and deviation for one composite on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FairValueEstimate {
    pub fair_value: Decimal,
    /// composite mid - fair value. Positive means the composite is rich.
    pub deviation: Decimal,
}

/// Computes composite fair values from underlying mids.
#[derive(Debug, Clone, Default)]
pub struct FairValueEstimator {
    tables: HashMap<InstrumentId, RegressionWeights>,
}

impl FairValueEstimator {
    pub fn new(tables: HashMap<InstrumentId, RegressionWeights>) -> Self {
        Self { tables }
    }

    /// Build from the config's composite → (underlying → weight) map.
    pub fn from_config(weights: &BTreeMap<InstrumentId, BTreeMap<InstrumentId, Decimal>>) -> Self {
        let tables = weights
            .iter()
            .map(|(composite, table)| (composite.clone(), RegressionWeights::new(table.clone())))
            .collect();
        Self { tables }
    }

    /// Theoretical composite price.
    ///
    /// `None` when the composite has no weight table or any referenced
    /// underlying has no mid this tick.
    pub fn fair_value(
        &self,
        composite: &InstrumentId,
        mids: &HashMap<InstrumentId, Decimal>,
    ) -> Option<Decimal> {
        let table = self.tables.get(composite)?;
        match table.evaluate(mids) {
            Ok(value) => Some(value),
            Err(missing) => {
                debug!(%composite, %missing, "Fair value unavailable: underlying has no mid");
                None
            }
        }
    }

    /// Fair value plus deviation of the composite's own mid.
    pub fn estimate(
        &self,
        composite: &InstrumentId,
        composite_mid: Decimal,
        mids: &HashMap<InstrumentId, Decimal>,
    ) -> Option<FairValueEstimate> {
        let fair_value = self.fair_value(composite, mids)?;
        Some(FairValueEstimate {
            fair_value,
            deviation: composite_mid - fair_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn etf1_estimator() -> FairValueEstimator {
        let table: RegressionWeights = [
            (InstrumentId::from("bond1"), dec!(1.02)),
            (InstrumentId::from("bond2"), dec!(1.00)),
            (InstrumentId::from("bond3"), dec!(1.04)),
            (InstrumentId::from("bond4"), dec!(-0.05)),
        ]
        .into_iter()
        .collect();
        FairValueEstimator::new(HashMap::from([("ETF1".into(), table)]))
    }

    fn mids(values: &[(&str, Decimal)]) -> HashMap<InstrumentId, Decimal> {
        values.iter().map(|(id, m)| ((*id).into(), *m)).collect()
    }

    #[test]
    fn test_fair_value_linear_combination() {
        let est = etf1_estimator();
        let m = mids(&[
            ("bond1", dec!(100)),
            ("bond2", dec!(100)),
            ("bond3", dec!(100)),
            ("bond4", dec!(100)),
        ]);
        // 102 + 100 + 104 - 5
        assert_eq!(est.fair_value(&"ETF1".into(), &m), Some(dec!(301)));
    }

    #[test]
    fn test_deviation_sign() {
        let est = etf1_estimator();
        let m = mids(&[
            ("bond1", dec!(100)),
            ("bond2", dec!(100)),
            ("bond3", dec!(100)),
            ("bond4", dec!(100)),
        ]);
        let rich = est.estimate(&"ETF1".into(), dec!(304.5), &m).unwrap();
        assert_eq!(rich.deviation, dec!(3.5));
        let cheap = est.estimate(&"ETF1".into(), dec!(298), &m).unwrap();
        assert_eq!(cheap.deviation, dec!(-3));
    }

    #[test]
    fn test_missing_underlying_unavailable() {
        let est = etf1_estimator();
        let m = mids(&[("bond1", dec!(100)), ("bond2", dec!(100)), ("bond3", dec!(100))]);
        assert_eq!(est.fair_value(&"ETF1".into(), &m), None);
        assert_eq!(est.estimate(&"ETF1".into(), dec!(300), &m), None);
    }

    #[test]
    fn test_no_weight_table_unavailable() {
        let est = etf1_estimator();
        assert_eq!(est.fair_value(&"ETF2".into(), &HashMap::new()), None);
    }

    #[test]
    fn test_half_tick_mids_exact() {
        let est = etf1_estimator();
        let m = mids(&[
            ("bond1", dec!(100.5)),
            ("bond2", dec!(99.5)),
            ("bond3", dec!(101.5)),
            ("bond4", dec!(120.5)),
        ]);
        // 102.51 + 99.5 + 105.56 - 6.025
        let fv = est.fair_value(&"ETF1".into(), &m).unwrap();
        assert_eq!(fv, dec!(301.545));
        // Repeated evaluation is identical.
        assert_eq!(est.fair_value(&"ETF1".into(), &m), Some(fv));
    }

    #[test]
    fn test_evaluate_reports_missing_underlying() {
        let table: RegressionWeights = [
            (InstrumentId::from("bond1"), dec!(1.02)),
            (InstrumentId::from("bond2"), dec!(1.00)),
        ]
        .into_iter()
        .collect();
        let m = mids(&[("bond2", dec!(100)), ("bond3", dec!(100)), ("bond4", dec!(100))]);
        assert_eq!(table.evaluate(&m).unwrap_err().as_str(), "bond1");
    }
}
