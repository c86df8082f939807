//! Strategy configuration.
//!
//! Every tunable has a serde default so a config file only needs to list
//! instruments and regression weights. Real-valued parameters are exact
//! `Decimal`s so results reproduce bit-for-bit across runs.

use std::collections::{BTreeMap, HashSet};

use arbmm_core::{CoreError, InstrumentId, InstrumentKind, InstrumentParams, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One registered instrument. Registration order is iteration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstrumentConfig {
    pub id: InstrumentId,
    pub kind: InstrumentKind,
    pub base_size: i64,
    pub max_size: i64,
    pub inventory_threshold: i64,
}

impl InstrumentConfig {
    pub fn new(
        id: &str,
        kind: InstrumentKind,
        base_size: i64,
        max_size: i64,
        inventory_threshold: i64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            base_size,
            max_size,
            inventory_threshold,
        }
    }

    pub fn params(&self) -> InstrumentParams {
        InstrumentParams::new(self.base_size, self.max_size, self.inventory_threshold)
    }
}

/// One spread regime: at `min_spread` ticks or wider, quote `offset` ticks inside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteTier {
    pub min_spread: i64,
    pub offset: i64,
}

impl QuoteTier {
    pub const fn new(min_spread: i64, offset: i64) -> Self {
        Self { min_spread, offset }
    }
}

/// Quote placement rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Composites with a one-tick spread join the touch before any tier is
    /// considered.
    #[serde(default = "default_true")]
    pub join_tight_composites: bool,

    /// Spread tiers; the widest matching tier wins. No match joins the touch.
    #[serde(default = "default_quote_tiers")]
    pub tiers: Vec<QuoteTier>,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            join_tight_composites: true,
            tiers: default_quote_tiers(),
        }
    }
}

impl QuoteConfig {
    pub fn validate(&self) -> Result<()> {
        for tier in &self.tiers {
            if tier.min_spread < 1 || tier.offset < 0 {
                return Err(CoreError::InvalidConfig(format!(
                    "quote tier {tier:?}: min_spread must be >= 1 and offset >= 0"
                )));
            }
            // Both sides step inward by `offset`; they must not meet.
            if tier.min_spread <= 2 * tier.offset {
                return Err(CoreError::InvalidConfig(format!(
                    "quote tier {tier:?}: offset too deep for min_spread"
                )));
            }
        }
        Ok(())
    }
}

/// Size skew and boost parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizingConfig {
    /// |deviation| above this (ticks) marks the composite rich or cheap.
    #[serde(default = "default_deviation_threshold")]
    pub deviation_threshold: Decimal,

    /// Factor applied to base size on the side against the mispricing.
    #[serde(default = "default_skew_shrink_factor")]
    pub skew_shrink_factor: Decimal,

    /// Floor for the shrunk side.
    #[serde(default = "default_skew_min_size")]
    pub skew_min_size: i64,

    /// Spread (ticks) at which both sides get the wide-book boost.
    #[serde(default = "default_wide_spread")]
    pub wide_spread: i64,

    /// Base-size multiplier for wide books, capped at max_size.
    #[serde(default = "default_wide_spread_boost")]
    pub wide_spread_boost: Decimal,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            deviation_threshold: default_deviation_threshold(),
            skew_shrink_factor: default_skew_shrink_factor(),
            skew_min_size: default_skew_min_size(),
            wide_spread: default_wide_spread(),
            wide_spread_boost: default_wide_spread_boost(),
        }
    }
}

/// Price used by the emergency unwind on the reducing side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnwindPrice {
    /// One tick off the opposite touch (sell at best_bid + 1).
    #[default]
    NearOpposite,
    /// One tick inside the own touch (sell at best_ask - 1).
    InsideOwn,
}

/// Reference the hard tier shifts its quotes from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HardAnchor {
    /// Shift the quote the spread regime picked.
    #[default]
    Candidate,
    /// Re-anchor on the book's touch, then shift.
    Touch,
}

/// Inventory guard constants, shared by every strategy using the guard.
///
/// "Reducing" is the side that shrinks the position (sell when long),
/// "growing" the side that extends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryPolicy {
    /// Emergency tier triggers within this many units of the limit.
    #[serde(default = "default_emergency_buffer")]
    pub emergency_buffer: i64,

    #[serde(default)]
    pub emergency_unwind: UnwindPrice,

    /// Ticks the reducing quote moves toward the opposite touch (hard tier).
    #[serde(default)]
    pub hard_anchor: HardAnchor,

    #[serde(default = "default_one")]
    pub hard_reduce_improve: i64,

    /// Ticks the growing quote backs away from the market (hard tier).
    #[serde(default = "default_one")]
    pub hard_grow_retreat: i64,

    #[serde(default = "default_hard_reduce_factor")]
    pub hard_reduce_factor: Decimal,

    /// Reducing size is capped at `max_size + hard_reduce_cap_extra`.
    #[serde(default = "default_hard_reduce_cap_extra")]
    pub hard_reduce_cap_extra: i64,

    #[serde(default = "default_hard_grow_factor")]
    pub hard_grow_factor: Decimal,

    #[serde(default = "default_hard_grow_floor")]
    pub hard_grow_floor: i64,

    /// Soft tier triggers above `inventory_threshold * soft_ratio`.
    #[serde(default = "default_soft_ratio")]
    pub soft_ratio: Decimal,

    #[serde(default = "default_soft_reduce_factor")]
    pub soft_reduce_factor: Decimal,

    #[serde(default = "default_soft_grow_factor")]
    pub soft_grow_factor: Decimal,
}

impl Default for InventoryPolicy {
    fn default() -> Self {
        Self {
            emergency_buffer: default_emergency_buffer(),
            emergency_unwind: UnwindPrice::default(),
            hard_anchor: HardAnchor::default(),
            hard_reduce_improve: default_one(),
            hard_grow_retreat: default_one(),
            hard_reduce_factor: default_hard_reduce_factor(),
            hard_reduce_cap_extra: default_hard_reduce_cap_extra(),
            hard_grow_factor: default_hard_grow_factor(),
            hard_grow_floor: default_hard_grow_floor(),
            soft_ratio: default_soft_ratio(),
            soft_reduce_factor: default_soft_reduce_factor(),
            soft_grow_factor: default_soft_grow_factor(),
        }
    }
}

impl InventoryPolicy {
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(CoreError::InvalidConfig(format!("inventory: {msg}")));

        if self.emergency_buffer < 0 {
            return invalid("emergency_buffer must be >= 0");
        }
        if self.hard_reduce_improve < 0 || self.hard_grow_retreat < 0 {
            return invalid("hard tier price shifts must be >= 0");
        }
        if self.hard_reduce_cap_extra < 0 || self.hard_grow_floor < 0 {
            return invalid("hard tier cap/floor must be >= 0");
        }
        let factors = [
            self.hard_reduce_factor,
            self.hard_grow_factor,
            self.soft_reduce_factor,
            self.soft_grow_factor,
        ];
        if factors.iter().any(|f| f.is_sign_negative()) {
            return invalid("size factors must be >= 0");
        }
        if self.soft_ratio <= Decimal::ZERO || self.soft_ratio > Decimal::ONE {
            return invalid("soft_ratio must be in (0, 1]");
        }
        Ok(())
    }
}

/// Arbitrage-aware market maker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbConfig {
    /// Position limit when the tick does not carry one.
    #[serde(default = "default_position_limit")]
    pub default_position_limit: i64,

    #[serde(default)]
    pub quote: QuoteConfig,

    #[serde(default)]
    pub sizing: SizingConfig,

    #[serde(default)]
    pub inventory: InventoryPolicy,

    /// Registered instruments, in iteration order.
    #[serde(default)]
    pub instruments: Vec<InstrumentConfig>,

    /// Regression weights: composite → (underlying → coefficient).
    #[serde(default)]
    pub weights: BTreeMap<InstrumentId, BTreeMap<InstrumentId, Decimal>>,
}

impl Default for ArbConfig {
    fn default() -> Self {
        Self {
            default_position_limit: default_position_limit(),
            quote: QuoteConfig::default(),
            sizing: SizingConfig::default(),
            inventory: InventoryPolicy::default(),
            instruments: Vec::new(),
            weights: BTreeMap::new(),
        }
    }
}

impl ArbConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        if self.default_position_limit < 0 {
            return Err(CoreError::InvalidConfig(
                "default_position_limit must be >= 0".to_string(),
            ));
        }
        self.quote.validate()?;
        self.inventory.validate()?;
        if self.sizing.skew_min_size < 0 || self.sizing.wide_spread < 1 {
            return Err(CoreError::InvalidConfig(
                "sizing: skew_min_size must be >= 0 and wide_spread >= 1".to_string(),
            ));
        }

        validate_instruments(&self.instruments)?;

        for (composite, weights) in &self.weights {
            let Some(entry) = self.instrument(composite) else {
                return Err(CoreError::UnknownInstrument(composite.to_string()));
            };
            if !entry.kind.is_composite() {
                return Err(CoreError::InvalidConfig(format!(
                    "weights given for non-composite {composite}"
                )));
            }
            for underlying in weights.keys() {
                match self.instrument(underlying) {
                    Some(u) if u.kind == InstrumentKind::Underlying => {}
                    Some(_) => {
                        return Err(CoreError::InvalidConfig(format!(
                            "{composite} weight references non-underlying {underlying}"
                        )))
                    }
                    None => return Err(CoreError::UnknownInstrument(underlying.to_string())),
                }
            }
        }
        Ok(())
    }

    pub fn instrument(&self, id: &InstrumentId) -> Option<&InstrumentConfig> {
        self.instruments.iter().find(|i| &i.id == id)
    }
}

/// Rolling z-score market maker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeanReversionConfig {
    /// Mids kept per instrument.
    #[serde(default = "default_mr_window")]
    pub window: usize,

    /// Samples required before the signal is live.
    #[serde(default = "default_mr_min_samples")]
    pub min_samples: usize,

    /// Below this standard deviation the signal stays neutral.
    #[serde(default = "default_mr_min_std")]
    pub min_std: f64,

    /// |z| above this is a strong signal.
    #[serde(default = "default_mr_strong_z")]
    pub strong_z: f64,

    /// |z| above this is a weak signal.
    #[serde(default = "default_mr_weak_z")]
    pub weak_z: f64,

    /// Strong signal: the fading side is scaled by this factor.
    #[serde(default = "default_skew_shrink_factor")]
    pub strong_shrink_factor: Decimal,

    #[serde(default = "default_mr_strong_floor")]
    pub strong_floor: i64,

    /// Weak signal: the favoured side is boosted by this factor, capped at max_size.
    #[serde(default = "default_wide_spread_boost")]
    pub weak_boost_factor: Decimal,

    #[serde(default = "default_soft_grow_factor")]
    pub weak_shrink_factor: Decimal,

    #[serde(default = "default_mr_weak_floor")]
    pub weak_floor: i64,

    #[serde(default = "default_mr_position_limit")]
    pub default_position_limit: i64,

    #[serde(default = "default_mr_quote")]
    pub quote: QuoteConfig,

    #[serde(default = "default_mr_inventory")]
    pub inventory: InventoryPolicy,

    #[serde(default = "default_mr_instruments")]
    pub instruments: Vec<InstrumentConfig>,
}

impl Default for MeanReversionConfig {
    fn default() -> Self {
        Self {
            window: default_mr_window(),
            min_samples: default_mr_min_samples(),
            min_std: default_mr_min_std(),
            strong_z: default_mr_strong_z(),
            weak_z: default_mr_weak_z(),
            strong_shrink_factor: default_skew_shrink_factor(),
            strong_floor: default_mr_strong_floor(),
            weak_boost_factor: default_wide_spread_boost(),
            weak_shrink_factor: default_soft_grow_factor(),
            weak_floor: default_mr_weak_floor(),
            default_position_limit: default_mr_position_limit(),
            quote: default_mr_quote(),
            inventory: default_mr_inventory(),
            instruments: default_mr_instruments(),
        }
    }
}

impl MeanReversionConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(CoreError::InvalidConfig(format!("mean_reversion: {msg}")));

        if self.window < 2 || self.min_samples < 2 || self.min_samples > self.window {
            return invalid("need 2 <= min_samples <= window");
        }
        if self.min_std.is_nan() || self.min_std < 0.0 {
            return invalid("min_std must be >= 0");
        }
        if self.weak_z.is_nan() || self.weak_z <= 0.0 || self.strong_z < self.weak_z {
            return invalid("need 0 < weak_z <= strong_z");
        }
        let factors = [
            self.strong_shrink_factor,
            self.weak_boost_factor,
            self.weak_shrink_factor,
        ];
        if factors.iter().any(|f| f.is_sign_negative()) {
            return invalid("size factors must be >= 0");
        }
        if self.strong_floor < 0 || self.weak_floor < 0 || self.default_position_limit < 0 {
            return invalid("floors and position limit must be >= 0");
        }
        self.quote.validate()?;
        self.inventory.validate()?;
        validate_instruments(&self.instruments)
    }
}

/// Check ids are unique and every instrument's parameters are sane.
pub(crate) fn validate_instruments(instruments: &[InstrumentConfig]) -> Result<()> {
    let mut seen = HashSet::new();
    for inst in instruments {
        if inst.id.as_str().is_empty() {
            return Err(CoreError::InvalidConfig("empty instrument id".to_string()));
        }
        if !seen.insert(&inst.id) {
            return Err(CoreError::InvalidConfig(format!(
                "duplicate instrument {}",
                inst.id
            )));
        }
        inst.params().validate(&inst.id)?;
    }
    Ok(())
}

fn default_true() -> bool {
    true
}
fn default_one() -> i64 {
    1
}
fn default_quote_tiers() -> Vec<QuoteTier> {
    vec![QuoteTier::new(20, 8), QuoteTier::new(4, 1)]
}
fn default_deviation_threshold() -> Decimal {
    Decimal::TWO // 2 ticks
}
fn default_skew_shrink_factor() -> Decimal {
    Decimal::new(5, 1) // 0.5
}
fn default_skew_min_size() -> i64 {
    3
}
fn default_wide_spread() -> i64 {
    20
}
fn default_wide_spread_boost() -> Decimal {
    Decimal::new(13, 1) // 1.3
}
fn default_emergency_buffer() -> i64 {
    3
}
fn default_hard_reduce_factor() -> Decimal {
    Decimal::new(18, 1) // 1.8
}
fn default_hard_reduce_cap_extra() -> i64 {
    3
}
fn default_hard_grow_factor() -> Decimal {
    Decimal::new(3, 1) // 0.3
}
fn default_hard_grow_floor() -> i64 {
    2
}
fn default_soft_ratio() -> Decimal {
    Decimal::new(6, 1) // 0.6
}
fn default_soft_reduce_factor() -> Decimal {
    Decimal::new(12, 1) // 1.2
}
fn default_soft_grow_factor() -> Decimal {
    Decimal::new(7, 1) // 0.7
}
fn default_mr_window() -> usize {
    20
}
fn default_mr_min_samples() -> usize {
    15
}
fn default_mr_min_std() -> f64 {
    0.01
}
fn default_mr_strong_z() -> f64 {
    1.2
}
fn default_mr_weak_z() -> f64 {
    0.6
}
fn default_mr_strong_floor() -> i64 {
    10
}
fn default_mr_weak_floor() -> i64 {
    12
}
fn default_mr_position_limit() -> i64 {
    20
}
fn default_mr_quote() -> QuoteConfig {
    QuoteConfig {
        join_tight_composites: false,
        tiers: vec![QuoteTier::new(5, 2), QuoteTier::new(4, 1)],
    }
}
fn default_mr_inventory() -> InventoryPolicy {
    InventoryPolicy {
        emergency_buffer: 2,
        emergency_unwind: UnwindPrice::InsideOwn,
        hard_anchor: HardAnchor::Touch,
        hard_reduce_improve: 1,
        hard_grow_retreat: 0,
        hard_reduce_factor: default_hard_reduce_factor(),
        hard_reduce_cap_extra: 0,
        hard_grow_factor: default_hard_grow_factor(),
        hard_grow_floor: 5,
        soft_ratio: Decimal::new(5, 1),         // 0.5
        soft_reduce_factor: Decimal::new(14, 1), // 1.4
        soft_grow_factor: Decimal::new(6, 1),   // 0.6
    }
}
fn default_mr_instruments() -> Vec<InstrumentConfig> {
    vec![InstrumentConfig::new(
        "10K_NOTE",
        InstrumentKind::Underlying,
        28,
        30,
        16,
    )]
}
fn default_position_limit() -> i64 {
    arbmm_core::DEFAULT_POSITION_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn etf_setup() -> ArbConfig {
        let mut weights = BTreeMap::new();
        weights.insert(
            InstrumentId::from("ETF1"),
            BTreeMap::from([
                (InstrumentId::from("bond1"), dec!(1.02)),
                (InstrumentId::from("bond2"), dec!(1.00)),
            ]),
        );
        ArbConfig {
            instruments: vec![
                InstrumentConfig::new("ETF1", InstrumentKind::Composite, 25, 35, 35),
                InstrumentConfig::new("bond1", InstrumentKind::Underlying, 3, 5, 8),
                InstrumentConfig::new("bond2", InstrumentKind::Underlying, 3, 5, 8),
            ],
            weights,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = ArbConfig::default();
        assert_eq!(config.default_position_limit, 50);
        assert!(config.quote.join_tight_composites);
        assert_eq!(
            config.quote.tiers,
            vec![QuoteTier::new(20, 8), QuoteTier::new(4, 1)]
        );
        assert_eq!(config.sizing.deviation_threshold, dec!(2));
        assert_eq!(config.sizing.skew_shrink_factor, dec!(0.5));
        assert_eq!(config.sizing.skew_min_size, 3);
        assert_eq!(config.sizing.wide_spread, 20);
        assert_eq!(config.sizing.wide_spread_boost, dec!(1.3));
        assert_eq!(config.inventory.emergency_buffer, 3);
        assert_eq!(config.inventory.emergency_unwind, UnwindPrice::NearOpposite);
        assert_eq!(config.inventory.hard_anchor, HardAnchor::Candidate);
        assert_eq!(config.inventory.hard_reduce_factor, dec!(1.8));
        assert_eq!(config.inventory.hard_reduce_cap_extra, 3);
        assert_eq!(config.inventory.hard_grow_factor, dec!(0.3));
        assert_eq!(config.inventory.hard_grow_floor, 2);
        assert_eq!(config.inventory.soft_ratio, dec!(0.6));
        assert_eq!(config.inventory.soft_reduce_factor, dec!(1.2));
        assert_eq!(config.inventory.soft_grow_factor, dec!(0.7));
    }

    #[test]
    fn test_config_serde_defaults() {
        let toml_str = r#"
[[instruments]]
id = "ETF1"
kind = "composite"
base_size = 25
max_size = 35
inventory_threshold = 35

[[instruments]]
id = "bond1"
kind = "underlying"
base_size = 3
max_size = 5
inventory_threshold = 8

[weights.ETF1]
bond1 = 1.02
"#;
        let config: ArbConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.instruments.len(), 2);
        assert_eq!(config.instruments[0].id.as_str(), "ETF1");
        assert_eq!(config.default_position_limit, 50);
        assert_eq!(config.inventory, InventoryPolicy::default());
        let etf1 = &config.weights[&InstrumentId::from("ETF1")];
        assert_eq!(etf1[&InstrumentId::from("bond1")], dec!(1.02));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_etf_setup() {
        assert!(etf_setup().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_instrument() {
        let mut config = etf_setup();
        config
            .instruments
            .push(InstrumentConfig::new("bond1", InstrumentKind::Underlying, 3, 5, 8));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_rejects_unknown_underlying() {
        let mut config = etf_setup();
        config
            .weights
            .get_mut(&InstrumentId::from("ETF1"))
            .unwrap()
            .insert("bond9".into(), dec!(0.5));
        assert!(matches!(
            config.validate(),
            Err(CoreError::UnknownInstrument(id)) if id == "bond9"
        ));
    }

    #[test]
    fn test_validate_rejects_weights_on_underlying() {
        let mut config = etf_setup();
        config.weights.insert(
            "bond1".into(),
            BTreeMap::from([(InstrumentId::from("bond2"), dec!(1))]),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_weight_on_composite_input() {
        let mut config = etf_setup();
        config
            .instruments
            .push(InstrumentConfig::new("ETF2", InstrumentKind::Composite, 25, 35, 35));
        config
            .weights
            .get_mut(&InstrumentId::from("ETF1"))
            .unwrap()
            .insert("ETF2".into(), dec!(0.1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_self_crossing_tier() {
        let mut config = etf_setup();
        config.quote.tiers = vec![QuoteTier::new(4, 2)];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mean_reversion_defaults() {
        let config = MeanReversionConfig::default();
        assert_eq!(config.window, 20);
        assert_eq!(config.min_samples, 15);
        assert_eq!(config.default_position_limit, 20);
        assert!(!config.quote.join_tight_composites);
        assert_eq!(config.inventory.emergency_buffer, 2);
        assert_eq!(config.inventory.emergency_unwind, UnwindPrice::InsideOwn);
        assert_eq!(config.inventory.hard_anchor, HardAnchor::Touch);
        assert_eq!(config.inventory.soft_ratio, dec!(0.5));
        assert_eq!(config.instruments[0].params(), InstrumentParams::new(28, 30, 16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mean_reversion_from_toml() {
        let toml_str = r#"
window = 10
min_samples = 8

[inventory]
emergency_unwind = "near_opposite"
hard_anchor = "touch"
"#;
        let config: MeanReversionConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.window, 10);
        assert_eq!(config.strong_z, 1.2);
        assert_eq!(config.inventory.emergency_unwind, UnwindPrice::NearOpposite);
        assert_eq!(config.inventory.hard_anchor, HardAnchor::Touch);
        // A partial table falls back to field defaults, not the strategy's policy.
        assert_eq!(config.inventory.emergency_buffer, 3);
        assert_eq!(config.instruments.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mean_reversion_rejects_bad_window() {
        let config = MeanReversionConfig {
            min_samples: 30,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MeanReversionConfig {
            weak_z: 2.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_soft_ratio() {
        let mut config = etf_setup();
        config.inventory.soft_ratio = dec!(1.5);
        assert!(config.validate().is_err());
    }
}
