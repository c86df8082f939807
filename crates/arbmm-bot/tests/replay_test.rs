//! End-to-end replay through the shipped configuration.

use std::io::Cursor;

use arbmm_bot::{replay, AppConfig, AppError, StrategyKind, TickOrders};
use arbmm_core::OrderSide;

fn default_config() -> AppConfig {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/default.toml");
    AppConfig::from_file(path).unwrap()
}

const TICKS: &str = r#"{"tick":1,"products":["ETF1","bond1","bond2","bond3","bond4"],"orderbook":{"ETF1":{"bids":{"305":10},"asks":{"306":12}},"bond1":{"bids":{"99":3},"asks":{"101":4}},"bond2":{"bids":{"99":3},"asks":{"101":4}},"bond3":{"bids":{"99":3},"asks":{"101":4}},"bond4":{"bids":{"99":3},"asks":{"101":4}}},"positions":{},"pos_limit":{}}

{"tick":2,"products":["ETF1"],"orderbook":{"ETF1":{"bids":{"100":5},"asks":{"102":5}}},"positions":{"ETF1":40},"pos_limit":{"ETF1":50}}
{"tick":3,"products":["ETF2"],"orderbook":{"ETF2":{"bids":{"250":5},"asks":{}}}}
"#;

fn run(config: &AppConfig, input: &str) -> Result<Vec<TickOrders>, AppError> {
    let mut strategy = config.build_strategy()?;
    let mut out = Vec::new();
    replay(strategy.as_mut(), Cursor::new(input), &mut out)?;
    Ok(String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect())
}

#[test]
fn test_default_config_loads() {
    let config = default_config();
    assert_eq!(config.strategy, StrategyKind::Arbitrage);
    assert_eq!(config.arbitrage.instruments.len(), 6);
    assert_eq!(config.arbitrage.weights.len(), 2);
    assert!(config.arbitrage.validate().is_ok());
}

#[test]
fn test_replay_one_line_per_tick() {
    let ticks = run(&default_config(), TICKS).unwrap();
    assert_eq!(ticks.iter().map(|t| t.tick).collect::<Vec<_>>(), vec![1, 2, 3]);

    // Tick 1: ETF1 mid 305.5 vs fair value 301 is rich, so the sell side is max size.
    let etf1: Vec<_> = ticks[0]
        .orders
        .iter()
        .filter(|o| o.instrument.as_str() == "ETF1")
        .collect();
    assert_eq!(etf1.len(), 2);
    assert_eq!(etf1[1].side(), OrderSide::Sell);
    assert_eq!(etf1[1].size(), 35);
    assert_eq!(ticks[0].orders.len(), 10);

    // Tick 2: hard inventory tier.
    let prices: Vec<i64> = ticks[1].orders.iter().map(|o| o.price.ticks()).collect();
    assert_eq!(prices, vec![99, 101]);
    assert!(ticks[1].orders[1].size() <= 38);

    // Tick 3: one-sided book, nothing to do.
    assert!(ticks[2].orders.is_empty());
}

#[test]
fn test_replay_output_shape() {
    let mut strategy = default_config().build_strategy().unwrap();
    let input = r#"{"tick":7,"products":["bond4"],"orderbook":{"bond4":{"bids":{"100":1},"asks":{"102":1}}}}"#;
    let mut out = Vec::new();
    let summary = replay(strategy.as_mut(), Cursor::new(input), &mut out).unwrap();
    assert_eq!(summary.ticks, 1);
    assert_eq!(summary.orders, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"tick\":7,\"orders\":[{\"instrument\":\"bond4\",\"price\":100,\"quantity\":8},{\"instrument\":\"bond4\",\"price\":102,\"quantity\":-8}]}\n"
    );
}

#[test]
fn test_replay_is_deterministic() {
    let config = default_config();
    let first = run(&config, TICKS).unwrap();
    let second = run(&config, TICKS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_bad_line_reports_line_number() {
    let input = "{\"tick\":1}\n\nnot json\n";
    match run(&default_config(), input) {
        Err(AppError::Decode { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_mean_reversion_replay() {
    let mut config = default_config();
    config.strategy = StrategyKind::MeanReversion;
    let input = r#"{"tick":1,"products":["10K_NOTE"],"orderbook":{"10K_NOTE":{"bids":{"9998":2},"asks":{"10002":2}}}}"#;
    let ticks = run(&config, input).unwrap();
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].orders.len(), 2);
    assert!(ticks[0].orders.iter().all(|o| o.size() <= 20));
}
