use navlens::core::Regime;
use navlens::regime::{classify_series, majority_vote, RegimeParams};

fn r(b: bool) -> Regime {
    if b { Regime::Bull } else { Regime::Bear }
}

#[test]
fn majority_vote_all_eight_combinations() {
    for ma in [false, true] {
        for momentum in [false, true] {
            for drawdown in [false, true] {
                let bulls = [ma, momentum, drawdown].iter().filter(|b| **b).count();
                let expected = r(bulls >= 2);
                assert_eq!(
                    majority_vote(r(ma), r(momentum), r(drawdown)),
                    expected,
                    "vote mismatch for ({ma}, {momentum}, {drawdown})"
                );
            }
        }
    }
}

#[test]
fn momentum_rule_reads_bear_during_warmup() {
    // strictly rising series: momentum has no 30-day lookback for the first
    // 30 rows and must not claim Bull there
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let signals = classify_series(&closes, &RegimeParams::default());

    for (i, s) in signals.iter().enumerate() {
        if i < 30 {
            assert_eq!(s.momentum, Regime::Bear, "row {i} should be warm-up Bear");
        } else {
            assert_eq!(s.momentum, Regime::Bull, "row {i} should be Bull");
        }
    }
}

#[test]
fn drawdown_rule_tracks_distance_from_high() {
    // run up to 200, then fall: within 20% of the high stays Bull
    let mut closes: Vec<f64> = (1..=100).map(|i| 2.0 * i as f64).collect();
    closes.push(170.0); // 15% below the 200 high
    closes.push(150.0); // 25% below
    let signals = classify_series(&closes, &RegimeParams::default());

    let n = signals.len();
    assert_eq!(signals[n - 2].drawdown_rule, Regime::Bull);
    assert_eq!(signals[n - 1].drawdown_rule, Regime::Bear);
    assert!((signals[n - 1].drawdown - (-0.25)).abs() < 1e-9);
}

#[test]
fn ma_crossover_uses_min_period_windows() {
    // with fewer rows than the slow window the averages still exist; a
    // declining series puts the fast average below the slow one quickly
    let closes: Vec<f64> = (0..60).map(|i| 1000.0 - 10.0 * i as f64).collect();
    let params = RegimeParams::default();
    let signals = classify_series(&closes, &params);

    assert_eq!(signals.last().unwrap().ma_crossover, Regime::Bear);
    // and a rising series the other way
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + 10.0 * i as f64).collect();
    let signals = classify_series(&closes, &params);
    assert_eq!(signals.last().unwrap().ma_crossover, Regime::Bull);
}

#[test]
fn combined_label_is_pure_per_row() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 10.0 + i as f64)
        .collect();
    let params = RegimeParams::default();
    let full = classify_series(&closes, &params);
    // labels over a prefix match the prefix of labels over the full series
    let prefix = classify_series(&closes[..80], &params);
    assert_eq!(&full[..80], &prefix[..]);
}
