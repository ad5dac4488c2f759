//! Behavior-driven tests for chart-series reduction.
//!
//! The displayed chart is a bounded, deterministic subsequence of the raw
//! daily series; the displayed period change always anchors to the true
//! first and last prices of the raw series.

use tickerlens_core::{percent_change, reduce, IsoDate, PricePoint, DEFAULT_MAX_POINTS};

fn daily_series(prices: &[f64]) -> Vec<PricePoint> {
    let start = IsoDate::parse("2023-07-03").expect("date").into_inner();
    prices
        .iter()
        .enumerate()
        .map(|(index, &price)| {
            let date = IsoDate::from(start + time::Duration::days(index as i64));
            PricePoint::new(date, price, 10_000 + index as u64).expect("valid point")
        })
        .collect()
}

#[test]
fn a_short_series_is_displayed_as_is() {
    // Given: fewer points than the display budget
    let series = daily_series(&[10.0, 11.0, 12.5]);

    // When: the series is reduced
    let reduced = reduce(&series, DEFAULT_MAX_POINTS);

    // Then: identity, down to order and values
    assert_eq!(reduced, series);
}

#[test]
fn a_year_of_trading_days_fits_the_display_budget() {
    // Given: roughly one year of daily closes
    let prices: Vec<f64> = (0..252).map(|i| 100.0 + (i % 11) as f64).collect();
    let series = daily_series(&prices);

    // When: the series is reduced with the default budget
    let reduced = reduce(&series, DEFAULT_MAX_POINTS);

    // Then: bounded, ordered, and anchored at the true first point
    assert!(reduced.len() <= DEFAULT_MAX_POINTS);
    assert_eq!(reduced[0], series[0]);
    assert!(reduced.windows(2).all(|pair| pair[0].date < pair[1].date));
}

#[test]
fn a_series_of_120_keeps_every_third_point() {
    let prices: Vec<f64> = (0..120).map(|i| 50.0 + i as f64).collect();
    let series = daily_series(&prices);

    let reduced = reduce(&series, DEFAULT_MAX_POINTS);

    assert_eq!(reduced.len(), 40);
    for (position, point) in reduced.iter().enumerate() {
        assert_eq!(*point, series[position * 3]);
    }
}

#[test]
fn reduction_may_drop_the_final_point() {
    // The stride keeps the last point only when it lands on a multiple of
    // k; this asymmetry is intentional display behavior.
    let prices: Vec<f64> = (0..120).map(|i| 50.0 + i as f64).collect();
    let series = daily_series(&prices);

    let reduced = reduce(&series, DEFAULT_MAX_POINTS);

    assert_ne!(reduced.last(), series.last());
}

#[test]
fn the_period_change_comes_from_the_raw_series() {
    // Given: a raw series whose true endpoints differ from the reduced ones
    let series = daily_series(&[100.0, 80.0, 90.0]);

    // When: the change is computed
    let change = percent_change(&series);

    // Then: it anchors to the raw first and last prices
    assert_eq!(change, -10.0);
}

#[test]
fn the_period_change_is_unaffected_by_reduction() {
    let mut prices = vec![100.0; 120];
    *prices.last_mut().expect("non-empty") = 125.0;
    let series = daily_series(&prices);

    let reduced = reduce(&series, DEFAULT_MAX_POINTS);
    let change = percent_change(&series);

    // Reduction dropped the spike at the end; the change still sees it.
    assert_ne!(reduced.last(), series.last());
    assert_eq!(change, 25.0);
}

#[test]
fn a_tighter_budget_still_keeps_the_first_point() {
    let prices: Vec<f64> = (0..365).map(|i| 10.0 + (i % 29) as f64).collect();
    let series = daily_series(&prices);

    for budget in [5, 10, 25, 50] {
        let reduced = reduce(&series, budget);
        assert!(reduced.len() <= budget);
        assert_eq!(reduced[0], series[0]);
    }
}
