// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::flights::{NormalizedFlight, PriceAggregates, PricePoint};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_CHEAPEST_WEEKDAY: &str = "Monday";
pub const DEFAULT_CHEAPEST_MONTH: &str = "January";

/// Statistics shown on a page. Never null: an empty flight list yields the
/// default record with every counter at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub total_flights: usize,
    pub direct_flights: usize,
    pub direct_ratio: f64,
    pub avg_price: f64,
    pub cheapest_price: f64,
    pub most_expensive_price: f64,
    pub cheapest_weekday: String,
    pub cheapest_month: String,
    /// Distinct airlines in the batch.
    pub airlines: usize,
    /// Distinct arrival codes in the batch.
    pub destinations: usize,
}

impl Default for DerivedMetrics {
    fn default() -> Self {
        Self {
            total_flights: 0,
            direct_flights: 0,
            direct_ratio: 0.0,
            avg_price: 0.0,
            cheapest_price: 0.0,
            most_expensive_price: 0.0,
            cheapest_weekday: DEFAULT_CHEAPEST_WEEKDAY.to_string(),
            cheapest_month: DEFAULT_CHEAPEST_MONTH.to_string(),
            airlines: 0,
            destinations: 0,
        }
    }
}

impl DerivedMetrics {
    pub fn has_prices(&self) -> bool {
        self.cheapest_price > 0.0
    }

    pub fn has_flights(&self) -> bool {
        self.total_flights > 0
    }
}

pub fn compute_metrics(flights: &[NormalizedFlight]) -> DerivedMetrics {
    compute_metrics_with(flights, None)
}

/// Computes page statistics.
///
/// Price aggregates only consider valid positive prices. Cheapest weekday
/// and month come from the upstream curves, never from the flight list.
pub fn compute_metrics_with(
    flights: &[NormalizedFlight],
    aggregates: Option<&PriceAggregates>,
) -> DerivedMetrics {
    let mut metrics = DerivedMetrics::default();

    if let Some(aggregates) = aggregates {
        if let Some(day) = cheapest_point(&aggregates.weekdays) {
            metrics.cheapest_weekday = day;
        }
        if let Some(month) = cheapest_point(&aggregates.months) {
            metrics.cheapest_month = month;
        }
    }

    if flights.is_empty() {
        return metrics;
    }

    metrics.total_flights = flights.len();
    metrics.direct_flights = flights.iter().filter(|f| f.is_direct).count();
    metrics.direct_ratio = metrics.direct_flights as f64 / metrics.total_flights as f64;

    let prices: Vec<f64> = flights
        .iter()
        .filter_map(|f| f.amount)
        .filter(|p| p.is_finite() && *p > 0.0)
        .collect();

    if !prices.is_empty() {
        let sum: f64 = prices.iter().sum();
        metrics.avg_price = (sum / prices.len() as f64).round();
        metrics.cheapest_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
        metrics.most_expensive_price = prices.iter().copied().fold(0.0, f64::max);
    }

    metrics.airlines = flights
        .iter()
        .map(|f| f.airline.as_str())
        .filter(|a| !a.is_empty())
        .collect::<HashSet<_>>()
        .len();
    metrics.destinations = flights
        .iter()
        .map(|f| f.to.as_str())
        .filter(|t| !t.is_empty())
        .collect::<HashSet<_>>()
        .len();

    metrics
}

/// Name of the lowest positive point; the first one wins a tie.
fn cheapest_point(points: &[PricePoint]) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for point in points {
        let name = point.name.trim();
        let Some(price) = point.price.valid_amount() else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        match best {
            Some((_, lowest)) if price >= lowest => {}
            _ => best = Some((name, price)),
        }
    }
    best.map(|(name, _)| name.to_string())
}
