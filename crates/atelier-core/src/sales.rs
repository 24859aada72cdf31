//! Sales aggregation for the admin revenue dashboard.
//!
//! Orders are bucketed by UTC calendar month. Cancelled and refunded orders
//! carry no revenue and are skipped entirely (they do not count as orders
//! either).

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle state of an order, as reported by the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn counts_as_revenue(self) -> bool {
        !matches!(self, OrderStatus::Cancelled | OrderStatus::Refunded)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub placed_at: DateTime<Utc>,
    pub total: f64,
    pub status: OrderStatus,
}

/// Revenue and order count for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
    pub revenue: f64,
    pub orders: usize,
}

impl MonthlySales {
    fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            revenue: 0.0,
            orders: 0,
        }
    }

    /// Chart label such as `"Mar 2024"`.
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{:02}/{}", self.month, self.year))
    }
}

fn bucket(orders: &[Order]) -> BTreeMap<(i32, u32), MonthlySales> {
    let mut months: BTreeMap<(i32, u32), MonthlySales> = BTreeMap::new();
    for order in orders.iter().filter(|o| o.status.counts_as_revenue()) {
        let key = (order.placed_at.year(), order.placed_at.month());
        let entry = months
            .entry(key)
            .or_insert_with(|| MonthlySales::empty(key.0, key.1));
        entry.revenue += order.total;
        entry.orders += 1;
    }
    months
}

/// Months that have at least one revenue-bearing order, oldest first.
pub fn aggregate_monthly(orders: &[Order]) -> Vec<MonthlySales> {
    bucket(orders).into_values().collect()
}

/// All twelve months of `year`, zero-filled.
pub fn yearly_series(orders: &[Order], year: i32) -> Vec<MonthlySales> {
    let mut months = bucket(orders);
    (1..=12)
        .map(|month| {
            months
                .remove(&(year, month))
                .unwrap_or_else(|| MonthlySales::empty(year, month))
        })
        .collect()
}

pub fn total_revenue(months: &[MonthlySales]) -> f64 {
    months.iter().map(|m| m.revenue).sum()
}
