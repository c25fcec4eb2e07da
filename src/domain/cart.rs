//! Cart pricing: per-line totals, hour adjustments and order aggregation.

use serde::{Deserialize, Serialize};

use super::entities::{CartItem, PriceBasis, TeamItem};

/// Hours billed for an item. Hourly lines without an estimate count as one hour.
pub fn billed_hours(item: &CartItem) -> Option<u32> {
    match item.price_basis {
        PriceBasis::Hour => Some(item.estimated_hours.unwrap_or(1).max(1)),
        PriceBasis::Project | PriceBasis::Request => None,
    }
}

/// Contribution of a single line to the order total.
pub fn item_total(item: &CartItem) -> f64 {
    match billed_hours(item) {
        Some(hours) => item.unit_price * f64::from(hours),
        None => item.unit_price,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub teams: Vec<TeamItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartSummary {
    pub items_subtotal: f64,
    pub teams_subtotal: f64,
    pub grand_total: f64,
    pub item_count: usize,
    pub team_count: usize,
    pub billed_hours: u32,
}

impl Cart {
    pub fn new(items: Vec<CartItem>, teams: Vec<TeamItem>) -> Self {
        Self { items, teams }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.teams.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.teams.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id) || self.teams.iter().any(|team| team.id == id)
    }

    /// Adds `item` unless a line with the same id is already present.
    pub fn add_item(&mut self, item: CartItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Sets the estimated hours of `id`, clamped to at least one hour.
    ///
    /// Returns `false` when no item has that id.
    pub fn set_hours(&mut self, id: &str, requested: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        let hours = requested.clamp(1, i64::from(u32::MAX)) as u32;
        item.estimated_hours = Some(hours);
        true
    }

    pub fn increment_hours(&mut self, id: &str) -> bool {
        let current = self.current_hours(id);
        self.set_hours(id, current + 1)
    }

    pub fn decrement_hours(&mut self, id: &str) -> bool {
        let current = self.current_hours(id);
        self.set_hours(id, current - 1)
    }

    fn current_hours(&self, id: &str) -> i64 {
        self.items
            .iter()
            .find(|item| item.id == id)
            .and_then(|item| item.estimated_hours)
            .map(i64::from)
            .unwrap_or(1)
    }

    pub fn remove_item(&mut self, id: &str) -> Option<CartItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
    }

    pub fn remove_team(&mut self, id: &str) -> Option<TeamItem> {
        let position = self.teams.iter().position(|team| team.id == id)?;
        Some(self.teams.remove(position))
    }

    pub fn items_subtotal(&self) -> f64 {
        self.items.iter().map(item_total).sum()
    }

    /// Stored team prices; members are never re-priced.
    pub fn teams_subtotal(&self) -> f64 {
        self.teams.iter().map(|team| team.total_price).sum()
    }

    pub fn grand_total(&self) -> f64 {
        self.items_subtotal() + self.teams_subtotal()
    }

    pub fn summary(&self) -> CartSummary {
        let items_subtotal = self.items_subtotal();
        let teams_subtotal = self.teams_subtotal();
        CartSummary {
            items_subtotal,
            teams_subtotal,
            grand_total: items_subtotal + teams_subtotal,
            item_count: self.items.len(),
            team_count: self.teams.len(),
            billed_hours: self.items.iter().filter_map(billed_hours).sum(),
        }
    }
}

/// Formats an amount in euros, keeping cents only when there are any.
pub fn format_price(amount: f64) -> String {
    if (amount - amount.round()).abs() < 0.005 {
        format!("{:.0} €", amount)
    } else {
        format!("{:.2} €", amount)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::entities::ProviderKind;

    const EPSILON: f64 = 1e-9;

    fn item(id: &str, unit_price: f64, basis: PriceBasis, hours: Option<u32>) -> CartItem {
        CartItem {
            id: id.into(),
            name: format!("Provider {id}"),
            provider_kind: ProviderKind::Human,
            title: None,
            unit_price,
            price_basis: basis,
            estimated_hours: hours,
            skills: BTreeSet::new(),
            rating: 4.5,
        }
    }

    fn team(id: &str, total_price: f64, members: Vec<CartItem>) -> TeamItem {
        TeamItem {
            id: id.into(),
            name: format!("Team {id}"),
            members,
            rating: 4.8,
            total_price,
            project_count: 12,
        }
    }

    #[test]
    fn hourly_item_multiplies_by_hours() {
        let line = item("a", 45.0, PriceBasis::Hour, Some(40));
        assert!((item_total(&line) - 1800.0).abs() < EPSILON);
    }

    #[test]
    fn hourly_item_without_estimate_counts_one_hour() {
        let line = item("a", 45.0, PriceBasis::Hour, None);
        assert_eq!(billed_hours(&line), Some(1));
        assert!((item_total(&line) - 45.0).abs() < EPSILON);
    }

    #[test]
    fn flat_items_ignore_hours() {
        for basis in [PriceBasis::Project, PriceBasis::Request] {
            let with_hours = item("a", 2500.0, basis, Some(12));
            let without = item("b", 2500.0, basis, None);
            assert!((item_total(&with_hours) - 2500.0).abs() < EPSILON);
            assert!((item_total(&without) - 2500.0).abs() < EPSILON);
        }

        let per_request = item("c", 0.05, PriceBasis::Request, None);
        assert!((item_total(&per_request) - 0.05).abs() < EPSILON);
    }

    #[test]
    fn set_hours_clamps_to_one() {
        let mut cart = Cart::new(vec![item("a", 45.0, PriceBasis::Hour, Some(10))], Vec::new());

        for requested in [0, -1, -500, i64::MIN] {
            assert!(cart.set_hours("a", requested));
            assert_eq!(cart.items[0].estimated_hours, Some(1));
        }

        assert!(cart.set_hours("a", 8));
        assert_eq!(cart.items[0].estimated_hours, Some(8));
    }

    #[test]
    fn set_hours_on_unknown_id_changes_nothing() {
        let mut cart = Cart::new(vec![item("a", 45.0, PriceBasis::Hour, Some(10))], Vec::new());
        let before = cart.clone();

        assert!(!cart.set_hours("missing", 3));
        assert_eq!(cart, before);
    }

    #[test]
    fn decrement_stops_at_one_hour() {
        let mut cart = Cart::new(vec![item("a", 45.0, PriceBasis::Hour, Some(2))], Vec::new());
        cart.decrement_hours("a");
        cart.decrement_hours("a");
        cart.decrement_hours("a");
        assert_eq!(cart.items[0].estimated_hours, Some(1));

        cart.increment_hours("a");
        assert_eq!(cart.items[0].estimated_hours, Some(2));
    }

    #[test]
    fn grand_total_adds_items_and_stored_team_prices() {
        let members = vec![
            item("m1", 90.0, PriceBasis::Hour, Some(100)),
            item("m2", 4000.0, PriceBasis::Project, None),
        ];
        let cart = Cart::new(
            vec![
                item("a", 45.0, PriceBasis::Hour, Some(40)),
                item("b", 0.05, PriceBasis::Request, None),
            ],
            vec![team("t", 8500.0, members)],
        );

        assert!((cart.grand_total() - 10300.05).abs() < 1e-6);

        let summary = cart.summary();
        assert!((summary.teams_subtotal - 8500.0).abs() < EPSILON);
        assert!((summary.items_subtotal - 1800.05).abs() < 1e-6);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.team_count, 1);
        assert_eq!(summary.billed_hours, 40);
    }

    #[test]
    fn removing_item_subtracts_its_contribution() {
        let mut cart = Cart::new(
            vec![
                item("a", 45.0, PriceBasis::Hour, Some(40)),
                item("b", 0.05, PriceBasis::Request, None),
                item("free", 0.0, PriceBasis::Project, None),
            ],
            vec![team("t", 8500.0, Vec::new())],
        );

        let before = cart.grand_total();
        let removed = cart.remove_item("a").expect("item a present");
        assert!((before - cart.grand_total() - item_total(&removed)).abs() < 1e-6);

        let before = cart.grand_total();
        cart.remove_item("free").expect("free item present");
        assert!((before - cart.grand_total()).abs() < EPSILON);

        let before = cart.grand_total();
        cart.remove_team("t").expect("team present");
        assert!((before - cart.grand_total() - 8500.0).abs() < 1e-6);
    }

    #[test]
    fn removing_unknown_id_leaves_cart_unchanged() {
        let mut cart = Cart::new(
            vec![item("a", 45.0, PriceBasis::Hour, Some(40))],
            vec![team("t", 8500.0, Vec::new())],
        );
        let before = cart.clone();

        assert!(cart.remove_item("nope").is_none());
        assert!(cart.remove_team("nope").is_none());
        assert_eq!(cart, before);
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn cart_is_empty_only_without_items_and_teams() {
        let mut cart = Cart::new(Vec::new(), vec![team("t", 8500.0, Vec::new())]);
        assert!(!cart.is_empty());

        cart.remove_team("t").expect("team present");
        assert!(cart.is_empty());

        cart.add_item(item("a", 45.0, PriceBasis::Hour, Some(2)));
        assert!(!cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.grand_total(), 0.0);
    }

    #[test]
    fn add_item_rejects_duplicate_ids() {
        let mut cart = Cart::default();
        assert!(cart.add_item(item("a", 45.0, PriceBasis::Hour, Some(1))));
        assert!(!cart.add_item(item("a", 99.0, PriceBasis::Project, None)));
        assert_eq!(cart.items.len(), 1);
        assert!((cart.items[0].unit_price - 45.0).abs() < EPSILON);
    }

    #[test]
    fn format_price_drops_zero_cents() {
        assert_eq!(format_price(1800.0), "1800 €");
        assert_eq!(format_price(0.05), "0.05 €");
        assert_eq!(format_price(10300.05), "10300.05 €");
    }
}
