//! Ordered registry of layout children keyed by render order.
//!
//! The registry is the sole source of topology truth. Orders are unique
//! integers in ascending render order; gaps are tolerated and no strict
//! pane/splitter alternation is enforced.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use crate::child::{Child, Pane, Splitter};

#[derive(Debug, Default)]
pub struct ChildRegistry {
    children: BTreeMap<i32, Child>,
}

impl ChildRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a child at `order`. Registration happens once per mount:
    /// an already-occupied order is left untouched and `false` is returned.
    pub fn register(&mut self, order: i32, child: Child) -> bool {
        if self.children.contains_key(&order) {
            return false;
        }
        self.children.insert(order, child);
        true
    }

    /// Remove the child at `order`. Returns whether anything was removed.
    pub fn unregister(&mut self, order: i32) -> bool {
        self.children.remove(&order).is_some()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn pane_count(&self) -> usize {
        self.children.values().filter(|c| c.is_pane()).count()
    }

    pub fn child_at(&self, order: i32) -> Option<&Child> {
        self.children.get(&order)
    }

    pub fn child_at_mut(&mut self, order: i32) -> Option<&mut Child> {
        self.children.get_mut(&order)
    }

    pub fn pane_at(&self, order: i32) -> Option<&Pane> {
        self.children.get(&order).and_then(Child::as_pane)
    }

    pub fn pane_at_mut(&mut self, order: i32) -> Option<&mut Pane> {
        self.children.get_mut(&order).and_then(Child::as_pane_mut)
    }

    pub fn splitter_at(&self, order: i32) -> Option<&Splitter> {
        self.children.get(&order).and_then(Child::as_splitter)
    }

    pub fn splitter_at_mut(&mut self, order: i32) -> Option<&mut Splitter> {
        self.children.get_mut(&order).and_then(Child::as_splitter_mut)
    }

    /// Children in ascending render order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &Child)> {
        self.children.iter().map(|(order, child)| (*order, child))
    }

    /// Orders of all panes, ascending.
    pub fn pane_orders(&self) -> Vec<i32> {
        self.children
            .iter()
            .filter(|(_, c)| c.is_pane())
            .map(|(order, _)| *order)
            .collect()
    }

    /// Orders of all splitters, ascending.
    pub fn splitter_orders(&self) -> Vec<i32> {
        self.children
            .iter()
            .filter(|(_, c)| !c.is_pane())
            .map(|(order, _)| *order)
            .collect()
    }

    /// Nearest registered entry strictly before `order`.
    pub fn prev_entry(&self, order: i32) -> Option<(i32, &Child)> {
        self.children
            .range(..order)
            .next_back()
            .map(|(k, v)| (*k, v))
    }

    /// Nearest registered entry strictly after `order`.
    pub fn next_entry(&self, order: i32) -> Option<(i32, &Child)> {
        self.children
            .range((Excluded(order), Unbounded))
            .next()
            .map(|(k, v)| (*k, v))
    }

    /// Nearest pane strictly before `order`, skipping splitters.
    pub fn nearest_pane_before(&self, order: i32) -> Option<(i32, &Pane)> {
        self.children
            .range(..order)
            .rev()
            .find_map(|(k, c)| c.as_pane().map(|p| (*k, p)))
    }

    /// Nearest pane strictly after `order`, skipping splitters.
    pub fn nearest_pane_after(&self, order: i32) -> Option<(i32, &Pane)> {
        self.children
            .range((Excluded(order), Unbounded))
            .find_map(|(k, c)| c.as_pane().map(|p| (*k, p)))
    }

    /// Combined fixed size of all splitters, in pixels.
    pub fn splitter_px_total(&self) -> f64 {
        self.children
            .values()
            .filter_map(Child::as_splitter)
            .map(|s| s.size)
            .sum()
    }
}
