use serde::{Deserialize, Serialize};

/// The colony's food store.
///
/// Only the colony owns it; ants, eggs and the queen borrow it mutably for
/// the duration of their daily update. The quantity never drops below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Food {
    quantity: f64,
}

impl Food {
    #[must_use]
    pub fn new(quantity: f64) -> Self {
        debug_assert!(quantity >= 0.0, "food quantity must be non-negative");
        Self {
            quantity: quantity.max(0.0),
        }
    }

    #[must_use]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Whether at least `cost` units are available.
    #[must_use]
    pub fn can_afford(&self, cost: f64) -> bool {
        self.quantity >= cost
    }

    pub fn add(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "cannot add a negative amount of food");
        self.quantity += amount;
    }

    /// Removes `amount`, clamping at zero.
    pub fn remove(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "cannot remove a negative amount of food");
        self.quantity = (self.quantity - amount).max(0.0);
    }
}
