//! Storage slots and the slot catalog.
//!
//! Slots are static reference data owned by inventory. Routing reads only
//! their id and position; the remaining fields travel along so callers can
//! annotate a route without a second lookup.

use std::fmt;

use hashbrown::HashMap;
use nalgebra::Point2;

use crate::error::RoutingError;

/// Velocity class of a slot (ABC analysis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotClass {
    /// Fast movers.
    A,
    /// Medium movers.
    B,
    /// Slow movers.
    #[default]
    C,
}

impl fmt::Display for SlotClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(name)
    }
}

/// A physical storage location.
///
/// # Example
///
/// ```
/// use pick_types::{Slot, SlotClass};
///
/// let slot = Slot::new("R1-S03", 55.0, 10.0)
///     .with_product("SKU-0042", 17)
///     .with_class(SlotClass::A);
///
/// assert_eq!(slot.slot_id(), "R1-S03");
/// assert_eq!(slot.stock(), 17);
/// assert_eq!(slot.class(), SlotClass::A);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    slot_id: String,
    position: Point2<f64>,
    product_sku: String,
    stock: u32,
    class: SlotClass,
}

impl Slot {
    /// Creates an empty slot at plane coordinates.
    #[must_use]
    pub fn new(slot_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            slot_id: slot_id.into(),
            position: Point2::new(x, y),
            product_sku: String::new(),
            stock: 0,
            class: SlotClass::default(),
        }
    }

    /// Sets the stocked product and quantity.
    #[must_use]
    pub fn with_product(mut self, sku: impl Into<String>, stock: u32) -> Self {
        self.product_sku = sku.into();
        self.stock = stock;
        self
    }

    /// Sets the velocity class.
    #[must_use]
    pub const fn with_class(mut self, class: SlotClass) -> Self {
        self.class = class;
        self
    }

    /// Returns the slot id.
    #[must_use]
    pub fn slot_id(&self) -> &str {
        &self.slot_id
    }

    /// Returns the slot position.
    #[must_use]
    pub const fn position(&self) -> &Point2<f64> {
        &self.position
    }

    /// Returns the stocked SKU (empty when unassigned).
    #[must_use]
    pub fn product_sku(&self) -> &str {
        &self.product_sku
    }

    /// Returns the stock quantity.
    #[must_use]
    pub const fn stock(&self) -> u32 {
        self.stock
    }

    /// Returns the velocity class.
    #[must_use]
    pub const fn class(&self) -> SlotClass {
        self.class
    }
}

/// Immutable slot lookup, keyed by slot id.
///
/// Iteration follows insertion order.
///
/// # Example
///
/// ```
/// use pick_types::{Slot, SlotCatalog};
///
/// let catalog = SlotCatalog::new(vec![
///     Slot::new("S1", 0.0, 0.0),
///     Slot::new("S2", 10.0, 0.0),
/// ])?;
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get("S2").is_some());
/// assert!(catalog.get("S9").is_none());
/// # Ok::<(), pick_types::RoutingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
    by_id: HashMap<String, usize>,
}

impl SlotCatalog {
    /// Builds a catalog from a slot list.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::DuplicateSlot`] if two slots share an id.
    pub fn new(slots: Vec<Slot>) -> Result<Self, RoutingError> {
        let mut by_id = HashMap::with_capacity(slots.len());
        for (i, slot) in slots.iter().enumerate() {
            if by_id.insert(slot.slot_id.clone(), i).is_some() {
                return Err(RoutingError::DuplicateSlot(slot.slot_id.clone()));
            }
        }
        Ok(Self { slots, by_id })
    }

    /// Returns the slot with the given id.
    #[must_use]
    pub fn get(&self, slot_id: &str) -> Option<&Slot> {
        self.by_id.get(slot_id).map(|&i| &self.slots[i])
    }

    /// Returns the slot with the given id, or [`RoutingError::UnknownSlot`].
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnknownSlot`] if the id is not in the catalog.
    pub fn require(&self, slot_id: &str) -> Result<&Slot, RoutingError> {
        self.get(slot_id)
            .ok_or_else(|| RoutingError::UnknownSlot(slot_id.to_string()))
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over slots in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }
}

impl<'a> IntoIterator for &'a SlotCatalog {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_defaults() {
        let slot = Slot::new("S", 1.0, 2.0);
        assert_eq!(slot.product_sku(), "");
        assert_eq!(slot.stock(), 0);
        assert_eq!(slot.class(), SlotClass::C);
        assert_eq!(slot.position(), &Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_slot_class_display() {
        assert_eq!(SlotClass::A.to_string(), "A");
        assert_eq!(SlotClass::B.to_string(), "B");
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = SlotCatalog::new(vec![
            Slot::new("S1", 0.0, 0.0).with_product("SKU-1", 4),
            Slot::new("S2", 5.0, 0.0),
        ])
        .unwrap();
        assert_eq!(catalog.get("S1").unwrap().stock(), 4);
        assert!(catalog.require("S2").is_ok());
        assert_eq!(
            catalog.require("S3").unwrap_err(),
            RoutingError::UnknownSlot("S3".into())
        );
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = SlotCatalog::new(vec![
            Slot::new("Z", 0.0, 0.0),
            Slot::new("A", 0.0, 0.0),
            Slot::new("M", 0.0, 0.0),
        ])
        .unwrap();
        let ids: Vec<_> = catalog.iter().map(Slot::slot_id).collect();
        assert_eq!(ids, ["Z", "A", "M"]);
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = SlotCatalog::new(vec![Slot::new("S1", 0.0, 0.0), Slot::new("S1", 1.0, 1.0)]);
        assert_eq!(result.unwrap_err(), RoutingError::DuplicateSlot("S1".into()));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = SlotCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get("any").is_none());
    }
}
