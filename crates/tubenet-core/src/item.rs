use crate::id::ItemTypeId;
use serde::{Deserialize, Serialize};

/// A stack of fungible items of one type.
///
/// A stack with `quantity == 0` is empty regardless of its item type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_type: ItemTypeId,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item_type: ItemTypeId, quantity: u32) -> Self {
        Self {
            item_type,
            quantity,
        }
    }

    /// The canonical empty stack.
    pub fn empty() -> Self {
        Self::new(ItemTypeId(0), 0)
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// A stack of the same type with a different quantity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self::new(self.item_type, quantity)
    }
}

/// A single inventory slot holding at most one item type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySlot {
    pub contents: Option<ItemStack>,
    pub capacity: u32,
}

impl InventorySlot {
    pub fn new(capacity: u32) -> Self {
        Self {
            contents: None,
            capacity,
        }
    }

    /// How many of `stack` this slot could take right now.
    pub fn room_for(&self, stack: &ItemStack) -> u32 {
        match &self.contents {
            None => self.capacity,
            Some(held) if held.item_type == stack.item_type => {
                self.capacity.saturating_sub(held.quantity)
            }
            Some(_) => 0,
        }
    }

    /// Compute the remainder of inserting `stack` without touching the slot.
    pub fn preview_insert(&self, stack: &ItemStack) -> ItemStack {
        let accepted = stack.quantity.min(self.room_for(stack));
        stack.with_quantity(stack.quantity - accepted)
    }

    /// Insert as much of `stack` as fits. Returns what didn't fit.
    #[must_use = "the remainder holds items that did not fit"]
    pub fn insert(&mut self, stack: ItemStack) -> ItemStack {
        if stack.is_empty() {
            return stack;
        }
        let accepted = stack.quantity.min(self.room_for(&stack));
        if accepted > 0 {
            match &mut self.contents {
                Some(held) => held.quantity += accepted,
                None => self.contents = Some(stack.with_quantity(accepted)),
            }
        }
        stack.with_quantity(stack.quantity - accepted)
    }

    /// Quantity currently held.
    pub fn quantity(&self) -> u32 {
        self.contents.as_ref().map(|s| s.quantity).unwrap_or(0)
    }
}
