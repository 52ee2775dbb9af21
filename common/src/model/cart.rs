use log::debug;

use super::VariantId;

/// The shopping cart owned by the page root: one entry per add-to-cart click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<VariantId>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id`; duplicates are kept.
    pub fn receive_add(&mut self, id: VariantId) {
        self.entries.push(id);
        debug!("cart: added variant {id}, {} entries", self.entries.len());
    }

    /// Drops every entry.
    pub fn receive_clear(&mut self) {
        self.entries = Vec::new();
        debug!("cart: cleared");
    }

    pub fn entries(&self) -> &[VariantId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
