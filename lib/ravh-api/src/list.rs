use serde::{Deserialize, Serialize};

/// Collection envelope returned by every list endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemList<T> {
    /// Items in the collection; the control plane sends `null` or omits
    /// the field when the collection is empty
    pub items: Option<Vec<T>>,
}

impl<T> ItemList<T> {
    /// Consume the envelope, treating a missing collection as empty
    pub fn into_items(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: None }
    }
}
