/// Items fetched for one kind of listing, kept in response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet<T> {
    items: Vec<T>,
}

impl<T> Default for ResultSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ResultSet<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The page starting at `cursor`. Short at the end of the set and empty
    /// once the cursor is past it.
    pub fn window(&self, cursor: usize, page_size: usize) -> &[T] {
        let start = cursor.min(self.items.len());
        let end = cursor.saturating_add(page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// True when no page follows the one starting at `cursor`.
    pub fn is_last_page(&self, cursor: usize, page_size: usize) -> bool {
        cursor.saturating_add(page_size) >= self.items.len()
    }
}
