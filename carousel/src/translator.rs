use crate::{CarouselError, IndexKind, PaginationTable, Result};

/// Item ↔ dot lookups over a [`PaginationTable`], with clone wraparound for infinite mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexTranslator {
    table: PaginationTable,
}

impl IndexTranslator {
    pub fn new(table: PaginationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PaginationTable {
        &self.table
    }

    pub fn into_table(self) -> PaginationTable {
        self.table
    }

    /// Owning dot of a real item (track index).
    pub fn dot_of(&self, item: usize) -> Result<usize> {
        self.table.item_to_dot(item).ok_or_else(|| {
            CarouselError::invalid(
                IndexKind::Item,
                item,
                self.table.item_start_index(),
                self.table.item_end_index(),
            )
        })
    }

    /// Representative item (track index) of `dot`. Infinite tables also answer for the
    /// sentinel dots `0` and `total_dots + 1`.
    pub fn item_of(&self, dot: usize) -> Result<usize> {
        self.table.dot_to_item(dot).ok_or_else(|| {
            let (min, max) = if self.table.infinite() {
                (0, self.table.dot_end() + 1)
            } else {
                (self.table.dot_start(), self.table.dot_end())
            };
            CarouselError::invalid(IndexKind::Dot, dot, min, max)
        })
    }

    pub fn balanced_index(&self, item: usize) -> Result<usize> {
        let dot = self.dot_of(item)?;
        self.item_of(dot)
    }

    pub fn is_real(&self, item: usize) -> bool {
        item >= self.table.item_start_index() && item <= self.table.item_end_index()
    }

    /// Maps a clone's track index onto the real item it duplicates.
    ///
    /// Real indexes (and every index of a non-infinite table) map to themselves.
    pub fn clone_equivalent(&self, item: usize) -> usize {
        if !self.table.infinite() || self.is_real(item) {
            return item;
        }
        let start = self.table.item_start_index();
        let total = self.table.item_count();
        if item < start {
            // Padding can be wider than the item list, so wrap as many times as needed.
            let behind = start - item;
            start + (total - behind % total) % total
        } else {
            start + (item - start) % total
        }
    }

    /// 1-based user-facing number of the real item at `item` (clones resolve to their source).
    pub fn item_number(&self, item: usize) -> usize {
        let real = self.clone_equivalent(item);
        let offset = real.saturating_sub(self.table.item_start_index());
        offset.min(self.table.item_count() - 1) + 1
    }
}
