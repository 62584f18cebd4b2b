use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{Configuration, Window};

/// Dot ↔ item lookup tables for one carousel configuration.
///
/// Dots are 1-based (`1..=total_dots`). In infinite mode two sentinel dots are registered in
/// addition: dot `0` maps to the last clone before the real items and dot `total_dots + 1` to
/// the first clone after them, so a step past either end lands on a valid position before the
/// wraparound reset runs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationTable {
    dot_to_item: BTreeMap<usize, usize>,
    item_to_dot: BTreeMap<usize, usize>,
    windows: Vec<Window>,
    item_count: usize,
    clone_count: usize,
    total_dots: usize,
    infinite: bool,
}

impl PaginationTable {
    /// Builds the table for `total_items` items.
    ///
    /// The caller owns the configuration policy: `slides_to_show` must already be clamped to
    /// `total_items` (with `infinite` off when it had to be), and `slides_to_scroll` must be
    /// `1` when `centered`. Use [`PaginationTable::from_configuration`] to get that for free.
    pub fn build(
        total_items: usize,
        slides_to_show: usize,
        slides_to_scroll: usize,
        infinite: bool,
        centered: bool,
    ) -> Self {
        debug_assert!(total_items >= 1, "PaginationTable: no items");
        debug_assert!(
            slides_to_show >= 1 && slides_to_show <= total_items,
            "PaginationTable: slides_to_show must be in 1..=total_items (show={slides_to_show}, total={total_items})"
        );
        debug_assert!(slides_to_scroll >= 1, "PaginationTable: slides_to_scroll is 0");

        let total = total_items.max(1);
        let show = slides_to_show.clamp(1, total);
        let scroll = if centered { 1 } else { slides_to_scroll.max(1) };
        let clone_count = if infinite { show + scroll } else { 0 };

        let windows = if infinite {
            padded_windows(total, show, scroll, clone_count)
        } else if centered {
            centered_windows(total, show)
        } else {
            sliding_windows(total, show, scroll)
        };

        let mut dot_to_item = BTreeMap::new();
        let mut item_to_dot = BTreeMap::new();
        let real = clone_count..clone_count + total;
        for w in &windows {
            dot_to_item.insert(w.dot, w.start);
            if centered {
                if real.contains(&w.start) {
                    item_to_dot.entry(w.start).or_insert(w.dot);
                }
                continue;
            }
            for i in w.indices().filter(|i| real.contains(i)) {
                // Earlier (lower-numbered) windows keep their claim.
                item_to_dot.entry(i).or_insert(w.dot);
            }
        }

        let total_dots = windows.len();
        if infinite {
            dot_to_item.insert(0, clone_count - 1);
            dot_to_item.insert(total_dots + 1, clone_count + total);
        }

        Self {
            dot_to_item,
            item_to_dot,
            windows,
            item_count: total,
            clone_count,
            total_dots,
            infinite,
        }
    }

    pub fn from_configuration(config: &Configuration) -> Self {
        Self::build(
            config.item_count(),
            config.slides_to_show(),
            config.slides_to_scroll(),
            config.infinite(),
            config.centered(),
        )
    }

    pub fn total_dots(&self) -> usize {
        self.total_dots
    }

    pub fn dot_start(&self) -> usize {
        1
    }

    pub fn dot_end(&self) -> usize {
        self.total_dots
    }

    /// First real item's track index.
    pub fn item_start_index(&self) -> usize {
        self.clone_count
    }

    /// Last real item's track index (inclusive).
    pub fn item_end_index(&self) -> usize {
        self.clone_count + self.item_count - 1
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    pub fn infinite(&self) -> bool {
        self.infinite
    }

    /// Visible windows, one per dot, in dot order.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn window(&self, dot: usize) -> Option<&Window> {
        dot.checked_sub(1).and_then(|i| self.windows.get(i))
    }

    /// Representative item of `dot` (sentinel dots included).
    pub fn dot_to_item(&self, dot: usize) -> Option<usize> {
        self.dot_to_item.get(&dot).copied()
    }

    /// Owning dot of a real item.
    pub fn item_to_dot(&self, item: usize) -> Option<usize> {
        self.item_to_dot.get(&item).copied()
    }

    /// Snaps `item` to the canonical item of the dot that owns it.
    pub fn balanced_index(&self, item: usize) -> Option<usize> {
        self.item_to_dot(item).and_then(|dot| self.dot_to_item(dot))
    }

    pub fn for_each_dot(&self, mut f: impl FnMut(usize, usize)) {
        for (&dot, &item) in &self.dot_to_item {
            f(dot, item);
        }
    }
}

/// Windows of `show` items stepping by `scroll` over `0..total`, with the last one clamped to
/// end exactly at `total`.
fn sliding_windows(total: usize, show: usize, scroll: usize) -> Vec<Window> {
    let mut starts: Vec<usize> = Vec::new();
    let mut start = 0usize;
    while start + show <= total {
        starts.push(start);
        start += scroll;
    }

    let covered = starts.last().map_or(0, |s| s + show);
    if covered < total {
        let last = total - show;
        if starts.last() != Some(&last) {
            starts.push(last);
        }
    }

    starts
        .into_iter()
        .enumerate()
        .map(|(i, start)| Window {
            dot: i + 1,
            start,
            end: start + show,
        })
        .collect()
}

/// One window per item; the band is centered on the item by the surface, so here a window just
/// records the item and what follows it.
fn centered_windows(total: usize, show: usize) -> Vec<Window> {
    (0..total)
        .map(|start| Window {
            dot: start + 1,
            start,
            end: (start + show).min(total),
        })
        .collect()
}

/// Infinite mode: `ceil(total / scroll)` windows starting at the first real item. Windows may
/// run into the trailing clones, up to and including the first one.
fn padded_windows(total: usize, show: usize, scroll: usize, clone_count: usize) -> Vec<Window> {
    let total_dots = total.div_ceil(scroll);
    let limit = clone_count + total + 1;
    (0..total_dots)
        .map(|i| {
            let start = clone_count + i * scroll;
            Window {
                dot: i + 1,
                start,
                end: (start + show).min(limit),
            }
        })
        .collect()
}
