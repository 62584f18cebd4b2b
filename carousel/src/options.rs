use alloc::vec::Vec;

use crate::{Axis, CarouselError, Result};

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;

/// Minimum drag distance (px) along the carousel axis that commits a slide.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Raw carousel settings as supplied by the widget glue.
///
/// Nothing here is trusted: [`CarouselOptions::resolve`] turns it into a [`Configuration`],
/// applying the silent policy corrections listed in [`Adjustment`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    pub item_count: usize,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub infinite: bool,
    /// Keeps the current item in the middle of the visible band. Only honored for odd
    /// `slides_to_show > 2`.
    pub centered: bool,
    pub autoplay: bool,
    /// Autoplay period. `0` disables autoplay.
    pub autoplay_interval_ms: u64,
    /// Space between items, in pixels.
    pub gap: f32,
    /// 0-based real item that starts active.
    pub initial_item: usize,
    pub axis: Axis,
    pub swipe_threshold: f32,
    /// Whether clicking an item navigates to it (clicks are always reported).
    pub select_on_click: bool,
}

impl CarouselOptions {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            slides_to_show: 1,
            slides_to_scroll: 1,
            infinite: false,
            centered: false,
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            gap: 0.0,
            initial_item: 0,
            axis: Axis::Horizontal,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            select_on_click: false,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_slides_to_show(mut self, slides_to_show: usize) -> Self {
        self.slides_to_show = slides_to_show;
        self
    }

    pub fn with_slides_to_scroll(mut self, slides_to_scroll: usize) -> Self {
        self.slides_to_scroll = slides_to_scroll;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Enables autoplay with the given period.
    pub fn with_autoplay(mut self, interval_ms: u64) -> Self {
        self.autoplay = true;
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_initial_item(mut self, initial_item: usize) -> Self {
        self.initial_item = initial_item;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_swipe_threshold(mut self, swipe_threshold: f32) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    pub fn with_select_on_click(mut self, select_on_click: bool) -> Self {
        self.select_on_click = select_on_click;
        self
    }

    /// Resolves these options into an immutable [`Configuration`].
    ///
    /// Resolution is idempotent: resolving `configuration.to_options()` again yields the same
    /// configuration and no adjustments, so it is safe to re-run on every resize.
    pub fn resolve(&self) -> Result<Resolution> {
        let total = self.item_count;
        if total == 0 {
            return Err(CarouselError::Empty);
        }

        let mut adjustments = Vec::new();
        let mut show = self.slides_to_show;
        let mut scroll = self.slides_to_scroll;
        let mut infinite = self.infinite;
        let mut centered = self.centered;

        if show == 0 {
            adjustments.push(Adjustment::SlidesToShowRaised);
            show = 1;
        }
        if scroll == 0 {
            adjustments.push(Adjustment::SlidesToScrollRaised);
            scroll = 1;
        }

        if show > total {
            if infinite {
                adjustments.push(Adjustment::InfiniteDisabled);
                infinite = false;
            }
            adjustments.push(Adjustment::SlidesToShowClamped {
                from: show,
                to: total,
            });
            show = total;
        }

        if scroll > show {
            adjustments.push(Adjustment::SlidesToScrollClamped {
                from: scroll,
                to: show,
            });
            scroll = show;
        }

        if centered && (show % 2 == 0 || show <= 2) {
            adjustments.push(Adjustment::CenteredDisabled {
                slides_to_show: show,
            });
            centered = false;
        }

        if centered && scroll != 1 {
            adjustments.push(Adjustment::CenteredScrollReset { from: scroll });
            scroll = 1;
        }

        if show + scroll >= total && scroll != 1 {
            adjustments.push(Adjustment::OverflowScrollReset { from: scroll });
            scroll = 1;
        }

        let mut initial_item = self.initial_item;
        if initial_item >= total {
            adjustments.push(Adjustment::InitialItemClamped {
                from: initial_item,
                to: total - 1,
            });
            initial_item = total - 1;
        }

        let mut gap = self.gap;
        if !gap.is_finite() || gap < 0.0 {
            adjustments.push(Adjustment::GapReset);
            gap = 0.0;
        }

        let mut swipe_threshold = self.swipe_threshold;
        if !swipe_threshold.is_finite() || swipe_threshold < 0.0 {
            adjustments.push(Adjustment::SwipeThresholdReset);
            swipe_threshold = DEFAULT_SWIPE_THRESHOLD;
        }

        if !adjustments.is_empty() {
            cdebug!(?adjustments, "CarouselOptions::resolve: adjusted");
        }

        Ok(Resolution {
            configuration: Configuration {
                item_count: total,
                slides_to_show: show,
                slides_to_scroll: scroll,
                infinite,
                centered,
                autoplay: self.autoplay,
                autoplay_interval_ms: self.autoplay_interval_ms,
                gap,
                initial_item,
                axis: self.axis,
                swipe_threshold,
                select_on_click: self.select_on_click,
            },
            adjustments,
        })
    }
}

/// A silent policy correction applied while resolving [`CarouselOptions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjustment {
    SlidesToShowRaised,
    SlidesToScrollRaised,
    /// More slides to show than items; infinite looping is switched off.
    InfiniteDisabled,
    SlidesToShowClamped { from: usize, to: usize },
    SlidesToScrollClamped { from: usize, to: usize },
    /// Centering needs an odd `slides_to_show` greater than 2.
    CenteredDisabled { slides_to_show: usize },
    CenteredScrollReset { from: usize },
    /// `slides_to_show + slides_to_scroll >= item_count`.
    OverflowScrollReset { from: usize },
    InitialItemClamped { from: usize, to: usize },
    GapReset,
    SwipeThresholdReset,
}

/// Output of [`CarouselOptions::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub configuration: Configuration,
    pub adjustments: Vec<Adjustment>,
}

/// Resolved, immutable carousel configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    item_count: usize,
    slides_to_show: usize,
    slides_to_scroll: usize,
    infinite: bool,
    centered: bool,
    autoplay: bool,
    autoplay_interval_ms: u64,
    gap: f32,
    initial_item: usize,
    axis: Axis,
    swipe_threshold: f32,
    select_on_click: bool,
}

impl Configuration {
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn slides_to_show(&self) -> usize {
        self.slides_to_show
    }

    pub fn slides_to_scroll(&self) -> usize {
        self.slides_to_scroll
    }

    pub fn infinite(&self) -> bool {
        self.infinite
    }

    pub fn centered(&self) -> bool {
        self.centered
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn autoplay_interval_ms(&self) -> u64 {
        self.autoplay_interval_ms
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn initial_item(&self) -> usize {
        self.initial_item
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    pub fn select_on_click(&self) -> bool {
        self.select_on_click
    }

    /// Number of clone nodes on *each* side of the real items.
    pub fn clone_count(&self) -> usize {
        if self.infinite {
            self.slides_to_show + self.slides_to_scroll
        } else {
            0
        }
    }

    /// Items between the first visible item and the current item.
    pub fn center_offset(&self) -> usize {
        if self.centered {
            self.slides_to_show / 2
        } else {
            0
        }
    }

    /// Converts back into options (used for resize-triggered re-resolution).
    pub fn to_options(&self) -> CarouselOptions {
        CarouselOptions {
            item_count: self.item_count,
            slides_to_show: self.slides_to_show,
            slides_to_scroll: self.slides_to_scroll,
            infinite: self.infinite,
            centered: self.centered,
            autoplay: self.autoplay,
            autoplay_interval_ms: self.autoplay_interval_ms,
            gap: self.gap,
            initial_item: self.initial_item,
            axis: self.axis,
            swipe_threshold: self.swipe_threshold,
            select_on_click: self.select_on_click,
        }
    }
}
