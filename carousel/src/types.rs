use core::ops::Range;

/// The axis the carousel track moves along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Where the current window sits relative to the valid item range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    Start,
    Middle,
    End,
}

/// A reference to an item node on the track.
///
/// Indexes are *track* indexes: in infinite mode real items occupy
/// `clone_count..clone_count + item_count` and everything outside is clone padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemRef {
    /// A real item at the given track index.
    Real(usize),
    /// A clone node at the given track index; it stands in for the real item
    /// returned by [`crate::IndexTranslator::clone_equivalent`].
    Clone(usize),
}

/// The contiguous run of track indexes visible while a dot is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub dot: usize,
    pub start: usize,
    pub end: usize, // exclusive
}

impl Window {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Payload of the before-slide / after-slide notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideEvent {
    pub current_index: usize,
    pub current_dot: usize,
    /// 1-based number of the real item at `current_index`.
    pub item_number: usize,
}

/// Why a navigation command left the position untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ignored {
    /// A transition is already in flight.
    Animating,
    /// The target is past the first/last dot of a non-infinite carousel.
    Boundary,
    /// The target is the current position.
    AlreadyCurrent,
    /// The gesture ended below the swipe threshold.
    Cancelled,
    /// No gesture was in progress.
    NoGesture,
    /// An item click arrived while a drag preview was active.
    GestureActive,
    /// Item clicks only report the selection (`select_on_click` is off).
    SelectionDisabled,
    /// The engine was reset and has not been resized since.
    Discarded,
}

/// Result of a navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// The engine entered `Transitioning` towards `index`/`dot`.
    Started { index: usize, dot: usize },
    Ignored(Ignored),
}

impl Transition {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// A render intent emitted by the engine for the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    /// Move the track to `index`. When `animate` is false the surface must jump there with
    /// transitions suppressed and must not report transition events for it.
    SetIndex { index: usize, animate: bool },
    SetDot { dot: usize },
    SetBoundary(Boundary),
    BeforeSlide(SlideEvent),
    AfterSlide(SlideEvent),
    /// Live drag-follow offset along the carousel axis, in pixels. The surface translates the
    /// track by `-offset`.
    DragPreview { offset: f32 },
    /// The drag ended; drop the preview offset.
    DragReleased,
    /// An item was clicked (1-based real item number).
    ItemSelected { item_number: usize },
    /// The engine was torn down to its neutral state.
    Reset,
}
