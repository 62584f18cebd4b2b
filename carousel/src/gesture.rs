use crate::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    Moving,
    Done,
}

/// Cumulative pointer delta from the gesture origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureSample {
    pub dx: f32,
    pub dy: f32,
    pub phase: GesturePhase,
}

impl GestureSample {
    /// Delta along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.dx,
            Axis::Vertical => self.dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureDecision {
    Next,
    Prev,
    Cancel,
}

/// Track geometry needed to turn a drag delta into a preview offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewGeometry {
    pub current_index: usize,
    pub center_offset: usize,
    /// Viewport extent along the carousel axis, in pixels.
    pub extent: f32,
    pub gap: f32,
    pub slides_to_show: usize,
}

impl PreviewGeometry {
    /// Distance between the starts of two neighbouring items.
    pub fn stride(&self) -> f32 {
        (self.extent + self.gap) / self.slides_to_show.max(1) as f32
    }

    /// Track offset that puts `index` in the first visible slot (or the center slot).
    pub fn offset_of(&self, index: usize) -> f32 {
        (index as f32 - self.center_offset as f32) * self.stride()
    }
}

/// Turns one pointer gesture into preview offsets and a final commit/cancel decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureInterpreter {
    axis: Axis,
    threshold: f32,
    origin: Option<(f32, f32)>,
    moved: bool,
}

impl GestureInterpreter {
    pub fn new(axis: Axis, threshold: f32) -> Self {
        Self {
            axis,
            threshold,
            origin: None,
            moved: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// A gesture has started and not yet finished.
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// The active gesture has produced at least one preview.
    pub fn is_previewing(&self) -> bool {
        self.origin.is_some() && self.moved
    }

    /// Fixes the origin; an unfinished gesture is discarded.
    pub fn start(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
        self.moved = false;
    }

    pub fn update(&mut self, x: f32, y: f32) -> Option<GestureSample> {
        let sample = self.sample(x, y, GesturePhase::Moving)?;
        self.moved = true;
        Some(sample)
    }

    /// Ends the gesture and decides what it means.
    pub fn finish(&mut self, x: f32, y: f32) -> Option<(GestureSample, GestureDecision)> {
        let sample = self.sample(x, y, GesturePhase::Done)?;
        self.origin = None;
        self.moved = false;
        Some((sample, self.decide(&sample)))
    }

    /// Drops the gesture without a decision. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        self.moved = false;
        self.origin.take().is_some()
    }

    /// Dragging against the reading direction (negative delta) advances.
    pub fn decide(&self, sample: &GestureSample) -> GestureDecision {
        let delta = sample.along(self.axis);
        if delta < -self.threshold {
            GestureDecision::Next
        } else if delta > self.threshold {
            GestureDecision::Prev
        } else {
            GestureDecision::Cancel
        }
    }

    pub fn preview_offset(&self, geometry: &PreviewGeometry, sample: &GestureSample) -> f32 {
        geometry.offset_of(geometry.current_index) - sample.along(self.axis)
    }

    fn sample(&self, x: f32, y: f32, phase: GesturePhase) -> Option<GestureSample> {
        let (x0, y0) = self.origin?;
        Some(GestureSample {
            dx: x - x0,
            dy: y - y0,
            phase,
        })
    }
}
