use alloc::vec::Vec;

use crate::emitter::Outbox;
use crate::{
    AutoplayScheduler, AutoplayState, Boundary, CarouselError, CarouselOptions, Configuration,
    GestureDecision, GestureInterpreter, IndexKind, IndexTranslator, Ignored, ItemRef,
    Notification, PaginationTable, PositionSnapshot, PositionState, PreviewGeometry, Result,
    SlideEvent, Transition,
};

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and never calls into the surface.
/// - Your adapter drives it with commands and drains [`Notification`]s to render.
/// - The surface reports the visual transition back via [`CarouselEngine::transition_started`]
///   and [`CarouselEngine::transition_ended`], exactly once each per accepted transition.
///
/// Until `transition_ended` arrives the engine stays locked in `Transitioning` and drops every
/// navigation command. There is no timeout.
///
/// Two command layers exist:
/// - Transitions (`slide_next`, `go_to_dot`, ...) only touch the position.
/// - User input (`next`, `select_dot`, gestures, clicks, pointer hover) additionally keeps
///   autoplay in step with the user.
#[derive(Clone, Debug)]
pub struct CarouselEngine {
    config: Configuration,
    translator: IndexTranslator,
    position: PositionState,
    gesture: GestureInterpreter,
    autoplay: AutoplayScheduler,
    outbox: Outbox,
    extent: f32,
    // Set by `reset`, cleared by `resize`.
    discarded: bool,
}

impl CarouselEngine {
    /// Resolves `options` and builds the engine at the resolved initial item.
    ///
    /// The initial `SetIndex`/`SetDot`/`SetBoundary` intents are queued immediately. Autoplay
    /// arms on the first [`CarouselEngine::tick`].
    pub fn new(options: &CarouselOptions) -> Result<Self> {
        let resolution = options.resolve()?;
        let config = resolution.configuration;
        let translator = IndexTranslator::new(PaginationTable::from_configuration(&config));
        let position = initial_position(&translator, config.initial_item());
        cdebug!(
            item_count = config.item_count(),
            slides_to_show = config.slides_to_show(),
            slides_to_scroll = config.slides_to_scroll(),
            infinite = config.infinite(),
            centered = config.centered(),
            total_dots = translator.table().total_dots(),
            "CarouselEngine::new"
        );
        let mut engine = Self {
            gesture: GestureInterpreter::new(config.axis(), config.swipe_threshold()),
            autoplay: AutoplayScheduler::from_configuration(&config),
            config,
            translator,
            position,
            outbox: Outbox::new(),
            extent: 0.0,
            discarded: false,
        };
        engine.announce_position();
        Ok(engine)
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn table(&self) -> &PaginationTable {
        self.translator.table()
    }

    pub fn translator(&self) -> &IndexTranslator {
        &self.translator
    }

    pub fn autoplay(&self) -> &AutoplayScheduler {
        &self.autoplay
    }

    pub fn current_index(&self) -> usize {
        self.position.current_index()
    }

    pub fn current_dot(&self) -> usize {
        self.position.current_dot()
    }

    pub fn is_animating(&self) -> bool {
        self.position.animating()
    }

    /// `true` after [`CarouselEngine::reset`] until the next [`CarouselEngine::resize`].
    pub fn is_discarded(&self) -> bool {
        self.discarded
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_previewing()
    }

    pub fn position_state(&self) -> PositionState {
        self.position
    }

    /// Returns a lightweight snapshot of the current position.
    pub fn position(&self) -> PositionSnapshot {
        PositionSnapshot {
            current_index: self.position.current_index(),
            current_dot: self.position.current_dot(),
            animating: self.position.animating(),
            boundary: self.boundary(),
            item_number: self.translator.item_number(self.position.current_index()),
        }
    }

    /// Start/middle/end marker for the current window.
    pub fn boundary(&self) -> Boundary {
        let table = self.translator.table();
        let index = self.position.current_index();
        if index <= table.item_start_index() {
            return Boundary::Start;
        }
        let last_visible = if self.config.centered() {
            index
        } else {
            index + self.config.slides_to_show() - 1
        };
        if last_visible >= table.item_end_index() {
            Boundary::End
        } else {
            Boundary::Middle
        }
    }

    pub fn pending_notifications(&self) -> &[Notification] {
        self.outbox.pending()
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.outbox.drain()
    }

    /// Main-axis viewport extent (px), used for drag previews and track offsets.
    pub fn viewport_extent(&self) -> f32 {
        self.extent
    }

    pub fn set_viewport(&mut self, extent: f32) {
        self.extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
    }

    pub fn preview_geometry(&self) -> PreviewGeometry {
        PreviewGeometry {
            current_index: self.position.current_index(),
            center_offset: self.config.center_offset(),
            extent: self.extent,
            gap: self.config.gap(),
            slides_to_show: self.config.slides_to_show(),
        }
    }

    /// Track offset (px) at which `index` sits in the first (or center) slot.
    pub fn track_offset(&self, index: usize) -> f32 {
        self.preview_geometry().offset_of(index)
    }

    // Transitions.

    pub fn slide_next(&mut self) -> Transition {
        if self.position.animating() {
            ctrace!("slide_next: ignored (animating)");
            return Transition::Ignored(Ignored::Animating);
        }
        if self.discarded {
            return Transition::Ignored(Ignored::Discarded);
        }
        let target = self.position.current_dot() + 1;
        if !self.config.infinite() && target > self.translator.table().dot_end() {
            ctrace!(dot = target, "slide_next: ignored (boundary)");
            return Transition::Ignored(Ignored::Boundary);
        }
        self.transition_to_dot(target)
    }

    pub fn slide_prev(&mut self) -> Transition {
        if self.position.animating() {
            ctrace!("slide_prev: ignored (animating)");
            return Transition::Ignored(Ignored::Animating);
        }
        if self.discarded {
            return Transition::Ignored(Ignored::Discarded);
        }
        let current = self.position.current_dot();
        let lowest = if self.config.infinite() {
            0
        } else {
            self.translator.table().dot_start()
        };
        if current <= lowest {
            ctrace!(current, "slide_prev: ignored (boundary)");
            return Transition::Ignored(Ignored::Boundary);
        }
        self.transition_to_dot(current - 1)
    }

    /// Transitions to a 1-based dot.
    pub fn go_to_dot(&mut self, dot: usize) -> Result<Transition> {
        let table = self.translator.table();
        if dot < table.dot_start() || dot > table.dot_end() {
            return Err(CarouselError::invalid(
                IndexKind::Dot,
                dot,
                table.dot_start(),
                table.dot_end(),
            ));
        }
        Ok(self.transition_to_dot(dot))
    }

    /// Transitions to the dot owning a 1-based slide number.
    pub fn go_to_slide(&mut self, slide: usize) -> Result<Transition> {
        let table = self.translator.table();
        if slide < 1 || slide > table.item_count() {
            return Err(CarouselError::invalid(
                IndexKind::Slide,
                slide,
                1,
                table.item_count(),
            ));
        }
        let mut item = slide - 1 + table.clone_count();
        if !self.config.infinite() {
            item = item.min(table.item_end_index());
        }
        if self.position.animating() {
            return Ok(Transition::Ignored(Ignored::Animating));
        }
        if self.discarded {
            return Ok(Transition::Ignored(Ignored::Discarded));
        }
        if item == self.position.current_index() {
            return Ok(Transition::Ignored(Ignored::AlreadyCurrent));
        }
        let dot = self.translator.dot_of(item)?;
        Ok(self.transition_to_dot(dot))
    }

    /// Transitions to the real item a clone node stands in for.
    pub fn go_to_cloned_item(&mut self, clone_index: usize) -> Result<Transition> {
        let real = self.translator.clone_equivalent(clone_index);
        let dot = self.translator.dot_of(real)?;
        Ok(self.transition_to_dot(dot))
    }

    /// Tears the engine down to a neutral idle state at item 0 / dot 0 and stops autoplay.
    ///
    /// Navigation is refused with [`Ignored::Discarded`] until [`CarouselEngine::resize`]
    /// rebuilds the engine.
    pub fn reset(&mut self) {
        cdebug!("CarouselEngine::reset");
        self.discarded = true;
        self.position.clear();
        self.gesture.cancel();
        self.autoplay.stop();
        self.outbox.push(Notification::Reset);
    }

    /// Surface acknowledgement: the visual transition began.
    pub fn transition_started(&mut self) {
        if !self.position.acknowledge() {
            cwarn!(
                animating = self.position.animating(),
                "transition_started without a pending transition"
            );
            return;
        }
        ctrace!(
            index = self.position.current_index(),
            "transition_started"
        );
    }

    /// Surface acknowledgement: the visual transition finished.
    ///
    /// Emits after-slide, wraps sentinel dots and clone indexes back into the canonical range
    /// (as non-animated `SetIndex` intents), and unlocks the engine.
    pub fn transition_ended(&mut self) {
        if !self.position.animating() {
            cwarn!("transition_ended without a transition in flight");
            return;
        }
        let event = self.slide_event();
        self.outbox.push(Notification::AfterSlide(event));

        if let Some(index) = self.position.reset_dot(&self.translator) {
            ctrace!(index, dot = self.position.current_dot(), "reset_dot");
            self.outbox.push(Notification::SetIndex {
                index,
                animate: false,
            });
        }
        self.outbox.push(Notification::SetDot {
            dot: self.position.current_dot(),
        });
        if let Some(index) = self.position.reset_index(&self.translator) {
            ctrace!(index, "reset_index");
            self.outbox.push(Notification::SetIndex {
                index,
                animate: false,
            });
        }

        self.position.finish();
        self.outbox.push(Notification::SetBoundary(self.boundary()));
    }

    /// Re-resolves configuration (e.g. after a reflow) and rebuilds the table.
    ///
    /// The current real item is kept (snapped to its dot's canonical item) and
    /// `options.initial_item` is ignored. An in-flight transition or gesture is dropped.
    /// On error the engine is left untouched.
    pub fn resize(&mut self, options: &CarouselOptions, now_ms: u64) -> Result<()> {
        let resolution = options.resolve()?;
        let config = resolution.configuration;
        let keep = self
            .translator
            .item_number(self.position.current_index())
            .min(config.item_count());

        let translator = IndexTranslator::new(PaginationTable::from_configuration(&config));
        let was_paused = self.autoplay.is_paused();
        let was_stopped = self.autoplay.state() == AutoplayState::Stopped;

        self.position = initial_position(&translator, keep - 1);
        self.translator = translator;
        self.gesture = GestureInterpreter::new(config.axis(), config.swipe_threshold());
        self.autoplay = AutoplayScheduler::from_configuration(&config);
        self.config = config;
        self.discarded = false;

        if was_stopped {
            self.autoplay.stop();
        } else {
            self.autoplay.start(now_ms);
            if was_paused {
                self.autoplay.pause();
            }
        }

        cdebug!(
            item_count = self.config.item_count(),
            total_dots = self.translator.table().total_dots(),
            item_number = keep,
            "CarouselEngine::resize"
        );
        self.announce_position();
        Ok(())
    }

    // User input.

    /// "Next" button.
    pub fn next(&mut self, now_ms: u64) -> Transition {
        let t = self.slide_next();
        self.user_transition(t, now_ms)
    }

    /// "Prev" button.
    pub fn prev(&mut self, now_ms: u64) -> Transition {
        let t = self.slide_prev();
        self.user_transition(t, now_ms)
    }

    /// Pagination dot click.
    pub fn select_dot(&mut self, dot: usize, now_ms: u64) -> Result<Transition> {
        let t = self.go_to_dot(dot)?;
        Ok(self.user_transition(t, now_ms))
    }

    /// Direct selection of a 1-based slide.
    pub fn select_slide(&mut self, slide: usize, now_ms: u64) -> Result<Transition> {
        let t = self.go_to_slide(slide)?;
        Ok(self.user_transition(t, now_ms))
    }

    /// Item click. Always reports `ItemSelected`; navigates only with `select_on_click`.
    ///
    /// Clicks are dropped while a drag preview is active (click-vs-drag disambiguation).
    pub fn item_clicked(&mut self, item: ItemRef, now_ms: u64) -> Result<Transition> {
        if self.gesture.is_previewing() {
            ctrace!(?item, "item_clicked: ignored (dragging)");
            return Ok(Transition::Ignored(Ignored::GestureActive));
        }
        let table = self.translator.table();
        let real = match item {
            ItemRef::Real(index) => index,
            ItemRef::Clone(index) => self.translator.clone_equivalent(index),
        };
        if !self.translator.is_real(real) {
            return Err(CarouselError::invalid(
                IndexKind::Item,
                real,
                table.item_start_index(),
                table.item_end_index(),
            ));
        }

        let item_number = self.translator.item_number(real);
        self.outbox.push(Notification::ItemSelected { item_number });
        if !self.config.select_on_click() {
            return Ok(Transition::Ignored(Ignored::SelectionDisabled));
        }

        let t = match item {
            ItemRef::Real(index) => {
                let dot = self.translator.dot_of(index)?;
                self.transition_to_dot(dot)
            }
            ItemRef::Clone(index) => self.go_to_cloned_item(index)?,
        };
        Ok(self.user_transition(t, now_ms))
    }

    /// Pointer entered the interactive region: autoplay pauses.
    pub fn pointer_enter(&mut self) {
        self.autoplay.pause();
    }

    /// Pointer left the interactive region: autoplay restarts its period.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        self.autoplay.resume(now_ms);
    }

    pub fn gesture_start(&mut self, x: f32, y: f32) {
        self.gesture.start(x, y);
    }

    /// Emits and returns the drag preview offset, or `None` when no gesture is active.
    pub fn gesture_move(&mut self, x: f32, y: f32) -> Option<f32> {
        let sample = self.gesture.update(x, y)?;
        let offset = self
            .gesture
            .preview_offset(&self.preview_geometry(), &sample);
        self.outbox.push(Notification::DragPreview { offset });
        Some(offset)
    }

    /// Ends the gesture and commits a slide when the drag passed the threshold.
    ///
    /// A commit past the first/last dot of a non-infinite carousel is dropped.
    pub fn gesture_end(&mut self, x: f32, y: f32, now_ms: u64) -> Transition {
        let Some((_, decision)) = self.gesture.finish(x, y) else {
            return Transition::Ignored(Ignored::NoGesture);
        };
        self.outbox.push(Notification::DragReleased);
        let t = match decision {
            GestureDecision::Next => self.slide_next(),
            GestureDecision::Prev => self.slide_prev(),
            GestureDecision::Cancel => Transition::Ignored(Ignored::Cancelled),
        };
        ctrace!(?decision, ?t, "gesture_end");
        self.user_transition(t, now_ms)
    }

    /// Abandons the gesture (e.g. pointer cancelled). The position is untouched.
    pub fn gesture_cancel(&mut self) {
        if self.gesture.cancel() {
            self.outbox.push(Notification::DragReleased);
        }
    }

    /// Advances the autoplay clock. Returns the autoplay step when a period elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Option<Transition> {
        if !self.autoplay.poll(now_ms) {
            return None;
        }
        let t = self.slide_next();
        ctrace!(now_ms, ?t, "autoplay tick");
        Some(t)
    }

    fn user_transition(&mut self, t: Transition, now_ms: u64) -> Transition {
        if t.is_started() {
            self.autoplay.restart(now_ms);
        }
        t
    }

    fn transition_to_dot(&mut self, dot: usize) -> Transition {
        if self.position.animating() {
            ctrace!(dot, "transition ignored (animating)");
            return Transition::Ignored(Ignored::Animating);
        }
        if self.discarded {
            ctrace!(dot, "transition ignored (discarded)");
            return Transition::Ignored(Ignored::Discarded);
        }
        if dot == self.position.current_dot() {
            return Transition::Ignored(Ignored::AlreadyCurrent);
        }
        let Ok(index) = self.translator.item_of(dot) else {
            return Transition::Ignored(Ignored::Boundary);
        };
        let began = self.position.begin(index, dot);
        debug_assert!(began, "transition_to_dot: lock already held");

        ctrace!(index, dot, "transition started");
        self.outbox.push(Notification::SetIndex {
            index,
            animate: true,
        });
        self.outbox.push(Notification::SetDot { dot });
        self.outbox.push(Notification::SetBoundary(self.boundary()));
        self.outbox.push(Notification::BeforeSlide(self.slide_event()));
        Transition::Started { index, dot }
    }

    fn slide_event(&self) -> SlideEvent {
        SlideEvent {
            current_index: self.position.current_index(),
            current_dot: self.position.current_dot(),
            item_number: self.translator.item_number(self.position.current_index()),
        }
    }

    fn announce_position(&mut self) {
        self.outbox.push(Notification::SetIndex {
            index: self.position.current_index(),
            animate: false,
        });
        self.outbox.push(Notification::SetDot {
            dot: self.position.current_dot(),
        });
        self.outbox.push(Notification::SetBoundary(self.boundary()));
    }
}

/// Idle position at the canonical item of the dot owning real item `item` (0-based).
fn initial_position(translator: &IndexTranslator, item: usize) -> PositionState {
    let table = translator.table();
    let padded = (item + table.clone_count()).min(table.item_end_index());
    let dot = translator.dot_of(padded).unwrap_or(table.dot_start());
    let index = translator
        .item_of(dot)
        .unwrap_or(table.item_start_index());
    PositionState::new(index, dot)
}
