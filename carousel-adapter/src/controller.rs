use alloc::vec::Vec;

use carousel::{CarouselEngine, CarouselOptions, Notification};

use crate::{Easing, Tween};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Animation {
    tween: Tween,
    // `true` when the tween carries an engine transition that needs `transition_ended`.
    settles_transition: bool,
}

/// A framework-neutral controller that wraps a `carousel::CarouselEngine` and plays its
/// transitions as tweens.
///
/// This type does not hold any UI objects. It is meant for hosts that have no transition
/// events of their own (canvas, TUI, immediate-mode GUIs). Adapters drive it by calling:
/// - engine commands through [`Controller::engine_mut`] when UI events occur
/// - [`Controller::on_viewport_size`] when the viewport is measured
/// - [`Controller::tick`] each frame/timer tick, then translating the track by `-offset()`
///
/// The controller acknowledges `transition_started` on the first tick that sees an animated
/// `SetIndex`, and `transition_ended` once the tween finishes. If your surface has real
/// transition events, drive [`CarouselEngine`] directly instead.
#[derive(Clone, Debug)]
pub struct Controller {
    engine: CarouselEngine,
    animation: Option<Animation>,
    offset: f32,
    transition_ms: u64,
    easing: Easing,
}

impl Controller {
    pub fn new(
        options: &CarouselOptions,
        transition_ms: u64,
        easing: Easing,
    ) -> carousel::Result<Self> {
        Ok(Self::from_engine(
            CarouselEngine::new(options)?,
            transition_ms,
            easing,
        ))
    }

    pub fn from_engine(engine: CarouselEngine, transition_ms: u64, easing: Easing) -> Self {
        let offset = engine.track_offset(engine.current_index());
        Self {
            engine,
            animation: None,
            offset,
            transition_ms,
            easing,
        }
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CarouselEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> CarouselEngine {
        self.engine
    }

    /// Current track offset along the carousel axis, in pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn on_viewport_size(&mut self, extent: f32) {
        self.engine.set_viewport(extent);
        match &mut self.animation {
            Some(animation) => {
                let to = self.engine.track_offset(self.engine.current_index());
                animation.tween.to = to;
            }
            None => self.offset = self.engine.track_offset(self.engine.current_index()),
        }
    }

    /// Jumps to the end of the running tween. A carried transition is ended right away; its
    /// notifications are returned by the next [`Controller::tick`].
    pub fn finish_animation(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };
        self.offset = animation.tween.to;
        if animation.settles_transition {
            self.engine.transition_ended();
        }
    }

    /// Advances the controller.
    ///
    /// - Samples the running tween and ends its transition when the tween is done.
    /// - Advances autoplay.
    /// - Applies every pending engine notification to the offset and returns them, so the
    ///   adapter can render dots, boundary state and slide events.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Notification> {
        if let Some(animation) = self.animation {
            self.offset = animation.tween.sample(now_ms);
            if animation.tween.is_done(now_ms) {
                self.animation = None;
                if animation.settles_transition {
                    self.engine.transition_ended();
                }
            }
        }

        self.engine.tick(now_ms);

        let notifications = self.engine.drain_notifications();
        for notification in &notifications {
            self.apply(notification, now_ms);
        }
        notifications
    }

    fn apply(&mut self, notification: &Notification, now_ms: u64) {
        match *notification {
            Notification::SetIndex {
                index,
                animate: true,
            } => {
                let to = self.engine.track_offset(index);
                self.animation = Some(Animation {
                    tween: Tween::new(self.offset, to, now_ms, self.transition_ms, self.easing),
                    settles_transition: true,
                });
                self.engine.transition_started();
            }
            Notification::SetIndex {
                index,
                animate: false,
            } => {
                self.animation = None;
                self.offset = self.engine.track_offset(index);
            }
            Notification::DragPreview { offset } => {
                if !self.carries_transition() {
                    self.animation = None;
                    self.offset = offset;
                }
            }
            Notification::DragReleased => {
                if !self.carries_transition() {
                    // Snap back; a committed drag replaces this with its own SetIndex.
                    let to = self.engine.track_offset(self.engine.current_index());
                    self.animation = Some(Animation {
                        tween: Tween::new(self.offset, to, now_ms, self.transition_ms, self.easing),
                        settles_transition: false,
                    });
                }
            }
            Notification::Reset => {
                self.animation = None;
                self.offset = 0.0;
            }
            _ => {}
        }
    }

    fn carries_transition(&self) -> bool {
        self.animation.is_some_and(|a| a.settles_transition)
    }
}
