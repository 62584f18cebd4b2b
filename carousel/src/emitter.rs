use alloc::vec::Vec;

use crate::{Boundary, Notification};

/// Queue of notifications waiting for the rendering surface.
///
/// It enforces the state-intent contract:
/// - A `SetIndex`/`SetDot`/`SetBoundary` equal to the last one of its kind is dropped.
/// - `Reset` forgets what the surface was last told.
#[derive(Clone, Debug, Default)]
pub struct Outbox {
    queue: Vec<Notification>,
    last_index: Option<(usize, bool)>,
    last_dot: Option<usize>,
    last_boundary: Option<Boundary>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification {
            Notification::SetIndex { index, animate } => {
                if self.last_index == Some((index, animate)) {
                    return;
                }
                self.last_index = Some((index, animate));
            }
            Notification::SetDot { dot } => {
                if self.last_dot == Some(dot) {
                    return;
                }
                self.last_dot = Some(dot);
            }
            Notification::SetBoundary(boundary) => {
                if self.last_boundary == Some(boundary) {
                    return;
                }
                self.last_boundary = Some(boundary);
            }
            Notification::Reset => {
                self.last_index = None;
                self.last_dot = None;
                self.last_boundary = None;
            }
            _ => {}
        }
        self.queue.push(notification);
    }

    pub fn pending(&self) -> &[Notification] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        core::mem::take(&mut self.queue)
    }
}
