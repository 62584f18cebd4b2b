use alloc::vec::Vec;

use carousel::{CarouselEngine, Notification};

/// Keeps follower carousels on the item a leader settled on or had clicked.
///
/// Typical use is a thumbnail strip following a main carousel (or the reverse): drain the
/// leader's notifications, hand them to [`SyncGroup::forward`], then render both.
#[derive(Clone, Debug, Default)]
pub struct SyncGroup {
    followers: Vec<CarouselEngine>,
}

impl SyncGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, follower: CarouselEngine) {
        self.followers.push(follower);
    }

    pub fn followers(&self) -> &[CarouselEngine] {
        &self.followers
    }

    pub fn follower_mut(&mut self, index: usize) -> Option<&mut CarouselEngine> {
        self.followers.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    /// Forwards the item a leader settled on (`AfterSlide`) or had clicked (`ItemSelected`) as
    /// `go_to_slide` commands. `notifications` is a batch drained from `leader`.
    ///
    /// A settled item is read after the wraparound relocation that follows `AfterSlide` in the
    /// same batch, so followers land where the leader came to rest. Followers already on the
    /// item, or with fewer items than the number, are skipped.
    /// Returns how many follower transitions started.
    pub fn forward(
        &mut self,
        leader: &CarouselEngine,
        notifications: &[Notification],
    ) -> carousel::Result<usize> {
        let mut started = 0usize;
        for (i, notification) in notifications.iter().enumerate() {
            let item_number = match *notification {
                Notification::AfterSlide(event) => {
                    settled_index(&notifications[i + 1..])
                        .map_or(event.item_number, |index| {
                            leader.translator().item_number(index)
                        })
                }
                Notification::ItemSelected { item_number } => item_number,
                _ => continue,
            };
            for follower in &mut self.followers {
                if item_number > follower.table().item_count()
                    || follower.position().item_number == item_number
                {
                    continue;
                }
                let t = follower.go_to_slide(item_number)?;
                #[cfg(feature = "tracing")]
                tracing::trace!(target: "carousel", item_number, ?t, "SyncGroup::forward");
                if t.is_started() {
                    started += 1;
                }
            }
        }
        Ok(started)
    }
}

/// Last relocation before the next transition begins.
fn settled_index(rest: &[Notification]) -> Option<usize> {
    rest.iter()
        .take_while(|n| {
            !matches!(
                n,
                Notification::BeforeSlide(_)
                    | Notification::AfterSlide(_)
                    | Notification::SetIndex { animate: true, .. }
                    | Notification::Reset
            )
        })
        .filter_map(|n| match *n {
            Notification::SetIndex {
                index,
                animate: false,
            } => Some(index),
            _ => None,
        })
        .last()
}
