use crate::Configuration;

/// A running autoplay deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayTimer {
    pub interval_ms: u64,
    pub due_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoplayState {
    /// Autoplay is off or the interval is zero.
    Inert,
    /// Armed on the next `poll`.
    Pending,
    Running(AutoplayTimer),
    /// The pointer is over the widget; `resume` re-arms.
    Paused,
    /// Torn down; only `start` re-arms.
    Stopped,
}

/// Periodic "advance" timer driven by the adapter clock.
///
/// The scheduler never sleeps or spawns: the adapter calls [`AutoplayScheduler::poll`] with
/// the current time (e.g. once per frame) and advances the carousel when it returns `true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayScheduler {
    interval_ms: u64,
    state: AutoplayState,
}

impl AutoplayScheduler {
    pub fn new(enabled: bool, interval_ms: u64) -> Self {
        let state = if enabled && interval_ms > 0 {
            AutoplayState::Pending
        } else {
            AutoplayState::Inert
        };
        Self { interval_ms, state }
    }

    pub fn from_configuration(config: &Configuration) -> Self {
        Self::new(config.autoplay(), config.autoplay_interval_ms())
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn is_inert(&self) -> bool {
        self.state == AutoplayState::Inert
    }

    pub fn is_paused(&self) -> bool {
        self.state == AutoplayState::Paused
    }

    pub fn timer(&self) -> Option<AutoplayTimer> {
        match self.state {
            AutoplayState::Running(timer) => Some(timer),
            _ => None,
        }
    }

    pub fn start(&mut self, now_ms: u64) {
        if self.is_inert() {
            return;
        }
        self.state = AutoplayState::Running(AutoplayTimer {
            interval_ms: self.interval_ms,
            due_ms: now_ms.saturating_add(self.interval_ms),
        });
    }

    pub fn stop(&mut self) {
        if self.is_inert() {
            return;
        }
        self.state = AutoplayState::Stopped;
    }

    /// Measures the next period from `now_ms`. A paused or stopped timer stays that way.
    pub fn restart(&mut self, now_ms: u64) {
        if matches!(
            self.state,
            AutoplayState::Pending | AutoplayState::Running(_)
        ) {
            self.start(now_ms);
        }
    }

    pub fn pause(&mut self) {
        if matches!(
            self.state,
            AutoplayState::Pending | AutoplayState::Running(_)
        ) {
            self.state = AutoplayState::Paused;
        }
    }

    pub fn resume(&mut self, now_ms: u64) {
        if self.is_paused() {
            self.start(now_ms);
        }
    }

    /// Returns `true` when a period elapsed; the next one is measured from `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.state {
            AutoplayState::Pending => {
                self.start(now_ms);
                false
            }
            AutoplayState::Running(timer) if now_ms >= timer.due_ms => {
                self.start(now_ms);
                true
            }
            _ => false,
        }
    }
}
