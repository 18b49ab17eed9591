use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use ensemble_toasts_util::Notification;
use tracing::trace;

use crate::constants::*;

/// Identifies one appearance of a toast on screen
///
/// Ids are handed out in display order and never reused within a page load,
/// so a timer or close event for a toast that is already gone can be
/// recognised and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn get(self) -> u64 {
        self.0
    }

    #[cfg(test)]
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the single on-screen slot is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Slot free, nothing pending
    Idle,
    /// Slot occupied by the given toast
    Displaying(ToastId),
    /// Slot free, waiting before the next toast may appear
    Cooldown,
}

/// Events that drive the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Enqueue(Notification),
    Timeout(ToastId),
    UserDismiss(ToastId),
    CooldownElapsed,
}

/// Work the host must carry out after a transition, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put the toast on screen
    Show { id: ToastId, notification: Notification },
    /// Deliver `Input::Timeout(id)` after `after`
    ArmTimeout { id: ToastId, after: Duration },
    /// The visible-duration timer of `id` must not fire any more
    CancelTimeout(ToastId),
    /// Take the toast off screen
    Remove(ToastId),
    /// Deliver `Input::CooldownElapsed` after `after`
    ArmCooldown { after: Duration },
}

/// Serialized toast queue with one exclusive display slot
///
/// The queue only decides; timers and screen updates are returned as
/// [`Effect`]s so the transition function stays free of I/O.
pub struct ToastQueue {
    pending: VecDeque<Notification>,
    phase: Phase,
    next_id: u64,
    visible_duration: Duration,
    cooldown: Duration,
}

impl ToastQueue {
    pub fn new(visible_duration: Duration, cooldown: Duration) -> Self {
        Self {
            pending: VecDeque::with_capacity(INITIAL_PENDING_CAPACITY),
            phase: Phase::Idle,
            next_id: 0,
            visible_duration,
            cooldown,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Toast currently occupying the slot
    pub fn displayed(&self) -> Option<ToastId> {
        match self.phase {
            Phase::Displaying(id) => Some(id),
            Phase::Idle | Phase::Cooldown => None,
        }
    }

    pub fn is_displaying(&self) -> bool {
        self.displayed().is_some()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Apply one input and return the effects it causes.
    pub fn update(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::Enqueue(notification) => {
                self.pending.push_back(notification);
                self.advance()
            }
            Input::Timeout(id) => self.dismiss(id, false),
            Input::UserDismiss(id) => self.dismiss(id, true),
            Input::CooldownElapsed => {
                if self.phase != Phase::Cooldown {
                    trace!("stray cooldown in {:?}", self.phase);
                    return Vec::new();
                }
                self.phase = Phase::Idle;
                self.advance()
            }
        }
    }

    /// Show the head of the queue if the slot is free.
    fn advance(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Idle {
            return Vec::new();
        }
        let Some(notification) = self.pending.pop_front() else {
            return Vec::new();
        };

        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.phase = Phase::Displaying(id);
        trace!("displaying toast {id}, {} pending", self.pending.len());

        vec![
            Effect::Show { id, notification },
            Effect::ArmTimeout {
                id,
                after: self.visible_duration,
            },
        ]
    }

    /// Free the slot held by `id`.
    ///
    /// Removal and the slot release happen in the same transition, before
    /// the cooldown that leads to the next `advance`.
    fn dismiss(&mut self, id: ToastId, by_user: bool) -> Vec<Effect> {
        if self.phase != Phase::Displaying(id) {
            trace!("ignoring close of toast {id} in {:?}", self.phase);
            return Vec::new();
        }

        self.phase = Phase::Cooldown;
        trace!("toast {id} closed (by user: {by_user})");

        let mut effects = Vec::with_capacity(3);
        if by_user {
            effects.push(Effect::CancelTimeout(id));
        }
        effects.push(Effect::Remove(id));
        effects.push(Effect::ArmCooldown {
            after: self.cooldown,
        });
        effects
    }
}
