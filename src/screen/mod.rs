//! Onboarding slideshow screen - event vocabulary and state machine.
//!
//! The screen consumes debounced key events and timer expirations and
//! answers with a [`ScreenUpdate`]: a redraw flag, at most one timer
//! command, and at most one terminal signal. The run loop in `main.rs`
//! owns the actual timers and the display; everything in this module is
//! pure and host-testable.

pub mod controller;


pub use controller::{Mode, SlideshowScreen, TutorialStep};

use crate::config::{GUARD_LONG_MS, GUARD_SHORT_MS};

/// Physical keys on the six-key pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// How a key was actuated.
///
/// `Short` is delivered on release of a press that stayed under the
/// long-press threshold, before the matching `Release`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    Press,
    Short,
    Release,
}

/// A single debounced key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub key: Key,
    pub action: KeyAction,
}

/// Terminal outcome of a slideshow activation, delivered at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// The sequence finished or the user skipped out of it.
    Completed,
    /// The device should power off.
    Poweroff,
}

/// Which poweroff guard is armed in the single guard timer slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Guard {
    /// Held-OK guard on the first page.
    Short,
    /// Abandoned-screen guard armed on entry.
    Long,
}

impl Guard {
    /// Delay before this guard fires.
    pub const fn duration_ms(self) -> u64 {
        match self {
            Guard::Short => GUARD_SHORT_MS,
            Guard::Long => GUARD_LONG_MS,
        }
    }
}

/// Command for the run loop's timers.
///
/// Arming the guard replaces whatever guard was armed before; starting
/// the auto-advance timer resets its period. Disarm/stop are idempotent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerCmd {
    ArmGuard(Guard),
    DisarmGuard,
    StartAuto,
    StopAuto,
}

/// Result of feeding one event into the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenUpdate {
    /// The frame on screen may have changed; repaint.
    pub redraw: bool,
    /// Timer command for the run loop, if any.
    pub timer: Option<TimerCmd>,
    /// Terminal signal, if this event ended the activation.
    pub signal: Option<Signal>,
}
