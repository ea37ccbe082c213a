//! Slideshow navigation state machine.
//!
//! Two mutually exclusive modes, fixed once at construction from the
//! deck shape:
//! - **Linear**: a plain page walk for ordinary decks. Right/OK move
//!   forward, Left moves back, Back skips out, and running past the
//!   last page completes the screen. Holding OK on the first page arms
//!   the short poweroff guard.
//! - **Tutorial**: decks with exactly [`TUTORIAL_FRAME_COUNT`] frames
//!   are the guided intro. The deck cursor tracks an explicit
//!   [`TutorialStep`]; frames 2..=4 play automatically on the
//!   auto-advance timer, frame 5 is a branch point, frame 6 the finale.

use crate::config::TUTORIAL_FRAME_COUNT;
use crate::screen::{Guard, Key, KeyAction, KeyEvent, ScreenUpdate, Signal, TimerCmd};
use crate::slides::Deck;

// Tutorial frame layout: 0 intro, 1 await-up, 2..=4 scripted playback,
// 5 branch, 6 finale.
const PLAYBACK_FIRST_FRAME: usize = 2;
const BRANCH_FRAME: usize = 5;

/// Interaction mode, decided once from the deck shape at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Linear,
    Tutorial(TutorialStep),
}

/// Steps of the seven-frame tutorial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TutorialStep {
    /// Frame 0 - waiting for Right.
    Intro,
    /// Frame 1 - waiting for Up.
    AwaitingUp,
    /// Frames 2..=4 - auto-advancing playback, input ignored.
    Playing,
    /// Frame 5 - user picks: replay (Left) or continue (Right).
    Branch,
    /// Frame 6 - OK finishes, Left starts over.
    Done,
}

/// The onboarding slideshow screen.
///
/// Owns the deck for the whole activation; its methods are the only
/// place the deck cursor moves.
pub struct SlideshowScreen<'a> {
    deck: Deck<'a>,
    mode: Mode,
    /// An OK press on the first linear page armed the short guard, so
    /// only that press's release may disarm it.
    ok_held: bool,
}

impl<'a> SlideshowScreen<'a> {
    pub fn new(deck: Deck<'a>) -> Self {
        let mode = if deck.frame_count() == TUTORIAL_FRAME_COUNT {
            Mode::Tutorial(TutorialStep::Intro)
        } else {
            Mode::Linear
        };
        Self {
            deck,
            mode,
            ok_held: false,
        }
    }

    pub fn deck(&self) -> &Deck<'a> {
        &self.deck
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Arm the abandonment guard. Call once when the screen becomes
    /// active; one-page decks skip it (nothing to get stuck in).
    pub fn on_enter(&self) -> ScreenUpdate {
        let mut update = ScreenUpdate::default();
        if !self.deck.is_one_page() {
            update.timer = Some(TimerCmd::ArmGuard(Guard::Long));
        }
        update
    }

    /// Feed one key event through the active mode.
    pub fn handle_key(&mut self, event: KeyEvent) -> ScreenUpdate {
        match self.mode {
            Mode::Linear => self.linear_key(event),
            Mode::Tutorial(step) => self.tutorial_key(step, event),
        }
    }

    /// The periodic auto-advance timer fired.
    ///
    /// Only meaningful during tutorial playback; anywhere else the
    /// answer is to stop the timer. Redraws on every fire.
    pub fn auto_tick(&mut self) -> ScreenUpdate {
        let mut update = ScreenUpdate {
            redraw: true,
            ..ScreenUpdate::default()
        };
        match self.mode {
            Mode::Tutorial(TutorialStep::Playing) => {
                self.deck.advance();
                if self.deck.current_frame() == BRANCH_FRAME {
                    self.mode = Mode::Tutorial(TutorialStep::Branch);
                }
            }
            _ => update.timer = Some(TimerCmd::StopAuto),
        }
        update
    }

    /// The poweroff guard fired (either variant).
    pub fn guard_fired(&self) -> ScreenUpdate {
        ScreenUpdate {
            signal: Some(Signal::Poweroff),
            ..ScreenUpdate::default()
        }
    }

    fn linear_key(&mut self, event: KeyEvent) -> ScreenUpdate {
        let mut update = ScreenUpdate::default();
        match event.action {
            KeyAction::Short => {
                // Every short press repaints, whatever the key did.
                update.redraw = true;
                match event.key {
                    Key::Left => self.deck.go_back(),
                    Key::Right | Key::Ok => {
                        if !self.deck.advance() {
                            update.signal = Some(Signal::Completed);
                        }
                    }
                    Key::Back => update.signal = Some(Signal::Completed),
                    _ => {}
                }
            }
            KeyAction::Press if event.key == Key::Ok && self.deck.current_frame() == 0 => {
                self.ok_held = true;
                update.timer = Some(TimerCmd::ArmGuard(Guard::Short));
            }
            KeyAction::Release if event.key == Key::Ok && self.ok_held => {
                self.ok_held = false;
                update.timer = Some(TimerCmd::DisarmGuard);
            }
            _ => {}
        }
        update
    }

    fn tutorial_key(&mut self, step: TutorialStep, event: KeyEvent) -> ScreenUpdate {
        let mut update = ScreenUpdate::default();
        if event.action != KeyAction::Short {
            return update;
        }
        update.redraw = true;

        match (step, event.key) {
            (TutorialStep::Intro, Key::Right) => {
                self.deck.advance();
                self.mode = Mode::Tutorial(TutorialStep::AwaitingUp);
            }
            (TutorialStep::AwaitingUp, Key::Up) => {
                self.deck.advance();
                self.mode = Mode::Tutorial(TutorialStep::Playing);
                update.timer = Some(TimerCmd::StartAuto);
            }
            (TutorialStep::Branch, Key::Right) => {
                self.deck.advance();
                self.mode = Mode::Tutorial(TutorialStep::Done);
                update.timer = Some(TimerCmd::StopAuto);
            }
            (TutorialStep::Branch, Key::Left) => {
                // Replay the scripted segment from the top.
                self.deck.set_current_frame(PLAYBACK_FIRST_FRAME);
                self.mode = Mode::Tutorial(TutorialStep::Playing);
                update.timer = Some(TimerCmd::StartAuto);
            }
            (TutorialStep::Branch, _) => {
                update.timer = Some(TimerCmd::StopAuto);
            }
            (TutorialStep::Done, Key::Ok) => update.signal = Some(Signal::Completed),
            (TutorialStep::Done, Key::Left) => {
                self.deck.set_current_frame(0);
                self.mode = Mode::Tutorial(TutorialStep::Intro);
            }
            _ => {}
        }
        update
    }
}
