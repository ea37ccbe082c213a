//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and deck limits
//! live here so they can be tuned in one place.

// Slideshow timing

/// Poweroff guard armed while OK is held on the first page (ms).
///
/// Lets a device with a broken deck be powered down from the only
/// screen it can still show.
pub const GUARD_SHORT_MS: u64 = 5_000;

/// Poweroff guard armed on entry so an abandoned screen eventually
/// powers the device down instead of draining the battery (ms).
pub const GUARD_LONG_MS: u64 = 60 * 60 * 1_000;

/// Auto-advance period for the scripted tutorial segment (ms).
pub const AUTO_ADVANCE_PERIOD_MS: u64 = 2_000;

/// Decks with exactly this many frames run the interactive tutorial
/// instead of the plain page walk.
pub const TUTORIAL_FRAME_COUNT: usize = 7;

// Deck limits

/// Maximum frame width in pixels (display width).
pub const DECK_MAX_WIDTH: usize = 128;

/// Maximum frame height in pixels (display height).
pub const DECK_MAX_HEIGHT: usize = 64;

/// Maximum number of frames in a provisioned deck.
pub const DECK_MAX_FRAMES: usize = 16;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Key UP       → P0.11
//   Key DOWN     → P0.12
//   Key LEFT     → P0.13
//   Key RIGHT    → P0.14
//   Key OK       → P0.15
//   Key BACK     → P0.16
//   I²C SDA      → P0.26
//   I²C SCL      → P0.27

/// Key debounce time (ms).
pub const KEY_DEBOUNCE_MS: u64 = 50;

/// Presses released before this threshold count as short presses (ms).
pub const KEY_LONG_PRESS_MS: u64 = 350;

/// Depth of the key event queue between the pad tasks and the screen.
pub const KEY_EVENT_QUEUE: usize = 8;

// Deck storage

/// Flash page index where the deck image region starts (4 KB per page
/// on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the deck image region.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 8;
