//! User interface glue - SSD1306 display + six-key pad.
//!
//! Navigation decisions live in `bootshow::screen`; this module only
//! turns GPIO edges into key events and deck frames into pixels.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Keys**: 6 tactile switches with debouncing
//!   (UP, DOWN, LEFT, RIGHT, OK, BACK)

pub mod buttons;
pub mod display;
