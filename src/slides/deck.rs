//! Packed slide deck image - parsing, cursor movement, drawing.
//!
//! Deck image layout:
//! ```text
//! Byte 0-1: magic 0x5DEC (little-endian)
//! Byte 2:   frame width in pixels (1..=128)
//! Byte 3:   frame height in pixels (1..=64)
//! Byte 4:   frame count (1..=16)
//! Byte 5..: frames, each ceil(width / 8) * height bytes,
//!           rows packed MSB-first
//! ```
//!
//! The image is provisioned onto internal flash by the factory tool;
//! this module never writes it.

use crate::config::{DECK_MAX_FRAMES, DECK_MAX_HEIGHT, DECK_MAX_WIDTH};
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Magic number at the start of every deck image.
pub const DECK_MAGIC: u16 = 0x5DEC;

/// Deck image header length in bytes.
pub const DECK_HEADER_LEN: usize = 5;

/// Upper bound for a full deck image (header plus packed frames).
pub const DECK_IMAGE_MAX_BYTES: usize =
    DECK_HEADER_LEN + DECK_MAX_FRAMES * (DECK_MAX_WIDTH / 8) * DECK_MAX_HEIGHT;

/// Why a deck image failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeckError {
    /// Image shorter than the fixed header.
    TooShort,
    /// Magic number mismatch.
    BadMagic,
    /// Width or height is zero or exceeds the display.
    BadDimensions,
    /// Frame count is zero or exceeds the deck limit.
    BadFrameCount,
    /// Payload length does not match the header geometry.
    LengthMismatch,
}

/// A validated slide deck. Borrows the provisioned image bytes.
///
/// The cursor starts at frame 0 and can never leave
/// `[0, frame_count)`.
pub struct Deck<'a> {
    frames: &'a [u8],
    width: u8,
    height: u8,
    frame_count: usize,
    current: usize,
}

impl<'a> Deck<'a> {
    /// Parse and validate a deck image.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DeckError> {
        if bytes.len() < DECK_HEADER_LEN {
            return Err(DeckError::TooShort);
        }

        let magic = u16::from_le_bytes([bytes[0], bytes[1]]);
        if magic != DECK_MAGIC {
            return Err(DeckError::BadMagic);
        }

        let width = bytes[2];
        let height = bytes[3];
        if width == 0
            || height == 0
            || width as usize > DECK_MAX_WIDTH
            || height as usize > DECK_MAX_HEIGHT
        {
            return Err(DeckError::BadDimensions);
        }

        let frame_count = bytes[4] as usize;
        if frame_count == 0 || frame_count > DECK_MAX_FRAMES {
            return Err(DeckError::BadFrameCount);
        }

        let expected = DECK_HEADER_LEN + frame_count * Self::frame_len(width, height);
        if bytes.len() != expected {
            return Err(DeckError::LengthMismatch);
        }

        Ok(Self {
            frames: &bytes[DECK_HEADER_LEN..],
            width,
            height,
            frame_count,
            current: 0,
        })
    }

    /// Size in bytes of one packed frame with the given dimensions.
    pub const fn frame_len(width: u8, height: u8) -> usize {
        (width as usize).div_ceil(8) * height as usize
    }

    /// Total number of frames in the deck.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Index of the frame currently shown.
    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Jump to a specific frame. Out-of-range targets are ignored.
    pub fn set_current_frame(&mut self, frame: usize) {
        if frame < self.frame_count {
            self.current = frame;
        }
    }

    /// Move forward one frame. Returns `false` when already on the
    /// last frame (the cursor does not move).
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.frame_count {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move back one frame, clamping at the first.
    pub fn go_back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// `true` for decks with a single frame.
    pub fn is_one_page(&self) -> bool {
        self.frame_count <= 1
    }

    fn frame_bytes(&self, frame: usize) -> &'a [u8] {
        let len = Self::frame_len(self.width, self.height);
        &self.frames[frame * len..(frame + 1) * len]
    }

    /// Draw the current frame with its top-left corner at `(x, y)`.
    pub fn draw<D>(&self, target: &mut D, x: i32, y: i32)
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let raw = ImageRaw::<BinaryColor>::new(self.frame_bytes(self.current), self.width as u32);
        let _ = Image::new(&raw, Point::new(x, y)).draw(target);
    }
}
