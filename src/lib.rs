//! Host-testable library interface for bootshow.
//!
//! The slideshow state machine, the deck resource, and the shared
//! configuration/error types are pure `no_std` code with no HAL
//! dependencies, so they build and test on the host:
//!
//! Usage: `cargo test --lib`
//!
//! The embedded binary (`main.rs`, feature `embedded`) adds the
//! nRF52840 glue: GPIO key tasks, SSD1306 rendering, deck storage, and
//! the poweroff path.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod screen;
pub mod slides;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - deck resource and cross-module checks
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::slides::deck::{DECK_HEADER_LEN, DECK_IMAGE_MAX_BYTES, DECK_MAGIC};
    use super::slides::{Deck, DeckError};
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;

    /// Build a deck image with the given geometry and zeroed frames.
    fn image(width: u8, height: u8, frames: u8) -> Vec<u8> {
        let mut bytes = DECK_MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[width, height, frames]);
        bytes.resize(
            DECK_HEADER_LEN + frames as usize * Deck::frame_len(width, height),
            0,
        );
        bytes
    }

    // ════════════════════════════════════════════════════════════════════════
    // Deck Parsing
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn deck_parse_valid() {
        let bytes = image(128, 64, 3);
        let deck = Deck::parse(&bytes).unwrap();
        assert_eq!(deck.frame_count(), 3);
        assert_eq!(deck.current_frame(), 0);
        assert!(!deck.is_one_page());
    }

    #[test]
    fn deck_parse_too_short_fails() {
        assert!(matches!(Deck::parse(&[]), Err(DeckError::TooShort)));
        assert!(matches!(
            Deck::parse(&[0xEC, 0x5D, 8, 8]),
            Err(DeckError::TooShort)
        ));
    }

    #[test]
    fn deck_parse_bad_magic_fails() {
        let mut bytes = image(8, 8, 1);
        bytes[0] = 0xFF;
        assert!(matches!(Deck::parse(&bytes), Err(DeckError::BadMagic)));
    }

    #[test]
    fn deck_parse_bad_dimensions_fail() {
        for (w, h) in [(0u8, 8u8), (8, 0), (129, 8), (8, 65)] {
            let mut bytes = image(8, 8, 1);
            bytes[2] = w;
            bytes[3] = h;
            // Rebuild the payload so only the header is wrong.
            bytes.truncate(DECK_HEADER_LEN);
            bytes.resize(DECK_HEADER_LEN + 8, 0);
            assert!(
                matches!(Deck::parse(&bytes), Err(DeckError::BadDimensions)),
                "accepted {}x{}",
                w,
                h
            );
        }
    }

    #[test]
    fn deck_parse_bad_frame_count_fails() {
        let mut bytes = image(8, 8, 1);
        bytes[4] = 0;
        bytes.truncate(DECK_HEADER_LEN);
        assert!(matches!(Deck::parse(&bytes), Err(DeckError::BadFrameCount)));

        let mut bytes = image(8, 8, 1);
        bytes[4] = 17;
        assert!(matches!(Deck::parse(&bytes), Err(DeckError::BadFrameCount)));
    }

    #[test]
    fn deck_parse_length_mismatch_fails() {
        let mut bytes = image(8, 8, 2);
        bytes.pop();
        assert!(matches!(Deck::parse(&bytes), Err(DeckError::LengthMismatch)));

        let mut bytes = image(8, 8, 2);
        bytes.push(0);
        assert!(matches!(Deck::parse(&bytes), Err(DeckError::LengthMismatch)));
    }

    #[test]
    fn deck_frame_len_rounds_rows_up_to_bytes() {
        assert_eq!(Deck::frame_len(8, 2), 2);
        assert_eq!(Deck::frame_len(10, 2), 4);
        assert_eq!(Deck::frame_len(128, 64), 1024);
    }

    #[test]
    fn deck_image_max_bytes_covers_a_full_deck() {
        let bytes = image(128, 64, 16);
        assert_eq!(bytes.len(), DECK_IMAGE_MAX_BYTES);
        assert!(Deck::parse(&bytes).is_ok());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Deck Cursor
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn deck_advance_stops_at_last_frame() {
        let bytes = image(8, 8, 2);
        let mut deck = Deck::parse(&bytes).unwrap();

        assert!(deck.advance());
        assert_eq!(deck.current_frame(), 1);
        assert!(!deck.advance());
        assert_eq!(deck.current_frame(), 1);
    }

    #[test]
    fn deck_go_back_clamps_at_first_frame() {
        let bytes = image(8, 8, 2);
        let mut deck = Deck::parse(&bytes).unwrap();

        deck.go_back();
        assert_eq!(deck.current_frame(), 0);

        deck.advance();
        deck.go_back();
        assert_eq!(deck.current_frame(), 0);
    }

    #[test]
    fn deck_set_current_frame_ignores_out_of_range() {
        let bytes = image(8, 8, 3);
        let mut deck = Deck::parse(&bytes).unwrap();

        deck.set_current_frame(2);
        assert_eq!(deck.current_frame(), 2);

        deck.set_current_frame(3);
        assert_eq!(deck.current_frame(), 2);
    }

    #[test]
    fn deck_one_page_detection() {
        let bytes = image(8, 8, 1);
        assert!(Deck::parse(&bytes).unwrap().is_one_page());

        let bytes = image(8, 8, 2);
        assert!(!Deck::parse(&bytes).unwrap().is_one_page());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Deck Drawing
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn deck_draws_the_current_frame() {
        // Two 8x2 frames with distinct patterns.
        let mut bytes = DECK_MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[8, 2, 2]);
        bytes.extend_from_slice(&[0b1000_0001, 0b1111_1111]); // frame 0
        bytes.extend_from_slice(&[0b0001_1000, 0b0000_0000]); // frame 1
        let mut deck = Deck::parse(&bytes).unwrap();

        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        deck.draw(&mut display, 0, 0);
        display.assert_pattern(&[
            "#......#", //
            "########", //
        ]);

        deck.advance();
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        deck.draw(&mut display, 0, 0);
        display.assert_pattern(&[
            "...##...", //
            "........", //
        ]);
    }

    #[test]
    fn deck_draw_honors_the_offset() {
        let mut bytes = DECK_MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[8, 1, 1]);
        bytes.extend_from_slice(&[0b1111_1111]);
        let deck = Deck::parse(&bytes).unwrap();

        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        deck.draw(&mut display, 2, 1);
        display.assert_pattern(&[
            "          ", //
            "  ########", //
        ]);
    }
}
