//! Unified error type for bootshow.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! `defmt::Format` is derived behind the `defmt` feature so the same
//! types build on the host for tests.

use crate::slides::DeckError;

/// Top-level error type used across the firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The provisioned deck image failed validation.
    Deck(DeckError),

    /// No deck image is present in the reserved flash region.
    DeckMissing,

    /// Flash read failed while fetching the deck image.
    Storage,
}

// Convenience conversions

impl From<DeckError> for Error {
    fn from(e: DeckError) -> Self {
        Error::Deck(e)
    }
}
