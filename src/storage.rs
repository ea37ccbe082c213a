//! Deck image storage - reads the provisioned slide deck from flash.
//!
//! The factory provisioning tool writes the deck into a reserved
//! internal-flash region managed by `sequential-storage`:
//!   - key `KEY_DECK_HEADER` holds the 5-byte deck header,
//!   - key `KEY_DECK_FRAME_BASE + i` holds the packed bytes of frame
//!     `i`.
//! Records are length-checked against the header geometry before the
//! assembled image is handed to `Deck::parse`.

use bootshow::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use bootshow::error::Error;
use bootshow::slides::deck::{Deck, DeckError, DECK_HEADER_LEN};
use defmt::{error, info, warn};

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of the deck image region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of the deck image region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Map key of the deck header record.
const KEY_DECK_HEADER: u8 = 0x01;

/// Map key of frame 0; frame `i` lives at `KEY_DECK_FRAME_BASE + i`.
const KEY_DECK_FRAME_BASE: u8 = 0x10;

/// Largest single record we fetch (one packed 128x64 frame).
const MAX_RECORD_SIZE: usize = 1024 + 16;

/// Read the provisioned deck image into `out` and parse it.
///
/// Any storage or validation failure is reported as a single load
/// failure; the caller treats that as "nothing to show".
pub async fn load_deck<'a>(
    flash: &mut impl embedded_storage_async::nor_flash::NorFlash,
    out: &'a mut [u8],
) -> Result<Deck<'a>, Error> {
    let flash_range = STORAGE_START..STORAGE_END;
    let mut buf = [0u8; MAX_RECORD_SIZE];
    let mut len = 0usize;

    // Header first - it tells us how many frame records to expect.
    match sequential_storage::map::fetch_item::<u8, &[u8], _>(
        flash,
        flash_range.clone(),
        &mut sequential_storage::cache::NoCache::new(),
        &mut buf,
        &KEY_DECK_HEADER,
    )
    .await
    {
        Ok(Some(data)) => append(out, &mut len, data)?,
        Ok(None) => {
            info!("No deck image in flash");
            return Err(Error::DeckMissing);
        }
        Err(e) => {
            error!("Flash read error: {:?}", defmt::Debug2Format(&e));
            return Err(Error::Storage);
        }
    }
    if len != DECK_HEADER_LEN {
        warn!("Deck header record has wrong size ({})", len);
        return Err(DeckError::TooShort.into());
    }

    let frame_count = out[4] as usize;
    let frame_len = Deck::frame_len(out[2], out[3]);

    for i in 0..frame_count {
        let key = KEY_DECK_FRAME_BASE + i as u8;
        match sequential_storage::map::fetch_item::<u8, &[u8], _>(
            flash,
            flash_range.clone(),
            &mut sequential_storage::cache::NoCache::new(),
            &mut buf,
            &key,
        )
        .await
        {
            Ok(Some(data)) => {
                if data.len() != frame_len {
                    warn!("Frame {} record has wrong size ({})", i, data.len());
                    return Err(DeckError::LengthMismatch.into());
                }
                append(out, &mut len, data)?;
            }
            Ok(None) => {
                warn!("Frame {} missing from flash", i);
                return Err(Error::DeckMissing);
            }
            Err(e) => {
                error!("Flash read error: {:?}", defmt::Debug2Format(&e));
                return Err(Error::Storage);
            }
        }
    }

    let image: &'a [u8] = &out[..len];
    let deck = Deck::parse(image)?;
    info!(
        "Loaded deck: {} frames of {}x{}",
        deck.frame_count(),
        image[2],
        image[3]
    );
    Ok(deck)
}

/// Append a record to the assembled image, guarding the buffer bound.
fn append(out: &mut [u8], len: &mut usize, data: &[u8]) -> Result<(), Error> {
    let end = *len + data.len();
    if end > out.len() {
        warn!("Deck image larger than the assembly buffer");
        return Err(DeckError::LengthMismatch.into());
    }
    out[*len..end].copy_from_slice(data);
    *len = end;
    Ok(())
}
