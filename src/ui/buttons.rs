//! GPIO key input with async debouncing.
//!
//! Six physical keys (active-low with internal pull-up), each watched
//! by its own async task that debounces the edges and classifies the
//! actuation:
//!   - falling edge → `Press`
//!   - rising edge under the long-press threshold → `Short`, then
//!     `Release`
//!   - rising edge at or past the threshold → `Release` only
//!
//! All events flow through one channel into the screen run loop.

use bootshow::config::{KEY_DEBOUNCE_MS, KEY_EVENT_QUEUE, KEY_LONG_PRESS_MS};
use bootshow::screen::{Key, KeyAction, KeyEvent};
use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_time::{Duration, Instant, Timer};

pub type KeySender =
    Sender<'static, CriticalSectionRawMutex, KeyEvent, KEY_EVENT_QUEUE>;
pub type KeyReceiver =
    Receiver<'static, CriticalSectionRawMutex, KeyEvent, KEY_EVENT_QUEUE>;

/// Watch a single key pin.
///
/// Waits for the pin to go low (pressed), debounces, sends `Press`,
/// then waits for release and sends `Short` (when the hold stayed
/// under the long-press threshold) followed by `Release`.
#[embassy_executor::task(pool_size = 6)]
pub async fn key_task(pin: AnyPin, key: Key, tx: KeySender) -> ! {
    let mut input = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (key press, active-low).
        input.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(KEY_DEBOUNCE_MS)).await;
        if input.is_high() {
            continue;
        }

        let pressed_at = Instant::now();
        info!("Key: {:?} down", key);
        tx.send(KeyEvent {
            key,
            action: KeyAction::Press,
        })
        .await;

        input.wait_for_rising_edge().await;
        Timer::after(Duration::from_millis(KEY_DEBOUNCE_MS)).await;

        if pressed_at.elapsed() < Duration::from_millis(KEY_LONG_PRESS_MS) {
            tx.send(KeyEvent {
                key,
                action: KeyAction::Short,
            })
            .await;
        }
        tx.send(KeyEvent {
            key,
            action: KeyAction::Release,
        })
        .await;
    }
}
