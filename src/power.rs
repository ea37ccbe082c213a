//! Poweroff path - System OFF entry.
//!
//! nRF52840 System OFF is the deepest sleep mode (~0.3 µA); waking
//! requires a reset via GPIO or a power cycle, which is exactly what
//! the poweroff terminal signal asks for.

use defmt::info;
use embassy_nrf::pac;

/// Power the device down. Does not return.
pub fn power_off() -> ! {
    info!("Power: entering System OFF");

    pac::POWER.systemoff().write(|w| w.set_systemoff(true));

    // System OFF takes effect on the next event wait; spin in case the
    // mode is emulated under a debugger.
    loop {
        cortex_m::asm::wfe();
    }
}
