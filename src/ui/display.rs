//! SSD1306 OLED display wrapper.

use bootshow::slides::Deck;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

/// Render the current deck frame, or a blank screen when no deck is
/// loaded.
pub fn draw_frame<I2C>(display: &mut Display<I2C>, deck: Option<&Deck<'_>>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    if let Some(deck) = deck {
        deck.draw(display, 0, 0);
    }
    let _ = display.flush();
}
