//! bootshow - first-boot onboarding slideshow for nRF52840 handhelds.
//!
//! Shows the provisioned slide deck on the SSD1306 and walks it with
//! the six-key pad. Decks with exactly seven frames run the guided
//! tutorial (auto-advancing playback with a replay branch); everything
//! else is a plain page walk. Holding OK on the first page for five
//! seconds powers the device down, and an untouched screen powers down
//! after an hour.
//!
//! Pure navigation logic lives in the `bootshow` library and is tested
//! on the host; this binary adds the hardware glue and the run loop
//! that owns the two timers.

#![no_std]
#![no_main]

mod power;
mod storage;
mod ui;

use bootshow::config::{AUTO_ADVANCE_PERIOD_MS, KEY_EVENT_QUEUE};
use bootshow::screen::{Guard, Key, KeyEvent, ScreenUpdate, Signal, SlideshowScreen, TimerCmd};
use bootshow::slides::deck::DECK_IMAGE_MAX_BYTES;
use core::future::pending;
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_nrf::gpio::Pin;
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Timer};
use static_cell::StaticCell;
use ui::buttons::{key_task, KeyReceiver};
use ui::display::{self, Display};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Key events from the pad tasks to the run loop.
static KEY_EVENTS: Channel<CriticalSectionRawMutex, KeyEvent, KEY_EVENT_QUEUE> = Channel::new();

/// Assembly buffer for the deck image read from flash.
static DECK_IMAGE: StaticCell<[u8; DECK_IMAGE_MAX_BYTES]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("bootshow starting");

    // One watcher task per key (pin map in config.rs).
    spawner.must_spawn(key_task(p.P0_11.degrade(), Key::Up, KEY_EVENTS.sender()));
    spawner.must_spawn(key_task(p.P0_12.degrade(), Key::Down, KEY_EVENTS.sender()));
    spawner.must_spawn(key_task(p.P0_13.degrade(), Key::Left, KEY_EVENTS.sender()));
    spawner.must_spawn(key_task(p.P0_14.degrade(), Key::Right, KEY_EVENTS.sender()));
    spawner.must_spawn(key_task(p.P0_15.degrade(), Key::Ok, KEY_EVENTS.sender()));
    spawner.must_spawn(key_task(p.P0_16.degrade(), Key::Back, KEY_EVENTS.sender()));

    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = display::init(i2c);

    let mut flash = embassy_embedded_hal::adapter::BlockingAsync::new(Nvmc::new(p.NVMC));
    let image = DECK_IMAGE.init([0u8; DECK_IMAGE_MAX_BYTES]);

    let signal = match storage::load_deck(&mut flash, image).await {
        Ok(deck) => {
            let mut screen = SlideshowScreen::new(deck);
            run_screen(&mut screen, &mut display, KEY_EVENTS.receiver()).await
        }
        Err(e) => {
            // Nothing to show - treat like a finished slideshow.
            warn!("Deck load failed: {:?}", e);
            Signal::Completed
        }
    };

    match signal {
        Signal::Completed => {
            info!("Slideshow completed - handing over");
            display::draw_frame(&mut display, None);
        }
        Signal::Poweroff => power::power_off(),
    }

    // Nothing further to run in this firmware; park the executor.
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

/// Drive one slideshow activation to its terminal signal.
///
/// Owns the guard and auto-advance deadlines for the whole activation;
/// returning drops them along with the deck, so exit always leaves
/// both timers stopped and the resource freed.
async fn run_screen<I2C>(
    screen: &mut SlideshowScreen<'_>,
    display: &mut Display<I2C>,
    keys: KeyReceiver,
) -> Signal
where
    I2C: embedded_hal::i2c::I2c,
{
    let mut guard: Option<(Guard, Instant)> = None;
    let mut auto_deadline: Option<Instant> = None;

    apply_timer_cmd(screen.on_enter().timer, &mut guard, &mut auto_deadline);
    display::draw_frame(display, Some(screen.deck()));

    loop {
        let update: ScreenUpdate = match select3(
            keys.receive(),
            wait_until(guard.map(|(_, at)| at)),
            wait_until(auto_deadline),
        )
        .await
        {
            Either3::First(event) => screen.handle_key(event),
            Either3::Second(()) => {
                if let Some((kind, _)) = guard.take() {
                    info!("Poweroff guard fired: {:?}", kind);
                }
                screen.guard_fired()
            }
            Either3::Third(()) => {
                // Periodic: re-arm first, the tick may cancel it.
                auto_deadline = Some(Instant::now() + Duration::from_millis(AUTO_ADVANCE_PERIOD_MS));
                screen.auto_tick()
            }
        };

        apply_timer_cmd(update.timer, &mut guard, &mut auto_deadline);

        if update.redraw {
            display::draw_frame(display, Some(screen.deck()));
        }

        if let Some(signal) = update.signal {
            info!("Slideshow signal: {:?}", signal);
            return signal;
        }
    }
}

/// Apply a timer command to the run loop's deadlines.
fn apply_timer_cmd(
    cmd: Option<TimerCmd>,
    guard: &mut Option<(Guard, Instant)>,
    auto_deadline: &mut Option<Instant>,
) {
    match cmd {
        Some(TimerCmd::ArmGuard(kind)) => {
            *guard = Some((
                kind,
                Instant::now() + Duration::from_millis(kind.duration_ms()),
            ));
        }
        Some(TimerCmd::DisarmGuard) => *guard = None,
        Some(TimerCmd::StartAuto) => {
            *auto_deadline = Some(Instant::now() + Duration::from_millis(AUTO_ADVANCE_PERIOD_MS));
        }
        Some(TimerCmd::StopAuto) => *auto_deadline = None,
        None => {}
    }
}

/// Resolve at `deadline`, or never when there is none.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => Timer::at(at).await,
        None => pending().await,
    }
}
