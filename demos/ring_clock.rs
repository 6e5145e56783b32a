//! Full clock bring-up on a Pico: RTC on I2C0 (GP4/GP5), ring data on GP2
//! via PIO0, millisecond tick task, control loop.

#![no_std]
#![no_main]

use defmt::unwrap;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pio::Pio;
use panic_probe as _;
use ring_clock::RingClock;
use ring_clock::millis::{TickCounter, tick_task};
use ring_clock::ring_driver::{Pio0Irqs, RingDriver};

static TICKS: TickCounter = TickCounter::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Pio0Irqs);
    let driver = RingDriver::new(&mut common, sm0, p.PIN_2);

    unwrap!(spawner.spawn(tick_task(&TICKS)));

    let mut clock = RingClock::new(bus, driver, &TICKS);
    clock.set_output_level(64);
    clock.set_pendulum(true);
    clock.run().await
}
