//! RP2040 PIO implementation of the pixel transmitter.
//!
//! The state machine generates the waveform, so bit timing holds to
//! single-cycle resolution without masking interrupts; the processor's only
//! job is to keep the FIFO fed. The program spends [`T1`] cycles high for
//! every bit, a further [`T2`] high only for a '1', and [`T3`] low at the
//! tail, with the clock divider chosen so the whole bit lands on the
//! 800 kHz period in [`waveform`](crate::waveform).

use embassy_rp::bind_interrupts;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, InterruptHandler, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_time::{Duration, block_for};
use fixed::types::U24F8;

use crate::driver::PixelTransmitter;
use crate::ring::PixelRing;
use crate::waveform::LATCH_US;

/// PIO cycles high at the head of every bit.
const T1: u8 = 2;
/// PIO cycles where a '1' stays high and a '0' has already dropped.
const T2: u8 = 5;
/// PIO cycles low at the tail of every bit.
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

bind_interrupts!(pub struct Pio0Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// WS2812 ring driver on one PIO state machine.
pub struct RingDriver<'d, P: Instance, const S: usize> {
    sm: StateMachine<'d, P, S>,
}

impl<'d, P: Instance, const S: usize> RingDriver<'d, P, S> {
    /// Loads the WS2812 program and configures the state machine to drive
    /// the given pin.
    pub fn new(
        common: &mut Common<'d, P>,
        mut sm: StateMachine<'d, P, S>,
        pin: embassy_rp::Peri<'d, impl PioPin>,
    ) -> Self {
        let side_set = SideSet::new(false, 1, false);
        let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

        let mut wrap_target = assembler.label();
        let mut wrap_source = assembler.label();
        let mut do_zero = assembler.label();
        assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
        assembler.bind(&mut wrap_target);
        assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
        assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
        assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
        assembler.bind(&mut do_zero);
        assembler.nop_with_delay_and_side_set(T2 - 1, 0);
        assembler.bind(&mut wrap_source);
        let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
        let program = common.load_program(&program);

        let mut cfg = Config::default();
        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        // 800 kHz bit rate, CYCLES_PER_BIT PIO cycles per bit.
        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let bit_freq = U24F8::from_num(800) * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);
        Self { sm }
    }
}

impl<'d, P: Instance, const S: usize, const N: usize> PixelTransmitter<N>
    for RingDriver<'d, P, S>
{
    /// Busy-pushes the frame into the FIFO, drains it, then holds the latch
    /// gap so the ring latches before anything else touches the line.
    fn transmit(&mut self, ring: &PixelRing<N>) {
        let tx = self.sm.tx();
        for word in ring.wire_words() {
            while !tx.try_push(word) {}
        }
        while !tx.empty() {}
        block_for(Duration::from_micros(u64::from(LATCH_US)));
    }
}
