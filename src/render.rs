//! Analog rendering of the clock face onto the ring.
//!
//! Each hand is drawn across the two logical pixels framing its fractional
//! position and accumulated with saturating adds, so overlapping features
//! blend instead of clobbering each other. Hands keep the channel scheme of
//! the hardware it drives: red hour, green minute, blue second. All math is
//! integer-only; intensities ride a 0-128 fixed-point ease scale and every
//! brightness derives from the 0-128 output level.

use crate::clock_state::ClockState;
use crate::color::{Rgb, scale};
use crate::ring::PixelRing;

/// Number of pixels on the clock face: one per minute mark.
pub const RING_LEDS: usize = 60;

/// Pendulum swing period in milliseconds.
pub const PENDULUM_PERIOD_MS: u32 = 4000;
/// Width of the pendulum swing in pixels.
const PENDULUM_ARC: u32 = 30;
/// First pixel of the arc; centers the swing on the 6 o'clock pixel.
const PENDULUM_START: usize = 15;

/// Logical spacing of the tick marks: one per hour position.
const TICK_MARK_SPACING: usize = 5;
/// Tick mark channel value before output-level scaling.
const TICK_MARK_LEVEL: u8 = 8;

/// Quadratic ease-in/out over `0..=2 * half`, on a 0-128 scale.
///
/// Rises as t^2 through the first half and mirrors through the second, so
/// motion accelerates out of one pixel and decelerates into the next.
fn ease_in_out_128(t: u32, half: u32) -> u32 {
    if t < half {
        64 * t * t / (half * half)
    } else {
        let remaining = 2 * half - t;
        128 - 64 * remaining * remaining / (half * half)
    }
}

/// Splits an output-level budget across an adjacent pixel pair, `rise128`
/// (0-128) of the way from the first to the second.
#[expect(clippy::cast_possible_truncation, reason = "bounded by output level")]
fn split_budget(level: u8, rise128: u32) -> (u8, u8) {
    let next = (u32::from(level) * rise128 / 128) as u8;
    (level - next, next)
}

/// Second hand: a smooth eased sweep between the current-second pixel and
/// the next, rather than a discrete per-second jump.
fn draw_second(state: &ClockState, elapsed_ms: u16, ring: &mut PixelRing<RING_LEDS>) {
    let rise = ease_in_out_128(u32::from(elapsed_ms), 500);
    let (current, next) = split_budget(state.output_level(), rise);
    let index = usize::from(state.time.second());
    ring.add(index, Rgb::new(0, 0, current));
    ring.add((index + 1) % RING_LEDS, Rgb::new(0, 0, next));
}

/// Minute hand: linear interpolation across the minute, fed by the
/// interpolated milliseconds so it creeps rather than steps.
#[expect(clippy::cast_possible_truncation, reason = "bounded by output level")]
fn draw_minute(state: &ClockState, elapsed_ms: u16, ring: &mut PixelRing<RING_LEDS>) {
    let level = state.output_level();
    let ms_into_minute = u32::from(state.time.second()) * 1000 + u32::from(elapsed_ms);
    let next = (u32::from(level) * ms_into_minute / 60_000) as u8;
    let index = usize::from(state.time.minute());
    ring.add(index, Rgb::new(0, level - next, 0));
    ring.add((index + 1) % RING_LEDS, Rgb::new(0, next, 0));
}

/// Hour hand: five logical positions per hour, advancing linearly across
/// each five-minute span.
#[expect(clippy::cast_possible_truncation, reason = "bounded by output level")]
fn draw_hour(state: &ClockState, ring: &mut PixelRing<RING_LEDS>) {
    let level = state.output_level();
    let secs_into_span =
        u32::from(state.time.minute() % 5) * 60 + u32::from(state.time.second());
    let next = (u32::from(level) * secs_into_span / 300) as u8;
    let index = usize::from(state.time.hour() % 12) * 5 + usize::from(state.time.minute() / 5);
    ring.add(index % RING_LEDS, Rgb::new(level - next, 0, 0));
    ring.add((index + 1) % RING_LEDS, Rgb::new(next, 0, 0));
}

/// Fractional pendulum position for a phase within the period, on a
/// 0-to-`PENDULUM_ARC * 128` fixed-point scale.
///
/// The swing is the second hand's piecewise quadratic stretched over the
/// longer period: the rising and falling halves mirror around the
/// half-period, so the position is periodic with period exactly
/// [`PENDULUM_PERIOD_MS`].
#[must_use]
pub fn pendulum_position(phase_ms: u32) -> u32 {
    let phase = phase_ms % PENDULUM_PERIOD_MS;
    let half = PENDULUM_PERIOD_MS / 2;
    let t = if phase < half {
        phase
    } else {
        PENDULUM_PERIOD_MS - phase
    };
    ease_in_out_128(t, half / 2) * PENDULUM_ARC
}

/// Decorative pendulum bob swinging across the bottom arc, at a quarter of
/// the output level.
#[expect(clippy::cast_possible_truncation, reason = "bounded by output level")]
fn draw_pendulum(state: &ClockState, elapsed_ms: u16, ring: &mut PixelRing<RING_LEDS>) {
    let bob = state.output_level() / 4;
    let total_ms = u32::from(state.time.second()) * 1000 + u32::from(elapsed_ms);
    let position = pendulum_position(total_ms);
    let index = PENDULUM_START + (position / 128) as usize;
    let next = (u32::from(bob) * (position % 128) / 128) as u8;
    let current = bob - next;
    ring.add(index, Rgb::new(current, current, current));
    ring.add(index + 1, Rgb::new(next, next, next));
}

/// Dim marks at every hour position. At very low output levels the scaled
/// value is floored to 1 so the marks stay visible instead of rounding to
/// black.
fn draw_tick_marks(state: &ClockState, ring: &mut PixelRing<RING_LEDS>) {
    let level = state.output_level();
    if level == 0 {
        return;
    }
    let mut value = scale(TICK_MARK_LEVEL, level);
    if value == 0 {
        value = 1;
    }
    for index in (0..RING_LEDS).step_by(TICK_MARK_SPACING) {
        ring.add(index, Rgb::new(value, value, value));
    }
}

/// Renders one complete frame of the face for the given state and
/// interpolated intra-second position (0-1000 ms).
///
/// Clears the ring, then accumulates tick marks, the three hands, and (when
/// enabled) the pendulum.
pub fn render(state: &ClockState, elapsed_ms: u16, ring: &mut PixelRing<RING_LEDS>) {
    ring.clear();
    draw_tick_marks(state, ring);
    draw_hour(state, ring);
    draw_minute(state, elapsed_ms, ring);
    draw_second(state, elapsed_ms, ring);
    if state.pendulum {
        draw_pendulum(state, elapsed_ms, ring);
    }
}
