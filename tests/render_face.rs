//! Host tests for the face renderer: hand placement, eased motion, tick
//! marks, pendulum periodicity.

use ring_clock::clock_state::{ClockState, RingTime};
use ring_clock::color::Rgb;
use ring_clock::render::{PENDULUM_PERIOD_MS, RING_LEDS, pendulum_position, render};
use ring_clock::ring::PixelRing;

fn face(hour: u8, minute: u8, second: u8, level: u8) -> ClockState {
    let mut state = ClockState::new();
    state.time = RingTime::new(hour, minute, second);
    state.set_output_level(level);
    state
}

fn rendered(state: &ClockState, elapsed_ms: u16) -> PixelRing<RING_LEDS> {
    let mut ring = PixelRing::new(0);
    render(state, elapsed_ms, &mut ring);
    ring
}

#[test]
fn second_hand_starts_on_the_current_pixel() {
    let ring = rendered(&face(0, 0, 31, 128), 0);
    assert_eq!(ring.get(31).b, 128);
    assert_eq!(ring.get(32).b, 0);
}

#[test]
fn second_hand_finishes_on_the_next_pixel() {
    let ring = rendered(&face(0, 0, 31, 128), 1000);
    assert_eq!(ring.get(31).b, 0);
    assert_eq!(ring.get(32).b, 128);
}

#[test]
fn second_hand_eases_out_of_the_current_pixel() {
    // A quarter of the way in, the quadratic ease has only moved 16/128.
    let ring = rendered(&face(0, 0, 31, 128), 250);
    assert_eq!(ring.get(31).b, 112);
    assert_eq!(ring.get(32).b, 16);
}

#[test]
fn second_hand_splits_evenly_at_midpoint() {
    let ring = rendered(&face(0, 0, 31, 128), 500);
    assert_eq!(ring.get(31).b, 64);
    assert_eq!(ring.get(32).b, 64);
}

#[test]
fn second_hand_budget_is_conserved() {
    // Seconds chosen so neither pixel of the pair is a tick mark.
    for &second in &[17, 31, 58] {
        for elapsed in (0..=1000).step_by(50) {
            let ring = rendered(&face(0, 30, second, 100), elapsed);
            let index = usize::from(second);
            let total =
                u16::from(ring.get(index).b) + u16::from(ring.get((index + 1) % RING_LEDS).b);
            assert_eq!(total, 100, "second {second} elapsed {elapsed}");
        }
    }
}

#[test]
fn minute_hand_creeps_linearly_through_the_minute() {
    // 30.0 seconds into the minute: exactly half the budget has moved on.
    let ring = rendered(&face(0, 31, 30, 128), 0);
    assert_eq!(ring.get(31).g, 64);
    assert_eq!(ring.get(32).g, 64);
}

#[test]
fn minute_hand_uses_interpolated_milliseconds() {
    let early = rendered(&face(0, 31, 30, 128), 0);
    let late = rendered(&face(0, 31, 30, 128), 900);
    assert!(late.get(32).g > early.get(32).g);
}

#[test]
fn hour_hand_advances_five_pixels_per_hour() {
    // 14:33:20 -> position 2 * 5 + 6 = 16, 200 of 300 seconds into the span.
    let ring = rendered(&face(14, 33, 20, 128), 0);
    assert_eq!(ring.get(16).r, 43);
    assert_eq!(ring.get(17).r, 85);
    assert_eq!(ring.get(18).r, 0);
}

#[test]
fn hour_hand_wraps_past_eleven() {
    // 23:55 -> position 11 * 5 + 11 = 59, whose neighbor is pixel 0.
    let ring = rendered(&face(23, 55, 0, 128), 0);
    assert!(ring.get(59).r > 0);
}

#[test]
fn tick_marks_sit_on_every_hour_position() {
    let ring = rendered(&face(0, 0, 31, 128), 0);
    assert_eq!(ring.get(20), Rgb::new(8, 8, 8));
    assert_eq!(ring.get(21), Rgb::new(0, 0, 0));
}

#[test]
fn tick_marks_floor_to_visible_at_low_levels() {
    let ring = rendered(&face(0, 0, 0, 1), 0);
    assert_eq!(ring.get(20), Rgb::new(1, 1, 1));
}

#[test]
fn zero_level_renders_black() {
    let ring = rendered(&face(14, 33, 20, 0), 777);
    assert!(ring.wire_bytes().iter().all(|&byte| byte == 0));
}

#[test]
fn pendulum_position_is_periodic() {
    for &phase in &[0, 123, 1999, 2000, 3777] {
        assert_eq!(
            pendulum_position(phase),
            pendulum_position(phase + PENDULUM_PERIOD_MS),
            "phase {phase}"
        );
    }
}

#[test]
fn pendulum_swings_out_and_back() {
    assert_eq!(pendulum_position(0), 0);
    assert_eq!(pendulum_position(PENDULUM_PERIOD_MS / 2), 30 * 128);
    assert_eq!(pendulum_position(PENDULUM_PERIOD_MS), 0);
}

#[test]
fn pendulum_rendering_repeats_with_the_period() {
    let mut one = face(0, 0, 1, 128);
    one.pendulum = true;
    let mut two = face(0, 0, 5, 128);
    two.pendulum = true;

    // 1.2 s and 5.2 s into the minute are one full period apart, so the
    // bottom arc must look identical.
    let first = rendered(&one, 200);
    let second = rendered(&two, 200);
    for index in 15..=46 {
        assert_eq!(first.get(index), second.get(index), "pixel {index}");
    }
}

#[test]
fn render_clears_the_previous_frame() {
    let mut ring = PixelRing::new(0);
    render(&face(14, 33, 20, 128), 500, &mut ring);
    render(&face(0, 0, 0, 0), 0, &mut ring);
    assert!(ring.wire_bytes().iter().all(|&byte| byte == 0));
}
