//! Host tests for the pixel ring storage and color primitives.

use ring_clock::color::{MAX_OUTPUT_LEVEL, Rgb, saturating_add, scale};
use ring_clock::ring::PixelRing;

#[test]
fn saturating_add_matches_clamped_sum() {
    for a in 0_u16..=255 {
        for b in 0_u16..=255 {
            let sum = saturating_add(Rgb::new(a as u8, 0, 0), Rgb::new(b as u8, 0, 0));
            assert_eq!(u16::from(sum.r), (a + b).min(255));
        }
    }
}

#[test]
fn saturating_add_is_per_channel() {
    let sum = saturating_add(Rgb::new(200, 1, 0), Rgb::new(100, 2, 3));
    assert_eq!(sum, Rgb::new(255, 3, 3));
}

#[test]
fn scale_is_identity_at_full_level() {
    for value in 0..=255 {
        assert_eq!(scale(value, MAX_OUTPUT_LEVEL), value);
    }
}

#[test]
fn scale_is_dark_at_zero_level() {
    for value in 0..=255 {
        assert_eq!(scale(value, 0), 0);
    }
}

#[test]
fn scale_halves_at_half_level() {
    assert_eq!(scale(128, 64), 64);
    assert_eq!(scale(8, 64), 4);
}

#[test]
fn offset_maps_logical_to_physical() {
    let mut ring = PixelRing::<16>::new(5);
    ring.set(0, Rgb::new(1, 2, 3));
    // Physical slot 5, wire order green, red, blue.
    assert_eq!(&ring.wire_bytes()[15..18], &[2, 1, 3]);
    assert_eq!(ring.get(0), Rgb::new(1, 2, 3));
}

#[test]
fn offset_wraps_around_the_ring() {
    let mut ring = PixelRing::<16>::new(5);
    ring.set(12, Rgb::new(9, 0, 0));
    // (12 + 5) % 16 == 1
    assert_eq!(&ring.wire_bytes()[3..6], &[0, 9, 0]);
}

#[test]
fn constructor_reduces_offset() {
    let ring = PixelRing::<16>::new(16);
    assert_eq!(ring.offset(), 0);
}

#[test]
fn add_accumulates_and_saturates() {
    let mut ring = PixelRing::<8>::new(0);
    ring.add(3, Rgb::new(200, 10, 0));
    ring.add(3, Rgb::new(100, 20, 5));
    assert_eq!(ring.get(3), Rgb::new(255, 30, 5));
}

#[test]
fn clear_zeroes_every_pixel() {
    let mut ring = PixelRing::<8>::new(2);
    for index in 0..8 {
        ring.set(index, Rgb::new(1, 1, 1));
    }
    ring.clear();
    assert!(ring.wire_bytes().iter().all(|&byte| byte == 0));
}

#[test]
fn wire_words_pack_grb_into_high_bits() {
    let mut ring = PixelRing::<2>::new(0);
    ring.set(0, Rgb::new(0x11, 0x22, 0x33));
    let words = ring.wire_words();
    assert_eq!(words[0], 0x2211_3300);
    assert_eq!(words[1], 0);
}
