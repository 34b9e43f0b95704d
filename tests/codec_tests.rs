//! Integration tests for color encoding

use matrix_sequencer::colors::{hsv, hue, scale};
use matrix_sequencer::{BLACK, BLUE, Color, GREEN, PackedColor, RED, WHITE, encode};

#[test]
fn channels_land_at_fixed_bit_offsets() {
    assert_eq!(encode(GREEN).bits(), 0xFF00_0000);
    assert_eq!(encode(RED).bits(), 0x00FF_0000);
    assert_eq!(encode(BLUE).bits(), 0x0000_FF00);
    assert_eq!(encode(BLACK), PackedColor::OFF);
}

#[test]
fn quantization_truncates_instead_of_rounding() {
    // 0.5 * 255 = 127.5
    assert_eq!(encode(Color::new(0.5, 0.5, 0.5)).channels(), (127, 127, 127));
    // 0.999 * 255 = 254.745
    assert_eq!(encode(Color::new(0.999, 0.0, 0.0)).channels(), (254, 0, 0));
}

#[test]
fn encode_is_deterministic() {
    let color = Color::new(0.31, 0.62, 0.93);
    assert_eq!(encode(color), encode(color));
}

#[test]
fn distinct_quantized_triples_encode_distinctly() {
    let samples = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];
    let mut seen: Vec<((u8, u8, u8), PackedColor)> = Vec::new();

    for red in samples {
        for green in samples {
            for blue in samples {
                let packed = encode(Color::new(red, green, blue));
                let bytes = packed.channels();
                for (other_bytes, other_packed) in &seen {
                    assert_eq!(bytes == *other_bytes, packed == *other_packed);
                }
                seen.push((bytes, packed));
            }
        }
    }
}

#[test]
fn out_of_range_channels_saturate() {
    // Already-quantized magnitudes passed by mistake pin at full intensity
    assert_eq!(encode(Color::new(255.0, 0.0, 0.0)), encode(RED));
    assert_eq!(encode(Color::new(256.0, 0.0, 0.0)), encode(RED));
    assert_eq!(encode(Color::new(-1.0, 0.0, 0.0)), PackedColor::OFF);
}

#[test]
fn dimmed_fills_match_reference_bytes() {
    assert_eq!(encode(scale(RED, 0.8)).channels(), (204, 0, 0));
    assert_eq!(encode(scale(GREEN, 0.5)).channels(), (0, 127, 0));
    assert_eq!(encode(scale(WHITE, 0.2)).channels(), (51, 51, 51));
}

#[test]
fn packed_color_converts_to_raw_word() {
    let word: u32 = PackedColor::from_channels(1, 2, 3).into();
    assert_eq!(word, 0x0201_0300);
}

#[test]
fn hsv_creates_primary_colors() {
    assert_eq!(encode(hue(0.0)), encode(RED));
    assert_eq!(encode(hue(120.0)), encode(GREEN));
    assert_eq!(encode(hue(240.0)), encode(BLUE));
}

#[test]
fn hsv_zero_saturation_is_gray() {
    let gray = hsv(0.0, 0.0, 0.5);
    assert!((gray.red - 0.5).abs() < 1e-9);
    assert!((gray.green - 0.5).abs() < 1e-9);
    assert!((gray.blue - 0.5).abs() < 1e-9);
}
