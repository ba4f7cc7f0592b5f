//! Round-trip and checksum laws over the share-code codec.

use xhair::codec::{self, base57};
use xhair::{decode, encode, try_decode, CrosshairSettings};

/// Build settings with every fixed-point field on its wire step.
fn on_step(gap_tenths: i32, size_tenths: u32, thickness_tenths: u32) -> CrosshairSettings {
    CrosshairSettings {
        gap: gap_tenths as f32 / 10.0,
        fixed_gap: gap_tenths as f32 / 10.0,
        size: size_tenths as f32 / 10.0,
        thickness: thickness_tenths as f32 / 10.0,
        outline_thickness: 1.5,
        split_alpha_inner: 1.0,
        split_alpha_outer: 0.5,
        split_max_dist_ratio: 0.3,
        ..Default::default()
    }
}

#[test]
fn roundtrip_over_gap_range() {
    // full signed-byte range in tenths
    for gap_tenths in (-128..=127).step_by(7) {
        let s = on_step(gap_tenths, 20, 10);
        let code = encode(&s);
        assert_eq!(decode(&code), s, "gap {} tenths", gap_tenths);
    }
}

#[test]
fn roundtrip_over_size_range() {
    // 13-bit magnitude in tenths
    for size_tenths in [0u32, 1, 9, 20, 31, 255, 256, 4095, 8191] {
        let s = on_step(-20, size_tenths, 10);
        let code = encode(&s);
        assert_eq!(decode(&code), s, "size {} tenths", size_tenths);
    }
}

#[test]
fn roundtrip_over_styles_and_flags() {
    for style in 0..=7u8 {
        for bits in 0..16u8 {
            let s = CrosshairSettings {
                style,
                dot: bits & 1 != 0,
                gap_use_weapon_value: bits & 2 != 0,
                use_alpha: bits & 4 != 0,
                t_style: bits & 8 != 0,
                split_max_dist_ratio: 0.3,
                ..Default::default()
            };
            assert_eq!(decode(&encode(&s)), s, "style {} bits {:04b}", style, bits);
        }
    }
}

#[test]
fn roundtrip_over_colors_and_dynamic_fields() {
    let s = CrosshairSettings {
        color_index: 3,
        color_r: 0,
        color_g: 128,
        color_b: 255,
        alpha: 1,
        recoil: true,
        split_dist: 127,
        split_alpha_inner: 1.5,
        split_alpha_outer: 0.0,
        split_max_dist_ratio: 1.2,
        ..Default::default()
    };
    assert_eq!(decode(&encode(&s)), s);
}

#[test]
fn checksum_law_holds_for_every_encoded_buffer() {
    for gap_tenths in (-128..=127).step_by(13) {
        let bytes = codec::to_wire_bytes(&on_step(gap_tenths, 35, 6));
        let sum: u32 = bytes[1..].iter().map(|&b| b as u32).sum();
        assert_eq!(bytes[0] as u32, sum % 256);
    }
}

#[test]
fn encode_masks_out_of_range_values_instead_of_failing() {
    let s = CrosshairSettings {
        size: 5000.0, // 50000 tenths, beyond the 13-bit field
        split_dist: 200,
        style: 9,
        ..Default::default()
    };
    let code = encode(&s);
    assert_ne!(code, codec::ERROR_CODE);
    let decoded = decode(&code);
    // masked to the field widths, never rejected
    assert_eq!(decoded.size, ((50000 & 0x1fff) as f32) / 10.0);
    assert_eq!(decoded.split_dist, 200 & 0x7f);
    assert_eq!(decoded.style, 9 & 0x7);
}

#[test]
fn strict_decode_reports_the_failure_class() {
    assert!(matches!(
        try_decode("CSGO-short"),
        Err(xhair::Error::CodeFormat(_))
    ));

    let mut bytes = codec::to_wire_bytes(&CrosshairSettings::default());
    bytes[0] ^= 0xff;
    let payload = base57::encode_payload(&bytes);
    assert!(matches!(
        try_decode(&payload),
        Err(xhair::Error::Checksum { .. })
    ));
}

#[test]
fn decode_and_encode_never_panic_on_garbage() {
    for input in [
        "",
        "CSGO",
        "CSGO-ERROR-ERROR-ERROR-ERROR-ERROR",
        "CSGO-AAAAA-AAAAA-AAAAA-AAAAA-AAAAA-AAAAA",
        "99999999999999999999999999999999999999",
        "\u{1F980}",
    ] {
        let _ = decode(input);
    }
}
