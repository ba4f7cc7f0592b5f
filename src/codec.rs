//! Share-code codec: `CSGO-xxxxx-...` strings ⇄ 18-byte wire buffers ⇄
//! [`CrosshairSettings`].
//!
//! The wire format is the game's reverse-engineered layout: byte 0 is a
//! modulo-256 checksum of bytes 1..18, byte 1 a format constant, and the
//! remaining bytes pack every crosshair field at a fixed bit position and
//! fixed-point scale. The string form is that buffer re-encoded as a
//! 25-digit base-57 number over an alphabet that omits visually ambiguous
//! symbols, grouped five-by-five under a `CSGO-` prefix.

use crate::error::{Error, Result};
use crate::CrosshairSettings;

/// The 57-symbol share-code alphabet (no `I`, `0`, `1`, lowercase `g`/`l`/`o`)
pub const DICTIONARY: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZabcdefhijkmnopqrstuvwxyz23456789";

/// Sentinel returned by [`encode`] when code generation fails internally
pub const ERROR_CODE: &str = "CSGO-ERROR-ERROR-ERROR-ERROR-ERROR";

/// Number of base-57 digits in a share-code payload
const PAYLOAD_CHARS: usize = 25;

/// Wire buffer length: checksum byte + format byte + 16 field bytes
const WIRE_LEN: usize = 18;

/// Fixed-size base-57 integer routines over the 18-byte wire buffer.
///
/// The 144-bit payload does not fit a machine word, and we deliberately
/// avoid a big-integer dependency: a big-endian byte array with schoolbook
/// multiply-add and divide-with-remainder is byte-exact and keeps the wire
/// behavior independent of any library's internal representation.
pub mod base57 {
    use super::{DICTIONARY, PAYLOAD_CHARS, WIRE_LEN};
    use crate::error::{Error, Result};

    const BASE: u32 = 57;

    fn digit_index(c: char) -> Result<u32> {
        DICTIONARY
            .chars()
            .position(|d| d == c)
            .map(|i| i as u32)
            .ok_or(Error::InvalidChar(c))
    }

    /// buf = buf * mul + add, big-endian; errors if a carry falls off the top.
    fn mul_add(buf: &mut [u8; WIRE_LEN], mul: u32, add: u32) -> Result<()> {
        let mut carry = add;
        for b in buf.iter_mut().rev() {
            let v = *b as u32 * mul + carry;
            *b = (v & 0xff) as u8;
            carry = v >> 8;
        }
        if carry != 0 {
            return Err(Error::Overflow);
        }
        Ok(())
    }

    /// buf /= div, big-endian; returns the remainder.
    fn div_rem(buf: &mut [u8; WIRE_LEN], div: u32) -> u32 {
        let mut rem = 0u32;
        for b in buf.iter_mut() {
            let v = rem * 256 + *b as u32;
            *b = (v / div) as u8;
            rem = v % div;
        }
        rem
    }

    /// Interpret a bare 25-character payload as a base-57 integer and render
    /// it as 18 bytes, most-significant first. The leftmost character is the
    /// most significant digit.
    pub fn decode_payload(payload: &str) -> Result<[u8; WIRE_LEN]> {
        if payload.chars().count() != PAYLOAD_CHARS {
            return Err(Error::CodeFormat(format!(
                "payload must be {} characters, got {}",
                PAYLOAD_CHARS,
                payload.chars().count()
            )));
        }
        let mut bytes = [0u8; WIRE_LEN];
        for c in payload.chars() {
            let idx = digit_index(c)?;
            mul_add(&mut bytes, BASE, idx)?;
        }
        Ok(bytes)
    }

    /// Render 18 wire bytes as exactly 25 base-57 digits, most significant
    /// first, left-padded with the alphabet's first symbol.
    pub fn encode_payload(bytes: &[u8; WIRE_LEN]) -> String {
        let dict: Vec<char> = DICTIONARY.chars().collect();
        let mut acc = *bytes;
        let mut digits = [0u32; PAYLOAD_CHARS];
        for d in digits.iter_mut() {
            *d = div_rem(&mut acc, BASE);
        }
        // digits are least-significant first; emit them in writing order
        digits.iter().rev().map(|&d| dict[d as usize]).collect()
    }

}

/// Round to the nearest integer with JavaScript `Math.round` tie-breaking
/// (halves go toward positive infinity), matching the original encoder.
fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

fn checksum(bytes: &[u8; WIRE_LEN]) -> u8 {
    (bytes[1..].iter().map(|&b| b as u32).sum::<u32>() % 256) as u8
}

/// Accept the bare 25-character form by re-inserting the prefix and hyphens.
fn normalize(code: &str) -> String {
    let code = code.trim();
    if !code.starts_with("CSGO-")
        && code.chars().count() == PAYLOAD_CHARS
        && code.chars().all(|c| DICTIONARY.contains(c))
    {
        let groups: Vec<&str> = (0..5).map(|i| &code[i * 5..i * 5 + 5]).collect();
        return format!("CSGO-{}", groups.join("-"));
    }
    code.to_string()
}

/// Validate the full `CSGO(-xxxxx){5}` shape.
fn validate_shape(code: &str) -> Result<()> {
    let reject = || Error::CodeFormat(format!("not a share code: {:?}", code));
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 34 || !code.starts_with("CSGO") {
        return Err(reject());
    }
    for group in chars[4..].chunks(6) {
        if group[0] != '-' || !group[1..].iter().all(|&c| DICTIONARY.contains(c)) {
            return Err(reject());
        }
    }
    Ok(())
}

/// Pack settings into the 18-byte wire buffer, including the checksum.
///
/// Fixed-point fields are rounded to their step once here; integer masking
/// silently truncates anything beyond a field's bit width.
pub fn to_wire_bytes(s: &CrosshairSettings) -> [u8; WIRE_LEN] {
    let mut b = [0u8; WIRE_LEN];
    b[1] = 1; // format/version constant
    b[2] = (round_half_up(s.gap * 10.0) & 0xff) as u8;
    b[3] = (round_half_up(s.outline_thickness * 2.0) & 0xff) as u8;
    b[4] = s.color_r;
    b[5] = s.color_g;
    b[6] = s.color_b;
    b[7] = s.alpha;
    b[8] = (s.split_dist & 0x7f) | if s.recoil { 0x80 } else { 0 };
    b[9] = (round_half_up(s.fixed_gap * 10.0) & 0xff) as u8;
    b[10] = (s.color_index & 0x7)
        | if s.draw_outline { 0x8 } else { 0 }
        | (((round_half_up(s.split_alpha_inner * 10.0) & 0xf) as u8) << 4);
    b[11] = (round_half_up(s.split_alpha_outer * 10.0) & 0xf) as u8
        | (((round_half_up(s.split_max_dist_ratio * 10.0) & 0xf) as u8) << 4);
    b[12] = (round_half_up(s.thickness * 10.0) & 0xff) as u8;
    b[13] = ((s.style & 0x7) << 1)
        | if s.dot { 0x10 } else { 0 }
        | if s.gap_use_weapon_value { 0x20 } else { 0 }
        | if s.use_alpha { 0x40 } else { 0 }
        | if s.t_style { 0x80 } else { 0 };
    let size = round_half_up(s.size * 10.0) & 0x1fff;
    b[14] = (size & 0xff) as u8;
    b[15] = ((size >> 8) & 0x1f) as u8;
    // bytes 16..18 reserved, always zero
    b[0] = checksum(&b);
    b
}

/// Unpack a wire buffer into settings. The checksum byte is not verified
/// here; [`try_decode`] checks it before calling this.
pub fn from_wire_bytes(b: &[u8; WIRE_LEN]) -> CrosshairSettings {
    CrosshairSettings {
        gap: (b[2] as i8) as f32 / 10.0,
        outline_thickness: b[3] as f32 / 2.0,
        color_r: b[4],
        color_g: b[5],
        color_b: b[6],
        alpha: b[7],
        split_dist: b[8] & 0x7f,
        recoil: b[8] & 0x80 != 0,
        fixed_gap: (b[9] as i8) as f32 / 10.0,
        color_index: b[10] & 0x7,
        draw_outline: b[10] & 0x8 != 0,
        split_alpha_inner: (b[10] >> 4) as f32 / 10.0,
        split_alpha_outer: (b[11] & 0xf) as f32 / 10.0,
        split_max_dist_ratio: (b[11] >> 4) as f32 / 10.0,
        thickness: b[12] as f32 / 10.0,
        style: (b[13] & 0xf) >> 1,
        dot: b[13] & 0x10 != 0,
        gap_use_weapon_value: b[13] & 0x20 != 0,
        use_alpha: b[13] & 0x40 != 0,
        t_style: b[13] & 0x80 != 0,
        size: (((b[15] as u16 & 0x1f) << 8) + b[14] as u16) as f32 / 10.0,
    }
}

/// Strict decode: returns the reason a code was rejected instead of
/// swallowing it.
pub fn try_decode(code: &str) -> Result<CrosshairSettings> {
    let cleaned = normalize(code);
    validate_shape(&cleaned)?;
    let payload: String = cleaned[5..].chars().filter(|&c| c != '-').collect();
    let bytes = base57::decode_payload(&payload)?;
    let expected = checksum(&bytes);
    if bytes[0] != expected {
        return Err(Error::Checksum {
            expected,
            found: bytes[0],
        });
    }
    Ok(from_wire_bytes(&bytes))
}

/// Decode a share code into settings.
///
/// Never fails: malformed input, invalid characters, and checksum
/// mismatches all fall back to [`CrosshairSettings::default`].
pub fn decode(code: &str) -> CrosshairSettings {
    match try_decode(code) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("{}, using default crosshair", err);
            CrosshairSettings::default()
        }
    }
}

/// Strict encode. Cannot currently fail (every settings value masks down to
/// a representable buffer), but keeps the fallible signature for parity
/// with [`try_decode`].
pub fn try_encode(settings: &CrosshairSettings) -> Result<String> {
    let bytes = to_wire_bytes(settings);
    let payload = base57::encode_payload(&bytes);
    Ok(format!(
        "CSGO-{}-{}-{}-{}-{}",
        &payload[0..5],
        &payload[5..10],
        &payload[10..15],
        &payload[15..20],
        &payload[20..25]
    ))
}

/// Encode settings into the canonical hyphenated share-code form.
///
/// On internal failure returns [`ERROR_CODE`] rather than raising.
pub fn encode(settings: &CrosshairSettings) -> String {
    match try_encode(settings) {
        Ok(code) => code,
        Err(err) => {
            log::warn!("generating share code failed: {}", err);
            ERROR_CODE.to_string()
        }
    }
}
