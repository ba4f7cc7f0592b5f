//! Golden/determinism tests for the rasterizer.
//!
//! Renders are pure functions of `(settings, size)`, so their digests must
//! be stable across runs. The fixture comparison follows the usual golden
//! workflow: run with `UPDATE_GOLDENS=1` to (re)create the expected files.

use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use xhair::{decode, render, CrosshairSettings};

fn digest(settings: &CrosshairSettings, size: u32) -> String {
    let img = render(settings, size);
    hex::encode(Sha256::digest(img.as_raw()))
}

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn render_is_deterministic() {
    let s = CrosshairSettings::default();
    assert_eq!(digest(&s, 64), digest(&s, 64));
    assert_eq!(digest(&s, 128), digest(&s, 128));
}

#[test]
fn distinct_settings_produce_distinct_images() {
    let stock = CrosshairSettings::default();
    let dotted = CrosshairSettings {
        dot: true,
        ..stock.clone()
    };
    assert_ne!(digest(&stock, 64), digest(&dotted, 64));
}

#[test]
fn blank_styles_hash_like_an_empty_canvas() {
    let s = CrosshairSettings {
        style: 1,
        ..Default::default()
    };
    let img = render(&s, 64);
    assert_eq!(img.as_raw(), vec![0u8; 64 * 64 * 4].as_slice());
}

#[test]
fn golden_stock_crosshair_matches_fixture() {
    // the default crosshair, as produced by any failed decode
    let settings = decode("not-a-code");
    let got = digest(&settings, 64);

    let expected_path = golden_path("stock_64.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &got).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(got, exp.trim());
}
