//! Decode a share code and write a PNG preview.
//!
//! Usage: cargo run --example render_preview -- CSGO-xxxxx-xxxxx-xxxxx-xxxxx-xxxxx

fn main() -> anyhow::Result<()> {
    let code = std::env::args()
        .nth(1)
        .unwrap_or_else(|| xhair::encode(&xhair::CrosshairSettings::default()));

    let settings = xhair::decode(&code);
    println!("{}", settings.console_commands());

    let pixmap = xhair::render(&settings, 128);
    let (w, h) = (pixmap.width(), pixmap.height());
    let img = image::RgbaImage::from_raw(w, h, pixmap.into_raw())
        .ok_or_else(|| anyhow::anyhow!("pixel buffer size mismatch"))?;
    img.save("preview.png")?;
    println!("wrote {}x{} preview.png for {}", w, h, code);
    Ok(())
}
