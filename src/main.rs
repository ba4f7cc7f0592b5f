use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use xhair::rendering::DEFAULT_CANVAS_SIZE;
use xhair::CrosshairSettings;

#[derive(Parser)]
#[command(name = "xhair", version, about = "CS2 crosshair share-code codec and preview rasterizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a share code and print the settings
    Decode {
        /// Share code (`CSGO-...` or the bare 25-character form)
        code: String,
        /// Print the game console commands instead of JSON
        #[arg(long)]
        commands: bool,
        /// Fail on invalid codes instead of falling back to the defaults
        #[arg(long)]
        strict: bool,
    },
    /// Encode settings (JSON on stdin or from a file) into a share code
    Encode {
        /// Settings JSON file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Render a share code to a PNG preview
    Render {
        /// Share code (`CSGO-...` or the bare 25-character form)
        code: String,
        /// Output PNG path
        #[arg(short, long, default_value = "crosshair.png")]
        output: PathBuf,
        /// Canvas side in pixels
        #[arg(short, long, default_value_t = DEFAULT_CANVAS_SIZE)]
        size: u32,
    },
}

fn load_settings(input: Option<&PathBuf>) -> Result<CrosshairSettings> {
    let text = match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading settings from stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("parsing settings JSON")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Decode {
            code,
            commands,
            strict,
        } => {
            let settings = if strict {
                xhair::try_decode(&code).map_err(|e| anyhow::anyhow!("{}", e))?
            } else {
                xhair::decode(&code)
            };
            if commands {
                println!("{}", settings.console_commands());
            } else {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
        }
        Command::Encode { input } => {
            let settings = load_settings(input.as_ref())?;
            println!("{}", xhair::encode(&settings));
        }
        Command::Render { code, output, size } => {
            let pixmap = xhair::render(&xhair::decode(&code), size);
            let (w, h) = (pixmap.width(), pixmap.height());
            let img = image::RgbaImage::from_raw(w, h, pixmap.into_raw())
                .context("pixel buffer size mismatch")?;
            img.save(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("wrote {}x{} preview to {}", w, h, output.display());
        }
    }

    Ok(())
}
