//! Encode a world topography image as a terrain-class text grid.
//!
//! Prints `H` lines of `W` class codes ('0' ocean, '1' land, '2' desert,
//! '3' ice, '4' mountain) to stdout, wrapped in a named-constant template
//! unless `--bare` is given. Diagnostics go to stderr.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use topogrid_core::image::DynamicImage;
use topogrid_core::render::DEFAULT_CONST_NAME;
use topogrid_core::{
    decode_bytes, encode_image, load_image, render, ClassHistogram, Dimensions, TerrainClass,
    Template,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "encode_map",
    about = "Reduce a topography image to a grid of terrain-class codes"
)]
struct Args {
    /// Source image (any format the decoder recognises); `-` reads stdin
    #[arg(short, long, default_value = "public/earth-topo.jpg")]
    input: PathBuf,

    /// Grid width in cells
    #[arg(long, default_value_t = 128, allow_negative_numbers = true)]
    width: i64,

    /// Grid height in cells
    #[arg(long, default_value_t = 64, allow_negative_numbers = true)]
    height: i64,

    /// Name of the emitted constant
    #[arg(long, default_value = DEFAULT_CONST_NAME)]
    const_name: String,

    /// Emit grid rows only, without the constant wrapper
    #[arg(long)]
    bare: bool,
}

impl Args {
    fn template(&self) -> Template {
        if self.bare {
            Template::bare()
        } else {
            Template::named_constant(&self.const_name)
        }
    }
}

// ── Pipeline ─────────────────────────────────────────────────────────────────

fn load_source(input: &Path) -> Result<DynamicImage> {
    if input == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Cannot read stdin")?;
        return decode_bytes(&bytes).context("Cannot decode stdin");
    }
    load_image(input)
        .with_context(|| format!("Cannot load {}", input.display()))
}

/// Classify `source` and render the full output text.
fn encode(source: &DynamicImage, dims: Dimensions, template: &Template) -> String {
    let grid = encode_image(source, dims);

    let hist = ClassHistogram::from_grid(&grid);
    for class in TerrainClass::ALL {
        info!(
            "{:<8} {} {:>5.1}%",
            class.name(),
            class.code(),
            hist.fraction(class) * 100.0
        );
    }

    render(&grid, template)
}

/// Full run. `out` receives the rendered grid in a single write, and only
/// once every fallible step has succeeded.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let dims = Dimensions::new(args.width, args.height)?;
    let source = load_source(&args.input)?;
    info!(
        "Source {} ({}×{}) -> grid {}×{}",
        args.input.display(),
        source.width(),
        source.height(),
        dims.width(),
        dims.height()
    );

    let text = encode(&source, dims, &args.template());

    out.write_all(text.as_bytes()).context("Write failed")?;
    out.flush()?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encode_map=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    run(&args, &mut io::stdout().lock())
}
