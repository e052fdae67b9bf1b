use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gradient_text_graphics::{DisplayMetrics, Point, Size};
use gradient_text_render_pixels::{draw_scene, CachedRusttypeTextMeasurer, PixelsTextHost};
use gradient_text_view::GradientTextView;

const DEFAULT_MARKUP: &str = r##"<GradientTextView
    android:text="Golden Hour"
    android:textSize="48sp"
    app:angle="30"
    app:enableStroke="true"
    app:strokeTint="#FF3A2A10"
    app:strokeSize="4dp" />"##;
const MARGIN: f32 = 16.0;
const BACKGROUND: [u8; 4] = [24, 24, 32, 255];
// A stroke pass changes padding, which asks for one more layout.
const MAX_LAYOUT_PASSES: usize = 3;

/// Renders a gradient text label from markup into a PPM image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TrueType font used to measure and rasterize the text
    font: PathBuf,

    /// Output image (binary PPM)
    output: PathBuf,

    /// Single-element markup; a built-in label is used when omitted
    #[arg(short, long)]
    markup: Option<String>,

    /// Frame width in pixels; defaults to the measured label plus margins
    #[arg(long)]
    width: Option<u32>,

    /// Frame height in pixels; defaults to the measured label plus margins
    #[arg(long)]
    height: Option<u32>,

    /// Pixels per dp
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    /// Pixels per sp; follows --density when omitted
    #[arg(long)]
    scaled_density: Option<f32>,
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let metrics = DisplayMetrics::new(args.density, args.scaled_density.unwrap_or(args.density));
    let font_bytes = std::fs::read(&args.font)
        .with_context(|| format!("reading font {}", args.font.display()))?;
    let measurer = CachedRusttypeTextMeasurer::from_bytes(font_bytes, 64)?;

    let mut host = PixelsTextHost::new(measurer);
    host.set_origin(Point::new(MARGIN, MARGIN));
    let markup = args.markup.as_deref().unwrap_or(DEFAULT_MARKUP);
    let mut view =
        GradientTextView::inflate(host, markup, metrics).context("parsing markup")?;

    for pass in 0..MAX_LAYOUT_PASSES {
        view.host_mut().begin_frame();
        view.on_draw();
        if !view.host_mut().take_layout_request() {
            break;
        }
        log::debug!("layout requested after frame {pass}");
    }

    let (width, height) = frame_size(&args, view.host().measure(view.paint()));
    log::info!(
        "rendering {} passes into {width}x{height}",
        view.host().scene().len()
    );

    let mut frame: Vec<u8> = BACKGROUND
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    let host = view.host();
    draw_scene(&mut frame, width, height, host.scene(), host.measurer().font());

    write_ppm(&args.output, width, height, &frame)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

/// Explicit `--width`/`--height`, otherwise the label plus margins.
fn frame_size(args: &Args, label: Size) -> (u32, u32) {
    let width = args
        .width
        .unwrap_or_else(|| (label.width + 2.0 * MARGIN).ceil() as u32);
    let height = args
        .height
        .unwrap_or_else(|| (label.height + 2.0 * MARGIN).ceil() as u32);
    (width, height)
}

/// Binary PPM: RGB only, alpha is dropped.
fn write_ppm(path: &Path, width: u32, height: u32, rgba: &[u8]) -> std::io::Result<()> {
    let mut bytes = format!("P6\n{width} {height}\n255\n").into_bytes();
    bytes.reserve((width * height * 3) as usize);
    for pixel in rgba.chunks_exact(4) {
        bytes.extend_from_slice(&pixel[..3]);
    }
    std::fs::write(path, bytes)
}
