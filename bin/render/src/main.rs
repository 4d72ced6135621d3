//! Render a configured picker, gradients and cursors, to a PNG file.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect as PixelRect;
use rect_picker::{Argb, ColorPicker, Component, Cursor, PickerAttributes, Point, Size};

#[derive(Debug, Parser)]
#[command(about = "Render a rectangular HSV color picker to a PNG file")]
struct Args {
    /// JSON file with the picker attributes.
    #[arg(long)]
    attributes: Option<PathBuf>,

    #[arg(long, default_value_t = 400)]
    width: u32,

    #[arg(long, default_value_t = 300)]
    height: u32,

    /// Initial color as `AARRGGBB` or `RRGGBB` hex, with an optional `#` or
    /// `0x` prefix. Overrides the color in the attributes.
    #[arg(long)]
    color: Option<String>,

    #[arg(long, short, default_value = "out.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let attributes = match &args.attributes {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid attributes in {}", path.display()))?
        }
        None => PickerAttributes::default(),
    };

    if args.width == 0 || args.height == 0 {
        bail!("the picker needs a non-empty size");
    }

    let mut picker = ColorPicker::new();
    picker.configure(
        &attributes,
        Size::new(args.width as Component, args.height as Component),
    );
    if let Some(color) = &args.color {
        picker.set_color(parse_color(color)?);
    }
    log::info!("rendering {picker:?}");

    let image = render(&picker, args.width, args.height);
    image
        .save(&args.output)
        .with_context(|| format!("could not write image to {}", args.output.display()))?;

    println!("{} -> {}", picker.color(), args.output.display());
    Ok(())
}

fn parse_color(text: &str) -> Result<Argb> {
    let digits = text
        .trim()
        .trim_start_matches('#')
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    let value = u32::from_str_radix(digits, 16)
        .with_context(|| format!("{text:?} is not a hex color"))?;
    match digits.len() {
        6 => Ok(Argb(0xFF00_0000 | value)),
        8 => Ok(Argb(value)),
        _ => bail!("{text:?} must have 6 or 8 hex digits"),
    }
}

fn render(picker: &ColorPicker, width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let center = Point::new(x as Component + 0.5, y as Component + 0.5);
        if let Some(color) = picker.color_at(center) {
            *pixel = Rgba(color.to_rgba());
        }
    }

    for cursor in picker.cursors() {
        let style = match cursor {
            Cursor::Circle { .. } => picker.panel().cursor_style(),
            Cursor::RoundRect { .. } => picker.bar().cursor_style(),
        };
        for (color, stroke) in style.outlines() {
            draw_cursor(&mut image, &cursor, color, stroke);
        }
    }

    image
}

/// Draw the outline of `cursor` `stroke` pixels wide, centered on its edge.
/// Rounded corners are drawn square.
fn draw_cursor(image: &mut RgbaImage, cursor: &Cursor, color: Argb, stroke: Component) {
    let color = Rgba(color.to_rgba());
    let stroke = stroke.round().max(1.0) as i32;
    let inner = -(stroke / 2);

    for offset in inner..inner + stroke {
        match *cursor {
            Cursor::Circle { center, radius } => {
                let radius = radius.round() as i32 + offset;
                if radius > 0 {
                    draw_hollow_circle_mut(
                        image,
                        (center.x.round() as i32, center.y.round() as i32),
                        radius,
                        color,
                    );
                }
            }
            Cursor::RoundRect { rect, .. } => {
                let rect = rect.inflate(offset as Component, offset as Component);
                let (w, h) = (rect.size.width.round(), rect.size.height.round());
                if w >= 1.0 && h >= 1.0 {
                    draw_hollow_rect_mut(
                        image,
                        PixelRect::at(rect.origin.x.round() as i32, rect.origin.y.round() as i32)
                            .of_size(w as u32, h as u32),
                        color,
                    );
                }
            }
        }
    }
}
