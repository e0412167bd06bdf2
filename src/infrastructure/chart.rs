//! Bar chart rendering for comics counts.
//!
//! Pure function over aggregate rows: counts in, PNG bytes out. Rows are
//! drawn as one vertical bar each, x = row index, y = comics count, with the
//! character name carried in the legend.

use std::io::Cursor;

use anyhow::anyhow;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::full_palette::{ORANGE, PURPLE, TEAL};

use crate::domain::entities::AggregateRow;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 540;

const PALETTE: [RGBColor; 8] = [YELLOW, RED, GREEN, BLUE, PURPLE, ORANGE, TEAL, MAGENTA];

/// Renders rows as a PNG bar chart, tallest bars first.
///
/// An empty row set produces an empty chart rather than an error.
pub fn render_comics_count_png(rows: &[AggregateRow]) -> anyhow::Result<Vec<u8>> {
    let mut sorted: Vec<AggregateRow> = rows.to_vec();
    sorted.sort_by(|a, b| b.comics_count.cmp(&a.comics_count));

    let mut rgb = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let backend = BitMapBackend::with_buffer(&mut rgb, (WIDTH, HEIGHT));
        draw_comics_count_chart(backend, &sorted)
            .map_err(|e| anyhow!("can't draw bar chart: {e}"))?;
    }

    let image =
        RgbImage::from_raw(WIDTH, HEIGHT, rgb).ok_or_else(|| anyhow!("pixel buffer mismatch"))?;
    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;
    Ok(png.into_inner())
}

/// Draws the bar chart onto any plotters backend.
///
/// Text elements (caption, axis labels, legend) are only drawn when a font
/// can be resolved, so headless hosts without system fonts still get the
/// bars themselves.
pub fn draw_comics_count_chart<'a, T>(
    backend: T,
    rows: &[AggregateRow],
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let with_text = font_available();

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = rows.len().max(1);
    let y_max = rows
        .iter()
        .map(|row| row.comics_count)
        .max()
        .unwrap_or(0)
        .max(1)
        + 1;

    let mut builder = ChartBuilder::on(&root);
    builder
        .x_label_area_size(40)
        .y_label_area_size(60)
        .margin(10);
    if with_text {
        builder.caption("Comics Count per Character", ("sans-serif", 24));
    }
    let mut chart = builder.build_cartesian_2d(0..x_max, 0u64..y_max)?;

    if with_text {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Character Index")
            .y_desc("Comics Count")
            .draw()?;
    }

    for (index, row) in rows.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let bar = Rectangle::new([(index, 0u64), (index + 1, row.comics_count)], color.filled());

        let series = chart.draw_series(std::iter::once(bar))?;
        if with_text {
            series
                .label(row.character_name.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled())
                });
        }
    }

    if with_text && !rows.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .label_font(("sans-serif", 14))
            .draw()?;
    }

    root.present()?;

    Ok(())
}

/// Probes whether the default font can be resolved on this host.
fn font_available() -> bool {
    ("sans-serif", 16).into_font().box_size("M").is_ok()
}
