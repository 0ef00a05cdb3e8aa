use crate::field::ScalarField;
use anyhow::{Context, Result};
use colorgrad::Gradient;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

// Horizontal pixels reserved for the colour-bar legend
const LEGEND_WIDTH: u32 = 140;
const LEGEND_STEPS: usize = 256;

pub struct FieldVisualiser {
    output_dir: String,
    width: u32,
    height: u32,
    // Store as a boxed trait object
    gradient: Box<dyn Gradient>,
}

impl FieldVisualiser {
    pub fn new(output_dir: &str, width: u32, height: u32) -> Result<Self> {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory '{}'", output_dir))?;

        // Grayscale map: minimum value drawn black, maximum drawn white
        let gradient = colorgrad::GradientBuilder::new()
            .colors(&[
                colorgrad::Color::new(0.0, 0.0, 0.0, 1.0),
                colorgrad::Color::new(1.0, 1.0, 1.0, 1.0),
            ])
            .build::<colorgrad::LinearGradient>()
            .context("Failed to build grayscale gradient")?;

        Ok(Self {
            output_dir: output_dir.to_string(),
            width,
            height,
            gradient: Box::new(gradient),
        })
    }

    /// Render the field as a heatmap PNG with a colour-bar legend.
    /// The value range is auto-scaled to the field's own min/max, and
    /// row 0 is drawn at the bottom so the origin sits at the lower left.
    pub fn render(&self, field: &ScalarField, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let (rows, cols) = field.dim();
        let (min_val, max_val) = field.value_range();

        let (map_area, legend_area) = root.split_horizontally((self.width - LEGEND_WIDTH) as i32);

        let mut chart = ChartBuilder::on(&map_area)
            .caption("2D Scalar Field Visualization", ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(0..cols, 0..rows)?;

        chart
            .configure_mesh()
            .x_desc("x (grid points)")
            .y_desc("y (grid points)")
            .draw()?;

        for i in 0..rows {
            for j in 0..cols {
                let value = field.data[[i, j]];
                let color = self.value_to_color(value, min_val, max_val);
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(j, i), (j + 1, i + 1)],
                    color.filled(),
                )))?;
            }
        }

        self.draw_colorbar(&legend_area, min_val, max_val)?;

        root.present()?;
        Ok(())
    }

    /// Render to a PNG under the output directory, then hand it to the
    /// platform image viewer. This is the program's terminal action.
    pub fn show(&self, field: &ScalarField) -> Result<PathBuf> {
        let path = Path::new(&self.output_dir).join("scalar_field.png");
        self.render(field, &path)?;
        println!("Rendered heatmap: {}", path.display());
        self.open_viewer(&path);
        Ok(path)
    }

    fn draw_colorbar(
        &self,
        area: &DrawingArea<BitMapBackend, Shift>,
        min_val: f64,
        max_val: f64,
    ) -> Result<()> {
        // A constant field has no range; pad so the axis stays drawable
        let (lo, hi) = if max_val > min_val {
            (min_val, max_val)
        } else {
            (min_val - 0.5, max_val + 0.5)
        };

        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .margin_top(50)
            .y_label_area_size(55)
            .build_cartesian_2d(0..1usize, lo..hi)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_x_axis()
            .disable_y_mesh()
            .y_desc("Scalar Value")
            .axis_desc_style(("sans-serif", 15))
            .draw()?;

        let step = (hi - lo) / LEGEND_STEPS as f64;
        chart.draw_series((0..LEGEND_STEPS).map(|s| {
            let v = lo + step * s as f64;
            let color = self.value_to_color(v + 0.5 * step, min_val, max_val);
            Rectangle::new([(0, v), (1, v + step)], color.filled())
        }))?;

        Ok(())
    }

    fn value_to_color(&self, value: f64, min_val: f64, max_val: f64) -> RGBColor {
        let normalized = if max_val > min_val {
            (value - min_val) / (max_val - min_val)
        } else {
            0.5
        };
        let normalized = normalized.clamp(0.0, 1.0);
        let color_rgba = self.gradient.at(normalized as f32).to_rgba8();
        RGBColor(color_rgba[0], color_rgba[1], color_rgba[2])
    }

    fn open_viewer(&self, path: &Path) {
        #[cfg(target_os = "macos")]
        let viewer = "open";
        #[cfg(not(target_os = "macos"))]
        let viewer = "xdg-open";

        // Viewer failure is non-fatal: the rendered image is already on disk
        match Command::new(viewer).arg(path).status() {
            Ok(status) if !status.success() => {
                eprintln!("{} exited with status {:?}", viewer, status);
            }
            Err(e) => eprintln!("Could not launch image viewer: {}", e),
            Ok(_) => {}
        }
    }
}
