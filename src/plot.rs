//! Scatter plot renderer
//!
//! Renders the anonymized log-log scatter of the two counts. Both axes use
//! log10(count + 1); the +1 offset keeps zero counts at the origin instead
//! of hitting the log-of-zero singularity. Purely derived output: it never
//! feeds back into the CSV and can only fail on drawing or file I/O.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::aggregate::ResultRecord;

// 6x6 inch figure at 200 dpi.
const PLOT_SIZE_PX: u32 = 1200;

/// Log-transformed coordinate for one record: (log10(ads+1), log10(google+1)).
pub fn log_point(record: &ResultRecord) -> (f64, f64) {
    (
        ((record.ads_papers + 1) as f64).log10(),
        ((record.google_results + 1) as f64).log10(),
    )
}

/// Render the square log-log scatter plot to a PNG at `path`.
pub fn render_scatter(path: &Path, records: &[ResultRecord]) -> Result<()> {
    let points: Vec<(f64, f64)> = records.iter().map(log_point).collect();

    let x_max = axis_max(points.iter().map(|p| p.0));
    let y_max = axis_max(points.iter().map(|p| p.1));

    let root = BitMapBackend::new(path, (PLOT_SIZE_PX, PLOT_SIZE_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("log10(ADS papers + 1)")
        .y_desc("log10(Google hits + 1)")
        .light_line_style(BLACK.mix(0.1))
        .bold_line_style(BLACK.mix(0.3))
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 6, BLUE.mix(0.7).filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Upper axis bound: data maximum padded by half a decade, at least one
/// decade so an all-zero dataset still draws a usable frame.
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    (values.fold(0.0, f64::max) + 0.5).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, ads: u64, google: u64) -> ResultRecord {
        ResultRecord {
            name: name.to_string(),
            ads_papers: ads,
            google_results: google,
        }
    }

    #[test]
    fn test_zero_counts_map_to_origin() {
        let (x, y) = log_point(&record("Nobody", 0, 0));
        assert_eq!((x, y), (0.0, 0.0));
    }

    #[test]
    fn test_log_transform_of_round_counts() {
        let (x, y) = log_point(&record("Jane Doe", 99, 999));
        assert!((x - 2.0).abs() < 1e-12);
        assert!((y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_max_has_floor() {
        assert_eq!(axis_max([0.0].into_iter()), 1.0);
        assert_eq!(axis_max([3.0].into_iter()), 3.5);
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scatter.png");

        let records = vec![record("A", 0, 0), record("B", 42, 120000)];
        render_scatter(&path, &records).unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_render_empty_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scatter.png");
        render_scatter(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
