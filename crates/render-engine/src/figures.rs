//! SVG figures for a curve bundle.

use std::fmt::Display;
use std::ops::Range;
use std::path::{Path, PathBuf};

use habilo_common::error::{HabiloError, HabiloResult};
use habilo_processing_core::{BilateralAngles, CurveBundle};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::layout::{
    finite_points, padded_range, time_range, time_series_size, HIP_RANGE, KNEE_RANGE,
    PHASE_PLANE_SIZE,
};

const FIGURE_TITLE: &str = "Hip and knee goniometry";
const FONT: &str = "sans-serif";

const LEFT_LINE: RGBColor = RGBColor(31, 119, 180);
const RIGHT_LINE: RGBColor = RGBColor(255, 127, 14);
const SPINE_LINE: RGBColor = RGBColor(44, 160, 44);

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// What to draw and where.
#[derive(Debug, Clone)]
pub struct FigureOptions {
    /// Directory the SVG files are written to.
    pub output_dir: PathBuf,
    /// File name prefix, usually the recording name.
    pub stem: String,
    /// Add a spine height panel below hip and knee.
    pub spine_height: bool,
    /// Also write the hip/knee phase-plane figure.
    pub phase_plane: bool,
}

/// Paths of the written figures.
#[derive(Debug, Clone)]
pub struct RenderedFigures {
    pub time_series: PathBuf,
    pub phase_plane: Option<PathBuf>,
}

/// Write every figure requested in `options`.
pub fn render_figures(bundle: &CurveBundle, options: &FigureOptions) -> HabiloResult<RenderedFigures> {
    if bundle.is_empty() {
        return Err(HabiloError::render("curve bundle has no frames"));
    }

    std::fs::create_dir_all(&options.output_dir)?;

    let time_series = options
        .output_dir
        .join(format!("{}-goniometry.svg", options.stem));
    render_time_series(bundle, &time_series, options.spine_height)?;

    let phase_plane = if options.phase_plane {
        let path = options.output_dir.join(format!("{}-phase.svg", options.stem));
        render_phase_plane(bundle, &path)?;
        Some(path)
    } else {
        None
    };

    tracing::info!(
        frames = bundle.len(),
        time_series = %time_series.display(),
        phase_plane = ?phase_plane,
        "Rendered figures"
    );

    Ok(RenderedFigures {
        time_series,
        phase_plane,
    })
}

/// Hip and knee angles over time, optionally with spine height.
pub fn render_time_series(bundle: &CurveBundle, path: &Path, spine_height: bool) -> HabiloResult<()> {
    let panels = if spine_height { 3 } else { 2 };
    let root = SVGBackend::new(path, time_series_size(bundle.len(), panels)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;
    let root = root.titled(FIGURE_TITLE, (FONT, 22)).map_err(draw_error)?;

    let areas = root.split_evenly((panels as usize, 1));
    let x_range = time_range(&bundle.time);

    draw_bilateral_panel(&areas[0], "Hip", x_range.clone(), HIP_RANGE, &bundle.time, &bundle.hip)?;
    draw_bilateral_panel(&areas[1], "Knee", x_range.clone(), KNEE_RANGE, &bundle.time, &bundle.knee)?;
    if spine_height {
        draw_spine_panel(&areas[2], x_range, &bundle.time, &bundle.spine_height)?;
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Hip angle against knee angle, one loop per side.
pub fn render_phase_plane(bundle: &CurveBundle, path: &Path) -> HabiloResult<()> {
    let root = SVGBackend::new(path, PHASE_PLANE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let x_range = padded_range(&[bundle.knee.left.as_slice(), bundle.knee.right.as_slice()]);
    let y_range = padded_range(&[bundle.hip.left.as_slice(), bundle.hip.right.as_slice()]);

    let mut chart = ChartBuilder::on(&root)
        .caption("Hip vs. knee", (FONT, 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Knee [deg]")
        .y_desc("Hip [deg]")
        .draw()
        .map_err(draw_error)?;

    let sides = [
        ("left", &bundle.knee.left, &bundle.hip.left, BLUE),
        ("right", &bundle.knee.right, &bundle.hip.right, RED),
    ];
    for (label, knee, hip, color) in sides {
        chart
            .draw_series(LineSeries::new(finite_points(knee, hip), color.stroke_width(1)))
            .map_err(draw_error)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

fn draw_bilateral_panel(
    area: &Area<'_>,
    caption: &str,
    x_range: Range<f64>,
    y_range: Range<f64>,
    time: &[f64],
    angles: &BilateralAngles,
) -> HabiloResult<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(caption, (FONT, 16))
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Time [sec]")
        .y_desc("Angle [deg]")
        .draw()
        .map_err(draw_error)?;

    let sides = [("left", &angles.left, LEFT_LINE), ("right", &angles.right, RIGHT_LINE)];
    for (label, values, color) in sides {
        chart
            .draw_series(LineSeries::new(finite_points(time, values), color.stroke_width(2)))
            .map_err(draw_error)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_error)?;
    Ok(())
}

fn draw_spine_panel(
    area: &Area<'_>,
    x_range: Range<f64>,
    time: &[f64],
    spine_height: &[f64],
) -> HabiloResult<()> {
    let mut chart = ChartBuilder::on(area)
        .caption("Spine center height", (FONT, 16))
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(x_range, padded_range(&[spine_height]))
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Time [sec]")
        .y_desc("Height [cm]")
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(
            finite_points(time, spine_height),
            SPINE_LINE.stroke_width(2),
        ))
        .map_err(draw_error)?;
    Ok(())
}

fn draw_error(e: impl Display) -> HabiloError {
    HabiloError::render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use habilo_processing_core::build_curves;
    use habilo_trajectory_model::{column_key, Axis, Column, Segment, Side, TrajectoryTable, TIME_COLUMN};

    fn bundle(frames: usize) -> CurveBundle {
        let mut columns = vec![Column::new(
            TIME_COLUMN,
            (0..frames).map(|i| i as f64 / 100.0).collect(),
        )];
        for segment in Segment::ALL {
            for side in Side::BOTH {
                if !segment.is_lateral() && side == Side::Right {
                    continue;
                }
                let base = match segment {
                    Segment::Spine => 150.0,
                    Segment::Hip => 100.0,
                    Segment::Knee => 50.0,
                    Segment::Ankle => 0.0,
                };
                let sway: Vec<f64> = (0..frames).map(|i| (i as f64 / 5.0).sin() * 5.0).collect();
                columns.push(Column::new(column_key(side, segment, Axis::Y), sway));
                columns.push(Column::new(column_key(side, segment, Axis::Z), vec![base; frames]));
            }
        }
        build_curves(&TrajectoryTable::new(columns).unwrap()).unwrap()
    }

    fn output_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_render_both_figures() {
        let dir = output_dir("habilo_test_render_both");
        let options = FigureOptions {
            output_dir: dir.clone(),
            stem: "walk".to_string(),
            spine_height: true,
            phase_plane: true,
        };

        let rendered = render_figures(&bundle(40), &options).unwrap();
        assert_eq!(rendered.time_series, dir.join("walk-goniometry.svg"));
        let svg = std::fs::read_to_string(&rendered.time_series).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Spine center height"));

        let phase = rendered.phase_plane.unwrap();
        assert!(std::fs::read_to_string(phase).unwrap().contains("<svg"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_phase_plane_is_optional() {
        let dir = output_dir("habilo_test_render_no_phase");
        let options = FigureOptions {
            output_dir: dir.clone(),
            stem: "walk".to_string(),
            spine_height: false,
            phase_plane: false,
        };

        let rendered = render_figures(&bundle(5), &options).unwrap();
        assert!(rendered.phase_plane.is_none());
        assert!(!dir.join("walk-phase.svg").exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_bundle_is_rejected() {
        let options = FigureOptions {
            output_dir: output_dir("habilo_test_render_empty"),
            stem: "empty".to_string(),
            spine_height: false,
            phase_plane: true,
        };
        assert!(matches!(
            render_figures(&bundle(0), &options),
            Err(HabiloError::Render { .. })
        ));
    }
}
