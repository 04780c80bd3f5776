use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::prelude::*;
use plotters::style::full_palette::GREEN_800;
use tracing::info;

use crate::config::ModelKind;
use crate::core::grid::RATIO_END;
use crate::core::kinematics::TimedSolution;
use crate::core::linkage::{self, LinkageGeometry, StaticSolution};
use crate::core::sweep::{StaticSample, TimedSample};
use crate::core::window::padded_axis_window;
use crate::error::{FinderError, Result};

pub const PLOT_SIZE: (u32, u32) = (1000, 600);

fn font() -> TextStyle<'static> {
    ("sans-serif", 18).into_font().color(&BLACK)
}

/// `<dir>/gear_ratio_<model>_<local timestamp>.svg`
pub fn output_path(dir: &Path, model: ModelKind) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("gear_ratio_{}_{stamp}.svg", model.name()))
}

pub fn write_static_svg(
    path: &Path,
    geometry: LinkageGeometry,
    samples: &[StaticSample],
    best: StaticSolution,
) -> Result<()> {
    plot_static_sweep(SVGBackend::new(path, PLOT_SIZE), geometry, samples, best)?;
    info!(path = %path.display(), "wrote static sweep plot");
    Ok(())
}

pub fn write_timed_svg(path: &Path, samples: &[TimedSample], best: TimedSolution) -> Result<()> {
    plot_timed_sweep(SVGBackend::new(path, PLOT_SIZE), samples, best)?;
    info!(path = %path.display(), "wrote timed sweep plot");
    Ok(())
}

/// Arm height and reach against ratio, with the backdrop targets and the
/// chosen ratio marked.
pub fn plot_static_sweep<B>(
    backend: B,
    geometry: LinkageGeometry,
    samples: &[StaticSample],
    best: StaticSolution,
) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    draw_static(backend, geometry, samples, best).map_err(|e| FinderError::Plot(e.to_string()))
}

pub fn plot_timed_sweep<B>(backend: B, samples: &[TimedSample], best: TimedSolution) -> Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    draw_timed(backend, samples, best).map_err(|e| FinderError::Plot(e.to_string()))
}

fn draw_static<B>(
    backend: B,
    geometry: LinkageGeometry,
    samples: &[StaticSample],
    best: StaticSolution,
) -> std::result::Result<(), Box<dyn Error>>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let target_height = linkage::backdrop_height(geometry);
    let target_length = linkage::backdrop_length(geometry);
    let (y_min, y_max) = padded_axis_window(
        samples
            .iter()
            .flat_map(|s| [s.arm_height_in, s.arm_length_in])
            .chain([target_height, target_length]),
    );

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Static model (best ratio {})", best.ratio), font())
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..RATIO_END, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Gear ratio")
        .y_desc("Inches")
        .label_style(font())
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.ratio, s.arm_height_in)),
            &BLUE,
        ))?
        .label("arm height")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.ratio, s.arm_length_in)),
            &GREEN_800,
        ))?
        .label("arm reach")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN_800));

    for (target, color) in [(target_height, BLUE.mix(0.4)), (target_length, GREEN_800.mix(0.4))] {
        chart.draw_series(LineSeries::new(
            [(0.0, target), (RATIO_END, target)],
            color.stroke_width(1),
        ))?;
    }

    chart.draw_series(
        samples
            .iter()
            .filter(|s| s.touching)
            .map(|s| Circle::new((s.ratio, s.arm_height_in), 2, BLUE.filled())),
    )?;

    if best.ratio > 0.0 {
        chart.draw_series(LineSeries::new(
            [(best.ratio, y_min), (best.ratio, y_max)],
            RED.stroke_width(2),
        ))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE)
        .border_style(BLACK)
        .label_font(font())
        .draw()?;
    root.present()?;
    Ok(())
}

fn draw_timed<B>(
    backend: B,
    samples: &[TimedSample],
    best: TimedSolution,
) -> std::result::Result<(), Box<dyn Error>>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let touches: Vec<(f64, f64)> = samples
        .iter()
        .filter_map(|s| s.touch.map(|touch| (s.ratio, touch.vertical_in)))
        .collect();
    let (y_min, y_max) = padded_axis_window(touches.iter().map(|&(_, v)| v));

    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Timed model (best ratio {})", best.ratio), font())
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..RATIO_END, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Gear ratio")
        .y_desc("First touch height (in)")
        .label_style(font())
        .draw()?;

    chart.draw_series(
        touches
            .iter()
            .map(|&(ratio, vertical)| Circle::new((ratio, vertical), 2, BLUE.filled())),
    )?;

    if let Some(touch) = best.touch {
        chart.draw_series(std::iter::once(Circle::new(
            (best.ratio, touch.vertical_in),
            6,
            RED.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::BackdropTouch;
    use crate::core::sweep;
    use std::path::Path;

    fn reference_arm() -> LinkageGeometry {
        LinkageGeometry {
            bar1_length_in: 10.0,
            bar2_length_in: 10.0,
            arm_distance_in: 5.0,
            backdrop_angle_deg: 45.0,
        }
    }

    #[test]
    fn output_name_carries_model_and_extension() {
        let path = output_path(Path::new("plots"), ModelKind::Timed);
        assert!(path.starts_with("plots"));
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("utf-8 file name");
        assert!(name.starts_with("gear_ratio_timed_"), "name={name}");
        assert!(name.ends_with(".svg"), "name={name}");
    }

    #[test]
    fn static_sweep_renders_svg() {
        let geometry = reference_arm();
        let samples = sweep::static_samples(geometry);
        let best = linkage::solve(geometry);
        let mut buf = String::new();
        plot_static_sweep(
            SVGBackend::with_string(&mut buf, PLOT_SIZE),
            geometry,
            &samples,
            best,
        )
        .expect("plot should render");
        assert!(buf.contains("<svg"));
        assert!(buf.contains("arm height"));
    }

    #[test]
    fn timed_sweep_renders_without_touches() {
        let samples = vec![
            TimedSample {
                ratio: 0.0,
                touch: None,
            },
            TimedSample {
                ratio: 0.01,
                touch: None,
            },
        ];
        let best = TimedSolution {
            ratio: 0.0,
            touch: None,
        };
        let mut buf = String::new();
        plot_timed_sweep(SVGBackend::with_string(&mut buf, PLOT_SIZE), &samples, best)
            .expect("plot should render");
        assert!(buf.contains("<svg"));
    }

    #[test]
    fn timed_sweep_marks_best_touch() {
        let samples = vec![TimedSample {
            ratio: 1.0,
            touch: Some(BackdropTouch {
                time: 6.78,
                vertical_in: 11.4,
                horizontal_in: -11.4,
            }),
        }];
        let best = TimedSolution {
            ratio: 1.0,
            touch: samples[0].touch,
        };
        let mut buf = String::new();
        plot_timed_sweep(SVGBackend::with_string(&mut buf, PLOT_SIZE), &samples, best)
            .expect("plot should render");
        assert!(buf.contains("<circle"));
    }
}
