use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use gear_ratio_finder::config::{CONFIG_FILENAME, ModelKind, Settings};
use gear_ratio_finder::core::report::{self, Outcome};
use gear_ratio_finder::core::validation::{FormFields, MotorFormFields};
use gear_ratio_finder::core::{kinematics, linkage, sweep};
use gear_ratio_finder::{FinderError, Result, plot};

/// Finds the gear ratio that lets a two-bar arm reach the backdrop.
#[derive(Parser, Debug)]
#[command(name = "gear_ratio_finder", version)]
struct Cli {
    /// Which arm model to search with (defaults to the config file's choice).
    #[arg(short, long, value_enum)]
    model: Option<ModelKind>,

    /// Print every sampled ratio before the result.
    #[arg(long)]
    sweep: bool,

    /// Write an SVG of the sweep into this directory.
    #[arg(long, value_name = "DIR")]
    plot: Option<PathBuf>,

    /// Settings file.
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    config: PathBuf,

    /// More log output (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Bar 1, bar 2, backdrop distance (inches), backdrop angle (degrees),
    /// and motor RPM for the timed model. Prompts when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

enum Fields {
    Static(FormFields),
    Timed(MotorFormFields),
}

fn read_field(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Err(FinderError::UnexpectedEof);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn get_values_from_user(model: ModelKind) -> Result<Vec<String>> {
    model
        .field_labels()
        .iter()
        .map(|label| read_field(label))
        .collect()
}

fn fields_from_values(model: ModelKind, values: Vec<String>) -> Result<Fields> {
    let expected = model.field_labels().len();
    if values.len() != expected {
        return Err(FinderError::WrongValueCount {
            expected,
            got: values.len(),
            fields: model.usage_fields(),
        });
    }

    let mut values = values.into_iter();
    let mut next = || values.next().unwrap_or_default();
    let linkage = FormFields {
        bar1_length: next(),
        bar2_length: next(),
        arm_distance: next(),
        backdrop_angle: next(),
    };
    Ok(match model {
        ModelKind::Static => Fields::Static(linkage),
        ModelKind::Timed => Fields::Timed(MotorFormFields {
            linkage,
            motor_rpm: next(),
        }),
    })
}

fn init_logging(settings: &Settings, verbose: u8) {
    let level = settings.log_level.raised(verbose).as_tracing();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {e}");
    }
}

fn print_static_sweep(fields: &FormFields) {
    println!("ratio\tarm_height_in\tarm_length_in\ttouching");
    for sample in sweep::static_samples(fields.geometry()) {
        println!(
            "{:.2}\t{:.4}\t{:.4}\t{}",
            sample.ratio, sample.arm_height_in, sample.arm_length_in, sample.touching
        );
    }
}

fn print_timed_sweep(fields: &MotorFormFields) {
    println!("ratio\ttouch_time\ttouch_height_in\ttouch_horizontal_in");
    for sample in sweep::timed_samples(fields.geometry(), fields.motor()) {
        match sample.touch {
            Some(touch) => println!(
                "{:.2}\t{:.2}\t{:.4}\t{:.4}",
                sample.ratio, touch.time, touch.vertical_in, touch.horizontal_in
            ),
            None => println!("{:.2}\t-\t-\t-", sample.ratio),
        }
    }
}

fn write_plot(fields: &Fields, dir: &Path, model: ModelKind) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = plot::output_path(dir, model);
    match fields {
        Fields::Static(form) => {
            let geometry = form.geometry();
            let samples = sweep::static_samples(geometry);
            plot::write_static_svg(&path, geometry, &samples, linkage::solve(geometry))?;
        }
        Fields::Timed(form) => {
            let (geometry, motor) = (form.geometry(), form.motor());
            let samples = sweep::timed_samples(geometry, motor);
            plot::write_timed_svg(&path, &samples, kinematics::solve(geometry, motor))?;
        }
    }
    println!("Plot written to {}", path.display());
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;
    init_logging(&settings, cli.verbose);

    let model = cli.model.unwrap_or(settings.model);
    info!(model = model.name(), "searching gear ratios");

    let values = if cli.values.is_empty() {
        get_values_from_user(model)?
    } else {
        cli.values
    };
    debug!(?values, "raw inputs");
    let fields = fields_from_values(model, values)?;

    let outcome = match &fields {
        Fields::Static(form) => {
            if cli.sweep && form.is_valid() {
                print_static_sweep(form);
            }
            report::static_outcome(form)
        }
        Fields::Timed(form) => {
            if cli.sweep && form.is_valid() {
                print_timed_sweep(form);
            }
            report::timed_outcome(form)
        }
    };

    match outcome {
        Outcome::BestRatio(_) => {
            println!("\n{}", outcome.message());
            if let Some(dir) = cli.plot.as_ref().or(settings.plot_dir.as_ref()) {
                write_plot(&fields, dir, model)?;
            }
            Ok(())
        }
        Outcome::InvalidValues => Err(FinderError::InvalidValues),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
