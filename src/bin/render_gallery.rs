#[cfg(feature = "cairo-backend")]
use dashboard_charts::api::{ChartData, ChartKind, ChartOptions};
#[cfg(feature = "cairo-backend")]
use dashboard_charts::core::{ScatterPoint, VALUE_HEADROOM, series_max};
#[cfg(feature = "cairo-backend")]
use dashboard_charts::render::{CairoSurface, DashPattern, palette};
#[cfg(feature = "cairo-backend")]
use dashboard_charts::synthetic::{
    seeded_unit, synthetic_band, synthetic_series, utilization_grid,
};
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_ROOT: &str = "target/render_gallery";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: u32 = 480;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: u32 = 240;

#[cfg(feature = "cairo-backend")]
struct CliArgs {
    output_root: PathBuf,
    width: u32,
    height: u32,
    only_kind: Option<String>,
}

#[cfg(feature = "cairo-backend")]
struct GalleryEntry {
    file_stem: &'static str,
    kind: ChartKind,
    layers: Vec<(ChartData, ChartOptions)>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = dashboard_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use dashboard_charts::api::draw;

    let args = parse_args()?;
    fs::create_dir_all(&args.output_root).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_root.display()
        )
    })?;

    let mut generated_count = 0usize;
    for entry in gallery_entries() {
        if args
            .only_kind
            .as_ref()
            .is_some_and(|only| only != entry.file_stem)
        {
            continue;
        }

        let mut surface = CairoSurface::new(args.width, args.height)
            .map_err(|err| format!("`{}` surface creation failed: {err}", entry.file_stem))?;
        for (data, options) in &entry.layers {
            draw(entry.kind, &mut surface, data, options)
                .map_err(|err| format!("`{}` draw failed: {err}", entry.file_stem))?;
        }

        let output_path = args.output_root.join(format!("{}.png", entry.file_stem));
        surface
            .write_png(&output_path)
            .map_err(|err| format!("`{}` png write failed: {err}", entry.file_stem))?;
        println!("wrote {}", output_path.display());
        generated_count += 1;
    }

    if generated_count == 0 {
        return Err("no chart kind matched the requested filter".to_owned());
    }
    println!("generated {generated_count} chart png(s)");
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn gallery_entries() -> Vec<GalleryEntry> {
    let revenue = synthetic_series(24, 100.0, 18.0, 1.5, 3.0);
    let forecast = synthetic_series(24, 95.0, 10.0, 2.0, 11.0);
    let revenue_band = synthetic_band(&revenue, 0.12);
    let segments = synthetic_series(6, 40.0, 30.0, 0.0, 21.0);
    let scatter: Vec<ScatterPoint> = (0..40)
        .map(|i| {
            let x = seeded_unit(f64::from(i) + 100.0) * 100.0;
            ScatterPoint::new(x, x * 0.6 + seeded_unit(f64::from(i) + 300.0) * 30.0)
        })
        .collect();

    // Both line layers share one value axis.
    let combined: Vec<f64> = revenue_band
        .iter()
        .map(|bound| bound.upper)
        .chain(forecast.iter().copied())
        .collect();
    let line_max = series_max(&combined).unwrap_or(1.0) * VALUE_HEADROOM;
    let overlay_options = ChartOptions::new()
        .with_value_max(line_max)
        .overlay()
        .with_stroke_color(palette::ALT_BLUE)
        .with_dash_pattern(DashPattern::new([6.0, 4.0]).unwrap_or_default());

    vec![
        GalleryEntry {
            file_stem: "line",
            kind: ChartKind::Line,
            layers: vec![
                (
                    ChartData::banded(revenue, revenue_band),
                    ChartOptions::new().with_value_max(line_max),
                ),
                (ChartData::series(forecast.clone()), overlay_options),
            ],
        },
        GalleryEntry {
            file_stem: "area",
            kind: ChartKind::Area,
            layers: vec![(ChartData::series(forecast), ChartOptions::new())],
        },
        GalleryEntry {
            file_stem: "sparkline",
            kind: ChartKind::Sparkline,
            layers: vec![(
                ChartData::series(synthetic_series(30, 10.0, 4.0, 0.2, 5.0)),
                ChartOptions::new(),
            )],
        },
        GalleryEntry {
            file_stem: "bar",
            kind: ChartKind::Bar,
            layers: vec![(ChartData::series(segments.clone()), ChartOptions::new())],
        },
        GalleryEntry {
            file_stem: "grouped_bar",
            kind: ChartKind::GroupedBar,
            layers: vec![(
                ChartData::MultiSeries(vec![
                    synthetic_series(8, 50.0, 20.0, 1.0, 41.0),
                    synthetic_series(8, 45.0, 20.0, 1.5, 43.0),
                ]),
                ChartOptions::new(),
            )],
        },
        GalleryEntry {
            file_stem: "doughnut",
            kind: ChartKind::Doughnut,
            layers: vec![(
                ChartData::series(vec![25.0, 30.0, 20.0, 15.0, 10.0]),
                ChartOptions::new(),
            )],
        },
        GalleryEntry {
            file_stem: "scatter",
            kind: ChartKind::Scatter,
            layers: vec![(ChartData::Points(scatter), ChartOptions::new())],
        },
        GalleryEntry {
            file_stem: "heatmap",
            kind: ChartKind::Heatmap,
            layers: vec![(ChartData::Matrix(utilization_grid(3, 12)), ChartOptions::new())],
        },
        GalleryEntry {
            file_stem: "treemap",
            kind: ChartKind::Treemap,
            layers: vec![(
                ChartData::series(segments),
                ChartOptions::new().with_labels(["EMEA", "NA", "LATAM", "APAC", "ANZ", "Other"]),
            )],
        },
    ]
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut output_root = PathBuf::from(DEFAULT_OUTPUT_ROOT);
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut only_kind: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output-root" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-root".to_owned())?;
                output_root = PathBuf::from(value);
            }
            "--width" => width = parse_dimension(args.next(), "--width")?,
            "--height" => height = parse_dimension(args.next(), "--height")?,
            "--only" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --only".to_owned())?;
                only_kind = Some(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        output_root,
        width,
        height,
        only_kind,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_dimension(value: Option<String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<u32>()
        .ok()
        .filter(|parsed| *parsed > 0)
        .ok_or_else(|| format!("{flag} expects a positive integer, got `{value}`"))
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_gallery -- [options]\n\
         \n\
         Options:\n\
         \x20 --output-root <dir>  Output directory (default: {DEFAULT_OUTPUT_ROOT})\n\
         \x20 --width <px>         Surface width (default: {DEFAULT_WIDTH})\n\
         \x20 --height <px>        Surface height (default: {DEFAULT_HEIGHT})\n\
         \x20 --only <name>        Render a single chart (line, area, sparkline, bar,\n\
         \x20                      grouped_bar, doughnut, scatter, heatmap, treemap)\n\
         \x20 -h, --help           Show this help"
    )
}
