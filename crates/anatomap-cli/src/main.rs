use anatomap::input::{config_from_value, entries_from_value};
use anatomap::render::raster::{RasterError, RasterOptions};
use anatomap::render::{
    HeadlessError, HeadlessRenderer, RenderError, SvgRenderOptions, sanitize_svg_id,
};
use anatomap::validate::{has_errors, report_findings, validate_render_input};
use anatomap::{
    AssetLibrary, DocumentFormat, Finding, Gender, MergeContext, MergedSegment, RenderConfig,
    SlugCatalog, UserEntry, View, build_side_buckets, resolve_fill,
};
use futures::executor::block_on;
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Load(anatomap::Error),
    Render(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
    NoColor,
    Invalid { errors: usize },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Load(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoColor => write!(f, "color scale produced no color"),
            CliError::Invalid { errors } => write!(f, "validation failed: {errors} error(s)"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<anatomap::Error> for CliError {
    fn from(value: anatomap::Error) -> Self {
        Self::Load(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Render(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Merge,
    Validate,
    Resolve,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl RenderFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    assets: Option<String>,
    data: Option<String>,
    config: Option<String>,
    gender: Option<Gender>,
    view: Option<View>,
    pretty: bool,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    diagram_id: Option<String>,
    out: Option<String>,
    value: Option<f64>,
}

fn usage() -> &'static str {
    "anatomap-cli\n\
\n\
USAGE:\n\
  anatomap-cli [render] --assets <path> [--data <path>|-] [--config <path>] [--gender male|female] [--view front|back] [--format svg|png|jpg|pdf] [--scale <n>] [--background <css-color>] [--id <diagram-id>] [--out <path>]\n\
  anatomap-cli merge --assets <path> [--data <path>|-] [--config <path>] [--gender male|female] [--view front|back] [--pretty]\n\
  anatomap-cli validate [--data <path>|-] [--config <path>] [--assets <path>] [--pretty]\n\
  anatomap-cli resolve <value> [--config <path>]\n\
\n\
NOTES:\n\
  - Data and config files may be JSON, YAML (.yaml/.yml) or JSON5 (.json5).\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG/PDF output defaults to writing next to the data file (or ./out.<ext>).\n\
  - validate prints findings as JSON and exits with status 4 when any is an error.\n\
  - Set RUST_LOG (e.g. RUST_LOG=anatomap_core=warn) to control diagnostics on stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "merge" => args.command = Command::Merge,
            "validate" => args.command = Command::Validate,
            "resolve" => args.command = Command::Resolve,
            "--pretty" => args.pretty = true,
            "--assets" => args.assets = Some(next_value(&mut it)?.clone()),
            "--data" => args.data = Some(next_value(&mut it)?.clone()),
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--gender" => {
                let gender = next_value(&mut it)?;
                args.gender = Some(gender.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--view" => {
                let view = next_value(&mut it)?;
                args.view = Some(view.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--id" => args.diagram_id = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            // Negative numbers are positional values, not flags.
            other if other.starts_with('-') && other.parse::<f64>().is_err() => {
                return Err(CliError::Usage(usage()));
            }
            other => {
                if args.value.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.value = Some(other.parse().map_err(|_| CliError::Usage(usage()))?);
            }
        }
    }

    if matches!(args.command, Command::Resolve) != args.value.is_some() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(input)?)
}

fn read_document(input: &str, context: &'static str) -> Result<Value, CliError> {
    let text = read_input(input)?;
    let ext = Path::new(input).extension().and_then(|e| e.to_str());
    Ok(DocumentFormat::from_extension(ext).parse_value(&text, context)?)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn default_raster_out_path(data: Option<&str>, ext: &str) -> PathBuf {
    match data {
        Some(path) if path != "-" => PathBuf::from(path).with_extension(ext),
        _ => PathBuf::from(format!("out.{ext}")),
    }
}

/// Loaded inputs plus every finding raised while shape-checking them.
struct Inputs {
    entries: Vec<UserEntry>,
    config: RenderConfig,
    findings: Vec<Finding>,
}

fn load_inputs(args: &Args) -> Result<Inputs, CliError> {
    let mut findings = Vec::new();

    let mut config = match args.config.as_deref() {
        Some(path) => {
            let (config, config_findings) =
                config_from_value(read_document(path, "render config")?)?;
            findings.extend(config_findings);
            config
        }
        None => RenderConfig::default(),
    };
    if let Some(gender) = args.gender {
        config.gender = gender;
    }
    if let Some(view) = args.view {
        config.view = view;
    }

    let entries = match args.data.as_deref() {
        Some(path) => {
            let parsed = entries_from_value(&read_document(path, "entries")?);
            findings.extend(parsed.findings);
            parsed.entries
        }
        None => Vec::new(),
    };

    Ok(Inputs {
        entries,
        config,
        findings,
    })
}

fn load_assets(path: Option<&str>) -> Result<AssetLibrary, CliError> {
    let path = path.ok_or(CliError::Usage(usage()))?;
    Ok(AssetLibrary::from_json_str(&read_input(path)?)?)
}

fn run_render(args: &Args) -> Result<(), CliError> {
    let assets = load_assets(args.assets.as_deref())?;
    let inputs = load_inputs(args)?;
    report_findings(&inputs.findings, inputs.config.diagnostics);

    let mut svg = SvgRenderOptions::default();
    if let Some(id) = args.diagram_id.as_deref() {
        svg.diagram_id = Some(sanitize_svg_id(id));
    }
    let raster = RasterOptions {
        scale: args.render_scale,
        background: args.background.clone(),
        ..Default::default()
    };
    if args.render_format == RenderFormat::Svg {
        svg.scale = f64::from(args.render_scale);
        svg.background = args.background.clone();
    }

    let renderer = HeadlessRenderer::new(assets)
        .with_config(inputs.config)
        .with_svg_options(svg);

    let bytes = match args.render_format {
        RenderFormat::Svg => {
            let svg = block_on(renderer.render_svg(&inputs.entries))?;
            return write_text(&svg, args.out.as_deref());
        }
        RenderFormat::Png => renderer.render_png_sync(&inputs.entries, &raster)?,
        RenderFormat::Jpeg => renderer.render_jpeg_sync(&inputs.entries, &raster)?,
        RenderFormat::Pdf => renderer.render_pdf_sync(&inputs.entries)?,
    };
    let out = args.out.as_deref().map(PathBuf::from).unwrap_or_else(|| {
        default_raster_out_path(args.data.as_deref(), args.render_format.extension())
    });
    std::fs::write(&out, bytes)?;
    tracing::info!(path = %out.display(), "wrote {}", args.render_format.extension());
    Ok(())
}

#[derive(Serialize)]
struct VariantOut<'a> {
    #[serde(flatten)]
    segment: &'a MergedSegment<'a>,
    fill: Option<String>,
}

#[derive(Serialize)]
struct SegmentOut<'a> {
    slug: &'a str,
    disabled: bool,
    both: VariantOut<'a>,
    left: VariantOut<'a>,
    right: VariantOut<'a>,
}

fn variant_out<'a>(segment: &'a MergedSegment<'a>, config: &RenderConfig) -> VariantOut<'a> {
    VariantOut {
        segment,
        fill: resolve_fill(segment, config),
    }
}

fn run_merge(args: &Args) -> Result<(), CliError> {
    let assets = load_assets(args.assets.as_deref())?;
    let inputs = load_inputs(args)?;
    report_findings(&inputs.findings, inputs.config.diagnostics);
    let config = &inputs.config;

    let set = assets
        .get(config.gender, config.view)
        .ok_or(CliError::Render(HeadlessError::Render(
            RenderError::MissingAssetSet {
                gender: config.gender,
                view: config.view,
            },
        )))?;

    let buckets = build_side_buckets(&inputs.entries);
    let scale = config.effective_scale();
    let ctx = MergeContext::new(&config.colors, &scale);
    let merged: Vec<_> = set
        .segments
        .iter()
        .filter(|s| !config.is_hidden(&s.slug))
        .map(|asset| ctx.merge_for_segment(asset, &buckets))
        .collect();

    let out: Vec<_> = merged
        .iter()
        .map(|v| SegmentOut {
            slug: v.both.slug,
            disabled: config.is_disabled(v.both.slug),
            both: variant_out(&v.both, config),
            left: variant_out(&v.left, config),
            right: variant_out(&v.right, config),
        })
        .collect();
    write_json(&out, args.pretty)
}

fn run_validate(args: &Args) -> Result<(), CliError> {
    let inputs = load_inputs(args)?;
    let catalog = match args.assets.as_deref() {
        Some(path) => SlugCatalog::from_assets(&load_assets(Some(path))?),
        None => SlugCatalog::default(),
    };

    let mut findings = inputs.findings;
    findings.extend(validate_render_input(
        &inputs.entries,
        &inputs.config,
        &catalog,
    ));
    write_json(&findings, args.pretty)?;

    if has_errors(&findings) {
        return Err(CliError::Invalid {
            errors: findings.iter().filter(|f| f.is_error()).count(),
        });
    }
    Ok(())
}

fn run_resolve(args: &Args) -> Result<(), CliError> {
    let value = args.value.ok_or(CliError::Usage(usage()))?;
    let inputs = load_inputs(args)?;
    report_findings(&inputs.findings, inputs.config.diagnostics);
    let color = inputs
        .config
        .effective_scale()
        .resolve_hex(value)
        .ok_or(CliError::NoColor)?;
    println!("{color}");
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Render => run_render(&args),
        Command::Merge => run_merge(&args),
        Command::Validate => run_validate(&args),
        Command::Resolve => run_resolve(&args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err @ CliError::Invalid { .. }) => {
            eprintln!("{err}");
            std::process::exit(4);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
