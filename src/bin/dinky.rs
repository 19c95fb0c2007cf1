use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "dinky",
    about = "Render dinky markup to a PNG page",
    disable_version_flag = true
)]
struct Cli {
    /// Markup file to render.
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Markup text to render.
    #[arg(short = 'i', long = "inline")]
    inline: Option<String>,

    /// Output image path.
    #[arg(short = 'o', long = "out", default_value = "dinky.png")]
    out: PathBuf,

    /// Font file (defaults to a system sans-serif face).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Pixel density multiplier (layout unit is 14 * density).
    #[arg(long)]
    density: Option<u32>,

    /// JSON render config; flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the parsed document as JSON and exit without rendering.
    #[arg(long)]
    dump_tree: bool,

    /// Log layout decisions to stderr.
    #[arg(long)]
    verbose: bool,

    /// Print version.
    #[arg(short = 'v', long = "version")]
    version: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help lands here too and is not a failure.
            let code = u8::from(err.use_stderr());
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if cli.version {
        println!("dinky {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input = read_input(cli)?;

    let mut opts = match &cli.config {
        Some(path) => dinky::RenderOpts::from_path(path)?,
        None => dinky::RenderOpts::default(),
    };
    if let Some(density) = cli.density {
        opts.pixel_density = density;
    }
    if let Some(font) = &cli.font {
        opts.font_path = Some(font.clone());
    }
    opts.validate().context("Invalid render options")?;

    let mut doc = dinky::Document::build("Untitled", "Anonymous", dinky::DocumentType::Typical);
    doc.parse(&input).context("Failed to parse document")?;

    if cli.dump_tree {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let fonts = dinky::prepare_fonts(&opts).context("Failed to load font")?;
    let page = dinky::render_to_file(&doc, &fonts, &opts, &cli.out)
        .context("Failed to render document")?;

    eprintln!("Target: IMAGE {}x{} RGBA", page.width(), page.height());
    eprintln!("Wrote '{}'", cli.out.display());
    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    let file_empty = cli.file.as_deref().is_some_and(|p| p.as_os_str().is_empty());
    let inline_empty = cli.inline.as_deref().is_some_and(str::is_empty);
    if (cli.file.is_none() && cli.inline.is_none()) || file_empty || inline_empty {
        anyhow::bail!("No input was provided.");
    }

    match (&cli.file, &cli.inline) {
        (Some(_), Some(_)) => {
            anyhow::bail!("Two types of input were provided, only one is required.")
        }
        (Some(path), None) => read_file(path),
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => anyhow::bail!("No input was provided."),
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("File '{}' doesn't exist", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("read markup '{}'", path.display()))
}
