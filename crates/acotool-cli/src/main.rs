use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;

#[derive(Parser, Debug)]
#[command(name = "acotool")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("ACOTOOL_BUILD_COMMIT"), " ", env!("ACOTOOL_BUILD_DATE"), ")"
))]
#[command(
    about = "Convert Adobe Color (.aco) swatch files into text listings and rebuilt .aco files.",
    long_about = None,
    after_help = "Examples:\n  acotool convert pantone.aco -o exported\n  acotool convert 'swatches/*.aco' -o exported --text-only\n  acotool show pantone.aco --json --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert .aco files into a .txt listing and a rebuilt .aco copy.
    Convert {
        /// Input .aco files (glob patterns allowed)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory for the generated files
        #[arg(short = 'o', long, default_value = ".")]
        out_dir: PathBuf,

        /// Write the text listing only, skip the rebuilt .aco
        #[arg(long)]
        text_only: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Print the swatch listing for a single file to stdout.
    Show {
        /// Path to a .aco file
        input: PathBuf,

        /// Emit JSON records instead of the text listing
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            inputs,
            out_dir,
            text_only,
            quiet,
        } => cmd_convert(inputs, out_dir, text_only, quiet),
        Commands::Show {
            input,
            json,
            pretty,
        } => cmd_show(input, json, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_convert(
    inputs: Vec<PathBuf>,
    out_dir: PathBuf,
    text_only: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved = resolve_inputs(&inputs)?;

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))
        .map_err(CliError::from)?;

    let mut failures = 0usize;
    for input in &resolved {
        if let Err(err) = convert_one(input, &out_dir, text_only, quiet) {
            failures += 1;
            eprintln!("error: {}: {:#}", input.display(), err);
        }
    }

    if failures > 0 {
        return Err(CliError::new(
            format!("{} of {} files failed", failures, resolved.len()),
            Some("failing files are reported above; the rest were converted".to_string()),
        ));
    }
    Ok(())
}

fn convert_one(input: &Path, out_dir: &Path, text_only: bool, quiet: bool) -> Result<()> {
    validate_input_file(input)?;

    let bytes =
        fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let file = acotool_core::decode(&bytes)
        .with_context(|| format!("failed to decode {}", input.display()))?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "swatches".to_string());

    // A failing conversion must leave no partial output: refuse the
    // overwrite and re-encode before the first write.
    let rebuilt = if text_only {
        None
    } else {
        let rebuilt_path = out_dir.join(format!("{stem}.aco"));
        ensure_distinct(input, &rebuilt_path)?;
        let encoded =
            acotool_core::encode(&file).context("failed to re-encode swatches")?;
        Some((rebuilt_path, encoded))
    };

    let listing_path = out_dir.join(format!("{stem}.txt"));
    fs::write(&listing_path, acotool_core::render_listing(&file))
        .with_context(|| format!("failed to write {}", listing_path.display()))?;

    if let Some((rebuilt_path, encoded)) = rebuilt {
        fs::write(&rebuilt_path, encoded)
            .with_context(|| format!("failed to write {}", rebuilt_path.display()))?;
    }

    if !quiet {
        eprintln!("OK: {} -> {} swatches", input.display(), file.len());
    }
    Ok(())
}

fn cmd_show(input: PathBuf, json: bool, pretty: bool) -> Result<(), CliError> {
    validate_input_file(&input)?;

    let bytes = fs::read(&input)
        .with_context(|| format!("failed to read {}", input.display()))
        .map_err(CliError::from)?;
    let file = acotool_core::decode(&bytes)
        .with_context(|| format!("failed to decode {}", input.display()))
        .map_err(CliError::from)?;

    if json {
        let records = acotool_core::listing_records(&file);
        let rendered = if pretty {
            serde_json::to_string_pretty(&records)
        } else {
            serde_json::to_string(&records)
        }
        .context("JSON serialization failed")
        .map_err(CliError::from)?;
        println!("{}", rendered);
    } else {
        print!("{}", acotool_core::render_listing(&file));
    }
    Ok(())
}

/// The rebuilt .aco must never clobber the file it came from.
fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("failed to resolve {}", input.display()))?;
    let output_abs = output
        .parent()
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose()
        .with_context(|| format!("failed to resolve {}", output.display()))?;
    if let Some(out_dir) = output_abs {
        let target = out_dir.join(
            output
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("invalid output path"))?,
        );
        if target == input_abs {
            anyhow::bail!(
                "rebuilt output would overwrite the input; use a different --out-dir"
            );
        }
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("input file not found: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("input is not a file: {}", input.display());
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "aco" {
        anyhow::bail!("unsupported input format: {}", input.display());
    }
    Ok(())
}

fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut resolved = Vec::new();
    for input in inputs {
        let pattern = input.to_string_lossy();
        if !is_glob_pattern(&pattern) {
            resolved.push(input.clone());
            continue;
        }

        let paths = glob(&pattern).map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err.msg)),
            )
        })?;
        let mut matched = 0usize;
        for entry in paths {
            let path = entry.map_err(|err| {
                CliError::new(
                    format!("invalid input pattern '{}'", pattern),
                    Some(format!("pattern error: {}", err)),
                )
            })?;
            if path.is_file() {
                resolved.push(path);
                matched += 1;
            }
        }
        if matched == 0 {
            return Err(CliError::new(
                format!("no files match pattern '{}'", pattern),
                Some("check the path or quote the pattern; expected .aco files".to_string()),
            ));
        }
    }
    Ok(resolved)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
