//! CLI command definitions, routing, and tracing setup.

use std::io::Read;
use std::path::{Path, PathBuf};

use brandforge_core::pipeline::{Forge, ProgressReporter, build_blueprint};
use brandforge_core::sink::BlueprintSink;
use brandforge_shared::{AppConfig, Blueprint, Brief, init_config, load_config, load_config_from};
use brandforge_storage::Storage;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// BrandForge: turn a marketing brief into a website blueprint.
#[derive(Parser)]
#[command(
    name = "brandforge",
    version,
    about = "Turn a marketing brief into a website blueprint: site map, copy, visuals and integrations.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.brandforge/brandforge.toml.
    #[arg(long, global = true, env = "BRANDFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate a blueprint from a brief file.
    Forge {
        /// Brief file (.json or .toml), or `-` for JSON on stdin.
        brief: PathBuf,

        /// Write the blueprint JSON here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Do not save the blueprint to the local database.
        #[arg(long)]
        no_persist: bool,

        /// Skip hero image generation and use the fallback image.
        #[arg(long)]
        no_image: bool,
    },

    /// List stored blueprints, newest first.
    List {
        /// Maximum number of blueprints to show.
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },

    /// Print a stored blueprint as JSON.
    Show {
        /// Blueprint ID as printed by `forge` or `list`.
        id: String,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so stdout
/// carries only blueprint JSON.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "brandforge=info",
        1 => "brandforge=debug",
        _ => "brandforge=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Forge {
            brief,
            out,
            no_persist,
            no_image,
        } => cmd_forge(config_path, &brief, out.as_deref(), no_persist, no_image).await,
        Command::List { limit } => cmd_list(config_path, limit).await,
        Command::Show { id } => cmd_show(config_path, &id).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show(config_path).await,
        },
    }
}

/// Load config from `--config` if given, else from the default location.
fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(p) => load_config_from(p)?,
        None => load_config()?,
    };
    Ok(config)
}

/// Parse a brief from a `.toml` file, or JSON from any other file or stdin.
fn load_brief(path: &Path) -> Result<Brief> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .wrap_err("failed to read brief from stdin")?;
        return serde_json::from_str(&input).wrap_err("invalid JSON brief on stdin");
    }

    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read brief {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content).wrap_err_with(|| format!("invalid TOML brief {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .wrap_err_with(|| format!("invalid JSON brief {}", path.display()))
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_forge(
    config_path: Option<&Path>,
    brief_path: &Path,
    out: Option<&Path>,
    no_persist: bool,
    no_image: bool,
) -> Result<()> {
    let config = resolve_config(config_path)?;
    let brief = load_brief(brief_path)?;

    let forge = if no_image {
        Forge::new()
    } else {
        Forge::from_config(&config.image)
    };

    // Storage trouble never blocks generation
    let storage = if no_persist || !config.storage.enabled {
        None
    } else {
        let db_path = config.storage.resolved_db_path()?;
        match Storage::open(&db_path).await {
            Ok(storage) => Some(storage),
            Err(e) => {
                warn!(path = %db_path.display(), error = %e, "blueprint storage unavailable");
                None
            }
        }
    };

    info!(
        brand = %brief.brand_name,
        image = forge.has_image_generator(),
        persist = storage.is_some(),
        "forging blueprint"
    );

    let reporter = CliProgress::new();
    let sink = storage.as_ref().map(|s| s as &dyn BlueprintSink);

    let outcome = match build_blueprint(&forge, &brief, sink, &reporter).await {
        Ok(outcome) => outcome,
        Err(e) => {
            reporter.spinner.finish_and_clear();
            return Err(e.into());
        }
    };

    let json = serde_json::to_string_pretty(&outcome.blueprint)?;
    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{json}"),
    }

    print_summary(&outcome.blueprint);
    match &outcome.persisted.id {
        Some(id) => eprintln!("  ID:       {id}"),
        None => eprintln!("  ID:       (not saved)"),
    }
    if let Some(path) = out {
        eprintln!("  Output:   {}", path.display());
    }
    eprintln!("  Time:     {:.2}s", outcome.elapsed.as_secs_f64());
    eprintln!();

    Ok(())
}

fn print_summary(blueprint: &Blueprint) {
    let arch = &blueprint.architect;
    eprintln!();
    eprintln!("  Blueprint ready!");
    eprintln!("  Brand:    {}", blueprint.brief.brand_name);
    eprintln!("  Industry: {}", arch.industry);
    eprintln!("  Theme:    {}", arch.theme);
    eprintln!(
        "  Pages:    {}",
        arch.site_map
            .iter()
            .map(|p| p.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if let Some(stripe) = &blueprint.integration.stripe {
        eprintln!("  Products: {}", stripe.products.len());
    }
    if let Some(booking) = &blueprint.integration.booking {
        eprintln!("  Booking:  {}", booking.link);
    }
}

/// Open the blueprint database read-only, or `None` if nothing was stored yet.
async fn open_store(config_path: Option<&Path>) -> Result<Option<Storage>> {
    let config = resolve_config(config_path)?;
    let db_path = config.storage.resolved_db_path()?;
    if !db_path.exists() {
        return Ok(None);
    }
    Ok(Some(Storage::open_readonly(&db_path).await?))
}

async fn cmd_list(config_path: Option<&Path>, limit: u32) -> Result<()> {
    let Some(storage) = open_store(config_path).await? else {
        println!("No blueprints stored yet.");
        return Ok(());
    };

    let records = storage.list_blueprints(limit).await?;
    let total = storage.count_blueprints().await?;
    info!(shown = records.len(), total, "listing blueprints");

    if records.is_empty() {
        println!("No blueprints stored yet.");
        return Ok(());
    }

    println!("{:<36}  {:<25}  {:<18}  {}", "ID", "CREATED", "INDUSTRY", "BRAND");
    for record in &records {
        println!(
            "{:<36}  {:<25}  {:<18}  {}",
            record.id, record.created_at, record.industry, record.brand_name
        );
    }
    if (records.len() as u64) < total {
        println!("({} of {total} shown)", records.len());
    }

    Ok(())
}

async fn cmd_show(config_path: Option<&Path>, id: &str) -> Result<()> {
    let storage = open_store(config_path)
        .await?
        .ok_or_else(|| eyre!("no blueprints stored yet"))?;

    let blueprint = storage
        .get_blueprint(id)
        .await?
        .ok_or_else(|| eyre!("no blueprint with id '{id}'"))?;

    println!("{}", serde_json::to_string_pretty(&blueprint)?);
    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _blueprint: &Blueprint) {
        self.spinner.finish_and_clear();
    }
}
