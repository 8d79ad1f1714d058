use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use clap_complete::Shell;

use swag2md_core::config::{self, CONFIG_FILE_NAME, Swag2mdConfig};
use swag2md_core::parse::{self, spec::Document};
use swag2md_core::{Analysis, Analyzer, Locale, RenderOptions, TermDictionary};

#[derive(Parser)]
#[command(
    name = "swag2md",
    about = "Render an OpenAPI 3 / Swagger 2 document as Markdown",
    version
)]
#[command(group(ArgGroup::new("source").args(["local", "web"])))]
struct Cli {
    /// Path to a local API description (JSON, or YAML by extension)
    #[arg(long, value_name = "PATH")]
    local: Option<PathBuf>,

    /// URL of an API description to fetch
    #[arg(long, value_name = "URL")]
    web: Option<String>,

    /// Output language (en | zh)
    #[arg(long)]
    lang: Option<String>,

    /// Write Markdown to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Custom term dictionary (JSON object of section labels)
    #[arg(long, value_name = "PATH")]
    terms: Option<PathBuf>,

    /// Config file
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Abort on a malformed parameter instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,

    /// Overwrite an existing config file with --init
    #[arg(long, requires = "init")]
    force: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

/// Where the API description comes from.
enum Source {
    Local(PathBuf),
    Web(String),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "swag2md", &mut std::io::stdout());
        return Ok(());
    }
    if cli.init {
        return cmd_init(&cli.config, cli.force);
    }

    let cfg = config::load_config(&cli.config)
        .map_err(|e| anyhow::anyhow!(e))?
        .unwrap_or_default();
    let cfg = merge_flags(&cli, cfg);

    let source = resolve_source(&cli, &cfg)?;
    let doc = load_document(&source)?;
    let analyzer = build_analyzer(&cfg)?;

    let analysis = analyzer
        .analyze_document(&doc)
        .with_context(|| format!("failed to convert {}", source.describe()))?;
    report_warnings(&analysis);

    match cfg.output {
        Some(ref out) => {
            let path = Path::new(out);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(path, &analysis.markdown)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{}", analysis.markdown),
    }
    Ok(())
}

/// Flags take precedence over the config file.
fn merge_flags(cli: &Cli, mut cfg: Swag2mdConfig) -> Swag2mdConfig {
    if let Some(ref local) = cli.local {
        cfg.input = Some(local.display().to_string());
        cfg.url = None;
    }
    if let Some(ref web) = cli.web {
        cfg.url = Some(web.clone());
        cfg.input = None;
    }
    if let Some(ref lang) = cli.lang {
        cfg.lang = lang.clone();
    }
    if let Some(ref out) = cli.out {
        cfg.output = Some(out.display().to_string());
    }
    if let Some(ref terms) = cli.terms {
        cfg.terms = Some(terms.display().to_string());
    }
    cfg.strict |= cli.strict;
    cfg
}

fn resolve_source(cli: &Cli, cfg: &Swag2mdConfig) -> Result<Source> {
    match (&cfg.input, &cfg.url) {
        (Some(input), _) => Ok(Source::Local(PathBuf::from(input))),
        (None, Some(url)) => Ok(Source::Web(url.clone())),
        (None, None) => anyhow::bail!(
            "no input given. Pass --local <path> or --web <url>, or set `input` in {}",
            cli.config.display()
        ),
    }
}

impl Source {
    fn describe(&self) -> String {
        match self {
            Source::Local(path) => path.display().to_string(),
            Source::Web(url) => url.clone(),
        }
    }

    fn is_yaml(&self) -> bool {
        let name = match self {
            Source::Local(path) => path.to_string_lossy().into_owned(),
            Source::Web(url) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
        };
        name.ends_with(".yaml") || name.ends_with(".yml")
    }

    fn read(&self) -> Result<String> {
        match self {
            Source::Local(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            Source::Web(url) => {
                log::debug!("fetching {url}");
                let mut response = ureq::get(url)
                    .call()
                    .with_context(|| format!("failed to fetch {url}"))?;
                response
                    .body_mut()
                    .read_to_string()
                    .with_context(|| format!("failed to read response body from {url}"))
            }
        }
    }
}

fn load_document(source: &Source) -> Result<Document> {
    let content = source.read()?;
    let parsed = if source.is_yaml() {
        parse::from_yaml(&content)
    } else {
        parse::from_json(&content)
    };
    parsed.with_context(|| format!("failed to decode {}", source.describe()))
}

fn build_analyzer(cfg: &Swag2mdConfig) -> Result<Analyzer> {
    let locale: Locale = cfg.lang.parse()?;
    let terms = match cfg.terms {
        Some(ref path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read term dictionary {path}"))?;
            TermDictionary::from_json(locale, &text)?
        }
        None => TermDictionary::builtin(locale)?,
    };
    let options = RenderOptions::default().with_item_policy(cfg.item_policy());
    Ok(Analyzer::with_options(terms, options))
}

fn report_warnings(analysis: &Analysis) {
    if analysis.warnings.is_empty() {
        return;
    }
    eprintln!("skipped {} malformed item(s):", analysis.warnings.len());
    for warning in &analysis.warnings {
        eprintln!("  warning: {warning}");
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    fs::write(path, config::default_config_content())
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Created {}", path.display());
    Ok(())
}
