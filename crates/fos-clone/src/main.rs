//! fos-clone - duplicate an HTML template fragment
//!
//! Reads HTML from a file or stdin, clones the first top-level element with
//! every internal id prefixed, and prints the clone's outerHTML.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use fos_html::{HtmlParser, HtmlSerializer};
use fos_template::{IdRewriteConfig, IdRewriter};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: fos-clone <prefix> [--strip-root-id] [--pretty] [--config FILE] [INPUT]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    prefix: String,
    rename_root: bool,
    pretty: bool,
    config: Option<PathBuf>,
    input: Option<PathBuf>,
}

/// Parsed command line; `None` when help was requested
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<Args>> {
    let mut prefix = None;
    let mut rename_root = true;
    let mut pretty = false;
    let mut config = None;
    let mut input = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strip-root-id" => rename_root = false,
            "--pretty" => pretty = true,
            "--config" => {
                let path = args.next().context("--config needs a file")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ if prefix.is_none() => prefix = Some(arg),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument {arg}\n{USAGE}"),
        }
    }

    let Some(prefix) = prefix else {
        bail!(USAGE);
    };
    Ok(Some(Args {
        prefix,
        rename_root,
        pretty,
        config,
        input,
    }))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<IdRewriteConfig> {
    let Some(path) = path else {
        return Ok(IdRewriteConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .context("reading stdin")?;
            Ok(html)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };
    let config = load_config(args.config.as_ref())?;
    let html = read_input(args.input.as_ref())?;

    let (mut tree, roots) = HtmlParser::new().parse_fragment(&html)?;
    let Some(&source) = roots.first() else {
        bail!("input has no top-level element");
    };
    if roots.len() > 1 {
        tracing::info!("input has {} top-level elements, cloning the first", roots.len());
    }

    let clone = IdRewriter::new(config).clone_element(&mut tree, source, &args.prefix, args.rename_root)?;

    let serializer = if args.pretty {
        HtmlSerializer::pretty()
    } else {
        HtmlSerializer::new()
    };
    println!("{}", serializer.serialize_outer(&tree, clone));
    Ok(())
}
