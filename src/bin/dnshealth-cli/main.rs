mod args;
mod output;

use anyhow::{Context, Result};
use dnshealth_lib::{Category, DomainDnsSnapshot, Palette, Severity, evaluate_with};
use std::io::Read;

use args::{Cli, Commands};
use output::{RenderOptions, render_human, render_json, selected};

#[cfg(feature = "with-tracing")]
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_snapshot(cli: &Cli) -> Result<Option<String>> {
    if cli.stdin {
        let mut raw = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut raw)
            .context("read stdin")?;
        return Ok(Some(raw));
    }
    match &cli.snapshot {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read snapshot file {path}"))?;
            Ok(Some(raw))
        }
        None => Ok(None),
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "with-tracing")]
    init_logging();

    let cli = Cli::parse();

    if let Some(Commands::Categories) = cli.cmd {
        for category in Category::ALL {
            println!("{:<16}{}", category.key(), category.label());
        }
        return Ok(());
    }

    let Some(raw) = read_snapshot(&cli)? else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    };

    let thresholds = cli.grade_thresholds()?;
    let categories = cli.selected_categories()?;
    let snapshot = DomainDnsSnapshot::from_json(&raw).context("parse snapshot")?;
    let report = evaluate_with(&snapshot, &thresholds);

    let options = RenderOptions {
        only: categories,
        details: cli.details,
        advise: cli.advise.clone(),
    };

    // sortie
    let rendered: Vec<u8> = match cli.format.as_str() {
        "human" => render_human(&report, &snapshot, &options)?.into_bytes(),
        "json" => {
            let mut s = render_json(&report, &snapshot, &options, &Palette::default())?;
            s.push('\n');
            s.into_bytes()
        }
        "csv" => {
            #[cfg(feature = "with-csv")]
            {
                output::render_csv(&report, &options)?
            }
            #[cfg(not(feature = "with-csv"))]
            {
                eprintln!("format=csv nécessite la feature 'with-csv'");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json|csv", other);
            std::process::exit(1);
        }
    };

    if let Some(path) = &cli.out {
        write_all_atomically(path, &rendered)?;
    } else {
        use std::io::Write;
        std::io::stdout().write_all(&rendered)?;
    }

    // codes de sortie : 0 OK, 2 catégorie(s) en erreur, 1 fatal
    if selected(&report, &options).any(|r| r.severity == Severity::Error) {
        std::process::exit(2);
    }
    Ok(())
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;
    let tmp = format!("{}.tmp", path);
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
