use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dnshealth_lib::{Category, GradeThresholds};

#[derive(Parser, Debug)]
#[command(name = "dnshealth-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// fichier JSON du snapshot (réponse de /api/v1/domains/{id}/dnsCheck)
    #[arg(long, conflicts_with = "stdin")]
    pub snapshot: Option<String>,

    /// lit le snapshot depuis stdin
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// limite le rapport à une catégorie (répétable, ex: mx, dmarc, imap_srv)
    #[arg(long = "only")]
    pub only: Vec<String>,

    /// seuil du grade "good"
    #[arg(long = "good-at", allow_negative_numbers = true)]
    pub good_at: Option<i32>,

    /// seuil du grade "warning"
    #[arg(long = "warning-at", allow_negative_numbers = true)]
    pub warning_at: Option<i32>,

    /// fichier JSON des seuils ({"good_at": .., "warning_at": ..})
    #[arg(long)]
    pub thresholds: Option<String>,

    /// affiche les valeurs DNS observées par catégorie
    #[arg(long)]
    pub details: bool,

    /// propose des enregistrements pour ce domaine (catégories non "good")
    #[arg(long)]
    pub advise: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// liste les catégories et leurs clés
    Categories,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    /// Thresholds from `--thresholds`, then overridden by `--good-at`/`--warning-at`.
    pub fn grade_thresholds(&self) -> Result<GradeThresholds> {
        let base = match &self.thresholds {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("read thresholds file {path}"))?;
                GradeThresholds::from_json(&raw)
                    .with_context(|| format!("parse thresholds file {path}"))?
            }
            None => GradeThresholds::default(),
        };
        let good_at = self.good_at.unwrap_or(base.good_at());
        let warning_at = self.warning_at.unwrap_or(base.warning_at());
        Ok(GradeThresholds::new(good_at, warning_at)?)
    }

    /// Categories selected with `--only`, all of them when none is given.
    pub fn selected_categories(&self) -> Result<Vec<Category>> {
        if self.only.is_empty() {
            return Ok(Category::ALL.to_vec());
        }
        let mut selected = Vec::new();
        for key in &self.only {
            let Some(category) = Category::from_key(key) else {
                bail!("unknown --only category '{key}'");
            };
            if !selected.contains(&category) {
                selected.push(category);
            }
        }
        Ok(selected)
    }
}
