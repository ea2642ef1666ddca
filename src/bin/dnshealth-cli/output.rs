use anyhow::Result;
use dnshealth_lib::{
    Category, CheckResult, DomainDnsSnapshot, HealthReport, Observation, Outcome, Palette, Severity,
    observations, recommended_records,
};

#[derive(Debug, Default, Clone)]
pub struct RenderOptions {
    /// Categories to print; empty prints all of them.
    pub only: Vec<Category>,
    pub details: bool,
    pub advise: Option<String>,
}

/// Report entries kept by `options.only`, in display order.
pub fn selected<'a>(
    report: &'a HealthReport,
    options: &'a RenderOptions,
) -> impl Iterator<Item = &'a CheckResult> + 'a {
    report
        .iter()
        .filter(move |r| options.only.is_empty() || options.only.contains(&r.category))
}

#[derive(serde::Serialize)]
struct JsonEntry<'a> {
    category: &'static str,
    label: &'static str,
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<i32>,
    color: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    observations: Vec<Observation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    recommended: Vec<String>,
}

pub fn status_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "[GOOD]",
        Severity::Warning => "[WARN]",
        Severity::Bad => "[BAD]",
        Severity::Error => "[ERROR]",
    }
}

fn outcome_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Missing => "missing".to_string(),
        Outcome::Reachable => "reachable".to_string(),
        Outcome::Scored(score) => format!("score {score}"),
    }
}

fn advice_for(
    result: &CheckResult,
    snapshot: &DomainDnsSnapshot,
    options: &RenderOptions,
) -> Result<Vec<String>> {
    match &options.advise {
        Some(domain) if result.severity != Severity::Good => {
            Ok(recommended_records(result.category, domain, snapshot)?)
        }
        _ => Ok(Vec::new()),
    }
}

pub fn render_human(
    report: &HealthReport,
    snapshot: &DomainDnsSnapshot,
    options: &RenderOptions,
) -> Result<String> {
    let mut out = String::new();
    for result in selected(report, options) {
        out.push_str(&format!(
            "{:<8}{} :: {}\n",
            status_tag(result.severity),
            result.label(),
            outcome_text(result.outcome)
        ));
        if options.details {
            for observation in observations(result.category, snapshot) {
                let value = observation.value.as_deref().unwrap_or("unresolvable");
                out.push_str(&format!("        {}: {}\n", observation.label, value));
            }
        }
        for record in advice_for(result, snapshot, options)? {
            out.push_str(&format!("        publish: {record}\n"));
        }
    }
    Ok(out)
}

pub fn render_json(
    report: &HealthReport,
    snapshot: &DomainDnsSnapshot,
    options: &RenderOptions,
    palette: &Palette,
) -> Result<String> {
    let mut entries = Vec::new();
    for result in selected(report, options) {
        entries.push(JsonEntry {
            category: result.category.key(),
            label: result.label(),
            severity: result.severity,
            score: result.outcome.score(),
            color: palette.color(result.severity),
            observations: if options.details {
                observations(result.category, snapshot)
            } else {
                Vec::new()
            },
            recommended: advice_for(result, snapshot, options)?,
        });
    }
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(feature = "with-csv")]
pub fn render_csv(report: &HealthReport, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["category", "label", "severity", "score"])?;
    for result in selected(report, options) {
        let score = result
            .outcome
            .score()
            .map(|s| s.to_string())
            .unwrap_or_default();
        wtr.write_record([
            result.category.key(),
            result.label(),
            result.severity.as_str(),
            score.as_str(),
        ])?;
    }
    Ok(wtr.into_inner()?)
}
