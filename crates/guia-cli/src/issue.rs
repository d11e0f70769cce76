//! # Issue Subcommand
//!
//! Issues a transfer document for a student and prints the short
//! identifier, integrity digest, and QR payload. The issuing school and
//! city default to the signed-in director's profile.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use guia_core::IssueDate;
use guia_docs::{
    AcademicTrack, DocumentStore, IssuanceService, Notification, NotificationStore,
    SessionStore, StudentRecord,
};
use guia_store::FileBackend;

/// Academic track argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TrackArg {
    /// Primary education (classes 1-7).
    Primary,
    /// Secondary education (classes 8-12).
    Secondary,
}

impl From<TrackArg> for AcademicTrack {
    fn from(value: TrackArg) -> Self {
        match value {
            TrackArg::Primary => AcademicTrack::Primary,
            TrackArg::Secondary => AcademicTrack::Secondary,
        }
    }
}

/// Arguments for `guia issue`.
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Full name of the student.
    #[arg(long)]
    pub name: String,

    /// National identity number (Bilhete de Identidade).
    #[arg(long)]
    pub bi: String,

    /// Enrollment date at the origin school (YYYY-MM-DD).
    #[arg(long)]
    pub enrolled: String,

    /// Grade level ("classe"), e.g. 11.
    #[arg(long)]
    pub grade: String,

    /// Academic track.
    #[arg(long, value_enum)]
    pub track: TrackArg,

    /// Per-subject score entry as `subject=score`. Repeatable.
    #[arg(long = "score", value_name = "SUBJECT=SCORE")]
    pub scores: Vec<String>,

    /// Free-text remarks.
    #[arg(long, default_value = "")]
    pub remarks: String,

    /// Issuing school. Defaults to the signed-in actor's school.
    #[arg(long)]
    pub school: Option<String>,

    /// City of the issuing school. Defaults to the signed-in actor's city.
    #[arg(long)]
    pub city: Option<String>,

    /// Issuance date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

/// Parse a `subject=score` entry.
fn parse_score_entry(entry: &str) -> Result<(String, String)> {
    match entry.split_once('=') {
        Some((subject, score)) if !subject.trim().is_empty() && !score.trim().is_empty() => {
            Ok((subject.trim().to_string(), score.trim().to_string()))
        }
        _ => bail!("invalid score entry {entry:?}: expected subject=score"),
    }
}

/// Execute the issue subcommand.
pub fn run_issue(args: &IssueArgs, data_dir: &Path) -> Result<u8> {
    let backend = FileBackend::new(data_dir);
    let session = SessionStore::new(&backend);
    let actor = session.current().context("failed to read session")?;

    let school = match (&args.school, &actor) {
        (Some(school), _) => school.clone(),
        (None, Some(actor)) => actor.school.clone(),
        (None, None) => bail!("no --school given and no actor signed in"),
    };
    let city = match (&args.city, &actor) {
        (Some(city), _) => city.clone(),
        (None, Some(actor)) => actor.city.clone(),
        (None, None) => bail!("no --city given and no actor signed in"),
    };

    let mut grades = BTreeMap::new();
    for entry in &args.scores {
        let (subject, score) = parse_score_entry(entry)?;
        grades.insert(subject, score);
    }

    let student = StudentRecord {
        full_name: args.name.clone(),
        id_number: args.bi.clone(),
        enrollment_date: args.enrolled.clone(),
        grade_level: args.grade.clone(),
        track: args.track.into(),
        grades,
        remarks: args.remarks.clone(),
    };

    let store = DocumentStore::new(&backend);
    let service = IssuanceService::new(store);
    let record = match &args.date {
        Some(date) => {
            let date = IssueDate::parse(date)
                .with_context(|| format!("invalid issuance date {date:?}"))?;
            service.issue_on(student, &school, &city, date)
        }
        None => service.issue(student, &school, &city),
    }
    .context("failed to issue document")?;

    NotificationStore::new(&backend)
        .push(&Notification::new(
            school.clone(),
            format!(
                "Guia de transferência {} emitida para {}",
                record.short_id, record.student.full_name
            ),
        ))
        .context("failed to record notification")?;

    println!("Documento emitido");
    println!("  referência : {}", record.short_id);
    println!("  data       : {}", record.issue_date);
    println!("  escola     : {} ({})", record.origin_school, record.origin_city);
    println!("  digest     : {}", record.digest);
    println!("  qr payload : {}", record.qr_payload);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_entry() {
        let (subject, score) = parse_score_entry("matematica=15").unwrap();
        assert_eq!(subject, "matematica");
        assert_eq!(score, "15");
    }

    #[test]
    fn test_parse_score_entry_trims() {
        let (subject, score) = parse_score_entry(" fisica = 12 ").unwrap();
        assert_eq!(subject, "fisica");
        assert_eq!(score, "12");
    }

    #[test]
    fn test_parse_score_entry_rejects_malformed() {
        assert!(parse_score_entry("matematica").is_err());
        assert!(parse_score_entry("=15").is_err());
        assert!(parse_score_entry("quimica=").is_err());
    }
}
