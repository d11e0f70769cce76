//! # Verify Subcommand
//!
//! Checks a document's authenticity. Exit codes: 0 valid, 2 tampered,
//! 3 not found, 1 operational error.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use guia_docs::{DocumentStore, Verification, VerificationService};
use guia_store::FileBackend;

/// Arguments for `guia verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Short identifier of the document (e.g. AB12CD34).
    #[arg(required_unless_present = "payload")]
    pub id: Option<String>,

    /// Verify a full QR payload (`ID|digest`) instead of a bare
    /// identifier; also cross-checks the digest half.
    #[arg(long, conflicts_with = "id")]
    pub payload: Option<String>,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, data_dir: &Path) -> Result<u8> {
    let backend = FileBackend::new(data_dir);
    let service = VerificationService::new(DocumentStore::new(&backend));

    let outcome = match (&args.id, &args.payload) {
        (_, Some(payload)) => service
            .verify_payload(payload)
            .context("failed to verify payload")?,
        (Some(id), None) => service.verify(id).context("failed to verify document")?,
        (None, None) => unreachable!("clap enforces id or payload"),
    };

    match outcome {
        Verification::Valid(record) => {
            println!("VÁLIDO — documento íntegro");
            print_record_summary(&record);
            Ok(0)
        }
        Verification::Tampered(record) => {
            println!("ADULTERADO — o conteúdo não corresponde ao digest de emissão");
            print_record_summary(&record);
            Ok(2)
        }
        Verification::Absent => {
            println!("NÃO ENCONTRADO — nenhum documento com essa referência");
            Ok(3)
        }
    }
}

fn print_record_summary(record: &guia_docs::DocumentRecord) {
    println!("  referência : {}", record.short_id);
    println!("  estudante  : {}", record.student.full_name);
    println!("  classe     : {} ({})", record.student.grade_level, record.track);
    println!("  emitido em : {}", record.issue_date);
    println!("  escola     : {} ({})", record.origin_school, record.origin_city);
}
