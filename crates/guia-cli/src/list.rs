//! # List Subcommand
//!
//! Lists issued documents, scoped to a school. With no explicit school
//! the signed-in actor's school is used; `--all` lists everything.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use guia_docs::{DocumentStore, SessionStore};
use guia_store::FileBackend;

/// Arguments for `guia list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only documents issued by this school. Defaults to the signed-in
    /// actor's school.
    #[arg(long, conflicts_with = "all")]
    pub school: Option<String>,

    /// List documents from every school.
    #[arg(long)]
    pub all: bool,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, data_dir: &Path) -> Result<u8> {
    let backend = FileBackend::new(data_dir);
    let store = DocumentStore::new(&backend);

    let documents = if args.all {
        store.list_all().context("failed to list documents")?
    } else {
        let school = match &args.school {
            Some(school) => school.clone(),
            None => match SessionStore::new(&backend)
                .current()
                .context("failed to read session")?
            {
                Some(actor) => actor.school,
                None => {
                    // No scope available: fall back to everything rather
                    // than erroring on a fresh installation.
                    tracing::info!("no actor signed in, listing all documents");
                    return run_list(
                        &ListArgs {
                            school: None,
                            all: true,
                        },
                        data_dir,
                    );
                }
            },
        };
        store
            .list_for_school(&school)
            .context("failed to list documents")?
    };

    if documents.is_empty() {
        println!("Nenhum documento emitido");
        return Ok(0);
    }

    for doc in &documents {
        println!(
            "{}  {}  classe {}  {}  {} ({})",
            doc.short_id,
            doc.issue_date,
            doc.student.grade_level,
            doc.student.full_name,
            doc.origin_school,
            doc.origin_city
        );
    }
    println!("{} documento(s)", documents.len());
    Ok(0)
}
