//! # Session Subcommand
//!
//! Manages the signed-in actor slot. Authentication proper is outside
//! this system; the slot just scopes listings and fills issuance
//! defaults.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use guia_docs::{Actor, Role, SessionStore};
use guia_store::FileBackend;

/// Role argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    /// A student.
    Student,
    /// A school director.
    Director,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Student => Role::Student,
            RoleArg::Director => Role::Director,
        }
    }
}

/// Arguments for `guia session`.
#[derive(Args, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Sign an actor in (replaces any current session).
    Set {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Role.
        #[arg(long, value_enum)]
        role: RoleArg,
        /// School the actor belongs to.
        #[arg(long)]
        school: String,
        /// City of the school.
        #[arg(long)]
        city: String,
    },

    /// Show the current session.
    Show,

    /// Sign out.
    Clear,
}

/// Execute the session subcommand.
pub fn run_session(args: &SessionArgs, data_dir: &Path) -> Result<u8> {
    let backend = FileBackend::new(data_dir);
    let session = SessionStore::new(&backend);

    match &args.command {
        SessionCommand::Set {
            name,
            role,
            school,
            city,
        } => {
            let actor = Actor {
                id: uuid_like(),
                name: name.clone(),
                role: (*role).into(),
                school: school.clone(),
                city: city.clone(),
            };
            session.set(&actor).context("failed to store session")?;
            println!("Sessão iniciada: {} ({})", actor.name, actor.role);
            Ok(0)
        }

        SessionCommand::Show => match session.current().context("failed to read session")? {
            Some(actor) => {
                println!("{} ({})", actor.name, actor.role);
                println!("  escola : {} ({})", actor.school, actor.city);
                Ok(0)
            }
            None => {
                println!("Nenhuma sessão activa");
                Ok(3)
            }
        },

        SessionCommand::Clear => {
            session.clear().context("failed to clear session")?;
            println!("Sessão terminada");
            Ok(0)
        }
    }
}

fn uuid_like() -> String {
    // Actor ids come from the authentication collaborator in the real
    // deployment; the CLI stands in for it with a random id.
    uuid::Uuid::new_v4().to_string()
}
