//! # Notifications Subcommand
//!
//! Lists notifications and marks them read. The recipient defaults to
//! the signed-in actor (school for directors, name for students).

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use guia_docs::{NotificationStore, Role, SessionStore};
use guia_store::FileBackend;

/// Arguments for `guia notifications`.
#[derive(Args, Debug)]
pub struct NotifyArgs {
    #[command(subcommand)]
    pub command: NotifyCommand,
}

/// Notification subcommands.
#[derive(Subcommand, Debug)]
pub enum NotifyCommand {
    /// List notifications for a recipient.
    List {
        /// Recipient to list for. Defaults to the signed-in actor.
        #[arg(long)]
        recipient: Option<String>,
        /// Include notifications already read.
        #[arg(long)]
        all: bool,
    },

    /// Mark a notification as read.
    Read {
        /// Notification identifier.
        #[arg(long)]
        id: String,
    },
}

/// Execute the notifications subcommand.
pub fn run_notify(args: &NotifyArgs, data_dir: &Path) -> Result<u8> {
    let backend = FileBackend::new(data_dir);
    let notifications = NotificationStore::new(&backend);

    match &args.command {
        NotifyCommand::List { recipient, all } => {
            let recipient = match recipient {
                Some(r) => r.clone(),
                None => match SessionStore::new(&backend)
                    .current()
                    .context("failed to read session")?
                {
                    Some(actor) => match actor.role {
                        Role::Director => actor.school,
                        Role::Student => actor.name,
                    },
                    None => bail!("no --recipient given and no actor signed in"),
                },
            };

            let mut items = notifications
                .list_for(&recipient)
                .context("failed to list notifications")?;
            if !*all {
                items.retain(|n| !n.read);
            }

            if items.is_empty() {
                println!("Nenhuma notificação");
                return Ok(0);
            }
            for n in &items {
                let marker = if n.read { " " } else { "*" };
                println!("{marker} {}  {}  {}", n.id, n.date, n.message);
            }
            Ok(0)
        }

        NotifyCommand::Read { id } => {
            if notifications
                .mark_read(id)
                .context("failed to update notification")?
            {
                println!("Notificação {id} marcada como lida");
                Ok(0)
            } else {
                println!("Notificação {id} não encontrada");
                Ok(3)
            }
        }
    }
}
