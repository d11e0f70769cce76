//! # Request Subcommand
//!
//! Files, lists, and decides transfer requests. Students file requests;
//! directors approve or reject them, which notifies the requester.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use guia_docs::{
    Notification, NotificationStore, RequestStatus, SessionStore, TransferRequest,
    TransferRequestStore,
};
use guia_store::FileBackend;

/// Arguments for `guia request`.
#[derive(Args, Debug)]
pub struct RequestArgs {
    #[command(subcommand)]
    pub command: RequestCommand,
}

/// Transfer-request subcommands.
#[derive(Subcommand, Debug)]
pub enum RequestCommand {
    /// File a new transfer request (starts pending).
    Submit {
        /// Destination school.
        #[arg(long)]
        destination: String,
        /// Origin school. Defaults to the signed-in actor's school.
        #[arg(long)]
        origin: Option<String>,
        /// Requester name. Defaults to the signed-in actor's name.
        #[arg(long)]
        name: Option<String>,
        /// Grade level ("classe").
        #[arg(long)]
        grade: String,
        /// National identity number.
        #[arg(long)]
        bi: String,
        /// Reason for the transfer.
        #[arg(long)]
        reason: String,
    },

    /// List requests, optionally filtered by origin school.
    List {
        /// Only requests originating from this school.
        #[arg(long)]
        school: Option<String>,
        /// Only requests with this status.
        #[arg(long, value_parser = parse_status)]
        status: Option<RequestStatus>,
    },

    /// Approve a pending request.
    Approve {
        /// Request identifier.
        #[arg(long)]
        id: String,
    },

    /// Reject a pending request.
    Reject {
        /// Request identifier.
        #[arg(long)]
        id: String,
    },
}

fn parse_status(s: &str) -> Result<RequestStatus, String> {
    match s.to_ascii_lowercase().as_str() {
        "pending" => Ok(RequestStatus::Pending),
        "approved" => Ok(RequestStatus::Approved),
        "rejected" => Ok(RequestStatus::Rejected),
        other => Err(format!("unknown status {other:?}")),
    }
}

/// Execute the request subcommand.
pub fn run_request(args: &RequestArgs, data_dir: &Path) -> Result<u8> {
    let backend = FileBackend::new(data_dir);
    let requests = TransferRequestStore::new(&backend);
    let notifications = NotificationStore::new(&backend);

    match &args.command {
        RequestCommand::Submit {
            destination,
            origin,
            name,
            grade,
            bi,
            reason,
        } => {
            let actor = SessionStore::new(&backend)
                .current()
                .context("failed to read session")?;
            let origin = match (origin, &actor) {
                (Some(origin), _) => origin.clone(),
                (None, Some(actor)) => actor.school.clone(),
                (None, None) => bail!("no --origin given and no actor signed in"),
            };
            let name = match (name, &actor) {
                (Some(name), _) => name.clone(),
                (None, Some(actor)) => actor.name.clone(),
                (None, None) => bail!("no --name given and no actor signed in"),
            };

            let request =
                TransferRequest::new(origin, destination.clone(), name, grade, bi, reason);
            requests
                .submit(&request)
                .context("failed to file transfer request")?;
            println!("Pedido registado: {}", request.id);
            Ok(0)
        }

        RequestCommand::List { school, status } => {
            let mut all = match school {
                Some(school) => requests.list_for_school(school),
                None => requests.list_all(),
            }
            .context("failed to list requests")?;
            if let Some(status) = status {
                all.retain(|r| r.status == *status);
            }

            if all.is_empty() {
                println!("Nenhum pedido de transferência");
                return Ok(0);
            }
            for req in &all {
                println!(
                    "{}  {}  {}  {} → {}  [{}]",
                    req.id,
                    req.request_date,
                    req.requester_name,
                    req.origin_school,
                    req.destination_school,
                    req.status
                );
            }
            println!("{} pedido(s)", all.len());
            Ok(0)
        }

        RequestCommand::Approve { id } => {
            let decided = requests
                .approve(id)
                .with_context(|| format!("failed to approve request {id}"))?;
            notifications
                .push(&Notification::new(
                    decided.requester_name.clone(),
                    format!("Pedido de transferência para {} aprovado", decided.destination_school),
                ))
                .context("failed to record notification")?;
            println!("Pedido {} aprovado", decided.id);
            Ok(0)
        }

        RequestCommand::Reject { id } => {
            let decided = requests
                .reject(id)
                .with_context(|| format!("failed to reject request {id}"))?;
            notifications
                .push(&Notification::new(
                    decided.requester_name.clone(),
                    format!("Pedido de transferência para {} rejeitado", decided.destination_school),
                ))
                .context("failed to record notification")?;
            println!("Pedido {} rejeitado", decided.id);
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("pending").unwrap(), RequestStatus::Pending);
        assert_eq!(parse_status("APPROVED").unwrap(), RequestStatus::Approved);
        assert!(parse_status("cancelled").is_err());
    }
}
