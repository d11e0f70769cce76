//! # Notifications
//!
//! Records appended to the `notificacoes` collection when a document is
//! issued or a transfer request is decided. The notification-center UI is
//! an external consumer; this core only writes and lists them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A notification addressed to an actor (by school or name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Internal notification identifier.
    pub id: String,

    /// Recipient, matched against the actor's school or name.
    #[serde(rename = "destinatario")]
    pub recipient: String,

    /// Human-readable message.
    #[serde(rename = "mensagem")]
    pub message: String,

    /// Date the notification was created, ISO `YYYY-MM-DD`.
    #[serde(rename = "data")]
    pub date: String,

    /// Whether the recipient has opened it.
    #[serde(rename = "lida", default)]
    pub read: bool,
}

impl Notification {
    /// Create an unread notification dated today on the local clock.
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recipient: recipient.into(),
            message: message.into(),
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unread_and_dated() {
        let n = Notification::new("Escola X", "Documento emitido");
        assert!(!n.read);
        assert_eq!(n.date.len(), 10);
        assert!(!n.id.is_empty());
    }

    #[test]
    fn test_layout() {
        let n = Notification::new("Escola X", "Pedido aprovado");
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["destinatario"], "Escola X");
        assert_eq!(json["mensagem"], "Pedido aprovado");
        assert_eq!(json["lida"], false);
    }
}
