//! # Authenticated Actor
//!
//! Profile of the currently signed-in user, persisted under the
//! `usuarioAtual` slot. Authentication itself is an external collaborator;
//! the core only consumes the profile to scope listings to the actor's
//! school.

use serde::{Deserialize, Serialize};

/// Role of an actor in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A student: files transfer requests.
    Student,
    /// A school director: issues documents and decides requests.
    Director,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => f.write_str("student"),
            Self::Director => f.write_str("director"),
        }
    }
}

/// The authenticated actor's profile.
///
/// The shape is intentionally open (no `deny_unknown_fields`): the slot is
/// owned by the authentication collaborator and may carry fields this core
/// never reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Actor identifier assigned by the authentication layer.
    pub id: String,

    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,

    /// Role determining which operations the UI offers.
    #[serde(rename = "papel")]
    pub role: Role,

    /// School the actor belongs to; used to scope queries.
    #[serde(rename = "escola")]
    pub school: String,

    /// City of the actor's school.
    #[serde(rename = "cidade")]
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_layout() {
        let actor = Actor {
            id: "u-1".to_string(),
            name: "Albertina Chissano".to_string(),
            role: Role::Director,
            school: "Escola Secundária Samora Machel".to_string(),
            city: "Beira".to_string(),
        };
        let json = serde_json::to_value(&actor).unwrap();
        assert_eq!(json["papel"], "director");
        assert_eq!(json["escola"], "Escola Secundária Samora Machel");
        let back: Actor = serde_json::from_str(&json.to_string()).unwrap();
        assert_eq!(back, actor);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let json = r#"{
            "id": "u-2", "nome": "X", "papel": "student",
            "escola": "E", "cidade": "C", "fotoPerfil": "data:..."
        }"#;
        let actor: Actor = serde_json::from_str(json).unwrap();
        assert_eq!(actor.role, Role::Student);
    }
}
