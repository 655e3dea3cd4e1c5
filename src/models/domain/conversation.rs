use serde::{Deserialize, Serialize};

/// One entry in the scenario conversation. The sequence is append-only and
/// serializes directly into the Completion Service request body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let turn = ConversationTurn::user("hello");
        let json = serde_json::to_string(&turn).expect("turn should serialize");

        assert_eq!(json, r#"{"role":"user","content":"hello"}"#);
    }

    #[test]
    fn role_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<Role>("\"system\"");

        assert!(parsed.is_err());
    }
}
