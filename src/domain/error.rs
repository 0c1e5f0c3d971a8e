use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Build a validation error from a list of user-facing messages.
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    /// Every user-facing message carried by this error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation { messages } => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_joins_messages() {
        let err = DomainError::validation(vec![
            "Room name not provided.".to_string(),
            "Room capacity must be greater than 0.".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Room name not provided.; Room capacity must be greater than 0."
        );
    }

    #[test]
    fn not_found_display_names_entity_and_key() {
        let err = DomainError::NotFound {
            entity: "Room",
            field: "id",
            value: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: Room with id=42");
        assert_eq!(err.messages(), vec!["Not found: Room with id=42"]);
    }

    #[test]
    fn conflict_messages_carry_the_conflict_text() {
        let err = DomainError::Conflict("Room is already reserved for the selected date.".into());
        assert_eq!(
            err.messages(),
            vec!["Room is already reserved for the selected date."]
        );
    }
}
