use serde::Serialize;

/// Sent in place of blank optional fields; the backend expects the literal
/// string, not an empty value or a missing key.
pub const NOT_PROVIDED: &str = "Not provided";

/// JSON document posted to the feedback endpoint.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub feedback: String,
    pub email: String,
    pub name: String,
}

impl FeedbackEntry {
    /// Build an entry, substituting the sentinel for blank email/name.
    pub fn new(
        feedback: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            feedback: feedback.into(),
            email: or_not_provided(email.into()),
            name: or_not_provided(name.into()),
        }
    }
}

fn or_not_provided(value: String) -> String {
    if value.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_fields_send_the_sentinel() {
        let entry = FeedbackEntry::new("Great tool!", "", "");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["feedback"], "Great tool!");
        assert_eq!(json["email"], "Not provided");
        assert_eq!(json["name"], "Not provided");
    }

    #[test]
    fn provided_fields_are_kept_verbatim() {
        let entry = FeedbackEntry::new("Slow on long clips", "lukas@example.com", "Lukas");
        assert_eq!(entry.email, "lukas@example.com");
        assert_eq!(entry.name, "Lukas");
    }
}
