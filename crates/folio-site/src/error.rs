//! Error types for site interactions.

use thiserror::Error;

/// Failure to render page markup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Reasons a contact form submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A required field is empty or only whitespace.
    #[error("the {field} field is required")]
    MissingField { field: &'static str },

    /// The email address does not look like `name@domain.tld`.
    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ContactError::MissingField { field: "subject" };
        assert_eq!(err.to_string(), "the subject field is required");

        let err = ContactError::InvalidEmail {
            email: "nope".into(),
        };
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_render_error_wraps_template_error() {
        let env = minijinja::Environment::new();
        let err: RenderError = env.get_template("missing.html").unwrap_err().into();
        assert!(err.to_string().starts_with("template error:"));
    }
}
