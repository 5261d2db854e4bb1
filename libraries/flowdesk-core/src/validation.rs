//! Client-side validation of user form submissions.
//!
//! Submissions are blocked until every field passes. All failing fields are
//! reported at once so a form can show them side by side.

use crate::error::{FieldError, ValidationErrors};
use crate::types::{CreateUserData, UserPatch};
use regex::Regex;
use std::sync::LazyLock;

const NAME_MIN_CHARS: usize = 2;
const USERNAME_MIN_CHARS: usize = 3;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+$").expect("static regex should not panic"));

/// Validate a full create submission.
pub fn validate_create(data: &CreateUserData) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    check_name(&data.name, &mut errors);
    check_username(&data.username, &mut errors);
    check_email(&data.email, &mut errors);
    check_phone(&data.phone, &mut errors);
    check_website(&data.website, &mut errors);

    finish(errors)
}

/// Validate an update submission. Only the fields being changed are checked.
pub fn validate_patch(patch: &UserPatch) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if let Some(name) = &patch.name {
        check_name(name, &mut errors);
    }
    if let Some(username) = &patch.username {
        check_username(username, &mut errors);
    }
    if let Some(email) = &patch.email {
        check_email(email, &mut errors);
    }
    if let Some(phone) = &patch.phone {
        check_phone(phone, &mut errors);
    }
    if let Some(website) = &patch.website {
        check_website(website, &mut errors);
    }

    finish(errors)
}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}

fn check_name(value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    } else if value.chars().count() < NAME_MIN_CHARS {
        errors.push(FieldError::new("name", "Name must be at least 2 characters"));
    }
}

fn check_username(value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    } else if value.chars().count() < USERNAME_MIN_CHARS {
        errors.push(FieldError::new(
            "username",
            "Username must be at least 3 characters",
        ));
    }
}

fn check_email(value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL_REGEX.is_match(value) {
        errors.push(FieldError::new("email", "Invalid email format"));
    }
}

fn check_phone(value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError::new("phone", "Phone is required"));
    }
}

fn check_website(value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError::new("website", "Website is required"));
    } else if !(value.starts_with("http://") || value.starts_with("https://")) {
        errors.push(FieldError::new(
            "website",
            "Website must start with http:// or https://",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateUserData {
        CreateUserData {
            name: "Bob".to_string(),
            username: "bobby".to_string(),
            email: "bob@example.com".to_string(),
            phone: "555-0100".to_string(),
            website: "https://bob.dev".to_string(),
        }
    }

    fn fields(err: &ValidationErrors) -> Vec<&str> {
        err.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn accepts_valid_submission() {
        assert!(validate_create(&valid()).is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let err = validate_create(&CreateUserData::default()).unwrap_err();
        assert_eq!(
            fields(&err),
            vec!["name", "username", "email", "phone", "website"]
        );
        assert_eq!(err.errors()[0].message, "Name is required");
    }

    #[test]
    fn enforces_minimum_lengths() {
        let data = CreateUserData {
            name: "B".to_string(),
            username: "bo".to_string(),
            ..valid()
        };
        let err = validate_create(&data).unwrap_err();
        assert_eq!(fields(&err), vec!["name", "username"]);
        assert_eq!(err.errors()[1].message, "Username must be at least 3 characters");
    }

    #[test]
    fn email_needs_local_and_domain_parts() {
        for bad in ["bob", "bob@", "@example.com", "bob @example.com"] {
            let data = CreateUserData {
                email: bad.to_string(),
                ..valid()
            };
            let err = validate_create(&data).unwrap_err();
            assert_eq!(fields(&err), vec!["email"], "accepted {bad:?}");
        }
    }

    #[test]
    fn website_needs_http_scheme() {
        let data = CreateUserData {
            website: "bob.dev".to_string(),
            ..valid()
        };
        let err = validate_create(&data).unwrap_err();
        assert_eq!(
            err.errors()[0].message,
            "Website must start with http:// or https://"
        );

        let data = CreateUserData {
            website: "http://bob.dev".to_string(),
            ..valid()
        };
        assert!(validate_create(&data).is_ok());
    }

    #[test]
    fn patch_checks_only_present_fields() {
        let patch = UserPatch {
            email: Some("new@x.com".to_string()),
            ..UserPatch::default()
        };
        assert!(validate_patch(&patch).is_ok());

        let patch = UserPatch {
            website: Some("ftp://files".to_string()),
            ..UserPatch::default()
        };
        let err = validate_patch(&patch).unwrap_err();
        assert_eq!(fields(&err), vec!["website"]);
    }
}
