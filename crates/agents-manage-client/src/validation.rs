//! Identifier validation.
//!
//! Tenant and project identifiers are interpolated into request paths as-is,
//! so they are restricted to a path-safe charset. Resource identifiers are
//! opaque and percent-encoded into a single path segment instead; they only
//! need to be non-blank and not a dot segment.

use crate::error::{Error, Result};

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn validate_identifier(kind: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{} is required", kind)));
    }
    if let Some(bad) = value.chars().find(|c| !is_identifier_char(*c)) {
        return Err(Error::validation(format!(
            "{} '{}' contains invalid character {:?}; only letters, digits, '-' and '_' are allowed",
            kind, value, bad
        )));
    }
    Ok(())
}

/// Validate a tenant id.
pub fn validate_tenant_id(tenant_id: &str) -> Result<()> {
    validate_identifier("Tenant ID", tenant_id)
}

/// Validate a project id.
pub fn validate_project_id(project_id: &str) -> Result<()> {
    validate_identifier("Project ID", project_id)
}

/// Validate a resource id.
///
/// `.` and `..` are rejected because URL normalization would collapse them
/// even when percent-encoded.
pub fn validate_resource_id(resource_id: &str) -> Result<()> {
    if resource_id.trim().is_empty() {
        return Err(Error::validation("Resource ID is required"));
    }
    if resource_id == "." || resource_id == ".." {
        return Err(Error::validation(format!(
            "Resource ID '{}' is not a valid path segment",
            resource_id
        )));
    }
    Ok(())
}

/// Validate the tenant/project scope every resource call runs in.
pub fn validate_scope(tenant_id: &str, project_id: &str) -> Result<()> {
    validate_tenant_id(tenant_id)?;
    validate_project_id(project_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for id in ["acme", "proj1", "my-project", "tenant_01", "A1b2-C3_d4"] {
            assert!(validate_tenant_id(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        for id in ["", " ", "\t\n"] {
            let err = validate_project_id(id).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.status(), 400);
            assert_eq!(err.code(), "validation_error");
        }
    }

    #[test]
    fn test_path_characters_rejected() {
        for id in ["a/b", "../etc", "a b", "a?b=c", "a#b", "tenant%2F"] {
            assert!(validate_tenant_id(id).is_err(), "{id} should be invalid");
        }
    }

    #[test]
    fn test_resource_ids_are_opaque() {
        for id in ["gpt-4.1", "a/b", "a b", "a?b=c", "a#b", "...", "ünïcode"] {
            assert!(validate_resource_id(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_blank_and_dot_resource_ids_rejected() {
        for id in ["", "  ", ".", ".."] {
            let err = validate_resource_id(id).unwrap_err();
            assert!(err.is_validation(), "{id} should be invalid");
        }
    }

    #[test]
    fn test_scope_checks_tenant_first() {
        let err = validate_scope("", "").unwrap_err();
        assert!(err.message().starts_with("Tenant ID"));

        let err = validate_scope("acme", "bad/project").unwrap_err();
        assert!(err.message().starts_with("Project ID"));
    }
}
