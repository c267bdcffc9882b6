//! Credentials API.

use super::resource::{Resource, ResourceApi};
use crate::types::{Credential, CreateCredentialRequest, Pagination, UpdateCredentialRequest};

/// Credential references, always listed page by page.
pub struct CredentialResource;

impl Resource for CredentialResource {
    const NAME: &'static str = "credential";
    const LIST_PATH: &'static str = "credentials";
    const CREATE_PATH: &'static str = "credentials";
    const ITEM_PATH: &'static str = "credentials";

    type Summary = Credential;
    type Detail = Credential;
    type Create = CreateCredentialRequest;
    type Created = Credential;
    type Update = UpdateCredentialRequest;

    fn default_pagination() -> Option<Pagination> {
        Some(Pagination::default())
    }
}

/// Credentials API client.
pub type CredentialsApi = ResourceApi<CredentialResource>;
