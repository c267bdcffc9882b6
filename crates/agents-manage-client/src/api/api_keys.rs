//! API keys API.

use super::resource::{Resource, ResourceApi};
use crate::types::{ApiKey, CreateApiKeyRequest, CreatedApiKey, UpdateApiKeyRequest};

/// Agent API keys. Creation returns the secret once.
pub struct ApiKeyResource;

impl Resource for ApiKeyResource {
    const NAME: &'static str = "API key";
    const LIST_PATH: &'static str = "api-keys";
    const CREATE_PATH: &'static str = "api-keys";
    const ITEM_PATH: &'static str = "api-keys";

    type Summary = ApiKey;
    type Detail = ApiKey;
    type Create = CreateApiKeyRequest;
    type Created = CreatedApiKey;
    type Update = UpdateApiKeyRequest;
}

/// API keys API client.
pub type ApiKeysApi = ResourceApi<ApiKeyResource>;
