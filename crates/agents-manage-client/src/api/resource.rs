//! Generic CRUD client shared by every resource kind.

use std::marker::PhantomData;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::client::ManageClient;
use crate::error::{Error, Result};
use crate::request::RequestOptions;
use crate::types::{ListResponse, Pagination, SingleResponse};
use crate::validation::{validate_resource_id, validate_scope};

/// Everything but RFC 3986 unreserved characters is escaped in resource ids.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Describes one project-scoped resource kind: where it lives and which
/// payload types travel over the wire.
pub trait Resource {
    /// Human-readable name, used in logs.
    const NAME: &'static str;
    /// Path segment for listing.
    const LIST_PATH: &'static str;
    /// Path segment for creating.
    const CREATE_PATH: &'static str;
    /// Path segment preceding `/{id}` for get/update/delete.
    const ITEM_PATH: &'static str;

    /// Element type of the list endpoint.
    type Summary: DeserializeOwned;
    /// Single-item type returned by get and update.
    type Detail: DeserializeOwned;
    /// Body of a create request.
    type Create: Serialize;
    /// Response payload of a create request.
    type Created: DeserializeOwned;
    /// Body of an update request.
    type Update: Serialize;

    /// Pagination applied by [`ResourceApi::list`] when none is requested.
    fn default_pagination() -> Option<Pagination> {
        None
    }
}

/// Typed CRUD client for one resource kind.
///
/// Every call validates the tenant/project scope (and the resource id, where
/// there is one) before any request is made, then unwraps the `{ "data": ... }`
/// envelope of the response.
pub struct ResourceApi<R: Resource> {
    client: ManageClient,
    options: RequestOptions,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceApi<R> {
    pub(crate) fn new(client: ManageClient) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            _resource: PhantomData,
        }
    }

    /// Attach caller options (extra headers, query parameters such as `ref`)
    /// to every request made through this handle.
    ///
    /// The method and body are always chosen by the operation itself, and so
    /// are `page`/`limit` on paginated lists: they replace any caller value.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// List all resources of this kind in a project.
    pub async fn list(&self, tenant_id: &str, project_id: &str) -> Result<Vec<R::Summary>> {
        self.list_inner(tenant_id, project_id, R::default_pagination())
            .await
    }

    /// List one page of resources.
    pub async fn list_page(
        &self,
        tenant_id: &str,
        project_id: &str,
        page: Pagination,
    ) -> Result<Vec<R::Summary>> {
        self.list_inner(tenant_id, project_id, Some(page)).await
    }

    async fn list_inner(
        &self,
        tenant_id: &str,
        project_id: &str,
        page: Option<Pagination>,
    ) -> Result<Vec<R::Summary>> {
        validate_scope(tenant_id, project_id)?;

        let path = scope_path(tenant_id, project_id, R::LIST_PATH);
        let mut options = self.options(Method::GET);
        if let Some(page) = page {
            options = options.query("page", page.page).query("limit", page.limit);
        }

        let response: ListResponse<R::Summary> =
            require_body(self.client.request(&path, options).await?, R::NAME)?;
        Ok(response.data)
    }

    /// Get one resource by id.
    pub async fn get(&self, tenant_id: &str, project_id: &str, id: &str) -> Result<R::Detail> {
        let path = self.item_path(tenant_id, project_id, id)?;
        let response: SingleResponse<R::Detail> =
            require_body(self.send(&path, Method::GET, None).await?, R::NAME)?;
        Ok(response.data)
    }

    /// Create a resource.
    pub async fn create(
        &self,
        tenant_id: &str,
        project_id: &str,
        data: &R::Create,
    ) -> Result<R::Created> {
        validate_scope(tenant_id, project_id)?;

        let path = scope_path(tenant_id, project_id, R::CREATE_PATH);
        let body = serde_json::to_string(data)?;
        let response: SingleResponse<R::Created> =
            require_body(self.send(&path, Method::POST, Some(body)).await?, R::NAME)?;
        Ok(response.data)
    }

    /// Update a resource. The backend may create it if the id is unknown.
    pub async fn update(
        &self,
        tenant_id: &str,
        project_id: &str,
        id: &str,
        data: &R::Update,
    ) -> Result<R::Detail> {
        let path = self.item_path(tenant_id, project_id, id)?;
        let body = serde_json::to_string(data)?;
        let response: SingleResponse<R::Detail> =
            require_body(self.send(&path, Method::PUT, Some(body)).await?, R::NAME)?;
        Ok(response.data)
    }

    /// Delete a resource. Any response body is discarded.
    pub async fn delete(&self, tenant_id: &str, project_id: &str, id: &str) -> Result<()> {
        let path = self.item_path(tenant_id, project_id, id)?;
        self.send::<IgnoredAny>(&path, Method::DELETE, None)
            .await?;
        Ok(())
    }

    fn item_path(&self, tenant_id: &str, project_id: &str, id: &str) -> Result<String> {
        validate_scope(tenant_id, project_id)?;
        validate_resource_id(id)?;
        Ok(format!(
            "{}/{}",
            scope_path(tenant_id, project_id, R::ITEM_PATH),
            utf8_percent_encode(id, SEGMENT)
        ))
    }

    fn options(&self, method: Method) -> RequestOptions {
        self.options.clone().method(method)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<Option<T>> {
        let mut options = self.options(method);
        options.body = body;
        self.client.request(path, options).await
    }
}

fn scope_path(tenant_id: &str, project_id: &str, segment: &str) -> String {
    format!("tenants/{}/projects/{}/{}", tenant_id, project_id, segment)
}

fn require_body<T>(body: Option<T>, resource: &str) -> Result<T> {
    body.ok_or_else(|| Error::internal(format!("empty response body for {} request", resource)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_path() {
        assert_eq!(
            scope_path("acme", "proj1", "credentials"),
            "tenants/acme/projects/proj1/credentials"
        );
    }

    #[test]
    fn test_item_path_encodes_id_as_one_segment() {
        let api = ResourceApi::<crate::api::CredentialResource>::new(
            ManageClient::builder()
                .config(agents_manage_config::ManageApiConfig::from_lookup(|_| None))
                .build()
                .unwrap(),
        );

        assert_eq!(
            api.item_path("acme", "proj1", "gpt-4.1").unwrap(),
            "tenants/acme/projects/proj1/credentials/gpt-4.1"
        );
        assert_eq!(
            api.item_path("acme", "proj1", "a/b?c#d e").unwrap(),
            "tenants/acme/projects/proj1/credentials/a%2Fb%3Fc%23d%20e"
        );
    }

    #[test]
    fn test_require_body() {
        assert_eq!(require_body(Some(1), "agent").unwrap(), 1);

        let err = require_body::<u8>(None, "agent").unwrap_err();
        assert_eq!(err.code(), "internal_server_error");
        assert!(err.message().contains("agent"));
    }
}
