//! Artifact components API.

use super::resource::{Resource, ResourceApi};
use crate::types::{
    ArtifactComponent, CreateArtifactComponentRequest, UpdateArtifactComponentRequest,
};

/// Artifact components: schemas for structured agent output.
pub struct ArtifactComponentResource;

impl Resource for ArtifactComponentResource {
    const NAME: &'static str = "artifact component";
    const LIST_PATH: &'static str = "artifact-components";
    const CREATE_PATH: &'static str = "artifact-components";
    const ITEM_PATH: &'static str = "artifact-components";

    type Summary = ArtifactComponent;
    type Detail = ArtifactComponent;
    type Create = CreateArtifactComponentRequest;
    type Created = ArtifactComponent;
    type Update = UpdateArtifactComponentRequest;
}

/// Artifact components API client.
pub type ArtifactComponentsApi = ResourceApi<ArtifactComponentResource>;
