//! Pure projections over list results, used to populate pickers and joins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Agent, ApiKey, ArtifactComponent, Credential, TeamAgent};

/// A resource with a stable id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A resource with a display label.
pub trait Labeled: Identified {
    fn label(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(Agent, TeamAgent, ApiKey, ArtifactComponent, Credential);

impl Labeled for Agent {
    fn label(&self) -> &str {
        &self.name
    }
}

impl Labeled for TeamAgent {
    fn label(&self) -> &str {
        &self.name
    }
}

impl Labeled for ArtifactComponent {
    fn label(&self) -> &str {
        &self.name
    }
}

/// `value`/`label` pair for select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Index items by id. Later duplicates replace earlier ones.
pub fn create_lookup<T: Identified>(items: &[T]) -> HashMap<&str, &T> {
    items.iter().map(|item| (item.id(), item)).collect()
}

/// Build select options in list order.
pub fn select_options<T: Labeled>(items: &[T]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption {
            value: item.id().to_string(),
            label: item.label().to_string(),
        })
        .collect()
}
