//! Shared list/show/create/update/delete handling for every resource kind.

use std::io::Read;
use std::path::{Path, PathBuf};

use agents_manage_client::{Pagination, Resource, ResourceApi};
use anyhow::{Context as _, Result};
use clap::Subcommand;
use console::{Style, style};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Context;

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// List resources in the project
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Items per page (with --page)
        #[arg(long, default_value = "50")]
        limit: u32,
    },

    /// Show a single resource
    Show {
        /// Resource ID
        id: String,
    },

    /// Create a resource from a JSON file ("-" reads stdin)
    Create {
        /// JSON file with the resource definition
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Update (or create) a resource from a JSON file ("-" reads stdin)
    Update {
        /// Resource ID
        id: String,

        /// JSON file with the fields to update
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a resource
    Delete {
        /// Resource ID
        id: String,
    },
}

/// One line of human-readable list output.
pub trait ListRow {
    fn row(&self) -> String;
}

/// Run a resource command against `api`. `label` is the plural used in messages.
pub async fn run<R>(
    api: ResourceApi<R>,
    command: ResourceCommand,
    ctx: &Context,
    label: &str,
) -> Result<()>
where
    R: Resource,
    R::Summary: Serialize + ListRow,
    R::Detail: Serialize,
    R::Created: Serialize,
    R::Create: DeserializeOwned,
    R::Update: DeserializeOwned,
{
    let (tenant, project) = ctx.scope()?;
    let api = api.with_options(ctx.request_options());

    match command {
        ResourceCommand::List { page, limit } => {
            let items = match page {
                Some(page) => {
                    api.list_page(tenant, project, Pagination::new(page, limit))
                        .await
                }
                None => api.list(tenant, project).await,
            }
            .with_context(|| format!("failed to load {}", label))?;
            print_list(&items, label, ctx)
        }
        ResourceCommand::Show { id } => {
            let item = api
                .get(tenant, project, &id)
                .await
                .with_context(|| format!("failed to load {} '{}'", R::NAME, id))?;
            println!("{}", serde_json::to_string_pretty(&item)?);
            Ok(())
        }
        ResourceCommand::Create { file } => {
            let data: R::Create = read_json(&file)?;
            let created = api
                .create(tenant, project, &data)
                .await
                .with_context(|| format!("failed to create {}", R::NAME))?;
            print_result(&created, &format!("Created {}", R::NAME), ctx)
        }
        ResourceCommand::Update { id, file } => {
            let data: R::Update = read_json(&file)?;
            let updated = api
                .update(tenant, project, &id, &data)
                .await
                .with_context(|| format!("failed to update {} '{}'", R::NAME, id))?;
            print_result(&updated, &format!("Updated {} {}", R::NAME, id), ctx)
        }
        ResourceCommand::Delete { id } => {
            api.delete(tenant, project, &id)
                .await
                .with_context(|| format!("failed to delete {} '{}'", R::NAME, id))?;
            if ctx.json_output {
                println!("{}", serde_json::json!({ "deleted": id }));
            } else {
                let green = Style::new().green();
                println!("{} Deleted {} {}", green.apply_to("✓"), R::NAME, id);
            }
            Ok(())
        }
    }
}

/// Print a list as JSON or one row per item.
pub fn print_list<T: Serialize + ListRow>(items: &[T], label: &str, ctx: &Context) -> Result<()> {
    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    println!("{}", style(capitalize(label)).bold());
    println!("{}", dim.apply_to("─".repeat(50)));

    if items.is_empty() {
        println!("{}", dim.apply_to(format!("No {} found", label)));
    } else {
        for item in items {
            println!("{}", item.row());
        }
    }
    Ok(())
}

fn print_result<T: Serialize>(value: &T, headline: &str, ctx: &Context) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    if ctx.json_output {
        println!("{}", body);
    } else {
        let green = Style::new().green();
        println!("{} {}", green.apply_to("✓"), headline);
        if ctx.verbose {
            println!("{}", body);
        }
    }
    Ok(())
}

/// Read and parse a JSON document from a file, or stdin for `-`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&contents).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Truncate to `max_len` characters, flattening newlines.
pub fn truncate(s: &str, max_len: usize) -> String {
    let s = s.replace('\n', " ");
    if s.chars().count() <= max_len {
        s
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("line one\nline two", 40), "line one line two");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("agents"), "Agents");
        assert_eq!(capitalize("API keys"), "API keys");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_read_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "x"}}"#).unwrap();

        let value: serde_json::Value = read_json(file.path()).unwrap();
        assert_eq!(value["name"], "x");
    }

    #[test]
    fn test_read_json_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_json::<serde_json::Value>(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }
}
