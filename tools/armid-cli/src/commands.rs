//! CLI commands.

use std::process::ExitCode;

use anyhow::{Context, Result};
use armid::{ResourceId, ResourceKind};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::config::Config;

/// armid - inspect Azure Resource Manager resource ids.
#[derive(Debug, Parser)]
#[command(name = "armid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json).
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse an id and describe it.
    Parse {
        /// The resource id.
        id: String,
    },

    /// Rewrite the keyword and type casing of an id to match a scope template.
    Normalize {
        /// The resource id.
        id: String,

        /// Scope template, e.g. /subscriptions/resourceGroups/Microsoft.Foo/foos.
        #[arg(long)]
        scope: String,

        /// Match only the leaf provider level against the template.
        #[arg(long)]
        route: bool,
    },

    /// Print the id and each of its parents.
    Parents {
        /// The resource id.
        id: String,
    },

    /// Exit 0 if two ids are equal, ignoring case.
    Eq {
        /// First resource id.
        a: String,
        /// Second resource id.
        b: String,
    },

    /// Exit 0 if two ids have the same shape, ignoring names.
    ScopeEq {
        /// First resource id.
        a: String,
        /// Second resource id.
        b: String,
    },
}

/// Description of a parsed id.
#[derive(Debug, Serialize)]
struct Description {
    kind: ResourceKind,
    id: String,
    #[serde(rename = "type")]
    type_string: String,
    scope: String,
    route_scope: String,
    provider: Option<String>,
    parent: Option<String>,
    root_scope: String,
}

impl Description {
    fn new(id: &ResourceId) -> Self {
        Self {
            kind: id.kind(),
            id: id.to_string(),
            type_string: id.type_string(),
            scope: id.scope_string(),
            route_scope: id.route_scope_string(),
            provider: id.provider().map(str::to_string),
            parent: id.parent().map(|parent| parent.to_string()),
            root_scope: id.root_scope().to_string(),
        }
    }
}

fn parse(raw: &str) -> Result<ResourceId> {
    raw.parse()
        .with_context(|| format!("failed to parse resource id {raw:?}"))
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        let format = self.format;
        match self.command {
            Commands::Parse { id } => {
                let id = parse(&id)?;
                info!(id = %id, kind = %id.kind(), "parsed");
                let description = Description::new(&id);
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&description)?)
                    }
                    OutputFormat::Text => print_description(&description),
                }
                Ok(ExitCode::SUCCESS)
            }
            Commands::Normalize { id, scope, route } => {
                let mut id = parse(&id)?;
                if route {
                    match id.as_scoped_mut() {
                        Some(scoped) => scoped.normalize_route_scope(&scope)?,
                        // route and full scope strings coincide for root scopes
                        None => id.normalize(&scope)?,
                    }
                } else {
                    id.normalize(&scope)?;
                }
                print_value(format, &id.to_string())?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Parents { id } => {
                let id = parse(&id)?;
                let chain: Vec<String> = std::iter::once(id.clone())
                    .chain(id.ancestors())
                    .map(|id| id.to_string())
                    .collect();
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chain)?),
                    OutputFormat::Text => chain.iter().for_each(|id| println!("{id}")),
                }
                Ok(ExitCode::SUCCESS)
            }
            Commands::Eq { a, b } => {
                let equal = parse(&a)? == parse(&b)?;
                Ok(print_verdict(equal))
            }
            Commands::ScopeEq { a, b } => {
                let equal = parse(&a)?.scope_equal(&parse(&b)?);
                Ok(print_verdict(equal))
            }
        }
    }
}

fn print_value(format: OutputFormat, value: &str) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{value}"),
    }
    Ok(())
}

fn print_verdict(verdict: bool) -> ExitCode {
    println!("{verdict}");
    if verdict {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_description(description: &Description) {
    let rows = [
        ("kind", Some(description.kind.to_string())),
        ("id", Some(description.id.clone())),
        ("type", Some(description.type_string.clone())),
        ("scope", Some(description.scope.clone())),
        ("route scope", Some(description.route_scope.clone())),
        ("provider", description.provider.clone()),
        ("parent", description.parent.clone()),
        ("root scope", Some(description.root_scope.clone())),
    ];
    for (label, value) in rows {
        println!("{:<12} {}", format!("{label}:"), value.unwrap_or_else(|| "-".to_string()));
    }
}
