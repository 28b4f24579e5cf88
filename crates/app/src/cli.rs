//! Command line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use synfab_common::ResourceType;

/// synfab - migrate Synapse notebooks and Spark job definitions to Fabric.
#[derive(Debug, Parser)]
#[command(name = "synfab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export artifacts from a Synapse workspace into the local store.
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Import exported artifacts into a Fabric workspace.
    Import {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        destination: DestinationArgs,
    },

    /// Export then import in one run.
    Migrate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        destination: DestinationArgs,
    },
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Synapse workspace name.
    #[arg(long, env = "SYNAPSE_WORKSPACE")]
    pub workspace: String,
}

#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Folder holding one sub-folder per resource type.
    #[arg(short, long, env = "SYNFAB_OUTPUT", default_value = "synapse_export")]
    pub output: PathBuf,

    /// Resource types to process.
    #[arg(long = "type", value_enum, default_value_t = TypeSelection::All)]
    pub types: TypeSelection,
}

#[derive(Debug, Clone, Args)]
pub struct DestinationArgs {
    /// Fabric workspace id.
    #[arg(long, env = "FABRIC_WORKSPACE_ID")]
    pub workspace_id: String,

    /// Prefix prepended to every imported display name.
    #[arg(short, long, env = "SYNFAB_PREFIX")]
    pub prefix: String,

    /// Default lakehouse of imported Spark job definitions.
    #[arg(long, env = "FABRIC_LAKEHOUSE_ID")]
    pub lakehouse_id: Option<String>,

    /// Import only these artifacts (repeatable); defaults to every exported file.
    #[arg(short, long = "name")]
    pub names: Vec<String>,
}

impl DestinationArgs {
    pub fn names(&self) -> Option<&[String]> {
        if self.names.is_empty() {
            None
        } else {
            Some(self.names.as_slice())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeSelection {
    Notebooks,
    #[value(name = "sjd", alias = "spark-job-definitions")]
    SparkJobDefinitions,
    All,
}

impl TypeSelection {
    pub fn resource_types(&self) -> Vec<ResourceType> {
        match self {
            TypeSelection::Notebooks => vec![ResourceType::Notebooks],
            TypeSelection::SparkJobDefinitions => vec![ResourceType::SparkJobDefinitions],
            TypeSelection::All => ResourceType::ALL.to_vec(),
        }
    }
}
