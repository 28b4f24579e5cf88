//! Migration domain: Synapse notebooks and Spark job definitions to Fabric
//!
//! Export lists and fetches artifacts from a Synapse workspace into a local
//! store; import reads the store and creates renamed copies in a Fabric
//! workspace.

pub mod domain;
pub mod error;
pub mod export;
pub mod import;
pub mod store;

// Re-export the main entry points at the crate root for convenience
pub use domain::notebook::{clean_notebook_cells, TRANSIENT_CELL_FIELDS};
pub use domain::translate::{
    normalize_language, translate_job_definition, JobDefinitionPayload, JobDefinitionRecord,
};
pub use error::{MigrationError, Result};
pub use export::{export_notebooks, export_resources, export_spark_job_definitions, ExportReport};
pub use import::{import_notebooks, import_spark_job_definitions, ImportReport};
pub use store::LocalStore;
