//! Schema registry access: resource names, schema records, and the gateway
//! used to list and fetch them.

pub mod gateway;
pub mod name;
pub mod schema;

pub use gateway::{HttpGateway, RegistryGateway, DEFAULT_ENDPOINT};
pub use name::{strip_revision, SchemaName, REVISION_SEPARATOR};
pub use schema::{Schema, SchemaType};
