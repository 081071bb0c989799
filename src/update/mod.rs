mod check;
mod client;
mod domain;
mod map_versions;
mod query;

pub use check::{QueryError, check};
pub use client::{UpdateClientError, new_client};
pub use domain::VersionCheckRequest;
pub use map_versions::{PackageLine, map_versions};
pub use query::build_request;
