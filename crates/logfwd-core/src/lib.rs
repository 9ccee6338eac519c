//! Shared declaration model, resource-map merge, and error types.

pub mod error;
pub mod resources;
pub mod types;

pub use error::ForwardingError;
pub use resources::{
    Declaration, DeclarationProperties, LambdaPermissionProperties, ResourceMap,
    SubscriptionFilterProperties, merge_resources,
};
pub use types::OutputFormat;
