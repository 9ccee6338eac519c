//! Log-forwarding resource synthesis: naming, declaration generation, and
//! the resolve -> synthesize -> merge update pipeline.

pub mod naming;
pub mod synthesize;
pub mod update;

pub use synthesize::{
    DeploymentContext, FunctionDescriptor, PERMISSION_LOGICAL_ID, filter_logical_id, synthesize,
};
pub use update::{UpdateOutcome, update_resources};
