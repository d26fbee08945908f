// ============================================================================
// Lifecycle Module
// Live-instance accounting shared by every vector
// ============================================================================

mod instance_counter;

pub use instance_counter::{InstanceCounter, InstanceGuard};
