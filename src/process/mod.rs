/*!
 * Process Module
 * Process descriptors, per-run working copies, and input validation
 */

pub mod entry;
pub mod types;
pub mod validation;

// Re-export for convenience
pub use entry::Entry;
pub use types::{ProcessSpec, ProcessState};
pub use validation::validate_processes;
