//! Application layer - Use cases and port interfaces
//!
//! Contains the toast pipeline and trait definitions
//! for external system interactions.

pub mod debug_log;
pub mod ports;
pub mod show_toast;

// Re-export use cases
pub use debug_log::{DebugLog, DebugSetupError, Stage};
pub use show_toast::{ShowToastUseCase, ToastError, ToastReceipt};
