//! Notification platform infrastructure module
//!
//! WinRT toasts on Windows, notify-rust desktop notifications elsewhere.

#[cfg(not(windows))]
mod notify_rust;
#[cfg(windows)]
mod winrt;

#[cfg(not(windows))]
pub use notify_rust::NotifyRustPlatform;
#[cfg(windows)]
pub use winrt::WinRtToastPlatform;

use crate::application::ports::ToastPlatform;

/// Create the notification platform for the current host
pub fn create_platform() -> Box<dyn ToastPlatform> {
    #[cfg(windows)]
    {
        Box::new(WinRtToastPlatform::new())
    }
    #[cfg(not(windows))]
    {
        Box::new(NotifyRustPlatform::new())
    }
}
