//! Configuration infrastructure module

mod user_dir;

pub use user_dir::UserConfigStore;
