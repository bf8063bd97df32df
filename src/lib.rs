//! toastmaker - Windows 10 toast notifications from the command line
//!
//! This crate shows toast notifications either from a caller-supplied
//! markup document or from a generic template filled with plain fields.
//! Every invocation runs the same ordered pipeline and reports a single
//! [`ResultCode`](domain::ResultCode).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Result codes, markup documents, requests and configuration
//! - **Application**: The toast pipeline and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Get-StartApps, WinRT, notify-rust, config file)
//! - **CLI**: Command-line interface, argument parsing and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
