// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

//! Helper library for writing Xymon extension modules in Rust.
//!
//! A check script creates a [`XymonClient`] bound to a test name, sets the
//! severity of the report, appends free-text sections and sends the rendered
//! status message to the collector. The collector address and the name under
//! which this host reports are taken from the environment exported by
//! xymonlaunch (`XYMSRV`, `XYMONDPORT`, `MACHINE` and optionally `XYMON` for
//! local relay delivery).
//!
//! ```no_run
//! use xymon_client::{Severity, XymonClient};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut xymon = XymonClient::new("cpu")?;
//!     // ... run the actual check ...
//!     xymon.set_severity(Severity::Warning);
//!     xymon.set_title("CPU Check");
//!     xymon.add_section("CPU", "load: 0.5\n0.4\n0.3");
//!     xymon.set_footer("check_cpu", "1");
//!     xymon.send()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
mod client;
mod error;
mod message;
mod severity;

pub use client::XymonClient;
pub use config::ConnectionConfig;
pub use error::{ConfigError, SendError};
pub use message::{Message, Section};
pub use severity::Severity;
