// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

use std::io::Error as IoError;
use std::process::ExitStatus;
use thiserror::Error;

/// A required connection parameter could not be resolved from the
/// environment. Raised at client construction, before any report is built,
/// since a misaddressed report is dropped by the collector without any
/// client-visible error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("Failed to split '{0}' into server and port at ':'")]
    MalformedAddress(String),

    #[error("Port is not an integer in the range 0 - 65535: '{0}'")]
    MalformedPort(String),
}

/// The single delivery attempt of [`send`](crate::XymonClient::send) failed.
/// The library never retries; whether a failed report warrants a nonzero
/// exit status is up to the check script.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("Failed to resolve collector address {address}")]
    AddressResolution {
        address: String,
        #[source]
        source: IoError,
    },

    #[error("Failed to deliver report to {address}")]
    Network {
        address: String,
        #[source]
        source: IoError,
    },

    #[error("Failed to deliver report through relay command {command}")]
    Relay {
        command: String,
        #[source]
        source: IoError,
    },

    #[error("Relay command {command} exited with {status}")]
    RelayStatus { command: String, status: ExitStatus },
}
