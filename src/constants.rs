// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the xymon daemon listens on when `XYMONDPORT` is not exported.
pub const DEFAULT_PORT: u16 = 1984;

/// strftime format of the timestamp in the status line. The collector treats
/// it as opaque text, but the displayed format must match what the target
/// Xymon version documents.
pub const TIMESTAMP_FORMAT: &str = "%c";

/// Bound for connecting to and writing to the collector, so that an
/// unreachable collector cannot hang the calling check process.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub mod environment {
    /// Collector address in the format "host" or "host:port".
    pub const SERVER_ENV_VAR: &str = "XYMSRV";
    /// Collector port, consulted only when `XYMSRV` carries no port.
    pub const PORT_ENV_VAR: &str = "XYMONDPORT";
    /// Name under which this host reports to the collector.
    pub const MACHINE_ENV_VAR: &str = "MACHINE";
    /// Path to the local xymon(1) binary. When exported, reports are relayed
    /// through it instead of being written to a TCP socket.
    pub const RELAY_ENV_VAR: &str = "XYMON";
}
