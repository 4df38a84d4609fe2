// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

use xymon_client::ConnectionConfig;

pub fn init_logging() -> anyhow::Result<flexi_logger::LoggerHandle> {
    Ok(flexi_logger::Logger::try_with_env_or_str("debug")?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?)
}

pub fn testing_config(server: &str, port: u16) -> ConnectionConfig {
    ConnectionConfig {
        server: String::from(server),
        port,
        machine: String::from("web,example,com"),
        relay: None,
    }
}
