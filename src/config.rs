// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

use crate::constants::{self, environment};
use crate::error::ConfigError;
use log::debug;
use std::path::PathBuf;
use std::str::FromStr;

pub fn parse_port(src: &str) -> Result<u16, ConfigError> {
    u16::from_str(src).map_err(|_| ConfigError::MalformedPort(String::from(src)))
}

/// Collector address in the format "server" or "server:port", as exported
/// by xymonlaunch in `XYMSRV`.
#[derive(PartialEq, Eq, Debug)]
pub struct ServerSpec {
    pub server: String,
    pub port: Option<u16>,
}

impl FromStr for ServerSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.contains(':') {
            true => {
                let components: Vec<&str> = s.split(':').collect();
                if components.len() != 2 || components[0].is_empty() {
                    return Err(ConfigError::MalformedAddress(String::from(s)));
                }
                Ok(Self {
                    server: String::from(components[0]),
                    port: Some(parse_port(components[1])?),
                })
            }
            false => Ok(Self {
                server: String::from(s),
                port: None,
            }),
        }
    }
}

/// Where and as whom to report, resolved exactly once at client
/// construction. Nothing in the library reads the process environment after
/// this point.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ConnectionConfig {
    /// Collector host name or address.
    pub server: String,
    /// Collector port.
    pub port: u16,
    /// Name under which this host reports.
    pub machine: String,
    /// Path to the local xymon(1) binary. When set, reports are handed to it
    /// instead of being written to a TCP socket.
    pub relay: Option<PathBuf>,
}

impl ConnectionConfig {
    /// Resolves the connection parameters from the process environment.
    ///
    /// `XYMSRV` and `MACHINE` are required and an unset or empty value is a
    /// [`ConfigError`]. `XYMONDPORT` is consulted only when `XYMSRV` carries
    /// no port, and falls back to [`constants::DEFAULT_PORT`] when absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| lookup(var).filter(|value| !value.is_empty());

        let raw_server =
            get(environment::SERVER_ENV_VAR).ok_or(ConfigError::MissingVariable(
                environment::SERVER_ENV_VAR,
            ))?;
        let server_spec = ServerSpec::from_str(&raw_server)?;
        let port = match server_spec.port {
            Some(port) => port,
            None => match get(environment::PORT_ENV_VAR) {
                Some(raw_port) => parse_port(&raw_port)?,
                None => constants::DEFAULT_PORT,
            },
        };
        let machine = get(environment::MACHINE_ENV_VAR).ok_or(ConfigError::MissingVariable(
            environment::MACHINE_ENV_VAR,
        ))?;
        let relay = get(environment::RELAY_ENV_VAR).map(PathBuf::from);

        let config = Self {
            server: server_spec.server,
            port,
            machine,
            relay,
        };
        debug!(
            "Resolved collector {}:{}, reporting as '{}', relay: {:?}",
            config.server, config.port, config.machine, config.relay
        );
        Ok(config)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }
}

#[cfg(test)]
mod test_parse_port {
    use super::*;

    #[test]
    fn test() {
        assert_eq!(parse_port("1984").unwrap(), 1984);
        assert!(parse_port("kjgsdfljhg").is_err());
        assert!(parse_port("-10").is_err());
        assert!(parse_port("99999999999999999999").is_err());
    }
}
