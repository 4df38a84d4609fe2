// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

use crate::config::ConnectionConfig;
use crate::constants;
use crate::error::{ConfigError, SendError};
use crate::message::Message;
use crate::severity::Severity;
use log::{debug, info};
use std::io::{Error as IoError, ErrorKind, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::path::Path;
use std::process::{Command, Stdio};

/// Builds one status report for a single Xymon test and delivers it to the
/// collector with exactly one fire-and-forget attempt per [`send`] call.
///
/// [`send`]: XymonClient::send
#[derive(Debug)]
pub struct XymonClient {
    test: String,
    config: ConnectionConfig,
    message: Message,
}

impl XymonClient {
    /// Creates a client for the given test name, resolving the collector
    /// address and the local machine identity from the environment. Fails
    /// fast with a [`ConfigError`] when a required variable is missing, so
    /// that the check script does not build a report it cannot deliver.
    pub fn new(test: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::with_config(test, ConnectionConfig::from_env()?))
    }

    /// Creates a client with explicitly resolved connection parameters.
    pub fn with_config(test: impl Into<String>, config: ConnectionConfig) -> Self {
        Self {
            test: test.into(),
            config,
            message: Message::new(),
        }
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.message.set_severity(severity);
    }

    pub fn severity(&self) -> Severity {
        self.message.severity()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.message.set_title(title);
    }

    pub fn add_section(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.message.add_section(title, body);
    }

    pub fn set_footer(&mut self, script_name: impl Into<String>, version: impl Into<String>) {
        self.message.set_footer(script_name, version);
    }

    pub fn set_lifetime(&mut self, minutes: u32) {
        self.message.set_lifetime(minutes);
    }

    /// Renders the report with the current local time and hands it to the
    /// collector, either over a transient TCP connection or through the
    /// local xymon(1) relay binary when the environment exports one.
    ///
    /// The protocol is fire-and-forget: no acknowledgment is read, success
    /// means the payload was written without a transport error. Calling
    /// `send` again delivers the report again.
    pub fn send(&self) -> Result<(), SendError> {
        let timestamp = chrono::Local::now()
            .format(constants::TIMESTAMP_FORMAT)
            .to_string();
        let payload = self
            .message
            .render(&self.config.machine, &self.test, &timestamp);
        debug!("Rendered payload:\n{}", payload);
        match &self.config.relay {
            Some(relay) => self.send_via_relay(relay, &payload),
            None => self.send_via_network(&payload),
        }
    }

    fn send_via_network(&self, payload: &str) -> Result<(), SendError> {
        let address = self.config.address();
        info!(
            "Sending {} byte report for test '{}' to {}",
            payload.len(),
            self.test,
            address
        );
        let sock_addr = resolve_address(&self.config.server, self.config.port, &address)?;
        let network_error = |source: IoError| SendError::Network {
            address: address.clone(),
            source,
        };
        // The stream lives only within this call; it is closed on every
        // path, errors included.
        let mut stream =
            TcpStream::connect_timeout(&sock_addr, constants::SEND_TIMEOUT).map_err(network_error)?;
        stream
            .set_write_timeout(Some(constants::SEND_TIMEOUT))
            .map_err(network_error)?;
        stream.write_all(payload.as_bytes()).map_err(network_error)?;
        stream.flush().map_err(network_error)?;
        stream.shutdown(Shutdown::Both).map_err(network_error)?;
        Ok(())
    }

    fn send_via_relay(&self, relay: &Path, payload: &str) -> Result<(), SendError> {
        let command = relay.display().to_string();
        info!(
            "Relaying report for test '{}' through {}",
            self.test, command
        );
        let relay_error = |source: IoError| SendError::Relay {
            command: command.clone(),
            source,
        };
        // "@" makes xymon(1) read the message from stdin.
        let mut child = Command::new(relay)
            .arg(&self.config.server)
            .arg("@")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(relay_error)?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| relay_error(IoError::new(ErrorKind::BrokenPipe, "stdin not captured")))?;
        if let Err(source) = stdin.write_all(payload.as_bytes()) {
            drop(stdin);
            // Reap the child before surfacing the write error.
            let _ = child.wait();
            return Err(relay_error(source));
        }
        // Close stdin so the relay sees end of message.
        drop(stdin);
        let status = child.wait().map_err(relay_error)?;
        if !status.success() {
            return Err(SendError::RelayStatus { command, status });
        }
        Ok(())
    }
}

fn resolve_address(server: &str, port: u16, address: &str) -> Result<SocketAddr, SendError> {
    (server, port)
        .to_socket_addrs()
        .map_err(|source| SendError::AddressResolution {
            address: String::from(address),
            source,
        })?
        .next()
        .ok_or_else(|| SendError::AddressResolution {
            address: String::from(address),
            source: IoError::new(ErrorKind::NotFound, "no address records"),
        })
}
