// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

// Test files are compiled to seperate crates, so there
// may be some unused functions in the common module
#![allow(dead_code)]
mod common;

use anyhow::Result as AnyhowResult;
use std::io::Read;
use std::net::TcpListener;
use xymon_client::{SendError, Severity, XymonClient};

#[test]
fn test_send_delivers_rendered_payload() -> AnyhowResult<()> {
    // Uncomment for debugging
    // common::init_logging()?;

    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    let collector = std::thread::spawn(move || -> AnyhowResult<String> {
        let (mut stream, _) = listener.accept()?;
        let mut received = String::new();
        stream.read_to_string(&mut received)?;
        Ok(received)
    });

    let mut xymon = XymonClient::with_config("cpu", common::testing_config("127.0.0.1", port));
    xymon.set_severity(Severity::Warning);
    xymon.set_title("CPU Check");
    xymon.add_section("CPU", "load: 0.5\n0.4\n0.3");
    xymon.set_footer("check_cpu", "1");
    xymon.send()?;

    let received = collector.join().unwrap()?;
    assert!(received.starts_with("status web,example,com.cpu yellow "));
    assert!(received.contains("<br><h1>CPU Check</h1><hr><br>"));
    assert!(received.contains("<h2>CPU</h2><p>load: 0.5\n0.4\n0.3</p>"));
    assert!(received.ends_with("<br><center>xymon script: check_cpu version 1</center>\n"));
    Ok(())
}

#[test]
fn test_send_twice_delivers_twice() -> AnyhowResult<()> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    let collector = std::thread::spawn(move || -> AnyhowResult<Vec<String>> {
        let mut reports = vec![];
        for _ in 0..2 {
            let (mut stream, _) = listener.accept()?;
            let mut received = String::new();
            stream.read_to_string(&mut received)?;
            reports.push(received);
        }
        Ok(reports)
    });

    let xymon = XymonClient::with_config("disk", common::testing_config("127.0.0.1", port));
    xymon.send()?;
    xymon.send()?;

    let reports = collector.join().unwrap()?;
    assert_eq!(reports.len(), 2);
    for report in reports {
        assert!(report.starts_with("status web,example,com.disk green "));
    }
    Ok(())
}

#[test]
fn test_send_with_nothing_listening_is_delivery_error() -> AnyhowResult<()> {
    // Bind and drop a listener to obtain a port with nothing behind it.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };

    let xymon = XymonClient::with_config("cpu", common::testing_config("127.0.0.1", port));
    // Repeated failing sends must not leak sockets; the process would run
    // out of descriptors here if the stream were not scoped to each call.
    for _ in 0..50 {
        let error = xymon.send().unwrap_err();
        assert!(matches!(error, SendError::Network { .. }));
    }
    Ok(())
}

#[test]
fn test_construction_fails_without_environment() {
    // All environment manipulation lives in this single test to keep the
    // other tests independent of the process environment.
    std::env::remove_var("XYMSRV");
    std::env::remove_var("XYMONDPORT");
    std::env::set_var("MACHINE", "web,example,com");

    let error = XymonClient::new("cpu").unwrap_err();
    assert_eq!(
        error.to_string(),
        "The environment variable XYMSRV is not set"
    );
}

#[cfg(unix)]
mod relay {
    use super::common;
    use anyhow::Result as AnyhowResult;
    use std::os::unix::fs::PermissionsExt;
    use xymon_client::{SendError, Severity, XymonClient};

    fn testing_relay_config(relay: &std::path::Path) -> xymon_client::ConnectionConfig {
        let mut config = common::testing_config("127.0.0.1", 1984);
        config.relay = Some(relay.to_path_buf());
        config
    }

    #[test]
    fn test_relay_receives_payload_on_stdin() -> AnyhowResult<()> {
        let test_dir = tempfile::Builder::new()
            .prefix("xymon_client_test_relay")
            .tempdir()?;
        let captured = test_dir.path().join("captured");
        let relay = test_dir.path().join("xymon");
        std::fs::write(&relay, format!("#!/bin/sh\ncat > {}\n", captured.display()))?;
        std::fs::set_permissions(&relay, std::fs::Permissions::from_mode(0o755))?;

        let mut xymon = XymonClient::with_config("cpu", testing_relay_config(&relay));
        xymon.set_severity(Severity::Critical);
        xymon.add_section("CPU", "load: 12.3");
        xymon.send()?;

        let received = std::fs::read_to_string(&captured)?;
        assert!(received.starts_with("status web,example,com.cpu red "));
        assert!(received.contains("<h2>CPU</h2><p>load: 12.3</p>"));
        Ok(())
    }

    #[test]
    fn test_relay_nonzero_exit_is_delivery_error() -> AnyhowResult<()> {
        let test_dir = tempfile::Builder::new()
            .prefix("xymon_client_test_relay")
            .tempdir()?;
        let relay = test_dir.path().join("xymon");
        std::fs::write(&relay, "#!/bin/sh\ncat > /dev/null\nexit 3\n")?;
        std::fs::set_permissions(&relay, std::fs::Permissions::from_mode(0o755))?;

        let xymon = XymonClient::with_config("cpu", testing_relay_config(&relay));
        let error = xymon.send().unwrap_err();
        assert!(matches!(error, SendError::RelayStatus { .. }));
        Ok(())
    }

    #[test]
    fn test_missing_relay_binary_is_delivery_error() {
        let relay = std::path::Path::new("/nonexistent/xymon-client-test/xymon");
        let xymon = XymonClient::with_config("cpu", testing_relay_config(relay));
        let error = xymon.send().unwrap_err();
        assert!(matches!(error, SendError::Relay { .. }));
    }
}
