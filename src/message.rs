// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

use crate::severity::Severity;

/// A named block of free text within a report. The body is reproduced
/// verbatim in the payload, embedded newlines included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Footer {
    script_name: String,
    version: String,
}

/// One status report under construction: severity, optional title, sections
/// in insertion order and an optional footer. Pure data, no I/O; rendering
/// into the wire payload happens in [`Message::render`].
#[derive(Clone, Debug, Default)]
pub struct Message {
    severity: Severity,
    title: Option<String>,
    sections: Vec<Section>,
    footer: Option<Footer>,
    lifetime: Option<u32>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the current severity, whatever it was.
    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Sets the headline shown on the check page, right below the status line.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Appends a section. Sections render top-to-bottom in call order.
    pub fn add_section(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.sections.push(Section {
            title: title.into(),
            body: body.into(),
        });
    }

    /// Records the originating script and its version for the last line of
    /// the report.
    pub fn set_footer(&mut self, script_name: impl Into<String>, version: impl Into<String>) {
        self.footer = Some(Footer {
            script_name: script_name.into(),
            version: version.into(),
        });
    }

    /// Minutes until the collector turns the report purple (stale). Rendered
    /// as `status+N` in the status line.
    pub fn set_lifetime(&mut self, minutes: u32) {
        self.lifetime = Some(minutes);
    }

    /// Renders the payload accepted by the xymon daemon. Deterministic for a
    /// given state and total: any input strings are representable verbatim.
    ///
    /// A message without title, sections and footer still renders a valid
    /// header-only payload, since the status line only needs the severity.
    pub fn render(&self, machine: &str, test: &str, timestamp: &str) -> String {
        let lifetime = match self.lifetime {
            Some(minutes) => format!("+{}", minutes),
            None => String::new(),
        };
        let mut payload = format!(
            "status{} {}.{} {} {}\n",
            lifetime, machine, test, self.severity, timestamp
        );
        if let Some(title) = &self.title {
            payload.push_str(&format!("<br><h1>{}</h1><hr><br>", title));
        }
        for section in &self.sections {
            payload.push_str(&format!(
                "<h2>{}</h2><p>{}</p><br>",
                section.title, section.body
            ));
        }
        if let Some(footer) = &self.footer {
            payload.push_str(&format!(
                "<br><center>xymon script: {} version {}</center>",
                footer.script_name, footer.version
            ));
        }
        payload.push('\n');
        payload
    }
}
