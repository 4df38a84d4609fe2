// Copyright (C) 2025 xymon-client authors - License: GNU General Public License v3
// This file is part of xymon-client. It is subject to the terms and conditions
// defined in the file COPYING, which is part of this source code package.

use anyhow::{anyhow, Error as AnyhowError, Result as AnyhowResult};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

/// Criticality of a status report, mapped onto the Xymon colors.
///
/// The severity of a report is whatever the check script last set; the
/// library never escalates or downgrades it on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// Protocol color token used in the status line.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Ok => "green",
            Self::Warning => "yellow",
            Self::Critical => "red",
        }
    }

    /// Inline icon token (`&green`, `&yellow`, `&red`) for coloring
    /// individual lines inside a section body.
    pub fn markup(&self) -> &'static str {
        match self {
            Self::Ok => "&green",
            Self::Warning => "&yellow",
            Self::Critical => "&red",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(f, "{}", self.color())
    }
}

impl FromStr for Severity {
    type Err = AnyhowError;

    fn from_str(s: &str) -> AnyhowResult<Self> {
        match s.trim_start_matches('&').to_lowercase().as_str() {
            "green" => Ok(Self::Ok),
            "yellow" => Ok(Self::Warning),
            "red" => Ok(Self::Critical),
            other => Err(anyhow!("Illegal color for xymon: {}", other)),
        }
    }
}
