// ── Communication severity ──
//
// Three-state health classification attached to every status-tree node.
// Serialized as the CSS class strings the dashboard's tree widget styles
// rows with, so the variant renames are part of the output contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health classification derived from a monitored flag and an error counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommSeverity {
    /// Daemon is monitored and the channel reports no errors.
    #[serde(rename = "communication-ok")]
    Ok,
    /// Daemon is monitored and the channel reports at least one error.
    #[serde(rename = "communication-failing")]
    Failing,
    /// Daemon is not monitored; error counters are meaningless.
    #[serde(rename = "communication-disabled")]
    Disabled,
}

impl CommSeverity {
    /// Classify a single communication channel.
    ///
    /// `monitored` takes precedence: an unmonitored daemon is `Disabled` no
    /// matter what its counters say. Only a strictly positive error count is
    /// `Failing` — an absent counter means the channel was never attempted
    /// and classifies the same as zero.
    pub fn classify(monitored: bool, errors: Option<i64>) -> Self {
        if !monitored {
            Self::Disabled
        } else if errors.unwrap_or(0) > 0 {
            Self::Failing
        } else {
            Self::Ok
        }
    }

    /// The CSS class string the dashboard styles rows with.
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Ok => "communication-ok",
            Self::Failing => "communication-failing",
            Self::Disabled => "communication-disabled",
        }
    }

    pub fn is_failing(self) -> bool {
        matches!(self, Self::Failing)
    }
}

impl fmt::Display for CommSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_class())
    }
}
