// src/core/status.rs

//! Human-readable reporting of a command's returned status.
//!
//! Reporting never changes the status; it only decides what to print and
//! on which channel.

use serde::Deserialize;

use crate::constants::{
    EINVAL, ENODEV, ENOMEM, KMIP_FAILURE, KMIP_SUCCESS, KMIP_SUCCESS_CONNECTED,
};

/// Which backend the program talks to. Selects the wording of negative statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CliMode {
    /// sedcli's own wording.
    #[default]
    Standard,
    /// KMIP backend wording, prefixed `<prog>-kmip`.
    Kmip,
}

/// Output channel a report belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Standard output.
    Info,
    /// Standard error.
    Error,
}

/// One rendered status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Where the text goes.
    pub channel: Channel,
    /// The message, newline-terminated.
    pub text: String,
}

impl StatusReport {
    fn error(text: String) -> Self {
        Self {
            channel: Channel::Error,
            text,
        }
    }
}

/// Text of a protocol status code, or `None` for codes the table lacks.
pub fn protocol_status_text(status: i32) -> Option<&'static str> {
    let text = match status {
        0x00 => "SUCCESS",
        0x01 => "NOT_AUTHORIZED",
        0x02 => "OBSOLETE",
        0x03 => "SP_BUSY",
        0x04 => "SP_FAILED",
        0x05 => "SP_DISABLED",
        0x06 => "SP_FROZEN",
        0x07 => "NO_SESSIONS_AVAILABLE",
        0x08 => "UNIQUENESS_CONFLICT",
        0x09 => "INSUFFICIENT_SPACE",
        0x0A => "INSUFFICIENT_ROWS",
        0x0B => "OBSOLETE",
        0x0C => "INVALID PARAMETER",
        0x0D => "OBSOLETE",
        0x0E => "OBSOLETE",
        0x0F => "TPER_MALFUNCTION",
        0x10 => "TRANSACTION_FAILURE",
        0x11 => "RESPONSE_OVERFLOW",
        0x12 => "AUTHORITY_LOCKED_OUT",
        0x3F => "FAIL",
        _ => return None,
    };
    Some(text)
}

/// Sub-fields of a 16-bit NVMe completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NvmeStatusFields {
    /// Status code.
    pub sc: u8,
    /// Status code type.
    pub sct: u8,
    /// Command retry delay.
    pub crd: u8,
    /// More information available.
    pub more: bool,
    /// Do not retry.
    pub dnr: bool,
}

impl NvmeStatusFields {
    /// Splits a raw 16-bit status into its fields.
    pub fn from_status(status: u16) -> Self {
        let [low, high] = status.to_le_bytes();
        Self {
            sc: low,
            sct: high & 0x07,
            crd: (high >> 3) & 0x03,
            more: high & 0x20 != 0,
            dnr: high & 0x40 != 0,
        }
    }
}

fn negative_status_text(program: &str, mode: CliMode, status: i32) -> String {
    match mode {
        CliMode::Standard => {
            let meaning = match status {
                s if s == -EINVAL => "Invalid parameter.",
                s if s == -ENODEV => "Couldn't determine device state.",
                s if s == -ENOMEM => "No memory.",
                _ => "Unknown error.",
            };
            format!("{program}: {meaning}\n")
        }
        CliMode::Kmip if status == KMIP_FAILURE => format!("{program}-kmip: Failure.\n"),
        CliMode::Kmip => format!("{program}-kmip: Unknown error.\n"),
    }
}

/// Renders the report for `status` as returned by a command handler.
///
/// In KMIP mode successes are silent, except for a fresh server connection.
pub fn describe_status(program: &str, mode: CliMode, status: i32) -> Option<StatusReport> {
    if status < 0 {
        return Some(StatusReport::error(negative_status_text(program, mode, status)));
    }
    if mode == CliMode::Kmip && status >= KMIP_SUCCESS {
        return (status == KMIP_SUCCESS_CONNECTED).then(|| {
            StatusReport::error(format!(
                "{program}-kmip: Successful connection to the KMIP server.\n"
            ))
        });
    }

    let report = match protocol_status_text(status) {
        Some(text) => StatusReport {
            channel: if status == 0 { Channel::Info } else { Channel::Error },
            text: format!("status: 0x{status:02x} {text}\n"),
        },
        None => match u16::try_from(status) {
            Ok(raw) => {
                let f = NvmeStatusFields::from_status(raw);
                StatusReport::error(format!(
                    "{program}: NVMe error: {status}\nSC: {} | SCT: {} | CRD: {} | M: {} | DNR: {}\n",
                    f.sc,
                    f.sct,
                    f.crd,
                    u8::from(f.more),
                    u8::from(f.dnr)
                ))
            }
            Err(_) => StatusReport::error(format!("status: Unknown status: {status}\n")),
        },
    };
    Some(report)
}
