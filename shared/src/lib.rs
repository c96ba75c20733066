use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub mod csv;
pub mod sort;

pub use sort::{sort_defects, DefectSortKey};

/// Client-side scan lifecycle status, mirrored into the status badge.
#[derive(Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScanStatus {
    Idle,
    Scanning,
    Processing,
    Complete,
    Error,
}

/// Ordinal defect priority. Derived `Ord` gives `Low < Medium < High`.
#[derive(Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One detected defect. The bounding box is expressed in percentages of the
/// reference image's width and height, so it is resolution-independent.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Defect {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub confidence: f64,
    pub severity: Severity,
}

/// A synthetic capture taken as the scan crosses each ten-percent threshold.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ImageCapture {
    pub id: String,
    pub url: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub kind: LogKind,
}

/// Status string the scan server reports. The server echoes whatever its
/// stored job document holds, so anything unrecognized is treated as a scan
/// still in flight rather than a protocol error.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum RemoteStatus {
    Starting,
    Scanning,
    Processing,
    Running,
    Complete,
    NotFound,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct StartScanResponse {
    #[serde(default)]
    pub scan_id: Option<String>,
}

/// Body of `GET /api/scan/status/{scan_id}`. Progress and stage are optional
/// on the wire; the session store substitutes documented defaults.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ScanStatusResponse {
    pub status: RemoteStatus,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub stage: Option<String>,
}

/// Body of `GET /api/scan/results/{scan_id}`. The summary is an opaque
/// key/value bag passed through to the analysis-summary card unmodified.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ScanResultsResponse {
    pub status: RemoteStatus,
    #[serde(default)]
    pub defects: Option<Vec<Defect>>,
    #[serde(default)]
    pub summary: Option<serde_json::Value>,
    #[serde(default)]
    pub scan_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_is_low_medium_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn remote_status_tolerates_unknown_strings() {
        let resp: ScanStatusResponse =
            serde_json::from_str(r#"{"status":"rebooting","progress":12.0}"#).unwrap();
        assert_eq!(resp.status, RemoteStatus::Unknown);
        assert_eq!(resp.progress, Some(12.0));
        assert_eq!(resp.stage, None);
    }

    #[test]
    fn status_response_parses_server_document() {
        let resp: ScanStatusResponse = serde_json::from_str(
            r#"{"status":"processing","progress":100,"stage":"Processing images...","id":"abc"}"#,
        )
        .unwrap();
        assert_eq!(resp.status, RemoteStatus::Processing);
        assert_eq!(resp.stage.as_deref(), Some("Processing images..."));
    }

    #[test]
    fn defect_round_trips_with_type_field() {
        let json = r#"{"id":"DEF001","type":"Scratch","x":25,"y":15,"width":8,"height":3,"confidence":0.95,"severity":"high"}"#;
        let defect: Defect = serde_json::from_str(json).unwrap();
        assert_eq!(defect.kind, "Scratch");
        assert_eq!(defect.severity, Severity::High);
        let back = serde_json::to_value(&defect).unwrap();
        assert_eq!(back["type"], "Scratch");
        assert_eq!(back["severity"], "high");
    }
}
