use shared::{ImageCapture, RemoteStatus, ScanStatus, ScanStatusResponse};

pub const READY_STAGE: &str = "Ready";
pub const INITIALIZING_STAGE: &str = "Initializing scan...";
pub const WAITING_STAGE: &str = "Waiting for status...";

/// What a poll response did to the session, for the controller to act on.
#[derive(Debug, PartialEq)]
pub enum PollOutcome {
    /// The server no longer knows the scan id. Terminal for this session.
    SessionLost,
    Progressed { captured: Vec<ImageCapture> },
    Completed { captured: Vec<ImageCapture> },
}

/// Gate for async completions. A response is applied only when it was issued
/// under the session's current epoch; stopping or restarting the session
/// advances the epoch, so a late response falls through and is dropped
/// instead of mutating a reset session.
pub fn response_is_current(issued_epoch: u32, current_epoch: u32) -> bool {
    issued_epoch == current_epoch
}

/// Client-side mirror of one server-tracked scan job.
///
/// Mutated only by the poll handlers; everything else reads it. Progress is
/// clamped to never regress: a poll reporting less than the stored value (or
/// omitting the field) keeps the last-known maximum, so a stale or duplicate
/// response cannot walk the progress bar backwards.
pub struct ScanSession {
    pub id: Option<String>,
    pub status: ScanStatus,
    pub progress: u32,
    pub stage: String,
    pub images: Vec<ImageCapture>,
    captured_deciles: [bool; 10],
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            id: None,
            status: ScanStatus::Idle,
            progress: 0,
            stage: READY_STAGE.to_string(),
            images: Vec::new(),
            captured_deciles: [false; 10],
        }
    }

    /// Returns the session to its idle defaults, discarding any captures.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Clears prior state and marks the session as scanning, ahead of the
    /// job-creation request assigning an id.
    pub fn begin(&mut self) {
        self.reset();
        self.status = ScanStatus::Scanning;
        self.stage = INITIALIZING_STAGE.to_string();
    }

    /// Folds one status response into the session.
    ///
    /// Captures are derived from server-reported progress rather than elapsed
    /// time: each ten-percent threshold synthesizes one image the first time
    /// it is crossed, so repeated or skipped deciles never duplicate or drop
    /// captures.
    pub fn apply_poll(&mut self, resp: &ScanStatusResponse, timestamp: &str) -> PollOutcome {
        if resp.status == RemoteStatus::NotFound {
            return PollOutcome::SessionLost;
        }

        let reported = resp.progress.unwrap_or(0.0).clamp(0.0, 100.0).round() as u32;
        if reported > self.progress {
            self.progress = reported;
        }
        if resp.status == RemoteStatus::Complete {
            self.progress = 100;
        }
        self.stage = resp
            .stage
            .clone()
            .unwrap_or_else(|| WAITING_STAGE.to_string());

        let captured = self.capture_crossed_deciles(timestamp);

        if resp.status == RemoteStatus::Complete {
            self.status = ScanStatus::Complete;
            PollOutcome::Completed { captured }
        } else {
            self.status = if resp.status == RemoteStatus::Processing {
                ScanStatus::Processing
            } else {
                ScanStatus::Scanning
            };
            PollOutcome::Progressed { captured }
        }
    }

    fn capture_crossed_deciles(&mut self, timestamp: &str) -> Vec<ImageCapture> {
        let mut captured = Vec::new();
        for decile in 1..=(self.progress / 10) as usize {
            if self.captured_deciles[decile - 1] {
                continue;
            }
            self.captured_deciles[decile - 1] = true;
            let id = format!("IMG_{:03}", decile);
            captured.push(ImageCapture {
                url: format!("https://picsum.photos/seed/{}/400/300", id),
                id,
                timestamp: timestamp.to_string(),
            });
        }
        self.images.extend(captured.iter().cloned());
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(remote: RemoteStatus, progress: Option<f64>, stage: Option<&str>) -> ScanStatusResponse {
        ScanStatusResponse {
            status: remote,
            progress,
            stage: stage.map(String::from),
        }
    }

    fn running(progress: f64) -> ScanStatusResponse {
        status(RemoteStatus::Running, Some(progress), Some("Scanning..."))
    }

    #[test]
    fn progress_never_regresses() {
        let mut session = ScanSession::new();
        session.begin();
        session.apply_poll(&running(40.0), "t");
        session.apply_poll(&running(25.0), "t");
        assert_eq!(session.progress, 40);
        session.apply_poll(&status(RemoteStatus::Running, None, None), "t");
        assert_eq!(session.progress, 40);
    }

    #[test]
    fn missing_fields_take_documented_defaults() {
        let mut session = ScanSession::new();
        session.begin();
        session.apply_poll(&status(RemoteStatus::Running, None, None), "t");
        assert_eq!(session.progress, 0);
        assert_eq!(session.stage, WAITING_STAGE);
    }

    #[test]
    fn capture_per_crossed_decile_is_idempotent() {
        let mut session = ScanSession::new();
        session.begin();
        session.apply_poll(&running(10.0), "t1");
        session.apply_poll(&running(10.0), "t2");
        session.apply_poll(&running(25.0), "t3");
        session.apply_poll(&running(55.0), "t4");

        let ids: Vec<&str> = session.images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["IMG_001", "IMG_002", "IMG_003", "IMG_004", "IMG_005"]);
    }

    #[test]
    fn scan_completes_after_repeated_and_skipped_deciles() {
        let mut session = ScanSession::new();
        session.begin();
        session.id = Some("abc".into());

        for progress in [10.0, 10.0, 25.0, 55.0] {
            let outcome = session.apply_poll(&running(progress), "t");
            assert!(matches!(outcome, PollOutcome::Progressed { .. }));
        }
        let outcome = session.apply_poll(
            &status(RemoteStatus::Complete, Some(100.0), Some("Analysis complete")),
            "t",
        );

        assert!(matches!(outcome, PollOutcome::Completed { .. }));
        assert_eq!(session.status, ScanStatus::Complete);
        assert_eq!(session.progress, 100);
        assert_eq!(session.images.len(), 10);
        let mut seen = std::collections::HashSet::new();
        assert!(session.images.iter().all(|i| seen.insert(i.id.clone())));
    }

    #[test]
    fn not_found_reports_session_lost_without_mutating() {
        let mut session = ScanSession::new();
        session.begin();
        session.apply_poll(&running(30.0), "t");

        let outcome = session.apply_poll(&status(RemoteStatus::NotFound, None, None), "t");
        assert_eq!(outcome, PollOutcome::SessionLost);
        assert_eq!(session.progress, 30);

        session.reset();
        assert_eq!(session.status, ScanStatus::Idle);
        assert_eq!(session.progress, 0);
        assert!(session.images.is_empty());
    }

    #[test]
    fn stale_response_after_stop_leaves_session_untouched() {
        let mut session = ScanSession::new();
        session.begin();
        let issued_epoch = 1;
        session.apply_poll(&running(30.0), "t");

        // User stop: the session resets and the epoch advances past the
        // poll that is still in flight.
        session.reset();
        let current_epoch = 2;

        assert!(!response_is_current(issued_epoch, current_epoch));
        if response_is_current(issued_epoch, current_epoch) {
            session.apply_poll(&running(80.0), "t");
        }
        assert_eq!(session.status, ScanStatus::Idle);
        assert_eq!(session.progress, 0);
        assert_eq!(session.stage, READY_STAGE);
        assert!(session.images.is_empty());
    }

    #[test]
    fn processing_status_is_mirrored() {
        let mut session = ScanSession::new();
        session.begin();
        session.apply_poll(
            &status(RemoteStatus::Processing, Some(100.0), Some("Processing images...")),
            "t",
        );
        assert_eq!(session.status, ScanStatus::Processing);
    }

    #[test]
    fn begin_clears_previous_session() {
        let mut session = ScanSession::new();
        session.begin();
        session.id = Some("abc".into());
        session.apply_poll(&running(80.0), "t");
        assert!(!session.images.is_empty());

        session.begin();
        assert_eq!(session.id, None);
        assert_eq!(session.progress, 0);
        assert_eq!(session.stage, INITIALIZING_STAGE);
        assert!(session.images.is_empty());

        // deciles re-arm after a restart
        session.apply_poll(&running(10.0), "t");
        assert_eq!(session.images.len(), 1);
    }
}
