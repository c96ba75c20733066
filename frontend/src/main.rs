use gloo_timers::callback::{Interval, Timeout};
use shared::{DefectSortKey, LogKind, RemoteStatus, ScanResultsResponse, ScanStatus, ScanStatusResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod api;
mod components;
mod logs;
mod overlay;
mod session;

use components::dashboard::render_dashboard;
use components::notice::render_notice;
use components::results::render_results_page;
use components::utils::{format_scan_date, now_timestamp, today_iso_date};
use logs::LogBuffer;
use overlay::OverlayState;
use session::{response_is_current, PollOutcome, ScanSession};

const POLL_PERIOD_MS: u32 = 1_000;
const RESULTS_NAV_DELAY_MS: u32 = 2_000;
const NOTICE_DISMISS_MS: u32 = 4_000;

// Models
pub enum View {
    Dashboard,
    Results { scan_id: String },
}

pub struct Notice {
    pub message: String,
    pub kind: LogKind,
}

pub struct ScanResults {
    pub defects: Vec<shared::Defect>,
    pub summary: serde_json::Map<String, serde_json::Value>,
    pub scan_date: String,
}

// Yew msg components
pub enum Msg {
    // Scan lifecycle
    StartScan,
    StopScan,
    ScanStarted(u32, Result<String, String>),
    PollTick,
    PollResult(u32, Result<ScanStatusResponse, String>),

    // Results view
    OpenResults(String),
    ResultsLoaded(String, Result<ScanResultsResponse, String>),
    BackToDashboard,
    DownloadReport,
    ExportCsv,
    SortBy(DefectSortKey),

    // Overlay interaction
    ZoomIn,
    ZoomOut,
    ZoomReset,
    DefectEnter(String),
    DefectLeave(String),
    DefectClick(String),

    // UI states
    DismissNotice,
}

// Main component
pub struct Model {
    pub view: View,
    pub session: ScanSession,
    pub logs: LogBuffer,
    pub notice: Option<Notice>,
    pub results: Option<ScanResults>,
    pub results_loading: bool,
    pub sort_key: DefectSortKey,
    pub overlay: OverlayState,

    // Poll responses and the creation response carry the epoch they were
    // issued under; a mismatch means the session was stopped or restarted
    // while the request was in flight and the response is discarded.
    epoch: u32,
    poll: Option<Interval>,
    poll_in_flight: bool,
    nav_timeout: Option<Timeout>,
    notice_timeout: Option<Timeout>,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut logs = LogBuffer::new();
        let now = now_timestamp();
        logs.push(LogKind::Success, "System initialized successfully", &now);
        logs.push(LogKind::Info, "Camera calibration complete", &now);
        logs.push(LogKind::Success, "YOLO model loaded", &now);

        Self {
            view: View::Dashboard,
            session: ScanSession::new(),
            logs,
            notice: None,
            results: None,
            results_loading: false,
            sort_key: DefectSortKey::Severity,
            overlay: OverlayState::new(),
            epoch: 0,
            poll: None,
            poll_in_flight: false,
            nav_timeout: None,
            notice_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Scan lifecycle
            Msg::StartScan => self.handle_start_scan(ctx),
            Msg::StopScan => self.handle_stop_scan(ctx),
            Msg::ScanStarted(epoch, result) => self.handle_scan_started(ctx, epoch, result),
            Msg::PollTick => self.handle_poll_tick(ctx),
            Msg::PollResult(epoch, result) => self.handle_poll_result(ctx, epoch, result),

            // Results view
            Msg::OpenResults(scan_id) => self.handle_open_results(ctx, scan_id),
            Msg::ResultsLoaded(scan_id, result) => {
                self.handle_results_loaded(ctx, scan_id, result)
            }
            Msg::BackToDashboard => {
                self.view = View::Dashboard;
                self.results = None;
                self.results_loading = false;
                true
            }
            Msg::DownloadReport => self.handle_download_report(ctx),
            Msg::ExportCsv => self.handle_export_csv(),
            Msg::SortBy(key) => {
                self.sort_key = key;
                true
            }

            // Overlay interaction
            Msg::ZoomIn => {
                self.overlay.zoom_in();
                true
            }
            Msg::ZoomOut => {
                self.overlay.zoom_out();
                true
            }
            Msg::ZoomReset => {
                self.overlay.reset_zoom();
                true
            }
            Msg::DefectEnter(id) => {
                self.overlay.pointer_enter(&id);
                true
            }
            Msg::DefectLeave(id) => {
                self.overlay.pointer_leave(&id);
                true
            }
            Msg::DefectClick(id) => {
                self.overlay.click(&id);
                true
            }

            // UI states
            Msg::DismissNotice => {
                self.notice = None;
                self.notice_timeout = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_notice(self) }
                {
                    match &self.view {
                        View::Dashboard => render_dashboard(self, ctx),
                        View::Results { .. } => render_results_page(self, ctx),
                    }
                }
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_start_scan(&mut self, ctx: &Context<Self>) -> bool {
        if !matches!(self.session.status, ScanStatus::Idle | ScanStatus::Complete) {
            return false;
        }

        self.session.begin();
        self.logs
            .push(LogKind::Info, "Starting scan sequence", &now_timestamp());
        self.show_notice(ctx, LogKind::Success, "Scan initiated");

        self.epoch += 1;
        let epoch = self.epoch;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ScanStarted(epoch, api::start_scan().await));
        });
        true
    }

    fn handle_scan_started(
        &mut self,
        ctx: &Context<Self>,
        epoch: u32,
        result: Result<String, String>,
    ) -> bool {
        if !response_is_current(epoch, self.epoch) {
            return false;
        }

        match result {
            Ok(scan_id) => {
                self.logs.push(
                    LogKind::Info,
                    &format!("Scan initiated with ID: {}", scan_id),
                    &now_timestamp(),
                );
                self.session.id = Some(scan_id);

                let link = ctx.link().clone();
                self.poll_in_flight = false;
                self.poll = Some(Interval::new(POLL_PERIOD_MS, move || {
                    link.send_message(Msg::PollTick);
                }));
            }
            Err(err) => {
                gloo_console::error!(format!("Scan creation failed: {}", err));
                self.logs.push(
                    LogKind::Error,
                    &format!("Failed to start scan: {}", err),
                    &now_timestamp(),
                );
                self.show_notice(ctx, LogKind::Error, "Failed to start scan");
                self.session.reset();
            }
        }
        true
    }

    fn handle_poll_tick(&mut self, ctx: &Context<Self>) -> bool {
        // Polls are strictly sequential per session; skip the tick while the
        // previous request is still outstanding.
        if self.poll_in_flight {
            return false;
        }
        let Some(scan_id) = self.session.id.clone() else {
            return false;
        };

        self.poll_in_flight = true;
        let epoch = self.epoch;
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::PollResult(epoch, api::fetch_status(&scan_id).await));
        });
        false
    }

    fn handle_poll_result(
        &mut self,
        ctx: &Context<Self>,
        epoch: u32,
        result: Result<ScanStatusResponse, String>,
    ) -> bool {
        if !response_is_current(epoch, self.epoch) {
            // Stopped while the request was in flight.
            return false;
        }
        self.poll_in_flight = false;

        let resp = match result {
            Ok(resp) => resp,
            Err(err) => {
                // Transient fault; polling continues on the next tick.
                log::warn!("Status poll failed: {}", err);
                return false;
            }
        };

        let now = now_timestamp();
        match self.session.apply_poll(&resp, &now) {
            PollOutcome::SessionLost => {
                self.stop_polling();
                self.logs
                    .push(LogKind::Error, "Scan session not found on the server", &now);
                self.show_notice(ctx, LogKind::Error, "Scan session not found");
                self.session.reset();
            }
            PollOutcome::Progressed { captured } => {
                for capture in &captured {
                    self.logs.push(
                        LogKind::Info,
                        &format!("Captured image {}", capture.id),
                        &now,
                    );
                }
            }
            PollOutcome::Completed { captured } => {
                for capture in &captured {
                    self.logs.push(
                        LogKind::Info,
                        &format!("Captured image {}", capture.id),
                        &now,
                    );
                }
                self.stop_polling();
                self.logs
                    .push(LogKind::Success, "Scan complete, processing data", &now);
                self.logs
                    .push(LogKind::Success, "Defect detection complete", &now);
                self.show_notice(ctx, LogKind::Success, "Scan analysis complete!");

                if let Some(scan_id) = self.session.id.clone() {
                    let link = ctx.link().clone();
                    self.nav_timeout = Some(Timeout::new(RESULTS_NAV_DELAY_MS, move || {
                        link.send_message(Msg::OpenResults(scan_id));
                    }));
                }
            }
        }
        true
    }

    fn handle_stop_scan(&mut self, ctx: &Context<Self>) -> bool {
        if self.session.status == ScanStatus::Idle {
            return false;
        }

        self.stop_polling();
        if let Some(timeout) = self.nav_timeout.take() {
            timeout.cancel();
        }
        self.session.reset();
        self.logs
            .push(LogKind::Warning, "Scan stopped by user", &now_timestamp());
        self.show_notice(ctx, LogKind::Info, "Scan stopped");
        true
    }

    fn handle_open_results(&mut self, ctx: &Context<Self>, scan_id: String) -> bool {
        self.nav_timeout = None;
        self.view = View::Results {
            scan_id: scan_id.clone(),
        };
        self.results = None;
        self.results_loading = true;
        self.sort_key = DefectSortKey::Severity;
        self.overlay.reset();

        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api::fetch_results(&scan_id).await;
            link.send_message(Msg::ResultsLoaded(scan_id, result));
        });
        true
    }

    fn handle_results_loaded(
        &mut self,
        ctx: &Context<Self>,
        scan_id: String,
        result: Result<ScanResultsResponse, String>,
    ) -> bool {
        match &self.view {
            View::Results { scan_id: current } if *current == scan_id => {}
            // Navigated away before the fetch finished.
            _ => return false,
        }
        self.results_loading = false;

        let resp = match result {
            Ok(resp) => resp,
            Err(err) => {
                gloo_console::error!(format!("Failed to load results: {}", err));
                self.show_notice(ctx, LogKind::Error, "Failed to load scan results");
                self.view = View::Dashboard;
                return true;
            }
        };

        if resp.status != RemoteStatus::Complete {
            self.show_notice(ctx, LogKind::Warning, "Scan results are not ready yet");
            self.view = View::Dashboard;
            return true;
        }

        let summary = match resp.summary {
            Some(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };
        self.results = Some(ScanResults {
            defects: resp.defects.unwrap_or_default(),
            summary,
            scan_date: format_scan_date(resp.scan_date),
        });
        true
    }

    fn handle_download_report(&mut self, ctx: &Context<Self>) -> bool {
        if let View::Results { scan_id } = &self.view {
            let opened = web_sys::window()
                .expect("no global `window` exists")
                .open_with_url_and_target(&api::report_url(scan_id), "_blank");
            if opened.is_err() {
                self.show_notice(ctx, LogKind::Error, "Failed to open report");
                return true;
            }
            self.show_notice(ctx, LogKind::Success, "Generating report...");
        }
        true
    }

    fn handle_export_csv(&mut self) -> bool {
        if let Some(results) = &self.results {
            let csv = shared::csv::defects_to_csv(&results.defects);
            components::utils::download_csv(
                &format!("defect-report-{}.csv", today_iso_date()),
                &csv,
            );
        }
        false
    }

    // Helper methods
    fn stop_polling(&mut self) {
        self.poll = None;
        self.poll_in_flight = false;
        // Invalidate any response still in flight.
        self.epoch += 1;
    }

    fn show_notice(&mut self, ctx: &Context<Self>, kind: LogKind, message: &str) {
        self.notice = Some(Notice {
            message: message.to_string(),
            kind,
        });
        if let Some(timeout) = self.notice_timeout.take() {
            timeout.cancel();
        }
        let link = ctx.link().clone();
        self.notice_timeout = Some(Timeout::new(NOTICE_DISMISS_MS, move || {
            link.send_message(Msg::DismissNotice);
        }));
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("SpectraScan client starting...");
    yew::Renderer::<Model>::new().render();
}
