use super::super::{Model, Msg};
use super::header::render_header;
use super::image_grid::render_image_grid;
use super::log_viewer::render_log_viewer;
use super::scan_progress::render_scan_progress;
use super::utils::debounce;
use shared::ScanStatus;
use yew::prelude::*;

pub fn render_dashboard(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let can_start = matches!(
        model.session.status,
        ScanStatus::Idle | ScanStatus::Complete
    );
    let scanning = matches!(
        model.session.status,
        ScanStatus::Scanning | ScanStatus::Processing
    );

    html! {
        <div class="page">
            { render_header(model) }

            <div class="card control-panel">
                <div>
                    <h2>{"Control Panel"}</h2>
                    <p class="panel-hint">{"Initialize and control scanning operations"}</p>
                </div>
                {
                    if can_start {
                        html! {
                            <button
                                class="btn btn-start"
                                onclick={debounce(300, {
                                    let link = link.clone();
                                    move || link.send_message(Msg::StartScan)
                                })}
                            >
                                {"Start Scan"}
                            </button>
                        }
                    } else {
                        html! {
                            <button
                                class="btn btn-stop"
                                onclick={debounce(300, {
                                    let link = link.clone();
                                    move || link.send_message(Msg::StopScan)
                                })}
                            >
                                {"Stop Scan"}
                            </button>
                        }
                    }
                }
            </div>

            <div class="stats-grid">
                <div class="card stat-card">
                    <h3>{"Total Scans"}</h3>
                    <p class="stat-value">{"1,247"}</p>
                </div>
                <div class="card stat-card">
                    <h3>{"Defects Detected"}</h3>
                    <p class="stat-value">{"8,432"}</p>
                </div>
                <div class="card stat-card">
                    <h3>{"Accuracy Rate"}</h3>
                    <p class="stat-value">{"97.8%"}</p>
                </div>
            </div>

            {
                if scanning {
                    render_scan_progress(model.session.progress, &model.session.stage)
                } else {
                    html! {}
                }
            }

            <div class="dashboard-grid">
                <div class={classes!("card", "scan-animation", scanning.then_some("active"))}>
                    <div class="scan-beam"></div>
                    <p class="scan-caption">
                        { if scanning { "Scanning in progress" } else { "Scanner idle" } }
                    </p>
                </div>
                { render_log_viewer(&model.logs) }
            </div>

            {
                if model.session.images.is_empty() {
                    html! {}
                } else {
                    render_image_grid(
                        &model.session.images,
                        model.session.status == ScanStatus::Scanning,
                    )
                }
            }
        </div>
    }
}
