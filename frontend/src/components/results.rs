use super::super::{Model, Msg, ScanResults};
use super::defect_overlay::render_defect_overlay;
use super::defect_table::render_defect_table;
use super::utils::debounce;
use serde_json::Value;
use shared::Severity;
use yew::prelude::*;

pub fn render_results_page(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div class="page">
            <div class="page-header">
                <div class="header-left">
                    <button
                        class="btn"
                        onclick={link.callback(|_| Msg::BackToDashboard)}
                    >
                        {"Back"}
                    </button>
                    <div>
                        <h1 class="title">{"Scan Results"}</h1>
                        <p class="subtitle">
                            {
                                model.results.as_ref().map_or_else(
                                    || "Loading...".to_string(),
                                    |r| format!("Scan completed: {}", r.scan_date),
                                )
                            }
                        </p>
                    </div>
                </div>
                <div class="header-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::DownloadReport)}>
                        {"Download Report"}
                    </button>
                    <button
                        class="btn btn-start"
                        onclick={debounce(300, {
                            let link = link.clone();
                            move || link.send_message(Msg::BackToDashboard)
                        })}
                    >
                        {"New Scan"}
                    </button>
                </div>
            </div>

            {
                match &model.results {
                    Some(results) => render_results_body(model, ctx, results),
                    None if model.results_loading => html! {
                        <div class="card results-loading">
                            <span class="spinner"></span>
                            <p>{"Loading scan results..."}</p>
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn render_results_body(model: &Model, ctx: &Context<Model>, results: &ScanResults) -> Html {
    let critical = count_severity(results, Severity::High);
    let medium = count_severity(results, Severity::Medium);
    let low = count_severity(results, Severity::Low);

    html! {
        <>
            <div class="stats-grid">
                <div class="card stat-card stat-total">
                    <h3>{"Total Defects"}</h3>
                    <p class="stat-value">{ results.defects.len() }</p>
                </div>
                <div class="card stat-card stat-critical">
                    <h3>{"Critical"}</h3>
                    <p class="stat-value">{ critical }</p>
                </div>
                <div class="card stat-card stat-medium">
                    <h3>{"Medium"}</h3>
                    <p class="stat-value">{ medium }</p>
                </div>
                <div class="card stat-card stat-low">
                    <h3>{"Low Priority"}</h3>
                    <p class="stat-value">{ low }</p>
                </div>
            </div>

            { render_defect_overlay(model, ctx, &results.defects) }
            { render_defect_table(model, ctx, &results.defects) }
            { render_summary_card(results, critical) }
        </>
    }
}

fn count_severity(results: &ScanResults, severity: Severity) -> usize {
    results
        .defects
        .iter()
        .filter(|d| d.severity == severity)
        .count()
}

/// Analysis-summary card. The summary is an opaque bag from the server; the
/// known keys are rendered with friendly captions and anything else falls
/// through verbatim.
fn render_summary_card(results: &ScanResults, critical: usize) -> Html {
    const CAPTIONS: [(&str, &str); 4] = [
        ("scan_duration", "Scan completed in"),
        ("image_tiles", "Processed image tiles:"),
        ("avg_confidence", "Average confidence score:"),
        ("model_name", "Detection model:"),
    ];

    let line = |caption: &str, value: String| {
        html! { <p class="summary-line">{ format!("• {} {}", caption, value) }</p> }
    };

    html! {
        <div class="card analysis-summary">
            <h3>{"Analysis Summary"}</h3>
            <div class="summary-lines">
                {
                    CAPTIONS.iter().filter_map(|(key, caption)| {
                        results.summary.get(*key).map(|v| line(caption, summary_value(v)))
                    }).collect::<Html>()
                }
                {
                    results.summary.get("quality_status").map(|v| html! {
                        <p class={classes!(
                            "summary-line",
                            "summary-quality",
                            if critical > 0 { "quality-review" } else { "quality-passed" }
                        )}>
                            { format!("• Quality Status: {}", summary_value(v)) }
                        </p>
                    }).unwrap_or_default()
                }
            </div>
        </div>
    }
}

fn summary_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
