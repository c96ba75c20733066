use crate::logs::LogBuffer;
use yew::prelude::*;

/// Renders the full log snapshot in append order; the container's CSS keeps
/// the most recent entry in view.
pub fn render_log_viewer(logs: &LogBuffer) -> Html {
    html! {
        <div class="card log-viewer">
            <div class="card-header">
                <h3>{"System Logs"}</h3>
            </div>
            <div class="log-entries">
                {
                    if logs.entries().is_empty() {
                        html! { <div class="log-empty">{"No logs to display"}</div> }
                    } else {
                        logs.entries().iter().map(|entry| {
                            html! {
                                <div class="log-entry">
                                    <span class="log-timestamp">{ format!("[{}]", entry.timestamp) }</span>
                                    <span class={classes!(format!("log-{}", entry.kind))}>
                                        { &entry.message }
                                    </span>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                }
            </div>
        </div>
    }
}
