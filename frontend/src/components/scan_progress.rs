use yew::prelude::*;

pub fn render_scan_progress(progress: u32, stage: &str) -> Html {
    html! {
        <div class="card scan-progress">
            <div class="progress-header">
                <div>
                    <h3>{"Scan Progress"}</h3>
                    <p class="progress-stage">{ stage }</p>
                </div>
                <div class="progress-value">{ format!("{}%", progress) }</div>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {}%", progress)}></div>
            </div>
        </div>
    }
}
