use shared::ScanStatus;
use yew::prelude::*;

pub fn render_status_badge(status: ScanStatus) -> Html {
    let (label, class) = match status {
        ScanStatus::Idle => ("Idle", "status-idle"),
        ScanStatus::Scanning => ("Scanning", "status-scanning"),
        ScanStatus::Processing => ("Processing", "status-processing"),
        ScanStatus::Complete => ("Complete", "status-complete"),
        ScanStatus::Error => ("Error", "status-error"),
    };

    html! {
        <div class={classes!("status-badge", class)}>
            <span class="status-dot"></span>
            { label }
        </div>
    }
}
