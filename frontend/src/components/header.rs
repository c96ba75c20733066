use super::super::Model;
use super::status_badge::render_status_badge;
use yew::prelude::*;

pub fn render_header(model: &Model) -> Html {
    html! {
        <div class="page-header">
            <div>
                <h1 class="title">{"SpectraScan"}</h1>
                <p class="subtitle">{"Automated Paint Defect Scanner v1.0"}</p>
            </div>
            { render_status_badge(model.session.status) }
        </div>
    }
}
