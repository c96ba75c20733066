use super::super::Model;
use yew::prelude::*;

/// Transient toast-style notice, auto-dismissed by the model's timeout.
pub fn render_notice(model: &Model) -> Html {
    if let Some(notice) = &model.notice {
        html! {
            <div class={classes!("notice", format!("notice-{}", notice.kind))}>
                <p>{ &notice.message }</p>
            </div>
        }
    } else {
        html! {}
    }
}
