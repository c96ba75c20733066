use super::super::{Model, Msg};
use crate::overlay::{defect_box_style, group_style, severity_class};
use shared::Defect;
use yew::prelude::*;

const REFERENCE_IMAGE_URL: &str =
    "https://www.partfinder.me/assets/theme/pf-main/images/banner/parts/car-door.png";

/// Defect visualization card: the reference image with one positioned region
/// per defect, and zoom controls acting on the composed group.
pub fn render_defect_overlay(model: &Model, ctx: &Context<Model>, defects: &[Defect]) -> Html {
    let link = ctx.link();

    html! {
        <div class="card defect-overlay">
            <div class="card-header">
                <h3>{"Defect Visualization"}</h3>
                <div class="zoom-controls">
                    <button class="btn btn-sm" onclick={link.callback(|_| Msg::ZoomOut)}>{"−"}</button>
                    <button class="btn btn-sm" onclick={link.callback(|_| Msg::ZoomIn)}>{"+"}</button>
                    <button class="btn btn-sm" onclick={link.callback(|_| Msg::ZoomReset)}>{"1:1"}</button>
                </div>
            </div>
            <div class="overlay-viewport">
                <div class="overlay-group" style={group_style(model.overlay.zoom)}>
                    <img src={REFERENCE_IMAGE_URL} alt="Scanned panel" class="overlay-image" />
                    { defects.iter().map(|d| render_defect_region(model, ctx, d)).collect::<Html>() }
                </div>
            </div>
        </div>
    }
}

fn render_defect_region(model: &Model, ctx: &Context<Model>, defect: &Defect) -> Html {
    let link = ctx.link();
    let selected = model.overlay.selected() == Some(defect.id.as_str());

    let enter_id = defect.id.clone();
    let leave_id = defect.id.clone();
    let click_id = defect.id.clone();

    html! {
        <div
            key={defect.id.clone()}
            class={classes!(
                "defect-region",
                severity_class(defect.severity),
                selected.then_some("selected")
            )}
            style={defect_box_style(defect)}
            onmouseenter={link.callback(move |_| Msg::DefectEnter(enter_id.clone()))}
            onmouseleave={link.callback(move |_| Msg::DefectLeave(leave_id.clone()))}
            onclick={link.callback(move |_| Msg::DefectClick(click_id.clone()))}
        >
            {
                if selected {
                    html! {
                        <div class="defect-tooltip">
                            <div class="tooltip-type">{ &defect.kind }</div>
                            <div>{ format!("ID: {}", defect.id) }</div>
                            <div>{ format!("Confidence: {:.1}%", defect.confidence * 100.0) }</div>
                            <div class={classes!("tooltip-severity", severity_class(defect.severity))}>
                                { defect.severity.to_string().to_uppercase() }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
