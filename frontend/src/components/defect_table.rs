use super::super::{Model, Msg};
use shared::{sort_defects, Defect, DefectSortKey, Severity};
use yew::prelude::*;

/// Sortable defect summary table with CSV export. Sorting works on a copy;
/// the defect list itself is immutable once loaded.
pub fn render_defect_table(model: &Model, ctx: &Context<Model>, defects: &[Defect]) -> Html {
    let link = ctx.link();
    let sorted = sort_defects(defects, model.sort_key);

    let sort_header = |label: &str, key: DefectSortKey| -> Html {
        let active = model.sort_key == key;
        html! {
            <th
                class="sortable"
                onclick={link.callback(move |_| Msg::SortBy(key))}
            >
                { label }{ if active { " ↓" } else { "" } }
            </th>
        }
    };

    html! {
        <div class="card defect-table">
            <div class="card-header">
                <h3>{ format!("Defect Summary ({})", defects.len()) }</h3>
                <div class="table-actions">
                    <button class="btn btn-sm" onclick={link.callback(|_| Msg::ExportCsv)}>{"CSV"}</button>
                    <button class="btn btn-sm" onclick={link.callback(|_| Msg::DownloadReport)}>{"PDF"}</button>
                </div>
            </div>
            <table>
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        { sort_header("Type", DefectSortKey::Type) }
                        { sort_header("Severity", DefectSortKey::Severity) }
                        { sort_header("Confidence", DefectSortKey::Confidence) }
                        <th>{"Location"}</th>
                        <th>{"Size"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        sorted.iter().map(|defect| {
                            html! {
                                <tr key={defect.id.clone()}>
                                    <td class="defect-id">{ &defect.id }</td>
                                    <td>{ &defect.kind }</td>
                                    <td>
                                        <span class={classes!("badge", severity_badge(defect.severity))}>
                                            { defect.severity.to_string().to_uppercase() }
                                        </span>
                                    </td>
                                    <td>{ format!("{:.1}%", defect.confidence * 100.0) }</td>
                                    <td>{ format!("({:.1}, {:.1})", defect.x, defect.y) }</td>
                                    <td>{ format!("{:.1} × {:.1}", defect.width, defect.height) }</td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}

fn severity_badge(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "badge-low",
        Severity::Medium => "badge-medium",
        Severity::High => "badge-high",
    }
}
