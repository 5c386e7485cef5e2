//! Card presenting one wound assessment on the patient profile.

use leptos::prelude::*;

use crate::net::types::AssessmentRecord;
use crate::state::history;
use crate::util::dates;

/// Wound card component.
#[component]
pub fn WoundCard(record: AssessmentRecord) -> impl IntoView {
    let stage = history::stage_display(&record);
    let title = history::wound_type_display(&record);
    let area = history::format_area(&record);
    let exudate = record
        .exudate
        .clone()
        .unwrap_or_else(|| "None".to_owned());
    let assessed = dates::format_date(&record.date);
    let image_url = history::first_image_url(&record).map(str::to_owned);
    let notes = history::notes_excerpt(&record.notes);
    let record_tag = format!("#{}", record.id);

    view! {
        <div class="wound-card">
            <div class="wound-card__image">
                {match image_url {
                    Some(url) => view! { <img src=url alt="Wound"/> }.into_any(),
                    None => view! { <div class="wound-card__no-image">"No Image"</div> }.into_any(),
                }}
            </div>
            <div class="wound-card__body">
                <div class="wound-card__header">
                    <span class="wound-card__stage">{stage}</span>
                    <span class="wound-card__id">{record_tag}</span>
                </div>
                <h2 class="wound-card__title">{title}</h2>
                <div class="wound-card__metrics">
                    <div class="wound-card__metric">
                        <label>"Size (Area)"</label>
                        <div>{area}</div>
                    </div>
                    <div class="wound-card__metric">
                        <label>"Exudate"</label>
                        <div>{exudate}</div>
                    </div>
                    <div class="wound-card__metric">
                        <label>"Last Assessment"</label>
                        <div>{assessed}</div>
                    </div>
                </div>
                <p class="wound-card__notes">{notes}</p>
            </div>
        </div>
    }
}
