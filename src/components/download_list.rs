use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::types::{format_str, quality_str, status_str, DownloadRecord, DownloadStatus};

#[derive(Properties, PartialEq)]
pub struct DownloadListProps {
    /// Queue snapshot, newest first.
    pub records: Vec<DownloadRecord>,
    pub on_toggle: Callback<u64>,
}

fn status_class(status: &DownloadStatus) -> &'static str {
    match status {
        DownloadStatus::Completed => "status-completed",
        DownloadStatus::Downloading => "status-downloading",
        DownloadStatus::Paused => "status-paused",
        DownloadStatus::Error => "status-error",
        DownloadStatus::Pending => "status-pending",
    }
}

#[function_component(DownloadList)]
pub fn download_list(props: &DownloadListProps) -> Html {
    // The whole card is hidden until the first submission lands.
    if props.records.is_empty() {
        return html! {};
    }

    html! {
        <section class="downloads-card">
            <div class="downloads-header">
                <Icon icon_id={IconId::LucideHistory} width={"18"} height={"18"} />
                <h2>{"Downloads"}</h2>
                <span class="count-badge">{ props.records.len() }</span>
            </div>
            <ul class="download-items">
                { for props.records.iter().map(|record| render_record(record, &props.on_toggle)) }
            </ul>
        </section>
    }
}

fn render_record(record: &DownloadRecord, on_toggle: &Callback<u64>) -> Html {
    let toggle = {
        let on_toggle = on_toggle.clone();
        let id = record.id;
        Callback::from(move |_| on_toggle.emit(id))
    };

    // Pause/resume is only offered while the record is actively moving or
    // explicitly held; terminal and pending rows get no control.
    let controls = match record.status {
        DownloadStatus::Downloading => html! {
            <button class="icon-btn" title="Pause" onclick={toggle}>
                <Icon icon_id={IconId::LucidePause} width={"14"} height={"14"} />
            </button>
        },
        DownloadStatus::Paused => html! {
            <button class="icon-btn" title="Resume" onclick={toggle}>
                <Icon icon_id={IconId::LucidePlay} width={"14"} height={"14"} />
            </button>
        },
        _ => html! {},
    };

    let detail = match record.status {
        DownloadStatus::Downloading => html! {
            <div class="item-progress">
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {}%", record.progress)} />
                </div>
                <p class="progress-value">{ format!("{}%", record.progress.round()) }</p>
            </div>
        },
        DownloadStatus::Completed => html! {
            <p class="item-done">{"\u{2713} Download completed"}</p>
        },
        _ => html! {},
    };

    html! {
        <li key={record.id.to_string()} class="download-item">
            <div class="item-top">
                <div class="item-info">
                    <h3 class="item-title">{ record.title.clone() }</h3>
                    <p class="item-url">{ record.url.clone() }</p>
                    <div class="item-badges">
                        <span class="badge">{ format_str(&record.format).to_uppercase() }</span>
                        <span class="badge">{ quality_str(&record.quality) }</span>
                        <span class={classes!("status-dot", status_class(&record.status))}></span>
                        <span class="status-text">{ status_str(&record.status) }</span>
                    </div>
                </div>
                { controls }
            </div>
            { detail }
        </li>
    }
}
