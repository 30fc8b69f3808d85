use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::types::{
    format_from_str, format_label, format_str, quality_from_str, quality_label, quality_str,
    DownloadRequest, MediaFormat, Quality, FORMATS, QUALITIES,
};

#[derive(Properties, PartialEq)]
pub struct DownloadFormProps {
    /// Returns true when the submission was accepted; only then does the
    /// URL field clear. Format and quality selections stick around.
    pub on_submit: Callback<DownloadRequest, bool>,
}

#[function_component(DownloadForm)]
pub fn download_form(props: &DownloadFormProps) -> Html {
    let url = use_state(String::new);
    let format = use_state(MediaFormat::default);
    let quality = use_state(Quality::default);

    let on_url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            url.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_format_change = {
        let format = format.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(f) = format_from_str(&value) {
                format.set(f);
            }
        })
    };

    let on_quality_change = {
        let quality = quality.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(q) = quality_from_str(&value) {
                quality.set(q);
            }
        })
    };

    let onsubmit = {
        let url = url.clone();
        let format = format.clone();
        let quality = quality.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = DownloadRequest {
                url: (*url).clone(),
                format: *format,
                quality: *quality,
            };
            if on_submit.emit(request) {
                url.set(String::new());
            }
        })
    };

    let format_icon = if *format == MediaFormat::Mp3 {
        IconId::LucideMusic
    } else {
        IconId::LucideVideo
    };

    html! {
        <form class="download-form" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="url-input">{"Video URL"}</label>
                <input
                    id="url-input"
                    type="text"
                    placeholder="Paste video URL here..."
                    value={(*url).clone()}
                    oninput={on_url_input}
                />
            </div>

            <div class="selector-row">
                <div class="form-group">
                    <label for="format-select">
                        <Icon icon_id={format_icon} width={"14"} height={"14"} />
                        {"Format"}
                    </label>
                    <select id="format-select" onchange={on_format_change}>
                        { for FORMATS.iter().map(|f| html! {
                            <option value={format_str(f)} selected={*format == *f}>
                                { format_label(f) }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="quality-select">{"Quality"}</label>
                    <select id="quality-select" onchange={on_quality_change}>
                        { for QUALITIES.iter().map(|q| html! {
                            <option value={quality_str(q)} selected={*quality == *q}>
                                { quality_label(q) }
                            </option>
                        }) }
                    </select>
                </div>
            </div>

            <button type="submit" class="submit-btn" disabled={url.trim().is_empty()}>
                <Icon icon_id={IconId::LucideDownload} width={"18"} height={"18"} />
                {"Start Download"}
            </button>
        </form>
    }
}
