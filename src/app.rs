use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::download_form::DownloadForm;
use crate::components::download_list::DownloadList;
use crate::components::toasts::{Toast, ToastHost, ToastHub, ToastState};
use crate::log;
use crate::manager::DownloadManager;
use crate::queue::DownloadQueue;
use crate::types::{DownloadRecord, DownloadRequest};

#[function_component(App)]
pub fn app() -> Html {
    // Rendered snapshots. The queue and toast stack themselves live in the
    // mut refs below so concurrent timers never race a stale render.
    let records = use_state(Vec::<DownloadRecord>::new);
    let toasts = use_state(Vec::<Toast>::new);

    let queue_cell = use_mut_ref(DownloadQueue::new);
    let toast_cell = use_mut_ref(ToastState::default);

    let toast_hub = {
        let setter = toasts.setter();
        ToastHub::new(toast_cell, Callback::from(move |list| setter.set(list)))
    };
    let manager = {
        let setter = records.setter();
        DownloadManager::new(
            queue_cell,
            Callback::from(move |snapshot| setter.set(snapshot)),
            toast_hub.clone(),
        )
    };

    use_effect_once(move || {
        log::info(
            "app_start",
            serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }),
        );
        || ()
    });

    let on_submit = {
        let manager = manager.clone();
        Callback::from(move |request: DownloadRequest| manager.submit(&request).is_ok())
    };

    let on_toggle = {
        let manager = manager.clone();
        Callback::from(move |id: u64| manager.toggle(id))
    };

    let on_dismiss = {
        let toast_hub = toast_hub.clone();
        Callback::from(move |id: u64| toast_hub.dismiss(id))
    };

    html! {
        <main class="container">
            <header class="app-header">
                <h1>{"Video Downloader"}</h1>
                <p class="subtitle">{"Download videos from any URL"}</p>
                <p class="notice">
                    {"\u{26a0}\u{fe0f} Ensure you have permission to download content"}
                </p>
            </header>

            <section class="form-card">
                <DownloadForm on_submit={on_submit} />
            </section>

            <DownloadList records={(*records).clone()} on_toggle={on_toggle} />
            <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />

            <footer class="app-footer">
                { format!(
                    "v{} \u{00b7} rustc {} \u{00b7} built {}",
                    env!("CARGO_PKG_VERSION"),
                    env!("VERGEN_RUSTC_SEMVER"),
                    env!("VERGEN_BUILD_TIMESTAMP"),
                ) }
            </footer>
        </main>
    }
}
