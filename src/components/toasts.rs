use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub variant: ToastVariant,
}

#[derive(Debug, Default)]
pub struct ToastState {
    entries: Vec<Toast>,
    next_id: u64,
}

/// In-process notification channel. Every clone talks to the same stack of
/// toasts; pushes publish a fresh snapshot to the host and schedule their
/// own expiry.
#[derive(Clone)]
pub struct ToastHub {
    state: Rc<RefCell<ToastState>>,
    publish: Callback<Vec<Toast>>,
}

impl ToastHub {
    pub fn new(state: Rc<RefCell<ToastState>>, publish: Callback<Vec<Toast>>) -> Self {
        Self { state, publish }
    }

    pub fn push(&self, title: &str, body: &str, variant: ToastVariant) {
        let (id, entries) = {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            state.entries.push(Toast {
                id,
                title: title.to_string(),
                body: body.to_string(),
                variant,
            });
            (id, state.entries.clone())
        };
        self.publish.emit(entries);

        let hub = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            hub.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let entries = {
            let mut state = self.state.borrow_mut();
            let before = state.entries.len();
            state.entries.retain(|t| t.id != id);
            if state.entries.len() == before {
                return;
            }
            state.entries.clone()
        };
        self.publish.emit(entries);
    }
}

fn variant_class(variant: &ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Info => "toast-info",
        ToastVariant::Success => "toast-success",
        ToastVariant::Error => "toast-error",
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toasts">
            { for props.toasts.iter().map(|toast| {
                let onclick = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| on_dismiss.emit(id))
                };
                html! {
                    <div
                        key={toast.id.to_string()}
                        class={classes!("toast", variant_class(&toast.variant))}
                        onclick={onclick}
                    >
                        <span class="toast-title">{ toast.title.clone() }</span>
                        <span class="toast-body">{ toast.body.clone() }</span>
                    </div>
                }
            }) }
        </div>
    }
}
