#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components {
    pub mod download_form;
    pub mod download_list;
    pub mod toasts;
}
#[cfg(target_arch = "wasm32")]
mod log;
#[cfg(target_arch = "wasm32")]
mod manager;
// The queue core is plain Rust; it compiles on the host so `cargo test`
// can exercise the state machine without a browser.
mod queue;
mod types;

#[cfg(target_arch = "wasm32")]
use app::App;

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This crate targets WebAssembly. Use `trunk serve` to run the app; `cargo test` runs the host-side queue tests."
    );
    std::process::exit(1);
}
