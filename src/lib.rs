#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod navigation;
pub mod profile;
pub mod sections;
pub mod subscription;
pub mod tracker;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) is harmless
    let _ = console_log::init_with_level(console_level());
    leptos::mount::hydrate_body(App);
}

/// Section changes are logged at debug level; release bundles keep them quiet.
#[cfg(any(feature = "hydrate", test))]
fn console_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
