//! # portfolio-client
//!
//! WASM page behavior for the static portfolio site: theme switching, the
//! mobile menu, smooth fragment scrolling, scroll-reveal, the hero typing
//! effect, the nav scroll shadow, and an optional GitHub project loader.
//!
//! Controller logic in [`controllers`] is written against the [`view::View`]
//! binding and tests natively. The browser binding in `dom` and the WASM
//! entry point only exist with the `hydrate` feature.
//!
//! ## Building the bundle
//!
//! `website/script.js` imports `./pkg/portfolio_client.js`. From the
//! workspace root:
//!
//! ```text
//! cargo build -p portfolio-client --release --target wasm32-unknown-unknown --features hydrate
//! wasm-bindgen --target web --out-dir website/pkg target/wasm32-unknown-unknown/release/portfolio_client.wasm
//! ```
//!
//! The server serves `website/pkg` at `/pkg` (override with `PKG_DIR`).

pub mod config;
pub mod controllers;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod view;

/// WASM entry point, run by the generated bindings once the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second start keeps whichever logger was installed first.
    console_log::init_with_level(log::Level::Info).unwrap_or_default();
    dom::boot::run();
}
