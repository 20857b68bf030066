//! Binary entrypoint for the browser-hosted Ember client.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `ember_app` for wasm32 with the `csr` feature (for example with `trunk serve`)."
    );
}
