#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Article customizer wasm entry point and native notice fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    customizer_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    native_notice(&mut std::io::stderr().lock())
}

/// Explain how to run the panel and show the style a fresh page starts with.
#[cfg(not(target_arch = "wasm32"))]
fn native_notice(out: &mut impl std::io::Write) -> Result<(), std::io::Error> {
    let defaults = customizer_core::ArticleState::default();
    writeln!(
        out,
        "customizer-ui renders the article settings panel in the browser; run `trunk serve` in crates/customizer-ui."
    )?;
    writeln!(out, "default article style: {}", defaults.inline_style())
}
