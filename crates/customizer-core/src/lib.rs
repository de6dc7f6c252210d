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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Article customizer core.
//!
//! Holds the compile-time option catalog, the applied [`ArticleState`], and the
//! settings panel state machine. Everything here is pure and tested natively;
//! the Yew front-end in `customizer-ui` renders on top of it.

pub mod error;
pub mod options;
pub mod panel;
pub mod state;

pub use error::{OptionError, OptionResult};
pub use options::{ArticleAttribute, ArticleOption};
pub use panel::{PanelAction, PanelState, PanelTransition};
pub use state::{ArticleState, DEFAULT_ARTICLE_STATE};
