//! # folio
//!
//! Client-side behavior for a personal portfolio site, compiled to
//! WebAssembly and attached to server-authored static markup.
//!
//! The decision logic (thresholds, one-shot triggers, menu state, theme
//! resolution) lives in plain modules that build and test natively. Browser
//! glue is compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Thresholds, durations, storage key, markup ids |
//! | [`config`] | [`config::SiteConfig`] defaults and JSON overrides |
//! | [`error`] | Wiring, config, and storage errors |
//! | [`theme`] | Light/dark preference resolution and toggle |
//! | [`viewport`] | Scroll-derived navbar, back-to-top, and active-link state |
//! | [`trigger`] | One-shot intersection triggers, counters, deferred images |
//! | [`nav`] | Mobile menu state and in-page anchor jumps |
//! | [`particles`] | Randomized decorative background particles |
//! | [`contact`] | Contact form submit-button UX |
//! | [`showcase`] | Remote record panel |
//! | [`vendor`] | Typed-text and scroll-reveal library options |
//! | `dom` | web-sys helpers (`hydrate`) |
//! | `boot` | Startup wiring and the wasm entry point (`hydrate`) |

pub mod config;
pub mod consts;
pub mod contact;
pub mod error;
pub mod nav;
pub mod particles;
pub mod showcase;
pub mod theme;
pub mod trigger;
pub mod vendor;
pub mod viewport;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;
