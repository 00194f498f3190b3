//! Third-party page libraries: the typed-text animation and scroll reveal.
//!
//! Both are loaded by the page as plain globals (`Typed`, `AOS`). This module
//! owns their fixed configuration and, in the browser, looks the globals up
//! and invokes them. A missing global skips the feature.

#[cfg(test)]
#[path = "vendor_test.rs"]
mod vendor_test;

use serde::{Deserialize, Serialize};

/// Global constructor name of the typed-text library.
pub const TYPED_GLOBAL: &str = "Typed";

/// Global namespace of the scroll-reveal library.
pub const REVEAL_GLOBAL: &str = "AOS";

/// Selector of the typed-text mount point.
pub const TYPED_MOUNT_SELECTOR: &str = "#typed";

/// Options handed to the typed-text constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypedOptions {
    pub strings: Vec<String>,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub show_cursor: bool,
}

impl Default for TypedOptions {
    fn default() -> Self {
        Self {
            strings: [
                "Flutter Developer",
                "iOS Developer",
                "Android Developer",
                "WatchOS Developer",
                "Cross-Platform Expert",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            type_speed: 50,
            back_speed: 30,
            back_delay: 2000,
            looped: true,
            show_cursor: false,
        }
    }
}

/// Options handed to the scroll-reveal `init` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub duration: u32,
    pub easing: String,
    pub once: bool,
    pub offset: u32,
    pub disable: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { duration: 800, easing: "ease-out-cubic".into(), once: true, offset: 50, disable: "mobile".into() }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{init_reveal, init_typed};

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::{Array, Function, Reflect};
    use serde::Serialize;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{REVEAL_GLOBAL, RevealOptions, TYPED_GLOBAL, TYPED_MOUNT_SELECTOR, TypedOptions};
    use crate::dom::js_err;
    use crate::error::WireError;

    /// Look up a global by name; `None` when the page never loaded it.
    fn global(name: &str) -> Result<Option<JsValue>, WireError> {
        let value = Reflect::get(&js_sys::global(), &JsValue::from_str(name)).map_err(js_err)?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        Ok(Some(value))
    }

    fn to_js<T: Serialize>(options: &T) -> Result<JsValue, WireError> {
        let raw = serde_json::to_string(options).map_err(|e| WireError::Js(e.to_string()))?;
        js_sys::JSON::parse(&raw).map_err(js_err)
    }

    /// Start the typed-text animation. Returns `false` when the library is absent.
    pub fn init_typed(options: &TypedOptions) -> Result<bool, WireError> {
        let Some(ctor) = global(TYPED_GLOBAL)? else {
            return Ok(false);
        };
        let ctor: Function = ctor.dyn_into().map_err(js_err)?;
        let args = Array::of2(&JsValue::from_str(TYPED_MOUNT_SELECTOR), &to_js(options)?);
        Reflect::construct(&ctor, &args).map_err(js_err)?;
        Ok(true)
    }

    /// Initialize scroll reveal. Returns `false` when the library is absent.
    pub fn init_reveal(options: &RevealOptions) -> Result<bool, WireError> {
        let Some(namespace) = global(REVEAL_GLOBAL)? else {
            return Ok(false);
        };
        let init: Function = Reflect::get(&namespace, &JsValue::from_str("init"))
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        init.call1(&namespace, &to_js(options)?).map_err(js_err)?;
        Ok(true)
    }
}
