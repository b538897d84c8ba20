use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Event, HtmlScriptElement};
use yew::prelude::*;

/// Load state of an external resource
#[derive(Clone, PartialEq, Debug, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// A third-party script that defines a global once evaluated.
#[derive(Clone, PartialEq, Debug)]
pub struct ScriptSource {
    /// DOM id of the injected `<script>` tag, shared by every caller
    pub id: &'static str,
    pub src: String,
    /// Global the script defines, e.g. `Plotly`
    pub global: &'static str,
}

fn global_defined(name: &str) -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(false)
}

/// Attribute recording how an injected tag finished, since `load` and `error`
/// fire only once per tag.
const STATE_ATTR: &str = "data-state";
const STATE_LOADED: &str = "loaded";
const STATE_FAILED: &str = "failed";

fn inject_script(document: &Document, source: &ScriptSource) -> Result<HtmlScriptElement, JsValue> {
    log::debug!("Injecting script {} from {}", source.id, source.src);
    let script: HtmlScriptElement = document.create_element("script")?.dyn_into().map_err(JsValue::from)?;
    script.set_id(source.id);
    script.set_src(&source.src);
    script.set_async(true);
    document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?
        .append_child(&script)?;
    Ok(script)
}

/// Injects the script tag once (or reuses the existing one) and reports when it
/// finished loading. A tag that failed earlier is replaced, so every new caller
/// gets a fresh attempt and a definite outcome.
fn attach_script(source: &ScriptSource, on_done: Callback<Result<(), String>>) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let script = match document.get_element_by_id(source.id) {
        Some(existing) => match existing.get_attribute(STATE_ATTR).as_deref() {
            Some(STATE_FAILED) => {
                log::debug!("Script #{} failed earlier, retrying", source.id);
                existing.remove();
                inject_script(&document, source)?
            }
            Some(STATE_LOADED) => {
                // Loaded, yet the caller found no global.
                on_done.emit(Err(format!("{} did not define {}", source.src, source.global)));
                return Ok(());
            }
            _ => {
                log::trace!("Reusing pending script tag #{}", source.id);
                existing.dyn_into().map_err(JsValue::from)?
            }
        },
        None => inject_script(&document, source)?,
    };

    // Both listeners free themselves when invoked.
    let on_load = {
        let on_done = on_done.clone();
        let tag = script.clone();
        Closure::once_into_js(move |_: Event| {
            let _ = tag.set_attribute(STATE_ATTR, STATE_LOADED);
            on_done.emit(Ok(()))
        })
    };
    let on_error = {
        let src = source.src.clone();
        let tag = script.clone();
        Closure::once_into_js(move |_: Event| {
            let _ = tag.set_attribute(STATE_ATTR, STATE_FAILED);
            on_done.emit(Err(format!("Failed to load {}", src)))
        })
    };

    script.add_event_listener_with_callback("load", on_load.unchecked_ref())?;
    script.add_event_listener_with_callback("error", on_error.unchecked_ref())?;
    Ok(())
}

/// Lazily loads a third-party script the first time a component needs it.
#[hook]
pub fn use_script(source: ScriptSource) -> LoadState {
    let state = use_state(|| {
        if global_defined(source.global) {
            LoadState::Ready
        } else {
            LoadState::NotStarted
        }
    });

    {
        let state = state.clone();
        use_effect_with(source, move |source| {
            if !global_defined(source.global) {
                state.set(LoadState::Loading);

                let on_done = {
                    let state = state.clone();
                    let id = source.id;
                    Callback::from(move |result: Result<(), String>| match result {
                        Ok(()) => {
                            log::debug!("Script #{} loaded", id);
                            state.set(LoadState::Ready);
                        }
                        Err(err) => {
                            log::error!("{}", err);
                            state.set(LoadState::Failed(err));
                        }
                    })
                };

                if let Err(err) = attach_script(source, on_done) {
                    log::error!("Could not inject script #{}: {:?}", source.id, err);
                    state.set(LoadState::Failed(format!("Could not load {}", source.src)));
                }
            } else if !state.is_ready() {
                state.set(LoadState::Ready);
            }
            || ()
        });
    }

    (*state).clone()
}
