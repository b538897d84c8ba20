use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlElement;
use yew::prelude::*;

/// Name of the mesh node inside the card model.
const CARD_NODE: &str = "Card";

#[wasm_bindgen(module = "/js/card_mesh.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = mountCardMesh)]
    fn mount_card_mesh(container: &HtmlElement, url: &str, node: &str, material: JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_name = disposeCardMesh)]
    fn dispose_card_mesh(container: &HtmlElement);
}

/// Physical material applied to the card mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMaterial {
    pub roughness: f64,
    pub metalness: f64,
    pub clearcoat: f64,
    pub transmission: f64,
}

impl Default for CardMaterial {
    fn default() -> Self {
        Self {
            roughness: 0.1,
            metalness: 0.9,
            clearcoat: 1.0,
            transmission: 0.8,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub model_url: AttrValue,
    #[prop_or_default]
    pub material: CardMaterial,
}

/// Renders the wallet's 3D card. Load failures are logged and leave the
/// container empty.
#[function_component(CardMesh)]
pub fn card_mesh(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.model_url.clone(), props.material),
        move |(container_ref, model_url, material)| {
            let container = container_ref.cast::<HtmlElement>();

            if let Some(element) = &container {
                log::debug!("Mounting card mesh from {}", model_url);
                let mounted = serde_wasm_bindgen::to_value(material)
                    .map_err(JsValue::from)
                    .and_then(|material| mount_card_mesh(element, model_url, CARD_NODE, material));

                match mounted {
                    Ok(promise) => {
                        let model_url = model_url.clone();
                        spawn_local(async move {
                            match JsFuture::from(promise).await {
                                Ok(_) => log::trace!("Card mesh {} loaded", model_url),
                                Err(err) => log::error!("Failed to load card mesh {}: {:?}", model_url, err),
                            }
                        });
                    }
                    Err(err) => log::error!("Could not mount card mesh: {:?}", err),
                }
            }

            move || {
                if let Some(element) = container {
                    log::trace!("Disposing card mesh");
                    dispose_card_mesh(&element);
                }
            }
        },
    );

    html! {
        <div ref={container_ref} class="absolute inset-0 pointer-events-none" aria-hidden="true"></div>
    }
}
