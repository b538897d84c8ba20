use std::collections::HashMap;

use common::{default_registry, CardButton, CardRegistry, CardSelection, DashboardCard, DashboardView};
use model::User;
use yew::prelude::*;

use super::content::render_card;
use super::scroll::use_deferred_scroll;
use crate::components::cards::Wallet;
use crate::components::layout::footer::Footer;
use crate::data::use_dashboard_data;
use crate::settings::get_settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Greeted user; the data provider's default user when absent.
    #[prop_or_default]
    pub user: Option<User>,
}

/// Registry plus one scroll handle per card, built once per mount.
struct CardLayout {
    registry: CardRegistry<DashboardCard>,
    panel_refs: HashMap<String, NodeRef>,
}

impl CardLayout {
    fn new() -> Self {
        let registry = default_registry();
        let panel_refs = registry
            .iter()
            .map(|card| (card.title.clone(), NodeRef::default()))
            .collect();
        Self { registry, panel_refs }
    }
}

#[function_component(Dashboard)]
pub fn dashboard(props: &Props) -> Html {
    let data = use_dashboard_data();
    let settings = get_settings();
    let layout = use_memo((), |_| CardLayout::new());
    let selection = use_state(CardSelection::new);
    let scroll = use_deferred_scroll(settings.scroll_delay_ms);

    let on_card_click = {
        let layout = layout.clone();
        let selection = selection.clone();
        let scroll = scroll.clone();

        Callback::from(move |title: String| {
            let mut next = (*selection).clone();
            match next.toggle(&layout.registry, &title) {
                Ok(transition) => {
                    log::debug!("Card clicked: {:?}", transition);
                    match transition.scroll_target().and_then(|target| layout.panel_refs.get(target)) {
                        Some(panel) => scroll.schedule(panel.clone()),
                        None => scroll.cancel(),
                    }
                    selection.set(next);
                }
                Err(err) => log::warn!("Ignoring card click: {}", err),
            }
        })
    };

    let view = DashboardView::build(props.user.as_ref(), &data.user, &layout.registry, &selection);

    html! {
        <div class="p-6 mx-auto bg-gradient-to-br from-gray-900 to-blue-900 text-white w-screen min-h-screen space-y-8">
            <h1 class="text-left text-4xl font-bold text-gray-200 mb-8">{&view.title}</h1>
            <h2 class="text-sm text-gray-300 mt-4 mb-2">{&view.greeting}</h2>

            <div class="flex justify-center items-start">
                <div class="w-full lg:max-w-2xl">
                    <Wallet wallet={data.wallet.clone()} model_url={settings.card_model_url.clone()} />
                </div>
            </div>

            <div class="space-y-6">
                <div class="flex flex-wrap gap-6 justify-center">
                    {for view.buttons.iter().map(|button| card_button(button, &on_card_click))}
                </div>

                <div class="flex justify-center items-center w-full">
                    <div class="w-full max-w-2xl">
                        {for layout.registry.iter().zip(view.panels.iter()).map(|(card, panel)| {
                            let panel_ref = layout.panel_refs.get(&panel.title).cloned().unwrap_or_default();
                            html! {
                                <div key={panel.title.clone()} ref={panel_ref} class={panel.classes()}>
                                    if panel.expanded {
                                        {render_card(card.content, &data)}
                                    }
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>

            <Footer organization={settings.organization.clone()} />
        </div>
    }
}

fn card_button(button: &CardButton, on_click: &Callback<String>) -> Html {
    let onclick = {
        let on_click = on_click.clone();
        let title = button.title.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(title.clone()))
    };

    html! {
        <button
            key={button.title.clone()}
            type="button"
            class={button.classes()}
            aria-expanded={button.active.to_string()}
            {onclick}
        >
            <span class="text-3xl mb-2">{&button.emoji}</span>
            <span class="text-sm text-center leading-tight">{&button.title}</span>
        </button>
    }
}
