use common::format_currency;
use model::WalletSummary;
use yew::prelude::*;

use crate::components::three::CardMesh;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub wallet: WalletSummary,
    pub model_url: AttrValue,
}

/// Primary wallet display: the 3D card with the balance overlaid.
#[function_component(Wallet)]
pub fn wallet(props: &Props) -> Html {
    let wallet = &props.wallet;

    html! {
        <div class="relative h-56 rounded-2xl overflow-hidden bg-gradient-to-br from-slate-800 to-slate-950 shadow-xl">
            <CardMesh model_url={props.model_url.clone()} />
            <div class="relative z-10 flex flex-col justify-between h-full p-6">
                <div class="flex justify-between items-start">
                    <span class="text-sm uppercase tracking-widest text-gray-300">{&wallet.card_brand}</span>
                    <span class="font-mono text-gray-200">{wallet.masked_number()}</span>
                </div>
                <div>
                    <p class="text-sm text-gray-400">{"Balance"}</p>
                    <p class="text-4xl font-bold">{format_currency(wallet.balance)}</p>
                </div>
                <div class="flex justify-between text-sm text-gray-300">
                    <span>{&wallet.holder}</span>
                    <span>{format!("{} available", format_currency(wallet.available_credit))}</span>
                </div>
            </div>
        </div>
    }
}
