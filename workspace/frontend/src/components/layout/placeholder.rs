use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

/// Stand-in page for footer links that have no content yet.
#[function_component(Placeholder)]
pub fn placeholder(props: &Props) -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 bg-gradient-to-br from-gray-900 to-blue-900 text-gray-200">
            <h1 class="text-3xl font-bold">{props.title.clone()}</h1>
            <p class="text-gray-400">{"This page is not available yet."}</p>
            <Link<Route> to={Route::Home} classes="text-blue-400 hover:underline">{"Back to dashboard"}</Link<Route>>
        </div>
    }
}
