use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub organization: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="mt-auto text-center text-sm text-gray-400 pt-12">
            <p>{format!("© {} {}. All rights reserved.", year, props.organization)}</p>
            <div class="flex justify-center gap-4 mt-4">
                <Link<Route> to={Route::Terms} classes="hover:text-blue-400 transition-colors">{"Terms of Use"}</Link<Route>>
                <Link<Route> to={Route::Privacy} classes="hover:text-blue-400 transition-colors">{"Privacy Policy"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes="hover:text-blue-400 transition-colors">{"Contact Us"}</Link<Route>>
            </div>
        </footer>
    }
}
