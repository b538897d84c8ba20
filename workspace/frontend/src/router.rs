use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::placeholder::Placeholder;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Dashboard page");
            html! { <main><Dashboard /></main> }
        }
        Route::Terms => html! { <Placeholder title="Terms of Use" /> },
        Route::Privacy => html! { <Placeholder title="Privacy Policy" /> },
        Route::Contact => html! { <Placeholder title="Contact Us" /> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Placeholder title="404 Not Found" /> }
        }
    }
}
