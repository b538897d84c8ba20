use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Scrolls a freshly expanded panel into view once layout has settled.
///
/// Only one scroll is ever pending: scheduling a new one or calling
/// [`DeferredScroll::cancel`] drops the previous timer, and so does
/// unmounting the owning component.
#[derive(Clone)]
pub struct DeferredScroll {
    pending: Rc<RefCell<Option<Timeout>>>,
    delay_ms: u32,
}

impl DeferredScroll {
    pub fn schedule(&self, target: NodeRef) {
        self.schedule_with(move || scroll_into_view(&target));
    }

    fn schedule_with(&self, action: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, action);
        if self.pending.borrow_mut().replace(timeout).is_some() {
            log::trace!("Superseded pending scroll");
        }
    }

    pub fn cancel(&self) {
        // Dropping a Timeout clears it.
        if self.pending.borrow_mut().take().is_some() {
            log::trace!("Cancelled pending scroll");
        }
    }
}

fn scroll_into_view(target: &NodeRef) {
    let Some(element) = target.cast::<Element>() else {
        log::debug!("Scroll target is not mounted, skipping");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[hook]
pub fn use_deferred_scroll(delay_ms: u32) -> DeferredScroll {
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                if pending.borrow_mut().take().is_some() {
                    log::trace!("Dropped pending scroll on unmount");
                }
            }
        });
    }

    DeferredScroll { pending, delay_ms }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;
    use yew::AppHandle;

    const DELAY_MS: u32 = 20;
    const SETTLE_MS: u32 = 200;

    fn counter() -> Rc<Cell<u32>> {
        Rc::new(Cell::new(0))
    }

    fn bump(count: &Rc<Cell<u32>>) -> impl FnOnce() + 'static {
        let count = count.clone();
        move || count.set(count.get() + 1)
    }

    fn deferred() -> DeferredScroll {
        DeferredScroll {
            pending: Rc::new(RefCell::new(None)),
            delay_ms: DELAY_MS,
        }
    }

    #[wasm_bindgen_test]
    async fn test_scheduled_scroll_runs_after_delay() {
        let scroll = deferred();
        let fired = counter();

        scroll.schedule_with(bump(&fired));
        assert_eq!(fired.get(), 0);

        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(fired.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_new_schedule_replaces_pending_one() {
        let scroll = deferred();
        let first = counter();
        let second = counter();

        scroll.schedule_with(bump(&first));
        scroll.schedule_with(bump(&second));

        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_cancel_drops_pending_scroll() {
        let scroll = deferred();
        let fired = counter();

        scroll.schedule_with(bump(&fired));
        scroll.cancel();

        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(fired.get(), 0);
        assert!(scroll.pending.borrow().is_none());
    }

    #[derive(Properties, PartialEq)]
    struct HostProps {
        fired: Rc<Cell<u32>>,
    }

    /// Schedules one scroll as soon as it mounts.
    #[function_component(ScrollHost)]
    fn scroll_host(props: &HostProps) -> Html {
        let scroll = use_deferred_scroll(DELAY_MS);
        let fired = props.fired.clone();
        use_effect_with((), move |_| {
            scroll.schedule_with(bump(&fired));
            || ()
        });
        html! { <div /> }
    }

    fn mount_host(fired: &Rc<Cell<u32>>) -> AppHandle<ScrollHost> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                let root = d.create_element("div").ok()?;
                d.body()?.append_child(&root).ok()?;
                Some(root)
            })
            .unwrap();
        yew::Renderer::<ScrollHost>::with_root_and_props(root, HostProps { fired: fired.clone() })
            .render()
    }

    #[wasm_bindgen_test]
    async fn test_mounted_host_scrolls() {
        let fired = counter();
        let app = mount_host(&fired);

        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(fired.get(), 1);
        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn test_unmount_clears_pending_scroll() {
        let fired = counter();
        let app = mount_host(&fired);

        // Let the mount effect schedule, then unmount before the delay elapses.
        TimeoutFuture::new(0).await;
        app.destroy();

        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(fired.get(), 0);
    }
}
