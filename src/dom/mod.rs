//! Browser binding for the pager.
//!
//! The controller is shared as `Rc<RefCell<_>>` between the event listeners.
//! The surface only holds a `Weak` handle, used by its timer and frame
//! callbacks, so the listeners are what keep the pager alive.

mod cache_bust;
mod config;
mod indicator;
mod listeners;
mod surface;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use paged_scroll_core::{
    InputEvent, LogLevel, PagedScrollController, PagerConfig, PagerError, SectionIndicator,
    SectionNames,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement};

use indicator::IndicatorElements;
use surface::DomSurface;

pub(crate) type Pager = PagedScrollController<DomSurface>;
pub(crate) type SharedPager = Rc<RefCell<Pager>>;

/// Bootstrap and report failures to the console.
///
/// Failure leaves the page as plain static content.
pub(crate) fn start() {
    match bootstrap() {
        Ok(pager) => {
            let pager = pager.borrow();
            log::info!(
                "Paged scroll ready: {} sections",
                pager.section_count()
            );
        }
        Err(e) => log::error!("Paged scroll disabled: {}", e),
    }
}

fn bootstrap() -> Result<SharedPager, PagerError> {
    let window = web_sys::window().ok_or_else(|| PagerError::dom("No global window exists"))?;
    let document = window
        .document()
        .ok_or_else(|| PagerError::dom("No document in window"))?;

    // Logging comes up before reporting config problems, at the configured
    // level when the config is usable.
    let loaded = config::load(&document);
    init_logging(loaded.as_ref().map_or(LogLevel::default(), |c| c.log_level));
    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Ignoring page config: {}", e);
        PagerConfig::default()
    });

    if config.cache_bust {
        cache_bust::apply(&window, &document);
    }

    let container = document
        .query_selector(&config.container_selector)
        .map_err(js_err("querySelector"))?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| PagerError::MissingContainer {
            selector: config.container_selector.clone(),
        })?;

    let panes = query_html_elements(&document, &config.pane_selector)?;
    if panes.is_empty() {
        return Err(PagerError::NoSections {
            selector: config.pane_selector.clone(),
        });
    }

    let initial_view = SectionIndicator::new(SectionNames::new(config.section_names.clone()))
        .view(0, panes.len());
    let indicator = IndicatorElements::create(&document, &initial_view)?;

    let surface = DomSurface::new(window.clone(), container.clone(), panes, indicator.clone());
    let pager: SharedPager = Rc::new(RefCell::new(PagedScrollController::new(surface, &config)?));
    pager.borrow_mut().surface_mut().bind(Rc::downgrade(&pager));
    pager.borrow_mut().initialize();

    listeners::attach(&pager, &window, &document, &container, &indicator, &config)?;
    Ok(pager)
}

fn init_logging(level: LogLevel) {
    // A second init (page scripts calling in twice) keeps the first logger.
    let _ = console_log::init_with_level(level.to_level());
}

fn query_html_elements(
    document: &web_sys::Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, PagerError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(js_err("querySelectorAll"))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Feed an event to the pager.
///
/// Listeners never nest, but a busy pager drops the event instead of
/// panicking on a double borrow.
pub(crate) fn dispatch(pager: &SharedPager, event: InputEvent) -> bool {
    match pager.try_borrow_mut() {
        Ok(mut pager) => pager.handle_input(event),
        Err(_) => {
            log::warn!("Pager busy, dropped {:?}", event);
            false
        }
    }
}

/// Run `f` on the pager behind a weak handle.
///
/// `None` if the pager is gone, `Some(false)` if it was busy and `f` did not
/// run.
pub(crate) fn with_pager(
    pager: &Weak<RefCell<Pager>>,
    f: impl FnOnce(&mut Pager),
) -> Option<bool> {
    let pager = pager.upgrade()?;
    let ran = match pager.try_borrow_mut() {
        Ok(mut pager) => {
            f(&mut pager);
            true
        }
        Err(_) => {
            log::warn!("Pager busy, deferring callback");
            false
        }
    };
    Some(ran)
}

/// Map a JS exception into a `PagerError` tagged with the failing call.
pub(crate) fn js_err(context: &'static str) -> impl FnOnce(JsValue) -> PagerError {
    move |value| PagerError::dom(format!("{}: {:?}", context, value))
}

/// Listener flags.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ListenOptions {
    pub passive: bool,
    pub once: bool,
}

impl ListenOptions {
    pub fn passive() -> Self {
        Self {
            passive: true,
            once: false,
        }
    }

    pub fn once() -> Self {
        Self {
            passive: false,
            once: true,
        }
    }
}

/// Attach an event listener for the lifetime of the page.
pub(crate) fn listen<F>(
    target: &EventTarget,
    kind: &str,
    options: ListenOptions,
    handler: F,
) -> Result<(), PagerError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    let listener_options = AddEventListenerOptions::new();
    listener_options.set_passive(options.passive);
    listener_options.set_once(options.once);

    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &listener_options,
        )
        .map_err(js_err("addEventListener"))?;
    closure.forget(); // Leak the closure to keep it alive
    Ok(())
}
