//! Web platform adapter: binds sliders to DOM elements.
//!
//! ```ignore
//! let platform = WebPlatform::new()?;
//! let handle = platform.attach(".profile-row-large")?;
//! // dropping `handle` removes every listener again
//! ```

mod element_container;
mod frame_scheduler;
mod listener;

pub use element_container::{translate_x_css, ElementContainer};
pub use frame_scheduler::AnimationFrameScheduler;
pub use listener::EventListener;

use glidescroll_core::FrameRuntime;
use glidescroll_foundation::{DraggableSlider, PointerEventKind, SliderConfig, SliderEvent};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent};

/// Owns the frame runtime shared by every slider on a page.
pub struct WebPlatform {
    document: Document,
    runtime: Rc<FrameRuntime>,
}

impl WebPlatform {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let document = window
            .document()
            .ok_or("should have a document on window")?;

        let scheduler = Rc::new(AnimationFrameScheduler::new(window));
        let runtime = Rc::new(FrameRuntime::new(scheduler.clone()));
        scheduler.bind(runtime.handle());

        Ok(Self { document, runtime })
    }

    /// Attaches a slider with default settings to the first element matching
    /// `selector`. No match is not an error: the result is `Ok(None)`.
    pub fn attach(&self, selector: &str) -> Result<Option<SliderHandle>, JsValue> {
        self.attach_with_config(selector, SliderConfig::default())
    }

    pub fn attach_with_config(
        &self,
        selector: &str,
        config: SliderConfig,
    ) -> Result<Option<SliderHandle>, JsValue> {
        let Some(element) = self.document.query_selector(selector)? else {
            log::debug!("no element matches {selector}; slider skipped");
            return Ok(None);
        };
        let element = element.dyn_into::<HtmlElement>()?;

        let slider = DraggableSlider::with_config(
            ElementContainer::new(element.clone()),
            self.runtime.frame_clock(),
            config,
        );
        let listeners = wire_listeners(element.as_ref(), &slider)?;
        log::debug!("slider attached to {selector}");

        Ok(Some(SliderHandle {
            selector: selector.to_string(),
            slider,
            listeners,
            _runtime: self.runtime.clone(),
        }))
    }

    /// Attaches every selector that matches. Misses are skipped; selectors
    /// that fail to attach are logged and skipped.
    pub fn attach_all(&self, selectors: &[&str], config: &SliderConfig) -> Vec<SliderHandle> {
        let mut handles = Vec::with_capacity(selectors.len());
        for selector in selectors {
            match self.attach_with_config(selector, config.clone()) {
                Ok(Some(handle)) => handles.push(handle),
                Ok(None) => {}
                Err(err) => log::error!("failed to attach {selector}: {err:?}"),
            }
        }
        handles
    }
}

/// A live slider. Dropping it detaches the behavior from the element.
pub struct SliderHandle {
    selector: String,
    slider: DraggableSlider<ElementContainer>,
    listeners: Vec<EventListener>,
    _runtime: Rc<FrameRuntime>,
}

impl SliderHandle {
    pub fn slider(&self) -> &DraggableSlider<ElementContainer> {
        &self.slider
    }

    pub fn element(&self) -> &HtmlElement {
        self.slider.container().element()
    }
}

impl Drop for SliderHandle {
    fn drop(&mut self) {
        self.slider.detach();
        log::debug!(
            "slider detached from {} ({} listeners)",
            self.selector,
            self.listeners.len()
        );
    }
}

fn wire_listeners(
    target: &EventTarget,
    slider: &DraggableSlider<ElementContainer>,
) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = Vec::with_capacity(7);

    let pointer_events = [
        ("mousedown", PointerEventKind::Down),
        ("mousemove", PointerEventKind::Move),
        ("mouseup", PointerEventKind::Up),
        ("mouseleave", PointerEventKind::Leave),
    ];
    for (event_type, kind) in pointer_events {
        let slider = slider.clone();
        listeners.push(EventListener::new(target, event_type, move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let page_x = mouse.page_x() as f32;
            if slider.dispatch(SliderEvent::Pointer { kind, page_x }) {
                event.prevent_default();
            }
        })?);
    }

    let link_events: [(&'static str, fn(bool) -> SliderEvent); 2] = [
        ("click", |on_link| SliderEvent::Click { on_link }),
        ("dragstart", |on_link| SliderEvent::DragStart { on_link }),
    ];
    for (event_type, to_event) in link_events {
        let slider = slider.clone();
        listeners.push(EventListener::new(target, event_type, move |event: Event| {
            if slider.dispatch(to_event(target_is_link(&event))) {
                event.prevent_default();
            }
        })?);
    }

    {
        let slider = slider.clone();
        listeners.push(EventListener::new(target, "transitionend", move |_event: Event| {
            slider.dispatch(SliderEvent::TransitionEnd);
        })?);
    }

    Ok(listeners)
}

/// Whether the event originated on or inside an `<a>` element.
fn target_is_link(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("a").ok().flatten())
        .is_some()
}
