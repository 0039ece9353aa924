//! Hero strip host: binds pointer events on the strip element to [`DragStrip`].

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, PointerEvent};
use widgets::config::HeroConfig;
use widgets::drag::{DragAction, DragBounds, DragStrip};
use widgets::style;

use crate::dom;

/// Resolved elements for the hero strip.
pub struct HeroElements {
    strip: HtmlElement,
}

impl HeroElements {
    /// `None` when the page has no hero strip.
    pub fn resolve(document: &Document, config: &HeroConfig) -> Option<Self> {
        dom::element_by_id(document, &config.element_id).map(|strip| Self { strip })
    }
}

/// Reset the strip transform and bind its pointer listeners.
pub fn mount(elements: HeroElements, bounds: DragBounds) {
    let strip = elements.strip;
    let drag = Rc::new(RefCell::new(DragStrip::new(bounds)));
    apply(&strip, drag.borrow().mount());

    {
        let drag = Rc::clone(&drag);
        let target = strip.clone();
        dom::on_pointer(&strip, "pointerdown", move |ev: PointerEvent| {
            let actions = drag.borrow_mut().pointer_down(f64::from(ev.client_x()), ev.pointer_id());
            apply(&target, actions);
        });
    }
    {
        let drag = Rc::clone(&drag);
        let target = strip.clone();
        dom::on_pointer(&strip, "pointermove", move |ev: PointerEvent| {
            let actions = drag.borrow_mut().pointer_move(f64::from(ev.client_x()));
            apply(&target, actions);
        });
    }
    for event in ["pointerup", "pointercancel"] {
        let drag = Rc::clone(&drag);
        let target = strip.clone();
        dom::on_pointer(&strip, event, move |ev: PointerEvent| {
            let actions = drag.borrow_mut().pointer_up(ev.pointer_id());
            if !actions.is_empty() {
                log::debug!("hero strip committed at {}px", drag.borrow().committed_offset());
            }
            apply(&target, actions);
        });
    }

    log::info!("hero strip mounted");
}

fn apply(strip: &HtmlElement, actions: Vec<DragAction>) {
    for action in actions {
        match action {
            DragAction::CapturePointer(id) => {
                // Best-effort.
                let _ = strip.set_pointer_capture(id);
            }
            DragAction::ReleasePointer(id) => {
                let _ = strip.release_pointer_capture(id);
            }
            DragAction::SetCursor(cursor) => dom::set_style(strip, "cursor", cursor.as_css()),
            DragAction::Translate(x) => dom::set_style(strip, "transform", &style::translate_x(x)),
        }
    }
}
