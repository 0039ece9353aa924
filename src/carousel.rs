//! Carousel host: resolves the carousel elements, wires the navigation
//! buttons and runs deferred text swaps on `gloo_timers` timeouts.
//!
//! Every element is optional. A missing container skips the background, a
//! missing button disables that direction, and the text fade only runs when
//! the info block, title and description are all present.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};
use widgets::carousel::{Carousel, CarouselAction, CarouselParts};
use widgets::config::CarouselConfig;
use widgets::slide::Catalog;

use crate::dom;

/// Info block with its title and description children.
pub struct TextBlock {
    info: HtmlElement,
    title: HtmlElement,
    description: HtmlElement,
}

/// Resolved (possibly absent) carousel elements.
pub struct CarouselElements {
    container: Option<HtmlElement>,
    images: Vec<HtmlElement>,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
    text: Option<TextBlock>,
}

impl CarouselElements {
    /// Which optional elements were found.
    pub fn parts(&self) -> CarouselParts {
        CarouselParts { container: self.container.is_some(), text_block: self.text.is_some() }
    }

    pub fn resolve(document: &Document, config: &CarouselConfig) -> Self {
        let text = match (
            dom::element_by_id(document, &config.info_id),
            dom::element_by_id(document, &config.title_id),
            dom::element_by_id(document, &config.description_id),
        ) {
            (Some(info), Some(title), Some(description)) => Some(TextBlock { info, title, description }),
            _ => None,
        };
        Self {
            container: dom::element_by_id(document, &config.container_id),
            images: dom::elements_by_selector(document, &config.images_selector),
            prev: dom::element_by_id(document, &config.prev_button_id),
            next: dom::element_by_id(document, &config.next_button_id),
            text,
        }
    }
}

struct CarouselHost {
    carousel: RefCell<Carousel>,
    container: Option<HtmlElement>,
    images: Vec<HtmlElement>,
    text: Option<TextBlock>,
}

impl CarouselHost {
    fn apply(self: &Rc<Self>, actions: Vec<CarouselAction>) {
        for action in actions {
            match action {
                CarouselAction::SetBackground(background) => {
                    if let Some(container) = &self.container {
                        dom::set_style(container, "background", &background);
                    }
                }
                CarouselAction::StyleImage { index, style } => {
                    if let Some(image) = self.images.get(index) {
                        dom::set_style(image, "transform", &style.transform());
                        dom::set_style(image, "opacity", &style.opacity_css());
                        dom::set_style(image, "filter", &style.filter());
                        dom::set_style(image, "z-index", &style.z_index_css());
                    }
                }
                CarouselAction::FadeOutInfo => {
                    if let Some(text) = &self.text {
                        dom::set_style(&text.info, "opacity", "0");
                    }
                }
                CarouselAction::ScheduleTextSwap { generation, delay_ms } => {
                    if self.text.is_some() {
                        let host = Rc::clone(self);
                        // Not cancelled on later navigation.
                        Timeout::new(delay_ms, move || {
                            let actions = host.carousel.borrow().text_swap(generation);
                            host.apply(actions);
                        })
                        .forget();
                    }
                }
                CarouselAction::SetTitle(title) => {
                    if let Some(text) = &self.text {
                        text.title.set_text_content(Some(title.as_str()));
                    }
                }
                CarouselAction::SetDescription(description) => {
                    if let Some(text) = &self.text {
                        text.description.set_text_content(Some(description.as_str()));
                    }
                }
                CarouselAction::FadeInInfo => {
                    if let Some(text) = &self.text {
                        dom::set_style(&text.info, "opacity", "1");
                    }
                }
            }
        }
    }
}

/// Paint the first slide and bind the navigation buttons.
pub fn mount(elements: CarouselElements, catalog: Catalog, config: &CarouselConfig) {
    let carousel = Carousel::new(catalog, elements.images.len())
        .with_parts(elements.parts())
        .with_policy(config.text_swap)
        .with_fade_delay_ms(config.text_fade_delay_ms);
    let host = Rc::new(CarouselHost {
        carousel: RefCell::new(carousel),
        container: elements.container,
        images: elements.images,
        text: elements.text,
    });

    if let Some(prev) = &elements.prev {
        let host = Rc::clone(&host);
        dom::on_click(prev, move || {
            let actions = host.carousel.borrow_mut().retreat();
            if !actions.is_empty() {
                log::debug!("carousel retreat to {}", host.carousel.borrow().active_index());
            }
            host.apply(actions);
        });
    }
    if let Some(next) = &elements.next {
        let host = Rc::clone(&host);
        dom::on_click(next, move || {
            let actions = host.carousel.borrow_mut().advance();
            if !actions.is_empty() {
                log::debug!("carousel advance to {}", host.carousel.borrow().active_index());
            }
            host.apply(actions);
        });
    }

    let actions = host.carousel.borrow_mut().mount();
    host.apply(actions);

    let carousel = host.carousel.borrow();
    log::info!("carousel mounted with {} slides, {} images", carousel.slide_count(), carousel.element_count());
}
