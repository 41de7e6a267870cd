//! Wiring and dispatch: the one place that knows every controller.
//!
//! `init` runs the feature initializers once, in the same order the page
//! has always wired them; a feature whose elements are missing is left
//! unwired and everything else proceeds. Events route to controllers in
//! wiring order, and any scroll movement they cause re-runs the
//! scroll-reactive controllers, the way programmatic scrolling raises
//! scroll events in a browser.

use chrono::{Datelike, Local};

use crate::config::Bindings;
use crate::controllers::{
    year, ActiveNav, BackToTop, CardHover, ContactForm, MobileNav, NavbarShadow, Reveal,
    SmoothScroll, ThemeToggle,
};
use crate::events::Event;
use crate::motion::Motion;
use crate::page::Page;
use crate::prefs::PreferenceStore;

/// The page features the engine can wire. Doubles as the handle for
/// detaching a single feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    MobileNav,
    SmoothScroll,
    BackToTop,
    Theme,
    ContactForm,
    Reveal,
    ActiveNav,
    NavbarShadow,
    CardHover,
    Year,
}

pub struct Behaviors {
    bindings: Bindings,
    motion: Motion,
    mobile_nav: Option<MobileNav>,
    smooth_scroll: Option<SmoothScroll>,
    back_to_top: Option<BackToTop>,
    theme: Option<ThemeToggle>,
    contact_form: Option<ContactForm>,
    reveal: Option<Reveal>,
    active_nav: Option<ActiveNav>,
    navbar_shadow: Option<NavbarShadow>,
    card_hover: Option<CardHover>,
    year_stamped: bool,
}

impl Behaviors {
    /// Wire every feature the page supports. Runs once per page.
    pub fn init(page: &mut Page, bindings: Bindings, store: Box<dyn PreferenceStore>) -> Self {
        let mobile_nav = MobileNav::init(page, &bindings);
        let smooth_scroll = SmoothScroll::init(page, &bindings);
        let back_to_top = BackToTop::init(page, &bindings);
        let theme = ThemeToggle::init(page, &bindings, store);
        let contact_form = ContactForm::init(page, &bindings);
        let reveal = Reveal::init(page, &bindings);
        let active_nav = ActiveNav::init(page, &bindings);
        let navbar_shadow = NavbarShadow::init(page, &bindings);
        let card_hover = CardHover::init(page, &bindings);
        let year_stamped = year::stamp(page, &bindings, Local::now().year());

        let behaviors = Self {
            bindings,
            motion: Motion::new(),
            mobile_nav,
            smooth_scroll,
            back_to_top,
            theme,
            contact_form,
            reveal,
            active_nav,
            navbar_shadow,
            card_hover,
            year_stamped,
        };
        tracing::debug!(wired = ?behaviors.wired(), "page behaviors wired");
        behaviors
    }

    /// Route one discrete event to every wired controller, then re-run the
    /// scroll reactions if handling it moved the page.
    pub fn dispatch(&mut self, page: &mut Page, event: &Event) {
        let scroll_before = page.scroll_y;

        match event {
            Event::Click { target } => {
                if let Some(nav) = &self.mobile_nav {
                    nav.on_click(page, &self.bindings, target);
                }
                if let Some(scroll) = &self.smooth_scroll {
                    scroll.on_click(page, &mut self.motion, &self.bindings, target);
                }
                if let Some(control) = &self.back_to_top {
                    control.on_click(page, &mut self.motion, target);
                }
                if let Some(theme) = &mut self.theme {
                    theme.on_click(page, &self.bindings, target);
                }
            }
            Event::MouseEnter { target } => {
                if let Some(hover) = &self.card_hover {
                    hover.on_mouse_enter(page, target);
                }
            }
            Event::Blur { target } => {
                if let Some(form) = &self.contact_form {
                    form.on_blur(page, &self.bindings, target);
                }
            }
            Event::Submit { target } => {
                if let Some(form) = &mut self.contact_form {
                    form.on_submit(page, &mut self.motion, &self.bindings, target);
                }
            }
            Event::Scroll => self.on_scroll(page),
        }

        if (page.scroll_y - scroll_before).abs() > f64::EPSILON {
            self.on_scroll(page);
        }
    }

    /// Advance the engine clock: step any fallback scroll animation and
    /// expire the form's success timer.
    pub fn tick(&mut self, page: &mut Page, now_ms: u64) {
        if self.motion.advance(page, now_ms) {
            self.on_scroll(page);
        }
        if let Some(form) = &mut self.contact_form {
            form.on_tick(page, &self.bindings, now_ms);
        }
    }

    fn on_scroll(&mut self, page: &mut Page) {
        if let Some(control) = &self.back_to_top {
            control.on_scroll(page, &self.bindings);
        }
        if let Some(reveal) = &mut self.reveal {
            reveal.on_scroll(page, &self.bindings);
        }
        if let Some(nav) = &self.active_nav {
            nav.on_scroll(page, &self.bindings);
        }
        if let Some(shadow) = &self.navbar_shadow {
            shadow.on_scroll(page, &self.bindings);
        }
    }

    /// Features that found their elements and attached.
    pub fn wired(&self) -> Vec<Feature> {
        let mut features = Vec::new();
        if self.mobile_nav.is_some() {
            features.push(Feature::MobileNav);
        }
        if self.smooth_scroll.is_some() {
            features.push(Feature::SmoothScroll);
        }
        if self.back_to_top.is_some() {
            features.push(Feature::BackToTop);
        }
        if self.theme.is_some() {
            features.push(Feature::Theme);
        }
        if self.contact_form.is_some() {
            features.push(Feature::ContactForm);
        }
        if self.reveal.is_some() {
            features.push(Feature::Reveal);
        }
        if self.active_nav.is_some() {
            features.push(Feature::ActiveNav);
        }
        if self.navbar_shadow.is_some() {
            features.push(Feature::NavbarShadow);
        }
        if self.card_hover.is_some() {
            features.push(Feature::CardHover);
        }
        if self.year_stamped {
            features.push(Feature::Year);
        }
        features
    }

    /// Tear one feature down; it stops reacting to events immediately.
    pub fn detach(&mut self, feature: Feature) {
        match feature {
            Feature::MobileNav => self.mobile_nav = None,
            Feature::SmoothScroll => self.smooth_scroll = None,
            Feature::BackToTop => self.back_to_top = None,
            Feature::Theme => self.theme = None,
            Feature::ContactForm => self.contact_form = None,
            Feature::Reveal => self.reveal = None,
            Feature::ActiveNav => self.active_nav = None,
            Feature::NavbarShadow => self.navbar_shadow = None,
            Feature::CardHover => self.card_hover = None,
            Feature::Year => self.year_stamped = false,
        }
    }

    /// True while a fallback scroll animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }
}
