//! Contact form validation: all three fields checked on submit without
//! short-circuiting, each field re-checked alone when it loses focus.

use regex_lite::Regex;

use crate::config::Bindings;
use crate::motion::Motion;
use crate::page::Page;

/// No whitespace, exactly one `@`, at least one `.` in the domain.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// How long the success confirmation stays up.
const SUCCESS_VISIBLE_MS: u64 = 5000;

const NAME_REQUIRED: &str = "Please enter your name";
const EMAIL_REQUIRED: &str = "Please enter your email address";
const EMAIL_INVALID: &str = "Please enter a valid email address";
const MESSAGE_REQUIRED: &str = "Please enter your message";

pub struct ContactForm {
    form: String,
    email_pattern: Regex,
    success_hide_at: Option<u64>,
}

impl ContactForm {
    pub fn init(page: &Page, bindings: &Bindings) -> Option<Self> {
        if page.get(&bindings.contact_form).is_none()
            || page.get(&bindings.name_field).is_none()
            || page.get(&bindings.email_field).is_none()
            || page.get(&bindings.message_field).is_none()
        {
            return None;
        }
        Some(Self {
            form: bindings.contact_form.clone(),
            email_pattern: Regex::new(EMAIL_PATTERN).ok()?,
            success_hide_at: None,
        })
    }

    pub fn on_submit(
        &mut self,
        page: &mut Page,
        motion: &mut Motion,
        bindings: &Bindings,
        target: &str,
    ) {
        if target != self.form {
            return;
        }

        self.clear_feedback(page, bindings);

        let name = page.value(&bindings.name_field).trim().to_string();
        let email = page.value(&bindings.email_field).trim().to_string();
        let message = page.value(&bindings.message_field).trim().to_string();

        // Every field is checked; multiple errors can show at once
        let mut valid = true;
        if let Some(error) = self.name_error(&name) {
            page.set_text(&bindings.name_error, error);
            valid = false;
        }
        if let Some(error) = self.email_error(&email) {
            page.set_text(&bindings.email_error, error);
            valid = false;
        }
        if let Some(error) = self.message_error(&message) {
            page.set_text(&bindings.message_error, error);
            valid = false;
        }
        if !valid {
            return;
        }

        page.add_class(&bindings.success_message, &bindings.show_class);
        self.success_hide_at = Some(motion.now_ms + SUCCESS_VISIBLE_MS);
        if let Some(target_y) = page.reveal_offset(&bindings.success_message) {
            motion.scroll_to(page, target_y);
        }

        page.set_value(&bindings.name_field, "");
        page.set_value(&bindings.email_field, "");
        page.set_value(&bindings.message_field, "");
    }

    /// Blur re-validates only the field that lost focus.
    pub fn on_blur(&self, page: &mut Page, bindings: &Bindings, target: &str) {
        if target == bindings.name_field {
            let value = page.value(&bindings.name_field).trim().to_string();
            page.set_text(&bindings.name_error, self.name_error(&value).unwrap_or(""));
        } else if target == bindings.email_field {
            let value = page.value(&bindings.email_field).trim().to_string();
            page.set_text(&bindings.email_error, self.email_error(&value).unwrap_or(""));
        } else if target == bindings.message_field {
            let value = page.value(&bindings.message_field).trim().to_string();
            page.set_text(
                &bindings.message_error,
                self.message_error(&value).unwrap_or(""),
            );
        }
    }

    /// Take the success confirmation down once its time is up.
    pub fn on_tick(&mut self, page: &mut Page, bindings: &Bindings, now_ms: u64) {
        if let Some(hide_at) = self.success_hide_at {
            if now_ms >= hide_at {
                page.remove_class(&bindings.success_message, &bindings.show_class);
                self.success_hide_at = None;
            }
        }
    }

    fn clear_feedback(&self, page: &mut Page, bindings: &Bindings) {
        page.set_text(&bindings.name_error, "");
        page.set_text(&bindings.email_error, "");
        page.set_text(&bindings.message_error, "");
        page.remove_class(&bindings.success_message, &bindings.show_class);
    }

    fn name_error(&self, value: &str) -> Option<&'static str> {
        value.is_empty().then_some(NAME_REQUIRED)
    }

    fn email_error(&self, value: &str) -> Option<&'static str> {
        if value.is_empty() {
            Some(EMAIL_REQUIRED)
        } else if !self.email_pattern.is_match(value) {
            Some(EMAIL_INVALID)
        } else {
            None
        }
    }

    fn message_error(&self, value: &str) -> Option<&'static str> {
        value.is_empty().then_some(MESSAGE_REQUIRED)
    }
}
