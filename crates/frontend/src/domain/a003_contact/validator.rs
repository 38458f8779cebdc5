use crate::shared::debounce::Debouncer;
use crate::shared::dom;
use contracts::domain::a003_contact::{
    ContactField, ContactRules, ContactSubmission, ERROR_CLASS, ERROR_FOR_ATTR,
};
use contracts::shared::config::ContactConfig;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

const EMAIL_SELECTOR: &str = "input[type=\"email\"]";
const MESSAGE_SELECTOR: &str = "textarea";
const FIELD_ERROR_CLASS: &str = "border-red-500";
const SUCCESS_CLASS: &str = "text-green-500 mt-4";

/// Live validation and submit handling for the contact form.
pub struct ContactFormValidator {
    form: HtmlFormElement,
    rules: ContactRules,
    success_message: String,
    success_message_ms: u32,
}

impl ContactFormValidator {
    /// Attaches to `#<form_id>`; pages without the form are left untouched.
    pub fn attach(config: &ContactConfig) {
        let Some(form) = dom::by_id(&config.form_id)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            log::debug!("Contact form #{} not found", config.form_id);
            return;
        };

        let validator = Rc::new(Self {
            form,
            rules: config.rules(),
            success_message: config.success_message.clone(),
            success_message_ms: config.success_message_ms,
        });

        let debouncer = Debouncer::new(config.debounce_ms);
        for field in dom::query_all_in(&validator.form, "input, textarea") {
            let (validator, debouncer) = (validator.clone(), debouncer.clone());
            dom::listen(&field, "input", move |_: Event| {
                let validator = validator.clone();
                debouncer.call(move || {
                    validator.validate();
                });
            });
        }

        let on_submit = {
            let validator = validator.clone();
            move |ev: Event| {
                ev.prevent_default();
                if validator.validate() {
                    validator.submit();
                }
            }
        };
        dom::listen(&validator.form, "submit", on_submit);
    }

    fn field(&self, selector: &str) -> Option<Element> {
        self.form.query_selector(selector).ok().flatten()
    }

    fn validate(&self) -> bool {
        let email = self.field(EMAIL_SELECTOR);
        let message = self.field(MESSAGE_SELECTOR);

        let report = self.rules.validate(
            email.as_ref().map(field_value).as_deref(),
            message.as_ref().map(field_value).as_deref(),
        );

        for check in &report.checks {
            let element = match check.field {
                ContactField::Email => email.as_ref(),
                ContactField::Message => message.as_ref(),
            };
            let Some(element) = element else {
                continue;
            };
            match &check.error {
                Some(error) => show_error(element, check.field, error),
                None => remove_error(element, check.field),
            }
        }

        report.is_valid()
    }

    fn submit(&self) {
        let fields = dom::query_all_in(&self.form, "input[name], textarea[name]")
            .iter()
            .filter_map(|el| Some((el.get_attribute("name")?, field_value(el))))
            .collect::<Vec<_>>();
        let submission = ContactSubmission::new(fields);
        log::info!("Form submitted: {}", submission.to_log_line());

        if let Some(document) = dom::document() {
            if let Ok(notice) = document.create_element("div") {
                notice.set_class_name(SUCCESS_CLASS);
                notice.set_text_content(Some(&self.success_message));
                let _ = self.form.append_child(&notice);

                let delay = self.success_message_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    notice.remove();
                });
            }
        }

        self.form.reset();
    }
}

fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn show_error(element: &Element, field: ContactField, message: &str) {
    let Some(parent) = element.parent_element() else {
        return;
    };
    let existing = parent
        .query_selector(&field.error_selector())
        .ok()
        .flatten();
    let error = match existing {
        Some(error) => error,
        None => {
            let Some(error) = dom::document().and_then(|d| d.create_element("div").ok()) else {
                return;
            };
            error.set_class_name(ERROR_CLASS);
            let _ = error.set_attribute(ERROR_FOR_ATTR, field.as_str());
            // сразу под своим полем, даже если поля делят одного родителя
            let _ = element.after_with_node_1(&error);
            error
        }
    };
    error.set_text_content(Some(message));
    let _ = element.class_list().add_1(FIELD_ERROR_CLASS);
}

fn remove_error(element: &Element, field: ContactField) {
    if let Some(parent) = element.parent_element() {
        if let Ok(Some(error)) = parent.query_selector(&field.error_selector()) {
            error.remove();
        }
    }
    let _ = element.class_list().remove_1(FIELD_ERROR_CLASS);
}
