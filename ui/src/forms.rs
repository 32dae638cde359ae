use hackmate_common::forms::{handle_submit, SubmitTarget};
use hackmate_common::markers::NEEDS_VALIDATION;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement};

use crate::dom;

struct FormSubmit<'a> {
    form: &'a HtmlFormElement,
    event: &'a Event,
}

impl SubmitTarget for FormSubmit<'_> {
    fn is_valid(&self) -> bool {
        self.form.check_validity()
    }

    fn cancel_submission(&self) {
        self.event.prevent_default();
        self.event.stop_propagation();
    }

    fn add_class(&self, class: &str) {
        let _ = self.form.class_list().add_1(class);
    }
}

/// Block submission of `.needs-validation` forms that fail native constraint
/// validation, and flag them for Bootstrap's validity styles.
pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    for element in dom::query_all(&document, NEEDS_VALIDATION) {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        dom::listen(&form, "submit", move |event| {
            handle_submit(&FormSubmit {
                form: &target,
                event: &event,
            });
        });
    }
}
