//! Simulated form submission feedback.

use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement};

use crate::components::notification::Notifier;
use crate::state::form::FormSubmission;
use crate::web::dom::{self, DomError, Listener};

/// Intercept every `<form>` submit: report success and reset the fields.
pub fn install(notifier: Notifier) -> Result<Vec<Listener>, DomError> {
    let document = dom::document()?;
    let forms = dom::query_all(&document, "form")?;

    forms
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .map(|form| {
            let target = form.clone();
            Listener::new(&target, "submit", move |ev: Event| {
                ev.prevent_default();
                let submission = match collect_fields(&form) {
                    Ok(submission) => submission,
                    Err(e) => {
                        log::warn!("failed to read form fields: {e}");
                        FormSubmission::default()
                    }
                };
                log::debug!("form submitted: {}", submission.to_json());
                let (message, kind) = submission.notification();
                notifier.show(message, kind);
                form.reset();
            })
        })
        .collect()
}

/// Text entries of the form. File inputs carry no string value and are skipped.
fn collect_fields(form: &HtmlFormElement) -> Result<FormSubmission, DomError> {
    let data = FormData::new_with_form(form)?;
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(FormSubmission::default());
    };
    let mut fields = Vec::new();
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(FormSubmission::from_fields(fields))
}
