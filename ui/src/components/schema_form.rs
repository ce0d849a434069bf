//! Renders a [`Schema`] as a Pico form and validates it on submit.

use dioxus::prelude::*;
use model::forms::Field;
use model::forms::FieldKind;
use model::forms::FormErrors;
use model::forms::FormValues;
use model::forms::Schema;

#[derive(Props, PartialEq, Clone)]
pub struct SchemaFormProps {
    schema: Schema,
    /// Values to start from instead of the schema defaults.
    #[props(optional)]
    initial: Option<FormValues>,
    on_submit: EventHandler<FormValues>,
    #[props(optional)]
    on_cancel: Option<EventHandler<()>>,
    /// Errors raised after validation passed, e.g. by an inventory operation.
    #[props(into, default)]
    external_error: String,
}

/// Submitting runs every field's rules. Only values that pass reach
/// `on_submit`; otherwise each failing field shows its first message.
#[allow(non_snake_case)]
pub fn SchemaForm(props: SchemaFormProps) -> Element {
    let schema = props.schema.clone();
    let initial = props.initial.clone();
    let values = use_signal(move || initial.unwrap_or_else(|| schema.defaults()));
    let mut errors = use_signal(FormErrors::default);

    let submit_schema = props.schema.clone();
    let on_submit = props.on_submit;
    let on_cancel = props.on_cancel;
    let fields = props.schema.fields.clone();

    rsx! {
        form {
            id: "{props.schema.id}",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let current = values.read().clone();
                match submit_schema.validate(&current) {
                    Ok(()) => {
                        errors.set(FormErrors::default());
                        on_submit.call(current);
                    }
                    Err(e) => errors.set(e),
                }
            },
            for (name, field) in fields.into_iter().map(|f| (f.name, f)) {
                FieldInput {
                    key: "{name}",
                    error: errors.read().get(name).unwrap_or_default().to_string(),
                    field,
                    values,
                }
            }
            if !props.external_error.is_empty() {
                p { class: "form-error", role: "alert", "{props.external_error}" }
            }
            div {
                class: "form-actions",
                if let Some(on_cancel) = on_cancel {
                    button {
                        r#type: "button",
                        class: "secondary outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
                button { r#type: "submit", "{props.schema.submit_label}" }
            }
        }
    }
}

#[component]
fn FieldInput(field: Field, mut values: Signal<FormValues>, #[props(default)] error: String) -> Element {
    let name = field.name;
    let value = values.read().text(name).to_string();
    let invalid = (!error.is_empty()).then_some("true");
    let label = if field.is_required() {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };
    let placeholder = field.placeholder;

    let control = match field.kind {
        FieldKind::Checkbox => {
            return rsx! {
                label {
                    input {
                        r#type: "checkbox",
                        name,
                        checked: values.read().flag(name),
                        onchange: move |evt| values.write().set(name, evt.checked().to_string()),
                    }
                    "{label}"
                }
            };
        }
        FieldKind::Select(options) => rsx! {
            select {
                name,
                "aria-invalid": invalid,
                onchange: move |evt| values.write().set(name, evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "Select..." }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: option_value,
                        selected: value == option_value,
                        "{option_label}"
                    }
                }
            }
        },
        FieldKind::TextArea => rsx! {
            textarea {
                name,
                placeholder,
                rows: 3,
                "aria-invalid": invalid,
                value: "{value}",
                oninput: move |evt| values.write().set(name, evt.value()),
            }
        },
        ref kind => rsx! {
            input {
                r#type: kind.input_type(),
                name,
                placeholder,
                step: if matches!(kind, FieldKind::Number) { Some("any") } else { None },
                "aria-invalid": invalid,
                value: "{value}",
                oninput: move |evt| values.write().set(name, evt.value()),
            }
        },
    };

    rsx! {
        label {
            "{label}"
            {control}
            if !error.is_empty() {
                small { class: "field-error", "{error}" }
            }
        }
    }
}
