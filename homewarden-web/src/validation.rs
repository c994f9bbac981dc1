//! Extractor error handlers.
//!
//! `actix-web-validator` surfaces both deserialization failures and
//! `validator` rule failures through one error type; these handlers convert
//! either into the structured 400 body
//! `{ "error": "Validation failed", "details": [{ "field", "message" }] }`.

use actix_web::HttpRequest;
use actix_web_validator::Error as ExtractorError;
use homewarden_error::web::{FieldError, WebError};
use validator::{ValidationErrors, ValidationErrorsKind};

pub(crate) fn json_error_handler(err: ExtractorError, _req: &HttpRequest) -> actix_web::Error {
    to_web_error(err, "body").into()
}

pub(crate) fn query_error_handler(err: ExtractorError, _req: &HttpRequest) -> actix_web::Error {
    to_web_error(err, "query").into()
}

pub(crate) fn path_error_handler(err: ExtractorError, _req: &HttpRequest) -> actix_web::Error {
    to_web_error(err, "path").into()
}

fn to_web_error(err: ExtractorError, source: &str) -> WebError {
    match &err {
        ExtractorError::Validate(errors) => {
            let mut details = Vec::new();
            collect_field_errors(errors, "", &mut details);
            WebError::Validation(details)
        }
        // Deserialization failures (wrong type, missing required field, bad
        // enum value, unparseable date). The message names the offending
        // field, e.g. "missing field `name`".
        other => WebError::Validation(vec![FieldError {
            field: source.to_string(),
            message: other.to_string(),
        }]),
    }
}

/// Flatten nested `ValidationErrors` into dotted, camelCase field paths the
/// wire format uses (e.g. `maintenanceTasks[0].taskName`).
fn collect_field_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = to_camel(field.as_ref());
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for e in field_errors {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    out.push(FieldError {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(range(min = 1))]
        warranty_duration_months: i32,
    }

    #[test]
    fn field_paths_are_camelized() {
        let probe = Probe {
            name: String::new(),
            warranty_duration_months: 0,
        };
        let errors = probe.validate().unwrap_err();

        let mut details = Vec::new();
        collect_field_errors(&errors, "", &mut details);
        details.sort_by(|a, b| a.field.cmp(&b.field));

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].field, "name");
        assert_eq!(details[0].message, "name is required");
        assert_eq!(details[1].field, "warrantyDurationMonths");
    }

    #[test]
    fn camel_conversion_handles_plain_names() {
        assert_eq!(to_camel("name"), "name");
        assert_eq!(to_camel("purchase_date"), "purchaseDate");
    }
}
