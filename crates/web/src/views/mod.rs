//! Server-rendered HTML views.
//!
//! Each page is a pure function from its data context to a complete HTML
//! document. Dynamic text always passes through `esc` on the way into the
//! markup; nothing here touches the store.

pub mod animal;
pub mod class;
pub mod home;
pub mod order;
pub mod preserve_status;

use axum::http::StatusCode;
use wildpreserve_core::forms::{escape_html as esc, FieldError};

/// Wrap page content in the shared document shell with the sidebar nav.
pub(crate) fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body>\n\
         <div class=\"sidebar\">\n<ul>\n\
         <li><a href=\"/wildlife\">Home</a></li>\n\
         <li><a href=\"/wildlife/animals\">All animals</a></li>\n\
         <li><a href=\"/wildlife/classes\">All classes</a></li>\n\
         <li><a href=\"/wildlife/orders\">All orders</a></li>\n\
         <li><a href=\"/wildlife/preservestatuses\">All preserve statuses</a></li>\n\
         <li><a href=\"/wildlife/animal/create\">Create new animal</a></li>\n\
         <li><a href=\"/wildlife/class/create\">Create new class</a></li>\n\
         <li><a href=\"/wildlife/order/create\">Create new order</a></li>\n\
         <li><a href=\"/wildlife/preservestatus/create\">Create new preserve status</a></li>\n\
         </ul>\n</div>\n<div class=\"content\">\n{body}\n</div>\n</body>\n</html>\n",
        title = esc(title),
    )
}

/// Render the aggregated validation errors of a failed submission.
/// Empty input renders nothing.
pub(crate) fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errors\">\n");
    for error in errors {
        out.push_str(&format!("<li>{}</li>\n", esc(&error.message)));
    }
    out.push_str("</ul>\n");
    out
}

/// Generic error page for anything that escalates past the handlers.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{code} {reason}</h1>\n<p>{message}</p>\n",
        code = status.as_u16(),
        reason = esc(reason),
        message = esc(message),
    );
    layout(reason, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_escapes_the_title() {
        let page = layout("<Oops>", "<p>ok</p>");
        assert!(page.contains("<title>&lt;Oops&gt;</title>"));
        assert!(page.contains("<p>ok</p>"));
    }

    #[test]
    fn error_list_is_empty_for_no_errors() {
        assert_eq!(error_list(&[]), "");
    }

    #[test]
    fn error_list_renders_each_message() {
        let errors = vec![
            FieldError::new("name", "Name must not be empty."),
            FieldError::new("binomial", "Binomial must not be empty."),
        ];
        let html = error_list(&errors);
        assert!(html.contains("<li>Name must not be empty.</li>"));
        assert!(html.contains("<li>Binomial must not be empty.</li>"));
    }

    #[test]
    fn error_page_shows_status_and_message() {
        let page = error_page(StatusCode::NOT_FOUND, "Animal with id 9 not found");
        assert!(page.contains("404 Not Found"));
        assert!(page.contains("Animal with id 9 not found"));
    }
}
