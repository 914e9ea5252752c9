use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),

        ServerError::MethodNotAllowed => render_error(405, "Method Not Allowed"),

        ServerError::BadRequest(msg) => render_error(400, &msg),

        ServerError::DbError(msg) => {
            tracing::error!(error = %msg, "database error");
            render_error(500, "Something went wrong. Please try again.")
        }

        ServerError::PasswordError(msg) => {
            tracing::error!(error = %msg, "password hashing error");
            render_error(500, "Something went wrong. Please try again.")
        }

        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/login" { "← Back to login" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
