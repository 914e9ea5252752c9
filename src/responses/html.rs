use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_cookies(markup, &[])
}

/// 200 HTML page, appending one `Set-Cookie` header per entry.
pub fn html_response_with_cookies(markup: Markup, cookies: &[String]) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref());

    for cookie in cookies {
        builder = builder.header("Set-Cookie", cookie.as_str());
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
