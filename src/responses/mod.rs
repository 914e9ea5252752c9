pub mod html;
pub mod redirect;

pub use html::{html_response, html_response_with_cookies};
pub use redirect::{redirect, redirect_with_cookies};
