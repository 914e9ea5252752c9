use crate::auth::password::{hash_password, verify_password};
use crate::auth::sessions::{self, clear_session_cookie, session_cookie};
use crate::auth::{Gate, Identity};
use crate::context::RequestCtx;
use crate::db::{houses, now_unix, rentals, users, Database};
use crate::domain::{page_by_path, page_for_house, ListingPage, RentalApplication, Signup};
use crate::errors::{RentError, ResultResp, ServerError, SignupError};
use crate::flash::Flash;
use crate::forms::{with_query, FormData};
use crate::responses::{html_response, html_response_with_cookies, redirect, redirect_with_cookies};
use crate::templates::pages::{self, ListingVm};
use astra::Request;
use maud::Markup;
use tracing::{info, warn};

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const ADMIN_HOME_PATH: &str = "/home";

const INVALID_LOGIN: &str = "Invalid username or password!";
const LOGGED_OUT: &str = "You have successfully logged out.";

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let ctx = RequestCtx::new(db, &req)?;

    if let Some(page) = page_by_path(&path) {
        return match method.as_str() {
            "GET" => listing(&ctx, page),
            _ => Err(ServerError::MethodNotAllowed),
        };
    }

    if let Some(house_id) = path_id(&path, "/rent/") {
        return match method.as_str() {
            "POST" => {
                let Some(who) = ctx.admit(Gate::Session) else {
                    return redirect(LOGIN_PATH);
                };
                let back = local_referer(&req);
                let form = FormData::from_body(&mut req)?;
                rent(&ctx, who, house_id, &form, back)
            }
            _ => Err(ServerError::MethodNotAllowed),
        };
    }

    if let Some(house_id) = path_id(&path, "/update_status/") {
        return match method.as_str() {
            "GET" => toggle_status(&ctx, house_id),
            _ => Err(ServerError::MethodNotAllowed),
        };
    }

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect(LOGIN_PATH),

        ("GET", SIGNUP_PATH) => render(&ctx, pages::signup_page(ctx.flash().as_ref())),
        ("POST", SIGNUP_PATH) => {
            let form = FormData::from_body(&mut req)?;
            signup(&ctx, &form)
        }

        ("GET", LOGIN_PATH) => {
            let query = FormData::from_query(&req);
            render(&ctx, pages::login_page(query.get("message"), ctx.flash().as_ref()))
        }
        ("POST", LOGIN_PATH) => {
            let form = FormData::from_body(&mut req)?;
            login(&ctx, &form)
        }

        ("GET", "/logout") => logout(&ctx),
        ("GET", ADMIN_HOME_PATH) => admin_home(&ctx),

        (_, "/" | SIGNUP_PATH | LOGIN_PATH | "/logout" | ADMIN_HOME_PATH) => {
            Err(ServerError::MethodNotAllowed)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Render a page, consuming any flash cookie the request carried.
fn render(ctx: &RequestCtx<'_>, markup: Markup) -> ResultResp {
    if ctx.has_flash_cookie() {
        html_response_with_cookies(markup, &[Flash::clear_cookie()])
    } else {
        html_response(markup)
    }
}

fn redirect_with_flash(location: &str, flash: Flash) -> ResultResp {
    redirect_with_cookies(location, &[flash.set_cookie()])
}

fn signup(ctx: &RequestCtx<'_>, form: &FormData) -> ResultResp {
    let created = Signup::from_form(form).and_then(|s| {
        let hash = hash_password(&s.password)?;
        let id = ctx.with_conn(|conn| users::insert_user(conn, &s.username, &s.email, &hash, now_unix()))?;
        Ok((id, s.username))
    });

    match created {
        Ok((user_id, username)) => {
            info!(user_id, %username, "account created");
            redirect_with_flash(
                LOGIN_PATH,
                Flash::success("Account created successfully! You can now log in."),
            )
        }
        Err(SignupError::Server(e)) => Err(e),
        Err(e) => {
            warn!(reason = %e, "signup rejected");
            redirect_with_flash(SIGNUP_PATH, Flash::danger(e.to_string()))
        }
    }
}

fn login(ctx: &RequestCtx<'_>, form: &FormData) -> ResultResp {
    let (Some(username), Some(password)) = (form.get("username"), form.get_raw("password")) else {
        return redirect_with_flash(
            LOGIN_PATH,
            Flash::danger("Please enter your username and password."),
        );
    };

    let user = ctx.with_conn(|conn| users::find_by_username(conn, username))?;
    let verified = match &user {
        Some(u) => verify_password(password, &u.password_hash)?,
        None => false,
    };

    let Some(user) = user.filter(|_| verified) else {
        warn!(%username, "login failed");
        return render(ctx, pages::login_page(Some(INVALID_LOGIN), ctx.flash().as_ref()));
    };

    let who = Identity {
        user_id: user.id,
        username: user.username,
        is_admin: user.is_admin,
    };
    let token = ctx.with_conn(|conn| sessions::create_session(conn, &who, now_unix()))?;
    info!(user_id = who.user_id, is_admin = who.is_admin, "login");

    let home = if who.is_admin {
        ADMIN_HOME_PATH
    } else {
        page_for_house(1).path
    };
    redirect_with_cookies(home, &[session_cookie(&token)])
}

/// Clears the session whether or not one exists.
fn logout(ctx: &RequestCtx<'_>) -> ResultResp {
    if let Some(token) = ctx.session_token() {
        ctx.with_conn(|conn| sessions::delete_session(conn, &token))?;
    }
    if let Some(who) = ctx.identity() {
        info!(user_id = who.user_id, "logout");
    }

    redirect_with_cookies(
        &with_query(LOGIN_PATH, "message", LOGGED_OUT),
        &[clear_session_cookie()],
    )
}

fn admin_home(ctx: &RequestCtx<'_>) -> ResultResp {
    let Some(who) = ctx.admit(Gate::Admin) else {
        return redirect(LOGIN_PATH);
    };

    let houses = ctx.with_conn(|conn| houses::list_all(conn))?;
    render(ctx, pages::admin_home_page(&houses, who, ctx.flash().as_ref()))
}

fn listing(ctx: &RequestCtx<'_>, page: &ListingPage) -> ResultResp {
    let Some(who) = ctx.admit(Gate::Session) else {
        return redirect(LOGIN_PATH);
    };

    let houses = ctx.with_conn(|conn| houses::list_for_page(conn, page))?;
    let flash = ctx.flash();
    render(
        ctx,
        pages::listing_page(&ListingVm {
            page,
            houses: &houses,
            who,
            flash: flash.as_ref(),
        }),
    )
}

/// Availability is checked before the fields, so a rented house reports
/// "already rented" even for an incomplete form.
fn rent(
    ctx: &RequestCtx<'_>,
    who: &Identity,
    house_id: i64,
    form: &FormData,
    back: Option<String>,
) -> ResultResp {
    let listing_path = page_for_house(house_id).path;
    let submitted = ctx.with_conn(|conn| {
        rentals::ensure_rentable(conn, house_id)?;
        let app = RentalApplication::from_form(form)?;
        rentals::submit_rental(conn, house_id, &app, now_unix())
    });

    match submitted {
        Ok(rental_id) => {
            info!(house_id, rental_id, user_id = who.user_id, "rental submitted");
            redirect_with_flash(
                listing_path,
                Flash::success("Your rental application has been submitted successfully!"),
            )
        }
        Err(RentError::Server(e)) => Err(e),
        Err(e) => {
            warn!(house_id, user_id = who.user_id, reason = %e, "rental rejected");
            let back = back.as_deref().unwrap_or(listing_path);
            redirect_with_flash(back, Flash::danger(e.to_string()))
        }
    }
}

fn toggle_status(ctx: &RequestCtx<'_>, house_id: i64) -> ResultResp {
    let Some(who) = ctx.admit(Gate::Admin) else {
        return redirect(LOGIN_PATH);
    };

    if let Some(status) = ctx.with_conn(|conn| houses::toggle_status(conn, house_id))? {
        info!(house_id, %status, user_id = who.user_id, "house status toggled");
    }
    redirect(ADMIN_HOME_PATH)
}

/// `/rent/7` -> 7. Only plain non-negative integers match.
fn path_id(path: &str, prefix: &str) -> Option<i64> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// The `Referer` path, if it points back at this site.
///
/// Relative and absolute referers both resolve against `Host` the way a
/// browser would, so `/\evil.example` and `//evil.example` land off-site.
fn local_referer(req: &Request) -> Option<String> {
    let raw = req.headers().get("Referer")?.to_str().ok()?;
    let host = req.headers().get("Host")?.to_str().ok()?;

    let base = url::Url::parse(&format!("http://{host}/")).ok()?;
    let url = base.join(raw).ok()?;
    let same_site = url.host_str().is_some()
        && url.host_str() == base.host_str()
        && url.port_or_known_default() == base.port_or_known_default();

    // A path starting with `//` would itself be read as another host.
    let path = url.path();
    (same_site && !path.starts_with("//")).then(|| path.to_string())
}
