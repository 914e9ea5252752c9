use crate::errors::ServerError;
use crate::forms::MAX_FORM_BYTES;
use crate::db::users::count_users;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn root_redirects_to_login() {
    let db = init_test_db();

    let resp = handle(get("/", None), &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn login_page_loads_successfully() {
    let db = init_test_db();

    let resp = handle(get("/login", None), &db).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn signup_then_login_gives_a_regular_session() {
    let db = init_test_db();

    let resp = signup(&db, "maria", "maria@example.com", "hunter22");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    assert!(set_cookie(&resp, "flash").is_some());

    let req = post_form("/login", None, &[("username", "maria"), ("password", "hunter22")]);
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/bulosan");
    let cookie = set_cookie(&resp, "session").unwrap();

    // A regular session can browse listings but not the admin home.
    assert_eq!(handle(get("/bulosan", Some(cookie.as_str())), &db).unwrap().status(), 200);
    let admin = handle(get("/home", Some(cookie.as_str())), &db).unwrap();
    assert_eq!(admin.status(), 302);
    assert_eq!(location(&admin), "/login");
}

#[test]
fn passwords_are_not_stored_in_plaintext() {
    let db = init_test_db();
    signup(&db, "maria", "maria@example.com", "hunter22");

    let stored: String = conn(&db)
        .query_row("select password from users where username = 'maria'", [], |r| r.get(0))
        .unwrap();

    assert_ne!(stored, "hunter22");
    assert!(stored.starts_with("$argon2"));
}

#[test]
fn duplicate_username_or_email_is_a_conflict() {
    let db = init_test_db();
    signup(&db, "maria", "maria@example.com", "pw1");
    let before = count_users(&conn(&db)).unwrap();

    for (username, email) in [("maria", "other@example.com"), ("other", "maria@example.com")] {
        let resp = signup(&db, username, email, "pw2");
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), "/signup");
        assert!(set_cookie(&resp, "flash").is_some());
    }

    assert_eq!(count_users(&conn(&db)).unwrap(), before);
}

#[test]
fn signup_with_missing_field_goes_back_to_form() {
    let db = init_test_db();
    let before = count_users(&conn(&db)).unwrap();

    let resp = signup(&db, "maria", "", "pw");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/signup");
    assert_eq!(count_users(&conn(&db)).unwrap(), before);
}

#[test]
fn flash_is_shown_once_then_cleared() {
    let db = init_test_db();
    let resp = signup(&db, "maria", "", "pw");
    let flash = set_cookie(&resp, "flash").unwrap();

    let page = handle(get("/signup", Some(flash.as_str())), &db).unwrap();

    assert_eq!(set_cookie(&page, "flash").as_deref(), Some("flash="));
    assert!(body_string(page).contains("Please fill in all fields."));
}

#[test]
fn wrong_password_rerenders_login_without_session() {
    let db = init_test_db();
    signup(&db, "maria", "maria@example.com", "hunter22");

    let req = post_form("/login", None, &[("username", "maria"), ("password", "nope")]);
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(set_cookie(&resp, "session").is_none());
    assert!(body_string(resp).contains("Invalid username or password!"));
}

#[test]
fn unknown_user_rerenders_login() {
    let db = init_test_db();

    let req = post_form("/login", None, &[("username", "ghost"), ("password", "x")]);
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Invalid username or password!"));
}

#[test]
fn admin_login_goes_to_admin_home() {
    let db = init_test_db();

    let req = post_form("/login", None, &[("username", "admin"), ("password", "admin-pass")]);
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/home");
}

#[test]
fn logout_clears_session_and_confirms() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "maria");

    let resp = handle(get("/logout", Some(cookie.as_str())), &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(
        location(&resp),
        "/login?message=You+have+successfully+logged+out."
    );
    assert_eq!(set_cookie(&resp, "session").as_deref(), Some("session="));

    // The old cookie no longer authenticates.
    let after = handle(get("/bulosan", Some(cookie.as_str())), &db).unwrap();
    assert_eq!(location(&after), "/login");

    let page = handle(get(location(&resp), None), &db).unwrap();
    assert!(body_string(page).contains("You have successfully logged out."));
}

#[test]
fn logout_without_session_still_redirects() {
    let db = init_test_db();

    let resp = handle(get("/logout", None), &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert!(location(&resp).starts_with("/login?message="));
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db();

    assert!(matches!(
        handle(get("/nowhere", None), &db),
        Err(crate::errors::ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/rent/1", None), &db),
        Err(crate::errors::ServerError::MethodNotAllowed)
    ));
}

#[test]
fn oversize_login_form_is_a_bad_request() {
    let db = init_test_db();

    let password = "x".repeat(MAX_FORM_BYTES as usize);
    let req = post_form("/login", None, &[("username", "admin"), ("password", &password)]);

    assert!(matches!(handle(req, &db), Err(ServerError::BadRequest(_))));
}
