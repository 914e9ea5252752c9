use crate::errors::ServerError;
use crate::forms::MAX_FORM_BYTES;
use crate::router::handle;
use crate::tests::utils::*;

const APPLICATION: [(&str, &str); 5] = [
    ("name", "Ana Cruz"),
    ("email", "ana@example.ph"),
    ("phone", "09171234567"),
    ("movein", "2025-07-01"),
    ("message", "Can I bring my cat?"),
];

#[test]
fn rent_requires_login() {
    let db = init_test_db();

    let resp = handle(post_form("/rent/1", None, &APPLICATION), &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    assert_eq!(house_status(&db, 1), "For Rent");
    assert_eq!(rental_count(&db, 1), 0);
}

#[test]
fn renting_marks_house_and_records_one_application() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");

    let resp = handle(post_form("/rent/6", Some(cookie.as_str()), &APPLICATION), &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/bulosan2");
    assert!(set_cookie(&resp, "flash").is_some());
    assert_eq!(house_status(&db, 6), "Rented");
    assert_eq!(rental_count(&db, 6), 1);

    let (name, message): (String, Option<String>) = conn(&db)
        .query_row(
            "select user_name, message from rentals where house_id = 6",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(name, "Ana Cruz");
    assert_eq!(message.as_deref(), Some("Can I bring my cat?"));
}

#[test]
fn already_rented_house_is_rejected() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");
    handle(post_form("/rent/3", Some(cookie.as_str()), &APPLICATION), &db).unwrap();

    let resp = handle(post_form("/rent/3", Some(cookie.as_str()), &APPLICATION), &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/bulosan");
    assert_eq!(rental_count(&db, 3), 1);

    let flash = set_cookie(&resp, "flash").unwrap();
    let both = format!("{cookie}; {flash}");
    let page = handle(get("/bulosan", Some(both.as_str())), &db).unwrap();
    assert!(body_string(page).contains("This house is already rented."));
}

#[test]
fn missing_house_is_not_found() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");

    let resp = handle(post_form("/rent/42", Some(cookie.as_str()), &APPLICATION), &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/bulosan6");
    assert!(set_cookie(&resp, "flash").is_some());
    let total: i64 = conn(&db)
        .query_row("select count(*) from rentals", [], |r| r.get(0))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn incomplete_application_changes_nothing() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");

    let resp = handle(
        post_form("/rent/1", Some(cookie.as_str()), &APPLICATION[..3]),
        &db,
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/bulosan");
    assert_eq!(house_status(&db, 1), "For Rent");
    assert_eq!(rental_count(&db, 1), 0);
}

#[test]
fn message_is_optional() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");

    let resp = handle(post_form("/rent/2", Some(cookie.as_str()), &APPLICATION[..4]), &db).unwrap();

    assert_eq!(location(&resp), "/bulosan");
    assert_eq!(house_status(&db, 2), "Rented");
    assert_eq!(rental_count(&db, 2), 1);
}

#[test]
fn failures_go_back_to_the_referring_page() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");

    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/rent/99")
        .header("Host", "localhost:3000")
        .header("Referer", "http://localhost:3000/bulosan2")
        .header("Cookie", cookie)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(astra::Body::from("name=A".to_string()))
        .unwrap();
    let resp = handle(req, &db).unwrap();

    assert_eq!(location(&resp), "/bulosan2");
}

#[test]
fn off_site_referer_falls_back_to_the_listing_page() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");

    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/rent/99")
        .header("Host", "localhost:3000")
        .header("Referer", "/\\evil.example/phish")
        .header("Cookie", cookie)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(astra::Body::from("name=A".to_string()))
        .unwrap();
    let resp = handle(req, &db).unwrap();

    assert_eq!(location(&resp), "/bulosan6");
}

#[test]
fn rented_house_is_reported_before_missing_fields() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");
    handle(post_form("/rent/3", Some(cookie.as_str()), &APPLICATION), &db).unwrap();

    let resp = handle(post_form("/rent/3", Some(cookie.as_str()), &[]), &db).unwrap();

    let flash = set_cookie(&resp, "flash").unwrap();
    let both = format!("{cookie}; {flash}");
    let page = handle(get("/bulosan", Some(both.as_str())), &db).unwrap();
    assert!(body_string(page).contains("This house is already rented."));
}

#[test]
fn anonymous_rent_is_redirected_before_the_body_is_read() {
    let db = init_test_db();

    let body = vec![b'a'; MAX_FORM_BYTES as usize * 4];
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/rent/1")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(astra::Body::from(body))
        .unwrap();
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    assert_eq!(house_status(&db, 1), "For Rent");
}

#[test]
fn oversize_application_is_a_bad_request() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "ana");

    let mut body = b"name=".to_vec();
    body.resize(MAX_FORM_BYTES as usize + 1, b'a');
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/rent/1")
        .header("Cookie", cookie)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(astra::Body::from(body))
        .unwrap();

    assert!(matches!(handle(req, &db), Err(ServerError::BadRequest(_))));
    assert_eq!(house_status(&db, 1), "For Rent");
    assert_eq!(rental_count(&db, 1), 0);
}
