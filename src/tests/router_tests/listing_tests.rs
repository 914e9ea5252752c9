use crate::db::houses::insert_house;
use crate::domain::PAGES;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn every_page_requires_login() {
    let db = init_test_db();

    for page in PAGES.iter() {
        for cookie in [None, Some("session=forged")] {
            let resp = handle(get(page.path, cookie), &db).unwrap();
            assert_eq!(resp.status(), 302, "{} with {:?}", page.path, cookie);
            assert_eq!(location(&resp), "/login");
        }
    }
}

#[test]
fn page_k_lists_its_id_window_in_order() {
    let db = init_test_db();
    {
        let conn = conn(&db);
        for i in 9..=24 {
            insert_house(&conn, &format!("Extra House {i}"), "Bulosan", "₱1,000 / month").unwrap();
        }
    }
    let cookie = login_new_user(&db, "viewer");

    for page in PAGES.iter() {
        let resp = handle(get(page.path, Some(cookie.as_str())), &db).unwrap();
        assert_eq!(resp.status(), 200);
        let body = body_string(resp);

        let mut last_pos = 0;
        for id in 1..=24 {
            let marker = format!("id=\"house-{id}\"");
            match body.find(&marker) {
                Some(pos) => {
                    assert!(page.contains(id), "house {id} leaked onto {}", page.path);
                    assert!(pos >= last_pos, "house {id} out of order on {}", page.path);
                    last_pos = pos;
                }
                None => assert!(!page.contains(id), "house {id} missing from {}", page.path),
            }
        }
    }
}

#[test]
fn empty_window_renders_an_empty_listing() {
    let db = init_test_db();
    let cookie = login_new_user(&db, "viewer");

    let resp = handle(get("/bulosan4", Some(cookie.as_str())), &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("No houses listed on this page yet."));
    assert!(!body.contains("id=\"house-"));
}

#[test]
fn rented_houses_have_no_rent_form() {
    let db = init_test_db();
    conn(&db)
        .execute("update houses set status = 'Rented' where id = 2", [])
        .unwrap();
    let cookie = login_new_user(&db, "viewer");

    let body = body_string(handle(get("/bulosan", Some(cookie.as_str())), &db).unwrap());

    assert!(body.contains("action=\"/rent/1\""));
    assert!(!body.contains("action=\"/rent/2\""));
}

#[test]
fn admins_can_browse_listings_too() {
    let db = init_test_db();
    let cookie = login_admin(&db);

    let resp = handle(get("/bulosan2", Some(cookie.as_str())), &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("id=\"house-5\""));
}
