mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::TestApp;

fn form() -> Value {
    json!({
        "City": "  Hampi ",
        "City_desc": "Boulder-strewn ruins of Vijayanagara",
        "Min_no_of_days": "2",
        "Max_no_of_days": "4",
        "Low_Budget_Per_Day": "1200",
        "Medium_Budget_Per_Day": "2800",
        "High_Budget_Per_Day": "",
        "Ideal_duration": "3 days",
        "Best_time_to_visit": "November to February"
    })
}

#[actix_rt::test]
async fn test_submit_city_stores_submission() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/submit-city")
        .set_json(form())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["City"], "Hampi");
    assert_eq!(body["Min_no_of_days"], 2);
    assert_eq!(body["Low_Budget_Per_Day"], 1200.0);
    assert!(body["High_Budget_Per_Day"].is_null());

    let stored = test_app.store.submissions();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Hampi");
    let id = stored[0].id.unwrap();
    assert_eq!(body["_id"], id.to_hex());
    assert!(stored[0].created_at.is_some());
}

#[actix_rt::test]
async fn test_submit_city_validation() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let mut blank = form();
    blank["City"] = json!("   ");
    let mut inverted = form();
    inverted["Min_no_of_days"] = json!(6);
    let mut garbage = form();
    garbage["Max_no_of_days"] = json!("a week");

    for (payload, message) in [
        (blank, Some("City name is required")),
        (
            inverted,
            Some("Min_no_of_days (6) cannot exceed Max_no_of_days (4)"),
        ),
        (garbage, None),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/submit-city")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{}", payload);

        let body: Value = test::read_body_json(resp).await;
        if let Some(message) = message {
            assert_eq!(body["error"], message);
        }
    }

    assert!(test_app.store.submissions().is_empty());
}

#[actix_rt::test]
async fn test_submit_city_storage_failure() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/submit-city")
        .set_json(form())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to submit city");
}
