mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::TestApp;

#[actix_rt::test]
async fn test_full_trip_planning_flow() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // Health check
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // Autocomplete then search for the chosen city
    let req = test::TestRequest::get().uri("/api/autocomplete?q=man").to_request();
    let resp = test::call_service(&app, req).await;
    let suggestions: Vec<String> = test::read_body_json(resp).await;
    assert_eq!(suggestions, vec!["Manali"]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/search?q={}", suggestions[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cities: Value = test::read_body_json(resp).await;
    assert_eq!(cities[0]["City"], "Manali");

    // Places for the city
    let req = test::TestRequest::get().uri("/api/places/Manali").to_request();
    let resp = test::call_service(&app, req).await;
    let places: Value = test::read_body_json(resp).await;
    assert_eq!(places.as_array().unwrap().len(), 1);
    assert_eq!(places[0]["Place_Desc"], "Solang Valley in Manali");

    // Cities that suit a three day trip include it
    let req = test::TestRequest::post()
        .uri("/api/match-cities")
        .set_json(json!({ "tripDuration": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let matched: Value = test::read_body_json(resp).await;
    assert!(matched
        .as_array()
        .unwrap()
        .iter()
        .any(|city| city["City"] == "Manali"));

    // Itinerary and budget for the trip
    let trip = json!({
        "cityName": "Manali",
        "tripDetails": {
            "startDate": "2024-12-20",
            "endDate": "2024-12-23",
            "tripType": "family",
            "members": 3,
            "budget": "low"
        }
    });

    let req = test::TestRequest::post()
        .uri("/api/itinerary")
        .set_json(&trip)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let itinerary: Value = test::read_body_json(resp).await;
    assert_eq!(itinerary.as_array().unwrap().len(), 1);
    assert_eq!(itinerary[0]["activities"][0]["name"], "Solang Valley");

    let req = test::TestRequest::post()
        .uri("/api/trip-budget")
        .set_json(&trip)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let budget: Value = test::read_body_json(resp).await;
    assert_eq!(budget["totalBudget"], 9000.0);
}
