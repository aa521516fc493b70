mod helpers;

use helpers::{setup::spawn_app, utils::datetime};
use remindme_bot_api::get_service_health::APIResponse;

#[actix_web::test]
async fn test_status_ok() {
    let app = spawn_app(datetime(2022, 1, 1, 12, 0)).await;

    let res = reqwest::get(format!("{}/api/v1/", app.address))
        .await
        .expect("Expected status endpoint to respond");
    assert!(res.status().is_success());

    let body: APIResponse = res.json().await.unwrap();
    assert_eq!(body.message, "Yo! We are up!\r\n");
}
