mod helpers;

use actix_web::http::StatusCode;
use almanac_api_structs::{
    create_calendar, create_event, create_user, get_me, get_service_health, update_calendar,
    update_event,
};
use almanac_utils::ALPHABET;
use helpers::setup::spawn_app;

async fn register_user(address: &str, username: &str) -> create_user::APIResponse {
    let client = awc::Client::new();
    let mut res = client
        .post(format!("{}/user", address))
        .send_json(&create_user::RequestBody {
            username: username.into(),
        })
        .await
        .expect("To create user");
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.expect("User response")
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let address = spawn_app().await;
    let client = awc::Client::new();

    let mut res = client
        .get(format!("{}/health", address))
        .send()
        .await
        .expect("To get health");
    assert_eq!(res.status(), StatusCode::OK);
    let health: get_service_health::APIResponse = res.json().await.expect("Health response");
    assert_eq!(health.users, 0);
    assert!(health.time > 0);
}

#[actix_web::main]
#[test]
async fn test_create_user_issues_label_and_token() {
    let address = spawn_app().await;

    let res = register_user(&address, "alice").await;
    assert_eq!(res.user.username, "alice");
    assert_eq!(res.user.id.as_str().len(), 8);
    assert_eq!(res.token.len(), 64);
    assert!(res.token.bytes().all(|b| ALPHABET.contains(&b)));

    // Username is taken now
    let client = awc::Client::new();
    let res = client
        .post(format!("{}/user", address))
        .send_json(&create_user::RequestBody {
            username: "alice".into(),
        })
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[actix_web::main]
#[test]
async fn test_rejects_missing_and_unknown_tokens() {
    let address = spawn_app().await;
    let client = awc::Client::new();

    let res = client
        .get(format!("{}/me", address))
        .send()
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/me", address))
        .insert_header(("Authorization", "notavalidtoken"))
        .send()
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::main]
#[test]
async fn test_get_me() {
    let address = spawn_app().await;
    let alice = register_user(&address, "alice").await;

    let client = awc::Client::new();
    let mut res = client
        .get(format!("{}/me", address))
        .insert_header(("Authorization", alice.token.clone()))
        .send()
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::OK);
    let me: get_me::APIResponse = res.json().await.expect("Me response");
    assert_eq!(me.user.id, alice.user.id);
}

#[actix_web::main]
#[test]
async fn test_calendar_sharing_scenario() {
    let address = spawn_app().await;
    let alice = register_user(&address, "alice").await;
    let bob = register_user(&address, "bob").await;
    let client = awc::Client::new();

    // alice creates the Family calendar, she seeds both membership lists
    let mut res = client
        .post(format!("{}/calendar", address))
        .insert_header(("Authorization", alice.token.clone()))
        .send_json(&create_calendar::RequestBody {
            name: "Family".into(),
        })
        .await
        .expect("To create calendar");
    assert_eq!(res.status(), StatusCode::CREATED);
    let calendar = res
        .json::<create_calendar::APIResponse>()
        .await
        .expect("Calendar response")
        .calendar;
    assert_eq!(calendar.user_id, alice.user.id);
    assert_eq!(calendar.view_users, vec![alice.user.id.clone()]);
    assert_eq!(calendar.mod_users, vec![alice.user.id.clone()]);

    // alice creates the Dinner event on it
    let mut res = client
        .post(format!("{}/event", address))
        .insert_header(("Authorization", alice.token.clone()))
        .send_json(&create_event::RequestBody {
            name: "Dinner".into(),
            description: Some("Pizza night".into()),
            timestamp: 1_700_000_000_000,
            calendar_ids: vec![calendar.id.clone()],
        })
        .await
        .expect("To create event");
    assert_eq!(res.status(), StatusCode::CREATED);
    let event = res
        .json::<create_event::APIResponse>()
        .await
        .expect("Event response")
        .event;

    // bob has no relation to the calendar and must not even learn that
    // the event exists
    let res = client
        .get(format!("{}/event/{}", address, event.id))
        .insert_header(("Authorization", bob.token.clone()))
        .send()
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // bob cannot write events into alice's calendar either
    let res = client
        .post(format!("{}/event", address))
        .insert_header(("Authorization", bob.token.clone()))
        .send_json(&create_event::RequestBody {
            name: "Party".into(),
            description: None,
            timestamp: 1_700_000_000_000,
            calendar_ids: vec![calendar.id.clone()],
        })
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // alice adds bob as viewer
    let res = client
        .put(format!("{}/calendar/{}", address, calendar.id))
        .insert_header(("Authorization", alice.token.clone()))
        .send_json(&update_calendar::RequestBody {
            name: None,
            view_users: Some(vec![alice.user.id.clone(), bob.user.id.clone()]),
            mod_users: None,
        })
        .await
        .expect("To update calendar");
    assert_eq!(res.status(), StatusCode::OK);

    // bob now sees the event through the calendar
    let res = client
        .get(format!("{}/event/{}", address, event.id))
        .insert_header(("Authorization", bob.token.clone()))
        .send()
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::OK);

    // but viewing does not grant modification
    let res = client
        .put(format!("{}/event/{}", address, event.id))
        .insert_header(("Authorization", bob.token.clone()))
        .send_json(&update_event::RequestBody {
            name: Some("Hijacked".into()),
            description: None,
            timestamp: None,
            calendar_ids: None,
        })
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::main]
#[test]
async fn test_owner_only_deletion() {
    let address = spawn_app().await;
    let alice = register_user(&address, "alice").await;
    let bob = register_user(&address, "bob").await;
    let client = awc::Client::new();

    let mut res = client
        .post(format!("{}/calendar", address))
        .insert_header(("Authorization", alice.token.clone()))
        .send_json(&create_calendar::RequestBody {
            name: "Family".into(),
        })
        .await
        .expect("To create calendar");
    let calendar = res
        .json::<create_calendar::APIResponse>()
        .await
        .expect("Calendar response")
        .calendar;

    // even as moderator bob cannot delete the calendar
    let res = client
        .put(format!("{}/calendar/{}", address, calendar.id))
        .insert_header(("Authorization", alice.token.clone()))
        .send_json(&update_calendar::RequestBody {
            name: None,
            view_users: None,
            mod_users: Some(vec![alice.user.id.clone(), bob.user.id.clone()]),
        })
        .await
        .expect("To update calendar");
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/calendar/{}", address, calendar.id))
        .insert_header(("Authorization", bob.token.clone()))
        .send()
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/calendar/{}", address, calendar.id))
        .insert_header(("Authorization", alice.token.clone()))
        .send()
        .await
        .expect("To send request");
    assert_eq!(res.status(), StatusCode::OK);
}
