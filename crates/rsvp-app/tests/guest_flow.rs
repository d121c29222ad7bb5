//! Public guest page flows.

mod support;

use assert_matches::assert_matches;
use serde_json::json;

use rsvp_app::errors::GENERIC_SERVER_ERROR;
use rsvp_app::presentation::events::submit_guest_form;
use rsvp_app::presentation::{GuestPage, GuestView, SubmitError};
use rsvp_app::transport::{HttpMethod, AUTH_HEADER};
use rsvp_app::views::GuestRsvp;
use rsvp_app::workflows::fetch_guest_rsvp;
use rsvp_app::ApiError;

use support::{assert_request, TestEnv};

fn filled(private_id: &str) -> GuestRsvp {
    GuestRsvp {
        invitation_private_id: private_id.into(),
        full_name: "Jane Lim".into(),
        mobile_phone_number: "91234567".into(),
        ..GuestRsvp::unanswered()
    }
}

#[tokio::test]
async fn no_private_id_uses_defaults_without_network() {
    let env = TestEnv::anonymous();
    assert_eq!(GuestPage::from_state(&env.state().await), GuestPage::Landing);

    fetch_guest_rsvp(&env.app_core, None).await.expect("defaults");

    assert_eq!(env.transport.request_count(), 0);
    let state = env.state().await;
    let rsvp = state.guest_rsvp.clone().expect("loaded");
    assert!(rsvp.attending);
    assert_eq!(rsvp.guest_count, 1);
    assert!(!rsvp.special_diet);
    assert_matches!(GuestPage::from_state(&state), GuestPage::Form { .. });
}

#[tokio::test]
async fn completed_reply_shows_acknowledgment() {
    let env = TestEnv::logged_in();
    env.transport.respond(
        200,
        json!({
            "fullName": "Jane Lim",
            "attending": true,
            "guestCount": 2,
            "specialDiet": false,
            "remarks": "",
            "completed": true
        }),
    );

    fetch_guest_rsvp(&env.app_core, Some("priv-1")).await.expect("fetch");

    let request = env.transport.last_request().expect("request");
    assert_request(&request, HttpMethod::Get, "/api/p_rsvps/priv-1");
    assert_eq!(request.header(AUTH_HEADER), None);

    let view = GuestView::from_state(&env.state().await);
    let GuestPage::Acknowledgment(ack) = view.page else {
        panic!("expected acknowledgment");
    };
    assert_eq!(ack.salutation, "Dear Jane Lim -");
}

#[tokio::test]
async fn legacy_field_names_are_accepted() {
    let env = TestEnv::anonymous();
    env.transport.respond(
        200,
        json!({
            "invitationPrivateID": "priv-2",
            "fullName": "Tan",
            "ableToAttend": false,
            "numberAttending": 3,
            "specialDietaryRequirements": true
        }),
    );

    fetch_guest_rsvp(&env.app_core, Some("priv-2")).await.expect("fetch");

    let rsvp = env.state().await.guest_rsvp.expect("loaded");
    assert!(!rsvp.attending);
    assert_eq!(rsvp.guest_count, 3);
    assert!(rsvp.special_diet);
}

#[tokio::test]
async fn guest_failure_shows_generic_error_without_session_handling() {
    let env = TestEnv::logged_in();
    env.transport.respond(401, json!({}));

    let result = fetch_guest_rsvp(&env.app_core, Some("priv-3")).await;
    assert_eq!(result, Err(ApiError::InvalidSession));

    let state = env.state().await;
    assert_eq!(
        state.notice.current().map(|n| n.message.as_str()),
        Some(GENERIC_SERVER_ERROR)
    );
    assert!(state.auth.is_authenticated);
    assert_eq!(env.transport.request_count(), 1);
}

#[tokio::test]
async fn missing_token_blocks_submit() {
    let env = TestEnv::anonymous();

    let result = submit_guest_form(&env.app_core, &filled(""), "").await;

    assert_matches!(result, Err(SubmitError::Invalid(errors)) if errors.get("reCAPTCHA").is_some());
    assert_eq!(env.transport.request_count(), 0);
}

#[tokio::test]
async fn private_reply_is_addressed_by_private_id() {
    let env = TestEnv::anonymous();
    env.transport.respond(
        201,
        json!({
            "invitationPrivateID": "priv-4",
            "fullName": "Jane Lim",
            "attending": true,
            "guestCount": 1,
            "completed": true
        }),
    );

    submit_guest_form(&env.app_core, &filled("priv-4"), "captcha")
        .await
        .expect("submit");

    let request = env.transport.last_request().expect("request");
    assert_request(&request, HttpMethod::Post, "/api/p_rsvps");
    let body = request.body.expect("body");
    assert_eq!(body["invitationPrivateID"], json!("priv-4"));
    assert_eq!(body["reCAPTCHA"], json!("captcha"));

    assert_matches!(
        GuestPage::from_state(&env.state().await),
        GuestPage::Acknowledgment(_)
    );
}

#[tokio::test]
async fn public_reply_posts_without_private_id() {
    let env = TestEnv::anonymous();
    env.transport
        .respond(201, json!({"fullName": "Jane Lim", "completed": true}));

    submit_guest_form(&env.app_core, &filled(""), "captcha")
        .await
        .expect("submit");

    let body = env.transport.last_request().and_then(|r| r.body).expect("body");
    assert_eq!(body["invitationPrivateID"], json!(""));
}

#[tokio::test]
async fn private_id_outside_one_segment_is_refused_before_any_request() {
    for private_id in ["../categories", "a/b", "priv?x=1", "priv#top"] {
        let env = TestEnv::anonymous();

        let result = fetch_guest_rsvp(&env.app_core, Some(private_id)).await;

        assert_matches!(result, Err(ApiError::Validation { .. }));
        assert_eq!(env.transport.request_count(), 0, "{private_id}");
        let state = env.state().await;
        assert_eq!(
            state.notice.current().map(|n| n.message.as_str()),
            Some(GENERIC_SERVER_ERROR)
        );
        assert_eq!(state.guest_rsvp, None);
    }
}
