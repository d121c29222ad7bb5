//! Invitation and admin RSVP flows.

mod support;

use assert_matches::assert_matches;
use serde_json::json;

use rsvp_app::errors::INVALID_SESSION_ERROR;
use rsvp_app::presentation::events::{
    confirm_rsvp_delete, open_invitation_create, request_rsvp_delete, submit_invitation_form,
    submit_rsvp_form,
};
use rsvp_app::presentation::{ControlPanelView, SubmitError};
use rsvp_app::routes::Route;
use rsvp_app::transport::HttpMethod;
use rsvp_app::views::{InvitationDraft, InvitationStatus, RsvpDraft};
use rsvp_app::workflows::invitations::SMS_SENT_MESSAGE;
use rsvp_app::workflows::{
    fetch_categories, fetch_invitations, fetch_rsvps, send_invitation_sms, share_invitation,
};
use rsvp_app::ApiError;

use support::{assert_request, TestEnv};

fn invitation_json(id: i64, category_id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "categoryID": category_id,
        "greeting": "Mr and Mrs Tan",
        "maximumGuestCount": 2,
        "notes": "",
        "mobilePhoneNumber": "91234567",
        "status": status,
        "privateID": format!("priv-{id}"),
        "updatedAt": "2019-09-20T20:23:00Z"
    })
}

#[tokio::test]
async fn invitation_table_resolves_categories() {
    let env = TestEnv::logged_in();
    env.transport
        .respond(200, json!([{"id": 1, "tag": "Family", "total": 1}]));
    env.transport.respond(
        200,
        json!([invitation_json(10, 1, "RA"), invitation_json(11, 9, "XX")]),
    );

    fetch_categories(&env.app_core).await.expect("categories");
    fetch_invitations(&env.app_core).await.expect("invitations");

    let state = env.state().await;
    assert_eq!(
        state.invitations.get(11).map(|i| i.status),
        Some(InvitationStatus::Unknown)
    );

    let view = ControlPanelView::from_state(&state, "https://wedding.example");
    assert_eq!(view.invitations[0].category, "Family");
    assert_eq!(view.invitations[0].status, "Replied - Attending");
    assert_eq!(view.invitations[0].private_link, "https://wedding.example/rsvp/priv-10");
    assert_eq!(view.invitations[1].category, "Unknown");
    assert_eq!(view.invitations[1].status, "Unknown");
}

#[tokio::test]
async fn invitation_form_defaults_guest_count() {
    let env = TestEnv::logged_in();
    open_invitation_create(&env.app_core).await;

    let state = env.state().await;
    let initial = state.invitation_form.initial_values().expect("form open");
    assert_eq!(initial.maximum_guest_count, Some(1));
}

#[tokio::test]
async fn invitation_create_posts_wire_names() {
    let env = TestEnv::logged_in();
    env.transport.respond(201, invitation_json(12, 1, "NS"));

    let draft = InvitationDraft {
        category_id: Some(1),
        greeting: "Mr and Mrs Tan".into(),
        maximum_guest_count: Some(2),
        mobile_phone_number: "91234567".into(),
        ..InvitationDraft::default()
    };
    submit_invitation_form(&env.app_core, draft).await.expect("create");

    let request = env.transport.last_request().expect("request");
    assert_request(&request, HttpMethod::Post, "/api/invitations");
    let body = request.body.expect("body");
    assert_eq!(body["categoryID"], json!(1));
    assert_eq!(body["maximumGuestCount"], json!(2));

    let state = env.state().await;
    assert!(state.invitations.contains(12));
    assert_eq!(
        state.notice.current().map(|n| n.message.as_str()),
        Some("Invitation was created successfully.")
    );
}

#[tokio::test]
async fn unauthorized_invitation_edit_forces_logout() {
    let env = TestEnv::logged_in();
    env.transport.respond(401, json!({}));
    env.transport.respond_empty(204);

    let draft = InvitationDraft {
        id: Some(4),
        category_id: Some(1),
        greeting: "Aunt May".into(),
        maximum_guest_count: Some(1),
        ..InvitationDraft::default()
    };
    let result = submit_invitation_form(&env.app_core, draft).await;
    assert_matches!(result, Err(SubmitError::Api(ApiError::InvalidSession)));

    let requests = env.transport.requests();
    assert_request(&requests[0], HttpMethod::Put, "/api/invitations/4");
    assert_request(&requests[1], HttpMethod::Delete, "/api/sessions");
    assert_eq!(env.state().await.route, Route::Login);
}

#[tokio::test]
async fn sms_and_share() {
    let env = TestEnv::logged_in();
    env.transport.respond_empty(200);

    send_invitation_sms(&env.app_core, "priv-10").await.expect("sms");
    let request = env.transport.last_request().expect("request");
    assert_request(&request, HttpMethod::Post, "/api/send_invitation");
    assert_eq!(request.body, Some(json!({"privateID": "priv-10"})));
    assert_eq!(
        env.state().await.notice.current().map(|n| n.message.clone()),
        Some(SMS_SENT_MESSAGE.to_string())
    );

    let invitation = serde_json::from_value(invitation_json(10, 1, "ST")).expect("invitation");
    let text = share_invitation(&env.app_core, &invitation).await;
    assert!(text.starts_with("Dear Mr and Mrs Tan, "));
    assert!(text.contains("http://localhost:8080/rsvp/priv-10"));

    let state = env.state().await;
    let notice = state.notice.current().expect("notice");
    assert_eq!(notice.message, text);
    assert!(notice.success);
}

#[tokio::test]
async fn unauthorized_rsvp_update_keeps_session() {
    let env = TestEnv::logged_in();
    env.transport.respond(401, json!({}));

    let draft = RsvpDraft {
        id: Some(3),
        full_name: "Jane Lim".into(),
        mobile_phone_number: "91234567".into(),
        ..RsvpDraft::default()
    };
    let result = submit_rsvp_form(&env.app_core, draft).await;
    assert_matches!(result, Err(SubmitError::Api(ApiError::InvalidSession)));

    let state = env.state().await;
    assert_eq!(
        state.notice.current().map(|n| n.message.as_str()),
        Some(INVALID_SESSION_ERROR)
    );
    assert!(state.auth.is_authenticated);
    assert_eq!(env.transport.request_count(), 1);
}

#[tokio::test]
async fn rsvp_delete_flow() {
    let env = TestEnv::logged_in();
    env.transport.respond(
        200,
        json!([{
            "id": 3,
            "invitationPrivateID": "priv-10",
            "fullName": "Jane Lim",
            "attending": true,
            "guestCount": 2,
            "specialDiet": false,
            "remarks": "",
            "mobilePhoneNumber": "91234567",
            "updatedAt": "2019-09-20T20:23:00Z"
        }]),
    );
    fetch_rsvps(&env.app_core).await.expect("rsvps");

    request_rsvp_delete(&env.app_core, 3).await.expect("open");
    env.transport.respond_empty(200);
    confirm_rsvp_delete(&env.app_core).await.expect("delete");

    let state = env.state().await;
    assert!(state.rsvps.is_empty());
    assert_eq!(
        state.notice.current().map(|n| n.message.as_str()),
        Some("RSVP was deleted successfully.")
    );
}
