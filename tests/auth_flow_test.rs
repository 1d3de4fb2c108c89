mod common;

use poem_openapi::param::Query;
use poem_openapi::payload::Json;

use common::{bearer, setup_test_app};
use noteboard_backend::errors::api::AuthError;
use noteboard_backend::types::dto::auth::{LoginRequest, RegisterRequest};

fn register_request(username: &str, email: &str, password: &str) -> Json<RegisterRequest> {
    Json(RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
    })
}

#[tokio::test]
async fn registration_token_subject_is_the_new_user_id() {
    let app = setup_test_app().await;

    let response = app
        .auth_api
        .register(register_request("alice", "alice@x.com", "pw123"))
        .await
        .unwrap();

    let claims = app.token_service.validate(&response.token).unwrap();
    let user_id: i32 = claims.sub.parse().expect("subject claim is a user id");

    assert!(user_id > 0);
    assert_eq!(claims.name, "alice");
    assert_eq!(response.username, "alice");
}

#[tokio::test]
async fn registration_token_grants_access_to_protected_endpoints() {
    let app = setup_test_app().await;

    let response = app
        .auth_api
        .register(register_request("alice", "alice@x.com", "pw123"))
        .await
        .unwrap();

    let notes = app
        .notes_api
        .list_notes(
            bearer(&response.token),
            Query(None),
            Query(None),
            Query(None),
        )
        .await
        .unwrap();

    assert!(notes.is_empty());
}

#[tokio::test]
async fn login_succeeds_with_correct_credentials() {
    let app = setup_test_app().await;

    app.auth_api
        .register(register_request("alice", "alice@x.com", "pw123"))
        .await
        .unwrap();

    let response = app
        .auth_api
        .login(Json(LoginRequest {
            username: "alice".to_string(),
            password: "pw123".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(response.username, "alice");
    assert!(app.token_service.validate(&response.token).is_ok());
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let app = setup_test_app().await;

    app.auth_api
        .register(register_request("alice", "alice@x.com", "pw123"))
        .await
        .unwrap();

    let wrong_password = app
        .auth_api
        .login(Json(LoginRequest {
            username: "alice".to_string(),
            password: "wrongpw".to_string(),
        }))
        .await
        .err()
        .expect("wrong password must fail");
    let unknown_user = app
        .auth_api
        .login(Json(LoginRequest {
            username: "nobody".to_string(),
            password: "pw123".to_string(),
        }))
        .await
        .err()
        .expect("unknown username must fail");

    // Both causes collapse into the same 401 with the same message
    assert!(matches!(wrong_password, AuthError::InvalidCredentials(_)));
    assert!(matches!(unknown_user, AuthError::InvalidCredentials(_)));
    assert_eq!(wrong_password.message(), unknown_user.message());
}

#[tokio::test]
async fn registration_rejects_mismatched_confirmation() {
    let app = setup_test_app().await;

    let mut request = RegisterRequest {
        username: "alice".to_string(),
        email: "alice@x.com".to_string(),
        password: "pw123".to_string(),
        confirm_password: "pw123".to_string(),
    };
    request.confirm_password = "different".to_string();

    let result = app.auth_api.register(Json(request)).await;

    assert!(matches!(result, Err(AuthError::ValidationFailed(_))));
}
