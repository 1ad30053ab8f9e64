//! HTTP client contracts against the canned API server.

use std::sync::Arc;

use portcullis_client::{ApiClient, ApiClientBuilder, ClientError, LoginParams, UserApi};
use portcullis_integration_tests::{
	StubServer, VALID_PASSWORD, VALID_TOKEN, alice, demo_routes,
};
use portcullis_router::{GuardOutcome, NavigationGuard, RecordingNavigator};
use portcullis_session::{ProfilePatch, SessionStore};
use portcullis_utils::MemoryBackend;

struct Harness {
	session: Arc<SessionStore>,
	navigator: Arc<RecordingNavigator>,
	client: ApiClient,
}

async fn harness() -> Harness {
	let server = StubServer::start().await;
	let session = Arc::new(SessionStore::open(Arc::new(MemoryBackend::new())));
	let navigator = Arc::new(RecordingNavigator::new());
	let client = ApiClientBuilder::new(server.url())
		.build(session.clone(), navigator.clone())
		.unwrap();

	Harness {
		session,
		navigator,
		client,
	}
}

fn credentials(password: &str) -> LoginParams {
	LoginParams {
		username: "alice".to_string(),
		password: password.to_string(),
	}
}

#[tokio::test]
async fn bearer_token_is_attached_when_signed_in() {
	let harness = harness().await;
	harness.session.set_token(VALID_TOKEN);

	let echoed: serde_json::Value = harness.client.get("/echo-auth").await.unwrap();
	assert_eq!(
		echoed["authorization"],
		format!("Bearer {}", VALID_TOKEN)
	);
}

#[tokio::test]
async fn no_credential_is_attached_when_signed_out() {
	let harness = harness().await;

	let echoed: serde_json::Value = harness.client.get("/echo-auth").await.unwrap();
	assert_eq!(echoed["authorization"], serde_json::Value::Null);
}

#[tokio::test]
async fn unauthorized_response_forces_logout_and_redirect() {
	let harness = harness().await;
	harness.session.set_token("stale-token");

	let result = UserApi::new(&harness.client).user_info().await;
	assert!(matches!(result, Err(ClientError::Unauthorized)));

	assert!(!harness.session.is_authenticated());
	let (path, options) = harness.navigator.last().unwrap();
	assert_eq!(path, "/");
	assert!(options.replace);
}

#[tokio::test]
async fn racing_unauthorized_responses_are_harmless() {
	let harness = harness().await;
	harness.session.set_token("stale-token");
	let api = UserApi::new(&harness.client);

	let (a, b) = tokio::join!(api.user_info(), api.user_info());
	assert!(a.is_err() && b.is_err());
	assert!(!harness.session.is_authenticated());
}

#[tokio::test]
async fn business_failure_maps_to_business_error() {
	let harness = harness().await;

	let result = UserApi::new(&harness.client)
		.login(&credentials("wrong"))
		.await;
	match result {
		Err(ClientError::Business { code, message }) => {
			assert_eq!(code, 4001);
			assert_eq!(message, "bad credentials");
		}
		other => panic!("expected business error, got {:?}", other),
	}
	assert!(!harness.session.is_authenticated());
}

#[tokio::test]
async fn other_error_statuses_map_to_server_error() {
	let harness = harness().await;

	let result: Result<serde_json::Value, _> = harness.client.get("/teapot").await;
	assert!(matches!(result, Err(ClientError::Server(418))));
}

#[tokio::test]
async fn sign_in_commits_session_and_navigates_to_preserved_destination() {
	let harness = harness().await;

	let profile = UserApi::new(&harness.client)
		.sign_in(&credentials(VALID_PASSWORD), Some("/user"))
		.await
		.unwrap();

	assert_eq!(profile, alice());
	assert!(harness.session.is_authenticated());
	assert_eq!(harness.session.token().as_deref(), Some(VALID_TOKEN));

	let (path, options) = harness.navigator.last().unwrap();
	assert_eq!(path, "/user");
	assert!(options.replace);
}

#[tokio::test]
async fn sign_in_without_preserved_destination_lands_on_safe_path() {
	let harness = harness().await;

	UserApi::new(&harness.client)
		.sign_in(&credentials(VALID_PASSWORD), None)
		.await
		.unwrap();

	assert_eq!(harness.navigator.last().unwrap().0, "/");
}

#[tokio::test]
async fn update_user_info_round_trips_and_merges_locally() {
	let harness = harness().await;
	let api = UserApi::new(&harness.client);
	api.sign_in(&credentials(VALID_PASSWORD), None).await.unwrap();

	let patch = ProfilePatch {
		email: Some("new@example.com".to_string()),
		..Default::default()
	};
	let updated = api.update_user_info(&patch).await.unwrap();
	assert_eq!(updated.email, "new@example.com");

	harness.session.update_user_info(patch);
	assert_eq!(
		harness.session.user_info().unwrap().email,
		"new@example.com"
	);
}

#[tokio::test]
async fn remote_logout_endpoint_succeeds() {
	let harness = harness().await;
	assert!(UserApi::new(&harness.client).logout().await.is_ok());
}

#[tokio::test]
async fn sign_out_clears_session_and_navigates() {
	let harness = harness().await;
	let api = UserApi::new(&harness.client);
	api.sign_in(&credentials(VALID_PASSWORD), None).await.unwrap();

	api.sign_out();
	assert!(!harness.session.is_authenticated());
	assert_eq!(harness.navigator.last().unwrap().0, "/");
}

#[tokio::test]
async fn blocked_navigation_recovers_end_to_end() {
	let harness = harness().await;
	let guard = NavigationGuard::new(
		demo_routes(),
		harness.session.clone(),
		harness.navigator.clone(),
	);

	// Signed out: the guard blocks the user center.
	let GuardOutcome::Redirect(intent) = guard.evaluate("/user") else {
		panic!("expected redirect");
	};

	// The user signs in; the flow navigates back to the preserved path.
	UserApi::new(&harness.client)
		.sign_in(&credentials(VALID_PASSWORD), intent.preserved_from.as_deref())
		.await
		.unwrap();
	assert_eq!(harness.navigator.last().unwrap().0, "/user");

	// Re-evaluating the destination now passes.
	assert!(matches!(guard.evaluate("/user"), GuardOutcome::Allow { .. }));
}
