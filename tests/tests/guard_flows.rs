//! Navigation guard scenarios over the demo route table.

use std::sync::Arc;

use portcullis_integration_tests::{alice, demo_routes};
use portcullis_router::{
	GuardOutcome, NavigationGuard, NavigationIntent, RecordingNavigator,
};
use portcullis_session::SessionStore;
use portcullis_utils::MemoryBackend;
use rstest::rstest;

fn fixture() -> (Arc<SessionStore>, Arc<RecordingNavigator>, NavigationGuard) {
	let session = Arc::new(SessionStore::open(Arc::new(MemoryBackend::new())));
	let navigator = Arc::new(RecordingNavigator::new());
	let guard = NavigationGuard::new(demo_routes(), session.clone(), navigator.clone());
	(session, navigator, guard)
}

#[test]
fn protected_route_redirects_and_preserves_destination() {
	let (_, navigator, guard) = fixture();

	let outcome = guard.evaluate("/user");
	assert_eq!(
		outcome,
		GuardOutcome::Redirect(NavigationIntent {
			target_path: "/login".to_string(),
			replace: true,
			preserved_from: Some("/user".to_string()),
		})
	);

	let (path, options) = navigator.last().unwrap();
	assert_eq!(path, "/login");
	assert!(options.replace);
	assert_eq!(options.from.as_deref(), Some("/user"));
}

#[rstest]
#[case("/", Some("Home"))]
#[case("/about", Some("About"))]
#[case("/login", Some("Sign in"))]
#[case("/unknown-xyz", Some("Not Found"))]
fn public_routes_pass_when_signed_out(#[case] path: &str, #[case] title: Option<&str>) {
	let (_, navigator, guard) = fixture();

	let outcome = guard.evaluate(path);
	assert_eq!(
		outcome,
		GuardOutcome::Allow {
			title: title.map(str::to_string),
		}
	);
	assert!(navigator.calls().is_empty());
}

#[test]
fn signed_in_user_is_bounced_off_the_login_page() {
	let (session, _, guard) = fixture();
	session.login("tok", alice());

	match guard.evaluate("/login") {
		GuardOutcome::Redirect(intent) => {
			assert_eq!(intent.target_path, "/");
			assert!(intent.replace);
			assert_eq!(intent.preserved_from, None);
		}
		other => panic!("expected redirect, got {:?}", other),
	}
}

#[test]
fn preserved_destination_is_reachable_after_sign_in() {
	let (session, _, guard) = fixture();

	// Blocked; the intent remembers where the user wanted to go.
	let GuardOutcome::Redirect(intent) = guard.evaluate("/user") else {
		panic!("expected redirect");
	};

	session.login("tok", alice());

	let target = guard.post_login_target(intent.preserved_from.as_deref());
	assert_eq!(target, "/user");
	assert_eq!(
		guard.evaluate(&target),
		GuardOutcome::Allow {
			title: Some("User Center".to_string()),
		}
	);
}

#[test]
fn direct_sign_in_lands_on_home() {
	let (session, _, guard) = fixture();
	session.login("tok", alice());
	assert_eq!(guard.post_login_target(None), "/");
}

#[test]
fn auth_state_change_flips_the_decision() {
	let (session, _, guard) = fixture();

	assert!(matches!(guard.evaluate("/user"), GuardOutcome::Redirect(_)));
	session.login("tok", alice());
	assert!(matches!(guard.evaluate("/user"), GuardOutcome::Allow { .. }));
	session.logout();
	assert!(matches!(guard.evaluate("/user"), GuardOutcome::Redirect(_)));
}
