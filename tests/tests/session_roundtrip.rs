//! Session persistence across store instances.

use std::sync::Arc;

use portcullis_integration_tests::alice;
use portcullis_session::{
	ProfilePatch, SESSION_STORAGE_KEY, SessionSnapshot, SessionStore,
};
use portcullis_utils::{FileBackend, KeyValueBackend};
use tempfile::tempdir;

#[test]
fn login_round_trips_through_the_file_backend() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("session.json");

	let backend = Arc::new(FileBackend::open(&path).unwrap());
	let store = SessionStore::open(backend.clone());
	store.login("tok", alice());

	// The durable snapshot carries exactly {token, userInfo, isLogin}.
	let raw = backend.read(SESSION_STORAGE_KEY).unwrap().unwrap();
	let snapshot: SessionSnapshot = serde_json::from_str(&raw).unwrap();
	assert_eq!(snapshot, store.snapshot());
	assert!(snapshot.is_login);

	drop(store);
	drop(backend);

	// A fresh store over a fresh backend rehydrates the session.
	let reopened = SessionStore::open(Arc::new(FileBackend::open(&path).unwrap()));
	assert!(reopened.is_authenticated());
	assert_eq!(reopened.token().as_deref(), Some("tok"));
	assert_eq!(reopened.user_info(), Some(alice()));
}

#[test]
fn logout_round_trips_as_signed_out() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("session.json");

	let store = SessionStore::open(Arc::new(FileBackend::open(&path).unwrap()));
	store.login("tok", alice());
	store.logout();
	drop(store);

	let reopened = SessionStore::open(Arc::new(FileBackend::open(&path).unwrap()));
	assert!(!reopened.is_authenticated());
	assert_eq!(reopened.user_info(), None);
}

#[test]
fn profile_updates_survive_rehydration() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("session.json");

	let store = SessionStore::open(Arc::new(FileBackend::open(&path).unwrap()));
	store.login("tok", alice());
	store.update_user_info(ProfilePatch {
		phone: Some("13812348888".to_string()),
		..Default::default()
	});
	drop(store);

	let reopened = SessionStore::open(Arc::new(FileBackend::open(&path).unwrap()));
	assert_eq!(
		reopened.user_info().unwrap().phone.as_deref(),
		Some("13812348888")
	);
}

#[test]
fn scribbled_snapshot_file_starts_signed_out() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("session.json");
	std::fs::write(&path, "v1|token=abc").unwrap();

	let store = SessionStore::open(Arc::new(FileBackend::open(&path).unwrap()));
	assert!(!store.is_authenticated());
}
