// SPDX-License-Identifier: MIT

//! End-to-end credential lifecycle tests: register, authenticate, resolve,
//! gate. Runs against the in-memory store with a fast bcrypt cost.

use chrono::Utc;
use tokensmith::{
    AuthError, Config, CredentialAuthority, Credentials, MemoryStore, NewUser, PrincipalResolver,
};

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password: "SecurePass123!".to_string(),
        confirm_password: "SecurePass123!".to_string(),
    }
}

fn login(identifier: &str, password: &str) -> Credentials {
    Credentials {
        identifier: identifier.to_string(),
        password: password.to_string(),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_full_lifecycle() {
    init_tracing();

    let config = Config::default();
    let authority = CredentialAuthority::new(&config);
    let resolver = PrincipalResolver::new(authority.codec().clone());
    let mut store = MemoryStore::new();

    // Register
    let user = authority
        .register(&mut store, &new_user("lifecycle", "lifecycle@example.com"))
        .expect("registration should succeed");
    assert!(user.is_active);
    assert!(!user.is_verified);

    // Authenticate
    let bundle = authority
        .authenticate(&mut store, &login("lifecycle", "SecurePass123!"))
        .expect("authentication should succeed");
    assert!(bundle.expires_at > Utc::now());
    assert_eq!(bundle.principal.id, user.id);
    assert_eq!(bundle.principal.username, "lifecycle");

    // Resolve the access token back into a principal
    let principal = resolver
        .resolve(&bundle.access_token)
        .expect("issued token should resolve");
    assert_eq!(principal.id, user.id);

    // Active gate passes: accounts register active by default
    let gated = resolver
        .require_active(principal)
        .expect("active principal should pass the gate");
    assert_eq!(gated.id, user.id);
}

#[test]
fn test_resolved_principal_is_minimal() {
    let config = Config::default();
    let authority = CredentialAuthority::new(&config);
    let resolver = PrincipalResolver::new(authority.codec().clone());
    let mut store = MemoryStore::new();

    let user = authority
        .register(&mut store, &new_user("minimal", "minimal@example.com"))
        .unwrap();
    let bundle = authority
        .authenticate(&mut store, &login("minimal", "SecurePass123!"))
        .unwrap();

    // Issued tokens carry only the subject id, so resolution fills the
    // sentinel profile rather than the real one.
    let principal = resolver.resolve(&bundle.access_token).unwrap();
    assert_eq!(principal.id, user.id);
    assert_eq!(principal.username, "unknown");
    assert_eq!(principal.email, "unknown@example.com");
    assert!(principal.is_active);
    assert!(!principal.is_verified);

    // Refresh tokens resolve the same way
    let principal = resolver.resolve(&bundle.refresh_token).unwrap();
    assert_eq!(principal.id, user.id);
}

#[test]
fn test_duplicate_email_leaves_one_record() {
    let config = Config::default();
    let authority = CredentialAuthority::new(&config);
    let mut store = MemoryStore::new();

    authority
        .register(&mut store, &new_user("first", "shared@example.com"))
        .unwrap();
    let err = authority
        .register(&mut store, &new_user("second", "shared@example.com"))
        .unwrap_err();

    assert!(matches!(err, AuthError::Conflict));
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].username, "first");
}

#[test]
fn test_no_enumeration_signal() {
    let config = Config::default();
    let authority = CredentialAuthority::new(&config);
    let mut store = MemoryStore::new();

    authority
        .register(&mut store, &new_user("realuser", "real@example.com"))
        .unwrap();

    let wrong_password = authority
        .authenticate(&mut store, &login("realuser", "WrongPass123!"))
        .unwrap_err();
    let no_such_user = authority
        .authenticate(&mut store, &login("ghostuser", "SecurePass123!"))
        .unwrap_err();

    assert!(matches!(wrong_password, AuthError::AuthFailure));
    assert!(matches!(no_such_user, AuthError::AuthFailure));
    assert_eq!(wrong_password.to_string(), no_such_user.to_string());
}

#[test]
fn test_last_login_set_on_authentication() {
    let config = Config::default();
    let authority = CredentialAuthority::new(&config);
    let mut store = MemoryStore::new();

    let user = authority
        .register(&mut store, &new_user("logintime", "logintime@example.com"))
        .unwrap();
    assert!(store.get(user.id).unwrap().last_login.is_none());

    authority
        .authenticate(&mut store, &login("logintime", "SecurePass123!"))
        .unwrap();

    let last_login = store.get(user.id).unwrap().last_login;
    assert!(last_login.is_some());
    assert!(last_login.unwrap() <= Utc::now());
}

#[test]
fn test_change_password_then_reauthenticate() {
    let config = Config::default();
    let authority = CredentialAuthority::new(&config);
    let mut store = MemoryStore::new();

    let user = authority
        .register(&mut store, &new_user("rotating", "rotating@example.com"))
        .unwrap();

    let updated = authority
        .change_password(&user, "SecurePass123!", "FreshPass456!", "FreshPass456!")
        .unwrap();

    // Caller owns persistence; emulate the commit by swapping the record.
    let mut committed = MemoryStore::new();
    use tokensmith::UserStore;
    committed.insert(&updated).unwrap();

    let err = authority
        .authenticate(&mut committed, &login("rotating", "SecurePass123!"))
        .unwrap_err();
    assert!(matches!(err, AuthError::AuthFailure));

    let bundle = authority
        .authenticate(&mut committed, &login("rotating", "FreshPass456!"))
        .unwrap();
    assert_eq!(bundle.principal.id, user.id);
}
