//! User registry integration tests.

use std::sync::Arc;
use std::time::Duration;

use user_registry::config::MIN_BCRYPT_COST;
use user_registry::domain::{CredentialFormat, CredentialHasher, HashMode, User};
use user_registry::services::{UserRegistry, UserService};

fn create_registry(mode: HashMode) -> UserRegistry {
    UserRegistry::new(
        CredentialHasher::new(MIN_BCRYPT_COST).expect("min cost is valid"),
        mode,
    )
}

async fn register(registry: &UserRegistry, name: &str, password: &str) {
    registry
        .register(
            name.to_string(),
            format!("{}@x.com", name.to_lowercase()),
            password.to_string(),
        )
        .await
        .expect("registration should succeed");
}

/// Mode each user's credential was hashed under, in list order
fn credential_modes(users: &[User]) -> Vec<HashMode> {
    users
        .iter()
        .map(|u| {
            CredentialFormat::parse(u.stored_credential())
                .mode()
                .expect("registry only stores recognized formats")
        })
        .collect()
}

/// A single Secure -> Insecure switch leaves every secure credential ahead
/// of every insecure one.
fn assert_secure_before_insecure(modes: &[HashMode]) {
    let first_insecure = modes
        .iter()
        .position(|m| *m == HashMode::Insecure)
        .unwrap_or(modes.len());
    assert!(
        modes[first_insecure..].iter().all(|m| *m == HashMode::Insecure),
        "secure credential appended after an insecure one: {:?}",
        modes
    );
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_alice_scenario() {
    let registry = create_registry(HashMode::Secure);
    let user = registry
        .register(
            "Alice".to_string(),
            "alice@x.com".to_string(),
            "hunter2".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(user.name(), "Alice");
    assert_eq!(user.email(), "alice@x.com");
    assert_eq!(user.stored_credential().len(), 60);
    assert!(matches!(
        CredentialFormat::parse(user.stored_credential()),
        CredentialFormat::Adaptive { .. }
    ));

    let hasher = registry.hasher();
    assert!(hasher.verify("hunter2", user.stored_credential()));
    assert!(!hasher.verify("wrong", user.stored_credential()));
}

#[tokio::test]
async fn test_insecure_registration_is_sha1_hex() {
    let registry = create_registry(HashMode::Insecure);
    let user = registry
        .register(
            "Bob".to_string(),
            "bob@x.com".to_string(),
            "abc".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(
        user.stored_credential(),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[tokio::test]
async fn test_duplicate_emails_allowed() {
    let registry = create_registry(HashMode::Insecure);

    for _ in 0..2 {
        registry
            .register(
                "Same".to_string(),
                "same@x.com".to_string(),
                "pw".to_string(),
            )
            .await
            .unwrap();
    }

    let users = registry.list_all().await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0], users[1]);
}

// =============================================================================
// Mode switching
// =============================================================================

#[tokio::test]
async fn test_mode_switch_affects_only_future_users() {
    let registry = create_registry(HashMode::Secure);

    registry.set_mode(HashMode::Insecure).await;
    register(&registry, "A", "pw").await;
    registry.set_mode(HashMode::Secure).await;
    register(&registry, "B", "pw").await;

    let users = registry.list_all().await;
    let names: Vec<&str> = users.iter().map(|u| u.name()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let a = users[0].stored_credential();
    assert_eq!(a.len(), 40);
    assert!(a.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    assert_eq!(CredentialFormat::parse(a).mode(), Some(HashMode::Insecure));

    let b = users[1].stored_credential();
    assert_eq!(CredentialFormat::parse(b).mode(), Some(HashMode::Secure));

    // Both still verify under their own scheme
    assert!(registry.hasher().verify("pw", a));
    assert!(registry.hasher().verify("pw", b));
}

#[tokio::test]
async fn test_mode_accessor() {
    let registry = create_registry(HashMode::Secure);
    assert_eq!(registry.mode().await, HashMode::Secure);

    registry.set_mode(HashMode::Insecure).await;
    assert_eq!(registry.mode().await, HashMode::Insecure);
}

// =============================================================================
// Snapshots
// =============================================================================

#[tokio::test]
async fn test_list_all_returns_snapshot() {
    let registry = create_registry(HashMode::Insecure);
    register(&registry, "A", "pw").await;

    let mut snapshot = registry.list_all().await;
    snapshot.clear();

    assert_eq!(registry.list_all().await.len(), 1);
}

#[tokio::test]
async fn test_snapshot_not_updated_by_later_registrations() {
    let registry = create_registry(HashMode::Insecure);
    register(&registry, "A", "pw").await;

    let snapshot = registry.list_all().await;
    register(&registry, "B", "pw").await;

    assert_eq!(snapshot.len(), 1);
    assert_eq!(registry.list_all().await.len(), 2);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_all_recorded() {
    let registry = Arc::new(create_registry(HashMode::Secure));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let registry = registry.clone();
            tokio::spawn(async move {
                registry
                    .register(
                        format!("user{}", i),
                        format!("user{}@x.com", i),
                        format!("pw{}", i),
                    )
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let users = registry.list_all().await;
    assert_eq!(users.len(), 16);
    for user in &users {
        let index = user.name().trim_start_matches("user");
        assert!(registry
            .hasher()
            .verify(&format!("pw{}", index), user.stored_credential()));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_mode_switch_during_slow_registration() {
    // Slow enough that the switch below lands while B is still hashing
    let registry = Arc::new(UserRegistry::new(
        CredentialHasher::new(10).expect("cost 10 is valid"),
        HashMode::Secure,
    ));

    let slow = {
        let registry = registry.clone();
        tokio::spawn(async move { register(&registry, "B", "pw").await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;

    registry.set_mode(HashMode::Insecure).await;
    register(&registry, "C", "pw").await;
    slow.await.unwrap();

    let users = registry.list_all().await;
    assert_eq!(users.len(), 2);

    let modes = credential_modes(&users);
    assert_secure_before_insecure(&modes);

    let c = users.iter().position(|u| u.name() == "C").unwrap();
    assert_eq!(modes[c], HashMode::Insecure);
    if modes.contains(&HashMode::Secure) {
        let names: Vec<&str> = users.iter().map(|u| u.name()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mode_switch_keeps_list_consistent() {
    let registry = Arc::new(create_registry(HashMode::Secure));

    let mut handles = Vec::new();
    for i in 0..16 {
        if i == 8 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry.set_mode(HashMode::Insecure).await;
            }));
        }
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            register(&registry, &format!("user{}", i), "pw").await;
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let users = registry.list_all().await;
    assert_eq!(users.len(), 16);
    assert_secure_before_insecure(&credential_modes(&users));
    assert_eq!(registry.mode().await, HashMode::Insecure);
}

#[tokio::test]
async fn test_registry_usable_as_trait_object() {
    let service: Arc<dyn UserService> = Arc::new(create_registry(HashMode::Insecure));

    service
        .register("A".to_string(), "a@x.com".to_string(), "pw".to_string())
        .await
        .unwrap();

    assert_eq!(service.list_all().await.len(), 1);
}
