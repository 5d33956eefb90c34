//! Phase 2 tests: the activity manager contract.

use activity_index::types::{hash_key, ActivityCounts, ActivityError, ActivityKind, IndexConfig};
use activity_index::{ActivityManager, InsertOutcome, UserTotal};

// ==================== Helpers ====================

fn manager_with(users: &[&str]) -> ActivityManager {
    let mut manager = ActivityManager::new();
    for user in users {
        manager.add_user(user);
    }
    manager
}

fn add_all(manager: &mut ActivityManager, user: &str, labels: &[&str]) {
    for label in labels {
        manager.add_activity(user, label).unwrap();
    }
}

fn assert_not_found<T: std::fmt::Debug>(result: Result<T, ActivityError>, user: &str) {
    match result {
        Err(ActivityError::UserNotFound(name)) => assert_eq!(name, user),
        other => panic!("expected UserNotFound, got {:?}", other),
    }
}

// ==================== Registration ====================

#[test]
fn test_add_and_has_user() {
    let mut manager = ActivityManager::new();
    assert!(!manager.has_user("alice"));
    assert_eq!(manager.add_user("alice"), InsertOutcome::Inserted);
    assert!(manager.has_user("alice"));
    assert!(!manager.has_user("bob"));
    assert_eq!(manager.user_count(), 1);
}

#[test]
fn test_round_trip_like() {
    let mut manager = manager_with(&["alice"]);
    assert_eq!(
        manager.add_activity("alice", "Like").unwrap(),
        Some(ActivityKind::Like)
    );
    assert_eq!(
        manager.activity_counts("alice").unwrap(),
        ActivityCounts {
            likes: 1,
            comments: 0,
            shares: 0,
            posts: 0,
        }
    );
}

#[test]
fn test_collision_is_silent_and_keeps_first() {
    let mut manager = manager_with(&["Aa"]);
    add_all(&mut manager, "Aa", &["Like", "Share"]);

    let outcome = manager.add_user("BB");
    assert_eq!(
        outcome,
        InsertOutcome::Collided {
            existing: "Aa".to_string()
        }
    );
    assert_eq!(manager.user_count(), 1);

    let users = manager.list_all_users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].identifier, "Aa");
    assert_eq!(users[0].activities, vec!["Like", "Share"]);

    // The colliding name resolves to the surviving entry.
    assert!(manager.has_user("BB"));
    assert_eq!(manager.list_activities("BB").unwrap(), vec!["Like", "Share"]);
}

// ==================== Activities ====================

#[test]
fn test_counters_by_category() {
    let mut manager = manager_with(&["alice"]);
    add_all(
        &mut manager,
        "alice",
        &["Like", "Comment", "Comment", "Share", "Post", "Post"],
    );
    let counts = manager.activity_counts("alice").unwrap();
    assert_eq!(counts.likes, 1);
    assert_eq!(counts.comments, 2);
    assert_eq!(counts.shares, 1);
    assert_eq!(counts.posts, 2);
    assert_eq!(counts.total(), 6);
}

#[test]
fn test_unrecognized_label_logged_not_counted() {
    let mut manager = manager_with(&["alice"]);
    assert_eq!(manager.add_activity("alice", "Wave").unwrap(), None);
    assert_eq!(manager.list_activities("alice").unwrap(), vec!["Wave"]);
    assert_eq!(manager.activity_counts("alice").unwrap().total(), 0);
}

#[test]
fn test_category_labels_are_case_sensitive() {
    let mut manager = manager_with(&["alice"]);
    assert_eq!(manager.add_activity("alice", "like").unwrap(), None);
    assert_eq!(manager.add_activity("alice", "LIKE").unwrap(), None);
    assert_eq!(manager.add_activity("alice", "post").unwrap(), None);
    assert_eq!(manager.list_activities("alice").unwrap(), vec!["like", "LIKE", "post"]);
    assert_eq!(manager.activity_counts("alice").unwrap(), ActivityCounts::default());
    assert_eq!(manager.highest_total_activity_user(), None);
}

#[test]
fn test_log_evicts_but_counters_keep_growing() {
    let mut manager = manager_with(&["alice"]);
    add_all(
        &mut manager,
        "alice",
        &["Like", "Like", "Like", "Like", "Like", "Post"],
    );
    assert_eq!(
        manager.list_activities("alice").unwrap(),
        vec!["Like", "Like", "Like", "Like", "Post"]
    );
    let counts = manager.activity_counts("alice").unwrap();
    assert_eq!(counts.likes, 5);
    assert_eq!(counts.posts, 1);
}

#[test]
fn test_remove_activity_takes_oldest_and_keeps_counters() {
    let mut manager = manager_with(&["alice"]);
    add_all(&mut manager, "alice", &["Like", "Share", "Post"]);
    let before = manager.activity_counts("alice").unwrap();

    assert_eq!(
        manager.remove_activity("alice").unwrap(),
        Some("Like".to_string())
    );
    assert_eq!(manager.list_activities("alice").unwrap(), vec!["Share", "Post"]);
    assert_eq!(manager.activity_counts("alice").unwrap(), before);

    manager.remove_activity("alice").unwrap();
    manager.remove_activity("alice").unwrap();
    assert_eq!(manager.remove_activity("alice").unwrap(), None);
    assert!(manager.list_activities("alice").unwrap().is_empty());
    assert_eq!(manager.activity_counts("alice").unwrap(), before);
}

#[test]
fn test_most_recent_activity() {
    let mut manager = manager_with(&["alice"]);
    assert_eq!(manager.most_recent_activity("alice").unwrap(), None);
    add_all(&mut manager, "alice", &["Like", "Comment"]);
    assert_eq!(
        manager.most_recent_activity("alice").unwrap(),
        Some("Comment".to_string())
    );
}

#[test]
fn test_most_frequent_activity_tie_break() {
    let mut manager = manager_with(&["alice"]);
    add_all(&mut manager, "alice", &["A", "B", "A", "B"]);
    assert_eq!(
        manager.most_frequent_activity("alice").unwrap(),
        Some("A".to_string())
    );
}

#[test]
fn test_most_frequent_activity_only_sees_retained_log() {
    let mut manager = manager_with(&["alice"]);
    add_all(
        &mut manager,
        "alice",
        &["Like", "Like", "Like", "Share", "Share", "Post", "Share"],
    );
    // Retained: Like, Share, Share, Post, Share
    assert_eq!(
        manager.most_frequent_activity("alice").unwrap(),
        Some("Share".to_string())
    );
}

#[test]
fn test_most_frequent_activity_empty_log() {
    let manager = manager_with(&["alice"]);
    assert_eq!(manager.most_frequent_activity("alice").unwrap(), None);
}

// ==================== Aggregates ====================

#[test]
fn test_highest_total_none_without_activity() {
    let manager = ActivityManager::new();
    assert_eq!(manager.highest_total_activity_user(), None);

    let mut manager = manager_with(&["alice", "bob"]);
    add_all(&mut manager, "alice", &["Wave", "Wink"]);
    assert_eq!(manager.highest_total_activity_user(), None);
}

#[test]
fn test_highest_total_picks_max() {
    let mut manager = manager_with(&["alice", "bob", "carol"]);
    add_all(&mut manager, "alice", &["Like"]);
    add_all(&mut manager, "carol", &["Like", "Post", "Share"]);
    add_all(&mut manager, "bob", &["Comment", "Comment"]);
    assert_eq!(
        manager.highest_total_activity_user(),
        Some(UserTotal {
            identifier: "carol".to_string(),
            total: 3,
        })
    );
}

#[test]
fn test_highest_total_counts_evicted_activity() {
    let mut manager = manager_with(&["alice", "bob"]);
    add_all(&mut manager, "alice", &["Like"; 7]);
    add_all(&mut manager, "bob", &["Like"; 6]);
    manager.remove_activity("alice").unwrap();
    let top = manager.highest_total_activity_user().unwrap();
    assert_eq!(top.identifier, "alice");
    assert_eq!(top.total, 7);
}

#[test]
fn test_highest_total_tie_goes_to_smaller_hash() {
    // bob hashes below alice, and is inserted last.
    assert!(hash_key("bob") < hash_key("alice"));
    let mut manager = manager_with(&["alice", "bob"]);
    add_all(&mut manager, "alice", &["Like", "Share"]);
    add_all(&mut manager, "bob", &["Post", "Comment"]);
    assert_eq!(manager.highest_total_activity_user().unwrap().identifier, "bob");
}

#[test]
fn test_list_all_users_in_hash_order() {
    let manager = ActivityManager::new();
    assert!(manager.list_all_users().is_empty());

    let mut manager = manager_with(&["alice", "bob", "carol", "dave"]);
    add_all(&mut manager, "dave", &["Post"]);
    let users = manager.list_all_users();
    let names: Vec<&str> = users.iter().map(|u| u.identifier.as_str()).collect();
    assert_eq!(names, vec!["bob", "dave", "alice", "carol"]);
    assert_eq!(users[1].activities, vec!["Post"]);
    assert_eq!(users[1].counts.posts, 1);
    assert_eq!(users[1].hash, hash_key("dave"));
}

// ==================== Errors & Config ====================

#[test]
fn test_unknown_user_everywhere() {
    let mut manager = manager_with(&["alice"]);
    assert_not_found(manager.add_activity("zed", "Like"), "zed");
    assert_not_found(manager.remove_activity("zed"), "zed");
    assert_not_found(manager.activity_counts("zed"), "zed");
    assert_not_found(manager.list_activities("zed"), "zed");
    assert_not_found(manager.most_recent_activity("zed"), "zed");
    assert_not_found(manager.most_frequent_activity("zed"), "zed");
    assert_eq!(manager.activity_counts("alice").unwrap().total(), 0);
}

#[test]
fn test_user_not_found_message() {
    let err = ActivityManager::new().list_activities("ghost").unwrap_err();
    assert_eq!(err.to_string(), "User 'ghost' not found");
}

#[test]
fn test_with_config_capacity() {
    let mut manager = ActivityManager::with_config(IndexConfig { log_capacity: 3 }).unwrap();
    manager.add_user("alice");
    add_all(&mut manager, "alice", &["L1", "L2", "L3", "L4"]);
    assert_eq!(manager.list_activities("alice").unwrap(), vec!["L2", "L3", "L4"]);
}

#[test]
fn test_with_config_rejects_zero_capacity() {
    match ActivityManager::with_config(IndexConfig { log_capacity: 0 }) {
        Err(ActivityError::InvalidCapacity(0)) => {}
        other => panic!("expected InvalidCapacity, got {:?}", other),
    }
    assert_eq!(IndexConfig::default().log_capacity, 5);
}
