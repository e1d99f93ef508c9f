// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config};
use iced_toasts::ui::toasts::{
    Event, FailurePolicy, Frame, MotionMode, Phase, Role, SettlementError, ToastQueue, Transition,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn short_transition() -> Transition {
    Transition::new(
        Duration::from_millis(50),
        Duration::from_millis(200),
        Duration::from_millis(50),
    )
}

#[tokio::test]
async fn saved_toast_with_reduced_motion_disappears_after_one_cycle() {
    let mut queue = ToastQueue::new().with_motion(MotionMode::Reduced);

    let (added, settlement) = queue.push("Saved");
    let id = settlement.id();
    assert_eq!(added, Event::Added { id });

    let regions = queue.regions();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].role, Role::Status);
    assert_eq!(regions[0].text, "Saved");
    assert_eq!(regions[0].key, id);

    queue.tick(Instant::now());
    let outcome = settlement.wait().await;
    assert_eq!(outcome, Ok(()));

    assert_eq!(queue.settle(id, outcome), Event::Removed { id });
    assert!(queue.regions().is_empty());
}

#[tokio::test]
async fn animated_toasts_are_removed_one_by_one() {
    let mut queue = ToastQueue::new()
        .with_motion(MotionMode::Full)
        .with_transition(short_transition());
    let start = Instant::now();

    let mut pending = Vec::new();
    for message in ["first", "second", "third"] {
        let (_, settlement) = queue.push(message);
        pending.push(settlement);
    }
    let texts: Vec<String> = queue.regions().into_iter().map(|r| r.text).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);

    queue.tick(start);
    for settlement in &pending {
        assert!(matches!(
            queue.phase(settlement.id()),
            Some(Phase::Animating { .. })
        ));
    }

    queue.tick(start + Duration::from_millis(100));
    assert!(queue.regions().iter().all(|r| r.frame == Frame::STATIC));

    queue.tick(start + Duration::from_millis(300));
    assert!(!queue.has_pending());

    // Settle in reverse order; each removal only affects its own toast.
    for settlement in pending.into_iter().rev() {
        let id = settlement.id();
        let outcome = settlement.wait().await;
        assert_eq!(queue.settle(id, outcome), Event::Removed { id });
        assert!(!queue.contains(id));
    }
    assert!(queue.is_empty());
}

#[tokio::test]
async fn aborted_toast_is_kept_when_failures_are_retained() {
    let mut queue = ToastQueue::new()
        .with_motion(MotionMode::Reduced)
        .with_failure_policy(FailurePolicy::Retain);

    let (_, settlement) = queue.push("never mounted");
    let id = settlement.id();
    assert!(queue.abort(id));

    let outcome = settlement.wait().await;
    let error = SettlementError::NeverRendered { id };
    assert_eq!(outcome, Err(error));
    assert_eq!(queue.settle(id, outcome), Event::Stuck { id, error });
    assert_eq!(queue.len(), 1);
}

#[test]
fn queue_built_from_saved_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.toasts.motion = Some(MotionMode::Reduced);
    settings.toasts.hold_ms = Some(1_000);
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.toasts.transition().hold, Duration::from_millis(1_000));

    let mut queue = ToastQueue::from_config(&loaded.toasts);
    let (_, settlement) = queue.push("from settings");
    queue.tick(Instant::now());
    assert_eq!(queue.phase(settlement.id()), Some(Phase::Settled));
}
