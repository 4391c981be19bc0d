//! Entity store behavior: list maintenance, identity handling, failure
//! toasts and out-of-order fetches.

mod common;

use assert_matches::assert_matches;
use chrono::Utc;
use common::{user, Harness};
use innovalex_core::alert::{ALERT_STATUS_RESOLVED, MANUAL_RESOLUTION_ACTION};
use innovalex_core::ip_asset::IpType;
use innovalex_core::severity::{Priority, Severity};
use innovalex_dashboard::error::StoreError;
use innovalex_dashboard::stores::FetchOutcome;
use innovalex_db::models::ip_asset::{CreateIpAsset, UpdateIpAsset};
use innovalex_db::models::legal_case::CreateLegalCase;
use innovalex_db::models::legal_document::CreateLegalDocument;
use innovalex_db::repositories::misinformation_alert_repo;
use innovalex_db::TableBackend;
use innovalex_core::document::DocumentType;
use innovalex_events::bus::{ERROR_TITLE, SUCCESS_TITLE};
use serde_json::json;

fn patent(title: &str) -> CreateIpAsset {
    CreateIpAsset::new(title, "A novel widget mechanism", IpType::Patent)
}

#[tokio::test]
async fn create_prepends_and_toasts() {
    let (mut h, _) = Harness::signed_in("owner@example.com").await;
    let first = h.dashboard.assets.create(patent("First")).await.unwrap();
    let second = h.dashboard.assets.create(patent("Second")).await.unwrap();

    let assets = h.dashboard.assets.assets();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].id, second.id);
    assert_eq!(assets[1].id, first.id);

    let toasts = h.drain_toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].title, SUCCESS_TITLE);
    assert_eq!(toasts[0].description, "IP asset created successfully");
}

#[tokio::test]
async fn update_merges_in_place() {
    let (h, _) = Harness::signed_in("owner@example.com").await;
    let asset = h.dashboard.assets.create(patent("Widget")).await.unwrap();
    h.dashboard.assets.create(patent("Other")).await.unwrap();

    let patch = UpdateIpAsset {
        status: Some("expired".into()),
        ..Default::default()
    };
    let updated = h.dashboard.assets.update(asset.id, patch).await.unwrap();

    let assets = h.dashboard.assets.assets();
    assert_eq!(assets.len(), 2);
    let cached = assets.iter().find(|a| a.id == asset.id).unwrap();
    assert_eq!(cached.status, "expired");
    assert_eq!(cached.title, "Widget");
    assert_eq!(updated.status, "expired");
}

#[tokio::test]
async fn delete_removes_from_list() {
    let (mut h, _) = Harness::signed_in("owner@example.com").await;
    let asset = h.dashboard.assets.create(patent("Widget")).await.unwrap();
    h.drain_toasts();

    h.dashboard.assets.delete(asset.id).await.unwrap();
    assert!(h.dashboard.assets.assets().is_empty());
    assert_eq!(h.drain_toasts()[0].description, "IP asset deleted successfully");
}

#[tokio::test]
async fn signed_out_fetch_clears_without_remote_call() {
    let h = Harness::new();
    assert!(h.dashboard.assets.is_loading());

    let outcome = h.dashboard.assets.refetch().await;
    assert_eq!(outcome, FetchOutcome::Skipped);
    assert!(!h.dashboard.assets.is_loading());
    assert!(h.dashboard.assets.assets().is_empty());
    assert_eq!(h.db.calls(), 0);
}

#[tokio::test]
async fn signed_out_create_is_rejected_quietly() {
    let mut h = Harness::new();
    let err = h.dashboard.assets.create(patent("Widget")).await.unwrap_err();
    assert_eq!(err, StoreError::NotSignedIn);
    assert_eq!(h.db.calls(), 0);
    assert!(h.drain_toasts().is_empty());
}

#[tokio::test]
async fn sign_out_empties_every_list() {
    let (h, _) = Harness::signed_in("owner@example.com").await;
    h.dashboard.assets.create(patent("Widget")).await.unwrap();

    h.session.clear();
    let report = h.dashboard.sync_identity().await;
    assert_eq!(report.assets, FetchOutcome::Skipped);
    assert!(h.dashboard.assets.assets().is_empty());
}

#[tokio::test]
async fn unchanged_identity_does_not_refetch() {
    let (h, _) = Harness::signed_in("owner@example.com").await;
    let calls = h.db.calls();
    let report = h.dashboard.sync_identity().await;
    assert_eq!(report.cases, FetchOutcome::Unchanged);
    assert_eq!(h.db.calls(), calls);
}

#[tokio::test]
async fn fetch_failure_keeps_list_and_toasts() {
    let (mut h, _) = Harness::signed_in("owner@example.com").await;
    h.dashboard.assets.create(patent("Widget")).await.unwrap();
    h.drain_toasts();

    h.db.set_failing(true);
    let outcome = h.dashboard.assets.refetch().await;
    assert_matches!(outcome, FetchOutcome::Failed(StoreError::Remote(_)));
    assert_eq!(h.dashboard.assets.assets().len(), 1);
    assert!(!h.dashboard.assets.is_loading());

    let toasts = h.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, ERROR_TITLE);
    assert_eq!(toasts[0].description, "Failed to fetch IP assets");
    assert!(toasts[0].is_destructive());
}

#[tokio::test]
async fn create_failure_leaves_list_unchanged() {
    let (mut h, _) = Harness::signed_in("owner@example.com").await;
    h.db.set_failing(true);

    let err = h
        .dashboard
        .cases
        .create(CreateLegalCase {
            title: "Infringement".into(),
            description: "Competitor copying our widget".into(),
            ip_asset_id: None,
            priority: Priority::High,
            estimated_value: None,
        })
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Remote(_));
    assert!(h.dashboard.cases.cases().is_empty());
    assert_eq!(h.drain_toasts()[0].description, "Failed to create legal case");
}

#[tokio::test]
async fn newer_identity_wins_over_slow_fetch() {
    let h = Harness::new();
    let alice = user("alice@example.com");
    let bob = user("bob@example.com");

    h.session.set_user(Some(bob.clone()));
    h.dashboard.assets.create(patent("Bob's widget")).await.unwrap();

    h.session.set_user(Some(alice));
    let release = h.db.hold_next_select();
    let slow = h.dashboard.assets.refetch();
    let fast = async {
        h.session.set_user(Some(bob.clone()));
        let outcome = h.dashboard.assets.refetch().await;
        let _ = release.send(());
        outcome
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow, FetchOutcome::Superseded);
    assert_eq!(fast, FetchOutcome::Loaded(1));
    let assets = h.dashboard.assets.assets();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].title, "Bob's widget");
}

#[tokio::test]
async fn sign_out_during_fetch_discards_rows() {
    let (h, _) = Harness::signed_in("alice@example.com").await;
    h.dashboard.assets.create(patent("Alice's widget")).await.unwrap();

    let release = h.db.hold_next_select();
    let fetch = h.dashboard.assets.refetch();
    let sign_out = async {
        h.session.clear();
        let _ = release.send(());
    };
    let (outcome, ()) = tokio::join!(fetch, sign_out);

    assert_eq!(outcome, FetchOutcome::Superseded);
    assert!(!h.session.is_signed_in());
    assert!(h.dashboard.assets.assets().is_empty());
    assert!(!h.dashboard.assets.is_loading());
}

#[tokio::test]
async fn switch_during_fetch_waits_for_new_user() {
    let (h, _) = Harness::signed_in("alice@example.com").await;
    h.dashboard.assets.create(patent("Alice's widget")).await.unwrap();

    let release = h.db.hold_next_select();
    let fetch = h.dashboard.assets.refetch();
    let switch = async {
        h.session.set_user(Some(user("bob@example.com")));
        let _ = release.send(());
    };
    let (outcome, ()) = tokio::join!(fetch, switch);

    assert_eq!(outcome, FetchOutcome::Superseded);
    assert!(h.dashboard.assets.assets().is_empty());
    assert!(h.dashboard.assets.is_loading());

    assert_eq!(h.dashboard.assets.sync_identity().await, FetchOutcome::Loaded(0));
    assert!(!h.dashboard.assets.is_loading());
}

#[tokio::test]
async fn update_failure_keeps_entry_and_toasts() {
    let (mut h, _) = Harness::signed_in("owner@example.com").await;
    let asset = h.dashboard.assets.create(patent("Widget")).await.unwrap();
    h.drain_toasts();

    h.db.set_failing(true);
    let patch = UpdateIpAsset {
        title: Some("Renamed".into()),
        ..Default::default()
    };
    let err = h.dashboard.assets.update(asset.id, patch).await.unwrap_err();

    assert_matches!(err, StoreError::Remote(_));
    let assets = h.dashboard.assets.assets();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].title, "Widget");

    let toasts = h.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, ERROR_TITLE);
    assert_eq!(toasts[0].description, "Failed to update IP asset");
}

#[tokio::test]
async fn delete_failure_keeps_entry_and_toasts() {
    let (mut h, _) = Harness::signed_in("owner@example.com").await;
    let asset = h.dashboard.assets.create(patent("Widget")).await.unwrap();
    h.drain_toasts();

    h.db.set_failing(true);
    let err = h.dashboard.assets.delete(asset.id).await.unwrap_err();

    assert_matches!(err, StoreError::Remote(_));
    assert_eq!(h.dashboard.assets.assets().len(), 1);

    let toasts = h.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, ERROR_TITLE);
    assert_eq!(toasts[0].description, "Failed to delete IP asset");
}

#[tokio::test]
async fn alert_update_failure_uses_alert_copy() {
    let (mut h, _) = Harness::signed_in("owner@example.com").await;
    h.db.set_failing(true);
    let err = h
        .dashboard
        .alerts
        .resolve_alert(innovalex_core::types::RecordId::new_v4(), MANUAL_RESOLUTION_ACTION)
        .await
        .unwrap_err();

    assert_matches!(err, StoreError::Remote(_));
    assert_eq!(h.drain_toasts()[0].description, "Failed to update alert");
}

#[tokio::test]
async fn case_create_generates_number_and_defaults() {
    let (h, owner) = Harness::signed_in("owner@example.com").await;
    let case = h
        .dashboard
        .cases
        .create(CreateLegalCase {
            title: "Infringement".into(),
            description: "Competitor copying our widget".into(),
            ip_asset_id: None,
            priority: Priority::Critical,
            estimated_value: None,
        })
        .await
        .unwrap();

    assert!(innovalex_core::legal_case::is_case_number(&case.case_number));
    assert_eq!(case.client_id, owner.id);
    assert_eq!(case.filing_date, case.created_at);
    assert_eq!(case.estimated_value, None);
}

#[tokio::test]
async fn document_flags_default_to_false() {
    let (h, owner) = Harness::signed_in("owner@example.com").await;
    let doc = h
        .dashboard
        .documents
        .create(CreateLegalDocument {
            title: "Cease and desist".into(),
            document_type: DocumentType::CeaseDesist,
            content: None,
            case_id: None,
            ip_asset_id: None,
            signature_required: None,
            ai_generated: None,
        })
        .await
        .unwrap();

    assert_eq!(doc.creator_id, owner.id);
    assert!(!doc.ai_generated);
    assert!(!doc.signature_required);
    assert!(!doc.lawyer_approved);
    assert_eq!(h.dashboard.documents.documents().len(), 1);
}

#[tokio::test]
async fn resolve_alert_stamps_and_keeps_title() {
    let (h, _) = Harness::signed_in("owner@example.com").await;
    let asset = h.dashboard.assets.create(patent("Widget Patent")).await.unwrap();
    h.db
        .inner
        .insert(
            misinformation_alert_repo::TABLE,
            json!({
                "ip_asset_id": asset.id,
                "source_url": "https://social.example.com/post/9",
                "threat_level": Severity::High,
                "ai_confidence": 0.82
            }),
        )
        .await
        .unwrap();
    assert_eq!(h.dashboard.alerts.refetch().await, FetchOutcome::Loaded(1));
    let alert = h.dashboard.alerts.alerts().remove(0);

    let before = Utc::now();
    let resolved = h
        .dashboard
        .alerts
        .resolve_alert(alert.id, MANUAL_RESOLUTION_ACTION)
        .await
        .unwrap();

    assert_eq!(resolved.status, ALERT_STATUS_RESOLVED);
    assert_eq!(resolved.response_action.as_deref(), Some(MANUAL_RESOLUTION_ACTION));
    assert!(resolved.resolved_at.unwrap() >= before);
    assert_eq!(resolved.ip_asset_title.as_deref(), Some("Widget Patent"));
    assert_eq!(h.dashboard.alerts.alerts().len(), 1);
}
