//! Repository behavior over the in-memory backend with the hosted
//! schema's column defaults.

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::Utc;
use innovalex_core::alert::UNKNOWN_ASSET_TITLE;
use innovalex_core::document::DocumentType;
use innovalex_core::ip_asset::IpType;
use innovalex_core::legal_case::CaseStatus;
use innovalex_core::severity::{Priority, Severity};
use innovalex_core::types::RecordId;
use innovalex_db::models::ip_asset::{CreateIpAsset, UpdateIpAsset};
use innovalex_db::models::legal_case::{CreateLegalCase, UpdateLegalCase};
use innovalex_db::models::legal_document::CreateLegalDocument;
use innovalex_db::models::misinformation_alert::UpdateMisinformationAlert;
use innovalex_db::repositories::{
    misinformation_alert_repo, IpAssetRepo, LegalCaseRepo, LegalDocumentRepo,
    MisinformationAlertRepo,
};
use innovalex_db::{MemoryBackend, Query, RemoteError, TableBackend};
use serde_json::{json, Value};

async fn seed_alert(db: &MemoryBackend, asset: RecordId, url: &str) -> RecordId {
    let row = db
        .insert(
            misinformation_alert_repo::TABLE,
            json!({
                "ip_asset_id": asset,
                "source_url": url,
                "threat_level": Severity::High,
                "ai_confidence": 0.9
            }),
        )
        .await
        .unwrap();
    row["id"].as_str().unwrap().parse().unwrap()
}

fn case_input(title: &str) -> CreateLegalCase {
    CreateLegalCase {
        title: title.into(),
        description: "Unauthorized use of our patent".into(),
        ip_asset_id: None,
        priority: Priority::default(),
        estimated_value: Some(500_000.0),
    }
}

#[tokio::test]
async fn assets_are_scoped_to_owner_and_newest_first() {
    let db = MemoryBackend::with_default_schema();
    let alice = RecordId::new_v4();
    let bob = RecordId::new_v4();

    let first = IpAssetRepo::create(&db, alice, &CreateIpAsset::new("First", "a", IpType::Patent))
        .await
        .unwrap();
    let second =
        IpAssetRepo::create(&db, alice, &CreateIpAsset::new("Second", "b", IpType::Copyright))
            .await
            .unwrap();
    IpAssetRepo::create(&db, bob, &CreateIpAsset::new("Bob's", "c", IpType::Trademark))
        .await
        .unwrap();

    assert_eq!(first.status, "active");
    let listed = IpAssetRepo::list_for_owner(&db, alice).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn asset_update_and_delete_by_id() {
    let db = MemoryBackend::with_default_schema();
    let owner = RecordId::new_v4();
    let asset = IpAssetRepo::create(&db, owner, &CreateIpAsset::new("Logo", "d", IpType::Trademark))
        .await
        .unwrap();

    let patch = UpdateIpAsset {
        registration_number: Some("TM-77".into()),
        ..Default::default()
    };
    let updated = IpAssetRepo::update(&db, asset.id, &patch).await.unwrap();
    assert_eq!(updated.registration_number.as_deref(), Some("TM-77"));
    assert_eq!(updated.title, "Logo");
    assert!(updated.updated_at > asset.updated_at);

    IpAssetRepo::delete(&db, asset.id).await.unwrap();
    assert!(IpAssetRepo::list_for_owner(&db, owner).await.unwrap().is_empty());

    let err = IpAssetRepo::update(&db, asset.id, &patch).await.unwrap_err();
    assert_matches!(err, RemoteError::NotFound { .. });
}

#[tokio::test]
async fn cases_get_backend_defaults() {
    let db = MemoryBackend::with_default_schema();
    let client = RecordId::new_v4();

    let case = LegalCaseRepo::create(&db, client, "LC-2025-0042", &case_input("Infringement"))
        .await
        .unwrap();
    assert_eq!(case.case_number, "LC-2025-0042");
    assert_eq!(case.case_status, CaseStatus::Open);
    assert_eq!(case.priority, Priority::Medium);
    assert_eq!(case.filing_date, case.created_at);

    let closed = LegalCaseRepo::update(
        &db,
        case.id,
        &UpdateLegalCase {
            case_status: Some(CaseStatus::Closed),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(closed.case_status, CaseStatus::Closed);
}

#[tokio::test]
async fn duplicate_case_numbers_are_stored() {
    let db = MemoryBackend::with_default_schema();
    let client = RecordId::new_v4();
    LegalCaseRepo::create(&db, client, "LC-2025-0001", &case_input("One"))
        .await
        .unwrap();
    LegalCaseRepo::create(&db, client, "LC-2025-0001", &case_input("Two"))
        .await
        .unwrap();

    let cases = LegalCaseRepo::list_for_client(&db, client).await.unwrap();
    assert_eq!(cases.len(), 2);
    assert!(cases.iter().all(|c| c.case_number == "LC-2025-0001"));
}

#[tokio::test]
async fn documents_default_flags() {
    let db = MemoryBackend::with_default_schema();
    let creator = RecordId::new_v4();
    let input = CreateLegalDocument {
        title: "Mutual NDA".into(),
        document_type: DocumentType::Nda,
        content: None,
        case_id: None,
        ip_asset_id: None,
        signature_required: Some(true),
        ai_generated: None,
    };

    let doc = LegalDocumentRepo::create(&db, creator, &input).await.unwrap();
    assert!(!doc.lawyer_approved);
    assert!(!doc.ai_generated);
    assert!(doc.signature_required);
    assert_eq!(doc.signed_at, None);

    let others = LegalDocumentRepo::list_for_creator(&db, RecordId::new_v4())
        .await
        .unwrap();
    assert!(others.is_empty());
}

#[tokio::test]
async fn alerts_join_titles_and_scope_by_asset_owner() {
    let db = MemoryBackend::with_default_schema();
    let owner = RecordId::new_v4();
    let stranger = RecordId::new_v4();

    let asset = IpAssetRepo::create(&db, owner, &CreateIpAsset::new("Widget", "w", IpType::Patent))
        .await
        .unwrap();
    let other = IpAssetRepo::create(&db, stranger, &CreateIpAsset::new("Other", "o", IpType::Patent))
        .await
        .unwrap();

    let older = seed_alert(&db, asset.id, "https://a.example.com/1").await;
    let newer = seed_alert(&db, asset.id, "https://b.example.com/2").await;
    seed_alert(&db, other.id, "https://c.example.com/3").await;

    let alerts = MisinformationAlertRepo::list_for_owner(&db, owner).await.unwrap();
    let ids: Vec<_> = alerts.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newer, older]);
    assert!(alerts.iter().all(|a| a.status == "pending"));
    assert!(alerts
        .iter()
        .all(|a| a.ip_asset_title.as_deref() == Some("Widget")));
}

#[tokio::test]
async fn owner_without_assets_has_no_alerts() {
    let db = MemoryBackend::with_default_schema();
    let stranger = RecordId::new_v4();
    let asset = IpAssetRepo::create(&db, stranger, &CreateIpAsset::new("X", "x", IpType::Patent))
        .await
        .unwrap();
    seed_alert(&db, asset.id, "https://a.example.com").await;

    let alerts = MisinformationAlertRepo::list_for_owner(&db, RecordId::new_v4())
        .await
        .unwrap();
    assert!(alerts.is_empty());
}

/// Delegates to a memory backend but answers title lookups with no rows,
/// as if the asset vanished between the id read and the title read.
struct TitlelessBackend(MemoryBackend);

#[async_trait]
impl TableBackend for TitlelessBackend {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, RemoteError> {
        if query.columns() == "id,title" {
            return Ok(Vec::new());
        }
        self.0.select(table, query).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, RemoteError> {
        self.0.insert(table, row).await
    }

    async fn update(&self, table: &str, filter: &Query, patch: Value) -> Result<Value, RemoteError> {
        self.0.update(table, filter, patch).await
    }

    async fn delete(&self, table: &str, filter: &Query) -> Result<(), RemoteError> {
        self.0.delete(table, filter).await
    }
}

#[tokio::test]
async fn missing_title_falls_back_to_unknown_asset() {
    let db = TitlelessBackend(MemoryBackend::with_default_schema());
    let owner = RecordId::new_v4();
    let asset = IpAssetRepo::create(&db, owner, &CreateIpAsset::new("Gone", "g", IpType::Patent))
        .await
        .unwrap();
    seed_alert(&db.0, asset.id, "https://a.example.com").await;

    let alerts = MisinformationAlertRepo::list_for_owner(&db, owner).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].ip_asset_title.as_deref(), Some(UNKNOWN_ASSET_TITLE));
}

#[tokio::test]
async fn resolving_an_alert_sets_action_and_time() {
    let db = MemoryBackend::with_default_schema();
    let owner = RecordId::new_v4();
    let asset = IpAssetRepo::create(&db, owner, &CreateIpAsset::new("W", "w", IpType::Patent))
        .await
        .unwrap();
    let alert = seed_alert(&db, asset.id, "https://a.example.com").await;

    let at = Utc::now();
    let resolved = MisinformationAlertRepo::update(
        &db,
        alert,
        &UpdateMisinformationAlert::resolve("Takedown requested", at),
    )
    .await
    .unwrap();

    assert!(resolved.is_resolved());
    assert_eq!(resolved.response_action.as_deref(), Some("Takedown requested"));
    assert_eq!(resolved.resolved_at, Some(at));
    assert_eq!(resolved.ip_asset_title, None);
}
