//! Repository for the `misinformation_alerts` table.
//!
//! Alerts carry no owner column. Reads are scoped by first resolving the
//! caller's asset ids and filtering alerts on `ip_asset_id`.

use std::collections::HashMap;

use innovalex_core::alert::UNKNOWN_ASSET_TITLE;
use innovalex_core::types::RecordId;

use super::{decode_row, decode_rows, encode, CREATED_AT};
use crate::backend::TableBackend;
use crate::error::RemoteError;
use crate::models::misinformation_alert::{MisinformationAlert, UpdateMisinformationAlert};
use crate::query::Query;
use crate::repositories::IpAssetRepo;

pub const TABLE: &str = "misinformation_alerts";

/// Provides list and update operations for misinformation alerts.
pub struct MisinformationAlertRepo;

impl MisinformationAlertRepo {
    /// List alerts raised against any of `asset_ids`, newest first.
    /// An empty id list returns no alerts without a round trip.
    pub async fn list_for_assets(
        db: &dyn TableBackend,
        asset_ids: &[RecordId],
    ) -> Result<Vec<MisinformationAlert>, RemoteError> {
        if asset_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = Query::new()
            .in_list("ip_asset_id", asset_ids)
            .order(CREATED_AT, false);
        decode_rows(TABLE, db.select(TABLE, &query).await?)
    }

    /// List every alert on assets owned by `owner_id`, with
    /// `ip_asset_title` filled in.
    ///
    /// Three reads: the owner's asset ids, the alerts on those assets, and
    /// the asset titles. None of them is atomic with the others.
    pub async fn list_for_owner(
        db: &dyn TableBackend,
        owner_id: RecordId,
    ) -> Result<Vec<MisinformationAlert>, RemoteError> {
        let asset_ids = IpAssetRepo::list_ids_for_owner(db, owner_id).await?;
        if asset_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut alerts = Self::list_for_assets(db, &asset_ids).await?;
        let titles: HashMap<RecordId, String> = IpAssetRepo::titles_for(db, &asset_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t.title))
            .collect();

        for alert in &mut alerts {
            let title = titles
                .get(&alert.ip_asset_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_ASSET_TITLE.to_string());
            alert.ip_asset_title = Some(title);
        }
        Ok(alerts)
    }

    /// Patch an alert by id, returning the stored row (without a joined
    /// title).
    pub async fn update(
        db: &dyn TableBackend,
        id: RecordId,
        input: &UpdateMisinformationAlert,
    ) -> Result<MisinformationAlert, RemoteError> {
        let patch = encode(input)?;
        decode_row(TABLE, db.update(TABLE, &Query::by_id(id), patch).await?)
    }
}
