//! Repository for the `ip_assets` table.

use innovalex_core::types::RecordId;

use super::{decode_row, decode_rows, encode, CREATED_AT};
use crate::backend::TableBackend;
use crate::error::RemoteError;
use crate::models::ip_asset::{AssetId, AssetTitle, CreateIpAsset, IpAsset, NewIpAsset, UpdateIpAsset};
use crate::query::Query;

pub const TABLE: &str = "ip_assets";

/// Provides CRUD operations for IP assets.
pub struct IpAssetRepo;

impl IpAssetRepo {
    /// List every asset owned by `owner_id`, newest first.
    pub async fn list_for_owner(
        db: &dyn TableBackend,
        owner_id: RecordId,
    ) -> Result<Vec<IpAsset>, RemoteError> {
        let query = Query::new()
            .eq("owner_id", owner_id)
            .order(CREATED_AT, false);
        decode_rows(TABLE, db.select(TABLE, &query).await?)
    }

    /// Ids of every asset owned by `owner_id`.
    pub async fn list_ids_for_owner(
        db: &dyn TableBackend,
        owner_id: RecordId,
    ) -> Result<Vec<RecordId>, RemoteError> {
        let query = Query::new().select("id").eq("owner_id", owner_id);
        let rows: Vec<AssetId> = decode_rows(TABLE, db.select(TABLE, &query).await?)?;
        Ok(rows.into_iter().map(|r| r.id).collect())
    }

    /// Titles for the given asset ids. Unknown ids are simply absent.
    pub async fn titles_for(
        db: &dyn TableBackend,
        ids: &[RecordId],
    ) -> Result<Vec<AssetTitle>, RemoteError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = Query::new().select("id,title").in_list("id", ids);
        decode_rows(TABLE, db.select(TABLE, &query).await?)
    }

    /// Insert a new asset owned by `owner_id`.
    pub async fn create(
        db: &dyn TableBackend,
        owner_id: RecordId,
        input: &CreateIpAsset,
    ) -> Result<IpAsset, RemoteError> {
        let row = encode(&NewIpAsset {
            owner_id,
            data: input,
        })?;
        decode_row(TABLE, db.insert(TABLE, row).await?)
    }

    /// Patch an asset by id, returning the stored row.
    pub async fn update(
        db: &dyn TableBackend,
        id: RecordId,
        input: &UpdateIpAsset,
    ) -> Result<IpAsset, RemoteError> {
        let patch = encode(input)?;
        decode_row(TABLE, db.update(TABLE, &Query::by_id(id), patch).await?)
    }

    /// Delete an asset by id. Cases and documents referencing it are left
    /// untouched.
    pub async fn delete(db: &dyn TableBackend, id: RecordId) -> Result<(), RemoteError> {
        db.delete(TABLE, &Query::by_id(id)).await
    }
}
