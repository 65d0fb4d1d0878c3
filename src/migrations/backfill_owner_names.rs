use crate::{
    database::MongoDB,
    models::{Item, User},
};
use anyhow::Result;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{UpdateOneModel, WriteModel},
    Collection,
};
use std::collections::HashMap;

/// Writes per bulk commit.
pub const BATCH_SIZE: usize = 200;

/// Written when the owner is missing, unnamed, or unreadable.
pub const PLACEHOLDER_NAME: &str = "(No name)";

#[derive(Debug, Default, Clone)]
pub struct BackfillSummary {
    pub processed: u64,
    pub updated: u64,
    pub batches: u64,
}

/// Fill in `ownerName` on every item that is missing one, resolving the
/// name from `users/{ownerId}`. Items without an owner, or whose
/// `ownerName` is already populated (whitespace does not count), are
/// left untouched.
///
/// Lookups are cached per owner for the duration of the run. Updates
/// are buffered into batches of [`BATCH_SIZE`]; each batch commit is
/// issued as soon as the batch fills and all of them are awaited
/// together at the end. A failed commit is fatal, a failed lookup is
/// not.
pub async fn run(db: &MongoDB) -> Result<BackfillSummary> {
    log::info!("🚀 Starting backfill: scanning items for missing ownerName...");

    let items = db.collection::<Item>("items");
    let users = db.collection::<User>("users");

    let found = items.count_documents(doc! {}).await?;
    log::info!("📊 Found {} items", found);

    let namespace = items.namespace();
    let mut owner_cache: HashMap<String, String> = HashMap::new();
    let mut commits = Vec::new();
    let mut batch: Vec<WriteModel> = Vec::new();
    let mut summary = BackfillSummary::default();

    let mut cursor = items.find(doc! {}).await?;
    while let Some(item) = cursor.try_next().await? {
        summary.processed += 1;

        let Some(owner_id) = item.owner_id() else {
            continue;
        };
        if !item.needs_owner_name() {
            continue;
        }

        let owner_name = match owner_cache.get(owner_id) {
            Some(name) => name.clone(),
            None => {
                let name = lookup_owner_name(&users, owner_id).await;
                owner_cache.insert(owner_id.to_string(), name.clone());
                name
            }
        };

        batch.push(WriteModel::UpdateOne(
            UpdateOneModel::builder()
                .namespace(namespace.clone())
                .filter(doc! { "_id": &item.id })
                .update(doc! { "$set": { "ownerName": owner_name } })
                .build(),
        ));
        summary.updated += 1;

        if batch.len() >= BATCH_SIZE {
            let client = db.client().clone();
            let models = std::mem::take(&mut batch);
            commits.push(tokio::spawn(async move { client.bulk_write(models).await }));
            summary.batches += 1;
        }
    }

    if !batch.is_empty() {
        let client = db.client().clone();
        commits.push(tokio::spawn(async move { client.bulk_write(batch).await }));
        summary.batches += 1;
    }

    log::info!("📦 Committing {} batches...", summary.batches);

    for result in futures::future::join_all(commits).await {
        result??;
    }

    Ok(summary)
}

/// Resolve the owner's display name, degrading to [`PLACEHOLDER_NAME`]
/// when the user is gone or the read fails.
async fn lookup_owner_name(users: &Collection<User>, owner_id: &str) -> String {
    match users.find_one(doc! { "_id": owner_id }).await {
        Ok(Some(user)) => {
            let name = user.resolved_name();
            if name.is_empty() {
                PLACEHOLDER_NAME.to_string()
            } else {
                name
            }
        }
        Ok(None) => PLACEHOLDER_NAME.to_string(),
        Err(e) => {
            log::warn!("⚠️  Failed to read user {}: {}", owner_id, e);
            PLACEHOLDER_NAME.to_string()
        }
    }
}
