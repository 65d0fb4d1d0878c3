use crate::{
    database::MongoDB,
    models::{PublicProfile, User},
};
use anyhow::Result;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;

/// How often to emit a progress line during the scan.
const PROGRESS_INTERVAL: u64 = 50;

#[derive(Debug, Default, Clone)]
pub struct MigrateProfilesSummary {
    pub total: u64,
    pub updated: u64,
}

/// Merge-write a profile for every user, unconditionally. Only
/// `name`/`bio`/`photoUrl`/`updatedAt` are touched; any other fields an
/// existing profile carries are preserved. Safe to re-run: the field
/// values converge, only `updatedAt` moves.
///
/// Unlike the creation script, any failure here aborts the whole run.
pub async fn run(db: &MongoDB) -> Result<MigrateProfilesSummary> {
    log::info!("🚀 Starting migration: users -> publicProfiles (merge)");

    let users = db.collection::<User>("users");
    let profiles = db.collection::<PublicProfile>("publicProfiles");

    let total = users.count_documents(doc! {}).await?;
    log::info!("📊 Found {} users", total);

    let mut updated = 0u64;
    let mut cursor = users.find(doc! {}).await?;

    while let Some(user) = cursor.try_next().await? {
        profiles
            .update_one(
                doc! { "_id": &user.id },
                doc! {
                    "$set": {
                        "name": user.resolved_name(),
                        "bio": user.resolved_bio(),
                        "photoUrl": user.resolved_photo_url(),
                    },
                    "$currentDate": { "updatedAt": true },
                },
            )
            .upsert(true)
            .await?;

        updated += 1;
        if updated % PROGRESS_INTERVAL == 0 {
            log::info!("   Processed {}/{}", updated, total);
        }
    }

    Ok(MigrateProfilesSummary { total, updated })
}
