use crate::{
    database::MongoDB,
    models::{PublicProfile, User},
};
use anyhow::Result;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;

/// Outcome counters for the non-destructive profile creation run.
#[derive(Debug, Default, Clone)]
pub struct CreateProfilesSummary {
    pub total: u64,
    pub created: u64,
    pub skipped: u64,
    pub errors: u64,
}

/// Create a `publicProfiles` document for every user that does not have
/// one yet. Users with an existing profile are skipped, so re-running
/// the script changes nothing.
///
/// A failure on one user is logged and counted; the scan carries on.
/// A failure enumerating `users` aborts the run.
pub async fn run(db: &MongoDB) -> Result<CreateProfilesSummary> {
    log::info!("🚀 Starting migration: creating publicProfiles from users...");

    let users = db.collection::<User>("users");
    let profiles = db.collection::<PublicProfile>("publicProfiles");

    let found = users.count_documents(doc! {}).await?;
    if found == 0 {
        log::warn!("❌ No users found in the database");
        return Ok(CreateProfilesSummary::default());
    }
    log::info!("📊 Found {} users to process", found);

    let mut summary = CreateProfilesSummary::default();
    let mut cursor = users.find(doc! {}).await?;

    while let Some(user) = cursor.try_next().await? {
        summary.total += 1;

        match create_profile(&profiles, &user).await {
            Ok(true) => summary.created += 1,
            Ok(false) => summary.skipped += 1,
            Err(e) => {
                log::error!("❌ Error processing {}: {}", user.id, e);
                summary.errors += 1;
            }
        }
    }

    Ok(summary)
}

/// Returns Ok(true) when a profile was written, Ok(false) when one
/// already existed.
async fn create_profile(
    profiles: &mongodb::Collection<PublicProfile>,
    user: &User,
) -> Result<bool> {
    if profiles.find_one(doc! { "_id": &user.id }).await?.is_some() {
        log::info!("⏭️  Skipping {} - publicProfile already exists", user.id);
        return Ok(false);
    }

    let name = user.resolved_name();

    // Upsert after the existence check so createdAt/updatedAt come from
    // the server clock, not ours.
    profiles
        .update_one(
            doc! { "_id": &user.id },
            doc! {
                "$set": {
                    "name": &name,
                    "bio": user.resolved_bio(),
                    "photoUrl": user.resolved_photo_url(),
                    "email": user.resolved_email(),
                },
                "$currentDate": { "createdAt": true, "updatedAt": true },
            },
        )
        .upsert(true)
        .await?;

    log::info!(
        "✅ Created publicProfile for: {} ({})",
        user.id,
        if name.is_empty() { "No name" } else { name.as_str() }
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn summary_starts_at_zero() {
        let summary = CreateProfilesSummary::default();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.created, 0);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.errors, 0);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn creation_is_idempotent() {
        dotenv::dotenv().ok();

        let config = Config::from_env().expect("MONGODB_URI must be set for this test");
        let db = MongoDB::connect(&config).await.unwrap();

        let users = db.collection::<mongodb::bson::Document>("users");
        let profiles = db.collection::<mongodb::bson::Document>("publicProfiles");
        users.drop().await.unwrap();
        profiles.drop().await.unwrap();

        users
            .insert_one(doc! { "_id": "u1", "name": "Ann" })
            .await
            .unwrap();

        let first = run(&db).await.unwrap();
        assert_eq!(first.created, 1);
        assert_eq!(first.skipped, 0);

        let profile = db
            .collection::<PublicProfile>("publicProfiles")
            .find_one(doc! { "_id": "u1" })
            .await
            .unwrap()
            .expect("profile should exist after the run");
        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.bio, "");
        assert_eq!(profile.photo_url, "");
        assert_eq!(profile.email.as_deref(), Some(""));
        assert!(profile.created_at.is_some());
        assert!(profile.updated_at.is_some());

        // Second run must not touch anything
        let second = run(&db).await.unwrap();
        assert_eq!(second.created, 0);
        assert_eq!(second.skipped, 1);
    }
}
