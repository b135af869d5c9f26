use super::*;

/// Tests linking a bot-created profile to a provider subject.
///
/// Expected: subject set, username and avatar replaced
#[tokio::test]
async fn links_subject_and_refreshes_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user_profile::UserProfileFactory::new(db)
        .username("Old Name")
        .build()
        .await?;

    let linked = UserProfileRepository::new(db)
        .link_identity(
            created.id,
            LinkIdentityParam {
                auth_user_id: "subject-link".to_string(),
                username: "New Name".to_string(),
                avatar_url: Some("https://cdn.example/new.png".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(linked.auth_user_id.as_deref(), Some("subject-link"));
    assert_eq!(linked.username, "New Name");
    assert_eq!(
        linked.avatar_url.as_deref(),
        Some("https://cdn.example/new.png")
    );
    assert_eq!(linked.discord_id, created.discord_id);

    Ok(())
}

/// Tests linking a profile that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserProfileRepository::new(db)
        .link_identity(
            Uuid::new_v4(),
            LinkIdentityParam {
                auth_user_id: "subject".to_string(),
                username: "Name".to_string(),
                avatar_url: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests refreshing Discord details without touching the subject.
///
/// Expected: username and avatar replaced, auth_user_id unchanged
#[tokio::test]
async fn refreshes_discord_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user_profile::UserProfileFactory::new(db)
        .auth_user_id("subject-keep")
        .build()
        .await?;

    let refreshed = UserProfileRepository::new(db)
        .refresh_discord_details(created.id, "Renamed".to_string(), None)
        .await?
        .unwrap();

    assert_eq!(refreshed.username, "Renamed");
    assert_eq!(refreshed.auth_user_id.as_deref(), Some("subject-keep"));

    Ok(())
}
