use super::*;

/// Tests disabling global tracking.
///
/// Expected: flag set and updated_at advanced
#[tokio::test]
async fn updates_tracking_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_user_profile(db).await?;

    let updated = UserProfileRepository::new(db)
        .update_settings(
            created.id,
            UpdateUserProfileParam {
                global_tracking_disabled: Some(true),
            },
        )
        .await?
        .unwrap();

    assert!(updated.global_tracking_disabled);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests that unset fields are left unchanged.
///
/// Expected: flag keeps its previous value
#[tokio::test]
async fn leaves_unset_fields_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user_profile::UserProfileFactory::new(db)
        .global_tracking_disabled(true)
        .build()
        .await?;

    let updated = UserProfileRepository::new(db)
        .update_settings(created.id, UpdateUserProfileParam::default())
        .await?
        .unwrap();

    assert!(updated.global_tracking_disabled);

    Ok(())
}

/// Tests updating a profile that does not exist.
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
        .update_settings(Uuid::new_v4(), UpdateUserProfileParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
