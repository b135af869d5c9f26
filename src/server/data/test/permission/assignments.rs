use super::*;

/// Tests grouping role grants by role.
///
/// Expected: one entry per role, roles and keys sorted
#[tokio::test]
async fn groups_role_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let read = factory::create_permission(db, "admin:read:permissions").await?;
    let voice = factory::create_permission(db, "voice:manage").await?;
    factory::grant_role_permission(db, guild.id, "Officer", voice.id).await?;
    factory::grant_role_permission(db, guild.id, "Officer", read.id).await?;
    factory::grant_role_permission(db, guild.id, "Director", read.id).await?;

    let assignments = PermissionRepository::new(db)
        .get_role_assignments(guild.id)
        .await?;

    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].discord_role_id, "Director");
    assert_eq!(assignments[1].discord_role_id, "Officer");
    assert_eq!(
        assignments[1].permission_keys,
        vec!["admin:read:permissions", "voice:manage"]
    );

    Ok(())
}

/// Tests grouping direct grants by user with usernames.
///
/// Expected: one entry per user ordered by username
#[tokio::test]
async fn groups_user_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let bravo = factory::user_profile::UserProfileFactory::new(db)
        .username("Bravo")
        .build()
        .await?;
    let alpha = factory::user_profile::UserProfileFactory::new(db)
        .username("Alpha")
        .build()
        .await?;
    let read = factory::create_permission(db, "admin:read:permissions").await?;
    factory::grant_user_permission(db, guild.id, bravo.id, read.id).await?;
    factory::grant_user_permission(db, guild.id, alpha.id, read.id).await?;

    let assignments = PermissionRepository::new(db)
        .get_user_assignments(guild.id)
        .await?;

    let names: Vec<_> = assignments.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);
    assert_eq!(assignments[0].user_id, alpha.id);
    assert_eq!(assignments[0].permission_keys, vec!["admin:read:permissions"]);

    Ok(())
}

/// Tests listings for a guild without grants.
///
/// Expected: both lists empty
#[tokio::test]
async fn empty_guild_has_no_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let repo = PermissionRepository::new(db);

    assert!(repo.get_role_assignments(guild.id).await?.is_empty());
    assert!(repo.get_user_assignments(guild.id).await?.is_empty());

    Ok(())
}
