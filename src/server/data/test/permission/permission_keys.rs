use super::*;

/// Tests reading keys granted to a user directly.
///
/// Expected: only keys granted in the requested guild
#[tokio::test]
async fn reads_user_keys_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, guild, _) = factory::helpers::create_member_with_dependencies(db).await?;
    let other_guild = factory::create_guild(db).await?;
    let read = factory::create_permission(db, "admin:read:permissions").await?;
    let voice = factory::create_permission(db, "voice:manage").await?;
    factory::grant_user_permission(db, guild.id, user.id, read.id).await?;
    factory::grant_user_permission(db, other_guild.id, user.id, voice.id).await?;

    let keys = PermissionRepository::new(db)
        .get_user_permission_keys(guild.id, user.id)
        .await?;

    assert_eq!(keys, vec!["admin:read:permissions"]);

    Ok(())
}

/// Tests reading keys granted to any of a set of roles.
///
/// Expected: keys of matching roles only
#[tokio::test]
async fn reads_role_keys_for_matching_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let read = factory::create_permission(db, "admin:read:permissions").await?;
    let voice = factory::create_permission(db, "voice:manage").await?;
    factory::grant_role_permission(db, guild.id, "Officer", read.id).await?;
    factory::grant_role_permission(db, guild.id, "Recruit", voice.id).await?;

    let mut keys = PermissionRepository::new(db)
        .get_role_permission_keys(guild.id, &["Officer".to_string(), "Member".to_string()])
        .await?;
    keys.sort();

    assert_eq!(keys, vec!["admin:read:permissions"]);

    Ok(())
}

/// Tests that an empty role list yields no keys.
///
/// Expected: empty list
#[tokio::test]
async fn empty_roles_yield_no_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let keys = PermissionRepository::new(db)
        .get_role_permission_keys(guild.id, &[])
        .await?;

    assert!(keys.is_empty());

    Ok(())
}
