use super::*;

/// Tests that assigning a role grant twice creates it once.
///
/// Expected: first call Ok(true), second Ok(false)
#[tokio::test]
async fn role_grant_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let permission = factory::create_permission(db, "voice:manage").await?;

    let repo = PermissionRepository::new(db);

    assert!(repo.assign_to_role(guild.id, "Officer", permission.id).await?);
    assert!(!repo.assign_to_role(guild.id, "Officer", permission.id).await?);

    Ok(())
}

/// Tests revoking a role grant, then revoking it again.
///
/// Expected: first call Ok(true), second Ok(false)
#[tokio::test]
async fn revokes_role_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let permission = factory::create_permission(db, "voice:manage").await?;
    factory::grant_role_permission(db, guild.id, "Officer", permission.id).await?;

    let repo = PermissionRepository::new(db);

    assert!(repo.revoke_from_role(guild.id, "Officer", permission.id).await?);
    assert!(!repo.revoke_from_role(guild.id, "Officer", permission.id).await?);

    Ok(())
}

/// Tests assigning and revoking a direct user grant.
///
/// Expected: assign Ok(true) then Ok(false); revoke Ok(true) then Ok(false)
#[tokio::test]
async fn user_grant_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, guild, _) = factory::helpers::create_member_with_dependencies(db).await?;
    let permission = factory::create_permission(db, "voice:manage").await?;

    let repo = PermissionRepository::new(db);

    assert!(repo.assign_to_user(guild.id, user.id, permission.id).await?);
    assert!(!repo.assign_to_user(guild.id, user.id, permission.id).await?);
    assert!(repo.revoke_from_user(guild.id, user.id, permission.id).await?);
    assert!(!repo.revoke_from_user(guild.id, user.id, permission.id).await?);

    Ok(())
}
