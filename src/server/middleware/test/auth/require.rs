use super::*;

/// Tests that a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &authenticator, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a token signed with the wrong secret is rejected without creating a profile.
///
/// Expected: Err(AuthError::InvalidToken) and no user_profile rows
#[tokio::test]
async fn rejects_forged_token_without_side_effects() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("forged")
        .discord_id("555")
        .secret("some-other-secret-of-enough-length")
        .sign()
        .unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &authenticator, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a guild member passes the membership requirement.
///
/// Expected: Ok(UserProfile) for the member's profile
#[tokio::test]
async fn grants_member_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, guild, _) = factory::helpers::create_member_with_dependencies(db).await?;
    let authenticator = authenticator();
    let headers = bearer(&token_for(&user.discord_id));

    let result = AuthGuard::new(db, &authenticator, &headers)
        .require(&[Permission::GuildMember(guild.id)])
        .await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests that the guild owner passes membership and grant requirements without a
/// membership row or explicit grants.
///
/// Expected: Ok(UserProfile)
#[tokio::test]
async fn grants_owner_access_without_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user_profile(db).await?;
    let guild = factory::guild::GuildFactory::new(db)
        .owner_id(&user.discord_id)
        .build()
        .await?;
    let authenticator = authenticator();
    let headers = bearer(&token_for(&user.discord_id));

    let result = AuthGuard::new(db, &authenticator, &headers)
        .require(&[
            Permission::GuildMember(guild.id),
            Permission::Grant(guild.id, READ_PERMISSIONS),
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a non-member is denied access to a guild.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user_profile(db).await?;
    let guild = factory::create_guild(db).await?;
    let authenticator = authenticator();
    let headers = bearer(&token_for(&user.discord_id));

    let result = AuthGuard::new(db, &authenticator, &headers)
        .require(&[Permission::GuildMember(guild.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a requirement on a missing guild surfaces as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user_profile(db).await?;
    let authenticator = authenticator();
    let headers = bearer(&token_for(&user.discord_id));

    let result = AuthGuard::new(db, &authenticator, &headers)
        .require(&[Permission::GuildMember(Uuid::new_v4())])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a member with an admin-marked role passes a grant requirement
/// without holding the key.
///
/// Expected: Ok(UserProfile)
#[tokio::test]
async fn admin_role_satisfies_grant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user_profile(db).await?;
    let guild = factory::create_guild(db).await?;
    factory::guild_member::GuildMemberFactory::new(db, guild.id, user.id)
        .roles(["Server Administrator"])
        .build()
        .await?;
    let authenticator = authenticator();
    let headers = bearer(&token_for(&user.discord_id));

    let result = AuthGuard::new(db, &authenticator, &headers)
        .require(&[Permission::Grant(guild.id, READ_PERMISSIONS)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a role grant satisfies a grant requirement for a non-admin member.
///
/// Expected: Ok(UserProfile)
#[tokio::test]
async fn role_grant_satisfies_grant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user_profile(db).await?;
    let guild = factory::create_guild(db).await?;
    factory::guild_member::GuildMemberFactory::new(db, guild.id, user.id)
        .roles(["Officer"])
        .build()
        .await?;
    let permission = factory::create_permission(db, READ_PERMISSIONS).await?;
    factory::grant_role_permission(db, guild.id, "Officer", permission.id).await?;
    let authenticator = authenticator();
    let headers = bearer(&token_for(&user.discord_id));

    let result = AuthGuard::new(db, &authenticator, &headers)
        .require(&[Permission::Grant(guild.id, READ_PERMISSIONS)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a member without the key or admin roles fails a grant requirement.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_grant_without_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, guild, _) = factory::helpers::create_member_with_dependencies(db).await?;
    factory::create_permission(db, READ_PERMISSIONS).await?;
    let authenticator = authenticator();
    let headers = bearer(&token_for(&user.discord_id));

    let result = AuthGuard::new(db, &authenticator, &headers)
        .require(&[Permission::Grant(guild.id, READ_PERMISSIONS)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
