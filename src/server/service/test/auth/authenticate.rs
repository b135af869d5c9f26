use super::*;

/// Tests that a first exchange creates a profile from provider claims.
///
/// Expected: profile linked to the subject with name and avatar from metadata
#[tokio::test]
async fn creates_profile_on_first_exchange() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-new")
        .discord_id("4001")
        .full_name("Newcomer")
        .avatar_url("https://cdn.example/n.png")
        .sign()
        .unwrap();

    let user = AuthService::new(db, &authenticator)
        .authenticate(&token)
        .await?;

    assert_eq!(user.auth_user_id.as_deref(), Some("subject-new"));
    assert_eq!(user.discord_id, "4001");
    assert_eq!(user.username, "Newcomer");
    assert_eq!(user.avatar_url.as_deref(), Some("https://cdn.example/n.png"));

    Ok(())
}

/// Tests that exchanging the same token twice creates exactly one profile.
///
/// Expected: same profile ID both times and one user_profile row
#[tokio::test]
async fn repeated_exchange_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-repeat")
        .discord_id("4002")
        .sign()
        .unwrap();

    let service = AuthService::new(db, &authenticator);
    let first = service.authenticate(&token).await?;
    let second = service.authenticate(&token).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a profile created by the bot is linked on first sign-in.
///
/// Expected: existing profile returned with the subject attached
#[tokio::test]
async fn links_bot_created_profile_by_discord_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::user_profile::UserProfileFactory::new(db)
        .discord_id("4003")
        .username("Bot Known")
        .build()
        .await?;
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-link")
        .discord_id("4003")
        .full_name("Signed In")
        .sign()
        .unwrap();

    let user = AuthService::new(db, &authenticator)
        .authenticate(&token)
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.auth_user_id.as_deref(), Some("subject-link"));
    assert_eq!(user.username, "Signed In");
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 1);

    Ok(())
}

/// Tests the fallback display name when the provider reports none.
///
/// Expected: username "discord-<id>"
#[tokio::test]
async fn falls_back_to_generated_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-anon")
        .discord_id("4004")
        .sign()
        .unwrap();

    let user = AuthService::new(db, &authenticator)
        .authenticate(&token)
        .await?;

    assert_eq!(user.username, "discord-4004");

    Ok(())
}

/// Tests that a provider token without a Discord identity is rejected.
///
/// Expected: Err(AuthError::MissingDiscordIdentity) and no profile created
#[tokio::test]
async fn rejects_token_without_discord_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-email-only").sign().unwrap();

    let result = AuthService::new(db, &authenticator)
        .authenticate(&token)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingDiscordIdentity(_)))
    ));
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an expired token is rejected without creating a profile.
///
/// Expected: Err(AuthError::InvalidToken) and no profile created
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-expired")
        .discord_id("4005")
        .expires_in(Duration::hours(-2))
        .sign()
        .unwrap();

    let result = AuthService::new(db, &authenticator)
        .authenticate(&token)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a service-issued token resolves to its profile.
///
/// Expected: the profile the token was issued for
#[tokio::test]
async fn accepts_service_issued_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator_with_session_tokens();
    let provider_token = ProviderTokenBuilder::new("subject-session")
        .discord_id("4006")
        .sign()
        .unwrap();

    let service = AuthService::new(db, &authenticator);
    let user = service.authenticate(&provider_token).await?;
    let session = service.session(user.clone()).await?;
    let session_token = session.token.unwrap();

    let resolved = service.authenticate(&session_token).await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests that a service-issued token for a deleted profile is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_service_token_for_deleted_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator_with_session_tokens();
    let provider_token = ProviderTokenBuilder::new("subject-deleted")
        .discord_id("4007")
        .sign()
        .unwrap();

    let service = AuthService::new(db, &authenticator);
    let user = service.authenticate(&provider_token).await?;
    let session_token = service.session(user.clone()).await?.token.unwrap();
    entity::prelude::UserProfile::delete_by_id(user.id)
        .exec(db)
        .await?;

    let result = service.authenticate(&session_token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests that authenticating again with unchanged claims performs no write.
///
/// Expected: same updated_at after the second authentication
#[tokio::test]
async fn unchanged_claims_leave_profile_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-steady")
        .discord_id("4008")
        .full_name("Steady")
        .sign()
        .unwrap();

    let service = AuthService::new(db, &authenticator);
    let repo = UserProfileRepository::new(db);
    let first = service.authenticate(&token).await?;
    let before = repo.find_by_id(first.id).await?.unwrap();

    let second = service.authenticate(&token).await?;
    let after = repo.find_by_id(first.id).await?.unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(after.updated_at, before.updated_at);

    Ok(())
}

/// Tests that a changed display name from the provider is written back.
///
/// Expected: new username stored and updated_at advanced
#[tokio::test]
async fn changed_claims_refresh_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let service = AuthService::new(db, &authenticator);

    let before = service
        .authenticate(
            &ProviderTokenBuilder::new("subject-rename")
                .discord_id("4009")
                .full_name("Old Name")
                .sign()
                .unwrap(),
        )
        .await?;
    let after = service
        .authenticate(
            &ProviderTokenBuilder::new("subject-rename")
                .discord_id("4009")
                .full_name("New Name")
                .sign()
                .unwrap(),
        )
        .await?;

    assert_eq!(after.id, before.id);
    assert_eq!(after.username, "New Name");
    assert!(after.updated_at >= before.updated_at);

    Ok(())
}

/// Tests that a token for another audience is rejected without creating a profile.
///
/// Expected: Err(AuthError::InvalidToken) and no profile created
#[tokio::test]
async fn rejects_wrong_audience() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-audience")
        .discord_id("4010")
        .audience("anon")
        .sign()
        .unwrap();

    let result = AuthService::new(db, &authenticator)
        .authenticate(&token)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 0);

    Ok(())
}

/// Tests a sign-in racing the bot registering the same Discord user.
///
/// Expected: both calls succeed and share a single profile
#[tokio::test]
async fn concurrent_bot_registration_shares_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let authenticator = authenticator();
    let token = ProviderTokenBuilder::new("subject-race")
        .discord_id("4011")
        .full_name("Racer")
        .sign()
        .unwrap();

    let auth = AuthService::new(db, &authenticator);
    let bot = BotGatewayService::new(db);
    let (user, registration) = tokio::join!(
        auth.authenticate(&token),
        bot.register_guild_member(RegisterGuildMemberParam {
            guild_id: guild.id,
            discord_id: "4011".to_string(),
            username: "Racer".to_string(),
            avatar_url: None,
            discord_roles: vec![],
        }),
    );
    let user = user?;
    registration?;

    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 1);
    let member = GuildMemberRepository::new(db).find(guild.id, user.id).await?;
    assert!(member.is_some());

    Ok(())
}
