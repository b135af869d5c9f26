use super::*;

/// Tests registering a member unknown to the dashboard.
///
/// Expected: profile created without a provider subject, membership created
#[tokio::test]
async fn creates_profile_and_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let registration = BotGatewayService::new(db)
        .register_guild_member(member_param(guild.id, "5101", &["Member"]))
        .await?;

    assert!(registration.is_new);
    let user = UserProfileRepository::new(db)
        .find_by_discord_id("5101")
        .await?
        .unwrap();
    assert!(user.auth_user_id.is_none());
    assert_eq!(user.username, "Member 5101");
    let member = GuildMemberRepository::new(db)
        .find(guild.id, user.id)
        .await?
        .unwrap();
    assert_eq!(member.id, registration.id);
    assert_eq!(member.discord_roles, vec!["Member"]);

    Ok(())
}

/// Tests re-registering a member with new roles.
///
/// Expected: isNew false, same membership, roles replaced, one profile
#[tokio::test]
async fn replaces_roles_on_repeat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let service = BotGatewayService::new(db);
    let first = service
        .register_guild_member(member_param(guild.id, "5102", &["Member"]))
        .await?;
    let second = service
        .register_guild_member(member_param(guild.id, "5102", &["Member", "Admin"]))
        .await?;

    assert!(!second.is_new);
    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 1);
    assert_eq!(entity::prelude::GuildMember::find().count(db).await?, 1);

    let user = UserProfileRepository::new(db)
        .find_by_discord_id("5102")
        .await?
        .unwrap();
    let member = GuildMemberRepository::new(db)
        .find(guild.id, user.id)
        .await?
        .unwrap();
    assert_eq!(member.discord_roles, vec!["Member", "Admin"]);

    Ok(())
}

/// Tests that an existing dashboard profile is reused and refreshed.
///
/// Expected: subject kept, username refreshed
#[tokio::test]
async fn reuses_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let existing = factory::user_profile::UserProfileFactory::new(db)
        .discord_id("5103")
        .auth_user_id("subject-5103")
        .username("Old")
        .build()
        .await?;

    BotGatewayService::new(db)
        .register_guild_member(member_param(guild.id, "5103", &[]))
        .await?;

    let user = UserProfileRepository::new(db)
        .find_by_id(existing.id)
        .await?
        .unwrap();
    assert_eq!(user.auth_user_id.as_deref(), Some("subject-5103"));
    assert_eq!(user.username, "Member 5103");

    Ok(())
}

/// Tests registering a member of an unknown guild.
///
/// Expected: Err(AppError::NotFound) and no profile created
#[tokio::test]
async fn unknown_guild_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BotGatewayService::new(db)
        .register_guild_member(member_param(Uuid::new_v4(), "5104", &[]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a member report with a non-numeric Discord ID is rejected.
///
/// Expected: Err(AppError::BadRequest) and no profile created
#[tokio::test]
async fn rejects_malformed_discord_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let result = BotGatewayService::new(db)
        .register_guild_member(member_param(guild.id, "not-a-snowflake", &[]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 0);

    Ok(())
}
