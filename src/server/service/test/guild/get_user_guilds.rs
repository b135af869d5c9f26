use super::*;

/// Tests listing every membership including guilds the bot has left.
///
/// Expected: both guilds listed with admin and permissions derived per guild
#[tokio::test]
async fn lists_all_memberships_with_flags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user_profile(db).await?;
    let owned = factory::guild::GuildFactory::new(db)
        .name("Alpha")
        .owner_id(&user.discord_id)
        .build()
        .await?;
    let departed = factory::guild::GuildFactory::new(db)
        .name("Bravo")
        .bot_present(false)
        .build()
        .await?;
    factory::create_guild_member(db, owned.id, user.id).await?;
    factory::guild_member::GuildMemberFactory::new(db, departed.id, user.id)
        .roles(["Officer"])
        .build()
        .await?;
    let voice = factory::create_permission(db, "voice:manage").await?;
    factory::grant_role_permission(db, departed.id, "Officer", voice.id).await?;
    let profile = UserProfileRepository::new(db)
        .find_by_id(user.id)
        .await?
        .unwrap();

    let service = GuildService::new(db);
    let guilds = service.get_user_guilds(&profile).await?;
    let available = service.get_available_guilds(&profile).await?;

    assert_eq!(guilds.len(), 2);
    assert_eq!(guilds[0].guild.id, owned.id);
    assert!(guilds[0].is_admin);
    assert!(guilds[0].permissions.is_empty());
    assert_eq!(guilds[1].guild.id, departed.id);
    assert!(!guilds[1].is_admin);
    assert_eq!(guilds[1].permissions, vec!["voice:manage"]);

    assert_eq!(available.len(), 1);
    assert_eq!(available[0].guild.id, owned.id);

    Ok(())
}
