use super::*;

/// Tests creating a membership with roles.
///
/// Expected: Ok((member, true)) with the given roles
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user_profile(db).await?;
    let guild = factory::create_guild(db).await?;

    let (member, is_new) = GuildMemberRepository::new(db)
        .upsert(UpsertGuildMemberParam {
            guild_id: guild.id,
            user_id: user.id,
            discord_roles: vec!["Member".to_string(), "Officer".to_string()],
        })
        .await?;

    assert!(is_new);
    assert_eq!(member.guild_id, guild.id);
    assert_eq!(member.user_id, user.id);
    assert_eq!(member.discord_roles, vec!["Member", "Officer"]);

    Ok(())
}

/// Tests that re-registering a member replaces the role list.
///
/// Expected: Ok((member, false)) with the same ID and the new roles
#[tokio::test]
async fn replaces_roles_of_existing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user_profile(db).await?;
    let guild = factory::create_guild(db).await?;
    let existing = factory::guild_member::GuildMemberFactory::new(db, guild.id, user.id)
        .roles(["Member"])
        .build()
        .await?;

    let (member, is_new) = GuildMemberRepository::new(db)
        .upsert(UpsertGuildMemberParam {
            guild_id: guild.id,
            user_id: user.id,
            discord_roles: vec!["Admin".to_string()],
        })
        .await?;

    assert!(!is_new);
    assert_eq!(member.id, existing.id);
    assert_eq!(member.discord_roles, vec!["Admin"]);

    let stored = GuildMemberRepository::new(db)
        .find(guild.id, user.id)
        .await?
        .unwrap();
    assert_eq!(stored.discord_roles, vec!["Admin"]);

    Ok(())
}

/// Tests that find returns nothing for a non-member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let result = GuildMemberRepository::new(db)
        .find(guild.id, Uuid::new_v4())
        .await?;

    assert!(result.is_none());

    Ok(())
}
