use super::*;

/// Tests fetching the caller's membership.
///
/// Expected: Ok(GuildMember) for members, NotFound otherwise
#[tokio::test]
async fn returns_membership_or_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, guild, member) = factory::helpers::create_member_with_dependencies(db).await?;
    let outsider = factory::create_user_profile(db).await?;

    let service = GuildService::new(db);

    assert_eq!(service.get_membership(guild.id, user.id).await?.id, member.id);
    assert!(matches!(
        service.get_membership(guild.id, outsider.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests fetching a guild that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_guild_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildService::new(db).get_by_id(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
