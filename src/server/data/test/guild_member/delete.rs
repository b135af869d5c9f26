use super::*;

/// Tests deleting an existing membership.
///
/// Expected: Ok(true) and the membership is gone
#[tokio::test]
async fn deletes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, guild, _) = factory::helpers::create_member_with_dependencies(db).await?;

    let repo = GuildMemberRepository::new(db);
    let deleted = repo.delete(guild.id, user.id).await?;

    assert!(deleted);
    assert!(repo.find(guild.id, user.id).await?.is_none());

    Ok(())
}

/// Tests deleting a membership that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let deleted = GuildMemberRepository::new(db)
        .delete(guild.id, Uuid::new_v4())
        .await?;

    assert!(!deleted);

    Ok(())
}
