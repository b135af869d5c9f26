use super::*;

/// Tests registering a guild for the first time.
///
/// Expected: Ok((guild, true)) with bot_present set
#[tokio::test]
async fn creates_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, is_new) = GuildRepository::new(db)
        .upsert(param("3001", "Alpha"))
        .await?;

    assert!(is_new);
    assert!(guild.bot_present);
    assert_eq!(guild.discord_id, "3001");
    assert_eq!(guild.name, "Alpha");

    Ok(())
}

/// Tests re-registering a guild the bot had left.
///
/// Expected: Ok((guild, false)) with the same ID, new details and bot_present restored
#[tokio::test]
async fn updates_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::guild::GuildFactory::new(db)
        .discord_id("3002")
        .name("Before")
        .bot_present(false)
        .build()
        .await?;

    let mut update = param("3002", "After");
    update.icon_url = Some("https://cdn.example/icon.png".to_string());
    let (guild, is_new) = GuildRepository::new(db).upsert(update).await?;

    assert!(!is_new);
    assert_eq!(guild.id, existing.id);
    assert_eq!(guild.name, "After");
    assert_eq!(guild.owner_id, "owner-1");
    assert_eq!(guild.icon_url.as_deref(), Some("https://cdn.example/icon.png"));
    assert!(guild.bot_present);

    Ok(())
}

/// Tests that repeated registration keeps a single row.
///
/// Expected: one guild row after two upserts
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.upsert(param("3003", "Same")).await?;
    repo.upsert(param("3003", "Same")).await?;

    assert_eq!(entity::prelude::Guild::find().count(db).await?, 1);

    Ok(())
}
