use super::*;

/// Tests listing and looking up catalog entries.
///
/// Expected: all keys listed, lookup by key succeeds, unknown key returns None
#[tokio::test]
async fn lists_and_finds_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_permission(db, "admin:read:permissions").await?;
    factory::create_permission(db, "voice:manage").await?;

    let repo = PermissionRepository::new(db);
    let all = repo.get_all().await?;
    let found = repo.find_by_key("voice:manage").await?.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(found.module.as_deref(), Some("voice"));
    assert!(repo.find_by_key("unknown:key").await?.is_none());

    Ok(())
}
