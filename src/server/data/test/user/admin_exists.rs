use super::*;
use test_utils::factory::user::UserFactory;

/// Tests the check with no admin account.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests the check with an active admin.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_active_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "ADMIN").await?;

    assert!(UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests that a blocked admin does not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_blocked_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .role("ADMIN")
        .status("BLOCKED")
        .build()
        .await?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}
