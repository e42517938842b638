use super::*;
use crate::server::model::user::UserStatus;

/// Tests blocking a staff account.
///
/// Expected: Ok(Some) with status BLOCKED
#[tokio::test]
async fn blocks_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .set_status(user.id, UserStatus::Blocked)
        .await?
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.status, "BLOCKED");

    Ok(())
}

/// Tests changing the status of a missing account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .set_status(404, UserStatus::Active)
        .await?;

    assert!(updated.is_none());

    Ok(())
}
