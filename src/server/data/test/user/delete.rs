use super::*;

/// Tests deleting a staff account.
///
/// Expected: Ok(true) once, then Ok(false) with the row gone
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let kept = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(repo.find_by_id(kept.id).await?.is_some());

    Ok(())
}
