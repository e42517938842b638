use super::*;

/// Tests purging expired codes.
///
/// Expected: Ok(1) with only the live code left
#[tokio::test]
async fn deletes_only_expired_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    repo.upsert("old@mail.test", "111111", Utc::now() - Duration::minutes(1))
        .await?;
    repo.upsert("new@mail.test", "222222", Utc::now() + Duration::minutes(5))
        .await?;

    let deleted = repo.delete_expired(Utc::now()).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_email("old@mail.test").await?.is_none());
    assert!(repo.find_by_email("new@mail.test").await?.is_some());

    Ok(())
}
