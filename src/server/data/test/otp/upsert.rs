use super::*;

/// Tests storing a code for a new email.
///
/// Expected: Ok with the code retrievable by email
#[tokio::test]
async fn stores_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    repo.upsert("guest@mail.test", "123456", Utc::now() + Duration::minutes(5))
        .await?;

    let stored = repo.find_by_email("guest@mail.test").await?.unwrap();
    assert_eq!(stored.code, "123456");

    Ok(())
}

/// Tests that a second code for the same email replaces the first.
///
/// Expected: Ok with one row holding the newest code and expiry
#[tokio::test]
async fn replaces_existing_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    let later = Utc::now() + Duration::minutes(10);
    repo.upsert("guest@mail.test", "111111", Utc::now() + Duration::minutes(5))
        .await?;
    repo.upsert("guest@mail.test", "222222", later).await?;

    let stored = repo.find_by_email("guest@mail.test").await?.unwrap();
    assert_eq!(stored.code, "222222");
    assert_eq!(stored.expires_at.timestamp(), later.timestamp());

    assert_eq!(Otp::find().count(db).await?, 1);

    Ok(())
}
