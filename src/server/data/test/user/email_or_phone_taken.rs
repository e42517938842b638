use super::*;
use test_utils::factory::user::UserFactory;

/// Tests matching on either contact field.
///
/// Expected: Ok(true) when email or phone matches, Ok(false) when neither does
#[tokio::test]
async fn matches_email_or_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("desk@hotel.test")
        .phone("+15550001")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_or_phone_taken("desk@hotel.test", "+19999999").await?);
    assert!(repo.email_or_phone_taken("other@hotel.test", "+15550001").await?);
    assert!(!repo.email_or_phone_taken("other@hotel.test", "+19999999").await?);

    Ok(())
}
