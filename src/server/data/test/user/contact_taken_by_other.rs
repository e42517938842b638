use super::*;

/// Tests that an account's own email and phone do not count as taken.
///
/// Expected: Ok(false) for the owner, Ok(true) for anyone else
#[tokio::test]
async fn ignores_the_account_itself() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(!repo
        .contact_taken_by_other(&user.email, &user.phone, user.id)
        .await?);
    assert!(repo
        .contact_taken_by_other(&user.email, "+10000000000", other.id)
        .await?);
    assert!(repo
        .contact_taken_by_other("fresh@hotel.test", &other.phone, user.id)
        .await?);

    Ok(())
}
