use super::*;
use crate::server::{
    middleware::auth::{require_same_guest, require_self_or_admin},
    model::{guest::Guest, user::User},
};

/// Tests staff users managing staff accounts.
///
/// Expected: Ok for the account owner and for an admin, Err(AccessDenied) for
/// another receptionist
#[tokio::test]
async fn admits_owner_and_admin_for_staff_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = Caller::Staff(User::from_entity(factory::create_user(db).await?)?);
    let admin = Caller::Staff(User::from_entity(
        factory::user::create_user_with_role(db, "ADMIN").await?,
    )?);
    let other = Caller::Staff(User::from_entity(factory::create_user(db).await?)?);
    let id = owner.actor().id;

    assert!(require_self_or_admin(&owner, id).is_ok());
    assert!(require_self_or_admin(&admin, id).is_ok());
    assert!(matches!(
        require_self_or_admin(&other, id),
        Err(AppError::AuthErr(AuthError::AccessDenied { kind: "USER", .. }))
    ));

    Ok(())
}

/// Tests a guest whose id matches a staff account.
///
/// Expected: Err(AccessDenied) attributed to the guest
#[tokio::test]
async fn denies_guest_on_staff_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = Caller::Guest(Guest::from_entity(factory::create_guest(db).await?)?);
    let id = guest.actor().id;

    assert!(matches!(
        require_self_or_admin(&guest, id),
        Err(AppError::AuthErr(AuthError::AccessDenied { kind: "GUEST", .. }))
    ));

    Ok(())
}

/// Tests who may manage a guest account.
///
/// Expected: Ok for the guest itself, Err(AccessDenied) for another guest and for
/// an admin
#[tokio::test]
async fn admits_only_the_guest_itself() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = Caller::Guest(Guest::from_entity(factory::create_guest(db).await?)?);
    let other = Caller::Guest(Guest::from_entity(factory::create_guest(db).await?)?);
    let admin = Caller::Staff(User::from_entity(
        factory::user::create_user_with_role(db, "ADMIN").await?,
    )?);
    let id = owner.actor().id;

    assert!(require_same_guest(&owner, id).is_ok());
    assert!(require_same_guest(&other, id).is_err());
    assert!(matches!(
        require_same_guest(&admin, id),
        Err(AppError::AuthErr(AuthError::AccessDenied { kind: "USER", .. }))
    ));

    Ok(())
}
