use super::*;

/// Tests creating a staff account and logging in with it.
///
/// Expected: Ok with the same account returned by login
#[tokio::test]
async fn creates_user_and_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Receptionist))
        .await?;

    let logged_in = service.login("Desk@Hotel.test", "battery staple").await?;

    assert_eq!(logged_in.id, created.id);
    assert_eq!(logged_in.role, Role::Receptionist);
    assert_eq!(logged_in.status, UserStatus::Active);
    assert_ne!(logged_in.password_hash, "battery staple");

    Ok(())
}

/// Tests that a wrong password and an unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Admin))
        .await?;

    let wrong_password = service.login("desk@hotel.test", "nope").await;
    let unknown = service.login("ghost@hotel.test", "battery staple").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a blocked account cannot log in.
///
/// Expected: Err(AuthError::AccountBlocked)
#[tokio::test]
async fn blocked_user_cannot_log_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .create(staff_params("desk@hotel.test", "+15550100", Role::RoomManager))
        .await?;
    service.set_status(user.id, UserStatus::Blocked).await?;

    let result = service.login("desk@hotel.test", "battery staple").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountBlocked(id))) if id == user.id
    ));

    Ok(())
}

/// Tests that staff accounts cannot reuse a guest's contact details.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_contact_used_by_guest() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let result = UserService::new(db)
        .create(staff_params("new@hotel.test", &guest.phone, Role::Receptionist))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests renaming a staff account and moving it to a new email.
///
/// Expected: Ok with the new values and login working under the new email
#[tokio::test]
async fn updates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Receptionist))
        .await?;

    let updated = service
        .update_profile(
            user.id,
            UpdateProfileParams {
                last_name: Some("Murray".to_string()),
                email: Some("front@hotel.test".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.last_name, "Murray");
    assert_eq!(updated.email, "front@hotel.test");
    assert_eq!(updated.phone, "+15550100");

    let logged_in = service.login("front@hotel.test", "battery staple").await?;
    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests moving a staff account onto contact details already in use.
///
/// Expected: Err(AppError::Conflict) for another staff email and for a guest phone
#[tokio::test]
async fn update_rejects_contact_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Receptionist))
        .await?;
    let other = factory::create_user(db).await?;
    let guest = factory::create_guest(db).await?;

    let staff_email = service
        .update_profile(
            user.id,
            UpdateProfileParams {
                email: Some(other.email.clone()),
                ..Default::default()
            },
        )
        .await;
    let guest_phone = service
        .update_profile(
            user.id,
            UpdateProfileParams {
                phone: Some(guest.phone.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(staff_email, Err(AppError::Conflict(_))));
    assert!(matches!(guest_phone, Err(AppError::Conflict(_))));

    let unchanged = service.get_by_id(user.id).await?;
    assert_eq!(unchanged.email, "desk@hotel.test");
    assert_eq!(unchanged.phone, "+15550100");

    Ok(())
}

/// Tests that an update keeping the account's own email is allowed.
///
/// Expected: Ok
#[tokio::test]
async fn update_accepts_own_contact() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Receptionist))
        .await?;

    let updated = service
        .update_profile(
            user.id,
            UpdateProfileParams {
                email: Some("desk@hotel.test".to_string()),
                first_name: Some("Amazing".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.first_name, "Amazing");

    Ok(())
}

/// Tests changing a staff password.
///
/// Expected: Ok login with the new password, Err(InvalidCredentials) with the old
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Receptionist))
        .await?;

    service.change_password(user.id, "tr0ub4dor").await?;

    let old = service.login("desk@hotel.test", "battery staple").await;
    assert!(matches!(
        old,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    service.login("desk@hotel.test", "tr0ub4dor").await?;

    let missing = service.change_password(404, "tr0ub4dor").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a staff account.
///
/// Expected: Ok with the deleted account, then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let admin = service
        .create(staff_params("boss@hotel.test", "+15550101", Role::Admin))
        .await?;
    let user = service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Receptionist))
        .await?;

    let deleted = service.delete(user.id, admin.id).await?;
    assert_eq!(deleted.id, user.id);

    let lookup = service.get_by_id(user.id).await;
    let again = service.delete(user.id, admin.id).await;

    assert!(matches!(lookup, Err(AppError::NotFound(_))));
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an admin cannot delete their own account.
///
/// Expected: Err(AppError::Conflict) and the account kept
#[tokio::test]
async fn cannot_delete_own_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let admin = service
        .create(staff_params("boss@hotel.test", "+15550101", Role::Admin))
        .await?;

    let result = service.delete(admin.id, admin.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_by_id(admin.id).await?.id, admin.id);

    Ok(())
}

/// Tests the forgotten password flow for staff.
///
/// Expected: Ok login with the password set through the mailed code
#[tokio::test]
async fn resets_password_with_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Receptionist))
        .await?;

    let target = service.password_reset_target(" Desk@Hotel.test ").await?;
    assert_eq!(target.id, user.id);
    OtpService::new(db)
        .issue(&target.email, Duration::minutes(5))
        .await?;
    let code = stored_code(db, "desk@hotel.test").await?;

    let reset = service
        .reset_password(reset_params("desk@hotel.test", &code, "tr0ub4dor"))
        .await?;
    assert_eq!(reset.id, user.id);

    service.login("desk@hotel.test", "tr0ub4dor").await?;

    let reused = service
        .reset_password(reset_params("desk@hotel.test", &code, "again"))
        .await;
    assert!(matches!(reused, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests a reset with a wrong code and one for an unknown email.
///
/// Expected: Err(AppError::Validation) and Err(AppError::NotFound), old password kept
#[tokio::test]
async fn reset_rejects_wrong_code_and_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .create(staff_params("desk@hotel.test", "+15550100", Role::Receptionist))
        .await?;
    let code = OtpService::new(db)
        .issue("desk@hotel.test", Duration::minutes(5))
        .await?;
    let wrong = if code == "111111" { "222222" } else { "111111" };

    let bad_code = service
        .reset_password(reset_params("desk@hotel.test", wrong, "tr0ub4dor"))
        .await;
    let unknown = service
        .reset_password(reset_params("nobody@hotel.test", &code, "tr0ub4dor"))
        .await;

    assert!(matches!(bad_code, Err(AppError::Validation(_))));
    assert!(matches!(unknown, Err(AppError::NotFound(_))));
    service.login("desk@hotel.test", "battery staple").await?;

    Ok(())
}
