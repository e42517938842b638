use super::*;

/// Tests the full registration flow.
///
/// A new guest starts inactive, cannot log in, and becomes active after
/// submitting the code it was sent.
///
/// Expected: Ok login after activation
#[tokio::test]
async fn registers_activates_and_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    let guest = service
        .register(guest_params("ada@mail.test", "+4470000001"))
        .await?;
    assert_eq!(guest.status, GuestStatus::Inactive);

    let before = service.login("ada@mail.test", "correct horse").await;
    assert!(matches!(
        before,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));

    OtpService::new(db)
        .issue("ada@mail.test", Duration::minutes(5))
        .await?;
    let code = stored_code(db, "ada@mail.test").await?;
    let activated = service.activate("ada@mail.test", &code).await?;
    assert_eq!(activated.status, GuestStatus::Active);

    let logged_in = service.login("ada@mail.test", "correct horse").await?;
    assert_eq!(logged_in.id, guest.id);

    Ok(())
}

/// Tests activation with a wrong code.
///
/// Expected: Err(AppError::Validation) and the guest stays inactive
#[tokio::test]
async fn activation_rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    let guest = service
        .register(guest_params("ada@mail.test", "+4470000001"))
        .await?;
    let code = OtpService::new(db)
        .issue("ada@mail.test", Duration::minutes(5))
        .await?;
    let wrong = if code == "999999" { "100000" } else { "999999" };

    let result = service.activate("ada@mail.test", wrong).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(service.get_by_id(guest.id).await?.status, GuestStatus::Inactive);

    Ok(())
}

/// Tests activation for an email nobody registered.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn activation_rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuestService::new(db).activate("nobody@mail.test", "123456").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that email and phone are unique across guests and staff.
///
/// Expected: Err(AppError::Conflict) for a staff email and for a guest phone
#[tokio::test]
async fn rejects_taken_contact_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_user(db).await?;
    let service = GuestService::new(db);
    service
        .register(guest_params("ada@mail.test", "+4470000001"))
        .await?;

    let staff_email = service
        .register(guest_params(&staff.email, "+4470000002"))
        .await;
    let guest_phone = service
        .register(guest_params("grace@mail.test", "+4470000001"))
        .await;

    assert!(matches!(staff_email, Err(AppError::Conflict(_))));
    assert!(matches!(guest_phone, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests asking for a new code for an already active guest.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn pending_activation_rejects_active_guest() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let result = GuestService::new(db).pending_activation(&guest.email).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a guest changing their name and phone.
///
/// Expected: Ok with the new values and the email untouched
#[tokio::test]
async fn updates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    let guest = service
        .register(guest_params("ada@mail.test", "+4470000001"))
        .await?;

    let updated = service
        .update_profile(
            guest.id,
            UpdateProfileParams {
                first_name: Some("Augusta".to_string()),
                phone: Some("+4470000002".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.phone, "+4470000002");
    assert_eq!(updated.email, "ada@mail.test");
    assert_eq!(updated.status, GuestStatus::Inactive);

    Ok(())
}

/// Tests moving a guest onto an email used by a staff account or another guest.
///
/// Expected: Err(AppError::Conflict) for both
#[tokio::test]
async fn update_rejects_contact_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    let guest = service
        .register(guest_params("ada@mail.test", "+4470000001"))
        .await?;
    let staff = factory::create_user(db).await?;
    let other = factory::create_guest(db).await?;

    let staff_email = service
        .update_profile(
            guest.id,
            UpdateProfileParams {
                email: Some(staff.email.clone()),
                ..Default::default()
            },
        )
        .await;
    let guest_email = service
        .update_profile(
            guest.id,
            UpdateProfileParams {
                email: Some(other.email.clone()),
                ..Default::default()
            },
        )
        .await;
    let missing = service
        .update_profile(404, UpdateProfileParams::default())
        .await;

    assert!(matches!(staff_email, Err(AppError::Conflict(_))));
    assert!(matches!(guest_email, Err(AppError::Conflict(_))));
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests changing a guest's password.
///
/// Expected: Ok login with the new password only
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    let guest = service
        .register(guest_params("ada@mail.test", "+4470000001"))
        .await?;
    let code = stored_code(db, "ada@mail.test").await?;
    service.activate("ada@mail.test", &code).await?;

    service.change_password(guest.id, "analytical engine").await?;

    let old = service.login("ada@mail.test", "correct horse").await;
    assert!(matches!(
        old,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    service.login("ada@mail.test", "analytical engine").await?;

    Ok(())
}

/// Tests the forgotten password flow for an active guest.
///
/// Expected: Ok login with the new password, status still ACTIVE
#[tokio::test]
async fn resets_password_with_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    service
        .register(guest_params("ada@mail.test", "+4470000001"))
        .await?;
    let code = stored_code(db, "ada@mail.test").await?;
    service.activate("ada@mail.test", &code).await?;

    let target = service.password_reset_target("ADA@mail.test").await?;
    OtpService::new(db)
        .issue(&target.email, Duration::minutes(5))
        .await?;
    let code = stored_code(db, "ada@mail.test").await?;

    let reset = service
        .reset_password(reset_params("ada@mail.test", &code, "analytical engine"))
        .await?;

    assert_eq!(reset.id, target.id);
    let logged_in = service.login("ada@mail.test", "analytical engine").await?;
    assert_eq!(logged_in.status, GuestStatus::Active);

    Ok(())
}

/// Tests that a password reset does not activate a guest.
///
/// Expected: Err(AuthError::AccountInactive) on login after the reset
#[tokio::test]
async fn reset_keeps_guest_inactive() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);
    service
        .register(guest_params("ada@mail.test", "+4470000001"))
        .await?;
    let code = stored_code(db, "ada@mail.test").await?;

    service
        .reset_password(reset_params("ada@mail.test", &code, "analytical engine"))
        .await?;

    let login = service.login("ada@mail.test", "analytical engine").await;
    assert!(matches!(
        login,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));

    Ok(())
}

/// Tests a reset request for an email no guest uses.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reset_target_requires_known_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuestService::new(db)
        .password_reset_target("nobody@mail.test")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
