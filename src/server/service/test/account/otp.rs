use super::*;
use crate::server::service::{
    mailer::LogMailer,
    otp::{OtpPurpose, MAX_FAILED_ATTEMPTS},
};
use entity::prelude::Otp;
use sea_orm::{EntityTrait, PaginatorTrait};
use std::sync::Arc;

/// Tests that a verified code is consumed.
///
/// Expected: Ok once, then Err(AppError::Validation) on reuse
#[tokio::test]
async fn code_is_single_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OtpService::new(db);
    let code = service.issue("ada@mail.test", Duration::minutes(5)).await?;

    service.verify("ada@mail.test", &code).await?;
    let reuse = service.verify("ada@mail.test", &code).await;

    assert!(matches!(reuse, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that an expired code is rejected.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_expired_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OtpService::new(db);
    let code = service
        .issue("ada@mail.test", Duration::minutes(-1))
        .await?;

    let result = service.verify("ada@mail.test", &code).await;

    assert!(matches!(result, Err(AppError::Validation(message)) if message.contains("expired")));

    Ok(())
}

/// Tests that issuing again replaces the previous code.
///
/// Expected: Ok with a single stored code
#[tokio::test]
async fn reissue_replaces_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OtpService::new(db);
    service.issue("ada@mail.test", Duration::minutes(5)).await?;
    service
        .issue_and_send(
            "ada@mail.test",
            Duration::minutes(5),
            OtpPurpose::EmailVerification,
            Arc::new(LogMailer),
        )
        .await?;

    assert_eq!(Otp::find().count(db).await?, 1);

    Ok(())
}

/// Tests purging expired codes.
///
/// Expected: Ok(1) with the live code kept
#[tokio::test]
async fn purges_expired_codes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OtpService::new(db);
    service.issue("old@mail.test", Duration::minutes(-5)).await?;
    service.issue("new@mail.test", Duration::minutes(5)).await?;

    let purged = service.purge_expired().await?;

    assert_eq!(purged, 1);
    assert_eq!(Otp::find().count(db).await?, 1);

    Ok(())
}

/// Tests that repeated wrong guesses discard the code.
///
/// Expected: Err(AppError::Validation) for each wrong guess, then the correct
/// code is rejected too because it has been deleted
#[tokio::test]
async fn discards_code_after_too_many_wrong_guesses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OtpService::new(db);
    let code = service.issue("ada@mail.test", Duration::minutes(5)).await?;

    for _ in 0..MAX_FAILED_ATTEMPTS {
        let guess = service.verify("ada@mail.test", "000000").await;
        assert!(matches!(guess, Err(AppError::Validation(_))));
    }

    assert_eq!(Otp::find().count(db).await?, 0);
    let result = service.verify("ada@mail.test", &code).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that the right code still works after fewer wrong guesses than the limit.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_code_after_a_few_wrong_guesses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OtpService::new(db);
    let code = service.issue("ada@mail.test", Duration::minutes(5)).await?;

    for _ in 1..MAX_FAILED_ATTEMPTS {
        let _ = service.verify("ada@mail.test", "000000").await;
    }

    service.verify("ada@mail.test", &code).await?;

    Ok(())
}

/// Tests that issuing a new code clears earlier wrong guesses.
///
/// Expected: Ok with the failed attempt count back at zero
#[tokio::test]
async fn reissue_resets_failed_attempts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OtpService::new(db);
    service.issue("ada@mail.test", Duration::minutes(5)).await?;
    let _ = service.verify("ada@mail.test", "000000").await;
    let _ = service.verify("ada@mail.test", "000000").await;

    service.issue("ada@mail.test", Duration::minutes(5)).await?;

    let stored = Otp::find().one(db).await?.unwrap();
    assert_eq!(stored.failed_attempts, 0);

    Ok(())
}
