//! Background jobs.

pub mod otp_purge;
