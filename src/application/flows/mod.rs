pub mod auth;
pub mod otp;
pub mod waitlist_form;
