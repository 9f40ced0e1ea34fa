//! Routed pages. Presentation is deliberately thin; state and effects live
//! in `state` and `net`.

pub mod admin;
pub mod chat;
pub mod dashboard;
pub mod detect;
pub mod doctor_profile_new;
pub mod doctors;
pub mod home;
pub mod legal;
pub mod login;
pub mod pending;
pub mod profile;
pub mod register;
