pub mod activities;
pub mod activity;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod quarters;
pub mod weeks;
