pub mod admin;
pub mod auth;
pub mod contact;
pub mod messages;
pub mod pages;
pub mod preferences;
pub mod projects;
pub mod site;
pub mod testimonials;
