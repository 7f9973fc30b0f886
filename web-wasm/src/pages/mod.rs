//! One module per HTML page

pub mod auth;
pub mod dashboard;
pub mod manual_form;
pub mod my_reports;
pub mod support;
