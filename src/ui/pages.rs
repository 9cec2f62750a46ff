//! Pages module
//! Full-page views for the storefront

pub mod home;
