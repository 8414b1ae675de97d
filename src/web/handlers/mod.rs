//! HTTP request handlers organized by resource

pub mod categories;
pub mod channels;
pub mod countries;
pub mod health;
pub mod search;
