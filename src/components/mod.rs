//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod common;
pub mod course_details;
mod icons;
mod navbar;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use common::*;
pub use course_details::CourseDetail;
pub use icons::*;
pub use navbar::*;
