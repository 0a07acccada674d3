//! Course detail page: data loading, purchase gate, and the hero, syllabus, and author sections.

use crate::api::{
    buy_courses, fetch_course_details, ApiConfig, CourseDetails, CourseDetailsPayload,
    FetchResult, Instructor, PurchaseRequest, RatingAndReview, Section, SubSection, User,
};
#[cfg(test)]
use crate::api::EnrolledStudent;
#[cfg(test)]
use crate::components::NoticeKind;
use crate::components::{
    ConfirmationModal, ErrorView, Footer, Icon, Notice, NoticeBanner, NumberedList, RatingStars,
    Route, Spinner,
};
use crate::db::Session;
use chrono::{DateTime, NaiveDateTime, Utc};
use dioxus::document;
use dioxus::prelude::*;
use std::collections::HashSet;

// Expansion set, request tracking, render states, and the login gate payload.
include!("types.rs");
// Route-level component: fetch, derived values, and purchase handling.
include!("page.rs");
// Title block, rating summary, and the narrow-layout purchase bar.
include!("hero.rs");
// Sidebar purchase card for wide layouts.
include!("details_card.rs");
// Syllabus header and the per-section accordion.
include!("syllabus.rs");
// Instructor block.
include!("author.rs");
// Pure derivations shared by the sections above.
include!("helpers.rs");
