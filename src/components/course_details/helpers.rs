// Pure derivations behind the course detail view: aggregates, text shaping, and state selection.

const AVATAR_PLACEHOLDER_BASE: &str = "https://api.dicebear.com/5.x/initials/svg?seed=";
const MAX_STARS: usize = 5;

/// Mean review rating rounded to one decimal; 0 when there are no reviews.
pub fn average_rating(reviews: Option<&[RatingAndReview]>) -> f64 {
    let reviews = match reviews {
        Some(reviews) if !reviews.is_empty() => reviews,
        _ => return 0.0,
    };
    let total: f64 = reviews.iter().map(|review| review.rating).sum();
    let mean = total / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}

pub fn total_lectures(content: Option<&[Section]>) -> usize {
    content
        .unwrap_or_default()
        .iter()
        .map(|section| section.sub_section.len())
        .sum()
}

pub fn format_duration(seconds: Option<f64>) -> String {
    match seconds {
        Some(seconds) if seconds.is_finite() && seconds >= 0.0 => {
            let total = seconds.floor() as u64;
            let hours = total / 3600;
            let minutes = (total % 3600) / 60;
            format!("{hours}h {minutes}m")
        }
        _ => "N/A".to_string(),
    }
}

/// Splits newline-delimited text into list items, dropping a leading "N." marker.
///
/// Anything up to and including the first period goes, so a line like
/// "e.g. this" loses its start as well.
pub fn numbered_lines(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.split('\n')
        .map(|line| match line.split_once('.') {
            Some((_, rest)) => rest.trim().to_string(),
            None => line.trim().to_string(),
        })
        .collect()
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.and_utc());
        }
    }

    None
}

/// "March 5, 2024 | 3:07 PM", in UTC.
pub fn format_date(value: &str) -> Option<String> {
    let parsed = parse_timestamp(value)?;
    Some(parsed.format("%B %-d, %Y | %-I:%M %p").to_string())
}

fn instructor_parts(instructor: Option<&Instructor>) -> Vec<&str> {
    let Some(instructor) = instructor else {
        return Vec::new();
    };
    [
        instructor.first_name.as_deref(),
        instructor.last_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect()
}

pub fn instructor_name(instructor: Option<&Instructor>) -> String {
    let parts = instructor_parts(instructor);
    if parts.is_empty() {
        "N/A".to_string()
    } else {
        parts.join(" ")
    }
}

/// Uploaded avatar, or an initials placeholder seeded by the instructor's name.
pub fn instructor_avatar(instructor: Option<&Instructor>) -> String {
    if let Some(image) = instructor
        .and_then(|instructor| instructor.image.as_deref())
        .map(str::trim)
        .filter(|image| !image.is_empty())
    {
        return image.to_string();
    }
    let seed = instructor_parts(instructor).join(" ");
    format!("{AVATAR_PLACEHOLDER_BASE}{}", urlencoding::encode(&seed))
}

pub fn is_enrolled(course: &CourseDetails, user: Option<&User>) -> bool {
    let Some(user) = user.filter(|user| !user.id.is_empty()) else {
        return false;
    };
    course
        .students_enrolled
        .iter()
        .flatten()
        .any(|student| student.user_id() == user.id)
}

pub fn price_label(price: Option<f64>) -> String {
    match price {
        Some(price) if price.is_finite() && price.fract() == 0.0 => format!("Rs. {price:.0}"),
        Some(price) if price.is_finite() => format!("Rs. {price:.2}"),
        _ => "Rs. N/A".to_string(),
    }
}

/// Full, half, and empty star counts for a rating on a five-star scale.
pub fn star_slots(rating: f64) -> (usize, bool, usize) {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, MAX_STARS as f64)
    } else {
        0.0
    };
    let full = rating.floor() as usize;
    let half = full < MAX_STARS && rating.fract() > 0.0;
    let empty = MAX_STARS - full - usize::from(half);
    (full, half, empty)
}

pub fn page_state(
    profile_loading: bool,
    response: &ResponseState,
    payment_loading: bool,
) -> PageState<'_> {
    let result = match response {
        ResponseState::Pending => return PageState::Loading,
        ResponseState::Received(_) if profile_loading => return PageState::Loading,
        ResponseState::Received(result) => result,
    };

    let payload = match (&result.data, result.success) {
        (Some(payload), true) => payload,
        _ => return PageState::Error(result.message.as_deref()),
    };

    if payment_loading {
        PageState::PaymentInFlight
    } else {
        PageState::Loaded(payload)
    }
}

/// Decides what "Buy Now" does for the current session.
/// Turns a finished fetch into the state to store, or `None` when a newer request superseded it.
pub fn commit_if_current(
    tracker: &RequestTracker,
    ticket: &RequestTicket,
    result: FetchResult,
) -> Option<ResponseState> {
    tracker
        .is_current(ticket)
        .then(|| ResponseState::Received(result))
}

pub fn share_notice(copied: bool) -> Notice {
    if copied {
        Notice::success("Link copied to clipboard")
    } else {
        Notice::error("Could not copy the link. Copy it from the address bar instead.")
    }
}

pub fn purchase_action(session: &Session, course_id: &str) -> PurchaseAction {
    match session.token() {
        Some(token) => PurchaseAction::Buy(PurchaseRequest {
            token: token.to_string(),
            courses: vec![course_id.to_string()],
            user: session.user.clone(),
        }),
        None => PurchaseAction::RequireLogin(ConfirmationRequest::login_required()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, lectures: usize) -> Section {
        Section {
            id: id.to_string(),
            section_name: format!("Section {id}"),
            sub_section: (0..lectures)
                .map(|index| SubSection {
                    id: format!("{id}-{index}"),
                    title: format!("Lecture {index}"),
                    ..SubSection::default()
                })
                .collect(),
        }
    }

    fn review(rating: f64) -> RatingAndReview {
        RatingAndReview {
            rating,
            ..RatingAndReview::default()
        }
    }

    fn loaded_response() -> ResponseState {
        ResponseState::Received(FetchResult::loaded(CourseDetailsPayload::default()))
    }

    #[test]
    fn lecture_count_sums_every_section() {
        let content = vec![section("a", 3), section("b", 0), section("c", 4)];
        assert_eq!(total_lectures(Some(content.as_slice())), 7);
        assert_eq!(total_lectures(Some(&[][..])), 0);
        assert_eq!(total_lectures(None), 0);
    }

    #[test]
    fn duration_formats_hours_and_minutes() {
        assert_eq!(format_duration(Some(0.0)), "0h 0m");
        assert_eq!(format_duration(Some(3661.0)), "1h 1m");
        assert_eq!(format_duration(Some(59.0)), "0h 0m");
        assert_eq!(format_duration(Some(7199.9)), "1h 59m");
        assert_eq!(format_duration(None), "N/A");
        assert_eq!(format_duration(Some(f64::NAN)), "N/A");
        assert_eq!(format_duration(Some(f64::INFINITY)), "N/A");
        assert_eq!(format_duration(Some(-5.0)), "N/A");
    }

    #[test]
    fn toggling_twice_restores_the_set() {
        let mut expanded = ExpandedSections::default();
        expanded.toggle("s1");
        let before = expanded.clone();

        expanded.toggle("s2");
        assert!(expanded.is_expanded("s2"));
        expanded.toggle("s2");
        assert_eq!(expanded, before);

        expanded.toggle("s1");
        assert!(!expanded.is_expanded("s1"));
        assert!(expanded.is_empty());
    }

    #[test]
    fn collapse_all_always_empties() {
        let mut expanded = ExpandedSections::default();
        expanded.collapse_all();
        assert!(expanded.is_empty());

        for id in ["a", "b", "c"] {
            expanded.toggle(id);
        }
        expanded.collapse_all();
        assert!(expanded.is_empty());
        assert!(!expanded.is_expanded("b"));
    }

    #[test]
    fn numbered_lines_strip_leading_markers() {
        assert_eq!(
            numbered_lines(Some("1. Learn X\n2. Learn Y")),
            vec!["Learn X".to_string(), "Learn Y".to_string()]
        );
        assert_eq!(
            numbered_lines(Some("No period here")),
            vec!["No period here".to_string()]
        );
        assert_eq!(
            numbered_lines(Some("3. Ship v1.0 today")),
            vec!["Ship v1.0 today".to_string()]
        );
        assert!(numbered_lines(None).is_empty());
    }

    #[test]
    fn average_rating_defaults_to_zero() {
        assert_eq!(average_rating(None), 0.0);
        assert_eq!(average_rating(Some(&[][..])), 0.0);
        let reviews = vec![review(4.0), review(5.0), review(4.0)];
        assert_eq!(average_rating(Some(reviews.as_slice())), 4.3);
    }

    #[test]
    fn failed_response_selects_error_view() {
        let response = ResponseState::Received(FetchResult::failed("Course not found"));
        assert_eq!(
            page_state(false, &response, false),
            PageState::Error(Some("Course not found"))
        );
        assert_eq!(
            page_state(false, &response, true),
            PageState::Error(Some("Course not found"))
        );
    }

    #[test]
    fn page_state_respects_priority() {
        let loaded = loaded_response();
        assert_eq!(page_state(false, &ResponseState::Pending, false), PageState::Loading);
        assert_eq!(page_state(true, &loaded, false), PageState::Loading);
        assert_eq!(page_state(false, &loaded, true), PageState::PaymentInFlight);
        assert!(matches!(page_state(false, &loaded, false), PageState::Loaded(_)));
    }

    #[test]
    fn signed_in_purchase_targets_exactly_one_course() {
        let session = Session::signed_in(
            "tok".to_string(),
            User {
                id: "u1".to_string(),
                ..User::default()
            },
        );
        match purchase_action(&session, "course-42") {
            PurchaseAction::Buy(request) => {
                assert_eq!(request.token, "tok");
                assert_eq!(request.courses, vec!["course-42".to_string()]);
                assert_eq!(request.user.map(|user| user.id), Some("u1".to_string()));
            }
            PurchaseAction::RequireLogin(_) => panic!("signed-in user must not see the login gate"),
        }
    }

    #[test]
    fn signed_out_purchase_opens_login_gate() {
        match purchase_action(&Session::default(), "course-42") {
            PurchaseAction::RequireLogin(request) => {
                assert_eq!(request.text1, "You are not logged in!");
                assert_eq!(request.btn1_action, ModalAction::NavigateToLogin);
                assert_eq!(request.btn2_action, ModalAction::Dismiss);
            }
            PurchaseAction::Buy(_) => panic!("signed-out user must not trigger a purchase"),
        }
    }

    #[test]
    fn instructor_display_degrades_gracefully() {
        assert_eq!(instructor_name(None), "N/A");
        let instructor = Instructor {
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
            ..Instructor::default()
        };
        assert_eq!(instructor_name(Some(&instructor)), "Grace Hopper");
        assert_eq!(
            instructor_avatar(Some(&instructor)),
            "https://api.dicebear.com/5.x/initials/svg?seed=Grace%20Hopper"
        );

        let with_image = Instructor {
            image: Some("https://cdn.example.com/grace.png".to_string()),
            ..instructor
        };
        assert_eq!(
            instructor_avatar(Some(&with_image)),
            "https://cdn.example.com/grace.png"
        );
    }

    #[test]
    fn enrollment_matches_user_id() {
        let course = CourseDetails {
            students_enrolled: Some(vec![
                EnrolledStudent::Id("u1".to_string()),
                EnrolledStudent::User {
                    id: "u2".to_string(),
                },
            ]),
            ..CourseDetails::default()
        };
        let user = |id: &str| User {
            id: id.to_string(),
            ..User::default()
        };
        assert!(is_enrolled(&course, Some(&user("u2"))));
        assert!(!is_enrolled(&course, Some(&user("u3"))));
        assert!(!is_enrolled(&course, Some(&user(""))));
        assert!(!is_enrolled(&course, None));
    }

    #[test]
    fn star_slots_always_fill_five() {
        assert_eq!(star_slots(0.0), (0, false, 5));
        assert_eq!(star_slots(4.3), (4, true, 0));
        assert_eq!(star_slots(3.0), (3, false, 2));
        assert_eq!(star_slots(9.0), (5, false, 0));
        assert_eq!(star_slots(f64::NAN), (0, false, 5));
    }

    #[test]
    fn created_date_formats_in_utc() {
        assert_eq!(
            format_date("2024-03-05T15:07:00.000Z").as_deref(),
            Some("March 5, 2024 | 3:07 PM")
        );
        assert_eq!(format_date("not a date"), None);
    }

    #[test]
    fn price_label_drops_trailing_zeroes() {
        assert_eq!(price_label(Some(499.0)), "Rs. 499");
        assert_eq!(price_label(Some(12.5)), "Rs. 12.50");
        assert_eq!(price_label(None), "Rs. N/A");
    }

    fn loaded_course(id: &str) -> FetchResult {
        FetchResult::loaded(CourseDetailsPayload {
            course_details: CourseDetails {
                id: id.to_string(),
                ..CourseDetails::default()
            },
            total_duration: None,
        })
    }

    #[tokio::test]
    async fn stale_response_is_not_committed() {
        use tokio::sync::oneshot;

        let mut tracker = RequestTracker::default();
        let mut committed = ResponseState::Pending;

        let first = tracker.begin("course-a");
        let (first_tx, first_rx) = oneshot::channel::<FetchResult>();
        let second = tracker.begin("course-b");
        let (second_tx, second_rx) = oneshot::channel::<FetchResult>();

        // The newer request resolves first, then the older one arrives late.
        second_tx.send(loaded_course("course-b")).expect("send b");
        first_tx.send(loaded_course("course-a")).expect("send a");

        for (ticket, receiver) in [(second, second_rx), (first, first_rx)] {
            let result = receiver.await.expect("receive result");
            if let Some(state) = commit_if_current(&tracker, &ticket, result) {
                committed = state;
            }
        }

        assert_eq!(committed, ResponseState::Received(loaded_course("course-b")));
    }

    #[test]
    fn superseded_failure_does_not_replace_a_loaded_course() {
        let mut tracker = RequestTracker::default();
        let old = tracker.begin("course-a");
        let current = tracker.begin("course-b");

        assert_eq!(
            commit_if_current(&tracker, &old, FetchResult::failed("timeout")),
            None
        );
        assert_eq!(
            commit_if_current(&tracker, &current, loaded_course("course-b")),
            Some(ResponseState::Received(loaded_course("course-b")))
        );
    }

    #[test]
    fn share_notice_reports_clipboard_failures() {
        assert_eq!(share_notice(true).kind, NoticeKind::Success);
        let failed = share_notice(false);
        assert_eq!(failed.kind, NoticeKind::Error);
        assert!(failed.text.starts_with("Could not copy"));
    }

    thread_local! {
        static LAST_PAYMENT_FLAG: std::cell::Cell<Option<bool>> =
            const { std::cell::Cell::new(None) };
    }

    #[component]
    fn PendingBuyer() -> Element {
        let PaymentLoadingSignal(flag) = use_context::<PaymentLoadingSignal>();
        use_hook(|| {
            spawn(async move {
                let _in_flight = PaymentGuard::begin(flag);
                std::future::pending::<()>().await;
            })
        });
        rsx! {
            p { "purchasing" }
        }
    }

    fn purchase_host() -> Element {
        let flag = use_signal(|| false);
        let mut buyer_mounted = use_signal(|| true);
        use_context_provider(|| PaymentLoadingSignal(flag));

        // Leave the buyer page as soon as its purchase is in flight.
        use_effect(move || {
            if flag() {
                buyer_mounted.set(false);
            }
        });

        LAST_PAYMENT_FLAG.with(|last| last.set(Some(flag())));

        rsx! {
            if buyer_mounted() {
                PendingBuyer {}
            }
        }
    }

    #[tokio::test]
    async fn payment_flag_clears_when_the_buying_page_unmounts() {
        use dioxus::core::VirtualDom;
        use std::time::Duration;

        let mut dom = VirtualDom::new(purchase_host);
        dom.rebuild_in_place();

        let mut saw_in_flight = false;
        for _ in 0..10 {
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            let _ = dom.render_immediate_to_vec();
            saw_in_flight |= LAST_PAYMENT_FLAG.with(|last| last.get()) == Some(true);
        }

        assert!(saw_in_flight);
        assert_eq!(LAST_PAYMENT_FLAG.with(|last| last.get()), Some(false));
    }

    #[test]
    fn reissuing_the_same_course_supersedes_the_old_ticket() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin("course-a");
        let second = tracker.begin("course-a");
        assert_eq!(second.course_id(), "course-a");
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }
}
