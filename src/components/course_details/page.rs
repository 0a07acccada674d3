// Course detail route: loads the course for the current id and wires purchase actions.

const COPY_LINK_SCRIPT: &str = r#"
    await navigator.clipboard.writeText(window.location.href);
    return true;
"#;

#[component]
pub fn CourseDetail(course_id: String) -> Element {
    let session = use_context::<Signal<Session>>();
    let PaymentLoadingSignal(payment_loading) = use_context::<PaymentLoadingSignal>();
    let api_config = use_context::<Signal<ApiConfig>>();
    let nav = navigator();

    let mut response = use_signal(|| ResponseState::Pending);
    let mut tracker = use_signal(RequestTracker::default);
    let mut expanded = use_signal(ExpandedSections::default);
    let mut confirmation = use_signal(|| None::<ConfirmationRequest>);
    let mut notice = use_signal(|| None::<Notice>);

    // Refetch whenever the route hands us a different course id.
    use_effect(use_reactive((&course_id,), move |(course_id,)| {
        let ticket = tracker.write().begin(&course_id);
        response.set(ResponseState::Pending);
        expanded.write().collapse_all();
        confirmation.set(None);

        let config = api_config.peek().clone();
        spawn(async move {
            let result = fetch_course_details(config, ticket.course_id().to_string()).await;
            let committed = commit_if_current(&tracker.peek(), &ticket, result);
            match committed {
                Some(state) => response.set(state),
                None => tracing::debug!(
                    course_id = ticket.course_id(),
                    "dropping course details for a superseded request"
                ),
            }
        });
    }));

    let on_buy = use_callback({
        let course_id = course_id.clone();
        move |_: ()| {
            let action = purchase_action(&session.peek(), &course_id);
            match action {
                PurchaseAction::Buy(request) => {
                    let config = api_config.peek().clone();
                    spawn(async move {
                        let in_flight = PaymentGuard::begin(payment_loading);
                        let outcome = buy_courses(config, request).await;
                        drop(in_flight);
                        match outcome {
                            Ok(()) => {
                                nav.push(Route::EnrolledCourses {});
                            }
                            Err(error) => {
                                tracing::warn!(%error, "course purchase failed");
                                notice.set(Some(Notice::error(format!(
                                    "Could not complete the purchase: {error}"
                                ))));
                            }
                        }
                    });
                }
                PurchaseAction::RequireLogin(request) => confirmation.set(Some(request)),
            }
        }
    });

    let on_go_to_course = move |_: ()| {
        nav.push(Route::EnrolledCourses {});
    };

    let on_share = move |_: ()| {
        spawn(async move {
            let copied = match document::eval(COPY_LINK_SCRIPT).await {
                Ok(_) => true,
                Err(error) => {
                    tracing::warn!(?error, "could not copy course link");
                    false
                }
            };
            notice.set(Some(share_notice(copied)));
        });
    };

    let on_modal_action = move |action: ModalAction| match action {
        ModalAction::NavigateToLogin => {
            nav.push(Route::Login {});
        }
        ModalAction::Dismiss => confirmation.set(None),
    };

    let profile_loading = session.read().loading;
    let response_snapshot = response();
    let payload = match page_state(profile_loading, &response_snapshot, payment_loading()) {
        PageState::Loading | PageState::PaymentInFlight => return rsx! {
            Spinner {}
        },
        PageState::Error(message) => {
            return rsx! {
                ErrorView { message: message.map(str::to_string) }
            };
        }
        PageState::Loaded(payload) => payload.clone(),
    };

    let duration = format_duration(payload.total_duration_seconds());
    let course = payload.course_details;
    let enrolled = is_enrolled(&course, session.read().user.as_ref());
    let rating = average_rating(course.rating_and_reviews.as_deref());
    let lecture_count = total_lectures(course.course_content.as_deref());
    let learning_outcomes = numbered_lines(course.what_you_will_learn.as_deref());
    let sections = course.course_content.clone().unwrap_or_default();
    let expanded_now = expanded();

    rsx! {
        if let Some(current) = notice() {
            NoticeBanner { notice: current, on_dismiss: move |_| notice.set(None) }
        }

        div { class: "relative w-full bg-richblack-800",
            div { class: "mx-auto box-content px-4 lg:w-[1260px] 2xl:relative",
                div { class: "mx-auto grid min-h-[450px] max-w-maxContentTab justify-items-center py-8 lg:mx-0 lg:justify-items-start lg:py-0 xl:max-w-[810px]",
                    CourseHero { course: course.clone(), average_rating: rating }
                    MobilePurchaseBar {
                        price: course.price,
                        enrolled,
                        on_buy,
                        on_go_to_course,
                    }
                }

                div { class: "right-[1rem] top-[60px] mx-auto hidden min-h-[600px] w-1/3 max-w-[410px] translate-y-24 md:translate-y-0 lg:absolute lg:block",
                    CourseDetailsCard {
                        course: course.clone(),
                        enrolled,
                        on_buy,
                        on_go_to_course,
                        on_share,
                    }
                }
            }
        }

        div { class: "mx-auto box-content px-4 text-richblack-5 lg:w-[1260px]",
            div { class: "mx-auto max-w-maxContentTab lg:mx-0 xl:max-w-[810px]",
                div { class: "my-8 border border-richblack-600 p-8",
                    p { class: "text-3xl font-semibold uppercase tracking-wider", "What you'll Learn?" }
                    NumberedList {
                        items: learning_outcomes,
                        class: "mt-5 leading-relaxed space-y-2".to_string(),
                    }
                }

                div { class: "max-w-[830px]",
                    SyllabusHeader {
                        section_count: sections.len(),
                        lecture_count,
                        duration,
                        nothing_expanded: expanded_now.is_empty(),
                        on_collapse_all: move |_| expanded.write().collapse_all(),
                    }

                    div { class: "py-4",
                        for section in sections {
                            CourseAccordionBar {
                                key: "{section.id}",
                                is_open: expanded_now.is_expanded(&section.id),
                                section: section.clone(),
                                on_toggle: move |section_id: String| expanded.write().toggle(&section_id),
                            }
                        }
                    }

                    AuthorSection { instructor: course.instructor.clone() }
                }
            }
        }

        Footer {}

        if let Some(request) = confirmation() {
            ConfirmationModal { request, on_action: on_modal_action }
        }
    }
}
