// Hero block above the fold, plus the price bar shown on narrow layouts.

#[component]
fn CourseHero(course: CourseDetails, average_rating: f64) -> Element {
    let title = course
        .course_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Untitled Course")
        .to_string();
    let description = numbered_lines(course.course_description.as_deref());
    let review_count = course.rating_and_reviews.as_ref().map_or(0, Vec::len);
    let enrolled_count = course.students_enrolled.as_ref().map_or(0, Vec::len);
    let created_at = course
        .created_at
        .as_deref()
        .and_then(format_date)
        .unwrap_or("N/A".to_string());
    let author = instructor_name(course.instructor.as_ref());

    rsx! {
        if let Some(thumbnail) = course.thumbnail.clone() {
            div { class: "relative block max-h-[30rem] lg:hidden",
                div { class: "absolute bottom-0 left-0 h-full w-full shadow-[#161D29_0px_-64px_36px_-28px_inset]" }
                img {
                    class: "aspect-auto w-full",
                    src: "{thumbnail}",
                    alt: "course thumbnail",
                    loading: "lazy",
                }
            }
        }

        div { class: "z-30 my-5 flex flex-col justify-center gap-4 py-5 text-lg text-richblack-5",
            p { class: "text-4xl font-bold text-richblack-5 sm:text-[42px] tracking-wider text-center lg:text-left",
                "{title}"
            }

            NumberedList { items: description, class: "text-richblack-200 space-y-1".to_string() }

            div { class: "text-md flex flex-wrap items-center gap-2 justify-center lg:justify-start",
                span { class: "text-yellow-25", "{average_rating}" }
                RatingStars { rating: average_rating, star_size: 24 }
                span { "({review_count} reviews)" }
                span { "{enrolled_count} students enrolled" }
            }

            p { "Created By {author}" }

            div { class: "flex flex-wrap gap-5 text-lg",
                p { class: "flex items-center gap-2",
                    Icon { name: "info".to_string(), class: "w-5 h-5".to_string() }
                    "Created at {created_at}"
                }
                p { class: "flex items-center gap-2",
                    Icon { name: "globe".to_string(), class: "w-5 h-5".to_string() }
                    "English"
                }
            }
        }
    }
}

#[component]
fn MobilePurchaseBar(
    price: Option<f64>,
    enrolled: bool,
    on_buy: EventHandler<()>,
    on_go_to_course: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex w-full flex-col gap-4 border-y border-y-richblack-500 py-4 lg:hidden",
            p { class: "text-3xl font-semibold text-richblack-5", "{price_label(price)}" }
            if enrolled {
                button {
                    class: "yellowButton uppercase tracking-wider",
                    onclick: move |_| on_go_to_course.call(()),
                    "Go To Course"
                }
            } else {
                button {
                    class: "yellowButton uppercase tracking-wider",
                    onclick: move |_| on_buy.call(()),
                    "Buy Now"
                }
            }
            button { class: "blackButton uppercase tracking-wider", disabled: true, "Add to Cart" }
        }
    }
}
