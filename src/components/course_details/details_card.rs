// Sticky purchase card for wide layouts.

const MONEY_BACK_NOTE: &str = "30-Day Money-Back Guarantee";

#[component]
fn CourseDetailsCard(
    course: CourseDetails,
    enrolled: bool,
    on_buy: EventHandler<()>,
    on_go_to_course: EventHandler<()>,
    on_share: EventHandler<()>,
) -> Element {
    let instructions = course.instructions.clone().unwrap_or_default();

    rsx! {
        div { class: "flex flex-col gap-4 rounded-md bg-richblack-700 p-4 text-richblack-5",
            if let Some(thumbnail) = course.thumbnail.clone() {
                img {
                    class: "max-h-[300px] min-h-[180px] w-[400px] overflow-hidden rounded-2xl object-cover md:max-w-full",
                    src: "{thumbnail}",
                    alt: "course thumbnail",
                    loading: "lazy",
                }
            }

            div { class: "px-4",
                div { class: "space-x-3 pb-4 text-3xl font-semibold", "{price_label(course.price)}" }

                div { class: "flex flex-col gap-4",
                    if enrolled {
                        button {
                            class: "yellowButton",
                            onclick: move |_| on_go_to_course.call(()),
                            "Go To Course"
                        }
                    } else {
                        button { class: "yellowButton", onclick: move |_| on_buy.call(()), "Buy Now" }
                    }
                    button { class: "blackButton", disabled: true, "Add to Cart" }
                }

                p { class: "pb-3 pt-6 text-center text-sm text-richblack-25", "{MONEY_BACK_NOTE}" }

                if !instructions.is_empty() {
                    div {
                        p { class: "my-2 text-xl font-semibold", "This Course Includes :" }
                        div { class: "flex flex-col gap-3 text-sm text-caribbeangreen-100",
                            for (index , item) in instructions.iter().enumerate() {
                                p { key: "{index}", class: "flex items-center gap-2",
                                    Icon { name: "check".to_string(), class: "w-4 h-4".to_string() }
                                    span { "{item}" }
                                }
                            }
                        }
                    }
                }

                div { class: "text-center",
                    button {
                        class: "mx-auto flex items-center gap-2 py-6 text-yellow-100",
                        onclick: move |_| on_share.call(()),
                        Icon { name: "share".to_string(), class: "w-4 h-4".to_string() }
                        "Share"
                    }
                }
            }
        }
    }
}
