// Course content header and the collapsible per-section rows.

#[component]
fn SyllabusHeader(
    section_count: usize,
    lecture_count: usize,
    duration: String,
    nothing_expanded: bool,
    on_collapse_all: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-3",
            p { class: "text-[28px] font-semibold uppercase tracking-wider", "Course Content" }
            div { class: "flex flex-wrap justify-between gap-2",
                div { class: "flex gap-2 tracking-wide",
                    span { "{section_count} section(s)" }
                    span { "{lecture_count} lecture(s)" }
                    span { "{duration}" }
                }
                button {
                    class: if nothing_expanded { "text-yellow-25/60" } else { "text-yellow-25" },
                    onclick: move |_| on_collapse_all.call(()),
                    "Collapse all sections"
                }
            }
        }
    }
}

#[component]
fn CourseAccordionBar(section: Section, is_open: bool, on_toggle: EventHandler<String>) -> Element {
    let lecture_count = section.sub_section.len();
    let section_id = section.id.clone();
    let chevron = if is_open {
        "w-4 h-4 rotate-180 transition-transform"
    } else {
        "w-4 h-4 transition-transform"
    };

    rsx! {
        div { class: "overflow-hidden border border-solid border-richblack-600 bg-richblack-700 text-richblack-5 last:mb-0",
            div {
                class: "flex cursor-pointer items-start justify-between bg-opacity-20 px-7 py-6 transition-[0.3s]",
                onclick: move |_| on_toggle.call(section_id.clone()),
                div { class: "flex items-center gap-2",
                    Icon { name: "chevron-down".to_string(), class: chevron.to_string() }
                    p { "{section.section_name}" }
                }
                span { class: "text-yellow-25", "{lecture_count} lecture(s)" }
            }

            if is_open {
                div { class: "bg-richblack-900 px-7 py-6 space-y-3",
                    for lecture in section.sub_section.iter() {
                        LectureRow { key: "{lecture.id}", lecture: lecture.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn LectureRow(lecture: SubSection) -> Element {
    let mut show_description = use_signal(|| false);
    let duration = lecture
        .time_duration
        .as_deref()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .map(|seconds| format_duration(Some(seconds)));

    rsx! {
        div {
            div {
                class: "flex cursor-pointer items-center justify-between gap-2",
                onclick: move |_| show_description.toggle(),
                div { class: "flex items-center gap-2",
                    Icon { name: "video".to_string(), class: "w-4 h-4".to_string() }
                    p { "{lecture.title}" }
                }
                if let Some(duration) = duration {
                    span { class: "text-sm text-richblack-300", "{duration}" }
                }
            }
            if show_description() {
                if let Some(description) = lecture.description.clone() {
                    p { class: "mt-2 pl-6 text-sm text-richblack-200", "{description}" }
                }
            }
        }
    }
}
