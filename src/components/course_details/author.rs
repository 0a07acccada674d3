// Instructor block at the bottom of the page.

#[component]
fn AuthorSection(instructor: Option<Instructor>) -> Element {
    let avatar = instructor_avatar(instructor.as_ref());
    let name = instructor_name(instructor.as_ref());
    let about = instructor
        .as_ref()
        .and_then(|instructor| instructor.additional_details.as_ref())
        .and_then(|details| details.about.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "mb-12 py-4",
            p { class: "text-[28px] font-semibold", "Author" }
            div { class: "flex items-center gap-4 py-4",
                img {
                    class: "h-14 w-14 rounded-full object-cover",
                    src: "{avatar}",
                    alt: "Author",
                    loading: "lazy",
                }
                p { class: "text-lg", "{name}" }
            }
            p { class: "text-richblack-50", "{about}" }
        }
    }
}
