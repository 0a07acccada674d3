//! Routes served by the storefront. Every page renders inside [`AppShell`].

use crate::components::views::enrolled_courses::EnrolledCourses;
use crate::components::views::home::Home;
use crate::components::views::login::Login;
use crate::components::views::not_found::NotFound;
use crate::components::{AppShell, CourseDetail};
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/courses/:course_id")]
        CourseDetail { course_id: String },
        #[route("/login")]
        Login {},
        #[route("/dashboard/enrolled-courses")]
        EnrolledCourses {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

pub fn view_label(route: &Route) -> &'static str {
    match route {
        Route::Home {} => "Catalog",
        Route::CourseDetail { .. } => "Course",
        Route::Login {} => "Login",
        Route::EnrolledCourses {} => "My Courses",
        Route::NotFound { .. } => "Not Found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_route_parses_identifier() {
        let Ok(route) = "/courses/abc123".parse::<Route>() else {
            panic!("course route did not parse");
        };
        assert_eq!(
            route,
            Route::CourseDetail {
                course_id: "abc123".to_string()
            }
        );
        assert_eq!(view_label(&route), "Course");
    }

    #[test]
    fn course_route_renders_path() {
        let route = Route::CourseDetail {
            course_id: "abc123".to_string(),
        };
        assert_eq!(route.to_string(), "/courses/abc123");
        assert_eq!(Route::EnrolledCourses {}.to_string(), "/dashboard/enrolled-courses");
    }

    #[test]
    fn unknown_paths_fall_through() {
        let Ok(route) = "/nope/here".parse::<Route>() else {
            panic!("fallback route did not parse");
        };
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
