//! Plain-text rendering of the homepage for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use model::home::{LOADING_LABEL, NO_COURSES_LABEL};
use model::{Course, HomeState};

/// Render the homepage: error line, points, referral code and course cards.
#[must_use]
pub fn home(state: &HomeState) -> String {
    if state.loading {
        return format!("{LOADING_LABEL}\n");
    }

    let mut out = String::from("Available Courses\n\n");
    if let Some(error) = &state.error {
        out.push_str(&format!("error: {error}\n"));
    }
    out.push_str(&format!("Your Points: {}\n", state.points_label()));
    out.push_str(&format!("Your Referral Code: {}\n\n", state.code_label()));

    if state.courses.is_empty() {
        out.push_str(&format!("{NO_COURSES_LABEL}\n"));
    } else {
        for course in &state.courses {
            out.push_str(&card(course));
        }
    }
    out
}

/// One course card.
#[must_use]
pub fn card(course: &Course) -> String {
    let mut out = format!(
        "[{}] {}\n    Price: {}\n    Points: {}\n",
        course.course_id,
        course.description,
        course.price_label(),
        course.points_label()
    );
    if !course.image_path.is_empty() {
        out.push_str(&format!("    Image: {}\n", course.image_path));
    }
    out
}
