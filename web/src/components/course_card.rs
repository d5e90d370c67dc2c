//! Card for one catalog course.
//!
//! DESIGN
//! ======
//! The card only renders; generating a referral code for its course is
//! delegated to the page through `on_generate`.

use leptos::prelude::*;
use model::{Course, CourseId};

#[component]
pub fn CourseCard(
    course: Course,
    on_generate: Callback<Option<CourseId>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let price = format!("Price: {}", course.price_label());
    let points = format!("Points: {}", course.points_label());
    let course_id = course.course_id.clone();

    view! {
        <div class="course-card">
            <img class="course-card__image" src=course.image_path.clone() alt=course.description.clone()/>
            <div class="course-card__body">
                <h2 class="course-card__title">{course.description.clone()}</h2>
                <p class="course-card__price">{price}</p>
                <p class="course-card__points">{points}</p>
                <button
                    class="btn btn--small"
                    disabled=move || disabled.get()
                    on:click=move |_| on_generate.run(Some(course_id.clone()))
                >
                    "Refer a friend"
                </button>
            </div>
        </div>
    }
}
