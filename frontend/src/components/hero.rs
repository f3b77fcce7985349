//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Enter or upload fall and winter benchmark scores with the hours each student "
                "spent on the program, and see how strongly hours relate to score growth."
            </p>
        </div>
    }
}
