//! Navigation Bar Component
//!
//! Tab bar switching between the dashboard pages.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <nav class="nav-bar">
            {Page::ALL
                .into_iter()
                .map(|page| {
                    let is_active = move || ctx.page.get() == page;
                    let tab_class = move || {
                        if is_active() { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| ctx.navigate(page)>
                            {page.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
