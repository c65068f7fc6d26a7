use crate::pages::{
    home::{Home, RunCreate},
    not_found::NotFound,
};
use leptos::*;
use leptos_router::{Route, Router, Routes};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="h-screen bg-slate-900">
                <div class="h-screen flex">
                    <Routes>
                        <Route path="/" view=Home>
                            <Route path="/" view=RunCreate/>
                        </Route>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}
