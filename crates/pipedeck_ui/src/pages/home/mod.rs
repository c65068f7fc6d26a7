mod runs;

pub use runs::*;

use crate::components::sidebar::{Sidebar, SidebarItem};
use leptos::*;
use leptos_router::Outlet;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="size-full flex">
            <div class="grow-0 flex self-stretch">
                <Sidebar>
                    <SidebarItem icon="iconoir-play" text="New run" url="/"/>
                </Sidebar>
            </div>
            <div class="grow overflow-auto p-4">
                <Outlet/>
            </div>
        </div>
    }
}
