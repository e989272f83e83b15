//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::module_shell::ModuleShell;
use crate::components::notice_tray::NoticeTray;
use crate::components::route_guard::RequireSession;
use crate::config::HOME_PATH;
use crate::pages::{login::LoginPage, module_home::ModuleHomePage, select_module::SelectModulePage};
use crate::session::SessionProvider;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Everything except `/login` sits under one guarded layout, so a route added
/// there is protected without further wiring.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/petdesk.css"/>
        <Title text="PetDesk"/>

        <Router>
            <SessionProvider>
                <NoticeTray/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                        <Route path=StaticSegment("select-module") view=SelectModulePage/>
                        <Route path=(StaticSegment("petshop"), StaticSegment("dashboard")) view=ModuleHomePage/>
                        <Route path=(StaticSegment("clinica"), StaticSegment("dashboard")) view=ModuleHomePage/>
                        <Route path=(StaticSegment("grooming"), StaticSegment("dashboard")) view=ModuleHomePage/>
                    </ParentRoute>
                </Routes>
            </SessionProvider>
        </Router>
    }
}

#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireSession>
            <ModuleShell/>
        </RequireSession>
    }
}
