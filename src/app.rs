//! Root application component with routing, context providers, and session
//! rehydration on startup.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::components::toast::ToastHost;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminPage, chat::ChatPage, dashboard::DashboardPage, detect::DetectPage,
    doctor_profile_new::DoctorProfileNewPage, doctors::DoctorsPage, home::HomePage,
    legal::PrivacyPage, legal::TermsPage, login::LoginPage, pending::PendingPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

const PATIENT_ONLY: &[Role] = &[Role::Patient];
const DOCTOR_ONLY: &[Role] = &[Role::Doctor];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ANY_ROLE: &[Role] = &[Role::Patient, Role::Doctor, Role::Admin];

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
/// Provides the session and notification contexts, kicks off rehydration
/// from the stored token, and sets up client-side routing with role guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(session);
    provide_context(notify);

    // Rehydrate once at startup; reads only localStorage, so the effect
    // never re-runs.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        crate::state::actions::init_session(session, notify);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/medilink.css"/>
        <Title text="MediLink"/>

        <Router>
            <Navbar/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>

                    <Route path=StaticSegment("") view=|| view! {
                        <RouteGuard allow=PATIENT_ONLY><HomePage/></RouteGuard>
                    }/>
                    <Route path=StaticSegment("doctors") view=|| view! {
                        <RouteGuard allow=PATIENT_ONLY><DoctorsPage/></RouteGuard>
                    }/>
                    <Route path=StaticSegment("detect") view=|| view! {
                        <RouteGuard allow=PATIENT_ONLY><DetectPage/></RouteGuard>
                    }/>

                    <Route path=StaticSegment("dashboard") view=|| view! {
                        <RouteGuard allow=DOCTOR_ONLY><DashboardPage/></RouteGuard>
                    }/>
                    <Route path=(StaticSegment("doctor"), StaticSegment("pending")) view=|| view! {
                        <RouteGuard allow=DOCTOR_ONLY><PendingPage/></RouteGuard>
                    }/>
                    <Route path=(StaticSegment("doctor"), StaticSegment("profile"), StaticSegment("new")) view=|| view! {
                        <RouteGuard allow=DOCTOR_ONLY><DoctorProfileNewPage/></RouteGuard>
                    }/>

                    <Route path=StaticSegment("admin") view=|| view! {
                        <RouteGuard allow=ADMIN_ONLY><AdminPage/></RouteGuard>
                    }/>

                    <Route path=StaticSegment("profile") view=|| view! {
                        <RouteGuard allow=ANY_ROLE><ProfilePage/></RouteGuard>
                    }/>
                    <Route path=StaticSegment("chat") view=|| view! {
                        <RouteGuard allow=ANY_ROLE><ChatPage/></RouteGuard>
                    }/>
                </Routes>
            </main>
        </Router>
    }
}
