#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use derive_more::Display;
use dioxus::prelude::*;

use crate::{
    layouts::{guard::GuardLayout, shell::ShellLayout},
    pages::{
        about::AboutPage, admin::AdminPage, cancel::CancelPage, change_password::ChangePasswordPage,
        forget_password::ForgetPasswordPage, home::HomePage, k8s::K8sPage, landing::LandingPage, login::LoginPage,
        logout::LogoutPage, maintenance::MaintenancePage, new_password::NewPasswordPage, not_found::NotFoundPage,
        otp::OtpPage, profile::ProfilePage, root::RootPage, signup::SignupPage, success::SuccessPage, vm::VmPage,
    },
};

/// Route table. Every route passes through [`GuardLayout`] before its page
/// renders; the guard layout also picks the page frame from [`RouteMeta::layout`].
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(GuardLayout)]
        #[route("/welcome", LandingPage)]
        Landing {},
        #[route("/login", LoginPage)]
        Login {},
        #[route("/signup", SignupPage)]
        Signup {},
        #[route("/forgetPassword", ForgetPasswordPage)]
        ForgetPassword {},
        #[route("/otp", OtpPage)]
        Otp {},
        #[route("/newPassword", NewPasswordPage)]
        NewPassword {},
        #[route("/about", AboutPage)]
        About {},
        #[route("/cancel", CancelPage)]
        Cancel {},
        #[route("/success", SuccessPage)]
        Success {},
        #[route("/maintenance", MaintenancePage)]
        Maintenance {},

        #[layout(ShellLayout)]
            #[route("/", RootPage)]
            Root {},
            #[route("/home", HomePage)]
            Home {},
            #[route("/profile", ProfilePage)]
            Profile {},
            #[route("/changePassword", ChangePasswordPage)]
            ChangePassword {},
            #[route("/vm", VmPage)]
            Vm {},
            #[route("/k8s", K8sPage)]
            K8s {},
            #[route("/admin", AdminPage)]
            Admin {},
            #[route("/logout", LogoutPage)]
            Logout {},
        #[end_layout]

        #[route("/:..segments", NotFoundPage)]
        PageNotFound { segments: Vec<String> },
}

pub const CATCH_ALL_PATTERN: &str = "/:..segments";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    #[display("Default")]
    Default,
    #[display("NoNavbar")]
    NoNavbar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// Trusted as is by the guard; there is no second authorization check.
    pub required_auth: bool,
    pub layout: LayoutKind,
}

impl RouteMeta {
    const fn public() -> Self {
        Self {
            required_auth: false,
            layout: LayoutKind::Default,
        }
    }

    const fn protected() -> Self {
        Self {
            required_auth: true,
            layout: LayoutKind::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: &'static str,
    pub route: Route,
    pub meta: RouteMeta,
    /// Routes rendered inside this route's shell.
    pub children: Vec<RouteDescriptor>,
}

impl Route {
    pub fn meta(&self) -> RouteMeta {
        match self {
            Route::Landing {}
            | Route::Login {}
            | Route::Signup {}
            | Route::ForgetPassword {}
            | Route::Otp {}
            | Route::NewPassword {}
            | Route::About {}
            | Route::Maintenance {}
            | Route::Logout {} => RouteMeta::public(),

            Route::Cancel {}
            | Route::Success {}
            | Route::Root {}
            | Route::Home {}
            | Route::Profile {}
            | Route::ChangePassword {}
            | Route::Vm {}
            | Route::K8s {}
            | Route::Admin {} => RouteMeta::protected(),

            Route::PageNotFound { .. } => RouteMeta {
                required_auth: false,
                layout: LayoutKind::NoNavbar,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Landing {} => "Landing",
            Route::Login {} => "Login",
            Route::Signup {} => "Signup",
            Route::ForgetPassword {} => "ForgetPassword",
            Route::Otp {} => "OTP",
            Route::NewPassword {} => "NewPassword",
            Route::About {} => "About",
            Route::Cancel {} => "Cancel",
            Route::Success {} => "Success",
            Route::Maintenance {} => "Maintenance",
            Route::Root {} => "Root",
            Route::Home {} => "Home",
            Route::Profile {} => "Profile",
            Route::ChangePassword {} => "ChangePassword",
            Route::Vm {} => "VM",
            Route::K8s {} => "K8s",
            Route::Admin {} => "Admin",
            Route::Logout {} => "Logout",
            Route::PageNotFound { .. } => "PageNotFound",
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Route::Root {})
    }

    pub fn descriptor(&self) -> RouteDescriptor {
        let path = match self {
            Route::PageNotFound { .. } => CATCH_ALL_PATTERN.to_owned(),
            route => route.to_string(),
        };

        RouteDescriptor {
            path,
            name: self.name(),
            route: self.clone(),
            meta: self.meta(),
            children: Vec::new(),
        }
    }

    /// Declared routes in matching order, catch-all last. The authenticated
    /// pages are children of the `/` shell.
    pub fn table() -> Vec<RouteDescriptor> {
        let top = [
            Route::Landing {},
            Route::Login {},
            Route::Signup {},
            Route::ForgetPassword {},
            Route::Otp {},
            Route::NewPassword {},
            Route::About {},
            Route::Cancel {},
            Route::Success {},
            Route::Maintenance {},
        ];

        let mut table: Vec<RouteDescriptor> = top.iter().map(Route::descriptor).collect();
        table.push(Route::shell());
        table.push(Route::PageNotFound { segments: Vec::new() }.descriptor());
        table
    }

    fn shell() -> RouteDescriptor {
        let children = [
            Route::Home {},
            Route::Profile {},
            Route::ChangePassword {},
            Route::Vm {},
            Route::K8s {},
            Route::Admin {},
            Route::Logout {},
        ];

        RouteDescriptor {
            children: children.iter().map(Route::descriptor).collect(),
            ..Route::Root {}.descriptor()
        }
    }

    /// Every declared route, parents before their children.
    #[cfg(test)]
    pub fn flattened() -> Vec<RouteDescriptor> {
        fn walk(descriptor: RouteDescriptor, out: &mut Vec<RouteDescriptor>) {
            let children = descriptor.children.clone();
            out.push(descriptor);
            for child in children {
                walk(child, out);
            }
        }

        let mut out = Vec::new();
        for descriptor in Route::table() {
            walk(descriptor, &mut out);
        }
        out
    }
}
