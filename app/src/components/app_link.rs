use dioxus::prelude::*;

use crate::controller::{Msg, UrlRequest};
use crate::hooks::use_controller;

/// Anchor whose clicks go through the controller instead of the browser.
#[component]
pub fn AppLink(to: UrlRequest, class: &'static str, children: Element) -> Element {
    let controller = use_controller();
    let href = to.href();

    rsx! {
        a {
            class: class,
            href: "{href}",
            onclick: move |e: MouseEvent| {
                e.prevent_default();
                controller.send(Msg::LinkClicked(to.clone()));
            },
            {children}
        }
    }
}
