use dioxus::prelude::*;
use crate::components::layout::Footer;
use crate::styles::TOOLBAR_HEIGHT;

/// Scrollable main region: page content first, footer last
#[component]
pub fn ContentArea(style: String, container_style: String, children: Element) -> Element {
    rsx! {
        main { class: "shell-main", style: "{style}",
            // Keeps content clear of the absolutely positioned app bar
            div { class: "shell-toolbar-spacer", style: "min-height: {TOOLBAR_HEIGHT}px;" }
            div { class: "shell-container", style: "{container_style}",
                {children}
                Footer {}
            }
        }
    }
}
