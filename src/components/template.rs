use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Header { }
    main {
      class: "page-content",
      Outlet::<Route> {}
    }
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  rsx!{
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          active_class: "nav-active",
          to: Route::Home { },
          "Staking Dashboard",
        }
        div {
          class: "nav-links",
          Link {
            active_class: "nav-active",
            to: Route::Home { },
            "Overview"
          },
          Link {
            active_class: "nav-active",
            to: Route::Protocols { },
            "Protocols"
          },
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  rsx!{
    footer {
      div {
        class: "footer-container",
        p {
          "Protocol data from "
          a { href: "https://defillama.com", target: "_blank", rel: "noopener", "DefiLlama" }
          ". Figures are informational only."
        }
      }
    }
  }
}
