use leptos::{html, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::use_element_visibility;

use crate::motion::Pose;

/// Fades and lifts its children in the first time they scroll into view.
/// Stays revealed afterwards.
#[component]
pub fn RevealOnScroll(
    children: Children,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] extra_class: &'static str,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let revealed = Memo::new(move |prev: Option<&bool>| {
        prev.copied().unwrap_or(false) || visible.get()
    });

    view! {
        <div
            node_ref=el
            class=move || {
                let state = if revealed.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-12"
                };
                format!("transition-all duration-700 ease-out {state} {extra_class}")
            }
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageEntrance {
    FirstLoad,
    RouteChange,
}

impl PageEntrance {
    fn start_pose(self) -> Pose {
        match self {
            Self::FirstLoad => Pose::HIDDEN.with_y(20.0),
            Self::RouteChange => Pose::VISIBLE.with_opacity(0.8).with_y(10.0),
        }
    }

    fn transition(self) -> &'static str {
        match self {
            // power2.out
            Self::FirstLoad => {
                "transform 500ms cubic-bezier(0.33, 1, 0.68, 1), opacity 500ms cubic-bezier(0.33, 1, 0.68, 1)"
            }
            // power1.out
            Self::RouteChange => {
                "transform 300ms cubic-bezier(0.5, 1, 0.89, 1), opacity 300ms cubic-bezier(0.5, 1, 0.89, 1)"
            }
        }
    }

    /// Inline style: jump to the start pose, then ease to rest. At rest there
    /// is no transform left, so `fixed` descendants stay viewport-relative.
    fn style(self, at_rest: bool) -> String {
        if at_rest {
            format!("transition: {};", self.transition())
        } else {
            format!("{} transition: none;", self.start_pose().to_css())
        }
    }
}

/// Eases the page in on first load and again whenever the route changes.
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;
    let (entrance, set_entrance) = signal((PageEntrance::FirstLoad, true));

    Effect::watch(
        move || pathname.get(),
        move |_, previous, _| {
            let kind = if previous.is_some() {
                PageEntrance::RouteChange
            } else {
                PageEntrance::FirstLoad
            };
            set_entrance((kind, false));
            // the start pose has to be painted once before easing away from it
            request_animation_frame(move || {
                request_animation_frame(move || set_entrance((kind, true)));
            });
        },
        true,
    );

    view! {
        <div style=move || {
            let (kind, at_rest) = entrance.get();
            kind.style(at_rest)
        }>{children()}</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_starts_hidden_and_lower() {
        let start = PageEntrance::FirstLoad.style(false);
        assert!(start.starts_with("opacity: 0.000;"));
        assert!(start.contains("translate(0.00px, 20.00px)"));
        assert!(start.ends_with("transition: none;"));

        let rest = PageEntrance::FirstLoad.style(true);
        // only the transition is left, nothing that holds a pose
        assert!(rest.starts_with("transition:"));
        assert!(!rest.contains("translate"));
        assert!(rest.contains("500ms"));
    }

    #[test]
    fn test_route_change_is_a_shorter_nudge() {
        let start = PageEntrance::RouteChange.style(false);
        assert!(start.starts_with("opacity: 0.800;"));
        assert!(start.contains("translate(0.00px, 10.00px)"));
        assert!(PageEntrance::RouteChange.style(true).contains("300ms"));
    }
}
