//! Fixed site header: brand, desktop menu, mobile menu.
//!
//! The highlighted entry follows the active section reported by the
//! site-wide tracker; clicking an entry issues a scroll-to-section
//! command (instant under reduced motion).

use yew::prelude::*;

use crate::content::{HERO, NAV};
use crate::engine::nav::highlight_index;
use crate::hooks::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active_id: String,
    pub reduced_motion: bool,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let mobile_open = use_state(|| false);
    let highlight = highlight_index(
        NAV.iter().map(|entry| entry.id),
        Some(props.active_id.as_str()),
    );
    let reduced_motion = props.reduced_motion;

    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };

    let contact_cta = Callback::from(move |_: MouseEvent| {
        scroll_to_section("contact", reduced_motion);
    });

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <div class="brand">
                    <div class="brand-mark">{"EFG"}</div>
                    <div class="brand-text">
                        <div class="brand-title">
                            {"EFG · Eye For Good"}
                            <span class="brand-badge">{HERO.eyebrow}</span>
                        </div>
                        <div class="brand-sub">{"Research-driven vision systems for real manufacturing lines"}</div>
                    </div>
                </div>

                <nav class="site-nav">
                    { for NAV.iter().enumerate().map(|(index, entry)| {
                        let entry = *entry;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            scroll_to_section(entry.id, reduced_motion);
                        });
                        html! {
                            <button
                                class={classes!("nav-entry", (index == highlight).then_some("active"))}
                                {onclick}
                            >
                                {entry.label}
                            </button>
                        }
                    })}
                </nav>

                <div class="header-actions">
                    <button class="header-cta" onclick={contact_cta}>{"Discuss a pilot"}</button>
                    <button class="mobile-menu-toggle" onclick={toggle_mobile.clone()}>{"Menu"}</button>
                </div>
            </div>

            if *mobile_open {
                <div class="mobile-menu">
                    { for NAV.iter().map(|entry| {
                        let entry = *entry;
                        let mobile_open = mobile_open.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            mobile_open.set(false);
                            scroll_to_section(entry.id, reduced_motion);
                        });
                        html! {
                            <button class="mobile-menu-entry" {onclick}>{entry.label}</button>
                        }
                    })}
                </div>
            }
        </header>
    }
}
