use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;
use yew::prelude::*;

use super::app::ThemeContext;
use crate::model::{is_mobile_width, Page};

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
}

fn window_is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .is_some_and(is_mobile_width)
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let is_mobile = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);

    // Track the breakpoint; the resize listener lives as long as the navbar.
    {
        let setter = is_mobile.setter();
        use_effect_with((), move |_| {
            setter.set(window_is_mobile());
            let window = web_sys::window();
            let on_resize = Closure::wrap(Box::new(move |_e: Event| {
                setter.set(window_is_mobile());
            }) as Box<dyn FnMut(Event)>);
            if let Some(w) = &window {
                if let Err(e) = w.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
                    log::warn!("could not listen for resize: {e:?}");
                }
            }
            move || {
                if let Some(w) = window {
                    let _ = w.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                }
            }
        });
    }
    {
        let menu_open = menu_open.clone();
        use_effect_with(props.page, move |_| {
            menu_open.set(false);
            || ()
        });
    }

    let Some(ctx) = use_context::<ThemeContext>() else {
        return html! {};
    };
    let p = ctx.theme.palette();
    let link = |page: Page, stacked: bool| {
        let nav = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            nav.emit(page);
        });
        let active = page == props.page;
        let style = format!(
            "background:{}; border:none; border-radius:8px; padding:{}; color:{}; cursor:pointer; font-size:14px; text-align:left;",
            if active { p.accent_soft } else { "transparent" },
            if stacked { "0.7rem 1rem" } else { "6px 12px" },
            if active { p.accent } else { p.muted },
        );
        html! { <button {onclick} {style}>{ page.label() }</button> }
    };
    let toggle = {
        let cb = ctx.toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let (icon, title) = if ctx.theme.is_dark() {
        ("☀", "Switch to light theme")
    } else {
        ("☾", "Switch to dark theme")
    };
    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let show_menu = *is_mobile && *menu_open;

    html! {<nav style={format!("position:sticky; top:0; z-index:40; background:{}; border-bottom:1px solid {}; backdrop-filter:blur(12px);", p.bg, p.border)}>
        <div style="display:flex; align-items:center; justify-content:space-between; padding:10px 1.5rem;">
            <span style={format!("font-family:monospace; font-weight:700; color:{};", p.accent)}>{"container.guide"}</span>
            <div style="display:flex; gap:4px; align-items:center;">
                if !*is_mobile {
                    { for Page::ALL.iter().map(|&page| link(page, false)) }
                }
                <button onclick={toggle} {title} style={format!("margin-left:8px; background:none; border:1px solid {}; border-radius:8px; padding:4px 10px; color:{}; cursor:pointer;", p.border, p.text)}>{ icon }</button>
                if *is_mobile {
                    <button onclick={on_menu} title="Menu" style={format!("background:none; border:none; padding:4px 8px; color:{}; cursor:pointer; font-size:1.2rem;", p.muted)}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                }
            </div>
        </div>
        if show_menu {
            <div style={format!("display:flex; flex-direction:column; gap:4px; padding:0.75rem 1.5rem 1rem; border-top:1px solid {};", p.border)}>
                { for Page::ALL.iter().map(|&page| link(page, true)) }
            </div>
        }
    </nav>}
}
