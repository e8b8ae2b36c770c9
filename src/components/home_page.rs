use yew::prelude::*;

use crate::content::FEATURES;
use crate::model::{Page, Theme};

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub theme: Theme,
    pub on_navigate: Callback<Page>,
}

const TOPICS: &[(Page, &str, &str)] = &[
    (
        Page::Docker,
        "Docker",
        "Registries, the engine, containers, networks and Compose, explained layer by layer with interactive diagrams.",
    ),
    (
        Page::Wsl,
        "WSL 2",
        "How Linux runs inside Windows, and how Docker Desktop builds on it.",
    ),
];

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let p = props.theme.palette();
    let cards = TOPICS.iter().map(|&(page, title, blurb)| {
        let nav = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| nav.emit(page));
        html! {
            <button {onclick} style={format!("text-align:left; padding:1.75rem; border-radius:16px; border:1px solid {}; background:{}; color:{}; cursor:pointer; flex:1 1 280px;", p.border, p.surface, p.text)}>
                <h3 style={format!("margin:0 0 0.5rem; color:{};", p.accent)}>{ title }</h3>
                <p style={format!("margin:0; color:{}; line-height:1.6;", p.muted)}>{ blurb }</p>
            </button>
        }
    });
    let features = FEATURES.iter().map(|f| html! {
        <div key={f.title} style={format!("padding:1.75rem; border-radius:16px; border:1px solid {}; background:{};", p.border, p.surface)}>
            <div style={format!("width:44px; height:44px; border-radius:10px; display:flex; align-items:center; justify-content:center; margin-bottom:1rem; background:{}; border:1px solid {}; color:{}; font-family:monospace;", p.accent_soft, p.accent_border, p.accent)}>
                { f.icon }
            </div>
            <h3 style={format!("margin:0 0 0.5rem; color:{}; font-size:1.05rem;", p.text)}>{ f.title }</h3>
            <p style={format!("margin:0; color:{}; line-height:1.6; font-size:0.9rem;", p.muted)}>{ f.blurb }</p>
        </div>
    });
    html! {
        <div style="max-width:960px; margin:0 auto; padding:6rem 1.5rem 4rem;">
            <header style="text-align:center; margin-bottom:3rem;">
                <h1 style={format!("margin:0 0 1rem; color:{};", p.text)}>
                    {"Containers, "}<span style={format!("color:{};", p.accent)}>{"visually"}</span>
                </h1>
                <p style={format!("margin:0 auto; max-width:560px; color:{};", p.muted)}>
                    {"Conceptual guides to Docker and WSL. Scroll to zoom, drag to pan, pinch on touch screens."}
                </p>
            </header>
            <div style="display:flex; gap:1.25rem; flex-wrap:wrap;">{ for cards }</div>
            <section style={format!("margin-top:4rem; padding-top:3rem; border-top:1px solid {};", p.border)}>
                <div style="text-align:center; margin-bottom:2.5rem;">
                    <h2 style={format!("margin:0 0 0.75rem; color:{};", p.text)}>
                        {"Why "}<span style={format!("color:{};", p.accent)}>{"Learn Here"}</span>
                    </h2>
                    <p style={format!("margin:0 auto; max-width:400px; color:{};", p.muted)}>
                        {"Focused on practical knowledge you can apply immediately."}
                    </p>
                </div>
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(250px, 1fr)); gap:1.5rem;">
                    { for features }
                </div>
            </section>
        </div>
    }
}
