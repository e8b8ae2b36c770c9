use yew::prelude::*;

use super::app::ThemeContext;
use crate::model::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let theme = use_context::<ThemeContext>().map(|c| c.theme).unwrap_or_default();
    let p = theme.palette();
    let links = Page::ALL.iter().map(|&page| {
        let nav = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| nav.emit(page));
        html! { <button {onclick} style={format!("background:none; border:none; color:{}; cursor:pointer; font-size:13px;", p.muted)}>{ page.label() }</button> }
    });
    html! {<footer style={format!("border-top:1px solid {}; padding:2rem 1.5rem; display:flex; flex-wrap:wrap; gap:1rem; justify-content:space-between; align-items:center; color:{}; font-size:13px;", p.border, p.subtle)}>
        <span>{"Conceptual notes on Docker and WSL. Diagrams are simplified."}</span>
        <div style="display:flex; gap:4px;">{ for links }</div>
    </footer>}
}
