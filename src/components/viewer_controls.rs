use yew::prelude::*;

use crate::model::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerControlsProps {
    pub theme: Theme,
    pub label: AttrValue,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_zoom_in: Callback<()>,
}

#[function_component(ViewerControls)]
pub fn viewer_controls(props: &ViewerControlsProps) -> Html {
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let p = props.theme.palette();
    let button_style = format!(
        "background:{}; border:1px solid {}; color:{}; border-radius:6px; padding:4px 10px; font-size:11px; font-family:var(--font-mono, monospace); cursor:pointer; min-width:36px; backdrop-filter:blur(8px);",
        p.diagram_bg, p.border, p.muted
    );
    html! {<div style="position:absolute; bottom:12px; right:12px; display:flex; gap:4px; z-index:10;">
        <button onclick={zo} style={button_style.clone()} title="Zoom out">{"−"}</button>
        <button onclick={rs} style={button_style.clone()} title="Reset view">{ props.label.clone() }</button>
        <button onclick={zi} style={button_style} title="Zoom in">{"+"}</button>
    </div>}
}
