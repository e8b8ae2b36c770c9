use yew::prelude::*;

use super::copy_button::CopyButton;
use super::diagram_svg::DiagramSvg;
use super::diagram_viewer::DiagramViewer;
use crate::content::{Section, Tab};
use crate::model::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct SectionCardProps {
    pub section: &'static Section,
    pub theme: Theme,
}

#[function_component(SectionCard)]
pub fn section_card(props: &SectionCardProps) -> Html {
    let tab = use_state(|| Tab::Concept);
    let s = props.section;
    let p = props.theme.palette();

    let tab_buttons = Tab::available_for(s).into_iter().map(|t| {
        let tab = tab.clone();
        let active = *tab == t;
        let onclick = Callback::from(move |_: MouseEvent| tab.set(t));
        let style = format!(
            "background:none; border:none; border-bottom:2px solid {}; color:{}; padding:8px 14px; font-size:11px; letter-spacing:0.08em; font-family:monospace; cursor:pointer; font-weight:{};",
            if active { p.accent } else { "transparent" },
            if active { p.accent } else { p.subtle },
            if active { 600 } else { 400 },
        );
        html! { <button {onclick} {style}>{ t.label() }</button> }
    });

    let body = match *tab {
        Tab::Concept => html! {<div style="display:flex; flex-direction:column; gap:14px;">
            <p style={format!("margin:0; line-height:1.7; color:{};", p.text)}>{ s.what }</p>
            <div style={format!("padding:12px 14px; border-left:3px solid {}; background:{}; border-radius:6px; color:{}; font-size:14px;", p.accent, p.accent_soft, p.muted)}>
                <strong style={format!("color:{};", p.accent)}>{"Analogy: "}</strong>{ s.analogy }
            </div>
            <dl style="display:grid; grid-template-columns:minmax(120px, 180px) 1fr; gap:8px 16px; margin:0;">
                { for s.terms.iter().map(|t| html!{<>
                    <dt style={format!("font-family:monospace; color:{}; font-size:13px;", p.accent)}>{ t.key }</dt>
                    <dd style={format!("margin:0; color:{}; font-size:13px;", p.muted)}>{ t.value }</dd>
                </>}) }
            </dl>
        </div>},
        Tab::Commands => html! {<div style="display:flex; flex-direction:column; gap:6px;">
            { for s.commands.iter().map(|c| html!{
                <div style={format!("display:flex; align-items:center; gap:12px; padding:8px 10px; border:1px solid {}; border-radius:8px; background:{};", p.border, p.surface)}>
                    <code style={format!("flex:1; color:{}; font-size:13px;", p.text)}>{ c.cmd }</code>
                    <span style={format!("color:{}; font-size:12px;", p.subtle)}>{ c.desc }</span>
                    <CopyButton text={c.cmd} theme={props.theme} />
                </div>
            }) }
        </div>},
        Tab::Flow => html! {<ol style={format!("margin:0; padding-left:22px; color:{}; line-height:1.8;", p.text)}>
            { for s.flow.iter().map(|step| html!{ <li>{ *step }</li> }) }
        </ol>},
        Tab::Compose => match s.compose {
            Some(yaml) => html! {<div style="position:relative;">
                <div style="position:absolute; top:8px; right:8px;"><CopyButton text={yaml} theme={props.theme} /></div>
                <pre style={format!("margin:0; padding:14px; overflow:auto; border:1px solid {}; border-radius:8px; background:{}; color:{}; font-size:12px;", p.border, p.surface, p.text)}>{ yaml }</pre>
            </div>},
            None => html! {},
        },
    };

    html! {
        <section id={s.id} style={format!("padding:48px 0; border-bottom:1px solid {};", p.border)}>
            <header style="margin-bottom:20px;">
                <span style={format!("font-family:monospace; color:{}; font-size:12px;", p.accent)}>{ s.num }</span>
                <h2 style={format!("margin:4px 0; color:{};", p.text)}>{ s.title }</h2>
                <p style={format!("margin:0; color:{};", p.muted)}>{ s.subtitle }</p>
            </header>
            <div style="width:100%; max-width:880px; height:320px; padding:0 8px; margin:0 auto;">
                <DiagramViewer theme={props.theme}>
                    <DiagramSvg id={s.id} diagram={&s.diagram} theme={props.theme} />
                </DiagramViewer>
            </div>
            <nav style={format!("display:flex; gap:4px; margin-top:24px; border-bottom:1px solid {};", p.border)}>
                { for tab_buttons }
            </nav>
            <div style="padding-top:18px;">{ body }</div>
        </section>
    }
}
