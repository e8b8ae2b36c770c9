use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::section_card::SectionCard;
use crate::content::{visible_section, SECTIONS, SUMMARY};
use crate::model::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct DockerPageProps {
    pub theme: Theme,
}

type SectionWatch = (IntersectionObserver, Closure<dyn FnMut(Array)>);

/// Observe every section element; half-visible sections become active.
fn watch_sections(setter: UseStateSetter<&'static str>) -> Option<SectionWatch> {
    let on_entries = Closure::wrap(Box::new(move |entries: Array| {
        let seen: Vec<(String, bool)> = entries
            .iter()
            .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|e| (e.target().id(), e.is_intersecting()))
            .collect();
        if let Some(id) = visible_section(seen.iter().map(|(id, hit)| (id.as_str(), *hit))) {
            setter.set(id);
        }
    }) as Box<dyn FnMut(Array)>);
    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(0.5));
    let observer = match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &opts) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("section tracking unavailable: {e:?}");
            return None;
        }
    };
    let document = web_sys::window().and_then(|w| w.document())?;
    for s in SECTIONS {
        match document.get_element_by_id(s.id) {
            Some(el) => observer.observe(&el),
            None => log::debug!("section {} not in the document", s.id),
        }
    }
    Some((observer, on_entries))
}

#[function_component(DockerPage)]
pub fn docker_page(props: &DockerPageProps) -> Html {
    let active = use_state_eq(|| SECTIONS[0].id);
    {
        let setter = active.setter();
        use_effect_with((), move |_| {
            let watch = watch_sections(setter);
            move || {
                if let Some((observer, _on_entries)) = watch {
                    observer.disconnect();
                }
            }
        });
    }

    let p = props.theme.palette();
    let th = format!("text-align:left; padding:10px 12px; color:{}; font-size:11px; letter-spacing:0.08em; font-family:monospace; border-bottom:1px solid {};", p.subtle, p.border);
    let td = format!("padding:10px 12px; color:{}; font-size:13px; border-bottom:1px solid {};", p.muted, p.border);
    html! {
        <div style="max-width:960px; margin:0 auto; padding:0 1.5rem 4rem;">
            <header style="padding:5rem 0 2rem; text-align:center;">
                <h1 style={format!("margin:0 0 0.75rem; color:{};", p.text)}>
                    {"Docker "}<span style={format!("color:{};", p.accent)}>{"Architecture"}</span>
                </h1>
                <p style={format!("margin:0 auto; max-width:560px; color:{};", p.muted)}>
                    {"From registry to running container: each layer of the stack, with diagrams you can pan and zoom."}
                </p>
                <div style="display:flex; gap:8px; justify-content:center; flex-wrap:wrap; margin-top:1.5rem;">
                    { for SECTIONS.iter().map(|s| {
                        let (bg, border, color) = if *active == s.id {
                            (p.accent_soft, p.accent_border, p.accent)
                        } else {
                            (p.surface, p.border, p.muted)
                        };
                        html!{
                            <a href={format!("#{}", s.id)} style={format!("padding:0.35rem 0.8rem; border-radius:9999px; border:1px solid {border}; background:{bg}; color:{color}; font-size:12px; text-decoration:none; font-family:monospace; transition:background 0.2s, color 0.2s;")}>
                                { format!("{} {}", s.num, s.title) }
                            </a>
                        }
                    }) }
                </div>
            </header>
            { for SECTIONS.iter().map(|s| html!{ <SectionCard section={s} theme={props.theme} /> }) }
            <section style="padding-top:48px;">
                <h2 style={format!("color:{};", p.text)}>{"Quick reference"}</h2>
                <table style="width:100%; border-collapse:collapse;">
                    <thead><tr>
                        <th style={th.clone()}>{"CONCEPT"}</th>
                        <th style={th.clone()}>{"WHAT"}</th>
                        <th style={th.clone()}>{"COMMAND"}</th>
                        <th style={th}>{"NOTE"}</th>
                    </tr></thead>
                    <tbody>
                        { for SUMMARY.iter().map(|r| html!{ <tr>
                            <td style={format!("{td} color:{}; font-family:monospace;", p.accent)}>{ r.concept }</td>
                            <td style={td.clone()}>{ r.what }</td>
                            <td style={format!("{td} font-family:monospace;")}>{ r.cmd }</td>
                            <td style={td.clone()}>{ r.note }</td>
                        </tr> }) }
                    </tbody>
                </table>
            </section>
        </div>
    }
}
