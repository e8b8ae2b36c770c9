use yew::prelude::*;

use crate::content::WSL_TOPICS;
use crate::model::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct WslPageProps {
    pub theme: Theme,
}

#[function_component(WslPage)]
pub fn wsl_page(props: &WslPageProps) -> Html {
    let p = props.theme.palette();
    html! {
        <div style="min-height:100vh; padding-bottom:4rem;">
            <header style={format!("padding:6rem 1.5rem 3rem; text-align:center; border-bottom:1px solid {};", p.border)}>
                <span style="display:inline-block; padding:0.4rem 0.875rem; border-radius:9999px; background:rgba(34,197,94,0.1); border:1px solid rgba(34,197,94,0.2); color:#22c55e; font-size:0.75rem; letter-spacing:0.05em; margin-bottom:1rem;">
                    {"WINDOWS SUBSYSTEM FOR LINUX"}
                </span>
                <h1 style={format!("color:{}; margin:0 0 0.75rem;", p.text)}>{"WSL "}<span style="color:#22c55e;">{"2"}</span></h1>
                <p style={format!("color:{}; max-width:500px; margin:0 auto;", p.muted)}>{"Run Linux natively on Windows. The best of both worlds."}</p>
            </header>
            <div style="max-width:800px; margin:0 auto; padding:3rem 1.5rem;">
                <div style={format!("padding:3rem; border-radius:16px; background:{}; border:1px solid {}; text-align:center;", p.surface, p.border)}>
                    <h2 style={format!("color:{}; margin:0 0 0.75rem;", p.text)}>{"Coming Soon"}</h2>
                    <p style={format!("color:{}; max-width:400px; margin:0 auto 1.5rem;", p.muted)}>
                        {"We're working on a comprehensive WSL guide. Check back soon!"}
                    </p>
                    <div style="display:flex; gap:0.75rem; justify-content:center; flex-wrap:wrap;">
                        { for WSL_TOPICS.iter().map(|(label, color)| html!{
                            <span style={format!("padding:0.4rem 0.875rem; border-radius:9999px; font-size:0.8rem; border:1px solid {color}; color:{color};")}>{ *label }</span>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}
