use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::model::Theme;
use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    pub theme: Theme,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);
    let onclick = {
        let copied = copied.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = util::copy_to_clipboard(&text) {
                log::warn!("clipboard write failed: {e:?}");
            }
            copied.set(true);
            let copied = copied.clone();
            let reset = Closure::once_into_js(move || copied.set(false));
            if let Some(win) = web_sys::window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    reset.unchecked_ref(),
                    2000,
                );
            }
        })
    };
    let p = props.theme.palette();
    let color = if *copied { "#22c55e" } else { p.subtle };
    html! {
        <button {onclick} title="Copy" style={format!("background:none; border:none; cursor:pointer; color:{color}; font-size:11px; font-family:monospace; padding:2px 6px;")}>
            { if *copied { "copied" } else { "copy" } }
        </button>
    }
}
