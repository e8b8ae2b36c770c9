use super::{
    docker_page::DockerPage, footer::Footer, home_page::HomePage, navbar::Navbar,
    wsl_page::WslPage,
};
use crate::model::{Page, Theme};
use crate::storage;
use yew::prelude::*;

// Shared so navbar/footer can read and flip the theme without prop drilling
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(|| Page::Home);
    let theme = use_state(|| match storage::load_theme() {
        Ok(saved) => saved.unwrap_or_default(),
        Err(e) => {
            log::warn!("theme preference not loaded: {e}");
            Theme::default()
        }
    });

    // Apply + persist theme changes
    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let _ = body.class_list().toggle_with_force("light", !theme.is_dark());
            }
            if let Err(e) = storage::save_theme(*theme) {
                log::warn!("theme preference not saved: {e}");
            }
            || ()
        });
    }

    let navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            page.set(next);
            if let Some(win) = web_sys::window() {
                win.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };
    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggle()))
    };
    let ctx = ThemeContext {
        theme: *theme,
        toggle,
    };
    let p = theme.palette();

    let content = match *page {
        Page::Home => html! { <HomePage theme={*theme} on_navigate={navigate.clone()} /> },
        Page::Docker => html! { <DockerPage theme={*theme} /> },
        Page::Wsl => html! { <WslPage theme={*theme} /> },
    };

    html! {
        <ContextProvider<ThemeContext> context={ctx}>
            <div style={format!("min-height:100vh; background:{}; color:{};", p.bg, p.text)}>
                <Navbar page={*page} on_navigate={navigate.clone()} />
                <main style="padding-top:10px;">{ content }</main>
                <Footer on_navigate={navigate} />
            </div>
        </ContextProvider<ThemeContext>>
    }
}
