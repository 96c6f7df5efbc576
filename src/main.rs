//! Stopwatch widget front-end using Yew.
//! Wires the theme context, the stopwatch hook and the view components.

use stopwatch_widget::config::LOG_LEVEL;
use stopwatch_widget::{RunState, ThemeAction, ThemeContext, ThemeState};
use yew::prelude::*;

mod audio;
mod components;
mod hooks;
mod ticker;

use components::{Controls, Dial, LapList, ThemeToggle};
use hooks::use_stopwatch;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the theme flag and shares it with every descendant.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(ThemeState::default);

    // Keep the page background in step with the flag
    use_effect_with(*theme, |theme| {
        let body = gloo_utils::body();
        body.set_class_name(theme.body_class());
        if let Err(e) = body
            .style()
            .set_property("background", theme.palette().page_background)
        {
            log::warn!("Could not apply page background: {:?}", e);
        }
        || ()
    });

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

/// The stopwatch card: theme toggle, dial, controls and lap list.
#[function_component(StopwatchCard)]
fn stopwatch_card() -> Html {
    let stopwatch = use_stopwatch();
    let Some(theme) = use_context::<ThemeContext>() else {
        return html! { <p>{ "Theme context missing" }</p> };
    };
    let palette = theme.palette();

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.dispatch(ThemeAction::Toggle))
    };

    html! {
        <div class="stopwatch-page">
            <div class={palette.card_class}>
                <ThemeToggle label={theme.toggle_label()} onclick={on_theme_toggle} />

                <h2 class="title">{ "⏱ Stopwatch" }</h2>

                <Dial elapsed_ms={stopwatch.elapsed_ms} palette={palette} />

                <Controls
                    running={stopwatch.state == RunState::Running}
                    on_toggle={stopwatch.on_toggle.clone()}
                    on_lap={stopwatch.on_lap.clone()}
                    on_reset={stopwatch.on_reset.clone()}
                />

                <LapList laps={stopwatch.laps.clone()} />
            </div>
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ThemeProvider>
            <StopwatchCard />
        </ThemeProvider>
    }
}

/// Entry point: installs logging and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    log::info!("Starting stopwatch widget");
    yew::Renderer::<App>::new().render();
}
