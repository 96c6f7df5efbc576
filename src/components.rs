//! Pure Yew view components for the stopwatch card.
//!
//! Everything here renders from props; state lives in the stopwatch hook and
//! the theme context.

use std::f64::consts::PI;
use std::rc::Rc;
use stopwatch_widget::config::{RING_RADIUS, RING_SIZE, RING_STROKE_WIDTH};
use stopwatch_widget::{format_elapsed, minute_progress, LapRecord, Palette};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub label: &'static str,
    pub onclick: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button class="theme-toggle" onclick={props.onclick.reform(|_: MouseEvent| ())}>
            { props.label }
        </button>
    }
}

/// Circular progress ring around the formatted elapsed time.
///
/// The ring fills once per minute, advancing in whole seconds.
#[derive(Properties, PartialEq)]
pub struct DialProps {
    pub elapsed_ms: u64,
    pub palette: Palette,
}

#[function_component(Dial)]
pub fn dial(props: &DialProps) -> Html {
    let circumference = 2.0 * PI * RING_RADIUS;
    let progress = minute_progress(props.elapsed_ms) * circumference;
    let centre = (RING_SIZE / 2).to_string();
    let size = RING_SIZE.to_string();

    html! {
        <div class="dial">
            <svg width={size.clone()} height={size.clone()}
                viewBox={format!("0 0 {} {}", RING_SIZE, RING_SIZE)}
                style="transform: rotate(-90deg)">
                <circle
                    r={RING_RADIUS.to_string()}
                    cx={centre.clone()}
                    cy={centre.clone()}
                    stroke={props.palette.ring_track}
                    stroke-width={RING_STROKE_WIDTH.to_string()}
                    fill="transparent"
                />
                <circle
                    r={RING_RADIUS.to_string()}
                    cx={centre.clone()}
                    cy={centre}
                    stroke={props.palette.ring_fill}
                    stroke-width={RING_STROKE_WIDTH.to_string()}
                    fill="transparent"
                    style={format!(
                        "stroke-dasharray: {:.3}; stroke-dashoffset: {:.3}; transition: stroke-dashoffset 0.2s linear",
                        circumference,
                        circumference - progress
                    )}
                />
            </svg>
            <div class="dial-time" style={format!("color: {}", props.palette.digits)}>
                { format_elapsed(props.elapsed_ms) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub running: bool,
    pub on_toggle: Callback<()>,
    pub on_lap: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let (toggle_label, toggle_class) = if props.running {
        ("Pause", "btn btn-pause")
    } else {
        ("Start", "btn btn-start")
    };
    let lap_class = if props.running { "btn btn-lap" } else { "btn btn-lap disabled" };

    html! {
        <div class="controls">
            <button class={toggle_class} onclick={props.on_toggle.reform(|_: MouseEvent| ())}>
                { toggle_label }
            </button>
            <button class={lap_class}
                disabled={!props.running}
                onclick={props.on_lap.reform(|_: MouseEvent| ())}>
                { "Lap" }
            </button>
            <button class="btn btn-reset" onclick={props.on_reset.reform(|_: MouseEvent| ())}>
                { "Reset" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LapListProps {
    pub laps: Rc<Vec<LapRecord>>,
}

#[function_component(LapList)]
pub fn lap_list(props: &LapListProps) -> Html {
    if props.laps.is_empty() {
        return html! {
            <div class="laps">
                <p class="no-laps">{ "No laps recorded" }</p>
            </div>
        };
    }

    html! {
        <div class="laps">
            <ul>
                { props.laps.iter().map(|lap| html! {
                    <li key={lap.number} class="lap-row">
                        <span>{ format!("Lap {}", lap.number) }</span>
                        <span>{ format_elapsed(lap.elapsed_ms) }</span>
                    </li>
                }).collect::<Html>() }
            </ul>
        </div>
    }
}
