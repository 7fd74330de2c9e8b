use crate::model::{Feedback, Tone};
use crate::util::attempts_label;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBarProps {
    pub attempts: u32,
    pub max_attempts: u32,
    pub feedback: Option<Feedback>,
    pub game_over: bool,
    pub restart: Callback<()>,
}

#[function_component]
pub fn StatusBar(props: &StatusBarProps) -> Html {
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let feedback = match &props.feedback {
        Some(fb) => {
            let color = match fb.tone {
                Tone::Success => "#1a7f37",
                Tone::Hint => "#9a6700",
                Tone::Failure => "#cf222e",
            };
            html! { <p style={format!("margin:0; color:{};", color)}>{ fb.text.clone() }</p> }
        }
        None => html! {},
    };
    html! {<div style="display:flex; justify-content:space-between; align-items:center; gap:12px;">
        <div style="font-variant-numeric:tabular-nums;">{ attempts_label(props.attempts, props.max_attempts) }</div>
        <div style="display:flex; align-items:center; gap:16px;">
            { feedback }
            { if props.game_over {
                html! { <button onclick={restart_btn} style="padding:8px 16px; border:none; border-radius:6px; background:#1f883d; color:#fff;">{"Play Again"}</button> }
            } else { html! {} } }
        </div>
    </div>}
}
