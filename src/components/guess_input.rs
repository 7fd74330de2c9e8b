use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GuessInputProps {
    pub value: String,
    pub disabled: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(GuessInput)]
pub fn guess_input(props: &GuessInputProps) -> Html {
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let onkeydown = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let submit_btn = {
        let cb = props.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; gap:8px; margin-bottom:14px;">
        <input
            type="text"
            placeholder="Which station is this?"
            value={props.value.clone()}
            disabled={props.disabled}
            oninput={oninput}
            onkeydown={onkeydown}
            style="flex:1; padding:8px 10px; border:1px solid #d0d7de; border-radius:6px; font-size:14px;"
        />
        <button onclick={submit_btn} disabled={props.disabled} style="padding:8px 16px; border:none; border-radius:6px; background:#2f81f7; color:#fff;">{"Guess"}</button>
    </div>}
}
