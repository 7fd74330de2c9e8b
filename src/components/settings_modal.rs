use crate::config::GuessMode;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub guess_mode: GuessMode,
    pub on_toggle_guess_mode: Callback<()>,
    pub interactive_map: bool,
    pub on_toggle_interactive_map: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_mode_cb = {
        let cb = props.on_toggle_guess_mode.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_interactive_cb = {
        let cb = props.on_toggle_interactive_map.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.45); z-index:50;">
        <div style="background:#fff; border:1px solid #d0d7de; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.guess_mode == GuessMode::Text} onclick={toggle_mode_cb} />
                    <span>{"Type the station name instead of picking a button"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.interactive_map} onclick={toggle_interactive_cb} />
                    <span>{"Let me pan and zoom the map"}</span>
                </label>
            </div>
            <button onclick={close_cb} style="align-self:flex-end;">{"Done"}</button>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Settings are remembered in this browser. Rounds are not."}</div>
        </div>
    </div>}
}
