use crate::catalog::Catalog;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GuessButtonsProps {
    pub catalog: Rc<Catalog>,
    pub disabled: bool,
    pub on_guess: Callback<String>,
}

#[function_component(GuessButtons)]
pub fn guess_buttons(props: &GuessButtonsProps) -> Html {
    let base = "padding:8px 12px; border:none; border-radius:6px; color:#fff; font-size:14px;";
    html! {<div style="display:flex; flex-wrap:wrap; gap:8px; margin-bottom:14px;">
        { for props.catalog.stations().iter().map(|station| {
            let name = station.name.clone();
            let cb = props.on_guess.clone();
            let onclick = Callback::from(move |_| cb.emit(name.clone()));
            let style = if props.disabled {
                format!("{} background:#8b949e; cursor:not-allowed;", base)
            } else {
                format!("{} background:#2f81f7; cursor:pointer;", base)
            };
            html! { <button key={station.id.clone()} onclick={onclick} disabled={props.disabled} style={style}>{ station.name.clone() }</button> }
        }) }
    </div>}
}
