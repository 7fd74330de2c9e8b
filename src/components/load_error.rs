use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadErrorProps {
    pub message: String,
}

#[function_component]
pub fn LoadError(props: &LoadErrorProps) -> Html {
    html! {<div style="height:100vh; display:flex; align-items:center; justify-content:center; background:#f6f8fa;">
        <div style="max-width:480px; padding:24px 32px; border:2px solid #cf222e; border-radius:12px; background:#fff; text-align:center;">
            <h2 style="margin:0 0 12px 0; color:#cf222e;">{"The game could not start"}</h2>
            <p style="margin:4px 0; font-family:monospace; font-size:13px;">{ props.message.clone() }</p>
        </div>
    </div>}
}
