use yew::prelude::*;

const PAN_STEP_PX: f64 = 96.0;

#[derive(Properties, PartialEq, Clone)]
pub struct MapControlsProps {
    pub on_zoom: Callback<f64>,
    pub on_pan: Callback<(f64, f64)>,
    pub on_recenter: Callback<()>,
}

#[function_component(MapControls)]
pub fn map_controls(props: &MapControlsProps) -> Html {
    let zoom = |delta: f64| {
        let cb = props.on_zoom.clone();
        Callback::from(move |_| cb.emit(delta))
    };
    let pan = |dx: f64, dy: f64| {
        let cb = props.on_pan.clone();
        Callback::from(move |_| cb.emit((dx, dy)))
    };
    let recenter = {
        let cb = props.on_recenter.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(255,255,255,0.92); border:1px solid #d0d7de; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zoom(-1.0)}> {"-"} </button>
        <button onclick={zoom(1.0)}> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={pan(PAN_STEP_PX, 0.0)}> {"←"} </button>
        <button onclick={pan(0.0, PAN_STEP_PX)}> {"↑"} </button>
        <button onclick={pan(0.0, -PAN_STEP_PX)}> {"↓"} </button>
        <button onclick={pan(-PAN_STEP_PX, 0.0)}> {"→"} </button>
        <span style="width:8px;"></span>
        <button onclick={recenter}> {"Recenter"} </button>
    </div>}
}
