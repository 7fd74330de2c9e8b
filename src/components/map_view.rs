use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::catalog::Coordinates;
use crate::config::GameConfig;
use crate::projection::{covering_tiles, screen_position};
use crate::state::{Drag, ViewState, drag_cursor};

const MARKER_PX: f64 = 24.0;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub config: Rc<GameConfig>,
    pub view: ViewState,
    pub marker: Option<Coordinates>,
    /// Pan/zoom input is ignored unless set.
    pub interactive: bool,
    pub on_view_change: Callback<ViewState>,
}

/// Raster tile map with a single marker. Purely a projection of `view`; user
/// movement is reported through `on_view_change` and never kept locally.
#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();
    let size = use_state(|| (0.0_f64, 0.0_f64));
    let drag = use_mut_ref(Drag::default);
    // Mirrors `drag.active` so the cursor re-renders on press and release
    let dragging = use_state(|| false);

    // Measure the container now and whenever the window resizes
    {
        let container_ref = container_ref.clone();
        let size = size.clone();
        use_effect_with((), move |_| {
            let measure = Rc::new(move || {
                if let Some(el) = container_ref.cast::<HtmlElement>() {
                    size.set((el.client_width() as f64, el.client_height() as f64));
                }
            });
            measure();
            let listener = web_sys::window().map(|win| {
                let measure = measure.clone();
                EventListener::new(&win, "resize", move |_| measure())
            });
            move || drop(listener)
        });
    }

    let (width, height) = *size;
    let view = props.view;

    let onmousedown = {
        let drag = drag.clone();
        let dragging = dragging.clone();
        let interactive = props.interactive;
        Callback::from(move |e: MouseEvent| {
            if interactive {
                e.prevent_default();
                drag.borrow_mut().begin(e.client_x() as f64, e.client_y() as f64);
                dragging.set(true);
            }
        })
    };
    let onmousemove = {
        let drag = drag.clone();
        let cb = props.on_view_change.clone();
        Callback::from(move |e: MouseEvent| {
            let delta = drag.borrow_mut().move_to(e.client_x() as f64, e.client_y() as f64);
            if let Some((dx, dy)) = delta {
                cb.emit(view.panned(dx, dy));
            }
        })
    };
    let end_drag = {
        let drag = drag.clone();
        let dragging = dragging.clone();
        Callback::from(move |_: MouseEvent| {
            drag.borrow_mut().end();
            if *dragging {
                dragging.set(false);
            }
        })
    };
    let onwheel = {
        let cb = props.on_view_change.clone();
        let interactive = props.interactive;
        Callback::from(move |e: WheelEvent| {
            if !interactive || e.delta_y() == 0.0 {
                return;
            }
            let delta = if e.delta_y() < 0.0 { 1.0 } else { -1.0 };
            cb.emit(view.zoomed(delta));
        })
    };

    let tiles = covering_tiles(view.center(), view.zoom, width, height);
    let marker = props.marker.map(|m| {
        let (x, y) = screen_position(m, view.center(), view.zoom, width, height);
        html! { <div style={format!(
            "position:absolute; left:{:.1}px; top:{:.1}px; width:{}px; height:{}px; transform:translate(-50%,-50%); \
             background:#ef4444; border:2px solid #fff; border-radius:50%; box-shadow:0 2px 6px rgba(0,0,0,0.4);",
            x, y, MARKER_PX, MARKER_PX
        )}></div> }
    });
    let cursor = drag_cursor(props.interactive, *dragging);

    html! {<div
        ref={container_ref}
        onmousedown={onmousedown}
        onmousemove={onmousemove}
        onmouseup={end_drag.clone()}
        onmouseleave={end_drag}
        onwheel={onwheel}
        style={format!("position:relative; width:100%; height:100%; overflow:hidden; background:#e5e3df; user-select:none; cursor:{};", cursor)}
    >
        { for tiles.iter().map(|t| html! {
            <img
                src={props.config.tile_src(t.z, t.x, t.y)}
                alt=""
                draggable="false"
                style={format!("position:absolute; left:{:.1}px; top:{:.1}px; width:{:.1}px; height:{:.1}px;", t.left, t.top, t.size, t.size)}
            />
        }) }
        { marker.unwrap_or_else(|| html! {}) }
        <div style="position:absolute; right:4px; bottom:2px; font-size:11px; background:rgba(255,255,255,0.7); padding:0 4px;">{"© OpenStreetMap contributors"}</div>
    </div>}
}
