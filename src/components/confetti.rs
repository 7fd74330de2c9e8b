use yew::prelude::*;

const PIECES: u32 = 90;
const COLORS: [&str; 6] = ["#f85149", "#2f81f7", "#1f883d", "#d29922", "#a371f7", "#f778ba"];

const KEYFRAMES: &str = "@keyframes confetti-fall { \
    0% { transform: translateY(-10vh) rotate(0deg); opacity: 1; } \
    100% { transform: translateY(110vh) rotate(720deg); opacity: 0.6; } }";

// Cheap deterministic scatter so every piece gets its own lane and timing.
fn scatter(i: u32, salt: u32) -> f64 {
    let h = i.wrapping_mul(2_654_435_761).wrapping_add(salt.wrapping_mul(40_503)) >> 8;
    (h % 10_000) as f64 / 10_000.0
}

#[derive(Properties, PartialEq, Clone)]
pub struct ConfettiProps {
    pub show: bool,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {<div style="position:fixed; inset:0; pointer-events:none; overflow:hidden; z-index:40;">
        <style>{ KEYFRAMES }</style>
        { for (0..PIECES).map(|i| {
            let left = scatter(i, 1) * 100.0;
            let delay = scatter(i, 2) * 1.5;
            let duration = 2.5 + scatter(i, 3) * 2.0;
            let w = 6.0 + scatter(i, 4) * 6.0;
            let color = COLORS[(i as usize) % COLORS.len()];
            let style = format!(
                "position:absolute; top:0; left:{:.2}%; width:{:.1}px; height:{:.1}px; background:{}; \
                 animation:confetti-fall {:.2}s linear {:.2}s infinite;",
                left, w, w * 0.45, color, duration, delay
            );
            html! { <span style={style}></span> }
        }) }
    </div>}
}
