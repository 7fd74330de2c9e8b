use gloo::timers::callback::Timeout;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;
use yew::prelude::*;

use super::{
    confetti::Confetti, guess_buttons::GuessButtons, guess_input::GuessInput,
    map_controls::MapControls, map_view::MapView, settings_modal::SettingsModal,
    status_bar::StatusBar,
};
use crate::catalog::Catalog;
use crate::config::{GameConfig, GuessMode, Preferences};
use crate::model::{Game, GameAction};
use crate::state::{Celebration, CelebrationAction, ViewState, Viewport};
use crate::util::random_seed;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
    pub config: Rc<GameConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let game = {
        let catalog = props.catalog.clone();
        let config = props.config.clone();
        use_reducer(move || Game::new(catalog, config, ChaCha8Rng::seed_from_u64(random_seed())))
    };
    let viewport = {
        let config = props.config.clone();
        use_state(move || Viewport::new(&config))
    };
    let prefs = use_state(Preferences::load);
    let celebration = use_reducer(Celebration::default);
    let celebration_timer = use_mut_ref(|| None::<Timeout>);
    let open_settings = use_state(|| false);
    let guess_text = use_state(String::new);

    // First round once mounted
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            game.dispatch(GameAction::Start);
            || ()
        });
    }

    // Map follows round transitions (new station, zoom-out hint)
    {
        let viewport = viewport.clone();
        let round = game.round.clone();
        use_effect_with((round.round, round.zoom_level.to_bits()), move |_| {
            let mut vp = (*viewport).clone();
            if vp.sync(&round) {
                viewport.set(vp);
            }
            || ()
        });
    }

    // Fresh input for every round
    {
        let guess_text = guess_text.clone();
        use_effect_with(game.round.round, move |_| {
            guess_text.set(String::new());
            || ()
        });
    }

    // Confetti for a won round. Replacing the timer handle cancels a pending
    // expiry, and an expiry that still fires only clears its own round.
    {
        let celebration = celebration.clone();
        let timer = celebration_timer.clone();
        let round = game.round.round;
        let won = game.round.is_correct;
        let ms = props.config.celebration_ms;
        use_effect_with((round, won), move |_| {
            timer.borrow_mut().take();
            if won {
                celebration.dispatch(CelebrationAction::Show { round });
                let expire = celebration.clone();
                *timer.borrow_mut() = Some(Timeout::new(ms, move || {
                    log::debug!("celebration for round {round} expired");
                    expire.dispatch(CelebrationAction::Expire { round });
                }));
            } else {
                celebration.dispatch(CelebrationAction::Clear);
            }
            || ()
        });
    }

    // Remember display settings
    use_effect_with((*prefs).clone(), |p| {
        p.save();
        || ()
    });

    let on_guess = {
        let game = game.clone();
        Callback::from(move |name: String| game.dispatch(GameAction::Guess(name)))
    };
    let submit_text = {
        let game = game.clone();
        let guess_text = guess_text.clone();
        Callback::from(move |_| game.dispatch(GameAction::Guess((*guess_text).clone())))
    };
    let on_text_input = {
        let guess_text = guess_text.clone();
        Callback::from(move |text: String| guess_text.set(text))
    };
    let restart = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Start))
    };

    let on_view_change = {
        let viewport = viewport.clone();
        Callback::from(move |view: ViewState| {
            let mut vp = (*viewport).clone();
            vp.user_moved(view);
            viewport.set(vp);
        })
    };
    let on_zoom = {
        let cb = on_view_change.clone();
        let view = viewport.view;
        Callback::from(move |delta: f64| cb.emit(view.zoomed(delta)))
    };
    let on_pan = {
        let cb = on_view_change.clone();
        let view = viewport.view;
        Callback::from(move |(dx, dy): (f64, f64)| cb.emit(view.panned(dx, dy)))
    };
    let recenter = {
        let viewport = viewport.clone();
        let round = game.round.clone();
        Callback::from(move |_| {
            let mut vp = (*viewport).clone();
            vp.recenter(&round);
            viewport.set(vp);
        })
    };

    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(true))
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };
    let toggle_guess_mode = {
        let prefs = prefs.clone();
        Callback::from(move |_| {
            let mut p = (*prefs).clone();
            p.guess_mode = match p.guess_mode {
                GuessMode::Buttons => GuessMode::Text,
                GuessMode::Text => GuessMode::Buttons,
            };
            prefs.set(p);
        })
    };
    let toggle_interactive = {
        let prefs = prefs.clone();
        let recenter = recenter.clone();
        Callback::from(move |_| {
            let mut p = (*prefs).clone();
            p.interactive_map = !p.interactive_map;
            if !p.interactive_map {
                recenter.emit(());
            }
            prefs.set(p);
        })
    };

    let round = &game.round;
    let marker = round.current_station.as_ref().map(|s| s.coordinates);
    let guess_area = match prefs.guess_mode {
        GuessMode::Buttons => html! {
            <GuessButtons catalog={props.catalog.clone()} disabled={round.game_over} on_guess={on_guess} />
        },
        GuessMode::Text => html! {
            <GuessInput
                value={(*guess_text).clone()}
                disabled={round.game_over}
                on_input={on_text_input}
                on_submit={submit_text}
            />
        },
    };

    html! {<div style="height:100vh; display:flex; flex-direction:column; font-family:system-ui, sans-serif;">
        <Confetti show={celebration.is_showing()} />
        <div style="flex:1; position:relative;">
            <MapView
                config={props.config.clone()}
                view={viewport.view}
                marker={marker}
                interactive={prefs.interactive_map}
                on_view_change={on_view_change}
            />
            { if prefs.interactive_map {
                html! { <MapControls on_zoom={on_zoom} on_pan={on_pan} on_recenter={recenter} /> }
            } else { html! {} } }
            <button onclick={open_settings_cb} style="position:absolute; top:12px; right:12px; padding:6px 10px;">{"Settings"}</button>
            <SettingsModal
                show={*open_settings}
                on_close={close_settings_cb}
                guess_mode={prefs.guess_mode}
                on_toggle_guess_mode={toggle_guess_mode}
                interactive_map={prefs.interactive_map}
                on_toggle_interactive_map={toggle_interactive}
            />
        </div>
        <div style="padding:16px; background:#fff; box-shadow:0 -2px 8px rgba(0,0,0,0.12);">
            { guess_area }
            <StatusBar
                attempts={round.attempts}
                max_attempts={round.max_attempts}
                feedback={game.feedback.clone()}
                game_over={round.game_over}
                restart={restart}
            />
        </div>
    </div>}
}
