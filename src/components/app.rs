use super::{game_over_overlay::GameOverOverlay, game_view::GameView, intro_overlay::IntroOverlay};
use crate::config::GameConfig;
use crate::model::{GameAction, GameState, Phase};
use crate::util::cwarn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| GameState::new(GameConfig::load()));

    // Start straight away unless the intro screen should wait for the player.
    {
        let dispatcher = state.dispatcher();
        let autostart = state.config.autostart;
        use_effect_with((), move |_| {
            if autostart {
                dispatcher.dispatch(GameAction::Start);
            }
            || ()
        });
    }

    // Tick source: one interval per running session. Any phase or session
    // change runs the cleanup first, so at most one interval is ever live.
    {
        let dispatcher = state.dispatcher();
        let interval_ms = state.config.tick_interval_ms;
        use_effect_with((state.phase, state.session), move |&(phase, session)| {
            let mut live = None;
            if phase == Phase::Running {
                if let Some(win) = web_sys::window() {
                    let tick = Closure::wrap(Box::new(move || {
                        dispatcher.dispatch(GameAction::Tick { session });
                    }) as Box<dyn FnMut()>);
                    match win.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        interval_ms.min(i32::MAX as u32) as i32,
                    ) {
                        Ok(id) => live = Some((win, id, tick)),
                        Err(_) => cwarn("could not start the tick interval"),
                    }
                }
            }
            move || {
                if let Some((win, id, _tick)) = live {
                    win.clear_interval_with_handle(id);
                }
            }
        });
    }

    let start = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(GameAction::Start))
    };
    let restart = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(GameAction::Restart))
    };

    let cfg = &state.config;
    html! {
        <div id="root" style={format!("position:relative; width:{}px; margin:24px auto;", cfg.width)}>
            <GameView state={state.clone()} />
            <IntroOverlay
                show={state.phase == Phase::NotStarted}
                capacity={cfg.capacity}
                duration_secs={cfg.duration_ticks}
                start={start}
            />
            <GameOverOverlay
                show={state.restart_available()}
                top_fraction={cfg.restart_top_fraction()}
                restart={restart}
            />
        </div>
    }
}
