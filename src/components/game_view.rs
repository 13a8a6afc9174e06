use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::input::{to_scene, ViewRect};
use crate::model::{GameAction, GameState};
use crate::render::{render, CanvasSurface};
use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub state: UseReducerHandle<GameState>,
}

fn draw(canvas: &HtmlCanvasElement, state: &GameState) {
    if !canvas.is_connected() {
        return;
    }
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(c) => c,
        None => {
            cwarn("canvas has no 2d context; frame skipped");
            return;
        }
    };
    let mut surface = CanvasSurface::new(&ctx);
    render(&state.world, &state.config, state.phase, &mut surface);
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();

    // Mount: size the canvas and wire the click listener.
    {
        let canvas_ref = canvas_ref.clone();
        let dispatcher = props.state.dispatcher();
        let (scene_w, scene_h) = (props.state.config.width, props.state.config.height);
        use_effect_with((), move |_| {
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let click_cb = canvas.as_ref().map(|canvas| {
                canvas.set_width(scene_w.max(0.0) as u32);
                canvas.set_height(scene_h.max(0.0) as u32);
                let canvas_cb = canvas.clone();
                let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let rect = ViewRect::from(&canvas_cb.get_bounding_client_rect());
                    let (x, y) = to_scene(
                        e.client_x() as f64,
                        e.client_y() as f64,
                        rect,
                        scene_w,
                        scene_h,
                    );
                    dispatcher.dispatch(GameAction::Plant { x, y });
                }) as Box<dyn FnMut(_)>);
                if canvas
                    .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    cwarn("failed to attach click listener");
                }
                cb
            });
            if canvas.is_none() {
                cwarn("game canvas not mounted");
            }
            move || {
                if let (Some(canvas), Some(cb)) = (canvas, click_cb) {
                    let _ = canvas
                        .remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    // Redraw whenever the reducer applied an action.
    {
        let canvas_ref = canvas_ref.clone();
        let state = props.state.clone();
        use_effect_with(props.state.version, move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw(&canvas, &state);
            }
            || ()
        });
    }

    html! {
        <canvas ref={canvas_ref} id="game-canvas" style="display:block; cursor:pointer;" />
    }
}
