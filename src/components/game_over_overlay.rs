use yew::prelude::*;

// The summary text itself is painted on the canvas; this only supplies the
// restart control, placed just under it.
#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    /// Button top edge as a fraction of the displayed scene height.
    pub top_fraction: f64,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <button
            id="btn-restart"
            onclick={restart_btn}
            style={format!("position:absolute; left:50%; top:{}%; transform:translateX(-50%); width:150px; padding:8px 0;", props.top_fraction * 100.0)}
        >
            {"Play Again"}
        </button>
    }
}
