use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub capacity: usize,
    pub duration_secs: u32,
    pub start: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_cb = props.start.clone();
    let start_btn = Callback::from(move |_| start_cb.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(27,94,32,0.92); border:2px solid #2E7D32; padding:24px 32px; border-radius:14px; max-width:460px; width:80%; color:#fff; font-size:14px; line-height:1.4;">
            <h2 style="margin:0 0 12px 0; font-size:22px; text-align:center;">{"Forest Planter"}</h2>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Click the brown ground strip to plant a tree (+10 points)."}</li>
                <li>{ format!("You have {} seconds and room for {} trees.", props.duration_secs, props.capacity) }</li>
                <li>{"Trees grow every second and darken once mature."}</li>
            </ul>
            <div style="display:flex; justify-content:center;">
                <button onclick={start_btn}>{"Start"}</button>
            </div>
        </div>
    }
}
