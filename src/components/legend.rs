use crate::models::TransitMap;
use leptos::*;

/// Overlay listing every line on the map with its colour swatch, in draw
/// order.
#[component]
pub fn Legend(map: ReadSignal<TransitMap>) -> impl IntoView {
    view! {
        <div class="legend">
            <div class="legend-header">"Lines"</div>
            <div class="legend-items">
                {move || map.with(|m| {
                    m.lines().iter().map(|line| {
                        let swatch_style = format!("background-color: {};", line.colour);
                        view! {
                            <div class="legend-item">
                                <span class="legend-swatch" style=swatch_style></span>
                                <span class="legend-name">{line.name.clone()}</span>
                            </div>
                        }
                    }).collect::<Vec<_>>()
                })}
            </div>
        </div>
    }
}
