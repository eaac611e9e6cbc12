use leptos::*;
use leptos_meta::*;

use crate::components::controls_hint::ControlsHint;
use crate::components::legend::Legend;
use crate::components::map_view::MapView;
use crate::data;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (map, _set_map) = create_signal(data::demo_network());

    view! {
        <Title text="Transit Map"/>

        <div class="app">
            <MapView map=map />
            <Legend map=map />
            <ControlsHint />
        </div>
    }
}
