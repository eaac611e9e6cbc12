use leptos::{component, view, IntoView};

/// Render a keyboard key or mouse action as a key cap
#[component]
#[must_use]
fn KeyCap(
    /// The key text to display
    text: &'static str,
) -> impl IntoView {
    view! {
        <span class="key-cap">{text}</span>
    }
}

/// Static corner hint explaining how to move around the map.
#[component]
#[must_use]
pub fn ControlsHint() -> impl IntoView {
    view! {
        <div class="canvas-controls-hint">
            <div class="hint-line">
                "Pan: "
                <KeyCap text="Drag" />
            </div>
            <div class="hint-line">
                "Zoom: "
                <KeyCap text="Scroll" />
            </div>
        </div>
    }
}
