use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A canvas element paired with its 2D context.
///
/// Resolving the context once up front keeps the per-frame path free of JS
/// casts and gives lookup failures a concrete error message instead of a
/// silent no-op.
#[derive(Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas element by id and wrap it.
    ///
    /// # Errors
    ///
    /// Returns an error when no canvas with that id exists in the document,
    /// or when the element refuses to hand out a 2D context.
    pub fn from_element_id(id: &str) -> Result<Self, String> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| format!("No canvas found with id {id}"))?;

        Self::from_canvas(canvas)
    }

    /// Wrap an already-resolved canvas element.
    ///
    /// # Errors
    ///
    /// Returns an error when the element refuses to hand out a 2D context.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| format!("No 2D context found for canvas with id {}", canvas.id()))?;

        Ok(Self { canvas, context })
    }

    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    /// Backing store size in pixels.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    /// Resize the backing store. Clears any drawn content, as canvas resizes
    /// always do.
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_canvas(id: &str) -> HtmlCanvasElement {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("test runs in a browser");
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .expect("can create canvas")
            .dyn_into()
            .expect("element is a canvas");
        canvas.set_id(id);
        document
            .body()
            .expect("document has a body")
            .append_child(&canvas)
            .expect("can append canvas");
        canvas
    }

    #[wasm_bindgen_test]
    fn test_from_element_id_finds_mounted_canvas() {
        mount_canvas("surface-under-test");

        let surface = CanvasSurface::from_element_id("surface-under-test")
            .expect("canvas is in the document");

        surface.set_size(320, 240);
        assert_eq!(surface.size(), (320.0, 240.0));
    }

    #[wasm_bindgen_test]
    fn test_from_element_id_reports_missing_canvas() {
        let err = CanvasSurface::from_element_id("definitely-not-mounted")
            .expect_err("lookup must fail");

        assert_eq!(err, "No canvas found with id definitely-not-mounted");
    }

    #[wasm_bindgen_test]
    fn test_from_canvas_reports_unavailable_context() {
        let canvas = mount_canvas("surface-busy-canvas");

        // A canvas hands out at most one context kind; grabbing webgl first
        // makes the 2d request fail. Headless runners without webgl can't
        // set this situation up, so bail out there.
        if canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .is_none()
        {
            return;
        }

        let err = CanvasSurface::from_canvas(canvas).expect_err("2d context is taken");

        assert_eq!(err, "No 2D context found for canvas with id surface-busy-canvas");
    }

    #[wasm_bindgen_test]
    fn test_from_canvas_exposes_context() {
        let canvas = mount_canvas("surface-context-test");

        let surface = CanvasSurface::from_canvas(canvas).expect("2d context available");

        // A usable context accepts drawing calls
        surface.context().set_fill_style_str("#cef0d8");
        surface.context().fill_rect(0.0, 0.0, 10.0, 10.0);
    }
}
