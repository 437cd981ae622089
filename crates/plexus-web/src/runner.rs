use std::rc::Rc;

use plexus_engine::core::constants::FRAMED_BACKDROP;
use plexus_engine::{ParticleField, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use crate::canvas::CanvasSurface;
use crate::error::{describe, MountError};
use crate::scheduler::RafScheduler;

type Field = ParticleField<RafScheduler, CanvasSurface>;

/// How the field is dressed inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Transparent; the page background shows through.
    #[default]
    Bare,
    /// Solid white backdrop behind the particles.
    Framed,
}

/// A DOM listener that unregisters itself on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, MountError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|err| MountError::Listener {
                kind,
                detail: describe(&err),
            })?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// A particle field mounted into a page element.
///
/// Owns the render loop and every DOM listener; dropping the runner
/// releases all of them together.
pub struct FieldRunner {
    field: Rc<Field>,
    listeners: Vec<Listener>,
}

impl FieldRunner {
    /// Mount into the element with id `container_id`, reusing a `<canvas>`
    /// child if there is one.
    pub fn mount(container_id: &str, variant: Variant, seed: u64) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| MountError::ContainerNotFound(container_id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MountError::NotHtmlElement(container_id.to_string()))?;

        let canvas = find_or_create_canvas(&document, &container)?;
        let surface = CanvasSurface::acquire(canvas.clone())?;

        let size = measure(&container);
        surface.fit(size, window.device_pixel_ratio());

        let backdrop = match variant {
            Variant::Bare => None,
            Variant::Framed => Some(FRAMED_BACKDROP),
        };
        let field = Rc::new(
            ParticleField::new(RafScheduler::new(window.clone()), seed).with_backdrop(backdrop),
        );
        field.mount(surface, size);

        let listeners = match attach_listeners(&window, &container, &canvas, &field) {
            Ok(listeners) => listeners,
            Err(err) => {
                field.unmount();
                return Err(err);
            }
        };

        Ok(Self { field, listeners })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }
}

impl Drop for FieldRunner {
    fn drop(&mut self) {
        self.listeners.clear();
        self.field.unmount();
    }
}

fn find_or_create_canvas(
    document: &Document,
    container: &HtmlElement,
) -> Result<HtmlCanvasElement, MountError> {
    if let Ok(Some(existing)) = container.query_selector("canvas") {
        if let Ok(canvas) = existing.dyn_into::<HtmlCanvasElement>() {
            return Ok(canvas);
        }
    }

    let canvas = document
        .create_element("canvas")
        .map_err(|err| MountError::Canvas(describe(&err)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::Canvas("created element is not a canvas".into()))?;
    let _ = canvas.set_attribute("aria-hidden", "true");
    let style = canvas.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("inset", "0");
    container
        .append_child(&canvas)
        .map_err(|err| MountError::Canvas(describe(&err)))?;
    Ok(canvas)
}

fn measure(container: &HtmlElement) -> Size {
    Size::sanitized(container.client_width() as f32, container.client_height() as f32)
}

/// Pointer position relative to the canvas' top-left corner.
fn local_point(canvas: &HtmlCanvasElement, event: &Event) -> Option<(f32, f32)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let rect = canvas.get_bounding_client_rect();
    Some((
        (mouse.client_x() as f64 - rect.left()) as f32,
        (mouse.client_y() as f64 - rect.top()) as f32,
    ))
}

fn attach_listeners(
    window: &Window,
    container: &HtmlElement,
    canvas: &HtmlCanvasElement,
    field: &Rc<Field>,
) -> Result<Vec<Listener>, MountError> {
    let mut listeners = Vec::with_capacity(4);

    {
        let (field, win, container) = (Rc::clone(field), window.clone(), container.clone());
        listeners.push(Listener::attach(window, "resize", move |_| {
            let size = measure(&container);
            let ratio = win.device_pixel_ratio();
            field.with_surface(|surface| surface.fit(size, ratio));
            field.resize(size);
        })?);
    }
    {
        let (field, canvas) = (Rc::clone(field), canvas.clone());
        listeners.push(Listener::attach(container, "pointermove", move |event| {
            if let Some((x, y)) = local_point(&canvas, &event) {
                field.on_pointer_move(x, y);
            }
        })?);
    }
    {
        let field = Rc::clone(field);
        listeners.push(Listener::attach(container, "pointerleave", move |_| {
            field.on_pointer_leave();
        })?);
    }
    {
        let (field, canvas) = (Rc::clone(field), canvas.clone());
        listeners.push(Listener::attach(container, "pointerdown", move |event| {
            if let Some((x, y)) = local_point(&canvas, &event) {
                field.on_pointer_down(x, y);
            }
        })?);
    }

    Ok(listeners)
}
