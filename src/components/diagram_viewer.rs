use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, HtmlElement, MouseEvent, TouchEvent, TouchList, WheelEvent};
use yew::prelude::*;

use super::viewer_controls::ViewerControls;
use crate::model::{cursor_for, Point, Theme, Transform, ViewerConfig};
use crate::state::{TransformController, ZoomDirection};
use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct DiagramViewerProps {
    pub theme: Theme,
    #[prop_or_default]
    pub config: ViewerConfig,
    #[prop_or_default]
    pub children: Html,
}

/// What the render pass needs from the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ViewSnapshot {
    transform: Transform,
    /// Mouse drag only; drives the cursor.
    dragging: bool,
    /// Any drag or pinch; disables the transform transition.
    gesture_active: bool,
}

impl ViewSnapshot {
    fn of(c: &TransformController) -> Self {
        Self {
            transform: c.transform(),
            dragging: c.is_dragging(),
            gesture_active: c.gesture_active(),
        }
    }
}

type Controller = Rc<RefCell<TransformController>>;

/// A raw listener on the viewport, removed when dropped.
struct Listener {
    target: HtmlElement,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(target: &HtmlElement, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        // non-passive so prevent_default wins over native scroll/zoom
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("could not listen for {event}: {e:?}");
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

fn client_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

fn viewport_origin(el: &HtmlElement) -> Point {
    let rect = el.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

fn attach_listeners(
    el: &HtmlElement,
    controller: Controller,
    publish: Rc<dyn Fn(ViewSnapshot)>,
) -> Vec<Listener> {
    let mut out = Vec::new();

    // Wheel zoom at cursor
    {
        let (c, publish, el_w) = (controller.clone(), publish.clone(), el.clone());
        out.extend(Listener::attach(el, "wheel", move |e: Event| {
            e.prevent_default();
            let Some(w) = e.dyn_ref::<WheelEvent>() else {
                return;
            };
            let snap = {
                let mut ctl = c.borrow_mut();
                ctl.apply_wheel(client_point(w), w.delta_y(), viewport_origin(&el_w));
                ViewSnapshot::of(&ctl)
            };
            publish(snap);
        }));
    }

    // Touch: one finger pans, two pinch
    {
        let (c, publish) = (controller.clone(), publish.clone());
        out.extend(Listener::attach(el, "touchstart", move |e: Event| {
            e.prevent_default();
            e.stop_propagation();
            let Some(t) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            let snap = {
                let mut ctl = c.borrow_mut();
                ctl.begin_touch(&touch_points(&t.touches()));
                ViewSnapshot::of(&ctl)
            };
            publish(snap);
        }));
    }
    {
        let (c, publish, el_t) = (controller.clone(), publish.clone(), el.clone());
        out.extend(Listener::attach(el, "touchmove", move |e: Event| {
            e.prevent_default();
            e.stop_propagation();
            let Some(t) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            let snap = {
                let mut ctl = c.borrow_mut();
                ctl.continue_touch(&touch_points(&t.touches()), viewport_origin(&el_t));
                ViewSnapshot::of(&ctl)
            };
            publish(snap);
        }));
    }
    for event in ["touchend", "touchcancel"] {
        let (c, publish) = (controller.clone(), publish.clone());
        out.extend(Listener::attach(el, event, move |e: Event| {
            e.prevent_default();
            e.stop_propagation();
            let Some(t) = e.dyn_ref::<TouchEvent>() else {
                return;
            };
            let snap = {
                let mut ctl = c.borrow_mut();
                ctl.end_touch(&touch_points(&t.touches()));
                ViewSnapshot::of(&ctl)
            };
            publish(snap);
        }));
    }

    // Mouse drag
    {
        let (c, publish) = (controller.clone(), publish.clone());
        out.extend(Listener::attach(el, "mousedown", move |e: Event| {
            let Some(m) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let snap = {
                let mut ctl = c.borrow_mut();
                ctl.begin_drag(client_point(m));
                ViewSnapshot::of(&ctl)
            };
            publish(snap);
        }));
    }
    {
        let (c, publish) = (controller.clone(), publish.clone());
        out.extend(Listener::attach(el, "mousemove", move |e: Event| {
            let Some(m) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let snap = {
                let mut ctl = c.borrow_mut();
                if !ctl.is_dragging() {
                    return;
                }
                ctl.continue_drag(client_point(m));
                ViewSnapshot::of(&ctl)
            };
            publish(snap);
        }));
    }
    for event in ["mouseup", "mouseleave"] {
        let (c, publish) = (controller.clone(), publish.clone());
        out.extend(Listener::attach(el, event, move |_e: Event| {
            let snap = {
                let mut ctl = c.borrow_mut();
                ctl.end_drag();
                ViewSnapshot::of(&ctl)
            };
            publish(snap);
        }));
    }
    out
}

#[function_component(DiagramViewer)]
pub fn diagram_viewer(props: &DiagramViewerProps) -> Html {
    let container_ref = use_node_ref();
    let controller = use_mut_ref(|| TransformController::new(props.config.clone()));
    let view = use_state_eq(|| ViewSnapshot::of(&controller.borrow()));
    let touch_device = use_state(|| false);

    {
        let touch_device = touch_device.clone();
        use_effect_with((), move |_| {
            touch_device.set(util::is_touch_device());
            || ()
        });
    }
    {
        let controller = controller.clone();
        let view = view.clone();
        use_effect_with(props.config.clone(), move |cfg| {
            let snap = {
                let mut ctl = controller.borrow_mut();
                ctl.set_config(cfg.clone());
                ViewSnapshot::of(&ctl)
            };
            view.set(snap);
            || ()
        });
    }
    // Listeners are registered once; handlers read the controller cell, never captured state.
    {
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let setter = view.setter();
        use_effect_with((), move |_| {
            let publish: Rc<dyn Fn(ViewSnapshot)> = Rc::new(move |snap: ViewSnapshot| setter.set(snap));
            let listeners = match container_ref.cast::<HtmlElement>() {
                Some(el) => attach_listeners(&el, controller.clone(), publish),
                None => {
                    log::warn!("diagram viewport not mounted; gestures disabled");
                    Vec::new()
                }
            };
            move || {
                drop(listeners);
                controller.borrow_mut().cancel_gesture();
            }
        });
    }

    let button = |f: fn(&mut TransformController)| {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |_: ()| {
            let snap = {
                let mut ctl = controller.borrow_mut();
                f(&mut *ctl);
                ViewSnapshot::of(&ctl)
            };
            view.set(snap);
        })
    };
    let on_zoom_out = button(|c| c.zoom_step(ZoomDirection::Out));
    let on_zoom_in = button(|c| c.zoom_step(ZoomDirection::In));
    let on_reset = button(|c| c.reset());

    let palette = props.theme.palette();
    let snap = *view;
    let cursor = cursor_for(*touch_device, snap.dragging);
    let transition = if snap.gesture_active {
        "none".to_string()
    } else {
        format!("transform {}s", props.config.transition_secs)
    };
    let viewport_style = format!(
        "width:100%; height:100%; overflow:hidden; cursor:{cursor}; user-select:none; -webkit-user-select:none; touch-action:none; -webkit-touch-callout:none; -webkit-tap-highlight-color:transparent; background:{}; border:1px solid {}; border-radius:12px; outline:none;",
        palette.diagram_bg, palette.border
    );
    let layer_style = format!(
        "transform:{}; transform-origin:0 0; transition:{transition}; width:100%; height:100%; display:flex; align-items:center; justify-content:center; -webkit-user-select:none; -webkit-touch-callout:none; pointer-events:none;",
        snap.transform.projection()
    );

    html! {
        <div style="position:relative; width:100%; height:100%;">
            <div ref={container_ref} tabindex="-1" style={viewport_style}>
                <div style={layer_style}>{ props.children.clone() }</div>
            </div>
            <ViewerControls
                theme={props.theme}
                label={snap.transform.percent_label()}
                on_zoom_out={on_zoom_out}
                on_reset={on_reset}
                on_zoom_in={on_zoom_in}
            />
            <div style={format!("position:absolute; bottom:14px; left:14px; color:{}; font-size:10px; font-family:monospace;", palette.diagram_text)}>
                {"scroll · drag · pinch"}
            </div>
        </div>
    }
}
