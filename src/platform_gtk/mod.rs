use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::Sparkline;
use crate::interaction::SurfaceBounds;
use crate::render::{CairoContextRenderer, Renderer};

/// Hosts a sparkline in a `gtk4::DrawingArea`.
///
/// Pointer motion, touch drags and pointer leave feed the sparkline's hover
/// state machine; the frame is stretched to the widget size like an SVG with
/// `preserveAspectRatio="none"`.
pub struct GtkSparklineAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    area: gtk::DrawingArea,
    sparkline: Rc<RefCell<Sparkline<R>>>,
}

impl<R> GtkSparklineAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(sparkline: Sparkline<R>) -> Self {
        let geometry = sparkline.geometry();
        let area = gtk::DrawingArea::new();
        area.set_content_width(geometry.viewport.width as i32);
        area.set_content_height(geometry.viewport.height as i32);

        let sparkline = Rc::new(RefCell::new(sparkline));

        let draw_state = Rc::clone(&sparkline);
        area.set_draw_func(move |_area, context, width, height| {
            let mut chart = draw_state.borrow_mut();
            let geometry = chart.geometry();
            context.scale(
                f64::from(width) / geometry.width(),
                f64::from(height) / geometry.height(),
            );
            if let Err(err) = chart.render_on_cairo_context(context) {
                warn!(error = %err, "sparkline draw failed");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let motion_state = Rc::clone(&sparkline);
        let motion_area = area.downgrade();
        motion.connect_motion(move |_controller, x, _y| {
            let Some(area) = motion_area.upgrade() else {
                return;
            };
            let surface = SurfaceBounds::new(0.0, f64::from(area.width()));
            motion_state.borrow_mut().handle_pointer_move(x, surface);
            area.queue_draw();
        });
        let leave_state = Rc::clone(&sparkline);
        let leave_area = area.downgrade();
        motion.connect_leave(move |_controller| {
            leave_state.borrow_mut().handle_pointer_leave();
            if let Some(area) = leave_area.upgrade() {
                area.queue_draw();
            }
        });
        area.add_controller(motion);

        let touch = gtk::GestureDrag::new();
        touch.set_touch_only(true);
        let touch_state = Rc::clone(&sparkline);
        let touch_area = area.downgrade();
        touch.connect_drag_update(move |gesture, offset_x, _offset_y| {
            let (Some(area), Some((start_x, _start_y))) =
                (touch_area.upgrade(), gesture.start_point())
            else {
                return;
            };
            let surface = SurfaceBounds::new(0.0, f64::from(area.width()));
            touch_state
                .borrow_mut()
                .handle_touch_move(&[start_x + offset_x], surface);
            area.queue_draw();
        });
        area.add_controller(touch);

        Self { area, sparkline }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Mutates the hosted sparkline and schedules a redraw.
    pub fn update<T>(&self, f: impl FnOnce(&mut Sparkline<R>) -> T) -> T {
        let result = f(&mut self.sparkline.borrow_mut());
        self.area.queue_draw();
        result
    }
}
