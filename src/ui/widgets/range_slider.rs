//! Range slider widget
//!
//! Hosts a [`RangeSlider`] controller inside iced's widget tree. Mouse and
//! touch events become begin/continue/end calls on the controller; drawing
//! goes through a quad-filling [`DrawSurface`].
//!
//! The widget is controlled: the application passes the current
//! [`SliderState`] on every `view` and receives `on_change(lower, upper)`
//! whenever a drag commits new values.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::touch;
use iced::{
    Background, Color, Element, Event, Length, Pixels, Point, Rectangle, Shadow, Size, Theme,
    Vector,
};

use crate::features::Appearance;
use crate::slider::{DrawSurface, Geometry, Knob, Metrics, RangeSlider, RedrawRequest, SliderState};
use crate::ui::theme;

/// Dual-knob range slider widget
pub struct RangeSliderWidget<'a, Message> {
    state: SliderState,
    metrics: Metrics,
    on_change: Box<dyn Fn(f64, f64) -> Message + 'a>,
    on_release: Option<Message>,
    width: Length,
    height: f32,
    style: Box<dyn Fn(&Theme, Status) -> Style + 'a>,
}

impl<'a, Message> RangeSliderWidget<'a, Message>
where
    Message: Clone,
{
    pub fn new<F>(state: SliderState, on_change: F) -> Self
    where
        F: 'a + Fn(f64, f64) -> Message,
    {
        let metrics = Metrics::default();

        Self {
            state: state.validated(),
            height: metrics.min_height,
            metrics,
            on_change: Box::new(on_change),
            on_release: None,
            width: Length::Fill,
            style: Box::new(default_style),
        }
    }

    /// Message published when the drag ends
    pub fn on_release(mut self, on_release: Message) -> Self {
        self.on_release = Some(on_release);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Height of the widget, never below `metrics.min_height`
    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0.max(self.metrics.min_height);
        self
    }

    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.height = self.height.max(metrics.min_height);
        self.metrics = metrics;
        self
    }

    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }

    /// Use fixed colors from the settings instead of the theme
    pub fn appearance(self, appearance: Appearance) -> Self {
        let style = Style::from(&appearance);
        self.style(move |_theme, _status| style)
    }
}

/// Per-widget tree state: the controller plus the current stacking order
#[derive(Debug, Clone)]
struct State {
    slider: RangeSlider,
    front: Knob,
}

impl State {
    /// Bring the controller in line with the application's values and the laid-out size
    fn sync(&mut self, values: &SliderState, metrics: &Metrics, size: Size) {
        if self.slider.metrics() != metrics {
            self.slider.set_metrics(*metrics);
        }
        if self.slider.state() != values {
            self.slider.set_state(*values);
        }
        self.slider.set_size(size);
    }

    fn apply(&mut self, redraw: RedrawRequest) {
        if let Some(knob) = redraw.bring_to_front {
            self.front = knob;
        }
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for RangeSliderWidget<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            slider: RangeSlider::with_metrics(self.state, self.metrics),
            front: Knob::Upper,
        })
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        state.sync(&self.state, &self.metrics, bounds.size());

        let local = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(cursor_position) = cursor.position_over(bounds) {
                    let response = state.slider.begin_drag(local(cursor_position));
                    state.apply(response.redraw);

                    if response.accepted {
                        shell.capture_event();
                    }
                    if !response.redraw.is_empty() {
                        shell.request_redraw();
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if state.slider.is_dragging() {
                    let redraw = state.slider.end_drag();
                    state.apply(redraw);

                    if let Some(on_release) = self.on_release.clone() {
                        shell.publish(on_release);
                    }
                    shell.request_redraw();
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.slider.is_dragging() {
                    let redraw = state.slider.cancel_drag();
                    state.apply(redraw);
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if state.slider.is_dragging() {
                    if let Some(position) = cursor.land().position() {
                        let response = state.slider.continue_drag(local(position));
                        state.apply(response.redraw);

                        if response.value_changed {
                            // Later events in this batch must not see the old values
                            self.state = *state.slider.state();
                            shell.publish((self.on_change)(
                                self.state.lower_value,
                                self.state.upper_value,
                            ));
                            shell.request_redraw();
                        }
                    }
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let status = if state.slider.is_dragging() {
            Status::Dragged
        } else if cursor.is_over(bounds) {
            Status::Hovered
        } else {
            Status::Active
        };
        let style = (self.style)(theme, status);

        // Frames are derived from the values being shown, never cached ones
        let mut view = state.clone();
        view.sync(&self.state, &self.metrics, bounds.size());

        let mut surface = QuadSurface {
            renderer,
            origin: Vector::new(bounds.x, bounds.y),
            style: &style,
            shadow_offset: self.metrics.shadow_offset,
        };
        view.slider.draw(&mut surface, view.front);
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.slider.is_dragging() {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(layout.bounds()) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<RangeSliderWidget<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(slider: RangeSliderWidget<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(slider)
    }
}

/// Creates a new range slider
pub fn range_slider<'a, Message: Clone>(
    state: SliderState,
    on_change: impl Fn(f64, f64) -> Message + 'a,
) -> RangeSliderWidget<'a, Message> {
    RangeSliderWidget::new(state, on_change)
}

/// Paints the slider with filled quads at an absolute origin
struct QuadSurface<'a, Renderer> {
    renderer: &'a mut Renderer,
    origin: Vector,
    style: &'a Style,
    shadow_offset: f32,
}

impl<Renderer> DrawSurface for QuadSurface<'_, Renderer>
where
    Renderer: iced::advanced::Renderer,
{
    fn draw_track(&mut self, geometry: &Geometry, _state: &SliderState) {
        let track = translate(geometry.track, self.origin);

        self.renderer.fill_quad(
            renderer::Quad {
                bounds: track,
                border: Border {
                    radius: (track.height / 2.0).into(),
                    width: 0.0,
                    color: Color::TRANSPARENT,
                },
                ..renderer::Quad::default()
            },
            Background::Color(self.style.track),
        );

        if geometry.band.width > 0.0 {
            self.renderer.fill_quad(
                renderer::Quad {
                    bounds: translate(geometry.band, self.origin),
                    ..renderer::Quad::default()
                },
                Background::Color(self.style.band),
            );
        }
    }

    fn draw_knob(&mut self, _knob: Knob, frame: Rectangle, highlighted: bool) {
        let opacity = if highlighted {
            self.style.highlighted_opacity
        } else {
            1.0
        };
        let shape = knob_shape(translate(frame, self.origin), self.shadow_offset);

        self.renderer.fill_quad(
            renderer::Quad {
                bounds: shape,
                border: Border {
                    radius: (shape.height / 2.0).into(),
                    width: self.style.knob_border_width,
                    color: faded(self.style.knob_border, opacity),
                },
                shadow: Shadow {
                    color: faded(self.style.knob_shadow, opacity),
                    offset: Vector::new(0.0, self.shadow_offset),
                    blur_radius: 1.0,
                },
                ..renderer::Quad::default()
            },
            Background::Color(faded(self.style.knob, opacity)),
        );
    }
}

fn translate(rect: Rectangle, origin: Vector) -> Rectangle {
    Rectangle {
        x: rect.x + origin.x,
        y: rect.y + origin.y,
        ..rect
    }
}

/// Visible knob inside its frame, leaving room for the shadow
fn knob_shape(frame: Rectangle, shadow_offset: f32) -> Rectangle {
    Rectangle {
        x: frame.x + shadow_offset,
        y: frame.y + shadow_offset,
        width: (frame.width - shadow_offset * 2.0).max(0.0),
        height: (frame.height - shadow_offset * 2.0).max(0.0),
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Status of the range slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Hovered,
    Dragged,
}

/// Colors of the range slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Track outside the band
    pub track: Color,
    /// Band between the knobs
    pub band: Color,
    pub knob: Color,
    pub knob_border: Color,
    pub knob_border_width: f32,
    pub knob_shadow: Color,
    /// Knob opacity while highlighted
    pub highlighted_opacity: f32,
}

impl From<&Appearance> for Style {
    fn from(appearance: &Appearance) -> Self {
        let color = |[r, g, b, a]: [f32; 4]| Color::from_rgba(r, g, b, a);

        Self {
            track: color(appearance.track),
            band: color(appearance.band),
            knob: color(appearance.knob),
            knob_border: color(appearance.knob_border),
            knob_border_width: appearance.knob_border_width,
            knob_shadow: color(appearance.knob_shadow),
            highlighted_opacity: appearance.highlighted_opacity.clamp(0.0, 1.0),
        }
    }
}

fn default_style(theme: &Theme, _status: Status) -> Style {
    Style {
        track: theme::track(theme),
        band: theme::ACCENT,
        ..Style::from(&Appearance::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_appearance() {
        let style = Style::from(&Appearance::default());
        assert_eq!(style.knob, Color::WHITE);
        assert_eq!(style.knob_shadow, Color::from_rgba(0.0, 0.0, 0.0, 0.16));
        assert_eq!(style.highlighted_opacity, 0.88);
    }

    #[test]
    fn test_style_clamps_opacity() {
        let appearance = Appearance {
            highlighted_opacity: 3.0,
            ..Default::default()
        };
        assert_eq!(Style::from(&appearance).highlighted_opacity, 1.0);
    }

    #[test]
    fn test_knob_shape_leaves_room_for_shadow() {
        let frame = Rectangle {
            x: 10.0,
            y: 2.0,
            width: 28.0,
            height: 28.0,
        };
        let shape = knob_shape(frame, 2.0);
        assert_eq!(shape.x, 12.0);
        assert_eq!(shape.y, 4.0);
        assert_eq!(shape.width, 24.0);
        assert_eq!(shape.height, 24.0);
    }

    #[test]
    fn test_faded_scales_alpha_only() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.5);
        let faded = faded(color, 0.5);
        assert_eq!(faded.a, 0.25);
        assert_eq!(faded.r, color.r);
    }

    #[test]
    fn test_translate_moves_to_absolute_origin() {
        let rect = Rectangle {
            x: -2.0,
            y: 2.0,
            width: 28.0,
            height: 28.0,
        };
        let moved = translate(rect, Vector::new(100.0, 50.0));
        assert_eq!(moved.x, 98.0);
        assert_eq!(moved.y, 52.0);
        assert_eq!(moved.width, 28.0);
    }

    #[test]
    fn test_sync_follows_application_values() {
        let mut state = State {
            slider: RangeSlider::default(),
            front: Knob::Upper,
        };
        let values = SliderState {
            lower_value: 3.0,
            upper_value: 4.0,
            ..Default::default()
        };

        state.sync(&values, &Metrics::default(), Size::new(128.0, 32.0));

        assert_eq!(state.slider.state(), &values);
        assert_eq!(state.slider.size(), Size::new(128.0, 32.0));
    }

    #[test]
    fn test_apply_records_z_order_hint() {
        let mut state = State {
            slider: RangeSlider::default(),
            front: Knob::Upper,
        };
        state.apply(RedrawRequest::knob(Knob::Lower).front(Knob::Lower));
        assert_eq!(state.front, Knob::Lower);

        state.apply(RedrawRequest::all());
        assert_eq!(state.front, Knob::Lower, "No hint keeps the current order");
    }
}
