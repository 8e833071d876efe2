use crate::core::Viewport;
use crate::render::{LinePrimitive, RenderFrame, TextPrimitive};

use super::{AxisStyle, RenderedTick};

/// Turns laid-out ticks into draw primitives, keeping their order.
#[must_use]
pub fn build_axis_render_frame(
    ticks: &[RenderedTick],
    viewport: Viewport,
    style: &AxisStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    frame.lines.reserve(ticks.len());

    for tick in ticks {
        frame.lines.push(LinePrimitive::horizontal(
            f64::from(tick.pixel_y),
            f64::from(tick.line_length),
            style.line_stroke_width,
            tick.color,
        ));

        if let Some(label) = &tick.label {
            frame.texts.push(TextPrimitive::new(
                label.text.clone(),
                label.x,
                label.y,
                style.label_font_size_px,
                style.label_color,
            ));
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::build_axis_render_frame;
    use crate::api::{AxisStyle, LabelPlacement, RenderedLabel, RenderedTick};
    use crate::core::Viewport;
    use crate::render::Color;

    #[test]
    fn every_tick_becomes_a_line_and_labels_become_texts() {
        let style = AxisStyle::default();
        let ticks = vec![
            RenderedTick {
                level: 1,
                value: 0.5,
                pixel_y: 25,
                line_length: 8,
                color: Color::rgba(0.5, 0.5, 0.5, 0.2),
                label: None,
            },
            RenderedTick {
                level: 0,
                value: 0.0,
                pixel_y: 50,
                line_length: 20,
                color: Color::rgba(0.5, 0.5, 0.5, 0.5),
                label: Some(RenderedLabel {
                    text: "0.00".to_owned(),
                    x: 4.0,
                    y: 38.0,
                    width: 16.0,
                    height: 12.0,
                    placement: LabelPlacement::Above,
                }),
            },
        ];

        let frame = build_axis_render_frame(&ticks, Viewport::new(20, 100), &style);
        frame.validate().expect("valid frame");

        assert_eq!(frame.lines.len(), 2);
        assert_eq!(frame.lines[0].y1, 25.0);
        assert_eq!(frame.lines[0].x2, 8.0);
        assert_eq!(frame.lines[1].x2, 20.0);
        assert_eq!(frame.texts.len(), 1);
        assert_eq!(frame.texts[0].text, "0.00");
        assert_eq!(frame.texts[0].color, style.label_color);
    }
}
