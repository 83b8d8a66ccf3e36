/// Indeterminate busy indicator
/// A rotating arc drawn on a canvas while analysis or editing runs
use iced::widget::canvas::{self, path::Arc, Path, Stroke};
use iced::{mouse, Color, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

use crate::Message;

const STROKE_WIDTH: f32 = 3.0;
/// Length of the moving arc
const SWEEP: f32 = TAU * 0.3;
/// Rotation per animation tick
const STEP: f32 = 0.35;

#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    /// Start angle of the arc in radians
    pub rotation: f32,
}

impl Spinner {
    /// Rotation after one more tick, wrapped to a full turn
    pub fn advanced(self) -> Self {
        Spinner {
            rotation: (self.rotation + STEP) % TAU,
        }
    }
}

impl canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (bounds.width.min(bounds.height) / 2.0 - STROKE_WIDTH).max(1.0);

        let primary = theme.palette().primary;
        let track = Color { a: 0.2, ..primary };

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_color(track).with_width(STROKE_WIDTH),
        );

        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(self.rotation),
                end_angle: Radians(self.rotation + SWEEP),
            });
        });
        frame.stroke(&arc, Stroke::default().with_color(primary).with_width(STROKE_WIDTH));

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut spinner = Spinner::default();
        for _ in 0..1000 {
            spinner = spinner.advanced();
            assert!((0.0..TAU).contains(&spinner.rotation));
        }
    }
}
