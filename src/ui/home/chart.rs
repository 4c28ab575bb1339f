// SPDX-License-Identifier: MPL-2.0
//! Line chart drawn on a canvas, used by the home dashboard.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Theme};

const PADDING: f32 = 24.0;
const POINT_RADIUS: f32 = 4.0;

/// Single-series line chart. Values are plotted evenly along the x axis and
/// scaled to the series maximum on the y axis.
#[derive(Debug, Clone)]
pub struct LineChart {
    values: Vec<f32>,
    color: Color,
}

impl LineChart {
    pub fn new(values: Vec<f32>) -> Self {
        Self {
            values,
            color: palette::PRIMARY_500,
        }
    }

    fn points(&self, bounds: Rectangle) -> Vec<Point> {
        let max = self.values.iter().cloned().fold(f32::MIN, f32::max).max(1.0);
        let inner_width = (bounds.width - 2.0 * PADDING).max(1.0);
        let inner_height = (bounds.height - 2.0 * PADDING).max(1.0);
        let step = if self.values.len() > 1 {
            inner_width / (self.values.len() - 1) as f32
        } else {
            0.0
        };

        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let x = PADDING + i as f32 * step;
                let y = PADDING + inner_height * (1.0 - value / max);
                Point::new(x, y)
            })
            .collect()
    }
}

impl<Message> canvas::Program<Message> for LineChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let baseline = canvas::Path::line(
            Point::new(PADDING, bounds.height - PADDING),
            Point::new(bounds.width - PADDING, bounds.height - PADDING),
        );
        frame.stroke(
            &baseline,
            canvas::Stroke::default()
                .with_color(palette::GRAY_200)
                .with_width(1.0),
        );

        let points = self.points(bounds);
        if points.len() > 1 {
            let line = canvas::Path::new(|builder| {
                builder.move_to(points[0]);
                for point in &points[1..] {
                    builder.line_to(*point);
                }
            });
            frame.stroke(
                &line,
                canvas::Stroke::default()
                    .with_color(self.color)
                    .with_width(2.5),
            );
        }

        for point in &points {
            let dot = canvas::Path::circle(*point, POINT_RADIUS);
            frame.fill(&dot, self.color);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn points_are_evenly_spaced_and_scaled() {
        let chart = LineChart::new(vec![0.0, 50.0, 100.0]);
        let bounds = Rectangle::with_size(Size::new(248.0, 148.0));
        let points = chart.points(bounds);

        assert_eq!(points.len(), 3);
        let gap_a = points[1].x - points[0].x;
        let gap_b = points[2].x - points[1].x;
        assert!((gap_a - gap_b).abs() < 0.001);
        // Larger values sit higher on screen (smaller y).
        assert!(points[2].y < points[1].y);
        assert!(points[1].y < points[0].y);
    }

    #[test]
    fn single_point_series_does_not_divide_by_zero() {
        let chart = LineChart::new(vec![42.0]);
        let bounds = Rectangle::with_size(Size::new(248.0, 148.0));
        let points = chart.points(bounds);
        assert_eq!(points.len(), 1);
        assert!(points[0].x.is_finite());
        assert!(points[0].y.is_finite());
    }
}
