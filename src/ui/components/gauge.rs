use crate::logic::evaluator::{CALORIE_UNIVERSE, PROTEIN_UNIVERSE, STEPS_UNIVERSE};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Value plus a horizontal bar scaled to `[min, max]`.
pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    fn get_color(&self, value: f64) -> Color {
        for (threshold, color) in self.thresholds.iter().rev() {
            if value >= *threshold {
                return *color;
            }
        }
        Theme::FG
    }

    fn ratio(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
            return;
        };

        let color = self.get_color(value);
        let value_line = Line::from(vec![Span::styled(
            format!("{:.0} {}", value, self.unit),
            Style::default().fg(color),
        )]);
        Paragraph::new(value_line).render(inner, buf);

        if inner.height >= 2 {
            let bar_area = Rect {
                x: inner.x,
                y: inner.y + 1,
                width: inner.width,
                height: 1,
            };

            let filled = (bar_area.width as f64 * self.ratio(value)) as u16;

            for x in bar_area.x..bar_area.x + bar_area.width {
                let ch = if x < bar_area.x + filled { '█' } else { '░' };
                buf[(x, bar_area.y)].set_char(ch).set_fg(color);
            }
        }
    }
}

fn target_gauge<'a>(
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    (min, max): (i64, i64),
) -> GaugeWidget<'a> {
    let (min, max) = (min as f64, max as f64);
    let third = (max - min) / 3.0;
    GaugeWidget::new(title, value, unit)
        .range(min, max)
        .thresholds(vec![
            (min, Theme::TARGET_LOW),
            (min + third, Theme::TARGET_MID),
            (min + 2.0 * third, Theme::TARGET_HIGH),
        ])
}

pub fn steps_gauge(value: Option<f64>) -> GaugeWidget<'static> {
    target_gauge("Daily Steps", value, "steps", STEPS_UNIVERSE)
}

pub fn calorie_gauge(value: Option<f64>) -> GaugeWidget<'static> {
    target_gauge("Calories", value, "kcal", CALORIE_UNIVERSE)
}

pub fn protein_gauge(value: Option<f64>) -> GaugeWidget<'static> {
    target_gauge("Protein", value, "g", PROTEIN_UNIVERSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped_to_range() {
        let gauge = protein_gauge(None);
        assert_eq!(gauge.ratio(50.0), 0.0);
        assert_eq!(gauge.ratio(150.0), 0.5);
        assert_eq!(gauge.ratio(400.0), 1.0);
    }

    #[test]
    fn color_follows_thresholds() {
        let gauge = steps_gauge(None);
        assert_eq!(gauge.get_color(1000.0), Theme::TARGET_LOW);
        assert_eq!(gauge.get_color(7500.0), Theme::TARGET_MID);
        assert_eq!(gauge.get_color(14333.0), Theme::TARGET_HIGH);
    }

    #[test]
    fn renders_bar_under_value() {
        let area = Rect::new(0, 0, 22, 4);
        let mut buf = Buffer::empty(area);
        calorie_gauge(Some(4000.0)).render(area, &mut buf);
        assert_eq!(buf[(1, 2)].symbol(), "█");
        assert_eq!(buf[(20, 2)].symbol(), "█");
    }
}
