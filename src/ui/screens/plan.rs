use crate::logic::render_plan;
use crate::models::{FitnessPlan, PlanTrace};
use crate::ui::components::{calorie_gauge, protein_gauge, steps_gauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct PlanScreen<'a> {
    pub plan: &'a FitnessPlan,
    pub show_explanation: bool,
    pub status_message: Option<&'a str>,
}

impl<'a> PlanScreen<'a> {
    pub fn new(plan: &'a FitnessPlan) -> Self {
        Self {
            plan,
            show_explanation: false,
            status_message: None,
        }
    }

    pub fn with_explanation(mut self, show: bool) -> Self {
        self.show_explanation = show;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for PlanScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Gauges row
                Constraint::Min(12),   // Plan text and explanation
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_gauges(chunks[1], buf);

        if self.show_explanation {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[2]);
            self.render_plan_text(body[0], buf);
            render_trace(&self.plan.trace, body[1], buf);
        } else {
            self.render_plan_text(chunks[2], buf);
        }

        if let Some(msg) = self.status_message {
            Paragraph::new(Span::styled(msg, Theme::warning())).render(chunks[3], buf);
        }

        let nav = Line::from(vec![
            Span::styled("[e]", Theme::nav_key()),
            Span::styled(
                if self.show_explanation {
                    "Hide Rules "
                } else {
                    "Show Rules "
                },
                Theme::nav_label(),
            ),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl PlanScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let p = &self.plan.profile;
        let title = format!("Fitness Plan - {} ({})", p.goal, p.workout_type);

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let info = format!(
            "Generated {} | BMR {} kcal",
            self.plan.generated_at.format("%Y-%m-%d %H:%M UTC"),
            self.plan.bmr as i64
        );
        Paragraph::new(Span::styled(info, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let t = &self.plan.targets;
        steps_gauge(Some(t.daily_steps as f64)).render(gauge_chunks[0], buf);
        calorie_gauge(Some(t.calorie_intake as f64)).render(gauge_chunks[1], buf);
        protein_gauge(Some(t.protein_intake as f64)).render(gauge_chunks[2], buf);
    }

    fn render_plan_text(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Plan", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        Paragraph::new(render_plan(self.plan))
            .style(Theme::normal())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

fn render_trace(trace: &PlanTrace, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled("Rule Activations", Theme::header()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    block.render(area, buf);

    let mut items: Vec<ListItem> = Vec::new();
    for system in &trace.systems {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} = {:.1}", system.output, system.value),
            Theme::highlight(),
        ))));
        for firing in &system.firings {
            let style = Style::default().fg(Theme::strength_color(firing.strength));
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!(" {:.2} ", firing.strength), style),
                Span::styled(firing.rule.as_str(), Theme::dim()),
            ])));
        }
        if system.defaulted {
            items.push(ListItem::new(Line::from(Span::styled(
                " no rule fired, default used",
                Theme::warning(),
            ))));
        }
    }

    List::new(items).render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::FitnessPlanner;
    use crate::models::{FatBracket, Goal, Level, Profile, WorkoutType};

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn plan() -> FitnessPlan {
        let profile = Profile {
            weight_kg: 70.0,
            age_years: 30,
            body_fat: FatBracket::VeryLow,
            muscle: Level::VeryHigh,
            endurance: Level::VeryHigh,
            goal: Goal::BuildMuscle,
            workout_type: WorkoutType::Gym,
        };
        FitnessPlanner::new().generate(&profile).unwrap()
    }

    #[test]
    fn shows_targets_and_plan_text() {
        let plan = plan();
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        PlanScreen::new(&plan).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("14333 steps"));
        assert!(text.contains("Fitness Plan Details:"));
        assert!(!text.contains("Rule Activations"));
    }

    #[test]
    fn explanation_panel_lists_outputs() {
        let plan = plan();
        let area = Rect::new(0, 0, 140, 40);
        let mut buf = Buffer::empty(area);
        PlanScreen::new(&plan)
            .with_explanation(true)
            .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Rule Activations"));
        assert!(text.contains("daily_steps = "));
    }
}
