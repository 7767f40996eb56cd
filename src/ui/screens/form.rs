use crate::models::{FatBracket, Goal, Level, ProfileForm, WorkoutType};
use crate::ui::components::{InputWidget, SelectWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Weight,
    Age,
    BodyFat,
    Muscle,
    Endurance,
    Goal,
    WorkoutType,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Weight,
            FormField::Age,
            FormField::BodyFat,
            FormField::Muscle,
            FormField::Endurance,
            FormField::Goal,
            FormField::WorkoutType,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Weight => "Weight (kg)",
            FormField::Age => "Age (years)",
            FormField::BodyFat => "Body Fat",
            FormField::Muscle => "Muscle Level",
            FormField::Endurance => "Endurance Level",
            FormField::Goal => "Goal",
            FormField::WorkoutType => "Preferred Workout Type",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Weight | FormField::Age)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let i = all.iter().position(|f| f == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let i = all.iter().position(|f| f == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }
}

pub struct FormScreen<'a> {
    pub form: &'a ProfileForm,
    pub focused_field: FormField,
    pub editing: bool,
    pub edit_buffer: &'a str,
    pub status_message: Option<&'a str>,
}

impl<'a> FormScreen<'a> {
    pub fn new(form: &'a ProfileForm) -> Self {
        Self {
            form,
            focused_field: FormField::Weight,
            editing: false,
            edit_buffer: "",
            status_message: None,
        }
    }

    pub fn with_focus(mut self, field: FormField) -> Self {
        self.focused_field = field;
        self
    }

    pub fn editing(mut self, editing: bool, buffer: &'a str) -> Self {
        self.editing = editing;
        self.edit_buffer = buffer;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for FormScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(23),   // Form (7 fields * 3 lines + borders)
                Constraint::Length(3), // Help
                Constraint::Length(1), // Status
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Fuzzy Fitness Planner", Theme::title()),
            Span::styled(" - Your Profile", Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_form(chunks[1], buf);
        self.render_help(chunks[2], buf);

        if let Some(msg) = self.status_message {
            Paragraph::new(Span::styled(msg, Theme::error())).render(chunks[3], buf);
        }

        let nav = if self.editing {
            Line::from(vec![
                Span::styled("[Enter]", Theme::nav_key()),
                Span::styled("Done ", Theme::nav_label()),
                Span::styled("[Esc]", Theme::nav_key()),
                Span::styled("Cancel", Theme::nav_label()),
            ])
        } else {
            Line::from(vec![
                Span::styled("[↑↓]", Theme::nav_key()),
                Span::styled("Navigate ", Theme::nav_label()),
                Span::styled("[Enter]", Theme::nav_key()),
                Span::styled("Edit ", Theme::nav_label()),
                Span::styled("[←→]", Theme::nav_key()),
                Span::styled("Choose ", Theme::nav_label()),
                Span::styled("[g]", Theme::nav_key()),
                Span::styled("Generate Plan ", Theme::nav_label()),
                Span::styled("[q]", Theme::nav_key()),
                Span::styled("Quit", Theme::nav_label()),
            ])
        };
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl FormScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Profile")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let constraints: Vec<Constraint> = FormField::all()
            .iter()
            .map(|_| Constraint::Length(3))
            .collect();

        let field_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let fat_options = FatBracket::ALL.map(|b| b.as_str());
        let level_options = Level::ALL.map(|l| l.as_str());
        let goal_options = Goal::ALL.map(|g| g.as_str());
        let workout_options = WorkoutType::ALL.map(|w| w.as_str());

        for (i, field) in FormField::all().iter().enumerate() {
            let focused = *field == self.focused_field;
            let label = field.label();
            let area = field_areas[i];

            match field {
                FormField::Weight | FormField::Age => {
                    let editing = focused && self.editing;
                    let value = if editing {
                        self.edit_buffer
                    } else if *field == FormField::Weight {
                        self.form.weight.as_str()
                    } else {
                        self.form.age.as_str()
                    };
                    InputWidget::new(label, value)
                        .focused(focused)
                        .editing(editing)
                        .render(area, buf);
                }
                FormField::BodyFat => {
                    let selected = position(&FatBracket::ALL, self.form.body_fat);
                    SelectWidget::new(label, &fat_options, selected)
                        .focused(focused)
                        .render(area, buf);
                }
                FormField::Muscle => {
                    let selected = position(&Level::ALL, self.form.muscle);
                    SelectWidget::new(label, &level_options, selected)
                        .focused(focused)
                        .render(area, buf);
                }
                FormField::Endurance => {
                    let selected = position(&Level::ALL, self.form.endurance);
                    SelectWidget::new(label, &level_options, selected)
                        .focused(focused)
                        .render(area, buf);
                }
                FormField::Goal => {
                    let selected = position(&Goal::ALL, self.form.goal);
                    SelectWidget::new(label, &goal_options, selected)
                        .focused(focused)
                        .render(area, buf);
                }
                FormField::WorkoutType => {
                    let selected = position(&WorkoutType::ALL, self.form.workout_type);
                    SelectWidget::new(label, &workout_options, selected)
                        .focused(focused)
                        .render(area, buf);
                }
            }
        }
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Field Options")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let help_text = match self.focused_field {
            FormField::Weight => "Body weight in kilograms, e.g. 72.5",
            FormField::Age => "Age in whole years",
            FormField::BodyFat => "Estimated body fat bracket",
            FormField::Muscle | FormField::Endurance => {
                "Options: Very Low, Low, Medium, High, Very High"
            }
            FormField::Goal => "Options: Build Muscle, Lose Fat, Maintain, Improve Endurance",
            FormField::WorkoutType => "Gym or calisthenics; only changes the Build Muscle split",
        };

        Paragraph::new(Span::styled(help_text, Theme::dim())).render(inner, buf);
    }
}

fn position<T: PartialEq>(all: &[T], value: Option<T>) -> Option<usize> {
    value.and_then(|v| all.iter().position(|x| *x == v))
}
