use crate::config::Config;
use crate::error::Result;
use crate::logic::FitnessPlanner;
use crate::models::{FatBracket, FitnessPlan, Goal, Level, ProfileForm, WorkoutType};
use crate::ui::screens::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Plan,
}

pub struct FormState {
    pub focused_field: FormField,
    pub editing: bool,
    pub edit_buffer: String,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            focused_field: FormField::Weight,
            editing: false,
            edit_buffer: String::new(),
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn start_editing(&mut self, current_value: &str) {
        self.editing = true;
        self.edit_buffer = current_value.to_string();
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    pub fn finish_editing(&mut self) -> String {
        self.editing = false;
        std::mem::take(&mut self.edit_buffer)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,

    pub form: ProfileForm,
    pub form_state: FormState,
    pub plan: Option<FitnessPlan>,

    pub planner: FitnessPlanner,

    // UI state
    pub show_explanation: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            screen: Screen::Form,
            should_quit: false,
            form: config.defaults.to_form()?,
            form_state: FormState::new(),
            plan: None,
            planner: FitnessPlanner::new(),
            show_explanation: config.output.explain,
            status_message: None,
        })
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_explanation(&mut self) {
        self.show_explanation = !self.show_explanation;
    }

    /// Enter on a text field starts editing; select fields ignore it.
    pub fn begin_edit(&mut self) {
        let field = self.form_state.focused_field;
        if field.is_text() {
            let current = self.field_value(field);
            self.form_state.start_editing(&current);
        }
    }

    pub fn commit_edit(&mut self) {
        let value = self.form_state.finish_editing();
        match self.form_state.focused_field {
            FormField::Weight => self.form.weight = value,
            FormField::Age => self.form.age = value,
            _ => {}
        }
    }

    /// Raw value of a text field. Empty for selects.
    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Weight => self.form.weight.clone(),
            FormField::Age => self.form.age.clone(),
            _ => String::new(),
        }
    }

    /// Steps the focused select field through its options.
    pub fn cycle_selection(&mut self, forward: bool) {
        let form = &mut self.form;
        match self.form_state.focused_field {
            FormField::BodyFat => form.body_fat = cycle(&FatBracket::ALL, form.body_fat, forward),
            FormField::Muscle => form.muscle = cycle(&Level::ALL, form.muscle, forward),
            FormField::Endurance => form.endurance = cycle(&Level::ALL, form.endurance, forward),
            FormField::Goal => form.goal = cycle(&Goal::ALL, form.goal, forward),
            FormField::WorkoutType => {
                form.workout_type = cycle(&WorkoutType::ALL, form.workout_type, forward)
            }
            FormField::Weight | FormField::Age => {}
        }
    }

    /// Validates the form and runs the planner. Failures land in the status
    /// line and leave the form as it was.
    pub fn generate_plan(&mut self) {
        let profile = match self.form.collect() {
            Ok(p) => p,
            Err(e) => {
                self.set_status(&e.to_string());
                return;
            }
        };

        match self.planner.generate(&profile) {
            Ok(plan) => {
                if plan.trace.any_defaulted() {
                    self.set_status("No calorie rule matched, medium target used");
                } else {
                    self.clear_status();
                }
                self.plan = Some(plan);
                self.switch_screen(Screen::Plan);
            }
            Err(e) => {
                tracing::error!("plan generation failed: {}", e);
                self.set_status(&format!("Plan failed: {}", e));
            }
        }
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = all.len();
    if len == 0 {
        return None;
    }
    let next = match current.and_then(|c| all.iter().position(|x| *x == c)) {
        None if forward => 0,
        None => len - 1,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    Some(all[next])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    fn fill(app: &mut App) {
        app.form = ProfileForm {
            weight: "70".into(),
            age: "30".into(),
            body_fat: Some(FatBracket::VeryLow),
            muscle: Some(Level::VeryHigh),
            endurance: Some(Level::VeryHigh),
            goal: Some(Goal::BuildMuscle),
            workout_type: Some(WorkoutType::Gym),
        };
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(&Level::ALL, None, true), Some(Level::VeryLow));
        assert_eq!(cycle(&Level::ALL, None, false), Some(Level::VeryHigh));
        assert_eq!(
            cycle(&Level::ALL, Some(Level::VeryHigh), true),
            Some(Level::VeryLow)
        );
        assert_eq!(
            cycle(&Level::ALL, Some(Level::VeryLow), false),
            Some(Level::VeryHigh)
        );
    }

    #[test]
    fn editing_text_field_updates_form() {
        let mut app = app();
        app.begin_edit();
        assert!(app.form_state.editing);
        app.form_state.edit_buffer.push_str("82");
        app.commit_edit();
        assert!(!app.form_state.editing);
        assert_eq!(app.form.weight, "82");
    }

    #[test]
    fn select_fields_do_not_enter_edit_mode() {
        let mut app = app();
        app.form_state.focused_field = FormField::Goal;
        app.begin_edit();
        assert!(!app.form_state.editing);

        app.cycle_selection(true);
        assert_eq!(app.form.goal, Some(Goal::BuildMuscle));
        app.cycle_selection(true);
        assert_eq!(app.form.goal, Some(Goal::LoseFat));
    }

    #[test]
    fn incomplete_form_reports_status() {
        let mut app = app();
        app.form.weight = "abc".into();
        app.generate_plan();
        assert_eq!(app.screen, Screen::Form);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Please enter valid weight and age!")
        );

        app.form.weight = "70".into();
        app.form.age = "30".into();
        app.generate_plan();
        assert_eq!(app.status_message.as_deref(), Some("Please fill all fields!"));
        assert!(app.plan.is_none());
    }

    #[test]
    fn complete_form_switches_to_plan() {
        let mut app = app();
        fill(&mut app);
        app.generate_plan();

        assert_eq!(app.screen, Screen::Plan);
        assert!(app.status_message.is_none());
        let plan = app.plan.as_ref().unwrap();
        assert_eq!(plan.targets.daily_steps, 14333);
    }

    #[test]
    fn defaulted_calories_are_flagged() {
        let mut app = app();
        fill(&mut app);
        app.form.muscle = Some(Level::Medium);
        app.generate_plan();

        assert_eq!(app.screen, Screen::Plan);
        assert!(app.status_message.is_some());
    }
}
