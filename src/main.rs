use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fitplan::app::{App, Screen};
use fitplan::cli::{Cli, Commands, PlanArgs};
use fitplan::config::{Config, OutputFormat};
use fitplan::logic::{render_explanation, render_plan, FitnessPlanner};
use fitplan::ui::screens::{FormScreen, PlanScreen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.command.is_none());

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
        }
        Some(Commands::Check) => {
            let config = Config::load(cli.config.clone()).context("Configuration error")?;
            run_check(&config, cli.config.as_ref())?;
        }
        Some(Commands::Plan(ref args)) => {
            let config = Config::load(cli.config.clone()).context("Configuration error")?;
            run_plan(&config, args)?;
        }
        None => {
            let config = Config::load(cli.config.clone()).context("Configuration error")?;
            run_tui(&config)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` picks the level. The TUI stays quiet unless
/// asked, since log lines would land on the alternate screen.
fn init_logging(verbose: u8, tui: bool) {
    let default_level = match (verbose, tui) {
        (0, true) => "off",
        (0, false) => "warn",
        (1, _) => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run_check(config: &Config, override_path: Option<&std::path::PathBuf>) -> anyhow::Result<()> {
    match Config::resolved_path(override_path) {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: none found, using built-in defaults"),
    }

    config.validate().context("Invalid defaults")?;

    let yaml = serde_yaml::to_string(config).context("Failed to render config")?;
    println!();
    print!("{}", yaml);
    println!();
    println!("OK");
    Ok(())
}

fn run_plan(config: &Config, args: &PlanArgs) -> anyhow::Result<()> {
    let form = args.apply(config.defaults.to_form()?)?;
    let profile = form.collect()?;
    let plan = FitnessPlanner::new().generate(&profile)?;

    let format = args.format.unwrap_or(config.output.format);
    let explain = args.explain || config.output.explain;

    match format {
        OutputFormat::Text => {
            print!("{}", render_plan(&plan));
            if explain {
                println!();
                print!("{}", render_explanation(&plan.trace));
            }
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&plan)?;
            if explain {
                value["trace"] = serde_json::to_value(&plan.trace)?;
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

fn run_tui(config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(config).context("Invalid defaults in config")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();

            match (app.screen, app.plan.as_ref()) {
                (Screen::Plan, Some(plan)) => {
                    let screen = PlanScreen::new(plan)
                        .with_explanation(app.show_explanation)
                        .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                _ => {
                    let screen = FormScreen::new(&app.form)
                        .with_focus(app.form_state.focused_field)
                        .editing(app.form_state.editing, &app.form_state.edit_buffer)
                        .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('q') if !app.form_state.editing => {
                        app.quit();
                    }
                    _ => handle_screen_input(app, key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Form => handle_form_input(app, code),
        Screen::Plan => handle_plan_input(app, code),
    }
}

fn handle_form_input(app: &mut App, code: KeyCode) {
    if app.form_state.editing {
        match code {
            KeyCode::Esc => app.form_state.cancel_editing(),
            KeyCode::Enter => app.commit_edit(),
            KeyCode::Backspace => {
                app.form_state.edit_buffer.pop();
            }
            KeyCode::Char(c) => app.form_state.edit_buffer.push(c),
            _ => {}
        }
    } else {
        match code {
            KeyCode::Up => app.form_state.prev_field(),
            KeyCode::Down | KeyCode::Tab => app.form_state.next_field(),
            KeyCode::Left => app.cycle_selection(false),
            KeyCode::Right => app.cycle_selection(true),
            KeyCode::Enter => app.begin_edit(),
            KeyCode::Char('g') => app.generate_plan(),
            KeyCode::Esc => app.clear_status(),
            _ => {}
        }
    }
}

fn handle_plan_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('e') => app.toggle_explanation(),
        KeyCode::Esc => {
            app.clear_status();
            app.switch_screen(Screen::Form);
        }
        _ => {}
    }
}
