//! CLI entry point for flowstate
//!
//! Drives the login and settings flows from the terminal. Every listener
//! notification is printed, so the command output shows exactly what a
//! view bound to the same container would have redrawn.

use std::process;
use std::rc::{Rc, Weak};

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use flowstate::core::validator::{field_error, validate_email, validate_password, validate_required};
use flowstate::core::{ActionOutcome, Listener, Observable, Settings};
use flowstate::viewmodel::{HomeViewModel, LoginViewModel, SettingsViewModel};
use flowstate::App;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flowstate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log flow transitions to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single field validator
    Validate {
        /// Which validator to run
        #[arg(value_enum)]
        kind: FieldKind,

        /// Value to check
        value: String,

        /// Field name used in the "required" message
        #[arg(long, default_value = "Field")]
        field: String,
    },

    /// Log in with the demo authenticator
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Print the session user as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit and save settings
    Settings {
        #[arg(long)]
        dark_mode: bool,

        #[arg(long)]
        display_name: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        language: Option<String>,

        /// Turn notifications off
        #[arg(long)]
        no_notifications: bool,

        /// Print the saved settings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through login, home, settings and logout
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldKind {
    Email,
    Password,
    Required,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate { kind, value, field } => validate_field(kind, &value, &field),
        Commands::Login { email, password, json } => run_login(email, password, json)?,
        Commands::Settings {
            dark_mode,
            display_name,
            bio,
            language,
            no_notifications,
            json,
        } => {
            let settings = Settings {
                dark_mode,
                display_name: display_name.unwrap_or_default(),
                bio: bio.unwrap_or_default(),
                language: language.unwrap_or_else(|| Settings::default().language),
                notifications_enabled: !no_notifications,
            };
            run_settings(settings, json)?
        }
        Commands::Demo => run_demo(),
    }

    Ok(())
}

/// Installs a stderr subscriber filtered by RUST_LOG (default: warn)
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("flowstate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn validate_field(kind: FieldKind, value: &str, field: &str) {
    let result = match kind {
        FieldKind::Email => validate_email(value),
        FieldKind::Password => validate_password(value),
        FieldKind::Required => validate_required(value, field),
    };

    if result.is_ok() {
        println!("{} {}", "✓".green().bold(), "Valid".bold());
    } else {
        println!("{} {}", "✗".red().bold(), field_error(&result));
        process::exit(1);
    }
}

/// Prints the login form each time the container notifies
fn login_renderer(vm: Weak<LoginViewModel>) -> Listener {
    Rc::new(move || {
        let Some(vm) = vm.upgrade() else { return };
        let state = vm.snapshot();

        println!(
            "  {} [{}] email={:?}{}",
            "↻ login".dimmed(),
            state.phase.to_string().cyan(),
            state.email,
            if state.is_loading { " (logging in…)".yellow().to_string() } else { String::new() },
        );
        for error in [&state.email_error, &state.password_error, &state.login_error] {
            if !error.is_empty() {
                println!("      {} {}", "✗".red(), error.red());
            }
        }
    })
}

/// Prints the settings form each time the container notifies
fn settings_renderer(vm: Weak<SettingsViewModel>) -> Listener {
    Rc::new(move || {
        let Some(vm) = vm.upgrade() else { return };
        let state = vm.snapshot();

        println!(
            "  {} [{}] {}{}",
            "↻ settings".dimmed(),
            state.phase.to_string().cyan(),
            state.settings,
            if state.is_saving { " (saving…)".yellow().to_string() } else { String::new() },
        );
        if !state.display_name_error.is_empty() {
            println!("      {} {}", "✗".red(), state.display_name_error.red());
        }
        if !state.save_error.is_empty() {
            println!("      {} {}", "✗".red(), state.save_error.red());
        }
        if !state.save_message.is_empty() {
            println!("      {} {}", "✓".green(), state.save_message.green());
        }
    })
}

/// Prints the home card each time the container notifies
fn home_renderer(vm: Weak<HomeViewModel>) -> Listener {
    Rc::new(move || {
        if let Some(vm) = vm.upgrade() {
            print_home(&vm);
        }
    })
}

fn print_home(vm: &HomeViewModel) {
    let info = vm.user_info();
    println!("  {} {}", "⌂".blue(), vm.welcome_message().bold());
    println!("      Email: {}", info.email);
    println!("      Display Name: {}", info.display_name);
}

fn run_login(email: String, password: String, json: bool) -> anyhow::Result<()> {
    let vm = Rc::new(LoginViewModel::new());
    if !json {
        vm.add_listener(login_renderer(Rc::downgrade(&vm)));
    }

    vm.set_email(email);
    vm.set_password(password);

    let outcome = vm.login();
    vm.dispose();

    match outcome {
        ActionOutcome::Completed(user) if json => {
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        ActionOutcome::Completed(user) => {
            println!("\n{} Logged in as {}", "✓".green().bold(), user.to_string().bold());
        }
        failed if json => {
            print_json_failure(failed.label(), &vm.snapshot())?;
            process::exit(1);
        }
        _ => {
            println!("\n{} {}", "✗".red().bold(), "Login failed".bold());
            process::exit(1);
        }
    }

    Ok(())
}

fn run_settings(settings: Settings, json: bool) -> anyhow::Result<()> {
    let vm = Rc::new(SettingsViewModel::default());
    if !json {
        vm.add_listener(settings_renderer(Rc::downgrade(&vm)));
    }

    vm.load_settings(settings);
    let outcome = vm.save_settings();
    vm.dispose();

    match outcome {
        ActionOutcome::Completed(saved) if json => {
            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
        ActionOutcome::Completed(_) => {}
        failed if json => {
            print_json_failure(failed.label(), &vm.snapshot())?;
            process::exit(1);
        }
        _ => process::exit(1),
    }

    Ok(())
}

/// Prints `{"outcome": .., "state": ..}` so a failed run can be diagnosed
fn print_json_failure(outcome: &str, state: &impl Serialize) -> anyhow::Result<()> {
    let report = serde_json::json!({ "outcome": outcome, "state": state });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn step(title: &str) {
    println!("\n{} {}", "→".cyan(), title.bold());
}

fn run_demo() {
    let mut app = App::default();
    app.login()
        .add_listener(login_renderer(Rc::downgrade(app.login())));
    app.settings()
        .add_listener(settings_renderer(Rc::downgrade(app.settings())));

    step("Submitting an empty form");
    app.submit_login();

    step("Fixing the email, password still too short");
    app.login().set_email("demo@example.com");
    app.login().set_password("12345");
    app.submit_login();

    step("Logging in");
    app.login().set_password("password123");
    if app.submit_login() {
        if let Some(home) = app.home() {
            home.add_listener(home_renderer(Rc::downgrade(home)));
            print_home(home);
        }
    }

    step("Opening settings");
    app.open_settings();
    println!("  on screen: {}", app.screen().to_string().cyan());

    step("Saving a blank display name");
    app.settings().set_display_name("   ");
    app.settings().save_settings();

    step("Saving real settings");
    app.settings().set_display_name("Demo User");
    app.settings().toggle_dark_mode();
    app.settings().save_settings();

    step("Back to home and log out");
    app.close_settings();
    println!("  on screen: {}", app.screen().to_string().cyan());
    app.logout();
    println!("  on screen: {}", app.screen().to_string().cyan());

    app.shutdown();
    println!("\n{} Demo complete", "✓".green().bold());
}
