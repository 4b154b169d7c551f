use anyhow::{bail, Context, Result};
use derive_more::Display;
use inquire::{Select, Text};
use log::info;
use std::{env, path::Path};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use validador::consts::{CONFIG_FILE, LOG_FILE};
use validador::settings::Settings;
use validador::{check_cpf, Kind, Report, Validator};

const SAMPLE_EMAILS: [&str; 4] = [
    "teste@dominio.com",
    "invalid_email@.com",
    "outro@dominio.br",
    "erro@dominio..com",
];

const SAMPLE_CPFS: [&str; 6] = [
    "123.456.789-09",
    "111.111.111-11",
    "222.444.666-25",
    "000.000.000-00",
    "22244466625",
    "22244466671",
];

const USAGE: &str = "usage: validador [demo | json | interactive]";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs the menu once. Returns None when the menu wants to exit,
    /// Some(()) when it should run again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu in a loop, reporting errors, until it asks to exit.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

struct App {
    validator: Validator,
}

impl App {
    fn new(validator: Validator) -> Self {
        App { validator }
    }

    fn start(&mut self) {
        println!("CPF and e-mail validator.");
        self.enter_loop();
    }

    fn check(&self, kind: Kind) -> Result<()> {
        let value = Text::new(&format!("Enter the {kind} to validate:")).prompt()?;
        let valid = self.validator.validate(&value, kind);
        println!("{}", describe(kind, &value, valid));

        if kind == Kind::Cpf {
            if let Err(reason) = check_cpf(&value, self.validator.policy().cpf) {
                println!("  {reason}");
            }
        }
        Ok(())
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Validate a CPF")]
            Cpf,
            #[display("Validate an e-mail address")]
            Email,
            #[display("Run the demo")]
            Demo,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Cpf => self.check(Kind::Cpf)?,
            Choice::Email => self.check(Kind::Email)?,
            Choice::Demo => demo(&self.validator),
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn describe(kind: Kind, value: &str, valid: bool) -> String {
    let label = if valid { "valid" } else { "invalid" };
    match kind {
        Kind::Cpf => format!("CPF: {value} - {label}"),
        Kind::Email => format!("E-mail: {value} - {label}"),
    }
}

fn samples() -> impl Iterator<Item = (&'static str, Kind)> {
    let emails = SAMPLE_EMAILS.iter().map(|&e| (e, Kind::Email));
    let cpfs = SAMPLE_CPFS.iter().map(|&c| (c, Kind::Cpf));
    emails.chain(cpfs)
}

fn demo(validator: &Validator) {
    println!("E-mail validation results:");
    for email in SAMPLE_EMAILS {
        println!("{}", describe(Kind::Email, email, validator.validate(email, Kind::Email)));
    }

    println!("\nCPF validation results:");
    for cpf in SAMPLE_CPFS {
        println!("{}", describe(Kind::Cpf, cpf, validator.validate(cpf, Kind::Cpf)));
    }
}

fn print_json(validator: &Validator) -> Result<()> {
    let reports: Vec<Report> = validator.validate_all(samples());
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn main() -> Result<()> {
    let settings = Settings::open(Path::new(CONFIG_FILE))
        .with_context(|| format!("Could not load {CONFIG_FILE}"))?;
    simple_logging::log_to_file(LOG_FILE, settings.level_filter()?)?;
    info!("Starting with policy {:?}", settings.policy);

    let validator = Validator::new(settings.policy);

    match env::args().nth(1).as_deref() {
        None | Some("demo") => demo(&validator),
        Some("json") => print_json(&validator)?,
        Some("interactive") => App::new(validator).start(),
        Some(other) => bail!("Unknown command {other:?}\n{USAGE}"),
    }
    Ok(())
}
