//! Interactive terminal front end for checking and formatting RUTs.

use anyhow::{bail, Result};
use chilean_rut::{
    calculate_verification_digit, clean_rut, format_rut, format_rut_partial, parse_rut,
    validate_rut, FormatOptions, Rut,
};
use derive_more::Display;
use inquire::{Confirm, Select, Text};
use log::info;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const LOG_FILE: &str = "./rut.log";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs one iteration of the menu. Returns None when the menu should
    /// stop, Some(()) when it should run again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it asks to stop, reporting errors along the way.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

struct App;

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Validate a RUT")]
            Validate,
            #[display("Format a RUT")]
            Format,
            #[display("Live format (no validation)")]
            LiveFormat,
            #[display("Compute a verification digit")]
            VerificationDigit,
            #[display("Validate as JSON")]
            Json,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Validate => validate()?,
            Choice::Format => format_with_options()?,
            Choice::LiveFormat => live_format()?,
            Choice::VerificationDigit => verification_digit()?,
            Choice::Json => json()?,
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn validate() -> Result<()> {
    let input = Text::new("RUT:").prompt()?;
    let cleaned = clean_rut(&input);
    info!("Validating {:?}", cleaned);

    println!("Cleaned: {}", if cleaned.is_empty() { "-" } else { cleaned.as_str() });

    match Rut::try_from(input.as_str()) {
        Ok(rut) => {
            println!("[+] Valid");
            println!("Formatted: {}", rut.format(FormatOptions::default()));
        }
        Err(error) => {
            println!("[!] Invalid: {error}");
            if let Some(parsed) = parse_rut(&cleaned) {
                println!(
                    "Expected verification digit: {} (got {})",
                    calculate_verification_digit(&parsed.body),
                    parsed.verification_digit
                );
            }
        }
    }
    Ok(())
}

fn format_with_options() -> Result<()> {
    let input = Text::new("RUT:").prompt()?;
    let options = FormatOptions::default()
        .with_dots(Confirm::new("Thousands separators?").with_default(true).prompt()?)
        .with_dash(Confirm::new("Dash before the verification digit?").with_default(true).prompt()?)
        .with_uppercase(Confirm::new("Uppercase K?").with_default(true).prompt()?);
    info!("Formatting with {:?}", options);

    let formatted = format_rut(&input, options);
    if formatted.is_empty() {
        println!("[!] Not a valid RUT, nothing to format");
    } else {
        println!("{formatted}");
    }
    Ok(())
}

fn live_format() -> Result<()> {
    let input = Text::new("RUT:")
        .with_formatter(&|typed: &str| format_rut_partial(typed, FormatOptions::default()))
        .prompt()?;
    info!("Live formatting {:?}", clean_rut(&input));

    println!("{}", format_rut_partial(&input, FormatOptions::default()));
    Ok(())
}

fn verification_digit() -> Result<()> {
    let body = clean_rut(&Text::new("RUT body (without verification digit):").prompt()?);

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        bail!("The body must contain digits only");
    }

    let digit = calculate_verification_digit(&body);
    info!("Computed verification digit for {}", body);

    println!("Verification digit: {digit}");
    println!("{}", format_rut(&format!("{body}{digit}"), FormatOptions::default()));
    Ok(())
}

fn json() -> Result<()> {
    let input = Text::new("RUT:").prompt()?;
    println!("{}", serde_json::to_string_pretty(&validate_rut(&input))?);
    Ok(())
}

fn main() -> Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    println!("Chilean RUT checker");
    let mut app = App;
    app.enter_loop();
    info!("Session ended");
    Ok(())
}
