use askloop_core::utils::{PromptError, Terminal, accept};
use std::error::Error;
use std::fmt::Display;
use std::process::ExitCode;
use std::str::FromStr;

/// Demo aggregate: the prompt works with any `FromStr + Display` type,
/// not just the primitives.
struct Point {
    x: f64,
    y: f64,
}

#[derive(Debug)]
struct BadPoint;

impl Display for BadPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected a point as x,y")
    }
}

impl Error for BadPoint {}

impl FromStr for Point {
    type Err = BadPoint;

    fn from_str(s: &str) -> Result<Point, BadPoint> {
        let (x, y) = s.split_once(',').ok_or(BadPoint)?;
        Ok(Point {
            x: x.trim().parse().map_err(|_| BadPoint)?,
            y: y.trim().parse().map_err(|_| BadPoint)?,
        })
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), PromptError> {
    println!(
        "------------------------------------------------------------------------------------",
    );
    println!(
        "                                  ASKLOOP                                           ",
    );
    println!(
        "                     validated console input demonstrations                         ",
    );
    println!(
        "                            VERSION:            0.1.0                               ",
    );
    println!(
        "------------------------------------------------------------------------------------",
    );

    let grade: i32 = Terminal::ask("enter a number between (0, 10):", accept::between(0, 10))?;
    println!("Accepted: {}", grade);

    let non_negative: i32 = Terminal::ask("enter a non-negative number:", accept::at_least(0))?;
    println!("Accepted: {}", non_negative);

    let bounded: i32 = Terminal::ask(
        "enter a number strictly between 0 and 100:",
        accept::inside(0, 100),
    )?;
    println!("Accepted: {}", bounded);

    let name: String = Terminal::ask(
        "who goes there? (hint: Bob):",
        accept::equals(String::from("Bob")),
    )?;
    println!("Accepted: {}", name);

    let rating: f64 = Terminal::ask("rate this from 0 to 10:", accept::between(0.0, 10.0))?;
    println!("Accepted: {}", rating);

    let point: Point = Terminal::ask("enter a point as x,y:", accept::anything())?;
    println!("Accepted: {}", point);

    // The non-looping contract: one shot, first invalid answer is an error.
    match Terminal::ask_once::<i32, _>(
        "last one, single try, a number strictly between 0 and 100:",
        accept::inside(0, 100),
    ) {
        Ok(n) => println!("Accepted: {}", n),
        Err(e @ (PromptError::EndOfInput | PromptError::Io(_))) => return Err(e),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
