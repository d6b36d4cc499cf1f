//! Interactive text menu: reads raw fields, dispatches to the fleet façade
//! and renders each outcome as a single line.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use cargohold_lib::{Cargo, Container, ContainerType, FleetManager, Outcome, Ship};

use crate::commands::self_check::run_self_check;
use crate::persistence::DataPersistence;
use crate::terminal::ColorPalette;

/// Commands offered by the menu, keyed "1" through "6".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    LoadContainer,
    UnloadContainer,
    SaveData,
    RetrieveData,
    RunTests,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::LoadContainer,
        MenuCommand::UnloadContainer,
        MenuCommand::SaveData,
        MenuCommand::RetrieveData,
        MenuCommand::RunTests,
        MenuCommand::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuCommand::LoadContainer => "1",
            MenuCommand::UnloadContainer => "2",
            MenuCommand::SaveData => "3",
            MenuCommand::RetrieveData => "4",
            MenuCommand::RunTests => "5",
            MenuCommand::Exit => "6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::LoadContainer => "Load container onto ship",
            MenuCommand::UnloadContainer => "Unload container from ship",
            MenuCommand::SaveData => "Save data",
            MenuCommand::RetrieveData => "Retrieve data",
            MenuCommand::RunTests => "Run self-check",
            MenuCommand::Exit => "Exit",
        }
    }
}

/// Raised when a menu choice does not match any command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown menu choice '{}'", self.0)
    }
}

impl std::error::Error for UnknownChoice {}

impl FromStr for MenuCommand {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        MenuCommand::ALL
            .into_iter()
            .find(|c| c.key() == choice)
            .ok_or_else(|| UnknownChoice(choice.to_string()))
    }
}

/// Whether the menu loop keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Why a command stopped collecting fields early.
enum Interrupt {
    /// Input ended; the menu exits.
    Eof,
    /// A field was unusable; the message is shown and the menu continues.
    Invalid(String),
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

/// Menu session bound to one ship, reading commands from `input` and writing
/// prompts and results to `output`.
pub struct Menu<R, W> {
    input: R,
    output: W,
    ship: Ship,
    fleet: FleetManager,
    persistence: DataPersistence,
    palette: ColorPalette,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(ship: Ship, input: R, output: W, palette: ColorPalette) -> Self {
        Self {
            input,
            output,
            ship,
            fleet: FleetManager::new(),
            persistence: DataPersistence::new(),
            palette,
        }
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn into_ship(self) -> Ship {
        self.ship
    }

    /// Run until the exit command or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match line.parse::<MenuCommand>() {
                Ok(command) => {
                    if self.dispatch(command)? == Flow::Exit {
                        break;
                    }
                }
                Err(_) => writeln!(self.output, "Invalid option. Please choose again.")?,
            }
        }
        self.output.flush()
    }

    /// Execute a single command.
    pub fn dispatch(&mut self, command: MenuCommand) -> io::Result<Flow> {
        let result = match command {
            MenuCommand::LoadContainer => self.load_container(),
            MenuCommand::UnloadContainer => self.unload_container(),
            MenuCommand::SaveData => self.save_data(),
            MenuCommand::RetrieveData => self.retrieve_data(),
            MenuCommand::RunTests => self.run_tests(),
            MenuCommand::Exit => return Ok(Flow::Exit),
        };

        match result {
            Ok(()) => Ok(Flow::Continue),
            Err(Interrupt::Eof) => Ok(Flow::Exit),
            Err(Interrupt::Invalid(message)) => {
                writeln!(self.output, "{}{message}{}", self.palette.red, self.palette.reset)?;
                Ok(Flow::Continue)
            }
            Err(Interrupt::Io(err)) => Err(err),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Choose an option:")?;
        for command in MenuCommand::ALL {
            writeln!(self.output, "{}. {}", command.key(), command.label())?;
        }
        self.output.flush()
    }

    /// Collect every container and cargo field, then validate them together.
    ///
    /// An unrecognised container type stops the command straight away, since
    /// the remaining prompts depend on it.
    fn load_container(&mut self) -> Result<(), Interrupt> {
        let tag = self.prompt("Enter container type (basic/liquid/gas/refrigerated):")?;
        let container_type: ContainerType = tag
            .parse()
            .map_err(|_| Interrupt::Invalid("Invalid container type.".to_string()))?;
        let serial_number = self.prompt("Enter container serial number:")?;
        let mass_capacity = self.prompt("Enter container mass capacity:")?;
        let tare_weight = self.prompt("Enter container tare weight:")?;
        let pressure = if container_type.is_pressurized() {
            Some(self.prompt("Enter container pressure:")?)
        } else {
            None
        };
        let kind = self.prompt("Enter cargo type:")?;
        let mass = self.prompt("Enter cargo mass:")?;

        let mass_capacity: f64 = parse_number(&mass_capacity)?;
        let tare_weight: f64 = parse_number(&tare_weight)?;
        let pressure = pressure.as_deref().map(parse_number::<f64>).transpose()?;
        let container = Container::new(
            container_type,
            serial_number,
            mass_capacity,
            tare_weight,
            pressure,
        )
        .map_err(invalid)?;
        let cargo = Cargo::new(kind, parse_number(&mass)?).map_err(invalid)?;

        let outcome = self
            .fleet
            .load_container_with_cargo(&mut self.ship, container, &cargo);
        self.report(&outcome)?;
        Ok(())
    }

    fn unload_container(&mut self) -> Result<(), Interrupt> {
        let serial_number = self.prompt("Enter container serial number to unload:")?;
        let outcome = self
            .fleet
            .unload_container(&mut self.ship, serial_number.trim());
        self.report(&outcome)?;
        Ok(())
    }

    fn save_data(&mut self) -> Result<(), Interrupt> {
        let data = self.prompt("Enter data to save:")?;
        let echo = self.persistence.save_data(&data);
        writeln!(self.output, "{echo}")?;
        writeln!(self.output, "Data saved successfully.")?;
        Ok(())
    }

    fn retrieve_data(&mut self) -> Result<(), Interrupt> {
        let data = self.persistence.retrieve_data();
        writeln!(self.output, "Retrieved data: {data}")?;
        Ok(())
    }

    fn run_tests(&mut self) -> Result<(), Interrupt> {
        writeln!(self.output, "Running self-check...")?;
        let report = run_self_check();
        write!(self.output, "{}", report.render(&self.palette))?;
        if report.all_passed() {
            writeln!(self.output, "Self-check completed successfully.")?;
        } else {
            writeln!(
                self.output,
                "Self-check finished with {} failure(s).",
                report.failed()
            )?;
        }
        Ok(())
    }

    fn report(&mut self, outcome: &Outcome) -> io::Result<()> {
        let p = self.palette;
        for notice in &outcome.notices {
            writeln!(self.output, "{}{notice}{}", p.yellow, p.reset)?;
        }
        let color = if outcome.success { p.green } else { p.red };
        writeln!(self.output, "{color}{outcome}{}", p.reset)
    }

    fn prompt(&mut self, text: &str) -> Result<String, Interrupt> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()?.ok_or(Interrupt::Eof)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn parse_number<T: FromStr>(raw: &str) -> Result<T, Interrupt> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| Interrupt::Invalid(format!("Error: '{raw}' is not a valid number.")))
}

fn invalid(err: cargohold_lib::Error) -> Interrupt {
    Interrupt::Invalid(format!("Error: {err}"))
}
