//! Self-check harness: drives the core with fixed scenarios and reports
//! pass/fail per scenario. Runs entirely in-process against fresh containers
//! and ships.

use cargohold_lib::container::GAS_RESIDUAL_FRACTION;
use cargohold_lib::{Cargo, Container, Error, Result, Ship};

use crate::terminal::ColorPalette;

const EPSILON: f64 = 1e-9;

/// Outcome of a single scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail: detail.into(),
        }
    }
}

/// Results of a full self-check run.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Render one line per scenario followed by a summary line.
    pub fn render(&self, palette: &ColorPalette) -> String {
        let mut out = String::new();
        for r in &self.results {
            let (icon, color) = if r.passed {
                ("✓", palette.green)
            } else {
                ("✗", palette.red)
            };
            out.push_str(&format!(
                "  {color}{icon}{reset} {}: {gray}{}{reset}\n",
                r.name,
                r.detail,
                reset = palette.reset,
                gray = palette.gray,
            ));
        }
        out.push_str(&format!(
            "=== RESULT: {}/{} passed, {} failed ===\n",
            self.passed(),
            self.results.len(),
            self.failed()
        ));
        out
    }
}

type Scenario = fn() -> Result<CheckResult>;

const SCENARIOS: &[(&str, Scenario)] = &[
    ("basic_capacity_limit", basic_capacity_limit),
    ("liquid_hazardous_half_limit", liquid_hazardous_half_limit),
    ("liquid_safe_fill_clamp", liquid_safe_fill_clamp),
    ("gas_residual_after_empty", gas_residual_after_empty),
    ("refrigerated_unknown_kind", refrigerated_unknown_kind),
    ("refrigerated_no_capacity_check", refrigerated_no_capacity_check),
    ("ship_container_count_limit", ship_container_count_limit),
    ("ship_weight_uses_capacity", ship_weight_uses_capacity),
    ("ship_unload_reload_round_trip", ship_unload_reload_round_trip),
];

/// Run every scenario. Setup failures are reported as failed scenarios.
pub fn run_self_check() -> CheckReport {
    let results = SCENARIOS
        .iter()
        .map(|(name, scenario)| {
            scenario().unwrap_or_else(|err| {
                CheckResult::new(name, false, format!("scenario setup failed: {err}"))
            })
        })
        .collect();
    CheckReport { results }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn basic_capacity_limit() -> Result<CheckResult> {
    let mut container = Container::basic("B100", 800.0, 100.0)?;
    let rejected = matches!(
        container.load(&Cargo::new("steel", 800.5)?),
        Err(Error::OverCapacity { .. })
    );
    let accepted = container.load(&Cargo::new("steel", 800.0)?).is_ok()
        && close(container.current_cargo_mass(), 800.0);
    Ok(CheckResult::new(
        "basic_capacity_limit",
        rejected && accepted,
        "800.5 rejected, 800 accepted for capacity 800",
    ))
}

fn liquid_hazardous_half_limit() -> Result<CheckResult> {
    let mut container = Container::liquid("L123", 1000.0, 200.0, 5.0)?;
    let rejected = matches!(
        container.load(&Cargo::new("hazardous", 600.0)?),
        Err(Error::OverCapacity { .. })
    );
    let accepted = container.load(&Cargo::new("hazardous", 400.0)?).is_ok()
        && close(container.current_cargo_mass(), 400.0);
    Ok(CheckResult::new(
        "liquid_hazardous_half_limit",
        rejected && accepted,
        format!(
            "hazardous 600 rejected: {rejected}, hazardous 400 loaded: {}",
            container.current_cargo_mass()
        ),
    ))
}

fn liquid_safe_fill_clamp() -> Result<CheckResult> {
    let mut container = Container::liquid("L124", 1000.0, 200.0, 5.0)?;
    let warned = container.load(&Cargo::new("milk", 950.0)?)?.is_some();
    let clamped = close(container.current_cargo_mass(), 900.0);
    let exact = container.load(&Cargo::new("milk", 800.0)?)?.is_none()
        && close(container.current_cargo_mass(), 800.0);
    Ok(CheckResult::new(
        "liquid_safe_fill_clamp",
        warned && clamped && exact,
        "950 clamped to 900 with warning, 800 loaded exactly",
    ))
}

fn gas_residual_after_empty() -> Result<CheckResult> {
    let mut container = Container::gas("G456", 800.0, 150.0, 3.0)?;
    container.load(&Cargo::new("non-hazardous", 500.0)?)?;
    container.empty();
    let expected = 500.0 * GAS_RESIDUAL_FRACTION;
    Ok(CheckResult::new(
        "gas_residual_after_empty",
        close(container.current_cargo_mass(), expected),
        format!(
            "residual {} (expected {expected})",
            container.current_cargo_mass()
        ),
    ))
}

fn refrigerated_unknown_kind() -> Result<CheckResult> {
    let mut container = Container::refrigerated("R789", 1200.0, 300.0)?;
    let result = container.load(&Cargo::new("kiwi", 10.0)?);
    Ok(CheckResult::new(
        "refrigerated_unknown_kind",
        matches!(result, Err(Error::UnknownCargoKind { .. })),
        "kiwi rejected as unknown cargo kind",
    ))
}

fn refrigerated_no_capacity_check() -> Result<CheckResult> {
    let mut container = Container::refrigerated("R790", 1200.0, 300.0)?;
    container.load(&Cargo::new("meat", 5000.0)?)?;
    Ok(CheckResult::new(
        "refrigerated_no_capacity_check",
        close(container.current_cargo_mass(), 5000.0),
        "meat 5000 accepted into capacity 1200",
    ))
}

fn ship_container_count_limit() -> Result<CheckResult> {
    let mut ship = Ship::new("Check", 10.0, 2, 1_000_000.0)?;
    ship.load_container(Container::basic("C1", 10.0, 1.0)?)?;
    ship.load_container(Container::basic("C2", 10.0, 1.0)?)?;
    let result = ship.load_container(Container::basic("C3", 10.0, 1.0)?);
    Ok(CheckResult::new(
        "ship_container_count_limit",
        matches!(result, Err(Error::CapacityExceeded { .. })) && ship.container_count() == 2,
        "third container rejected on a two-slot ship",
    ))
}

fn ship_weight_uses_capacity() -> Result<CheckResult> {
    let mut ship = Ship::new("Check", 10.0, 5, 1000.0)?;
    ship.load_container(Container::basic("W1", 200.0, 100.0)?)?;
    let empty = Container::basic("W2", 950.0, 0.0)?;
    let result = ship.load_container(empty);
    Ok(CheckResult::new(
        "ship_weight_uses_capacity",
        matches!(result, Err(Error::Overloaded { .. })),
        "empty container with capacity 950 rejected with 900 headroom",
    ))
}

fn ship_unload_reload_round_trip() -> Result<CheckResult> {
    let mut ship = Ship::new("Check", 10.0, 5, 5000.0)?;
    let mut gas = Container::gas("G1", 800.0, 150.0, 3.0)?;
    gas.load(&Cargo::new("helium", 300.0)?)?;
    ship.load_container(Container::liquid("L1", 1000.0, 200.0, 5.0)?)?;
    ship.load_container(gas)?;
    let weight_before = ship.total_weight();

    let removed = ship
        .unload_container("G1")
        .ok_or_else(|| Error::ContainerNotFound {
            serial_number: "G1".to_string(),
            ship: ship.name().to_string(),
        })?;
    ship.load_container(removed)?;

    let same = ship.container_count() == 2
        && ship.contains("G1")
        && close(ship.total_weight(), weight_before);
    Ok(CheckResult::new(
        "ship_unload_reload_round_trip",
        same,
        format!("weight {} after reload", ship.total_weight()),
    ))
}
