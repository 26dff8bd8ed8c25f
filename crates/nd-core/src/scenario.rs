//! The three demonstrations: narrowing through the capability, narrowing
//! through an accept-anything holder, and dispatch through the capability.

use std::any::type_name;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::str::FromStr;

use tracing::{debug, debug_span};

use crate::any::AnyValue;
use crate::dispatch::write_name;
use crate::entity::NamedEntity;
use crate::error::{Error, Result};
use crate::narrow::Narrow;
use crate::provider::NameProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Type switch on a `dyn NameProvider`.
    InterfaceAssertion,
    /// Type switch on an [`AnyValue`].
    EmptyInterfaceAssertion,
    /// `write_name` through a `dyn NameProvider`.
    DynamicDispatch,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::InterfaceAssertion,
        Scenario::EmptyInterfaceAssertion,
        Scenario::DynamicDispatch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::InterfaceAssertion => "assert-interface",
            Scenario::EmptyInterfaceAssertion => "assert-any",
            Scenario::DynamicDispatch => "dispatch",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::InterfaceAssertion => "type assertion on a non-empty interface",
            Scenario::EmptyInterfaceAssertion => "type assertion on an empty interface",
            Scenario::DynamicDispatch => "dynamic dispatch through an interface",
        }
    }

    /// Whether the scenario writes anything to its output.
    pub fn writes_output(&self) -> bool {
        matches!(self, Scenario::DynamicDispatch)
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match Scenario::ALL.into_iter().find(|scenario| scenario.name() == s) {
            Some(scenario) => Ok(scenario),
            None => bail!("unknown scenario `{}`", s),
        }
    }
}

fn narrow_name<S: Narrow + ?Sized>(subject: &S) -> Result<String> {
    subject
        .type_switch()
        .case::<NamedEntity>(|entity| entity.get_name().to_owned())
        .finish()
        .ok_or_else(|| Error::NarrowMismatch {
            expected: type_name::<NamedEntity>(),
            found: subject.held_type_name(),
        })
}

/// Hold the entity as `dyn NameProvider`, recover it with a type switch and
/// read its name.
pub fn assert_interface(entity: NamedEntity) -> Result<String> {
    let provider: Box<dyn NameProvider> = Box::new(entity);
    let name = narrow_name(&*provider)?;
    debug!(%name, "narrowed provider to NamedEntity");
    Ok(name)
}

/// Hold the entity as an [`AnyValue`], recover it with a type switch and read
/// its name.
pub fn assert_any(entity: NamedEntity) -> Result<String> {
    let value = AnyValue::new(entity);
    let name = narrow_name(&value)?;
    debug!(%name, "narrowed any value to NamedEntity");
    Ok(name)
}

/// Hold the entity as `dyn NameProvider` and write its name to `out` without
/// narrowing.
pub fn dispatch<W: Write + ?Sized>(entity: NamedEntity, out: &mut W) -> Result<String> {
    let provider: Box<dyn NameProvider> = Box::new(entity);
    write_name(out, &*provider)?;
    Ok(provider.get_name().to_owned())
}

/// Run one scenario and return the name it observed.
pub fn run<W: Write + ?Sized>(
    scenario: Scenario,
    entity: NamedEntity,
    out: &mut W,
) -> Result<String> {
    let _span = debug_span!("scenario", scenario = scenario.name()).entered();
    match scenario {
        Scenario::InterfaceAssertion => assert_interface(entity),
        Scenario::EmptyInterfaceAssertion => assert_any(entity),
        Scenario::DynamicDispatch => dispatch(entity, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_captured(scenario: Scenario, name: &str) -> (String, String) {
        let mut out = Vec::new();
        let observed = run(scenario, NamedEntity::new(name), &mut out).unwrap();
        (observed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn interface_assertion_recovers_name() {
        assert_eq!(assert_interface(NamedEntity::new("chinese")).unwrap(), "chinese");
    }

    #[test]
    fn any_assertion_recovers_name() {
        assert_eq!(assert_any(NamedEntity::new("chinese")).unwrap(), "chinese");
    }

    #[test]
    fn dispatch_prints_name_line() {
        let (observed, printed) = run_captured(Scenario::DynamicDispatch, "chinese");
        assert_eq!(observed, "chinese");
        assert_eq!(printed, "chinese\n");
        assert!(Scenario::DynamicDispatch.writes_output());
    }

    #[test]
    fn assertions_print_nothing() {
        for scenario in [Scenario::InterfaceAssertion, Scenario::EmptyInterfaceAssertion] {
            let (observed, printed) = run_captured(scenario, "chinese");
            assert_eq!(observed, "chinese");
            assert_eq!(printed, "");
            assert!(!scenario.writes_output());
        }
    }

    #[test]
    fn empty_name_survives_every_pattern() {
        for scenario in Scenario::ALL {
            let (observed, _) = run_captured(scenario, "");
            assert_eq!(observed, "", "{scenario}");
        }
        assert_eq!(run_captured(Scenario::DynamicDispatch, "").1, "\n");
    }

    #[test]
    fn narrow_name_reports_mismatch() {
        let err = narrow_name(&AnyValue::new(3.5_f64)).unwrap_err();
        match err {
            Error::NarrowMismatch { expected, found } => {
                assert_eq!(expected, type_name::<NamedEntity>());
                assert_eq!(found, "f64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scenario_names_parse_back() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.name().parse::<Scenario>().unwrap(), scenario);
        }
        let err = "switch".parse::<Scenario>().unwrap_err();
        assert_eq!(err.to_string(), "Generic error: unknown scenario `switch`");
    }
}
