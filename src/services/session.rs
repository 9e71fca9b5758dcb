use clap::ValueEnum;
use tracing::{info, warn};

use crate::io::{InputReader, OutputWriter};
use crate::models::constants::Dimension;
use crate::models::errors::{CalcError, CalcResult};
use crate::services::ring_calculator::RingCalculator;
use crate::services::stronghold_set::StrongholdSet;
use crate::ui::presenters::{SessionPresenter, StrongholdPresenter};

/// How the ring of a found stronghold is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingChoice {
    Detect,
    Manual(i32),
    Guess,
}

/// What to do when a found stronghold lies in no ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutOfRangePolicy {
    /// Ask every time
    #[default]
    Ask,
    /// Enter the ring by hand
    Manual,
    /// Use the ring with the nearest band
    Guess,
    /// Discard the input and enter new coordinates
    Retry,
}

/// Builds a calculator for (`x`, `z`) with the ring decided by `choice`.
pub fn resolve(x: f64, z: f64, choice: RingChoice) -> CalcResult<RingCalculator> {
    match choice {
        RingChoice::Detect => RingCalculator::new(x, z, false),
        RingChoice::Manual(n) => {
            let mut calc = RingCalculator::new(x, z, true)?;
            calc.set_ring(n)?;
            Ok(calc)
        }
        RingChoice::Guess => {
            let mut calc = RingCalculator::new(x, z, true)?;
            calc.estimate_ring();
            Ok(calc)
        }
    }
}

/// Resolves and projects in one go, for non-interactive use.
///
/// A detected ring that fails is retried as a guess only under
/// `OutOfRangePolicy::Guess`; every other policy needs a person to answer.
pub fn calculate_once(
    x: f64,
    z: f64,
    choice: RingChoice,
    policy: OutOfRangePolicy,
    dimension: Dimension,
) -> CalcResult<(RingCalculator, StrongholdSet)> {
    let calc = match resolve(x, z, choice) {
        Err(CalcError::OutOfRange { distance }) if policy == OutOfRangePolicy::Guess => {
            warn!(distance, "out of range, guessing ring");
            resolve(x, z, RingChoice::Guess)?
        }
        other => other?,
    };
    let coords = calc.project(dimension == Dimension::Nether)?;
    Ok((calc, StrongholdSet::new(coords, dimension)))
}

struct Calculation {
    calculator: RingCalculator,
    strongholds: StrongholdSet,
}

/// Interactive command loop.
pub struct Session<I: InputReader, O: OutputWriter> {
    input: I,
    output: O,
    policy: OutOfRangePolicy,
    dimension: Dimension,
    current: Option<Calculation>,
}

impl<I: InputReader, O: OutputWriter> Session<I, O> {
    pub fn new(input: I, output: O, policy: OutOfRangePolicy, dimension: Dimension) -> Self {
        Session {
            input,
            output,
            policy,
            dimension,
            current: None,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn strongholds(&self) -> Option<&StrongholdSet> {
        self.current.as_ref().map(|c| &c.strongholds)
    }

    pub fn calculator(&self) -> Option<&RingCalculator> {
        self.current.as_ref().map(|c| &c.calculator)
    }

    pub fn run(&mut self) -> CalcResult<()> {
        SessionPresenter::show_banner(&mut self.output);
        SessionPresenter::show_command_menu(&mut self.output);

        while let Some(line) = self.input.read_line("COMMAND")? {
            let line = line.trim();
            let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

            let result = match command {
                "c" | "C" => self.calculate_command(rest),
                "r" | "R" => self.remove(rest),
                "n" | "N" => {
                    self.toggle_dimension();
                    Ok(())
                }
                "l" | "L" => {
                    self.show();
                    Ok(())
                }
                "x" | "X" => {
                    self.reset();
                    Ok(())
                }
                "q" | "Q" => {
                    self.output.writeln("GOODBYE.");
                    break;
                }
                _ => {
                    SessionPresenter::show_command_menu(&mut self.output);
                    Ok(())
                }
            };

            // Errors from a command are reported and the loop carries on
            if let Err(e) = result {
                self.output.writeln(&format!("Error: {}", e));
            }
        }
        Ok(())
    }

    fn calculate_command(&mut self, args: &str) -> CalcResult<()> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        let (x, z) = match parts.as_slice() {
            [x, z] => (x.parse::<f64>()?, z.parse::<f64>()?),
            _ => {
                return Err(CalcError::ParseError(
                    "calculate needs an x and a z coordinate".to_string(),
                ))
            }
        };
        self.calculate(x, z)
    }

    /// Calculates from a found stronghold, recovering per policy when it is in no ring.
    pub fn calculate(&mut self, x: f64, z: f64) -> CalcResult<()> {
        info!(x, z, "calculate");
        match resolve(x, z, RingChoice::Detect) {
            Ok(calc) => self.finish(calc),
            Err(CalcError::OutOfRange { distance }) => self.recover(x, z, distance),
            Err(e) => Err(e),
        }
    }

    fn recover(&mut self, x: f64, z: f64, distance: f64) -> CalcResult<()> {
        SessionPresenter::show_out_of_range(distance, &mut self.output);
        let policy = match self.policy {
            OutOfRangePolicy::Ask => self.ask_policy()?,
            chosen => chosen,
        };
        warn!(distance, ?policy, "stronghold out of range");

        match policy {
            OutOfRangePolicy::Manual => {
                let Some(answer) = self.input.read_line("RING NUMBER (1-8)?")? else {
                    return Ok(());
                };
                let ring = answer.trim().parse::<i32>()?;
                let calc = resolve(x, z, RingChoice::Manual(ring))?;
                self.finish(calc)
            }
            OutOfRangePolicy::Guess => {
                let calc = resolve(x, z, RingChoice::Guess)?;
                self.finish(calc)
            }
            OutOfRangePolicy::Retry | OutOfRangePolicy::Ask => {
                self.output.writeln("Enter new coordinates.");
                Ok(())
            }
        }
    }

    /// Asks how to recover and whether to keep that answer for the rest of the session.
    fn ask_policy(&mut self) -> CalcResult<OutOfRangePolicy> {
        let answer = self
            .input
            .read_line("ENTER MANUALLY (M), GUESS (G) OR TRY AGAIN (T)?")?
            .unwrap_or_default();
        let policy = match answer.trim() {
            "m" | "M" => OutOfRangePolicy::Manual,
            "g" | "G" => OutOfRangePolicy::Guess,
            _ => OutOfRangePolicy::Retry,
        };

        let keep = self
            .input
            .read_line("MAKE THIS THE DEFAULT FOR THIS SESSION (Y/N)?")?
            .unwrap_or_default();
        if keep.trim().eq_ignore_ascii_case("y") {
            info!(?policy, "out of range policy set");
            self.policy = policy;
        }
        Ok(policy)
    }

    fn finish(&mut self, calculator: RingCalculator) -> CalcResult<()> {
        let coords = calculator.project(self.dimension == Dimension::Nether)?;
        self.current = Some(Calculation {
            calculator,
            strongholds: StrongholdSet::new(coords, self.dimension),
        });
        self.show();
        Ok(())
    }

    /// Drops a visited stronghold, named by its display form.
    pub fn remove(&mut self, text: &str) -> CalcResult<()> {
        let Some(current) = self.current.as_mut() else {
            self.output.writeln("Nothing calculated yet.");
            return Ok(());
        };
        if current.strongholds.remove_display(text)? {
            self.show();
        } else {
            self.output
                .writeln(&format!("{} is not in the list.", text.trim()));
        }
        Ok(())
    }

    pub fn toggle_dimension(&mut self) {
        self.dimension = self.dimension.toggled();
        info!(dimension = self.dimension.label(), "units toggled");
        if let Some(current) = self.current.as_mut() {
            current.strongholds.set_dimension(self.dimension);
            self.show();
        } else {
            self.output
                .writeln(&format!("Units: {}", self.dimension.label()));
        }
    }

    pub fn reset(&mut self) {
        info!("reset");
        self.current = None;
        StrongholdPresenter::show_status(None, &mut self.output);
    }

    fn show(&mut self) {
        match self.current.as_ref() {
            Some(c) => StrongholdPresenter::show_calculation(
                &c.calculator,
                &c.strongholds,
                &mut self.output,
            ),
            None => StrongholdPresenter::show_status(None, &mut self.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};

    fn session(script: Vec<&str>) -> Session<MockInput, MockOutput> {
        Session::new(
            MockInput::new(script),
            MockOutput::new(),
            OutOfRangePolicy::Ask,
            Dimension::Overworld,
        )
    }

    #[test]
    fn calculate_in_ring() {
        let mut s = session(vec!["c 0 1280", "q"]);
        s.run().unwrap();
        assert_eq!(s.calculator().unwrap().ring_index(), Some(1));
        assert_eq!(s.strongholds().unwrap().remaining(), 2);
        assert!(s.output().text().contains("Strongholds Left: 2"));
    }

    #[test]
    fn input_ending_stops_the_loop() {
        let mut s = session(vec!["c 0 1280"]);
        assert!(s.run().is_ok());
        assert!(s.strongholds().is_some());
    }

    #[test]
    fn bad_numbers_are_reported_and_loop_continues() {
        let mut s = session(vec!["c abc 10", "c 5", "c 0 5000", "q"]);
        s.run().unwrap();
        let text = s.output().text();
        assert_eq!(text.matches("Error: parse error").count(), 2);
        assert_eq!(s.calculator().unwrap().ring_index(), Some(2));
    }

    #[test]
    fn out_of_range_manual_entry() {
        let mut s = session(vec!["c 0 0", "m", "n", "3", "q"]);
        s.run().unwrap();
        assert_eq!(s.calculator().unwrap().ring_index(), Some(3));
        assert_eq!(s.strongholds().unwrap().remaining(), 9);
        // not kept as default
        assert_eq!(s.policy(), OutOfRangePolicy::Ask);
    }

    #[test]
    fn out_of_range_manual_entry_rejects_bad_ring() {
        let mut s = session(vec!["c 0 0", "m", "n", "9", "q"]);
        s.run().unwrap();
        assert!(s.output().text().contains("Error: invalid ring number 9"));
        assert!(s.calculator().is_none());
    }

    #[test]
    fn out_of_range_guess_kept_as_default() {
        let mut s = session(vec!["c 0 3000", "g", "y", "c 0 30000", "q"]);
        s.run().unwrap();
        assert_eq!(s.policy(), OutOfRangePolicy::Guess);
        // second calculation guessed without prompting again
        assert_eq!(s.calculator().unwrap().ring_index(), Some(8));
        assert_eq!(
            s.input.prompts,
            vec![
                "COMMAND",
                "ENTER MANUALLY (M), GUESS (G) OR TRY AGAIN (T)?",
                "MAKE THIS THE DEFAULT FOR THIS SESSION (Y/N)?",
                "COMMAND",
                "COMMAND",
            ]
        );
    }

    #[test]
    fn out_of_range_try_again() {
        let mut s = session(vec!["c 0 0", "t", "n", "q"]);
        s.run().unwrap();
        assert!(s.calculator().is_none());
        assert!(s.output().text().contains("Enter new coordinates."));
    }

    #[test]
    fn configured_policy_skips_the_question() {
        let mut s = Session::new(
            MockInput::new(vec!["c 0 0", "q"]),
            MockOutput::new(),
            OutOfRangePolicy::Guess,
            Dimension::Overworld,
        );
        s.run().unwrap();
        assert_eq!(s.calculator().unwrap().ring_index(), Some(1));
        assert!(s.input.prompts.iter().all(|p| p == "COMMAND"));
    }

    #[test]
    fn remove_visited_stronghold() {
        let mut s = session(vec!["c 0 5000"]);
        s.run().unwrap();
        let target = s.strongholds().unwrap().sorted()[0];
        s.remove(&target.display_form()).unwrap();
        assert_eq!(s.strongholds().unwrap().remaining(), 4);
        assert!(!s.strongholds().unwrap().contains(&target));

        s.remove(&target.display_form()).unwrap();
        assert!(s.output().text().contains("is not in the list."));
        assert_eq!(s.strongholds().unwrap().remaining(), 4);
    }

    #[test]
    fn remove_without_calculation() {
        let mut s = session(vec!["r 1 2", "q"]);
        s.run().unwrap();
        assert!(s.output().text().contains("Nothing calculated yet."));
    }

    #[test]
    fn toggle_converts_held_strongholds() {
        let mut s = session(vec!["c 0 5000"]);
        s.run().unwrap();
        let before: Vec<(i64, i64)> = s
            .strongholds()
            .unwrap()
            .sorted()
            .iter()
            .map(|c| c.block())
            .collect();

        s.toggle_dimension();
        assert_eq!(s.dimension(), Dimension::Nether);
        let set = s.strongholds().unwrap();
        assert_eq!(set.dimension(), Dimension::Nether);
        for c in set.iter() {
            assert!((c.distance_from_origin() - 640.0).abs() < 1.0);
        }

        s.toggle_dimension();
        let after: Vec<(i64, i64)> = s
            .strongholds()
            .unwrap()
            .sorted()
            .iter()
            .map(|c| c.block())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn nether_session_projects_in_nether_units() {
        let mut s = Session::new(
            MockInput::new(vec!["c 0 5000"]),
            MockOutput::new(),
            OutOfRangePolicy::Ask,
            Dimension::Nether,
        );
        s.run().unwrap();
        assert!(s.output().text().contains("Units: NETHER"));
    }

    #[test]
    fn reset_clears_calculation() {
        let mut s = session(vec!["c 0 5000", "x", "q"]);
        s.run().unwrap();
        assert!(s.calculator().is_none());
    }

    #[test]
    fn unknown_command_shows_menu() {
        let mut s = session(vec!["help", "q"]);
        s.run().unwrap();
        let menus = s.output().text().matches("= QUIT").count();
        assert_eq!(menus, 2);
    }

    #[test]
    fn calculate_once_guess_policy() {
        let (calc, set) = calculate_once(
            0.0,
            0.0,
            RingChoice::Detect,
            OutOfRangePolicy::Guess,
            Dimension::Overworld,
        )
        .unwrap();
        assert_eq!(calc.ring_index(), Some(1));
        assert_eq!(set.remaining(), 2);
    }

    #[test]
    fn calculate_once_reports_out_of_range() {
        let result = calculate_once(
            0.0,
            0.0,
            RingChoice::Detect,
            OutOfRangePolicy::Ask,
            Dimension::Overworld,
        );
        assert!(matches!(result, Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn resolve_manual_override() {
        let calc = resolve(0.0, 1500.0, RingChoice::Manual(5)).unwrap();
        assert_eq!(calc.ring_index(), Some(5));
        assert!(matches!(
            resolve(0.0, 1500.0, RingChoice::Manual(0)),
            Err(CalcError::InvalidRing(0))
        ));
    }
}
