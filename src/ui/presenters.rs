use crate::io::OutputWriter;
use crate::models::coords::Quadrant;
use crate::services::ring_calculator::RingCalculator;
use crate::services::stronghold_set::StrongholdSet;

const COLUMN_WIDTH: usize = 20;

pub struct StrongholdPresenter;

impl StrongholdPresenter {
    /// Ring, ring size and remaining count. Blank values when nothing is calculated.
    pub fn show_status(
        calculation: Option<(&RingCalculator, &StrongholdSet)>,
        output: &mut dyn OutputWriter,
    ) {
        match calculation {
            Some((calc, set)) => {
                let ring = calc.ring_index().map(|r| r.to_string()).unwrap_or_default();
                let count = calc
                    .structure_count()
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                output.writeln(&format!("Ring: {}", ring));
                output.writeln(&format!("Num Strongholds: {}", count));
                output.writeln(&format!("Strongholds Left: {}", set.remaining()));
                output.writeln(&format!("Units: {}", set.dimension().label()));
            }
            None => {
                output.writeln("Ring: ");
                output.writeln("Num Strongholds: ");
                output.writeln("Strongholds Left: ");
            }
        }
    }

    /// One column per quadrant, entries in bearing order.
    pub fn show_table(set: &StrongholdSet, output: &mut dyn OutputWriter) {
        let columns = set.by_quadrant();

        let header: String = Quadrant::ALL
            .iter()
            .map(|q| format!("{:<w$}", format!("{} {}", q.symbol(), q.heading()), w = COLUMN_WIDTH))
            .collect();
        output.writeln(header.trim_end());
        output.writeln(&"-".repeat(COLUMN_WIDTH * Quadrant::ALL.len()));

        let rows = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        for row in 0..rows {
            let line: String = columns
                .iter()
                .map(|column| {
                    let cell = column.get(row).map(|c| c.display_form()).unwrap_or_default();
                    format!("{:<w$}", cell, w = COLUMN_WIDTH)
                })
                .collect();
            output.writeln(line.trim_end());
        }
    }

    pub fn show_calculation(
        calc: &RingCalculator,
        set: &StrongholdSet,
        output: &mut dyn OutputWriter,
    ) {
        Self::show_status(Some((calc, set)), output);
        output.writeln("");
        Self::show_table(set, output);
    }
}

pub struct SessionPresenter;

impl SessionPresenter {
    pub fn show_banner(output: &mut dyn OutputWriter) {
        output.writeln("*** STRONGHOLD RING CALCULATOR ***");
        output.writeln("Stand in the middle of the starter staircase and enter its x and z.");
        output.writeln("");
    }

    pub fn show_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   c <x> <z> = CALCULATE FROM A FOUND STRONGHOLD");
        output.writeln("   r <x> <z> = REMOVE A VISITED STRONGHOLD");
        output.writeln("   n         = TOGGLE NETHER / OVERWORLD COORDINATES");
        output.writeln("   l         = LIST REMAINING STRONGHOLDS");
        output.writeln("   x         = RESET");
        output.writeln("   q         = QUIT");
    }

    pub fn show_out_of_range(distance: f64, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "The coordinates ({} blocks from the origin) are not in a stronghold ring.",
            distance
        ));
    }
}
