//! Shared fixtures: a passing JET submission that tests perturb one cell at a time

#![allow(dead_code)]

use jetgrade::types::{CellRef, Sheet, Workbook, WorkbookBuilder};
use std::path::PathBuf;
use tempfile::TempDir;

/// Numeric cell contents of a submission, keyed by sheet and position
#[derive(Debug, Clone, Default)]
pub struct Submission {
    cells: Vec<(Sheet, CellRef, f64)>,
}

impl Submission {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a cell by A1 reference
    pub fn set(mut self, sheet: Sheet, reference: &str, value: f64) -> Self {
        let cell = CellRef::parse(reference).unwrap();
        self.cells.retain(|(s, c, _)| !(*s == sheet && *c == cell));
        self.cells.push((sheet, cell, value));
        self
    }

    /// Set a cell by 1-based (row, column)
    pub fn set_at(self, sheet: Sheet, row1: u32, col1: u32, value: f64) -> Self {
        let reference = CellRef::from_one_based(row1, col1).unwrap().to_string();
        self.set(sheet, &reference, value)
    }

    /// Remove a cell so it reads as empty
    pub fn clear(mut self, sheet: Sheet, reference: &str) -> Self {
        let cell = CellRef::parse(reference).unwrap();
        self.cells.retain(|(s, c, _)| !(*s == sheet && *c == cell));
        self
    }

    pub fn builder(&self) -> WorkbookBuilder {
        self.cells
            .iter()
            .fold(Workbook::builder(), |b, (sheet, cell, value)| {
                b.cell(*sheet, &cell.to_string(), *value)
            })
    }

    pub fn build(&self) -> Workbook {
        self.builder().build()
    }

    /// Write a real workbook with every rubric tab except `omit`
    pub fn write(&self, dir: &TempDir, name: &str, omit: &[Sheet]) -> PathBuf {
        let mut book = rust_xlsxwriter::Workbook::new();
        for sheet in Sheet::ALL {
            if omit.contains(&sheet) {
                continue;
            }
            let ws = book.add_worksheet();
            ws.set_name(sheet.tab_name()).unwrap();
            // A label in A1 keeps the tab non-empty
            ws.write_string(0, 0, sheet.tab_name()).unwrap();
            for (target, cell, value) in &self.cells {
                if *target == sheet {
                    ws.write_number(cell.row, cell.col as u16, *value).unwrap();
                }
            }
        }
        let path = dir.path().join(name);
        book.save(&path).unwrap();
        path
    }

    /// A submission that passes every rubric check without earning any
    /// objective notes
    pub fn clean() -> Self {
        let mut s = Self::empty()
            // Aero: template pairs edited
            .set(Sheet::Aero, "G3", 0.020)
            .set(Sheet::Aero, "G4", 0.025)
            .set(Sheet::Aero, "G10", 0.10)
            .set(Sheet::Aero, "G11", 0.12)
            .set(Sheet::Aero, "A15", 1.0)
            .set(Sheet::Aero, "A16", 2.0);

        // Mission legs: (altitude, mach, afterburner, distance, time)
        let legs: [(u32, [f64; 5]); 9] = [
            (11, [0.0, 0.2, 100.0, 0.0, 1.0]),
            (12, [20000.0, 0.6, 0.0, 20.0, 3.0]),
            (13, [35000.0, 0.9, 0.0, 100.0, 10.0]),
            (14, [35000.0, 0.9, 0.0, 100.0, 10.0]),
            (16, [40000.0, 1.6, 0.0, 150.0, 6.0]),
            (18, [30000.0, 1.2, 100.0, 0.0, 2.0]),
            (19, [40000.0, 1.6, 0.0, 150.0, 6.0]),
            (22, [35000.0, 0.9, 0.0, 100.0, 10.0]),
            (23, [10000.0, 0.4, 0.0, 0.0, 20.0]),
        ];
        for (col, values) in legs {
            for (row, value) in [33, 35, 36, 38, 39].into_iter().zip(values) {
                s = s.set_at(Sheet::Main, row, col, value);
            }
        }

        // Thrust: available beats required on every leg
        for col in 3..=14 {
            s = s
                .set_at(Sheet::Miss, 48, col, 10000.0)
                .set_at(Sheet::Miss, 49, col, 12000.0);
        }

        // Constraint table, columns T..Y: altitude, mach, n, AB, Ps, CDx
        let table: [(u32, [f64; 6]); 6] = [
            (3, [40000.0, 2.1, 1.0, 100.0, 0.0, 0.0]),
            (4, [40000.0, 1.6, 1.0, 0.0, 0.0, 0.0]),
            (6, [30000.0, 1.2, 3.5, 100.0, 0.0, 0.0]),
            (7, [10000.0, 0.9, 4.2, 100.0, 0.0, 0.0]),
            (8, [30000.0, 1.15, 1.0, 100.0, 450.0, 0.0]),
            (9, [10000.0, 0.9, 1.0, 0.0, 450.0, 0.0]),
        ];
        for (row, values) in table {
            for (col, value) in (20..=25).zip(values) {
                s = s.set_at(Sheet::Main, row, col, value);
            }
        }

        s = s
            .set(Sheet::Main, "Y37", 400.0)
            .set(Sheet::Main, "AB3", 8.0)
            .set(Sheet::Main, "AB4", 1.0)
            .set(Sheet::Main, "X12", 2800.0)
            .set(Sheet::Main, "X13", 4000.0);

        // Constraint curves: T/W = W/S / 100 on a 40..120 psf axis
        for (i, col) in (11..=31).enumerate() {
            let ws = 40.0 + 4.0 * i as f64;
            s = s.set_at(Sheet::Consts, 22, col, ws);
            for row in [23, 24, 26, 27, 28, 29, 32] {
                s = s.set_at(Sheet::Consts, row, col, ws / 100.0);
            }
        }
        s = s
            .set(Sheet::Consts, "L33", 100.0)
            .set(Sheet::Main, "P13", 60.0)
            .set(Sheet::Main, "Q13", 0.9);

        s
            // Attachments: 50 ft fuselage, PCS, VT and strake attached
            .set(Sheet::Main, "B32", 50.0)
            .set(Sheet::Main, "C18", 60.0)
            .set(Sheet::Main, "C23", 44.0)
            .set(Sheet::Main, "C25", 0.0)
            .set(Sheet::Geom, "C8", 8.0)
            .set(Sheet::Main, "H18", 40.0)
            .set(Sheet::Main, "H23", 42.0)
            .set(Sheet::Main, "H24", 1.0)
            .set(Sheet::Geom, "C10", 10.0)
            .set(Sheet::Main, "D52", 0.0)
            .set(Sheet::Main, "F52", 5.0)
            .set(Sheet::Main, "E52", 6.0)
            .set(Sheet::Main, "D18", 20.0)
            .set(Sheet::Geom, "K15", 45.0)
            .set(Sheet::Geom, "M152", 4.0)
            .set(Sheet::Geom, "L155", 24.0)
            .set(Sheet::Geom, "L38", 20.0)
            // Stability
            .set(Sheet::Main, "M10", 0.05)
            .set(Sheet::Main, "O10", -0.002)
            .set(Sheet::Main, "P10", 0.003)
            .set(Sheet::Main, "Q10", -0.6)
            // Fuel and volume
            .set(Sheet::Main, "O18", 12000.0)
            .set(Sheet::Main, "X40", 11000.0)
            .set(Sheet::Main, "Q23", 3.2)
            // Cost
            .set(Sheet::Main, "N31", 187.0)
            .set(Sheet::Main, "Q31", 110.0)
            // Landing gear
            .set(Sheet::Gear, "J19", 12.0)
            .set(Sheet::Gear, "L20", 14.0)
            .set(Sheet::Gear, "L21", 16.0)
            .set(Sheet::Gear, "M20", 55.0)
            .set(Sheet::Gear, "M21", 63.0)
            .set(Sheet::Gear, "N20", 140.0)
            .set(Sheet::Gear, "N21", 160.0)
    }
}
