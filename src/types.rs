use crate::error::{JetError, JetResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

//==============================================================================
// Cell Values
//==============================================================================

/// Canonical content of one worksheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty, missing or error cell
    #[default]
    Absent,
    /// Any numeric cell (ints, floats and date serials all land here)
    Number(f64),
    /// Text that did not parse as a number
    Text(String),
    /// Boolean cell, coerced to 1/0 when read as a number
    Bool(bool),
}

impl CellValue {
    /// Normalize raw text: trimmed, numeric text becomes a number, empty becomes absent
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Absent;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::from_text(s)
    }
}

//==============================================================================
// Cell References
//==============================================================================

/// A parsed A1-style reference, stored 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    /// Build from 1-based row/column indices
    pub fn from_one_based(row1: u32, col1: u32) -> Option<Self> {
        if row1 == 0 || col1 == 0 {
            return None;
        }
        Some(Self {
            row: row1 - 1,
            col: col1 - 1,
        })
    }

    /// Parse "G3" / "AB40". Letters are bijective base-26 (A=1 .. Z=26, AA=27)
    pub fn parse(reference: &str) -> JetResult<Self> {
        let invalid = || JetError::InvalidCellRef(reference.to_string());

        let split = reference
            .find(|c: char| !c.is_ascii_uppercase())
            .ok_or_else(invalid)?;
        let (letters, digits) = reference.split_at(split);
        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let mut col: u64 = 0;
        for b in letters.bytes() {
            col = col * 26 + u64::from(b - b'A' + 1);
            if col > u64::from(u32::MAX) {
                return Err(invalid());
            }
        }
        let row: u32 = digits.parse().map_err(|_| invalid())?;

        Self::from_one_based(row, col as u32).ok_or_else(invalid)
    }

    /// Column letters for a 0-based column index (0→A, 25→Z, 26→AA)
    pub fn column_letters(col: u32) -> String {
        let mut result = String::new();
        let mut num = col as u64 + 1;
        while num > 0 {
            let remainder = ((num - 1) % 26) as u8;
            result.insert(0, (b'A' + remainder) as char);
            num = (num - 1) / 26;
        }
        result
    }
}

impl FromStr for CellRef {
    type Err = JetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellRef::parse(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_letters(self.col), self.row + 1)
    }
}

//==============================================================================
// Sheet Matrix
//==============================================================================

static ABSENT: CellValue = CellValue::Absent;

/// Rectangular, row-major, 0-indexed grid of cell values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetMatrix {
    rows: Vec<Vec<CellValue>>,
    width: usize,
}

impl SheetMatrix {
    /// Create an all-absent grid
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![CellValue::Absent; width]; height],
            width,
        }
    }

    /// (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.width)
    }

    /// Read by 0-based position; out-of-range reads are absent
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&ABSENT)
    }

    /// Read by A1 reference; unparsable references read as absent
    pub fn cell(&self, reference: &str) -> &CellValue {
        match CellRef::parse(reference) {
            Ok(r) => self.get(r.row as usize, r.col as usize),
            Err(_) => &ABSENT,
        }
    }

    /// Read by 1-based (row, column)
    pub fn cell_at(&self, row1: usize, col1: usize) -> &CellValue {
        if row1 == 0 || col1 == 0 {
            return &ABSENT;
        }
        self.get(row1 - 1, col1 - 1)
    }

    /// Write by 0-based position, growing the grid to keep it rectangular
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        self.grow(row + 1, col + 1);
        self.rows[row][col] = value;
    }

    fn grow(&mut self, height: usize, width: usize) {
        if width > self.width {
            for r in &mut self.rows {
                r.resize(width, CellValue::Absent);
            }
            self.width = width;
        }
        if height > self.rows.len() {
            self.rows
                .resize_with(height, || vec![CellValue::Absent; self.width]);
        }
    }

    /// Fill absent slots at the given references from a secondary source.
    ///
    /// Returns the number of cells patched. A malformed reference is a rubric
    /// configuration error.
    pub fn patch_fallbacks<F>(&mut self, references: &[&str], mut source: F) -> JetResult<usize>
    where
        F: FnMut(CellRef) -> Option<CellValue>,
    {
        let mut patched = 0;
        for reference in references {
            let cell_ref = CellRef::parse(reference)?;
            let (row, col) = (cell_ref.row as usize, cell_ref.col as usize);
            if !self.get(row, col).is_absent() {
                continue;
            }
            match source(cell_ref) {
                Some(value) if !value.is_absent() => {
                    self.set(row, col, value);
                    patched += 1;
                }
                _ => {}
            }
        }
        Ok(patched)
    }
}

//==============================================================================
// Workbook
//==============================================================================

/// The six worksheets every submission must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    Aero,
    Miss,
    Main,
    Consts,
    Gear,
    Geom,
}

impl Sheet {
    pub const ALL: [Sheet; 6] = [
        Sheet::Aero,
        Sheet::Miss,
        Sheet::Main,
        Sheet::Consts,
        Sheet::Gear,
        Sheet::Geom,
    ];

    /// Worksheet tab name inside the submitted file
    pub fn tab_name(&self) -> &'static str {
        match self {
            Sheet::Aero => "Aero",
            Sheet::Miss => "Miss",
            Sheet::Main => "Main",
            Sheet::Consts => "Consts",
            Sheet::Gear => "Gear",
            Sheet::Geom => "Geom",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tab_name())
    }
}

/// Immutable snapshot of one graded submission
#[derive(Debug, Clone)]
pub struct Workbook {
    sheets: [SheetMatrix; 6],
    pub file_name: Option<String>,
    pub version_label: String,
}

impl Workbook {
    /// Assemble a workbook; every sheet in [`Sheet::ALL`] must be present
    pub fn from_sheets(
        mut sheets: HashMap<Sheet, SheetMatrix>,
        file_name: Option<String>,
        version_label: impl Into<String>,
    ) -> JetResult<Self> {
        let mut take = |sheet: Sheet| {
            sheets
                .remove(&sheet)
                .ok_or_else(|| JetError::MissingSheet(sheet.tab_name().to_string()))
        };
        Ok(Self {
            sheets: [
                take(Sheet::Aero)?,
                take(Sheet::Miss)?,
                take(Sheet::Main)?,
                take(Sheet::Consts)?,
                take(Sheet::Gear)?,
                take(Sheet::Geom)?,
            ],
            file_name,
            version_label: version_label.into(),
        })
    }

    pub fn builder() -> WorkbookBuilder {
        WorkbookBuilder::default()
    }

    pub fn sheet(&self, sheet: Sheet) -> &SheetMatrix {
        &self.sheets[sheet.index()]
    }

    pub fn aero(&self) -> &SheetMatrix {
        self.sheet(Sheet::Aero)
    }

    pub fn miss(&self) -> &SheetMatrix {
        self.sheet(Sheet::Miss)
    }

    pub fn main(&self) -> &SheetMatrix {
        self.sheet(Sheet::Main)
    }

    pub fn consts(&self) -> &SheetMatrix {
        self.sheet(Sheet::Consts)
    }

    pub fn gear(&self) -> &SheetMatrix {
        self.sheet(Sheet::Gear)
    }

    pub fn geom(&self) -> &SheetMatrix {
        self.sheet(Sheet::Geom)
    }
}

/// In-memory workbook construction, one cell at a time
#[derive(Debug, Default)]
pub struct WorkbookBuilder {
    sheets: [SheetMatrix; 6],
    file_name: Option<String>,
    version_label: String,
}

impl WorkbookBuilder {
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn version_label(mut self, label: impl Into<String>) -> Self {
        self.version_label = label.into();
        self
    }

    /// Set a cell by A1 reference. Panics on a malformed reference.
    pub fn cell(mut self, sheet: Sheet, reference: &str, value: impl Into<CellValue>) -> Self {
        let r = CellRef::parse(reference)
            .unwrap_or_else(|e| panic!("bad fixture reference: {e}"));
        self.sheets[sheet.index()].set(r.row as usize, r.col as usize, value.into());
        self
    }

    /// Set a cell by 1-based (row, column)
    pub fn cell_at(
        mut self,
        sheet: Sheet,
        row1: usize,
        col1: usize,
        value: impl Into<CellValue>,
    ) -> Self {
        assert!(row1 > 0 && col1 > 0, "cell_at is 1-based");
        self.sheets[sheet.index()].set(row1 - 1, col1 - 1, value.into());
        self
    }

    pub fn build(self) -> Workbook {
        Workbook {
            sheets: self.sheets,
            file_name: self.file_name,
            version_label: self.version_label,
        }
    }
}

//==============================================================================
// Results
//==============================================================================

/// Outcome of one rule module invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleResult {
    pub delta: i32,
    pub feedback: Vec<String>,
}

impl RuleResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&mut self, line: impl Into<String>) {
        self.feedback.push(line.into());
    }

    pub fn deduct(&mut self, points: i32) {
        self.delta -= points;
    }
}

/// Terminal output of one grading run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeResult {
    pub score: i32,
    pub max_score: i32,
    pub score_line: String,
    pub cutout_line: String,
    pub feedback_log: String,
}
