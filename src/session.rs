//! The interactive analysis loop: load the dataset once, then dispatch menu
//! choices to read-only views until the user exits.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::loader::DatasetLoader;
use crate::logger::DailyLog;
use crate::render::Printer;
use crate::stats::summarize_numeric;
use crate::types::infer_kind;
use crate::{CardexError, Dataset, Scalar};

const PREVIEW_ROWS: usize = 5;

const MENU: &str = "\
1. Show head, tail and schema
2. Show summary statistics
3. Show column names
4. Show full dataset
5. Clear the screen
6. Exit";

/// One menu action, parsed from a single line of input. Anything outside
/// "1".."6" becomes `Invalid` carrying the raw text; that is a normal
/// transition, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    HeadTailInfo,
    Statistics,
    Columns,
    FullDataset,
    ClearScreen,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> MenuChoice {
        match input.trim() {
            "1" => MenuChoice::HeadTailInfo,
            "2" => MenuChoice::Statistics,
            "3" => MenuChoice::Columns,
            "4" => MenuChoice::FullDataset,
            "5" => MenuChoice::ClearScreen,
            "6" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// Menu-driven session over one immutable dataset. Input, presentation and
/// the diagnostic sink are injected so the state machine can be driven from
/// tests.
pub struct AnalysisSession<'a, R: BufRead, W: Write> {
    path: PathBuf,
    input: R,
    printer: Printer<W>,
    log: &'a DailyLog,
}

impl<'a, R: BufRead, W: Write> AnalysisSession<'a, R, W> {
    pub fn new(path: PathBuf, input: R, printer: Printer<W>, log: &'a DailyLog) -> Self {
        AnalysisSession {
            path,
            input,
            printer,
            log,
        }
    }

    /// Load the dataset, then run the menu loop until exit or end of input.
    pub fn run(&mut self) -> Result<(), CardexError> {
        let dataset = DatasetLoader::new(self.log).load(&self.path)?;

        loop {
            self.printer.panel("Car dataset analysis", MENU)?;
            self.printer.prompt("Select an option: ")?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    self.log.info("input closed, ending session");
                    break;
                }
                Ok(_) => {}
                // Interrupted input: leave quietly, no further menu content.
                Err(_) => break,
            }

            match MenuChoice::parse(&line) {
                MenuChoice::HeadTailInfo => self.show_overview(&dataset)?,
                MenuChoice::Statistics => self.show_statistics(&dataset)?,
                MenuChoice::Columns => self.show_columns(&dataset)?,
                MenuChoice::FullDataset => self.show_full(&dataset)?,
                MenuChoice::ClearScreen => self.printer.clear()?,
                MenuChoice::Exit => {
                    self.printer.line("Exiting the analysis. Goodbye!")?;
                    self.log.info("session ended by user");
                    break;
                }
                MenuChoice::Invalid(raw) => {
                    self.printer
                        .notice(&format!("Option {raw} is invalid. Try again."))?;
                }
            }
        }

        self.printer.flush()
    }

    fn show_overview(&mut self, dataset: &Dataset) -> Result<(), CardexError> {
        let headers = dataset.columns().to_vec();
        self.printer.table(
            "Head (first 5 rows)",
            &headers,
            &render_rows(dataset.head(PREVIEW_ROWS)),
        )?;
        self.printer.table(
            "Tail (last 5 rows)",
            &headers,
            &render_rows(dataset.tail(PREVIEW_ROWS)),
        )?;

        let schema_headers = vec![
            "Column".to_string(),
            "Non-null".to_string(),
            "Kind".to_string(),
        ];
        let schema_rows: Vec<Vec<String>> = dataset
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let non_null = dataset.column(idx).filter(|v| !v.is_null()).count();
                vec![
                    name.clone(),
                    format!("{non_null} non-null"),
                    infer_kind(dataset.column(idx)).to_string(),
                ]
            })
            .collect();
        self.printer.table("Schema", &schema_headers, &schema_rows)?;
        self.printer.line(&format!(
            "{} rows x {} columns",
            dataset.len(),
            dataset.columns().len()
        ))
    }

    fn show_statistics(&mut self, dataset: &Dataset) -> Result<(), CardexError> {
        let summaries = summarize_numeric(dataset);
        if summaries.is_empty() {
            return self.printer.notice("No numeric columns to summarize.");
        }

        let headers = ["Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"]
            .map(String::from)
            .to_vec();
        let rows: Vec<Vec<String>> = summaries
            .iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    s.count.to_string(),
                    format!("{:.2}", s.mean),
                    format!("{:.2}", s.std_dev),
                    format!("{:.2}", s.min),
                    format!("{:.2}", s.q1),
                    format!("{:.2}", s.median),
                    format!("{:.2}", s.q3),
                    format!("{:.2}", s.max),
                ]
            })
            .collect();
        self.printer.table("Summary statistics", &headers, &rows)
    }

    fn show_columns(&mut self, dataset: &Dataset) -> Result<(), CardexError> {
        let rows: Vec<Vec<String>> = dataset
            .columns()
            .iter()
            .map(|name| vec![name.clone()])
            .collect();
        self.printer
            .table("Columns", &["Column".to_string()], &rows)
    }

    fn show_full(&mut self, dataset: &Dataset) -> Result<(), CardexError> {
        self.printer.table(
            "Full dataset",
            dataset.columns(),
            &render_rows(dataset.rows()),
        )
    }
}

fn render_rows(rows: &[Vec<Scalar>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(Scalar::to_string).collect())
        .collect()
}
