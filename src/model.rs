//! Data model for the sequence analyzer.
//!
//! This module contains:
//! - The immutable sequence record produced by the FASTA reader
//! - The operations offered by the interactive menu
//! - The application state driven by the terminal front end

use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::export::export_to_dir;
use crate::genetic_code::TableChoice;
use crate::report::{self, FileAnalysis, Report, NO_SEQUENCES};

/// A named sequence read from a FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    name: String,
    residues: String,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(name: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            residues: residues.into(),
        }
    }

    /// The header text (without '>'), possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The residues, case as supplied.
    pub fn residues(&self) -> &str {
        &self.residues
    }

    /// Returns the length of the sequence in characters.
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.name, self.residues)
    }
}

/// Operations offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AnalyzeDna,
    AnalyzeRna,
    AnalyzeProtein,
    FindMotif,
    Transcribe,
    Translate,
    Exit,
}

impl Operation {
    /// Menu order.
    pub const ALL: [Operation; 7] = [
        Operation::AnalyzeDna,
        Operation::AnalyzeRna,
        Operation::AnalyzeProtein,
        Operation::FindMotif,
        Operation::Transcribe,
        Operation::Translate,
        Operation::Exit,
    ];

    /// Menu entry label.
    pub fn label(self) -> &'static str {
        match self {
            Operation::AnalyzeDna => "Analyze DNA",
            Operation::AnalyzeRna => "Analyze RNA",
            Operation::AnalyzeProtein => "Analyze Protein",
            Operation::FindMotif => "Find Motif",
            Operation::Transcribe => "Transcribe DNA to RNA",
            Operation::Translate => "Translate RNA to Protein",
            Operation::Exit => "Exit",
        }
    }

    /// Questions asked before running, one per input field.
    pub fn prompts(self) -> &'static [&'static str] {
        match self {
            Operation::AnalyzeDna => &["Enter the DNA FASTA file path:"],
            Operation::AnalyzeRna => &["Enter the RNA FASTA file path:"],
            Operation::AnalyzeProtein => &["Enter the Protein FASTA file path:"],
            Operation::FindMotif => &["Enter the sequence:", "Enter the motif to search for:"],
            Operation::Transcribe => &["Enter the DNA sequence:"],
            Operation::Translate => &["Enter the RNA sequence:"],
            Operation::Exit => &[],
        }
    }

    /// Runs the operation on the collected answers.
    ///
    /// `Ok(None)` means the input file held no sequence.
    pub fn run(self, answers: &[String], table: TableChoice) -> anyhow::Result<Option<Report>> {
        let first = answer(answers, 0);
        let report = match self {
            Operation::AnalyzeDna => report::analyze_file(FileAnalysis::Dna, first, table)?,
            Operation::AnalyzeRna => report::analyze_file(FileAnalysis::Rna, first, table)?,
            Operation::AnalyzeProtein => report::analyze_file(FileAnalysis::Protein, first, table)?,
            Operation::FindMotif => Some(report::motif_report(first, answer(answers, 1))),
            Operation::Transcribe => Some(report::transcription_report(first)),
            Operation::Translate => Some(report::translation_report(first, table)),
            Operation::Exit => None,
        };
        Ok(report)
    }
}

fn answer(answers: &[String], index: usize) -> &str {
    answers.get(index).map(String::as_str).unwrap_or("")
}

/// Input being typed for an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub operation: Operation,
    /// Answers already confirmed.
    pub answers: Vec<String>,
    /// Text of the field being edited.
    pub input: String,
}

impl Prompt {
    fn new(operation: Operation) -> Self {
        Self {
            operation,
            answers: Vec::new(),
            input: String::new(),
        }
    }

    /// The question for the field being edited.
    pub fn question(&self) -> &'static str {
        self.operation
            .prompts()
            .get(self.answers.len())
            .copied()
            .unwrap_or("")
    }
}

/// A report shown in the scrollable viewer.
///
/// The wrapped lines are cached for the last width they were built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub report: Report,
    /// Index of the first visible wrapped line.
    pub scroll: usize,
    wrapped: Vec<String>,
    wrap_width: Option<usize>,
}

impl ResultsView {
    fn new(report: Report, width: usize) -> Self {
        let mut view = Self {
            report,
            scroll: 0,
            wrapped: Vec::new(),
            wrap_width: None,
        };
        view.rewrap(width);
        view
    }

    /// Rebuilds the wrapped lines if the width changed.
    pub fn rewrap(&mut self, width: usize) {
        if self.wrap_width != Some(width) {
            self.wrapped = wrap_text(self.report.text(), width);
            self.wrap_width = Some(width);
        }
    }

    /// Report lines wrapped to the current width.
    pub fn lines(&self) -> &[String] {
        &self.wrapped
    }
}

/// Wraps each line of `text` to `width` columns, keeping blank lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    text.lines()
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|part| part.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// What the terminal currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Main menu
    #[default]
    Menu,
    /// Collecting input for an operation
    Prompt(Prompt),
    /// Viewing a report
    Results(ResultsView),
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,
    /// Highlighted menu entry
    pub selected: usize,
    /// Codon table used by RNA analysis and translation
    pub table: TableChoice,
    /// Directory receiving exported reports
    pub export_dir: PathBuf,
    /// Visible rows of the content area
    pub visible_rows: usize,
    /// Visible columns of the content area
    pub visible_cols: usize,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates a new application state on the main menu.
    pub fn new(table: TableChoice, export_dir: PathBuf) -> Self {
        Self {
            screen: Screen::Menu,
            selected: 0,
            table,
            export_dir,
            visible_rows: 0,
            visible_cols: 0,
            should_quit: false,
            status_message: None,
        }
    }

    /// Updates the content area size based on terminal dimensions.
    pub fn update_viewport_size(&mut self, rows: usize, cols: usize) {
        self.visible_rows = rows;
        self.visible_cols = cols;
        if let Screen::Results(ref mut view) = self.screen {
            view.rewrap(cols);
        }
        self.clamp_scroll();
    }

    /// Moves the menu highlight up (wrapping).
    pub fn menu_up(&mut self) {
        let count = Operation::ALL.len();
        self.selected = (self.selected + count - 1) % count;
    }

    /// Moves the menu highlight down (wrapping).
    pub fn menu_down(&mut self) {
        self.selected = (self.selected + 1) % Operation::ALL.len();
    }

    /// The highlighted operation.
    pub fn selected_operation(&self) -> Operation {
        Operation::ALL[self.selected % Operation::ALL.len()]
    }

    /// Opens the prompt of the highlighted operation, or quits on Exit.
    pub fn select_menu_item(&mut self) {
        self.status_message = None;
        match self.selected_operation() {
            Operation::Exit => self.should_quit = true,
            operation => self.screen = Screen::Prompt(Prompt::new(operation)),
        }
    }

    /// Switches between the reference and the standard codon table.
    pub fn toggle_table(&mut self) {
        self.table = self.table.toggled();
        self.status_message = Some(format!("Codon table: {}", self.table));
    }

    /// Handles a character input in a prompt.
    pub fn prompt_input(&mut self, c: char) {
        if let Screen::Prompt(ref mut prompt) = self.screen {
            prompt.input.push(c);
        }
    }

    /// Handles backspace in a prompt.
    pub fn prompt_backspace(&mut self) {
        if let Screen::Prompt(ref mut prompt) = self.screen {
            prompt.input.pop();
        }
    }

    /// Confirms the current field; runs the operation after the last one.
    pub fn submit_prompt(&mut self) {
        let Screen::Prompt(ref mut prompt) = self.screen else {
            return;
        };
        prompt.answers.push(std::mem::take(&mut prompt.input));
        if prompt.answers.len() < prompt.operation.prompts().len() {
            return;
        }

        let operation = prompt.operation;
        let answers = std::mem::take(&mut prompt.answers);
        info!(operation = operation.label(), "running operation");
        match operation.run(&answers, self.table) {
            Ok(Some(report)) => {
                self.status_message = None;
                self.show_results(report);
            }
            Ok(None) => {
                self.status_message = Some(NO_SEQUENCES.to_string());
                self.screen = Screen::Menu;
            }
            Err(e) => {
                warn!(operation = operation.label(), error = %e, "operation failed");
                self.status_message = Some(format!("{:#}", e));
                self.screen = Screen::Menu;
            }
        }
    }

    /// Opens the viewer on a report, wrapped to the current width.
    pub fn show_results(&mut self, report: Report) {
        self.screen = Screen::Results(ResultsView::new(report, self.visible_cols));
    }

    /// Leaves a prompt or the viewer and returns to the menu.
    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
    }

    fn max_scroll(&self) -> usize {
        match &self.screen {
            Screen::Results(view) => view.lines().len().saturating_sub(self.visible_rows),
            _ => 0,
        }
    }

    fn scroll_to(&mut self, target: usize) {
        let max = self.max_scroll();
        if let Screen::Results(ref mut view) = self.screen {
            view.scroll = target.min(max);
        }
    }

    fn current_scroll(&self) -> usize {
        match &self.screen {
            Screen::Results(view) => view.scroll,
            _ => 0,
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll_to(self.current_scroll());
    }

    /// Scrolls the viewer by a signed number of lines.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.current_scroll().saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Scrolls the viewer by one page.
    pub fn page_down(&mut self) {
        self.scroll_by(self.visible_rows.max(1) as isize);
    }

    /// Scrolls the viewer back by one page.
    pub fn page_up(&mut self) {
        self.scroll_by(-(self.visible_rows.max(1) as isize));
    }

    /// Jumps to the top of the report.
    pub fn scroll_top(&mut self) {
        self.scroll_to(0);
    }

    /// Jumps to the end of the report.
    pub fn scroll_bottom(&mut self) {
        self.scroll_to(usize::MAX);
    }

    /// Writes the displayed report to a new file in the export directory.
    pub fn export_results(&mut self) {
        let Screen::Results(ref view) = self.screen else {
            return;
        };
        self.status_message = Some(match export_to_dir(view.report.text(), &self.export_dir) {
            Ok(path) => format!("Results written to {}", path.display()),
            Err(e) => format!("Export failed: {}", e),
        });
    }
}
