use crate::adapters::console::Console;
use crate::core::report::{subject_chart, yearly_chart};
use crate::core::store::MarkStore;
use crate::core::validation::{
    normalize_student_name, validate_new_mark, validate_subject, validate_year,
};
use crate::domain::model::Chart;
use crate::domain::ports::{ChartSink, MarkRepository};
use crate::utils::error::Result;
use console::style;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddMark,
    ShowMarks,
    YearlyGraph,
    SubjectChart,
    Exit,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::AddMark),
            "2" => Some(MenuChoice::ShowMarks),
            "3" => Some(MenuChoice::YearlyGraph),
            "4" => Some(MenuChoice::SubjectChart),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Asks until a non-blank name is given; `None` if the input runs out.
pub fn prompt_student_name<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
) -> Result<Option<String>> {
    loop {
        let Some(raw) = console.ask("Enter your name: ")? else {
            return Ok(None);
        };
        let name = normalize_student_name(&raw);
        if !name.is_empty() {
            return Ok(Some(name));
        }
        console.say("Please enter a name.")?;
    }
}

/// One student's menu session.
pub struct ProgressCard<R, C, I, O>
where
    R: MarkRepository,
    C: ChartSink,
    I: BufRead,
    O: Write,
{
    store: MarkStore,
    repository: R,
    charts: C,
    console: Console<I, O>,
}

impl<R, C, I, O> ProgressCard<R, C, I, O>
where
    R: MarkRepository,
    C: ChartSink,
    I: BufRead,
    O: Write,
{
    /// Loads the student's saved marks and prepares the session.
    pub fn open(student_name: &str, repository: R, charts: C, console: Console<I, O>) -> Result<Self> {
        let mut store = MarkStore::new(student_name);
        for mark in repository.load(store.key())? {
            store.add(mark);
        }
        tracing::info!(
            "Opened progress card for {} with {} marks",
            store.student_name(),
            store.len()
        );
        Ok(Self {
            store,
            repository,
            charts,
            console,
        })
    }

    pub fn store(&self) -> &MarkStore {
        &self.store
    }

    pub fn into_parts(self) -> (MarkStore, R, C, Console<I, O>) {
        (self.store, self.repository, self.charts, self.console)
    }

    /// Runs the menu until the person exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        self.console.say("\nWelcome to the Progress Card")?;
        loop {
            self.show_menu()?;
            let Some(raw) = self.console.ask("Enter your choice (1-5): ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&raw) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => {
                    tracing::debug!("Ignoring menu choice {:?}", raw);
                    self.console.say("\nInvalid choice. Please try again")?;
                    continue;
                }
            };
            if flow == Flow::Quit {
                break;
            }
            if self
                .console
                .ask("\nPress Enter to return to the menu...")?
                .is_none()
            {
                break;
            }
        }
        self.console.say("\nThank you. Your data has been saved.")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.say(format!("\n{}", style("--- MENU ---").bold()))?;
        self.console.say("1. Add a new mark")?;
        self.console.say("2. View all marks")?;
        self.console.say("3. Show yearly performance graph")?;
        self.console.say("4. Show subject performance chart")?;
        self.console.say("5. Exit")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddMark => self.add_mark(),
            MenuChoice::ShowMarks => self.show_all_marks().map(|_| Flow::Continue),
            MenuChoice::YearlyGraph => {
                let chart = yearly_chart(&self.store);
                self.show_chart(chart, "yearly performance graph")
                    .map(|_| Flow::Continue)
            }
            MenuChoice::SubjectChart => {
                let chart = subject_chart(&self.store);
                self.show_chart(chart, "subject performance chart")
                    .map(|_| Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn add_mark(&mut self) -> Result<Flow> {
        self.console.say("\n-- ADD A NEW MARK --")?;

        let Some(raw_year) = self.console.ask("Enter the academic year (1, 2, 3): ")? else {
            return Ok(Flow::Quit);
        };
        if let Err(e) = validate_year(&raw_year) {
            self.console.say(format!("\n{}", e.user_friendly_message()))?;
            return Ok(Flow::Continue);
        }

        let Some(raw_subject) = self.console.ask("Enter the subject name: ")? else {
            return Ok(Flow::Quit);
        };
        let subject = match validate_subject(&raw_subject) {
            Ok(subject) => subject,
            Err(e) => {
                self.console.say(format!("\n{}", e.user_friendly_message()))?;
                return Ok(Flow::Continue);
            }
        };

        let prompt = format!("Enter the score for {} (0-100): ", subject);
        let Some(raw_score) = self.console.ask(&prompt)? else {
            return Ok(Flow::Quit);
        };

        let mark = match validate_new_mark(&raw_year, &raw_subject, &raw_score) {
            Ok(mark) => mark,
            Err(e) => {
                tracing::debug!("Rejected new mark: {}", e);
                self.console.say(format!("\n{}", e.user_friendly_message()))?;
                return Ok(Flow::Continue);
            }
        };

        let confirmation = format!(
            "\nAdded '{}: {}%' for Year {}!",
            mark.subject, mark.score, mark.year
        );
        self.store.add(mark);
        if let Err(e) = self.repository.save(self.store.key(), self.store.marks()) {
            tracing::error!("Failed to save marks for {}: {}", self.store.key(), e);
            self.console.say(format!("\n{}", e.user_friendly_message()))?;
            self.console.say(format!("Suggestion: {}", e.recovery_suggestion()))?;
        }
        self.console.say(confirmation)?;
        Ok(Flow::Continue)
    }

    fn show_all_marks(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.console.say("\nNo marks found. Try adding some first!");
        }

        let heading = format!("-- ALL MARKS FOR {} --", self.store.student_name());
        let lines: Vec<String> = self
            .store
            .all_sorted()
            .enumerate()
            .map(|(i, mark)| {
                format!(
                    "{}. Year {} - {}: {}%",
                    i + 1,
                    mark.year,
                    mark.subject,
                    mark.score
                )
            })
            .collect();

        self.console.say(format!("\n{}", heading))?;
        for line in lines {
            self.console.say(line)?;
        }
        Ok(())
    }

    fn show_chart(&mut self, chart: Result<Chart>, what: &str) -> Result<()> {
        let chart = match chart {
            Ok(chart) => chart,
            Err(e) => return self.console.say(format!("\n{}", e.user_friendly_message())),
        };

        self.console.say(format!("\nProcessing your {}...", what))?;
        if let Err(e) = self.charts.render(&chart) {
            tracing::error!("Failed to render {}: {}", what, e);
            self.console.say(format!("\n{}", e.user_friendly_message()))?;
        }
        Ok(())
    }
}
