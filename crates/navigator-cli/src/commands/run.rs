//! Interactive questionnaire on a line-based terminal.
//!
//! Every prompt also accepts `:back`, `:restart` and `:quit`. When a step
//! is revisited its saved answers are offered as defaults; `-` clears one.

use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use navigator_core::storage::DisplayConfig;
use navigator_core::wizard::{
    CompetencyInput, EnvironmentInput, MotivationInput, PersonalInfoInput, PersonalityInput,
    ValuesInput,
};
use navigator_core::{
    AnswerProfile, CatalogEntry, Competency, ConfidenceLevel, Config, Environment, Motivation,
    PresentationStyle, ProblemSolvingStyle, Rating, StepId, StepInput, WeekendActivity,
    WizardEngine, WorkValue,
};

use super::{export, report};

/// Typed at a prompt to drop the offered default.
const CLEAR: &str = "-";

#[derive(Args)]
pub struct RunArgs {
    /// Save the results file when the questionnaire is finished
    #[arg(long)]
    pub export: bool,
    /// Export target file (implies --export)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut wizard = WizardEngine::new();

    let finished = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock(), config.display.clone());
        prompter.drive(&mut wizard)?
    };

    if finished && (args.export || args.out.is_some()) {
        if let Some(record) = wizard.export() {
            export::write_record(&record, args.out.as_deref(), &config)?;
        }
    }
    Ok(())
}

/// Why a prompt did not produce an answer.
#[derive(Debug)]
enum Interrupt {
    Back,
    Restart,
    Quit,
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(e: io::Error) -> Self {
        Interrupt::Io(e)
    }
}

pub struct Prompter<R, W> {
    input: R,
    out: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W, display: DisplayConfig) -> Self {
        Self {
            input,
            out,
            display,
        }
    }

    /// Run `wizard` to the results page. Returns false if the user quit.
    pub fn drive(&mut self, wizard: &mut WizardEngine) -> io::Result<bool> {
        loop {
            let step = wizard.current_step();
            if step.is_terminal() {
                if let Some(rec) = wizard.recommendation() {
                    writeln!(self.out)?;
                    report::write_report(&mut self.out, wizard.profile(), &rec, &self.display)?;
                }
                log_events(wizard);
                return Ok(true);
            }

            self.header(wizard)?;
            let collected = self.collect(step, wizard.profile());
            match collected {
                Ok(input) => {
                    if let Err(e) = wizard.submit_step(step, input) {
                        writeln!(self.out, "  ! {e}")?;
                    }
                }
                Err(Interrupt::Back) => {
                    if let Err(e) = wizard.retreat() {
                        writeln!(self.out, "  ! {e}")?;
                    }
                }
                Err(Interrupt::Restart) => {
                    wizard.reset();
                    writeln!(self.out, "Starting over.")?;
                }
                Err(Interrupt::Quit) => {
                    log_events(wizard);
                    writeln!(self.out, "Bye.")?;
                    return Ok(false);
                }
                Err(Interrupt::Io(e)) => return Err(e),
            }
            log_events(wizard);
        }
    }

    fn header(&mut self, wizard: &WizardEngine) -> io::Result<()> {
        let progress = wizard.progress();
        writeln!(self.out)?;
        if self.display.show_progress && progress.is_visible() {
            writeln!(
                self.out,
                "[{}/{}] {}",
                progress.step_index, progress.last_index, progress.title
            )
        } else {
            writeln!(self.out, "{}", progress.title)
        }
    }

    /// Prompt for `step`, offering what `saved` holds for it as defaults.
    fn collect(&mut self, step: StepId, saved: &AnswerProfile) -> Result<StepInput, Interrupt> {
        match step {
            StepId::Welcome => {
                writeln!(
                    self.out,
                    "Find out whether vocational training or an academic track suits you."
                )?;
                writeln!(self.out, "Type :back, :restart or :quit at any prompt.")?;
                self.ask("Press Enter to start")?;
                Ok(StepInput::Welcome)
            }
            StepId::PersonalInfo => {
                let personal = saved.personal.as_ref();
                let name = self.ask_text("Name", personal.map_or("", |p| p.name.as_str()))?;
                let class_label =
                    self.ask_text("Class", personal.map_or("", |p| p.class_label.as_str()))?;
                let age = self.ask_age(personal.map(|p| p.age))?;
                let school = self.ask_text(
                    "School (optional)",
                    personal.map_or("", |p| p.school.as_str()),
                )?;
                let confidence = self.choose_one::<ConfidenceLevel>(
                    "How do you feel about your future? (blank to skip)",
                    personal.and_then(|p| p.confidence),
                )?;
                Ok(StepInput::PersonalInfo(PersonalInfoInput {
                    name,
                    class_label,
                    age,
                    school,
                    confidence,
                }))
            }
            StepId::Competencies => {
                writeln!(self.out, "Rate yourself from 1 (weak) to 5 (very strong).")?;
                let mut input = CompetencyInput::default();
                for &c in Competency::ALL {
                    let default = saved
                        .competencies
                        .as_ref()
                        .map_or(Rating::DEFAULT, |r| r.get(c));
                    let rating = self.ask_rating(c.label(), c.description(), default)?;
                    input.ratings.insert(c, rating);
                }
                Ok(StepInput::Competencies(input))
            }
            StepId::Motivation => {
                let motivation = saved.motivation.as_ref();
                let saved_tags: Vec<Motivation> = motivation
                    .map(|m| m.tags.iter().copied().collect())
                    .unwrap_or_default();
                let tags = self.choose_many::<Motivation>(
                    "Which statements fit you? (any number)",
                    &saved_tags,
                )?;
                let weekend_activity = self.choose_one::<WeekendActivity>(
                    "You have a free Saturday. What do you do?",
                    motivation.map(|m| m.weekend_activity),
                )?;
                Ok(StepInput::Motivation(MotivationInput {
                    tags,
                    weekend_activity,
                }))
            }
            StepId::Environment => {
                let environment = self
                    .choose_one::<Environment>("Where would you like to work?", saved.environment)?;
                Ok(StepInput::Environment(EnvironmentInput { environment }))
            }
            StepId::FutureValues => {
                writeln!(self.out, "How important is this to you, from 1 to 5?")?;
                let mut input = ValuesInput::default();
                for &v in WorkValue::ALL {
                    let default = saved.values.as_ref().map_or(Rating::DEFAULT, |r| r.get(v));
                    let rating = self.ask_rating(v.label(), v.description(), default)?;
                    input.ratings.insert(v, rating);
                }
                Ok(StepInput::FutureValues(input))
            }
            StepId::Personality => {
                let personality = saved.personality.as_ref();
                let presentation_style = self.choose_one::<PresentationStyle>(
                    "You have to give a presentation. How do you go about it?",
                    personality.map(|p| p.presentation_style),
                )?;
                let problem_solving_style = self.choose_one::<ProblemSolvingStyle>(
                    "You run into a problem. What is your first impulse?",
                    personality.map(|p| p.problem_solving_style),
                )?;
                let strength = self.ask_text(
                    "What is your biggest strength?",
                    personality.map_or("", |p| p.strength.as_str()),
                )?;
                let development = self.ask_text(
                    "What would you like to work on?",
                    personality.map_or("", |p| p.development.as_str()),
                )?;
                Ok(StepInput::Personality(PersonalityInput {
                    presentation_style,
                    problem_solving_style,
                    strength,
                    development,
                }))
            }
            StepId::Results => unreachable!("the results page has no input"),
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, Interrupt> {
        write!(self.out, "{prompt}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Interrupt::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the questionnaire was finished",
            )));
        }

        match line.trim() {
            ":back" => Err(Interrupt::Back),
            ":restart" => Err(Interrupt::Restart),
            ":quit" => Err(Interrupt::Quit),
            text => Ok(text.to_string()),
        }
    }

    /// Blank keeps `default`; `-` clears it.
    fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String, Interrupt> {
        let reply = if default.is_empty() {
            self.ask(prompt)?
        } else {
            self.ask(&format!("{prompt} [{default}]"))?
        };
        Ok(match reply.as_str() {
            "" => default.to_string(),
            CLEAR => String::new(),
            _ => reply,
        })
    }

    fn ask_age(&mut self, saved: Option<u8>) -> Result<Option<i64>, Interrupt> {
        let shown = saved.map_or(15, i64::from);
        loop {
            let reply = self.ask(&format!("Age [{shown}]"))?;
            if reply.is_empty() {
                return Ok(saved.map(i64::from));
            }
            match reply.parse() {
                Ok(age) => return Ok(Some(age)),
                Err(_) => writeln!(self.out, "  please enter a number")?,
            }
        }
    }

    /// Blank keeps `default`.
    fn ask_rating(
        &mut self,
        label: &str,
        description: &str,
        default: Rating,
    ) -> Result<i64, Interrupt> {
        let prompt = if self.display.show_descriptions && !description.is_empty() {
            format!("{label} ({description}) [{}]", default.value())
        } else {
            format!("{label} [{}]", default.value())
        };
        loop {
            let reply = self.ask(&prompt)?;
            if reply.is_empty() {
                return Ok(i64::from(default.value()));
            }
            match reply.parse() {
                Ok(rating) => return Ok(rating),
                Err(_) => writeln!(self.out, "  please enter a number from 1 to 5")?,
            }
        }
    }

    fn list_options<T: CatalogEntry>(&mut self, question: &str) -> io::Result<()> {
        writeln!(self.out, "{question}")?;
        for (i, entry) in T::entries().iter().enumerate() {
            if self.display.show_descriptions && !entry.description().is_empty() {
                writeln!(
                    self.out,
                    "  {}. {} ({})",
                    i + 1,
                    entry.label(),
                    entry.description()
                )?;
            } else {
                writeln!(self.out, "  {}. {}", i + 1, entry.label())?;
            }
        }
        Ok(())
    }

    /// Blank keeps `default` (possibly nothing); the wizard decides whether
    /// an empty choice is allowed.
    fn choose_one<T: CatalogEntry>(
        &mut self,
        question: &str,
        default: Option<T>,
    ) -> Result<Option<T>, Interrupt> {
        self.list_options::<T>(question)?;
        let prompt = match default {
            Some(choice) => format!("Choice [{}]", choice.id()),
            None => "Choice".to_string(),
        };
        loop {
            let reply = self.ask(&prompt)?;
            match reply.as_str() {
                "" => return Ok(default),
                CLEAR => return Ok(None),
                _ => {}
            }
            match parse_choice::<T>(&reply) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.out, "  unknown choice '{reply}'")?,
            }
        }
    }

    fn choose_many<T: CatalogEntry>(
        &mut self,
        question: &str,
        default: &[T],
    ) -> Result<Vec<T>, Interrupt> {
        self.list_options::<T>(question)?;
        let prompt = if default.is_empty() {
            "Choices (comma-separated)".to_string()
        } else {
            let ids: Vec<&str> = default.iter().map(|c| c.id()).collect();
            format!("Choices (comma-separated) [{}]", ids.join(","))
        };
        'prompt: loop {
            let reply = self.ask(&prompt)?;
            match reply.as_str() {
                "" => return Ok(default.to_vec()),
                CLEAR => return Ok(Vec::new()),
                _ => {}
            }
            let mut chosen = Vec::new();
            for part in reply.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                match parse_choice::<T>(part) {
                    Some(choice) => chosen.push(choice),
                    None => {
                        writeln!(self.out, "  unknown choice '{part}'")?;
                        continue 'prompt;
                    }
                }
            }
            return Ok(chosen);
        }
    }
}

fn log_events(wizard: &mut WizardEngine) {
    for event in wizard.take_events() {
        debug!(?event, "wizard event");
    }
}

/// A 1-based list number or a catalog id.
fn parse_choice<T: CatalogEntry>(reply: &str) -> Option<T> {
    if let Ok(n) = reply.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| T::entries().get(i)).copied();
    }
    reply.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_core::Pathway;

    fn drive(script: &str) -> (io::Result<bool>, WizardEngine, String) {
        let mut wizard = WizardEngine::new();
        let mut out = Vec::new();
        let result = {
            let mut prompter = Prompter::new(script.as_bytes(), &mut out, DisplayConfig::default());
            prompter.drive(&mut wizard)
        };
        (result, wizard, String::from_utf8(out).unwrap())
    }

    // Welcome, personal info (5 prompts), 8 competencies, motivation (2),
    // environment, 6 values, personality (4).
    const PRACTICAL_RUN: &str = "\n\
        Anna\n3A\n15\n\n\n\
        2\n2\n2\n5\n5\n\n4\n\n\
        practical\ntinkering\n\
        1\n\
        \n\n\n\n\n\n\
        1\n1\nHelpful\nPatience\n";

    #[test]
    fn test_full_run_reaches_results() {
        let (result, wizard, output) = drive(PRACTICAL_RUN);
        assert!(result.unwrap());
        assert!(wizard.is_complete());
        assert_eq!(
            wizard.recommendation().unwrap().pathway,
            Pathway::VocationalTraining
        );
        assert!(output.contains("[1/7] Who are you?"));
        assert!(output.contains("Recommendation: Vocational training"));
        assert!(output.contains("Biggest strength: Helpful"));
    }

    #[test]
    fn test_events_are_drained_as_the_session_runs() {
        let (_, mut wizard, _) = drive(PRACTICAL_RUN);
        assert!(wizard.take_events().is_empty());
    }

    #[test]
    fn test_rejected_step_is_asked_again() {
        let script = "\n\n3A\n\n\n\nAnna\n3A\n\n\n\n:quit\n";
        let (result, wizard, output) = drive(script);
        assert!(!result.unwrap());
        assert!(output.contains("  ! missing required field 'name'"));
        assert!(output.contains("[2/7] Discover your strengths"));
        assert_eq!(wizard.current_step(), StepId::Competencies);
    }

    #[test]
    fn test_back_and_restart() {
        let script = "\nAnna\n:back\n:back\n\nBen\n\n\n\n\n:restart\n:quit\n";
        let (result, wizard, output) = drive(script);
        assert!(!result.unwrap());
        assert!(output.contains("  ! already at the first step"));
        assert!(output.contains("Starting over."));
        assert!(wizard.profile().is_empty());
    }

    #[test]
    fn test_revisited_ratings_default_to_saved_answers() {
        let script = format!(
            "\nAnna\n\n\n\n\n{}:back\n{}:quit\n",
            "5\n".repeat(8),
            "\n".repeat(8)
        );
        let (result, wizard, output) = drive(&script);
        assert!(!result.unwrap());
        assert_eq!(wizard.current_step(), StepId::Motivation);

        let ratings = wizard.profile().competencies.clone().unwrap();
        for &c in Competency::ALL {
            assert_eq!(ratings.get(c).value(), 5, "{c}");
        }
        assert!(output.contains("Independence (Working without guidance, taking responsibility) [5]"));
    }

    #[test]
    fn test_revisited_choices_and_text_keep_saved_answers() {
        // Through Environment (Office), back from the values step, then
        // back again into personal info and accept every default.
        let script = format!(
            "\nAnna\n3A\n16\n\n4\n{}\ntinkering\n2\n:back\n\n:back\n:back\n:back\n:back\n\n\n\n\n\n:quit\n",
            "\n".repeat(8)
        );
        let (result, wizard, output) = drive(&script);
        assert!(!result.unwrap());
        assert_eq!(wizard.current_step(), StepId::Competencies);

        let profile = wizard.profile();
        assert_eq!(profile.environment, Some(Environment::Office));
        let personal = profile.personal.as_ref().unwrap();
        assert_eq!(personal.name, "Anna");
        assert_eq!(personal.class_label, "3A");
        assert_eq!(personal.age, 16);
        assert_eq!(personal.confidence, Some(ConfidenceLevel::Confident));
        assert!(output.contains("Choice [office]"));
        assert!(output.contains("Name [Anna]"));
        assert!(!output.contains("  ! "));
    }

    #[test]
    fn test_dash_clears_a_saved_choice() {
        let script = format!(
            "\nAnna\n\n\n\n\n{}\ntinkering\n2\n:back\n-\n:quit\n",
            "\n".repeat(8)
        );
        let (_, wizard, output) = drive(&script);
        assert_eq!(wizard.current_step(), StepId::Environment);
        assert!(output.contains("  ! missing required field 'environment'"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let (result, _, _) = drive("\nAnna\n");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice::<Environment>("2"), Some(Environment::Office));
        assert_eq!(parse_choice::<Environment>("nature"), Some(Environment::Nature));
        assert_eq!(parse_choice::<Environment>("0"), None);
        assert_eq!(parse_choice::<Environment>("5"), None);
        assert_eq!(parse_choice::<Environment>("garden"), None);
    }
}
