mod wizard;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use aanmeld_client::{
    ApiBase, Confirmation, FormState, HttpSubmitter, Navigator, Outcome, SubmitFlow,
};
use aanmeld_spec::{FormSpec, FormVariant, validate_field};
use wizard::{Verbosity, WizardPresenter, parse_answer};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Aanmeldformulieren van SamenWerkt in de terminal",
    long_about = "Vult de café- en ledenformulieren veld voor veld in, valideert ze lokaal en dient ze in bij de backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormArg {
    /// Aanmelding voor het politiek café.
    Cafe,
    /// Volledige ledenregistratie.
    Leden,
}

impl FormArg {
    fn spec(self) -> FormSpec {
        match self {
            FormArg::Cafe => FormVariant::Cafe.spec(),
            FormArg::Leden => FormVariant::Leden.spec(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Interactieve wizard: veld voor veld invullen en optioneel indienen.
    Wizard {
        #[arg(long, value_enum, default_value_t = FormArg::Cafe)]
        form: FormArg,
        /// JSON-bestand met vooraf ingevulde antwoorden.
        #[arg(long, value_name = "ANTWOORDEN")]
        answers: Option<PathBuf>,
        /// Dien het formulier na het invullen daadwerkelijk in.
        #[arg(long)]
        submit: bool,
        /// API-basis; overschrijft AANMELD_API_BASE.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Toon extra detail (veldenlijst, payload).
        #[arg(long, alias = "debug")]
        verbose: bool,
    },
    /// Valideer een antwoordenbestand zonder iets te versturen.
    Validate {
        #[arg(long, value_enum, default_value_t = FormArg::Cafe)]
        form: FormArg,
        #[arg(long, value_name = "ANTWOORDEN")]
        answers: PathBuf,
    },
    /// Valideer en dien een antwoordenbestand in.
    Submit {
        #[arg(long, value_enum, default_value_t = FormArg::Cafe)]
        form: FormArg,
        #[arg(long, value_name = "ANTWOORDEN")]
        answers: PathBuf,
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Toon de velddefinitie van een variant als JSON.
    Spec {
        #[arg(long, value_enum, default_value_t = FormArg::Cafe)]
        form: FormArg,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Wizard {
            form,
            answers,
            submit,
            base_url,
            verbose,
        } => run_wizard(form, answers, submit, base_url, verbose).await,
        Command::Validate { form, answers } => run_validate(form, answers),
        Command::Submit {
            form,
            answers,
            base_url,
        } => run_submit(form, answers, base_url).await,
        Command::Spec { form } => run_spec(form),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn run_wizard(
    form: FormArg,
    answers: Option<PathBuf>,
    submit: bool,
    base_url: Option<String>,
    verbose: bool,
) -> CliResult<()> {
    let mut state = load_state(form.spec(), answers)?;
    let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose));
    presenter.show_header(state.spec());

    let fields = state.spec().fields.clone();
    let total = fields.len();
    for (position, field) in fields.iter().enumerate() {
        // Visibility is re-evaluated per prompt: earlier answers decide
        // whether conditional fields come up at all.
        if let Some(expr) = &field.visible_if
            && !expr.evaluate(state.record())
        {
            continue;
        }
        loop {
            presenter.show_prompt(field, position + 1, total);
            let raw = prompt_line("> ")?;
            let value = match parse_answer(field, &raw) {
                Ok(value) => value,
                Err(err) => {
                    presenter.show_field_error(&err.user_message);
                    continue;
                }
            };
            let key = field.key();
            state.set_field(&key, value)?;
            match validate_field(state.spec(), state.record(), &key, today()) {
                None => break,
                Some(message) => presenter.show_field_error(&message),
            }
        }
    }

    let errors = state.validate_now(today()).clone();
    if !errors.is_empty() {
        presenter.show_errors(&errors);
        return Err("formulier is niet geldig".into());
    }
    presenter.show_summary(&state.payload());

    if submit {
        submit_state(&mut state, base_url, &presenter).await
    } else {
        println!("Formulier is geldig. Gebruik --submit om het in te dienen.");
        Ok(())
    }
}

fn run_validate(form: FormArg, answers: PathBuf) -> CliResult<()> {
    let mut state = load_state(form.spec(), Some(answers))?;
    let errors = state.validate_now(today());
    println!(
        "Validatie: {}",
        if errors.is_empty() {
            "geldig"
        } else {
            "ongeldig"
        }
    );
    if errors.is_empty() {
        return Ok(());
    }
    for (field, message) in errors {
        println!("  {} - {}", field, message);
    }
    Err("validatie mislukt".into())
}

async fn run_submit(form: FormArg, answers: PathBuf, base_url: Option<String>) -> CliResult<()> {
    let mut state = load_state(form.spec(), Some(answers))?;
    let presenter = WizardPresenter::new(Verbosity::Clean);
    submit_state(&mut state, base_url, &presenter).await
}

fn run_spec(form: FormArg) -> CliResult<()> {
    let spec = form.spec();
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

fn load_state(spec: FormSpec, answers: Option<PathBuf>) -> CliResult<FormState> {
    let mut state = FormState::new(spec);
    if let Some(path) = answers {
        let raw = fs::read_to_string(path)?;
        let parsed: Value = serde_json::from_str(&raw)?;
        state
            .merge_json(&parsed)
            .map_err(|err| format!("antwoordenbestand ongeldig: {err}"))?;
    }
    Ok(state)
}

async fn submit_state(
    state: &mut FormState,
    base_url: Option<String>,
    presenter: &WizardPresenter,
) -> CliResult<()> {
    let base = match base_url {
        Some(base) => ApiBase::new(base),
        None => ApiBase::from_env(),
    };
    let submitter = HttpSubmitter::new(&base, &state.spec().submit_path);
    let mut flow = SubmitFlow::new(submitter);

    match flow.submit(state, today()).await {
        Outcome::Accepted(ack) => {
            println!(
                "{}",
                ack.message
                    .as_deref()
                    .unwrap_or("Bedankt voor uw aanmelding!")
            );
            let confirmation = Confirmation::new(PrintNavigator);
            confirmation
                .run(|remaining| presenter.show_countdown_tick(remaining))
                .await;
            flow.acknowledge();
            Ok(())
        }
        Outcome::Invalid => {
            presenter.show_errors(state.errors());
            Err("formulier is niet geldig".into())
        }
        Outcome::Failed(err) => Err(err.to_string().into()),
        Outcome::Busy => Err("er loopt al een inzending".into()),
    }
}

/// Terminal stand-in for browser navigation.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, url: &str) {
        println!("Doorgaan naar {}", url);
    }
}

fn prompt_line(prompt: &str) -> CliResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
