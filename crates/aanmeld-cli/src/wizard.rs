use serde_json::Value;

use aanmeld_spec::{ErrorMap, FieldKind, FieldSpec, FormSpec};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: field prompts only.
    Clean,
    /// Verbose output: variant details, visible fields, payload dumps.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints prompts and feedback as the wizard walks the field list.
pub struct WizardPresenter {
    verbosity: Verbosity,
    header_printed: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            header_printed: false,
        }
    }

    pub fn show_header(&mut self, spec: &FormSpec) {
        if self.header_printed {
            return;
        }
        println!("{}", spec.title);
        if let Some(description) = &spec.description {
            println!("{}", description);
        }
        if self.verbosity.is_verbose() {
            println!("Velden: {}", spec.fields.len());
        }
        println!();
        self.header_printed = true;
    }

    pub fn show_prompt(&self, field: &FieldSpec, index: usize, total: usize) {
        let mut line = format!("{}/{} {}", index, total, field.label);
        if field.required {
            line.push_str(" *");
        }
        if let Some(hint) = kind_hint(field) {
            line.push(' ');
            line.push_str(&hint);
        }
        println!("{}", line);
    }

    pub fn show_field_error(&self, message: &str) {
        eprintln!("  {}", message);
    }

    pub fn show_errors(&self, errors: &ErrorMap) {
        println!("Controleer de volgende velden:");
        for (field, message) in errors {
            println!("  {} - {}", field, message);
        }
    }

    pub fn show_summary(&self, payload: &Value) {
        if self.verbosity.is_verbose() {
            match serde_json::to_string_pretty(payload) {
                Ok(pretty) => println!("Ingevulde gegevens:\n{}", pretty),
                Err(err) => eprintln!("Kon gegevens niet weergeven: {}", err),
            }
        }
    }

    pub fn show_countdown_tick(&self, remaining: u32) {
        if remaining > 0 {
            println!(
                "U wordt over {} seconde{} doorverwezen naar de hoofdpagina",
                remaining,
                if remaining == 1 { "" } else { "n" }
            );
        }
    }
}

fn kind_hint(field: &FieldSpec) -> Option<String> {
    match field.kind {
        FieldKind::Flag => Some("(ja/nee)".to_string()),
        FieldKind::Date => Some("(JJJJ-MM-DD)".to_string()),
        FieldKind::Numeric => Some("(bedrag, mag leeg blijven)".to_string()),
        FieldKind::Choice => field
            .choices
            .as_ref()
            .map(|choices| format!("({})", choices.join("/"))),
        _ => None,
    }
}

/// Error produced when a typed answer cannot become a field value.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
        }
    }
}

/// Turns a raw terminal answer into the field's value. Validation proper
/// happens afterwards; this only handles the input representation.
pub fn parse_answer(field: &FieldSpec, raw: &str) -> Result<Value, AnswerParseError> {
    let trimmed = raw.trim();
    match field.kind {
        FieldKind::Flag => parse_flag(trimmed),
        _ => Ok(Value::String(trimmed.to_string())),
    }
}

fn parse_flag(raw: &str) -> Result<Value, AnswerParseError> {
    match raw.to_ascii_lowercase().as_str() {
        "" | "nee" | "n" | "false" => Ok(Value::Bool(false)),
        "ja" | "j" | "true" => Ok(Value::Bool(true)),
        _ => Err(AnswerParseError::new("Antwoord met ja of nee.")),
    }
}
