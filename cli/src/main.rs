mod validator;

use bumpalo::Bump;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use reckon::{CalcOptions, Calculator, Dialect, Strategy, render_error};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, KeyCode, KeyModifiers, Reedline,
    ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use validator::ParenValidator;

/// Inputs of the original command-line demo, printed by `--demo`.
const DEMO_INPUTS: &[&str] = &[
    "1 + 1",
    "   -1 + 3",
    " 2-1 + 2 ",
    "(1+(4+5+2)-3)+(6+8)",
    "3+2*2",
    " 3/2 ",
    " 3+5 / 2 ",
];

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DialectArg {
    /// `+`, `-` and parentheses
    Basic,
    /// `+`, `-`, `*`, `/` and parentheses
    Standard,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Basic => Dialect::Basic,
            DialectArg::Standard => Dialect::Standard,
        }
    }
}

/// Reckon - evaluate integer arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "reckon")]
#[command(about = "Evaluate integer arithmetic expressions", long_about = None)]
struct Args {
    /// Operator set to accept
    #[arg(long, value_enum, default_value = "standard")]
    dialect: DialectArg,

    /// Evaluate while parsing instead of building a tree first
    #[arg(long)]
    single_pass: bool,

    /// Maximum nesting of parentheses and unary operators
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum operand nesting while evaluating the tree
    #[arg(long)]
    max_eval_depth: Option<usize>,

    /// Print the parsed tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Evaluate the built-in sample inputs and exit
    #[arg(long)]
    demo: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn options(&self) -> CalcOptions {
        let defaults = CalcOptions::default();
        CalcOptions {
            dialect: self.dialect.into(),
            strategy: if self.single_pass {
                Strategy::SinglePass
            } else {
                Strategy::Tree
            },
            max_parse_depth: self.max_depth.unwrap_or(defaults.max_parse_depth),
            max_eval_depth: self.max_eval_depth.unwrap_or(defaults.max_eval_depth),
        }
    }
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );

    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create()
        .with_validator(Box::new(ParenValidator))
        .with_edit_mode(edit_mode);

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("reckon".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn interpret_input(calculator: &Calculator, input: &str, debug_parse: bool) {
    if input.trim().is_empty() {
        return;
    }

    if debug_parse {
        let arena = Bump::new();
        match calculator.parse(&arena, input) {
            Ok(parsed) => {
                println!("=== Parsed tree ===");
                println!("{}", parsed.expr);
                println!("{:#?}", parsed.expr);
                println!();
            }
            Err(e) => {
                render_error(input, &e);
                return;
            }
        }
    }

    match calculator.calculate(input) {
        Ok(value) => println!("{}", value),
        Err(e) => render_error(input, &e),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let calculator = Calculator::new(args.options());
    tracing::debug!(options = ?calculator.options(), "starting");

    if args.demo {
        for input in DEMO_INPUTS {
            print!("{:?} = ", input);
            interpret_input(&calculator, input, false);
        }
        return Ok(());
    }

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&calculator, expr, args.debug_parse);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline();

        println!("Reckon REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&calculator, &buffer, args.debug_parse);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            interpret_input(&calculator, &line, args.debug_parse);
        }
    }

    Ok(())
}
