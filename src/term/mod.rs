extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::{Colour, Style};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use playground::error;
use playground::lang::Error;
use playground::mach::{Outcome, Runtime, IDLE};
use playground::sample;
use std::fs;
use std::sync::atomic::Ordering;
use std::sync::Arc;

const PROMPT: &str = ">>> ";

pub fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let tracing = match args.iter().position(|arg| arg == "--trace") {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    };
    let mut runtime = Runtime::default();
    runtime.set_trace(tracing);
    let interrupted = runtime.interrupt_flag();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
    }
    match args.first() {
        Some(filename) => {
            if !run_file(&mut runtime, filename) {
                std::process::exit(1);
            }
        }
        None => {
            if let Err(error) = main_loop(&mut runtime) {
                eprintln!("{}", error);
            }
        }
    }
}

fn run_file(runtime: &mut Runtime, filename: &str) -> bool {
    let source = match load(filename) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return false;
        }
    };
    let outcome = runtime.run(&source);
    print!("{}", decorate_outcome(&outcome));
    outcome.is_ok()
}

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Run,
    List,
    New,
    Load(&'a str),
    Samples,
    Trace(bool),
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Editor commands start with a colon. Everything else is code.
    fn parse(line: &'a str) -> Option<Command<'a>> {
        let line = line.trim();
        let line = line.strip_prefix(':')?;
        let mut words = line.splitn(2, char::is_whitespace);
        let name = words.next().unwrap_or("");
        let arg = words.next().unwrap_or("").trim();
        Some(match (name, arg) {
            ("run", "") => Command::Run,
            ("list", "") => Command::List,
            ("new", "") => Command::New,
            ("load", arg) if !arg.is_empty() => Command::Load(arg),
            ("samples", "") => Command::Samples,
            ("trace", "on") => Command::Trace(true),
            ("trace", "off") => Command::Trace(false),
            ("quit", "") => Command::Quit,
            _ => Command::Unknown(line),
        })
    }
}

fn main_loop(runtime: &mut Runtime) -> std::io::Result<()> {
    let interface = Interface::new("playground")?;
    interface.set_prompt(PROMPT)?;
    interface.set_completer(Arc::new(LoadCompleter));
    let mut code: Vec<String> = sample::sample("default")
        .lines()
        .map(String::from)
        .collect();
    interface.write_fmt(format_args!(
        "{}\n{}\n",
        Style::new().bold().paint("Python Playground"),
        IDLE
    ))?;

    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        interface.add_history_unique(line.clone());
        let command = match Command::parse(&line) {
            Some(command) => command,
            None => {
                code.push(line);
                continue;
            }
        };
        match command {
            Command::Run => {
                let outcome = runtime.run(&code.join("\n"));
                interface.write_fmt(format_args!("{}", decorate_outcome(&outcome)))?;
            }
            Command::List => {
                for (index, line) in code.iter().enumerate() {
                    interface.write_fmt(format_args!(
                        "{} {}\n",
                        Style::new().dimmed().paint(format!("{:>3}", index + 1)),
                        line
                    ))?;
                }
            }
            Command::New => {
                code.clear();
                interface.write_fmt(format_args!("{}\n", IDLE))?;
            }
            Command::Load(name) => {
                let source = if sample::is_sample(name) {
                    Ok(sample::sample(name).to_string())
                } else {
                    load(name)
                };
                match source {
                    Ok(source) => {
                        code = source.lines().map(String::from).collect();
                        let outcome = runtime.run(&source);
                        interface.write_fmt(format_args!("{}", decorate_outcome(&outcome)))?;
                    }
                    Err(error) => interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?,
                }
            }
            Command::Samples => {
                for name in sample::names() {
                    interface.write_fmt(format_args!("{}\n", name))?;
                }
            }
            Command::Trace(tracing) => runtime.set_trace(tracing),
            Command::Quit => break,
            Command::Unknown(line) => interface.write_fmt(format_args!(
                "{}\n",
                Style::new()
                    .bold()
                    .paint(format!("Unknown command :{}", line))
            ))?,
        }
    }
    Ok(())
}

/// Completes sample names after `:load`.
struct LoadCompleter;

impl<Term: Terminal> Completer<Term> for LoadCompleter {
    fn complete(
        &self,
        word: &str,
        prompter: &Prompter<Term>,
        start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if !prompter.buffer()[..start].trim_end().ends_with(":load") {
            return None;
        }
        let completions: Vec<Completion> = sample::names()
            .filter(|name| name.starts_with(word))
            .map(|name| Completion::simple(name.to_string()))
            .collect();
        if completions.is_empty() {
            None
        } else {
            Some(completions)
        }
    }
}

fn decorate_outcome(outcome: &Outcome) -> String {
    let mut out = String::new();
    if !outcome.trace().is_empty() {
        let trace: String = outcome
            .trace()
            .iter()
            .map(|line_number| format!("[{}]", line_number))
            .collect();
        out.push_str(&format!("{}\n", Style::new().dimmed().paint(trace)));
    }
    let header = if outcome.is_ok() {
        Colour::Green.bold().paint(outcome.header())
    } else {
        Colour::Red.bold().paint(outcome.header())
    };
    out.push_str(&format!("{}\n{}", header, outcome.body()));
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn load(filename: &str) -> Result<String, Error> {
    match fs::read_to_string(filename) {
        Ok(source) => Ok(source.replace("\r\n", "\n")),
        Err(error) => Err(error!(InternalError; &format!("{}: {}", filename, error))),
    }
}
