use super::open_document;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use formdeck_editor::{audit_form, validate_answer, DiagnosticLevel};
use formdeck_model::Form;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Check a sample answer: <slide>/<content>=<value>
    #[arg(short, long, value_parser = parse_answer)]
    pub answer: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub slide_id: String,
    pub content_id: String,
    pub value: String,
}

fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (target, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <slide>/<content>=<value>, got '{}'", raw))?;
    let (slide_id, content_id) = target
        .split_once('/')
        .ok_or_else(|| format!("expected <slide>/<content> before '=', got '{}'", target))?;
    Ok(Answer {
        slide_id: slide_id.to_string(),
        content_id: content_id.to_string(),
        value: value.to_string(),
    })
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = open_document(&config, cwd)?;
    let form = document.form();

    let diagnostics = audit_form(form);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = diagnostics
        .iter()
        .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
        .count();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        println!("🔍 {} {}", "Auditing".green().bold(), document.path.display());
        for diagnostic in &diagnostics {
            if !args.verbose && matches!(diagnostic.level, DiagnosticLevel::Info) {
                continue;
            }
            let level_str = match diagnostic.level {
                DiagnosticLevel::Error => "error".red().bold(),
                DiagnosticLevel::Warning => "warning".yellow().bold(),
                DiagnosticLevel::Info => "info".blue().bold(),
            };
            println!(
                "  {} [{}] {}: {}",
                level_str, diagnostic.rule, diagnostic.location, diagnostic.message
            );
            if let Some(suggestion) = &diagnostic.suggestion {
                println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
            }
        }
    }

    let mut rejected = 0;
    for answer in &args.answer {
        match check_answer(form, answer)? {
            Ok(()) => println!(
                "  {} {}/{} accepts '{}'",
                "✓".green(),
                answer.slide_id,
                answer.content_id,
                answer.value
            ),
            Err(message) => {
                rejected += 1;
                println!(
                    "  {} {}/{} rejects '{}': {}",
                    "✗".red(),
                    answer.slide_id,
                    answer.content_id,
                    answer.value,
                    message
                );
            }
        }
    }

    if args.format != "json" {
        println!();
        println!("   Total diagnostics: {}", diagnostics.len());
        if errors > 0 {
            println!("   {} {}", "Errors:".red(), errors);
        }
        if warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), warnings);
        }
        if errors == 0 && warnings == 0 {
            println!("   {} No issues found!", "✓".green());
        }
    }

    if errors > 0 || rejected > 0 {
        return Err(anyhow!(
            "{} audit errors, {} rejected answers",
            errors,
            rejected
        ));
    }
    Ok(())
}

/// Outer error: the target is not a question; inner: the answer's message
fn check_answer(form: &Form, answer: &Answer) -> Result<Result<(), String>> {
    let question = form
        .find_slide(&answer.slide_id)
        .and_then(|slide| slide.find_content(&answer.content_id))
        .and_then(|item| item.question_design())
        .ok_or_else(|| {
            anyhow!(
                "No question {}/{} in the form",
                answer.slide_id,
                answer.content_id
            )
        })?;
    Ok(validate_answer(question, &answer.value).map_err(|e| e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        let answer = parse_answer("question_1/question_1=a=b").unwrap();
        assert_eq!(answer.slide_id, "question_1");
        assert_eq!(answer.content_id, "question_1");
        assert_eq!(answer.value, "a=b");

        assert!(parse_answer("question_1=x").is_err());
        assert!(parse_answer("question_1/question_1").is_err());
    }

    #[test]
    fn test_check_answer() {
        let form = Form::default();
        let blank = Answer {
            slide_id: "question_1".to_string(),
            content_id: "question_1".to_string(),
            value: String::new(),
        };
        assert_eq!(
            check_answer(&form, &blank).unwrap(),
            Err("This field is required".to_string())
        );

        let not_a_question = Answer {
            content_id: "text_1".to_string(),
            slide_id: "welcome".to_string(),
            ..blank
        };
        assert!(check_answer(&form, &not_a_question).is_err());
    }
}
