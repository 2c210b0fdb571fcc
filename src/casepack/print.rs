use casepack::commands::{CmdMessage, ListedCase, MessageLevel};
use colored::Colorize;
use unicode_width::UnicodeWidthChar;

// The listing shows the first 30 columns of each field, display-only.
const PREVIEW_WIDTH: usize = 30;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_cases(cases: &[ListedCase]) {
    if cases.is_empty() {
        println!("No test cases yet.");
        return;
    }
    for lc in cases {
        println!(
            "{} | Input: {} | Output: {}",
            format!("#{}", lc.number).yellow(),
            preview(&lc.case.input),
            preview(&lc.case.output)
        );
    }
}

pub(crate) fn print_full_case(lc: &ListedCase) {
    println!("{} {}", format!("#{}", lc.number).yellow(), "Input".bold());
    println!("{}", lc.case.input);
    println!("{}", "Output".bold());
    println!("{}", lc.case.output);
}

fn preview(text: &str) -> String {
    let mut result = String::new();
    let mut width = 0;

    for c in text.chars() {
        let c = if c == '\n' { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if width + char_width > PREVIEW_WIDTH {
            break;
        }
        result.push(c);
        width += char_width;
    }

    result.push_str("...");
    result
}
