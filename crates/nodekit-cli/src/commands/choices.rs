//! Implementation of the `nodekit choices` command.

use std::collections::BTreeMap;

use nodekit_core::domain::{
    Answers, Database, Framework, Orm, QuestionId, available_choices, capabilities,
};

use crate::{
    cli::{ChoicesArgs, ChoicesFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ChoicesArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let mut answers = Answers::new();
    if let Some(db) = args.database {
        answers.insert(QuestionId::Database, Database::from(db).as_str());
    }

    let choices: BTreeMap<&'static str, Vec<&'static str>> = QuestionId::ALL
        .into_iter()
        .map(|id| (id.as_str(), available_choices(id, &answers)))
        .collect();

    match args.format {
        ChoicesFormat::Json => output.json(&choices)?,

        ChoicesFormat::List => {
            for id in QuestionId::ALL {
                for choice in &choices[id.as_str()] {
                    output.print(&format!("{id}={choice}"))?;
                }
            }
        }

        ChoicesFormat::Table => {
            for id in QuestionId::ALL {
                output.header(&format!("{}:", capitalise(id.as_str())))?;
                for choice in &choices[id.as_str()] {
                    output.print(&format!("  {choice:<12} {}", packages_for(id, choice)))?;
                }
                output.print("")?;
            }
        }
    }

    Ok(())
}

/// Packages a single choice installs, for the table view.
fn packages_for(id: QuestionId, choice: &str) -> String {
    const NONE: &[&str] = &[];
    let (runtime, development) = match id {
        QuestionId::Framework => match choice.parse::<Framework>() {
            Ok(f) => (capabilities::framework_packages(f), NONE),
            Err(_) => (NONE, NONE),
        },
        QuestionId::Database => match choice.parse::<Database>() {
            Ok(d) => (capabilities::database_packages(d), NONE),
            Err(_) => (NONE, NONE),
        },
        QuestionId::Orm => match choice.parse::<Orm>() {
            Ok(o) => (
                capabilities::orm_packages(o),
                capabilities::orm_dev_packages(o),
            ),
            Err(_) => (NONE, NONE),
        },
    };

    let mut line = if runtime.is_empty() {
        "-".to_owned()
    } else {
        runtime.join(", ")
    };
    if !development.is_empty() {
        line.push_str(&format!("  (dev: {})", development.join(", ")));
    }
    line
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
