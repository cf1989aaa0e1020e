//! List command implementation

use anyhow::Result;
use nf_core::{build_query, build_variables, graphql_type};
use nf_suite::PlannedCase;
use serde::Serialize;

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::commands::common::{load_config, plan_cases};

/// Execute the ls command
pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global, &args.selection)?;
    let cases = plan_cases(&config)?;

    let info: Vec<CaseInfo> = cases.iter().map(CaseInfo::from).collect();

    match args.output {
        LsOutput::Table => print_table(&info),
        LsOutput::Json => println!("{}", serde_json::to_string_pretty(&info)?),
    }

    Ok(())
}

/// Planned case information for display
#[derive(Debug, Serialize)]
struct CaseInfo {
    name: String,
    argument_type: String,
    variable_type: Option<String>,
    query: String,
    variables: Option<serde_json::Map<String, serde_json::Value>>,
}

impl From<&PlannedCase> for CaseInfo {
    fn from(case: &PlannedCase) -> Self {
        let combination = &case.combination;
        Self {
            name: case.name(),
            argument_type: graphql_type(&combination.argument),
            variable_type: combination.variable.as_ref().map(|v| graphql_type(&v.ty)),
            query: build_query(combination),
            variables: build_variables(combination),
        }
    }
}

/// Print cases in table format
fn print_table(cases: &[CaseInfo]) {
    let name_width = cases.iter().map(|c| c.name.len()).max().unwrap_or(4).max(4);
    let type_width = 12;

    println!(
        "{:<name_width$}  {:<type_width$}  {:<type_width$}  QUERY",
        "NAME",
        "ARGUMENT",
        "VARIABLE",
        name_width = name_width,
        type_width = type_width
    );
    println!(
        "{:-<name_width$}  {:-<type_width$}  {:-<type_width$}  {}",
        "",
        "",
        "",
        "-".repeat(40),
        name_width = name_width,
        type_width = type_width
    );

    for case in cases {
        let query = match &case.variables {
            Some(variables) => format!(
                "{}  {}",
                case.query,
                serde_json::Value::Object(variables.clone())
            ),
            None => case.query.clone(),
        };
        println!(
            "{:<name_width$}  {:<type_width$}  {:<type_width$}  {}",
            case.name,
            case.argument_type,
            case.variable_type.as_deref().unwrap_or("-"),
            query,
            name_width = name_width,
            type_width = type_width
        );
    }

    println!();
    println!("{} cases", cases.len());
}
