use crate::answer::{ConstraintAnswer, VariableAnswer};
use crate::sensitivity::{ConstraintSensitivity, VariableSensitivity};

/// Render the variable answer table as aligned plain text
pub fn variable_answers(rows: &[VariableAnswer]) -> String {
    layout(
        &["Name", "Final Value", "Variable Type"],
        rows.iter().map(|r| {
            vec![
                r.name.clone(),
                r.final_value.to_string(),
                r.vartype.short_code().to_string(),
            ]
        }),
    )
}

/// Render the constraint answer table as aligned plain text
pub fn constraint_answers(rows: &[ConstraintAnswer]) -> String {
    layout(
        &["Name", "Status", "Slack"],
        rows.iter().map(|r| {
            vec![
                r.name.clone(),
                r.status.to_string(),
                r.slack.to_string(),
            ]
        }),
    )
}

/// Render the variable sensitivity table as aligned plain text
pub fn variable_sensitivities(rows: &[VariableSensitivity]) -> String {
    layout(
        &[
            "Name",
            "Final Value",
            "Reduced Cost",
            "Objective Coefficient",
            "Allowable Increase",
            "Allowable Decrease",
        ],
        rows.iter().map(|r| {
            vec![
                r.name.clone(),
                r.final_value.to_string(),
                r.reduced_cost.to_string(),
                r.objective_coefficient.to_string(),
                r.allowable_increase.to_string(),
                r.allowable_decrease.to_string(),
            ]
        }),
    )
}

/// Render the constraint sensitivity table as aligned plain text
pub fn constraint_sensitivities(rows: &[ConstraintSensitivity]) -> String {
    layout(
        &[
            "Name",
            "Final Value",
            "Shadow Price",
            "Constraint RHS",
            "Allowable Increase",
            "Allowable Decrease",
        ],
        rows.iter().map(|r| {
            vec![
                r.name.clone(),
                r.final_value.to_string(),
                r.shadow_price.to_string(),
                r.rhs.to_string(),
                r.allowable_increase.to_string(),
                r.allowable_decrease.to_string(),
            ]
        }),
    )
}

/// Lay out a header and rows as left-aligned columns separated by two spaces
fn layout<I>(headers: &[&str], rows: I) -> String
where
    I: Iterator<Item = Vec<String>>,
{
    let rows: Vec<Vec<String>> = rows.collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    for row in rows {
        write_row(&mut out, row.into_iter(), &widths);
    }
    out
}

fn write_row<I>(out: &mut String, cells: I, widths: &[usize])
where
    I: Iterator<Item = String>,
{
    let mut line = String::new();
    for (cell, &width) in cells.zip(widths) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
