use std::io::{self, Write};

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use transcript_eval::{ContributionSource, MeritSummary, RequirementReport};
use transcript_match::NormalizedDocument;
use transcript_model::RequirementResult;

use crate::commands::CertificateCheck;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Unmatched subjects go to stderr so stdout stays valid JSON.
pub fn print_unmatched(normalized: &NormalizedDocument) {
    if normalized.unmatched.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Unmatched subject"),
        header_cell("Grade"),
        header_cell("Best score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for name in &normalized.unmatched {
        let subject = normalized
            .document
            .subjects
            .iter()
            .find(|subject| &subject.name == name);
        let grade = subject.map_or("-", |subject| subject.grade.as_str());
        let score = subject
            .and_then(|subject| subject.fuzzy_match_score)
            .map_or_else(|| dim_cell("-"), |score| Cell::new(score).fg(Color::Yellow));
        table.add_row(vec![Cell::new(name), Cell::new(grade), score]);
    }
    eprintln!("{table}");
}

pub fn print_requirements(report: &RequirementReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Course"),
        header_cell("Required"),
        header_cell("Grade"),
        header_cell("Matched course"),
        header_cell("Via"),
        header_cell("Met"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);
    for result in report.results.values() {
        table.add_row(vec![
            Cell::new(&result.course_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&result.required_grade),
            optional_cell(result.student_grade.as_deref()),
            optional_cell(result.matched_course.as_deref()),
            via_cell(result),
            met_cell(result.is_met),
        ]);
    }
    println!("{table}");
    let verdict = if report.meets_all_requirements {
        "yes"
    } else {
        "no"
    };
    println!("Meets all requirements: {verdict}");
}

pub fn print_merit(summary: &MeritSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Course"),
        header_cell("Code"),
        header_cell("Grade"),
        header_cell("Points"),
        header_cell("Weighted"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for course in &summary.courses {
        table.add_row(vec![
            Cell::new(&course.course_name),
            Cell::new(&course.course_code),
            optional_cell(course.grade.as_deref()),
            Cell::new(course.points),
            Cell::new(format!("{:.1}", course.weighted)),
            source_cell(course.source),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(summary.total_course_points).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", summary.total_weighted_grade_points))
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    println!("Merit average: {:.2}", summary.average);
}

pub fn print_certificate(check: &CertificateCheck) {
    let verdict = if check.is_exam_certificate {
        "accepted exam certificate"
    } else {
        "not an accepted exam certificate"
    };
    println!("{}: {verdict}", check.path.display());
    println!("  Title: {}", check.title);
    println!("  School form: {}", check.school_form);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn via_cell(result: &RequirementResult) -> Cell {
    if result.met_by_higher_level_course {
        Cell::new("higher level").fg(Color::Cyan)
    } else if result.met_by_alternative_course {
        Cell::new("alternative").fg(Color::Cyan)
    } else {
        dim_cell("-")
    }
}

fn met_cell(is_met: bool) -> Cell {
    if is_met {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn source_cell(source: ContributionSource) -> Cell {
    match source {
        ContributionSource::Document => Cell::new("document"),
        ContributionSource::CatalogFallback => Cell::new("catalog").fg(Color::Yellow),
        ContributionSource::Skipped => dim_cell("skipped"),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
