use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keygrade::diagnostics::MissingLetters;
use keygrade::keys::{COLUMNS_PER_ROW, ROWS};
use keygrade::layouts::Layout;
use keygrade::penalties::Asymmetry;
use keygrade::scorer::{BigramContribution, GradeTable};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// One grid per hand side, rows 1-4 top to bottom. Columns run from the
/// outer pinky column inward on the first side and mirrored on the others.
pub fn print_layout_grid(layout: &Layout) {
    println!("\nLayout: {}", layout.name());

    let mut sides: Vec<char> = Vec::new();
    for (id, _) in layout.assignments() {
        if let Some(side) = id.side() {
            if !sides.contains(&side) {
                sides.push(side);
            }
        }
    }

    let mut table = new_table();
    let width = COLUMNS_PER_ROW as usize;
    for row in 1..=ROWS {
        let mut cells: Vec<Cell> = Vec::with_capacity(width * sides.len() + 1);
        let mut any = false;
        for (s, &side) in sides.iter().enumerate() {
            let mut line = vec![String::new(); width];
            for (id, token) in layout.assignments() {
                if id.side() != Some(side) || id.row() != Some(row) {
                    continue;
                }
                if let Some(col) = id.column() {
                    line[(col - 1) as usize] = token.clone();
                    any = true;
                }
            }
            if s > 0 {
                line.reverse();
                cells.push(Cell::new("|"));
            }
            cells.extend(
                line.into_iter()
                    .map(|t| Cell::new(t).set_alignment(CellAlignment::Center)),
            );
        }
        if any {
            table.add_row(cells);
        }
    }

    let unplaced: Vec<String> = layout
        .assignments()
        .iter()
        .filter(|(id, _)| id.row().is_none())
        .map(|(id, t)| format!("{}={}", id, t))
        .collect();

    println!("{}", table);
    if !unplaced.is_empty() {
        println!("Off-grid keys: {}", unplaced.join(" "));
    }
}

pub fn print_grade_table(grades: &GradeTable) {
    let mut table = new_table();

    let mut header = vec![Cell::new("Layout").add_attribute(Attribute::Bold)];
    header.extend(grades.languages.iter().map(|l| Cell::new(l).fg(Color::Cyan)));
    table.add_row(header);
    align_right(&mut table, 1..=grades.languages.len());

    for row in &grades.rows {
        let mut cells = vec![Cell::new(&row.layout).add_attribute(Attribute::Bold)];
        cells.extend(row.grades.iter().map(|g| Cell::new(format!("{:.4}", g))));
        table.add_row(cells);
    }
    println!("\n{}", table);
}

pub fn print_missing_letters(missing: &[MissingLetters]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Missing letters").fg(Color::Yellow),
    ]);
    for m in missing {
        let letters: Vec<String> = m.letters.iter().map(char::to_string).collect();
        table.add_row(vec![Cell::new(&m.layout), Cell::new(letters.join(" "))]);
    }
    println!("\n{}", table);
}

pub fn print_asymmetries(asymmetries: &[Asymmetry]) {
    println!("\nPenalty lookups are order-sensitive for these cells:");
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Pair").add_attribute(Attribute::Bold),
        Cell::new("Jump"),
        Cell::new("Value"),
        Cell::new("Swapped"),
        Cell::new("Swapped value").fg(Color::Red),
    ]);
    align_right(&mut table, 2..=2);
    align_right(&mut table, 4..=4);

    for a in asymmetries {
        let swapped = a
            .swapped
            .map_or_else(|| "missing".to_string(), |v| format!("{}", v));
        table.add_row(vec![
            Cell::new(a.pair.to_string()),
            Cell::new(a.jump.to_string()),
            Cell::new(format!("{}", a.value)),
            Cell::new(a.pair.swapped().to_string()),
            Cell::new(swapped),
        ]);
    }
    println!("{}", table);
}

pub fn print_cost_breakdown(
    layout: &str,
    language: &str,
    grade: f64,
    rows: &[BigramContribution],
) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("{} / {}", layout, language)).add_attribute(Attribute::Bold),
        Cell::new("Freq"),
        Cell::new("Cost"),
        Cell::new("Contrib").fg(Color::Cyan),
        Cell::new("% Grade"),
    ]);
    align_right(&mut table, 1..=4);

    for r in rows {
        let share = if grade > 0.0 {
            r.contribution / grade * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(r.bigram.to_string()),
            Cell::new(format!("{:.6}", r.frequency)),
            Cell::new(format!("{:.2}", r.cost)),
            Cell::new(format!("{:.6}", r.contribution)).fg(Color::Cyan),
            Cell::new(format!("{:.1}%", share)),
        ]);
    }
    println!("\n{}", table);
    println!("Grade: {:.4}", grade);
}
