//! Terminal rendering of option lists and result tables.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use esim_core::{DISPLAY_COLUMNS, Projection};

/// Shown in place of a table until a dataset kind is chosen.
pub const CHOOSE_DATASET_MESSAGE: &str = "Please choose a dataset";

/// Shown when the filters match no plan.
pub const NO_PLANS_MESSAGE: &str = "No plans match the selected filters";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Magenta)
        .add_attribute(Attribute::Bold)
}

/// One-column table listing the next filter level's choices.
pub fn options_table(header: &str, values: &[String]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell(header)]);
    for value in values {
        table.add_row(vec![Cell::new(value)]);
    }
    table
}

/// The result table, or the message to show instead.
pub fn plans_view(projection: &Projection, selected: Option<usize>) -> Result<Table, &'static str> {
    let Some(result_set) = projection.result_set() else {
        return Err(CHOOSE_DATASET_MESSAGE);
    };
    if result_set.is_empty() {
        return Err(NO_PLANS_MESSAGE);
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    let mut header = vec![header_cell("#")];
    header.extend(DISPLAY_COLUMNS.iter().map(|column| header_cell(column)));
    table.set_header(header);
    for (index, row) in result_set.rows().iter().enumerate() {
        let mut number = Cell::new(index + 1).set_alignment(CellAlignment::Right);
        if selected == Some(index) {
            number = number.fg(Color::Green).add_attribute(Attribute::Bold);
        }
        let mut cells = vec![number];
        cells.extend(row.display.cells().into_iter().map(Cell::new));
        table.add_row(cells);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_kind_renders_choose_message() {
        assert_eq!(
            plans_view(&Projection::ChooseDataset, None).err(),
            Some(CHOOSE_DATASET_MESSAGE)
        );
    }

    #[test]
    fn options_table_lists_values() {
        let table = options_table("Destination", &["France".to_string(), "Japan".to_string()]);
        let rendered = table.to_string();
        assert!(rendered.contains("Destination"));
        assert!(rendered.contains("France"));
        assert!(rendered.contains("Japan"));
    }
}
