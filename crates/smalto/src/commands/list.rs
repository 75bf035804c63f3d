use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use smalto_core::Window;
use smalto_core::{config, select_rule};

/// Lists visible windows and the rule that currently governs each.
///
/// Rules are read from disk, so this shows what a sweep would do right
/// now — whether or not the daemon is running.
pub fn execute() {
    let windows = smalto_windows::enumerate_windows().expect("failed to enumerate windows");
    let rules = config::load_rules();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("Class"),
            Cell::new("Process"),
            Cell::new("Rule"),
        ]);

    let mut count = 0;
    for window in &windows {
        let title = window.title().unwrap_or_default();
        if title.is_empty() || window.is_owned() {
            continue;
        }

        let rule = select_rule(window, &rules)
            .map(|r| r.to_string())
            .unwrap_or("-".into());

        table.add_row(vec![
            Cell::new(format!("0x{:X}", window.handle())),
            Cell::new(title),
            Cell::new(window.class().unwrap_or_default()),
            Cell::new(window.process_name().unwrap_or_default()),
            Cell::new(rule),
        ]);
        count += 1;
    }

    println!("{table}");
    println!("\n{count} windows found");
}
