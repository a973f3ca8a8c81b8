use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use subcrack_core::alphabet;
use subcrack_core::consts::ALPHABET_LEN;
use subcrack_core::permutation::Permutation;
use subcrack_core::sampler::CrackOutcome;

fn visible(sym: u8) -> char {
    let c = alphabet::char_of(sym);
    if c == ' ' {
        '_'
    } else {
        c
    }
}

/// Two-row mapping table: the ciphertext alphabet over the plaintext
/// symbols the recovered key assigns to it. The space symbol renders
/// as '_'.
pub fn print_key_table(key: &Permutation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut cipher_row = vec![Cell::new("Cipher").add_attribute(Attribute::Bold)];
    let mut plain_row = vec![Cell::new("Plain").add_attribute(Attribute::Bold)];
    for i in 0..ALPHABET_LEN {
        cipher_row.push(Cell::new(visible(i as u8)));
        plain_row.push(Cell::new(visible(key.image(i as u8))).fg(Color::Cyan));
    }
    table.add_row(cipher_row);
    table.add_row(plain_row);

    println!("\n{}", table);
}

pub fn print_summary(outcome: &CrackOutcome) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Energy").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", outcome.energy))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Iterations").add_attribute(Attribute::Bold),
        Cell::new(outcome.iterations).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Accepted").add_attribute(Attribute::Bold),
        Cell::new(outcome.accepted).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Stop reason").add_attribute(Attribute::Bold),
        Cell::new(outcome.stop).set_alignment(CellAlignment::Right),
    ]);

    println!("\n{}", table);
}
