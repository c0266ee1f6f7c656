//! Small phone directory workbook written the way HR lays out the real one.

use std::path::Path;

use rust_xlsxwriter::Workbook;

/// Row 1 is blank, rows 2-3 hold the title and column headers, then one
/// regular contact, one shared internal line and the three-row footer.
pub(crate) fn write_directory(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(1, 0, "Telefonní seznam").unwrap();
    for (col, header) in ["Příjmení a jméno", "Funkce", "Telefon", "Služební", "Klapka"]
        .into_iter()
        .enumerate()
    {
        sheet.write_string(2, col as u16, header).unwrap();
    }

    sheet.write_string(3, 0, "Malá Jana").unwrap();
    sheet.write_string(3, 1, "Účetní").unwrap();
    sheet.write_number(3, 3, 602123456.0).unwrap();
    sheet.write_number(3, 4, 245.0).unwrap();

    sheet.write_string(4, 0, "Interní").unwrap();
    sheet.write_string(4, 1, "Recepce").unwrap();
    sheet.write_number(4, 2, 100.0).unwrap();

    sheet.write_string(5, 0, "Aktualizace: 1.3.2025").unwrap();
    sheet.write_string(6, 0, "Poppe + Potthoff").unwrap();
    sheet.write_string(7, 0, "www.poppe-potthoff.cz").unwrap();

    workbook.save(path).unwrap();
}
