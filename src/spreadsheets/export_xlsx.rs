use crate::domain::results::{Column, ResultSet, Summary};
use crate::scraper::ScraperError;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

/// Builds a workbook with a "Results" sheet and, when given, a "Summary" sheet.
pub fn results_workbook(results: &ResultSet, summary: Option<&Summary>) -> Result<Workbook, ScraperError> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    write_results(worksheet, results)
        .map_err(|e| ScraperError::Export(format!("Failed to write results sheet: {e}")))?;

    if let Some(summary) = summary {
        let worksheet = workbook.add_worksheet();
        write_summary(worksheet, summary)
            .map_err(|e| ScraperError::Export(format!("Failed to write summary sheet: {e}")))?;
    }

    Ok(workbook)
}

pub fn export_results_xlsx(results: &ResultSet, summary: Option<&Summary>) -> Result<Vec<u8>, ScraperError> {
    results_workbook(results, summary)?
        .save_to_buffer()
        .map_err(|e| ScraperError::Export(format!("Failed to build workbook: {e}")))
}

pub fn save_results_xlsx(
    results: &ResultSet,
    summary: Option<&Summary>,
    path: impl AsRef<Path>,
) -> Result<(), ScraperError> {
    let path = path.as_ref();
    results_workbook(results, summary)?
        .save(path)
        .map_err(|e| ScraperError::Export(format!("Failed to save {}: {e}", path.display())))
}

fn write_results(worksheet: &mut Worksheet, results: &ResultSet) -> Result<(), XlsxError> {
    worksheet.set_name("Results")?;

    // Headers
    for (col, column) in Column::ALL.iter().enumerate() {
        worksheet.write_string(0, col as u16, column.name())?;
    }

    // Rows
    for (i, listing) in results.listings().iter().enumerate() {
        let r = (i + 1) as u32;

        if let Some(price) = listing.price {
            worksheet.write_number(r, 0, price)?;
        }
        worksheet.write_string(r, 1, listing.type_label.as_deref().unwrap_or(""))?;
        worksheet.write_string(r, 2, &listing.address)?;
        worksheet.write_string(r, 3, listing.url.as_deref().unwrap_or(""))?;
        worksheet.write_string(r, 4, listing.agent_url.as_deref().unwrap_or(""))?;
        worksheet.write_string(r, 5, listing.floorplan_url.as_deref().unwrap_or(""))?;
        worksheet.write_string(r, 6, listing.postcode.as_deref().unwrap_or(""))?;
        worksheet.write_string(r, 7, listing.full_postcode.as_deref().unwrap_or(""))?;
        if let Some(bedrooms) = listing.number_bedrooms {
            worksheet.write_number(r, 8, bedrooms as f64)?;
        }
        worksheet.write_string(r, 9, listing.search_date.format("%Y-%m-%d %H:%M:%S").to_string())?;
    }

    Ok(())
}

fn write_summary(worksheet: &mut Worksheet, summary: &Summary) -> Result<(), XlsxError> {
    worksheet.set_name("Summary")?;

    worksheet.write_string(0, 0, summary.column.name())?;
    worksheet.write_string(0, 1, "count")?;
    worksheet.write_string(0, 2, "price_mean")?;

    for (i, row) in summary.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, row.group_key.to_string())?;
        worksheet.write_number(r, 1, row.count as f64)?;
        worksheet.write_number(r, 2, row.price_mean)?;
    }

    Ok(())
}
