pub mod export_xlsx;

pub use export_xlsx::{export_results_xlsx, results_workbook, save_results_xlsx};
