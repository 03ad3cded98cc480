//! Exports all transactions as an Excel spreadsheet.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionStore},
};

/// The MIME type for `.xlsx` files.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// The name the browser saves the export as.
pub const EXPORT_FILE_NAME: &str = "Transactions.xlsx";

/// The name of the only worksheet in the export.
pub const WORKSHEET_NAME: &str = "Transactions";

/// The column titles in the first row of the worksheet.
pub const HEADER_ROW: [&str; 5] = ["Date", "Description", "Category", "Type", "Amount"];

const HEADER_FILL: Color = Color::RGB(0xD3D3D3);

const SHORT_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The state needed to export transactions.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// The store to export transactions from.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler that responds with every transaction as an `.xlsx` file download.
pub async fn export_transactions_endpoint(
    State(state): State<ExportState>,
) -> Result<Response, Error> {
    // Copy the transactions so the lock is not held while the workbook is built.
    let transactions = state
        .transaction_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .list()
        .to_vec();

    let spreadsheet = build_spreadsheet(&transactions)?;
    tracing::debug!(
        "Exported {} transactions ({} bytes)",
        transactions.len(),
        spreadsheet.len()
    );

    Ok((
        [
            (CONTENT_TYPE, XLSX_CONTENT_TYPE.to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        spreadsheet,
    )
        .into_response())
}

/// Write `transactions` to an in-memory `.xlsx` workbook with a single worksheet.
///
/// The first row holds the bold, grey-filled column titles in [HEADER_ROW],
/// followed by one row per transaction in the order given. Columns are
/// sized to fit their contents.
///
/// # Errors
/// Returns [Error::ExportError] if the workbook could not be written.
pub fn build_spreadsheet(transactions: &[Transaction]) -> Result<Vec<u8>, Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(WORKSHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(HEADER_FILL);

    for (column, title) in (0u16..).zip(HEADER_ROW) {
        worksheet.write_string_with_format(0, column, title, &header_format)?;
    }

    for (row, transaction) in (1u32..).zip(transactions) {
        let date = transaction
            .date
            .format(SHORT_DATE_FORMAT)
            .map_err(|error| Error::ExportError(error.to_string()))?;

        worksheet.write_string(row, 0, date)?;
        worksheet.write_string(row, 1, &transaction.description)?;
        worksheet.write_string(row, 2, &transaction.category)?;
        worksheet.write_string(row, 3, transaction.transaction_type.as_str())?;
        worksheet.write_number(row, 4, transaction.amount)?;
    }

    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use std::{
        io::Cursor,
        sync::{Arc, Mutex},
    };

    use axum::{
        extract::State,
        http::{
            StatusCode,
            header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        },
    };
    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
    use time::macros::date;

    use crate::{
        export::{
            ExportState, HEADER_ROW, WORKSHEET_NAME, XLSX_CONTENT_TYPE, build_spreadsheet,
            export_transactions_endpoint,
        },
        transaction::{Transaction, TransactionStore, TransactionType, create_transaction},
    };

    fn read_rows(spreadsheet: Vec<u8>) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> =
            open_workbook_from_rs(Cursor::new(spreadsheet)).expect("could not open workbook");
        assert_eq!(workbook.sheet_names(), vec![WORKSHEET_NAME.to_owned()]);

        let range = workbook
            .worksheet_range(WORKSHEET_NAME)
            .expect("could not read worksheet");

        range.rows().map(|row| row.to_vec()).collect()
    }

    fn header() -> Vec<Data> {
        HEADER_ROW
            .iter()
            .map(|title| Data::String((*title).to_owned()))
            .collect()
    }

    #[test]
    fn empty_store_exports_only_header() {
        let rows = read_rows(build_spreadsheet(&[]).unwrap());

        assert_eq!(rows, vec![header()]);
    }

    #[test]
    fn exports_one_row_per_transaction_in_order() {
        let mut store = TransactionStore::new();
        create_transaction(
            Transaction::build(TransactionType::Income, 100.0, date!(2024 - 01 - 01))
                .description("Salary")
                .category("Work"),
            &mut store,
        );
        create_transaction(
            Transaction::build(TransactionType::Expense, -50.0, date!(2024 - 01 - 02))
                .description("Groceries")
                .category("Food"),
            &mut store,
        );

        let rows = read_rows(build_spreadsheet(store.list()).unwrap());

        assert_eq!(
            rows,
            vec![
                header(),
                vec![
                    Data::String("2024-01-01".to_owned()),
                    Data::String("Salary".to_owned()),
                    Data::String("Work".to_owned()),
                    Data::String("Income".to_owned()),
                    Data::Float(100.0),
                ],
                vec![
                    Data::String("2024-01-02".to_owned()),
                    Data::String("Groceries".to_owned()),
                    Data::String("Food".to_owned()),
                    Data::String("Expense".to_owned()),
                    Data::Float(-50.0),
                ],
            ]
        );
    }

    #[tokio::test]
    async fn endpoint_responds_with_xlsx_attachment() {
        let mut store = TransactionStore::new();
        create_transaction(
            Transaction::build(TransactionType::Expense, 12.5, date!(2024 - 03 - 04)),
            &mut store,
        );
        let state = ExportState {
            transaction_store: Arc::new(Mutex::new(store)),
        };

        let response = export_transactions_endpoint(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            XLSX_CONTENT_TYPE
        );
        assert_eq!(
            response.headers().get(CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"Transactions.xlsx\""
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let rows = read_rows(body.to_vec());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][4], Data::Float(-12.5));
    }
}
