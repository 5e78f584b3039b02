//! Text reports over transfer history and pending payment orders.
//!
//! Both reports emit one `\n`-terminated line per input item, in input order.
//! Columns are padded to the widest cell of the input, so identical input
//! always renders identically. An empty input renders as an empty string.

use ccx_types::{AmountFormat, PaymentOrder, TransferRecord};
use ccx_utils::format_timestamp;

/// Shown in place of a missing counterparty address (e.g. coinbase).
pub const UNKNOWN_ADDRESS: &str = "<UNKNOWN>";

const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

fn render_rows<const N: usize>(rows: &[[String; N]], align: [Align; N]) -> String {
    let mut widths = [0usize; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(COLUMN_GAP);
            }
            let pad = widths[i] - cell.chars().count();
            match align[i] {
                Align::Left => {
                    out.push_str(cell);
                    // No trailing blanks after the last column.
                    if i + 1 < N {
                        out.extend(std::iter::repeat(' ').take(pad));
                    }
                }
                Align::Right => {
                    out.extend(std::iter::repeat(' ').take(pad));
                    out.push_str(cell);
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Render transfers as `time  type  state  address  amount` lines.
///
/// Amounts are signed, so outgoing transfers carry a leading `-`.
pub fn transfer_report<'a, I>(format: &AmountFormat, transfers: I) -> String
where
    I: IntoIterator<Item = &'a TransferRecord>,
{
    let rows: Vec<[String; 5]> = transfers
        .into_iter()
        .map(|t| {
            [
                format_timestamp(t.timestamp),
                t.transfer_type.label().to_owned(),
                t.state.label().to_owned(),
                t.counterparty().unwrap_or(UNKNOWN_ADDRESS).to_owned(),
                format.format_signed(t.amount),
            ]
        })
        .collect();
    tracing::debug!(rows = rows.len(), "rendering transfer report");
    render_rows(
        &rows,
        [Align::Left, Align::Left, Align::Left, Align::Left, Align::Right],
    )
}

/// Render payment orders as `address  amount` lines.
pub fn order_report<'a, I>(format: &AmountFormat, orders: I) -> String
where
    I: IntoIterator<Item = &'a PaymentOrder>,
{
    let rows: Vec<[String; 2]> = orders
        .into_iter()
        .map(|o| [o.address.clone(), format.format_unsigned(o.amount)])
        .collect();
    tracing::debug!(rows = rows.len(), "rendering order report");
    render_rows(&rows, [Align::Left, Align::Right])
}
