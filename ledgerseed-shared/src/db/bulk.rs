/// Sizing for multi-row `INSERT` statements
///
/// PostgreSQL's wire protocol carries the parameter count in a 16-bit
/// field, so a single statement may bind at most 65 535 values. Seed inserts
/// are split into chunks that stay under that limit.

/// Maximum number of bind parameters in one PostgreSQL statement
pub const MAX_BIND_PARAMS: usize = 65_535;

/// Number of rows that fit in one statement binding `columns` values per row
///
/// Always at least 1.
pub const fn rows_per_statement(columns: usize) -> usize {
    if columns == 0 || columns >= MAX_BIND_PARAMS {
        1
    } else {
        MAX_BIND_PARAMS / columns
    }
}
