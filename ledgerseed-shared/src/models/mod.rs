/// Seed record types
///
/// Each module pairs a `Create*` record (seed input, validated, implements
/// `SeedTable`) with the stored row type read back from the database.
///
/// # Models
///
/// - `user`: User accounts with Argon2id-hashed passwords
/// - `customer`: Customers
/// - `invoice`: Invoices referencing customers
/// - `revenue`: Monthly revenue totals

pub mod customer;
pub mod invoice;
pub mod revenue;
pub mod user;
