//! # Vectorization Helpers
//!
//! Plain-vector layouts for downstream numeric consumers:
//! * [`force_list_length`] - truncate or pad a list to a fixed length,
//! * [`vectorize_record`] / [`vectorize_records`] - fixed-shape context layout,
//! * [`multitask_to_records`] - tabular data as reading records.

mod padding;
mod tabular;
mod vectorized_record;

#[doc(inline)]
pub use padding::force_list_length;
#[doc(inline)]
pub use tabular::{ROW_KEY, multitask_to_records};
#[doc(inline)]
pub use vectorized_record::{VectorizedRecord, vectorize_record, vectorize_records};
